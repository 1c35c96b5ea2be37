use actor_store::{StoreActor, StoreEntity, StoreError};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Ticket {
    id: u32,
    label: String,
    closed: bool,
}

#[derive(Debug)]
struct TicketCreate {
    label: String,
}

#[derive(Debug)]
struct TicketUpdate {
    closed: bool,
}

#[derive(Debug, thiserror::Error)]
#[error("Ticket error")]
struct TicketError;

#[async_trait]
impl StoreEntity for Ticket {
    type Id = u32;
    type Create = TicketCreate;
    type Update = TicketUpdate;
    type Context = ();
    type Error = TicketError;

    fn from_create_params(seq: u32, params: TicketCreate, _ctx: &()) -> Result<Self, TicketError> {
        Ok(Self {
            id: seq,
            label: params.label,
            closed: false,
        })
    }

    fn id(&self) -> u32 {
        self.id
    }

    async fn on_update(&mut self, update: TicketUpdate, _ctx: &()) -> Result<(), TicketError> {
        self.closed = update.closed;
        Ok(())
    }
}

// --- Tests ---

#[tokio::test]
async fn test_store_full_lifecycle() {
    let (actor, client) = StoreActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    // 1. Create: first sequence number is 1
    let first = client
        .create(TicketCreate {
            label: "window".into(),
        })
        .await
        .unwrap();
    assert_eq!(first.id, 1);

    let second = client
        .create(TicketCreate {
            label: "drive".into(),
        })
        .await
        .unwrap();
    assert_eq!(second.id, 2);

    // 2. List: insertion order
    let all = client.list().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].label, "window");
    assert_eq!(all[1].label, "drive");

    // 3. Get
    let fetched = client.get(2).await.unwrap().unwrap();
    assert_eq!(fetched.label, "drive");
    assert!(client.get(99).await.unwrap().is_none());

    // 4. Update
    let updated = client.update(1, TicketUpdate { closed: true }).await.unwrap();
    assert!(updated.closed);

    // 5. Clear resets the counter
    client.clear().await.unwrap();
    assert!(client.list().await.unwrap().is_empty());
    let restart = client
        .create(TicketCreate {
            label: "again".into(),
        })
        .await
        .unwrap();
    assert_eq!(restart.id, 1);
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let (actor, client) = StoreActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    client
        .create(TicketCreate {
            label: "only".into(),
        })
        .await
        .unwrap();

    let result = client.update(42, TicketUpdate { closed: true }).await;
    assert!(matches!(result, Err(StoreError::NotFound(_))));

    // The miss must not have touched existing state.
    let all = client.list().await.unwrap();
    assert_eq!(all.len(), 1);
    assert!(!all[0].closed);
}

#[tokio::test]
async fn test_list_returns_independent_snapshots() {
    let (actor, client) = StoreActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    client
        .create(TicketCreate {
            label: "original".into(),
        })
        .await
        .unwrap();

    let mut snapshot = client.list().await.unwrap();
    snapshot[0].label = "mangled".into();

    let fresh = client.list().await.unwrap();
    assert_eq!(fresh[0].label, "original");
}

/// Concurrent creates must still observe unique, gapless sequence numbers:
/// the actor serializes the read-increment-append step.
#[tokio::test]
async fn test_concurrent_creates_are_gapless() {
    let (actor, client) = StoreActor::<Ticket>::new(32);
    tokio::spawn(actor.run(()));

    let mut handles = vec![];
    for i in 0..25 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client
                .create(TicketCreate {
                    label: format!("t{i}"),
                })
                .await
        }));
    }

    let mut seen = vec![];
    for handle in handles {
        let ticket = handle.await.unwrap().unwrap();
        seen.push(ticket.id);
    }

    seen.sort_unstable();
    let expected: Vec<u32> = (1..=25).collect();
    assert_eq!(seen, expected, "sequence numbers must be exactly 1..=N");
}
