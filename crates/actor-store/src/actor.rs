//! # Generic Store Actor
//!
//! This module defines the `StoreActor`, the single task that owns a sequenced
//! registry of entities. It is the "server" half of the actor pair: it holds
//! the entry list and the sequence counter, and processes messages from its
//! channel one at a time.

use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that owns an insertion-ordered collection of entities and the
/// monotonically increasing sequence counter used at creation.
///
/// # Concurrency Model
/// All mutation of the counter and the entry list happens inside this task's
/// event loop, one message at a time. The read-increment-append sequence in
/// `Create` is therefore atomic without any `Mutex`: exclusive ownership of
/// state within the task is the mutual-exclusion boundary. Concurrent callers
/// queue on the mpsc channel and observe unique, gapless sequence numbers.
///
/// # Lifecycle
/// Constructed once, empty, with the counter at 1. The loop runs until every
/// `StoreClient` clone has been dropped, which closes the channel. The only
/// reset short of process exit is an explicit `Clear` request.
///
/// # Usage Pattern
/// 1. **Create**: `StoreActor::new(buffer)` yields the actor and its client.
/// 2. **Wire**: pass dependencies (lookup tables, other clients) to `run`.
/// 3. **Run**: spawn the loop in a background task.
///
/// ```rust
/// use actor_store::{StoreActor, StoreEntity};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Note { id: u32, text: String }
/// #[derive(Debug)] struct NoteCreate { text: String }
/// #[derive(Debug)] struct NoteUpdate { text: String }
/// #[derive(Debug, thiserror::Error)]
/// #[error("note error")]
/// struct NoteError;
///
/// #[async_trait]
/// impl StoreEntity for Note {
///     type Id = u32;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///     type Context = ();
///     type Error = NoteError;
///
///     fn from_create_params(seq: u32, params: NoteCreate, _: &()) -> Result<Self, NoteError> {
///         Ok(Self { id: seq, text: params.text })
///     }
///     fn id(&self) -> u32 { self.id }
///     async fn on_update(&mut self, update: NoteUpdate, _: &()) -> Result<(), NoteError> {
///         self.text = update.text;
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::<Note>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let note = client.create(NoteCreate { text: "hi".into() }).await.unwrap();
///     assert_eq!(note.id, 1);
/// }
/// ```
pub struct StoreActor<T: StoreEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    entries: Vec<T>,
    next_seq: u32,
}

impl<T: StoreEntity> StoreActor<T> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the mpsc channel. When the channel is
    ///   full, client calls wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            entries: Vec::new(),
            next_seq: 1,
        };
        let client = StoreClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel
    /// closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook, so entities
    /// can reach dependencies that were created after the actor was
    /// instantiated but before the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Just the type name, not the full module path.
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let seq = self.next_seq;
                    // The number is consumed here; a failing construction
                    // below does not give it back.
                    self.next_seq += 1;

                    match T::from_create_params(seq, params, &context) {
                        Ok(item) => {
                            let record = item.clone();
                            self.entries.push(item);
                            info!(entity_type, seq, size = self.entries.len(), "Created");
                            let _ = respond_to.send(Ok(record));
                        }
                        Err(e) => {
                            warn!(entity_type, seq, error = %e, "Create failed");
                            let _ = respond_to.send(Err(StoreError::EntityError(Box::new(e))));
                        }
                    }
                }
                StoreRequest::List { respond_to } => {
                    debug!(entity_type, size = self.entries.len(), "List");
                    let _ = respond_to.send(Ok(self.entries.clone()));
                }
                StoreRequest::Get { id, respond_to } => {
                    let item = self.entries.iter().find(|e| e.id() == id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.entries.iter_mut().find(|e| e.id() == id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(StoreError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
                StoreRequest::Clear { respond_to } => {
                    let dropped = self.entries.len();
                    self.entries.clear();
                    self.next_seq = 1;
                    info!(entity_type, dropped, "Cleared, counter reset");
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(entity_type, size = self.entries.len(), "Shutdown");
    }
}
