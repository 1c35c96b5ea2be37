//! Full-system integration tests: seed, kitchen flow, and concurrent
//! submission.

use drive_thru::lifecycle::OrderSystem;
use drive_thru::model::{OrderItem, OrderStatus};
use drive_thru::seed::seed_demo_orders;

#[tokio::test]
async fn test_seed_then_kitchen_flow() {
    let system = OrderSystem::new();

    let seeded = seed_demo_orders(&system.order_client)
        .await
        .expect("Failed to seed");
    assert_eq!(seeded.len(), 6);

    // Numbered from 1 in submission order, all pending.
    let numbers: Vec<u32> = seeded.iter().map(|o| o.order_number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
    assert!(seeded.iter().all(|o| o.status == OrderStatus::Pending));

    // First demo order: 2 x 5.99 + 1 x 2.99.
    assert_eq!(seeded[0].total, 14.97);

    // The board lists everything in creation order.
    let board = system.order_client.list_orders().await.unwrap();
    assert_eq!(board.len(), 6);
    assert_eq!(board[0].id, seeded[0].id);

    // Staff mark two orders ready; the rest stay pending.
    system
        .order_client
        .complete_order(&seeded[0].id)
        .await
        .unwrap();
    system
        .order_client
        .complete_order(&seeded[3].id)
        .await
        .unwrap();

    let board = system.order_client.list_orders().await.unwrap();
    let pending: Vec<u32> = board
        .iter()
        .filter(|o| o.status == OrderStatus::Pending)
        .map(|o| o.order_number)
        .collect();
    assert_eq!(pending, vec![2, 3, 5, 6]);

    // Re-seeding starts numbering over.
    let reseeded = seed_demo_orders(&system.order_client).await.unwrap();
    assert_eq!(reseeded[0].order_number, 1);

    system.shutdown().await.unwrap();
}

/// Concurrent submissions must still receive unique, gapless order numbers.
#[tokio::test]
async fn test_concurrent_submissions_are_gapless() {
    let system = OrderSystem::new();

    let mut handles = vec![];
    for i in 0..20 {
        let client = system.order_client.clone();
        handles.push(tokio::spawn(async move {
            client
                .submit_order(vec![OrderItem {
                    name: "Nebula Soda".to_string(),
                    quantity: i + 1,
                    notes: None,
                    price: None,
                }])
                .await
        }));
    }

    let mut numbers = vec![];
    for handle in handles {
        let order = handle.await.unwrap().expect("Submission failed");
        numbers.push(order.order_number);
    }

    numbers.sort_unstable();
    let expected: Vec<u32> = (1..=20).collect();
    assert_eq!(numbers, expected, "order numbers must be exactly 1..=N");

    // Ids are opaque and unique too.
    let board = system.order_client.list_orders().await.unwrap();
    let mut ids: Vec<String> = board.iter().map(|o| o.id.0.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 20);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_wire_shape_round_trip() {
    let system = OrderSystem::new();

    let order = system
        .order_client
        .submit_order(vec![OrderItem {
            name: "Gemini Classic".to_string(),
            quantity: 2,
            notes: Some("No pickles".to_string()),
            price: Some(5.99),
        }])
        .await
        .unwrap();

    let value = serde_json::to_value(&order).unwrap();
    assert_eq!(value["orderNumber"], 1);
    assert_eq!(value["status"], "pending");
    assert_eq!(value["total"], 11.98);
    assert_eq!(value["items"][0]["notes"], "No pickles");
    assert!(
        value["createdAt"].as_str().unwrap().contains('T'),
        "createdAt must be ISO-8601"
    );

    system.shutdown().await.unwrap();
}
