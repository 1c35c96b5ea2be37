//! # Seed Utility
//!
//! Populates the store with sample data for demos: clear everything, then
//! submit a fixed batch of orders. The kitchen display then has something to
//! show the moment it starts polling.

use crate::clients::OrderClient;
use crate::model::{Order, OrderItem};
use crate::order_actor::OrderError;
use tracing::info;

fn line(name: &str, quantity: u32, notes: Option<&str>, price: f64) -> OrderItem {
    OrderItem {
        name: name.to_string(),
        quantity,
        notes: notes.map(str::to_string),
        price: Some(price),
    }
}

/// Clears the store and submits the demo orders.
///
/// Because the store is cleared first, the returned orders are numbered from
/// 1 in submission order.
pub async fn seed_demo_orders(client: &OrderClient) -> Result<Vec<Order>, OrderError> {
    client.clear_orders().await?;

    let batches = vec![
        vec![
            line("Gemini Classic", 2, Some("No pickles"), 5.99),
            line("Asteroid Fries", 1, None, 2.99),
        ],
        vec![
            line("Double Nebula", 1, None, 7.99),
            line("Galaxy Shake", 2, None, 4.99),
        ],
        vec![
            line("Gemini Classic", 3, None, 5.99),
            line("Asteroid Fries", 2, None, 2.99),
            line("Nebula Soda", 1, None, 1.99),
        ],
        vec![
            line("Gemini Classic", 1, None, 5.99),
            line("Onion Rings", 2, None, 3.49),
        ],
        vec![
            line("Double Nebula", 2, None, 7.99),
            line("Asteroid Fries", 3, None, 2.99),
        ],
        vec![line("Galaxy Shake", 4, Some("Extra stars"), 4.99)],
    ];

    let mut seeded = Vec::with_capacity(batches.len());
    for items in batches {
        seeded.push(client.submit_order(items).await?);
    }

    info!(count = seeded.len(), "Seeded demo orders");
    Ok(seeded)
}
