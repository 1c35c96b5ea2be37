//! Demo binary: start the order system, seed sample data, and walk one order
//! through its lifecycle the way the kitchen display would.

use actor_store::tracing::setup_tracing;
use drive_thru::lifecycle::OrderSystem;
use drive_thru::model::OrderStatus;
use drive_thru::seed::seed_demo_orders;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting drive-thru order system");

    let system = OrderSystem::new();

    let span = tracing::info_span!("seeding");
    let seeded = async {
        info!("Seeding demo orders");
        seed_demo_orders(&system.order_client)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(count = seeded.len(), "Demo orders seeded");

    for order in &seeded {
        info!(
            order_number = order.order_number,
            total = order.total,
            lines = order.items.len(),
            "Pending order"
        );
    }

    // Kitchen staff mark the first order ready.
    if let Some(first) = seeded.first() {
        let span = tracing::info_span!("completion");
        let result = async {
            info!(order_number = first.order_number, "Marking order ready");
            system.order_client.complete_order(&first.id).await
        }
        .instrument(span)
        .await;

        match result {
            Ok(order) => info!(
                order_number = order.order_number,
                status = %order.status,
                "Order completed"
            ),
            Err(e) => error!(error = %e, "Completion failed"),
        }
    }

    let remaining = system
        .order_client
        .list_orders()
        .await
        .map_err(|e| e.to_string())?
        .into_iter()
        .filter(|o| o.status == OrderStatus::Pending)
        .count();
    info!(remaining, "Pending orders left on the board");

    system.shutdown().await?;

    info!("Done");
    Ok(())
}
