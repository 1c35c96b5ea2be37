//! # Order API Boundary
//!
//! The external-facing contract over the order store, expressed as functions
//! taking untrusted JSON bodies. A transport layer (HTTP handler, test
//! harness) maps the error variants onto its own status codes:
//! [`OrderError::InvalidItems`] is the client-error signal (400),
//! [`OrderError::NotFound`] the not-found signal (404); everything else is a
//! server-side fault.
//!
//! Validation happens here, before any store call: a create body whose
//! `items` field is missing or not an array is rejected without consuming an
//! order number.

use crate::clients::OrderClient;
use crate::model::{Order, OrderId, OrderItem};
use crate::order_actor::OrderError;
use serde_json::Value;
use tracing::warn;

/// Creates an order from an untrusted JSON request body.
///
/// The body must carry an array-typed `items` field whose elements each have
/// a `name` and a positive integer `quantity`; `notes` and `price` are
/// optional. Anything else is an [`OrderError::InvalidItems`] and the store
/// is never touched.
pub async fn create_order(client: &OrderClient, body: &Value) -> Result<Order, OrderError> {
    let items = parse_items(body)?;
    client.submit_order(items).await
}

/// Returns every order regardless of status, in creation order.
pub async fn list_orders(client: &OrderClient) -> Result<Vec<Order>, OrderError> {
    client.list_orders().await
}

/// Marks the order with the given id completed.
pub async fn complete_order(client: &OrderClient, id: &str) -> Result<Order, OrderError> {
    client.complete_order(&OrderId::from(id)).await
}

/// Unconditionally empties the store and resets numbering. Always succeeds
/// short of the actor being gone.
pub async fn clear_orders(client: &OrderClient) -> Result<(), OrderError> {
    client.clear_orders().await
}

fn parse_items(body: &Value) -> Result<Vec<OrderItem>, OrderError> {
    let items = match body.get("items") {
        Some(items) if items.is_array() => items,
        _ => {
            warn!("Create rejected: body has no array-typed items field");
            return Err(OrderError::InvalidItems(
                "body must contain an array-typed 'items' field".to_string(),
            ));
        }
    };

    serde_json::from_value::<Vec<OrderItem>>(items.clone()).map_err(|e| {
        warn!(error = %e, "Create rejected: malformed item");
        OrderError::InvalidItems(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_accepts_well_formed_items() {
        let body = json!({
            "items": [
                { "name": "Gemini Classic", "quantity": 2, "notes": "No pickles", "price": 5.99 },
                { "name": "Asteroid Fries", "quantity": 1 }
            ]
        });
        let items = parse_items(&body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].notes.as_deref(), Some("No pickles"));
        assert_eq!(items[1].price, None);
    }

    #[test]
    fn parse_accepts_empty_items_array() {
        let items = parse_items(&json!({ "items": [] })).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn parse_rejects_missing_items() {
        let err = parse_items(&json!({ "order": "yes please" })).unwrap_err();
        assert!(matches!(err, OrderError::InvalidItems(_)));
    }

    #[test]
    fn parse_rejects_non_array_items() {
        let err = parse_items(&json!({ "items": "Gemini Classic" })).unwrap_err();
        assert!(matches!(err, OrderError::InvalidItems(_)));
    }

    #[test]
    fn parse_rejects_malformed_item() {
        let err = parse_items(&json!({ "items": [ { "quantity": 2 } ] })).unwrap_err();
        assert!(matches!(err, OrderError::InvalidItems(_)));
    }
}
