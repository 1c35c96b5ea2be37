//! [`StoreEntity`] implementation for [`Order`].
//!
//! This is where the order lifecycle semantics live: opaque id generation,
//! sequence number assignment, one-time price resolution and total
//! computation at creation, and the one-way status transition on update.

use crate::menu::Menu;
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, OrderUpdate};
use crate::order_actor::OrderError;
use actor_store::StoreEntity;
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

#[async_trait]
impl StoreEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Context = Menu;
    type Error = OrderError;

    /// Builds the full order record from the assigned sequence number.
    ///
    /// The total is computed here and never again: each line uses its
    /// explicit price if present, otherwise the menu price, otherwise 0.0
    /// (an off-menu name is not an error). The sum is rounded to two
    /// decimals.
    fn from_create_params(seq: u32, params: OrderCreate, menu: &Menu) -> Result<Self, OrderError> {
        let total: f64 = params
            .items
            .iter()
            .map(|item| {
                let price = item
                    .price
                    .or_else(|| menu.price_for(&item.name))
                    .unwrap_or(0.0);
                price * f64::from(item.quantity)
            })
            .sum();
        let total = (total * 100.0).round() / 100.0;

        Ok(Self {
            id: OrderId(Uuid::new_v4().to_string()),
            order_number: seq,
            items: params.items,
            status: OrderStatus::Pending,
            total,
            created_at: Utc::now(),
        })
    }

    fn id(&self) -> OrderId {
        self.id.clone()
    }

    /// Applies a status change.
    ///
    /// Setting `Completed` always succeeds, including on an already-completed
    /// order (re-completion is an idempotent set). Setting `Pending` on a
    /// completed order is rejected: completion is one-way.
    async fn on_update(&mut self, update: OrderUpdate, _menu: &Menu) -> Result<(), OrderError> {
        if update.status == OrderStatus::Pending && self.status == OrderStatus::Completed {
            return Err(OrderError::InvalidTransition(format!(
                "order {} is already completed",
                self.id
            )));
        }
        self.status = update.status;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderItem;

    fn line(name: &str, quantity: u32, price: Option<f64>) -> OrderItem {
        OrderItem {
            name: name.to_string(),
            quantity,
            notes: None,
            price,
        }
    }

    #[test]
    fn total_uses_explicit_price() {
        let order = Order::from_create_params(
            1,
            OrderCreate {
                items: vec![line("Gemini Classic", 2, Some(5.99))],
            },
            &Menu::standard(),
        )
        .unwrap();
        assert_eq!(order.total, 11.98);
        assert_eq!(order.order_number, 1);
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn total_falls_back_to_menu_price() {
        let order = Order::from_create_params(
            1,
            OrderCreate {
                items: vec![line("Asteroid Fries", 3, None)],
            },
            &Menu::standard(),
        )
        .unwrap();
        assert_eq!(order.total, 8.97);
    }

    #[test]
    fn off_menu_name_contributes_zero() {
        let order = Order::from_create_params(
            1,
            OrderCreate {
                items: vec![line("Quantum Quesadilla", 4, None)],
            },
            &Menu::standard(),
        )
        .unwrap();
        assert_eq!(order.total, 0.0);
    }

    #[test]
    fn total_is_rounded_to_two_decimals() {
        // 3 x 3.33 = 9.99, 1 x 0.101 = 0.101; raw sum 10.091 rounds to 10.09
        let order = Order::from_create_params(
            1,
            OrderCreate {
                items: vec![line("a", 3, Some(3.33)), line("b", 1, Some(0.101))],
            },
            &Menu::standard(),
        )
        .unwrap();
        assert_eq!(order.total, 10.09);
    }

    #[tokio::test]
    async fn completion_is_one_way() {
        let mut order = Order::from_create_params(
            1,
            OrderCreate {
                items: vec![line("Nebula Soda", 1, None)],
            },
            &Menu::standard(),
        )
        .unwrap();
        let menu = Menu::standard();

        order
            .on_update(
                OrderUpdate {
                    status: OrderStatus::Completed,
                },
                &menu,
            )
            .await
            .unwrap();
        assert_eq!(order.status, OrderStatus::Completed);

        // Re-completing succeeds.
        order
            .on_update(
                OrderUpdate {
                    status: OrderStatus::Completed,
                },
                &menu,
            )
            .await
            .unwrap();
        assert_eq!(order.status, OrderStatus::Completed);

        // Going back to pending does not.
        let err = order
            .on_update(
                OrderUpdate {
                    status: OrderStatus::Pending,
                },
                &menu,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::InvalidTransition(_)));
        assert_eq!(order.status, OrderStatus::Completed);
    }
}
