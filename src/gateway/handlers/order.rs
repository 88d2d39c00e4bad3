//! Order intake handler
//!
//! Accepts anything sent to `/orders`. Method, headers and body are never
//! inspected, so there is no failure path.

/// Body returned for every request to `/orders`
pub const ORDER_CREATED_BODY: &str = "order created";

/// ANY /orders
pub async fn create_order() -> &'static str {
    ORDER_CREATED_BODY
}
