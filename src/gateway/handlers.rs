pub mod health;
pub mod order;

pub use health::{HEALTH_OK_BODY, health_check};
pub use order::{ORDER_CREATED_BODY, create_order};
