//! Background [`Task`]s definitions.

mod background;
pub mod deactivate_expired_discounts;

pub use common::Handler as Task;

pub use self::{
    background::Background,
    deactivate_expired_discounts::DeactivateExpiredDiscounts,
};
