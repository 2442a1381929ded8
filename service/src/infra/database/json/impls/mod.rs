//! [`Database`] operation implementations of the [`Json`] store.
//!
//! [`Database`]: crate::infra::Database
//! [`Json`]: super::Json

mod admin;
mod booking;
mod discount;
mod house;
mod notification;
mod review;
mod site_settings;
mod user;
