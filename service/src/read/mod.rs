//! Read entities definitions.

pub mod booking;
pub mod house;
pub mod notification;
pub mod review;
