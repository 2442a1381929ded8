//! Domain definitions.

pub mod admin;
pub mod booking;
pub mod discount;
pub mod house;
pub mod notification;
pub mod review;
pub mod session;
pub mod site_settings;
pub mod user;

pub use self::{
    admin::Admin, booking::Booking, discount::Discount, house::House,
    notification::Notification, review::Review, session::Session,
    site_settings::SiteSettings, user::User,
};
