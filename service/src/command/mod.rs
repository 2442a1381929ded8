//! [`Command`] definition.

pub mod authorize_session;
pub mod cancel_booking;
pub mod confirm_booking;
pub mod create_admin_session;
pub mod create_booking;
pub mod create_discount;
pub mod create_house;
pub mod create_review;
pub mod create_user;
pub mod create_user_session;
pub mod delete_discount;
pub mod delete_house;
pub mod delete_review;
pub mod mark_all_notifications_read;
pub mod mark_notification_read;
pub mod toggle_favorite;
pub mod update_discount;
pub mod update_house;
pub mod update_review;
pub mod update_site_settings;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    authorize_session::AuthorizeSession, cancel_booking::CancelBooking,
    confirm_booking::ConfirmBooking,
    create_admin_session::CreateAdminSession, create_booking::CreateBooking,
    create_discount::CreateDiscount, create_house::CreateHouse,
    create_review::CreateReview, create_user::CreateUser,
    create_user_session::CreateUserSession,
    delete_discount::DeleteDiscount, delete_house::DeleteHouse,
    delete_review::DeleteReview,
    mark_all_notifications_read::MarkAllNotificationsRead,
    mark_notification_read::MarkNotificationRead,
    toggle_favorite::ToggleFavorite, update_discount::UpdateDiscount,
    update_house::UpdateHouse, update_review::UpdateReview,
    update_site_settings::UpdateSiteSettings,
};
