//! GraphQL API definitions.

pub mod admin;
pub mod booking;
pub mod discount;
pub mod house;
mod mutation;
pub mod notification;
mod query;
pub mod review;
pub mod scalar;
pub mod site_settings;
mod subscription;
pub mod user;

use crate::define_error;

pub use self::{
    admin::Admin, booking::Booking, discount::Discount, house::House,
    mutation::Mutation, notification::Notification, query::Query,
    review::Review, site_settings::SiteSettings, subscription::Subscription,
    user::User,
};

/// GraphQL schema.
pub type Schema = juniper::RootNode<'static, Query, Mutation, Subscription>;

define_error! {
    enum PrivilegeError {
        #[code = "ADMIN_SESSION_REQUIRED"]
        #[status = FORBIDDEN]
        #[message = "Authenticated `Admin` session required"]
        Admin,

        #[code = "USER_SESSION_REQUIRED"]
        #[status = FORBIDDEN]
        #[message = "Authenticated `User` session required"]
        User,
    }
}

define_error! {
    enum PaginationError {
        #[code = "AMBIGUOUS_PAGINATION_ARGUMENTS"]
        #[status = BAD_REQUEST]
        #[message = "Ambiguous pagination arguments"]
        Ambiguous,
    }
}
