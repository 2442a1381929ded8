//! GraphQL [`Mutation`]s definitions.

use common::{Date, Money, Percent};
use juniper::graphql_object;
use service::{command, domain, Command as _};

use crate::{api, define_error, AsError, Context, Error, Session};

/// Root of all GraphQL mutations.
#[derive(Clone, Copy, Debug)]
pub struct Mutation;

impl Mutation {
    /// Name of the [`tracing::Span`] for the mutations.
    const SPAN_NAME: &'static str = "GraphQL mutation";
}

#[graphql_object(context = Context)]
impl Mutation {
    /// Creates a new `User` with the provided credentials, and authenticates
    /// them right away.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `EMAIL_OCCUPIED` - provided `UserEmail` is occupied by another
    ///                      `User`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "createUser",
            email = %email,
            name = %name,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn create_user(
        name: api::user::Name,
        email: api::user::Email,
        password: api::user::Password,
        ctx: &Context,
    ) -> Result<api::user::session::CreateResult, Error> {
        let user = ctx
            .service()
            .execute(command::CreateUser {
                name: name.into(),
                email: email.into(),
                password: secrecy::SecretBox::init_with(move || {
                    password.into()
                }),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?;
        let output = ctx
            .service()
            .execute(command::CreateUserSession::ByUserId(user.id))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?;

        ctx.set_current_session(Session {
            principal: domain::session::Principal::User(output.user.id),
            token: output.token.clone(),
            expires_at: output.expires_at.coerce(),
        })
        .await;

        Ok(output.into())
    }

    /// Creates a new `UserSession` with the provided credentials.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `WRONG_CREDENTIALS` - provided credentials does not match any
    ///                         `User`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "createUserSession",
            email = %email,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn create_user_session(
        email: api::user::Email,
        password: api::user::Password,
        ctx: &Context,
    ) -> Result<api::user::session::CreateResult, Error> {
        let output = ctx
            .service()
            .execute(command::CreateUserSession::ByCredentials {
                email: email.into(),
                password: secrecy::SecretBox::init_with(move || {
                    password.into()
                }),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?;

        ctx.set_current_session(Session {
            principal: domain::session::Principal::User(output.user.id),
            token: output.token.clone(),
            expires_at: output.expires_at.coerce(),
        })
        .await;

        Ok(output.into())
    }

    /// Creates a new `AdminSession` with the provided credentials.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `WRONG_CREDENTIALS` - provided credentials does not match any
    ///                         `Admin`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "createAdminSession",
            otel.name = Self::SPAN_NAME,
            username = %username,
        ),
    )]
    pub async fn create_admin_session(
        username: api::admin::Username,
        password: api::user::Password,
        ctx: &Context,
    ) -> Result<api::admin::session::CreateResult, Error> {
        let output = ctx
            .service()
            .execute(command::CreateAdminSession::ByCredentials {
                username: username.into(),
                password: secrecy::SecretBox::init_with(move || {
                    password.into()
                }),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?;

        ctx.set_current_session(Session {
            principal: domain::session::Principal::Admin(output.admin.id),
            token: output.token.clone(),
            expires_at: output.expires_at.coerce(),
        })
        .await;

        Ok(output.into())
    }

    /// Books the `House` for the provided stay on behalf of the currently
    /// authenticated `User`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_STAY` - the check-out date is not after the check-in one;
    /// - `HOUSE_NOT_EXISTS` - the `House` with the specified ID does not
    ///                        exist;
    /// - `HOUSE_UNAVAILABLE` - the `House` is not open for booking;
    /// - `OVER_CAPACITY` - the number of guests exceeds the `House` capacity;
    /// - `STAY_OCCUPIED` - the stay overlaps an active `Booking`.
    #[tracing::instrument(
        skip_all,
        fields(
            check_in = ?check_in,
            check_out = ?check_out,
            gql.name = "createBooking",
            guests = %guests,
            house_id = %house_id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn create_booking(
        house_id: api::house::Id,
        check_in: Date,
        check_out: Date,
        guests: i32,
        ctx: &Context,
    ) -> Result<api::Booking, Error> {
        let my_id = ctx.current_user_id().await?;
        let stay =
            domain::booking::Stay::new(check_in.coerce(), check_out.coerce())
                .ok_or_else(|| api::query::StayError::Invalid.into())
                .map_err(ctx.error())?;
        let guests = u16::try_from(guests)
            .map(domain::booking::Guests::from)
            .map_err(|_| GuestsError::Invalid.into())
            .map_err(ctx.error())?;

        ctx.service()
            .execute(command::CreateBooking {
                house_id: house_id.into(),
                user_id: my_id,
                stay,
                guests,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Confirms the pending `Booking` on behalf of the currently
    /// authenticated `Admin`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `BOOKING_NOT_EXISTS` - the `Booking` with the specified ID does not
    ///                          exist;
    /// - `INVALID_STATUS_TRANSITION` - the `Booking` is not pending.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "confirmBooking",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn confirm_booking(
        id: api::booking::Id,
        ctx: &Context,
    ) -> Result<api::Booking, Error> {
        let my_id = ctx.current_admin_id().await?;
        ctx.service()
            .execute(command::ConfirmBooking {
                booking_id: id.into(),
                admin_id: my_id,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Cancels the `Booking` on behalf of the current session owner.
    ///
    /// A `User` may only cancel their own `Booking`, and only while the
    /// cancellation notice period still allows it. An `Admin` may cancel any
    /// `Booking` at any time before its check-in.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `BOOKING_NOT_EXISTS` - the `Booking` with the specified ID does not
    ///                          exist;
    /// - `NOT_BOOKING_OWNER` - the `Booking` belongs to another `User`;
    /// - `NOTICE_PERIOD_PASSED` - too few days remain until the check-in;
    /// - `INVALID_STATUS_TRANSITION` - the `Booking` is already cancelled.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "cancelBooking",
            id = %id,
            otel.name = Self::SPAN_NAME,
            reason = ?reason,
        ),
    )]
    pub async fn cancel_booking(
        id: api::booking::Id,
        reason: Option<api::booking::Reason>,
        ctx: &Context,
    ) -> Result<api::Booking, Error> {
        let by = match ctx.current_session().await?.principal {
            domain::session::Principal::User(user_id) => {
                domain::booking::Canceller::User(user_id)
            }
            domain::session::Principal::Admin(admin_id) => {
                domain::booking::Canceller::Admin(admin_id)
            }
        };

        ctx.service()
            .execute(command::CancelBooking {
                booking_id: id.into(),
                by,
                reason: reason.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Creates a new `House` on behalf of the currently authenticated
    /// `Admin`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "createHouse",
            otel.name = Self::SPAN_NAME,
            title = %title,
        ),
    )]
    #[expect(clippy::too_many_arguments, reason = "GraphQL arguments")]
    pub async fn create_house(
        title: api::house::Title,
        area: api::house::Area,
        city: api::house::City,
        price_per_night: Money,
        bedrooms: i32,
        bathrooms: i32,
        capacity: i32,
        has_parking: bool,
        is_available: bool,
        images: Vec<api::house::Url>,
        description: api::house::Description,
        amenities: Vec<api::house::Amenity>,
        contact_phone: api::user::Phone,
        whatsapp_number: api::user::Phone,
        location: api::house::LocationInput,
        ctx: &Context,
    ) -> Result<api::House, Error> {
        _ = ctx.current_admin_id().await?;
        ctx.service()
            .execute(command::CreateHouse {
                title: title.into(),
                area: area.into(),
                city: city.into(),
                price_per_night,
                bedrooms: rooms_count(bedrooms, ctx)?.into(),
                bathrooms: rooms_count(bathrooms, ctx)?.into(),
                capacity: rooms_count(capacity, ctx)?.into(),
                has_parking,
                is_available,
                images: images.into_iter().map(Into::into).collect(),
                description: description.into(),
                amenities: amenities.into_iter().map(Into::into).collect(),
                contact_phone: contact_phone.into(),
                whatsapp_number: whatsapp_number.into(),
                location: location.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Updates the `House` on behalf of the currently authenticated `Admin`.
    ///
    /// Only the provided fields are changed.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `HOUSE_NOT_EXISTS` - the `House` with the specified ID does not
    ///                        exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "updateHouse",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    #[expect(clippy::too_many_arguments, reason = "GraphQL arguments")]
    pub async fn update_house(
        id: api::house::Id,
        title: Option<api::house::Title>,
        area: Option<api::house::Area>,
        city: Option<api::house::City>,
        price_per_night: Option<Money>,
        bedrooms: Option<i32>,
        bathrooms: Option<i32>,
        capacity: Option<i32>,
        has_parking: Option<bool>,
        is_available: Option<bool>,
        images: Option<Vec<api::house::Url>>,
        description: Option<api::house::Description>,
        amenities: Option<Vec<api::house::Amenity>>,
        contact_phone: Option<api::user::Phone>,
        whatsapp_number: Option<api::user::Phone>,
        location: Option<api::house::LocationInput>,
        ctx: &Context,
    ) -> Result<api::House, Error> {
        _ = ctx.current_admin_id().await?;
        ctx.service()
            .execute(command::UpdateHouse {
                house_id: id.into(),
                title: title.map(Into::into),
                area: area.map(Into::into),
                city: city.map(Into::into),
                price_per_night,
                bedrooms: bedrooms
                    .map(|n| rooms_count(n, ctx))
                    .transpose()?
                    .map(Into::into),
                bathrooms: bathrooms
                    .map(|n| rooms_count(n, ctx))
                    .transpose()?
                    .map(Into::into),
                capacity: capacity
                    .map(|n| rooms_count(n, ctx))
                    .transpose()?
                    .map(Into::into),
                has_parking,
                is_available,
                images: images
                    .map(|urls| urls.into_iter().map(Into::into).collect()),
                description: description.map(Into::into),
                amenities: amenities
                    .map(|a| a.into_iter().map(Into::into).collect()),
                contact_phone: contact_phone.map(Into::into),
                whatsapp_number: whatsapp_number.map(Into::into),
                location: location.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Deletes the `House` on behalf of the currently authenticated `Admin`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `HOUSE_NOT_EXISTS` - the `House` with the specified ID does not
    ///                        exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "deleteHouse",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn delete_house(
        id: api::house::Id,
        ctx: &Context,
    ) -> Result<bool, Error> {
        _ = ctx.current_admin_id().await?;
        ctx.service()
            .execute(command::DeleteHouse {
                house_id: id.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|()| true)
    }

    /// Creates a new `Discount` for the `House` on behalf of the currently
    /// authenticated `Admin`.
    ///
    /// Exactly one of `percentage` or `fixed` must be provided.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_DISCOUNT_AMOUNT` - none or both of `percentage` and `fixed`
    ///                               are provided, or the amount is negative;
    /// - `INVALID_DISCOUNT_PERIOD` - the end date is before the start one;
    /// - `HOUSE_NOT_EXISTS` - the `House` with the specified ID does not
    ///                        exist;
    /// - `DISCOUNT_PERIOD_OVERLAPS` - the period overlaps another active
    ///                                `Discount` of the `House`.
    #[tracing::instrument(
        skip_all,
        fields(
            end_date = ?end_date,
            fixed = ?fixed,
            gql.name = "createDiscount",
            house_id = %house_id,
            otel.name = Self::SPAN_NAME,
            percentage = ?percentage,
            start_date = ?start_date,
        ),
    )]
    pub async fn create_discount(
        house_id: api::house::Id,
        percentage: Option<Percent>,
        fixed: Option<Money>,
        start_date: Date,
        end_date: Date,
        ctx: &Context,
    ) -> Result<api::Discount, Error> {
        let my_id = ctx.current_admin_id().await?;
        let amount = discount_amount(percentage, fixed, ctx)?;
        let period = domain::discount::Period::new(
            start_date.coerce(),
            end_date.coerce(),
        )
        .ok_or_else(|| DiscountError::InvalidPeriod.into())
        .map_err(ctx.error())?;

        ctx.service()
            .execute(command::CreateDiscount {
                house_id: house_id.into(),
                amount,
                period,
                created_by: my_id,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Updates the `Discount` on behalf of the currently authenticated
    /// `Admin`.
    ///
    /// Only the provided fields are changed.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `DISCOUNT_NOT_EXISTS` - the `Discount` with the specified ID does
    ///                           not exist;
    /// - `INVALID_DISCOUNT_AMOUNT` - both `percentage` and `fixed` are
    ///                               provided, or the amount is negative;
    /// - `INVALID_DISCOUNT_PERIOD` - the end date is before the start one;
    /// - `DISCOUNT_PERIOD_OVERLAPS` - the period overlaps another active
    ///                                `Discount` of the `House`.
    #[tracing::instrument(
        skip_all,
        fields(
            end_date = ?end_date,
            fixed = ?fixed,
            gql.name = "updateDiscount",
            id = %id,
            is_active = ?is_active,
            otel.name = Self::SPAN_NAME,
            percentage = ?percentage,
            start_date = ?start_date,
        ),
    )]
    #[expect(clippy::too_many_arguments, reason = "GraphQL arguments")]
    pub async fn update_discount(
        id: api::discount::Id,
        percentage: Option<Percent>,
        fixed: Option<Money>,
        start_date: Option<Date>,
        end_date: Option<Date>,
        is_active: Option<bool>,
        ctx: &Context,
    ) -> Result<api::Discount, Error> {
        _ = ctx.current_admin_id().await?;
        let amount = if percentage.is_none() && fixed.is_none() {
            None
        } else {
            Some(discount_amount(percentage, fixed, ctx)?)
        };
        let period = match (start_date, end_date) {
            (Some(start), Some(end)) => Some(
                domain::discount::Period::new(start.coerce(), end.coerce())
                    .ok_or_else(|| DiscountError::InvalidPeriod.into())
                    .map_err(ctx.error())?,
            ),
            (None, None) => None,
            _ => {
                return Err(ctx.error()(DiscountError::InvalidPeriod.into()));
            }
        };

        ctx.service()
            .execute(command::UpdateDiscount {
                discount_id: id.into(),
                amount,
                period,
                is_active,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Deletes the `Discount` on behalf of the currently authenticated
    /// `Admin`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `DISCOUNT_NOT_EXISTS` - the `Discount` with the specified ID does
    ///                           not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "deleteDiscount",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn delete_discount(
        id: api::discount::Id,
        ctx: &Context,
    ) -> Result<bool, Error> {
        _ = ctx.current_admin_id().await?;
        ctx.service()
            .execute(command::DeleteDiscount {
                discount_id: id.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|()| true)
    }

    /// Creates a new `Review` of the `House` on behalf of the currently
    /// authenticated `User`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_RATING` - the rating is out of the `1..=5` range;
    /// - `HOUSE_NOT_EXISTS` - the `House` with the specified ID does not
    ///                        exist;
    /// - `ALREADY_REVIEWED` - the `User` has already reviewed this `House`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "createReview",
            house_id = %house_id,
            otel.name = Self::SPAN_NAME,
            rating = %rating,
        ),
    )]
    pub async fn create_review(
        house_id: api::house::Id,
        rating: i32,
        title: api::review::Title,
        comment: api::review::Comment,
        ctx: &Context,
    ) -> Result<api::Review, Error> {
        let my_id = ctx.current_user_id().await?;
        ctx.service()
            .execute(command::CreateReview {
                house_id: house_id.into(),
                user_id: my_id,
                rating: review_rating(rating, ctx)?,
                title: title.into(),
                comment: comment.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Updates the `Review` on behalf of its author.
    ///
    /// Only the provided fields are changed.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `REVIEW_NOT_EXISTS` - the `Review` with the specified ID does not
    ///                         exist;
    /// - `NOT_REVIEW_AUTHOR` - the `Review` was left by another `User`;
    /// - `INVALID_RATING` - the rating is out of the `1..=5` range.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "updateReview",
            id = %id,
            otel.name = Self::SPAN_NAME,
            rating = ?rating,
        ),
    )]
    pub async fn update_review(
        id: api::review::Id,
        rating: Option<i32>,
        title: Option<api::review::Title>,
        comment: Option<api::review::Comment>,
        ctx: &Context,
    ) -> Result<api::Review, Error> {
        let my_id = ctx.current_user_id().await?;
        ctx.service()
            .execute(command::UpdateReview {
                review_id: id.into(),
                user_id: my_id,
                rating: rating
                    .map(|r| review_rating(r, ctx))
                    .transpose()?,
                title: title.map(Into::into),
                comment: comment.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Deletes the `Review` on behalf of its author, or of an `Admin`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `REVIEW_NOT_EXISTS` - the `Review` with the specified ID does not
    ///                         exist;
    /// - `NOT_REVIEW_AUTHOR` - the `Review` was left by another `User`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "deleteReview",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn delete_review(
        id: api::review::Id,
        ctx: &Context,
    ) -> Result<bool, Error> {
        let cmd = match ctx.current_session().await?.principal {
            domain::session::Principal::User(user_id) => {
                command::DeleteReview::ByAuthor {
                    review_id: id.into(),
                    user_id,
                }
            }
            domain::session::Principal::Admin(admin_id) => {
                command::DeleteReview::ByAdmin {
                    review_id: id.into(),
                    admin_id,
                }
            }
        };

        ctx.service()
            .execute(cmd)
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|()| true)
    }

    /// Toggles the `House` in the favorites of the currently authenticated
    /// `User`.
    ///
    /// Returns whether the `House` is a favorite after the call.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `HOUSE_NOT_EXISTS` - the `House` with the specified ID does not
    ///                        exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "toggleFavorite",
            house_id = %house_id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn toggle_favorite(
        house_id: api::house::Id,
        ctx: &Context,
    ) -> Result<bool, Error> {
        let my_id = ctx.current_user_id().await?;
        ctx.service()
            .execute(command::ToggleFavorite {
                user_id: my_id,
                house_id: house_id.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
    }

    /// Marks the `Notification` of the current session owner as read.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `NOTIFICATION_NOT_EXISTS` - the `Notification` with the specified ID
    ///                               does not exist, or is addressed to
    ///                               someone else.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "markNotificationRead",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn mark_notification_read(
        id: api::notification::Id,
        ctx: &Context,
    ) -> Result<api::Notification, Error> {
        let recipient = recipient_of(ctx).await?;
        ctx.service()
            .execute(command::MarkNotificationRead {
                notification_id: id.into(),
                recipient,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Marks all the `Notification`s of the current session owner as read.
    ///
    /// Returns the number of `Notification`s affected.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "markAllNotificationsRead",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn mark_all_notifications_read(
        ctx: &Context,
    ) -> Result<i32, Error> {
        let recipient = recipient_of(ctx).await?;
        ctx.service()
            .execute(command::MarkAllNotificationsRead { recipient })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|n| i32::try_from(n).unwrap_or(i32::MAX))
    }

    /// Updates the site-wide content settings on behalf of the currently
    /// authenticated `Admin`.
    ///
    /// Only the provided fields are changed.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "updateSiteSettings",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    #[expect(clippy::too_many_arguments, reason = "GraphQL arguments")]
    pub async fn update_site_settings(
        site_name: Option<api::site_settings::LocalizedInput>,
        header_description: Option<api::site_settings::LocalizedInput>,
        hero_title: Option<api::site_settings::LocalizedInput>,
        hero_subtitle: Option<api::site_settings::LocalizedInput>,
        footer_description: Option<api::site_settings::LocalizedInput>,
        logo_url: Option<api::house::Url>,
        video_url: Option<api::house::Url>,
        contact_phone: Option<api::user::Phone>,
        whatsapp_number: Option<api::user::Phone>,
        contact_email: Option<api::user::Email>,
        social_links: Option<api::site_settings::SocialLinksInput>,
        ctx: &Context,
    ) -> Result<api::SiteSettings, Error> {
        let my_id = ctx.current_admin_id().await?;
        ctx.service()
            .execute(command::UpdateSiteSettings {
                admin_id: my_id,
                site_name: site_name.map(Into::into),
                header_description: header_description.map(Into::into),
                hero_title: hero_title.map(Into::into),
                hero_subtitle: hero_subtitle.map(Into::into),
                footer_description: footer_description.map(Into::into),
                logo_url: logo_url.map(|url| Some(url.into())),
                video_url: video_url.map(|url| Some(url.into())),
                contact_phone: contact_phone.map(Into::into),
                whatsapp_number: whatsapp_number.map(Into::into),
                contact_email: contact_email.map(Into::into),
                social_links: social_links.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }
}

/// Resolves the [`Recipient`] matching the current session owner.
///
/// [`Recipient`]: domain::notification::Recipient
async fn recipient_of(
    ctx: &Context,
) -> Result<domain::notification::Recipient, Error> {
    Ok(match ctx.current_session().await?.principal {
        domain::session::Principal::User(id) => {
            domain::notification::Recipient::User(id)
        }
        domain::session::Principal::Admin(id) => {
            domain::notification::Recipient::Admin(id)
        }
    })
}

/// Validates a rooms or guests count provided via the GraphQL API.
fn rooms_count(n: i32, ctx: &Context) -> Result<u16, Error> {
    u16::try_from(n)
        .map_err(|_| RoomsError::Invalid.into())
        .map_err(ctx.error())
}

/// Validates a `Review` rating provided via the GraphQL API.
fn review_rating(
    rating: i32,
    ctx: &Context,
) -> Result<domain::review::Rating, Error> {
    u8::try_from(rating)
        .ok()
        .and_then(domain::review::Rating::new)
        .ok_or_else(|| RatingError::Invalid.into())
        .map_err(ctx.error())
}

/// Assembles a [`discount::Amount`] from the GraphQL API arguments.
///
/// [`discount::Amount`]: domain::discount::Amount
fn discount_amount(
    percentage: Option<Percent>,
    fixed: Option<Money>,
    ctx: &Context,
) -> Result<domain::discount::Amount, Error> {
    match (percentage, fixed) {
        (Some(pct), None) => Ok(domain::discount::Amount::Percentage(pct)),
        (None, Some(sum)) => Ok(domain::discount::Amount::Fixed(sum)),
        (Some(_), Some(_)) | (None, None) => {
            Err(ctx.error()(DiscountError::InvalidAmount.into()))
        }
    }
}

define_error! {
    enum DiscountError {
        #[code = "INVALID_DISCOUNT_AMOUNT"]
        #[status = BAD_REQUEST]
        #[message = "Exactly one of `percentage` or `fixed` must be provided, \
                     and must not be negative"]
        InvalidAmount,

        #[code = "INVALID_DISCOUNT_PERIOD"]
        #[status = BAD_REQUEST]
        #[message = "End date of a `Discount` period must not be before the \
                     start one"]
        InvalidPeriod,
    }
}

define_error! {
    enum GuestsError {
        #[code = "INVALID_GUESTS_NUMBER"]
        #[status = BAD_REQUEST]
        #[message = "Number of guests must be a positive integer"]
        Invalid,
    }
}

define_error! {
    enum RatingError {
        #[code = "INVALID_RATING"]
        #[status = BAD_REQUEST]
        #[message = "Rating must be an integer in the 1..=5 range"]
        Invalid,
    }
}

define_error! {
    enum RoomsError {
        #[code = "INVALID_COUNT"]
        #[status = BAD_REQUEST]
        #[message = "Count must be a non-negative integer"]
        Invalid,
    }
}

impl AsError for command::create_user::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "EMAIL_OCCUPIED"]
                #[status = CONFLICT]
                #[message = "`UserEmail` is occupied by another `User`"]
                EmailOccupied,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::EmailOccupied(_) => Some(Error::EmailOccupied.into()),
            Self::PasswordHash(_) => None,
        }
    }
}

impl AsError for command::create_user_session::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "WRONG_CREDENTIALS"]
                #[status = FORBIDDEN]
                #[message = "Provided credentials does not match any `User`"]
                WrongCredentials,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::JsonWebTokenEncodeError(_) | Self::PasswordHash(_) => None,
            Self::UserNotExists(_) | Self::WrongCredentials => {
                Some(Error::WrongCredentials.into())
            }
        }
    }
}

impl AsError for command::create_admin_session::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "WRONG_CREDENTIALS"]
                #[status = FORBIDDEN]
                #[message = "Provided credentials does not match any `Admin`"]
                WrongCredentials,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::JsonWebTokenEncodeError(_) | Self::PasswordHash(_) => None,
            Self::AdminNotExists(_) | Self::WrongCredentials => {
                Some(Error::WrongCredentials.into())
            }
        }
    }
}

impl AsError for command::create_booking::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "HOUSE_UNAVAILABLE"]
                #[status = CONFLICT]
                #[message = "`House` is not open for booking"]
                HouseUnavailable,

                #[code = "OVER_CAPACITY"]
                #[status = BAD_REQUEST]
                #[message = "Number of guests exceeds the `House` capacity"]
                OverCapacity,

                #[code = "STAY_OCCUPIED"]
                #[status = CONFLICT]
                #[message = "Requested stay overlaps an active `Booking`"]
                StayOccupied,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::HouseNotExists(_) => {
                Some(api::query::HouseError::NotExists.into())
            }
            Self::HouseUnavailable(_) => Some(Error::HouseUnavailable.into()),
            Self::OverCapacity { .. } => Some(Error::OverCapacity.into()),
            Self::StayOccupied(_) => Some(Error::StayOccupied.into()),
            Self::UserNotExists(_) => None,
        }
    }
}

impl AsError for command::confirm_booking::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::AdminNotExists(_) => None,
            Self::BookingNotExists(_) => {
                Some(api::query::BookingError::NotExists.into())
            }
            Self::InvalidTransition { .. } => {
                Some(TransitionError::Invalid.into())
            }
        }
    }
}

impl AsError for command::cancel_booking::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "NOT_BOOKING_OWNER"]
                #[status = FORBIDDEN]
                #[message = "`Booking` belongs to another `User`"]
                NotOwner,

                #[code = "NOTICE_PERIOD_PASSED"]
                #[status = CONFLICT]
                #[message = "Too few days remain until the check-in to cancel \
                             the `Booking`"]
                NoticePeriodPassed,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::BookingNotExists(_) => {
                Some(api::query::BookingError::NotExists.into())
            }
            Self::InvalidTransition { .. } => {
                Some(TransitionError::Invalid.into())
            }
            Self::NoticePeriodPassed(_) => {
                Some(Error::NoticePeriodPassed.into())
            }
            Self::NotOwner(_) => Some(Error::NotOwner.into()),
        }
    }
}

impl AsError for command::create_house::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
        }
    }
}

impl AsError for command::update_house::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::HouseNotExists(_) => {
                Some(api::query::HouseError::NotExists.into())
            }
        }
    }
}

impl AsError for command::delete_house::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::HouseNotExists(_) => {
                Some(api::query::HouseError::NotExists.into())
            }
        }
    }
}

impl AsError for command::create_discount::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "DISCOUNT_PERIOD_OVERLAPS"]
                #[status = CONFLICT]
                #[message = "Period overlaps another active `Discount` of the \
                             `House`"]
                PeriodOverlaps,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::HouseNotExists(_) => {
                Some(api::query::HouseError::NotExists.into())
            }
            Self::NegativeAmount(_) => {
                Some(DiscountError::InvalidAmount.into())
            }
            Self::PeriodOverlaps(_) => Some(Error::PeriodOverlaps.into()),
        }
    }
}

impl AsError for command::update_discount::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "DISCOUNT_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`Discount` with the specified ID does not exist"]
                NotExists,

                #[code = "DISCOUNT_PERIOD_OVERLAPS"]
                #[status = CONFLICT]
                #[message = "Period overlaps another active `Discount` of the \
                             `House`"]
                PeriodOverlaps,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::DiscountNotExists(_) => Some(Error::NotExists.into()),
            Self::NegativeAmount(_) => {
                Some(DiscountError::InvalidAmount.into())
            }
            Self::PeriodOverlaps(_) => Some(Error::PeriodOverlaps.into()),
        }
    }
}

impl AsError for command::delete_discount::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "DISCOUNT_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`Discount` with the specified ID does not exist"]
                NotExists,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::DiscountNotExists(_) => Some(Error::NotExists.into()),
        }
    }
}

impl AsError for command::create_review::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "ALREADY_REVIEWED"]
                #[status = CONFLICT]
                #[message = "`User` has already reviewed this `House`"]
                AlreadyReviewed,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::AlreadyReviewed { .. } => Some(Error::AlreadyReviewed.into()),
            Self::HouseNotExists(_) => {
                Some(api::query::HouseError::NotExists.into())
            }
            Self::UserNotExists(_) => None,
        }
    }
}

impl AsError for command::update_review::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::NotAuthor(_) => Some(ReviewError::NotAuthor.into()),
            Self::ReviewNotExists(_) => Some(ReviewError::NotExists.into()),
        }
    }
}

impl AsError for command::delete_review::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::AdminNotExists(_) => None,
            Self::NotAuthor(_) => Some(ReviewError::NotAuthor.into()),
            Self::ReviewNotExists(_) => Some(ReviewError::NotExists.into()),
        }
    }
}

impl AsError for command::toggle_favorite::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::HouseNotExists(_) => {
                Some(api::query::HouseError::NotExists.into())
            }
            Self::UserNotExists(_) => None,
        }
    }
}

impl AsError for command::mark_notification_read::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "NOTIFICATION_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`Notification` with the specified ID does not \
                             exist"]
                NotExists,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            // Addressing is not disclosed to the requester.
            Self::NotificationNotExists(_) | Self::NotRecipient(_) => {
                Some(Error::NotExists.into())
            }
        }
    }
}

impl AsError for command::mark_all_notifications_read::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
        }
    }
}

impl AsError for command::update_site_settings::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "SITE_SETTINGS_NOT_INITIALIZED"]
                #[status = NOT_FOUND]
                #[message = "`SiteSettings` have not been initialized yet"]
                NotInitialized,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::NotSeeded => Some(Error::NotInitialized.into()),
        }
    }
}

define_error! {
    enum ReviewError {
        #[code = "REVIEW_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Review` with the specified ID does not exist"]
        NotExists,

        #[code = "NOT_REVIEW_AUTHOR"]
        #[status = FORBIDDEN]
        #[message = "`Review` was left by another `User`"]
        NotAuthor,
    }
}

define_error! {
    enum TransitionError {
        #[code = "INVALID_STATUS_TRANSITION"]
        #[status = CONFLICT]
        #[message = "`Booking` status does not allow the requested transition"]
        Invalid,
    }
}
