//! [`SiteSettings`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{unit, DateTimeOf};
use serde::{Deserialize, Serialize};

use crate::domain::{admin, house, user};
#[cfg(doc)]
use crate::domain::Admin;

/// Singleton record of site-wide content settings.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    /// Localized name of the site.
    pub site_name: Localized,

    /// Localized description shown in the site header.
    pub header_description: Localized,

    /// Localized title of the hero section.
    pub hero_title: Localized,

    /// Localized subtitle of the hero section.
    pub hero_subtitle: Localized,

    /// Localized description shown in the site footer.
    pub footer_description: Localized,

    /// [`Url`] of the site logo.
    ///
    /// [`Url`]: house::Url
    pub logo_url: Option<house::Url>,

    /// [`Url`] of the hero section background video.
    ///
    /// [`Url`]: house::Url
    pub video_url: Option<house::Url>,

    /// Contact [`Phone`] of the site.
    ///
    /// [`Phone`]: user::Phone
    pub contact_phone: user::Phone,

    /// WhatsApp [`Phone`] of the site.
    ///
    /// [`Phone`]: user::Phone
    pub whatsapp_number: user::Phone,

    /// Contact [`Email`] of the site.
    ///
    /// [`Email`]: user::Email
    pub contact_email: user::Email,

    /// [`SocialLinks`] of the site.
    pub social_links: SocialLinks,

    /// [`DateTime`] when these [`SiteSettings`] were updated last time.
    pub updated_at: UpdateDateTime,

    /// ID of the [`Admin`] who updated these [`SiteSettings`] last time.
    pub updated_by: Option<admin::Id>,
}

/// Text localized into every language the site supports.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Localized {
    /// English variant.
    pub en: String,

    /// Arabic variant.
    pub ar: String,

    /// Kurdish variant.
    pub ku: String,
}

/// Social media links of the site.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    /// Facebook page [`Url`].
    ///
    /// [`Url`]: house::Url
    pub facebook: Option<house::Url>,

    /// Instagram page [`Url`].
    ///
    /// [`Url`]: house::Url
    pub instagram: Option<house::Url>,

    /// TikTok page [`Url`].
    ///
    /// [`Url`]: house::Url
    pub tiktok: Option<house::Url>,
}

/// [`DateTime`] when [`SiteSettings`] were updated.
pub type UpdateDateTime = DateTimeOf<(SiteSettings, unit::Update)>;
