//! [`SiteSettings`]-related definitions.

use common::DateTime;
use derive_more::From;
use juniper::graphql_object;
use juniper::{GraphQLInputObject, GraphQLObject};
use service::domain;

use crate::{api, Context};

/// Site-wide content settings.
#[derive(Clone, Debug, From)]
pub struct SiteSettings(domain::SiteSettings);

/// Site-wide content settings.
#[graphql_object(context = Context)]
impl SiteSettings {
    /// Localized name of the site.
    #[must_use]
    pub fn site_name(&self) -> Localized {
        self.0.site_name.clone().into()
    }

    /// Localized description shown in the site header.
    #[must_use]
    pub fn header_description(&self) -> Localized {
        self.0.header_description.clone().into()
    }

    /// Localized title of the hero section.
    #[must_use]
    pub fn hero_title(&self) -> Localized {
        self.0.hero_title.clone().into()
    }

    /// Localized subtitle of the hero section.
    #[must_use]
    pub fn hero_subtitle(&self) -> Localized {
        self.0.hero_subtitle.clone().into()
    }

    /// Localized description shown in the site footer.
    #[must_use]
    pub fn footer_description(&self) -> Localized {
        self.0.footer_description.clone().into()
    }

    /// URL of the site logo.
    #[must_use]
    pub fn logo_url(&self) -> Option<api::house::Url> {
        self.0.logo_url.clone().map(Into::into)
    }

    /// URL of the hero section background video.
    #[must_use]
    pub fn video_url(&self) -> Option<api::house::Url> {
        self.0.video_url.clone().map(Into::into)
    }

    /// Contact phone of the site.
    #[must_use]
    pub fn contact_phone(&self) -> api::user::Phone {
        self.0.contact_phone.clone().into()
    }

    /// WhatsApp phone of the site.
    #[must_use]
    pub fn whatsapp_number(&self) -> api::user::Phone {
        self.0.whatsapp_number.clone().into()
    }

    /// Contact email of the site.
    #[must_use]
    pub fn contact_email(&self) -> api::user::Email {
        self.0.contact_email.clone().into()
    }

    /// Social media links of the site.
    #[must_use]
    pub fn social_links(&self) -> SocialLinks {
        self.0.social_links.clone().into()
    }

    /// `DateTime` when these `SiteSettings` were updated last time.
    #[must_use]
    pub fn updated_at(&self) -> DateTime {
        self.0.updated_at.coerce()
    }

    /// `Admin` who updated these `SiteSettings` last time.
    #[must_use]
    pub fn updated_by(&self) -> Option<api::Admin> {
        self.0.updated_by.map(|id| {
            #[expect(
                unsafe_code,
                reason = "`SiteSettings` only refer an existing `Admin`"
            )]
            unsafe {
                api::Admin::new_unchecked(id)
            }
        })
    }
}

/// Text localized into every language the site supports.
#[derive(Clone, Debug, GraphQLObject)]
pub struct Localized {
    /// English variant.
    pub en: String,

    /// Arabic variant.
    pub ar: String,

    /// Kurdish variant.
    pub ku: String,
}

impl From<domain::site_settings::Localized> for Localized {
    fn from(localized: domain::site_settings::Localized) -> Self {
        let domain::site_settings::Localized { en, ar, ku } = localized;
        Self { en, ar, ku }
    }
}

/// Input of a text localized into every language the site supports.
#[derive(Clone, Debug, GraphQLInputObject)]
pub struct LocalizedInput {
    /// English variant.
    pub en: String,

    /// Arabic variant.
    pub ar: String,

    /// Kurdish variant.
    pub ku: String,
}

impl From<LocalizedInput> for domain::site_settings::Localized {
    fn from(localized: LocalizedInput) -> Self {
        let LocalizedInput { en, ar, ku } = localized;
        Self { en, ar, ku }
    }
}

/// Social media links of the site.
#[derive(Clone, Debug)]
pub struct SocialLinks(domain::site_settings::SocialLinks);

impl From<domain::site_settings::SocialLinks> for SocialLinks {
    fn from(links: domain::site_settings::SocialLinks) -> Self {
        Self(links)
    }
}

/// Social media links of the site.
#[graphql_object(context = Context)]
impl SocialLinks {
    /// Facebook page URL.
    #[must_use]
    pub fn facebook(&self) -> Option<api::house::Url> {
        self.0.facebook.clone().map(Into::into)
    }

    /// Instagram page URL.
    #[must_use]
    pub fn instagram(&self) -> Option<api::house::Url> {
        self.0.instagram.clone().map(Into::into)
    }

    /// TikTok page URL.
    #[must_use]
    pub fn tiktok(&self) -> Option<api::house::Url> {
        self.0.tiktok.clone().map(Into::into)
    }
}

/// Input of the social media links of the site.
#[derive(Clone, Debug, GraphQLInputObject)]
pub struct SocialLinksInput {
    /// Facebook page URL.
    pub facebook: Option<api::house::Url>,

    /// Instagram page URL.
    pub instagram: Option<api::house::Url>,

    /// TikTok page URL.
    pub tiktok: Option<api::house::Url>,
}

impl From<SocialLinksInput> for domain::site_settings::SocialLinks {
    fn from(links: SocialLinksInput) -> Self {
        let SocialLinksInput {
            facebook,
            instagram,
            tiktok,
        } = links;
        Self {
            facebook: facebook.map(Into::into),
            instagram: instagram.map(Into::into),
            tiktok: tiktok.map(Into::into),
        }
    }
}
