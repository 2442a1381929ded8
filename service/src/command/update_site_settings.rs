//! [`Command`] for updating the [`SiteSettings`].

use common::{
    operations::{By, Select, Update},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::{
    site_settings::{Localized, SocialLinks},
    Admin,
};
use crate::{
    domain::{admin, house, site_settings, user, SiteSettings},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating the [`SiteSettings`].
///
/// Only the provided fields are changed.
#[derive(Clone, Debug)]
pub struct UpdateSiteSettings {
    /// ID of the [`Admin`] performing the update.
    pub admin_id: admin::Id,

    /// New localized name of the site.
    pub site_name: Option<site_settings::Localized>,

    /// New localized header description.
    pub header_description: Option<site_settings::Localized>,

    /// New localized hero title.
    pub hero_title: Option<site_settings::Localized>,

    /// New localized hero subtitle.
    pub hero_subtitle: Option<site_settings::Localized>,

    /// New localized footer description.
    pub footer_description: Option<site_settings::Localized>,

    /// New logo URL.
    pub logo_url: Option<Option<house::Url>>,

    /// New hero video URL.
    pub video_url: Option<Option<house::Url>>,

    /// New contact phone.
    pub contact_phone: Option<user::Phone>,

    /// New WhatsApp phone.
    pub whatsapp_number: Option<user::Phone>,

    /// New contact email.
    pub contact_email: Option<user::Email>,

    /// New [`SocialLinks`].
    pub social_links: Option<site_settings::SocialLinks>,
}

impl<Db> Command<UpdateSiteSettings> for Service<Db>
where
    Db: Database<
            Select<By<Option<SiteSettings>, ()>>,
            Ok = Option<SiteSettings>,
            Err = Traced<database::Error>,
        > + Database<
            Update<SiteSettings>,
            Ok = (),
            Err = Traced<database::Error>,
        >,
{
    type Ok = SiteSettings;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateSiteSettings,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateSiteSettings {
            admin_id,
            site_name,
            header_description,
            hero_title,
            hero_subtitle,
            footer_description,
            logo_url,
            video_url,
            contact_phone,
            whatsapp_number,
            contact_email,
            social_links,
        } = cmd;

        let mut settings = self
            .database()
            .execute(Select(By::<Option<SiteSettings>, _>::new(())))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::NotSeeded)
            .map_err(tracerr::wrap!())?;

        if let Some(site_name) = site_name {
            settings.site_name = site_name;
        }
        if let Some(header_description) = header_description {
            settings.header_description = header_description;
        }
        if let Some(hero_title) = hero_title {
            settings.hero_title = hero_title;
        }
        if let Some(hero_subtitle) = hero_subtitle {
            settings.hero_subtitle = hero_subtitle;
        }
        if let Some(footer_description) = footer_description {
            settings.footer_description = footer_description;
        }
        if let Some(logo_url) = logo_url {
            settings.logo_url = logo_url;
        }
        if let Some(video_url) = video_url {
            settings.video_url = video_url;
        }
        if let Some(contact_phone) = contact_phone {
            settings.contact_phone = contact_phone;
        }
        if let Some(whatsapp_number) = whatsapp_number {
            settings.whatsapp_number = whatsapp_number;
        }
        if let Some(contact_email) = contact_email {
            settings.contact_email = contact_email;
        }
        if let Some(social_links) = social_links {
            settings.social_links = social_links;
        }
        settings.updated_at = DateTime::now().coerce();
        settings.updated_by = Some(admin_id);

        self.database()
            .execute(Update(settings.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(settings)
    }
}

/// Error of [`UpdateSiteSettings`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`SiteSettings`] record has not been seeded yet.
    #[display("Site settings are not initialized")]
    NotSeeded,
}
