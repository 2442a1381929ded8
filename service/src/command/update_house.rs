//! [`Command`] for updating a [`House`].

use common::{
    operations::{By, Select, Update},
    DateTime, Money,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{house, user, House},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating a [`House`].
///
/// Only the provided fields are changed.
#[derive(Clone, Debug)]
pub struct UpdateHouse {
    /// ID of the [`House`] to update.
    pub house_id: house::Id,

    /// New title of the [`House`].
    pub title: Option<house::Title>,

    /// New area of the [`House`].
    pub area: Option<house::Area>,

    /// New city of the [`House`].
    pub city: Option<house::City>,

    /// New price of one night at the [`House`].
    pub price_per_night: Option<Money>,

    /// New number of bedrooms in the [`House`].
    pub bedrooms: Option<house::Bedrooms>,

    /// New number of bathrooms in the [`House`].
    pub bathrooms: Option<house::Bathrooms>,

    /// New capacity of the [`House`].
    pub capacity: Option<house::Capacity>,

    /// New indicator whether the [`House`] offers parking.
    pub has_parking: Option<bool>,

    /// New indicator whether the [`House`] accepts bookings.
    pub is_available: Option<bool>,

    /// New image URLs of the [`House`].
    pub images: Option<Vec<house::Url>>,

    /// New description of the [`House`].
    pub description: Option<house::Description>,

    /// New amenities of the [`House`].
    pub amenities: Option<Vec<house::Amenity>>,

    /// New contact phone of the [`House`].
    pub contact_phone: Option<user::Phone>,

    /// New WhatsApp phone of the [`House`].
    pub whatsapp_number: Option<user::Phone>,

    /// New geographical location of the [`House`].
    pub location: Option<house::Location>,
}

impl<Db> Command<UpdateHouse> for Service<Db>
where
    Db: Database<
            Select<By<Option<House>, house::Id>>,
            Ok = Option<House>,
            Err = Traced<database::Error>,
        > + Database<Update<House>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = House;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: UpdateHouse) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateHouse {
            house_id,
            title,
            area,
            city,
            price_per_night,
            bedrooms,
            bathrooms,
            capacity,
            has_parking,
            is_available,
            images,
            description,
            amenities,
            contact_phone,
            whatsapp_number,
            location,
        } = cmd;

        let mut house = self
            .database()
            .execute(Select(By::<Option<House>, _>::new(house_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::HouseNotExists(house_id))
            .map_err(tracerr::wrap!())?;

        if let Some(title) = title {
            house.title = title;
        }
        if let Some(area) = area {
            house.area = area;
        }
        if let Some(city) = city {
            house.city = city;
        }
        if let Some(price) = price_per_night {
            house.price_per_night = price;
        }
        if let Some(bedrooms) = bedrooms {
            house.bedrooms = bedrooms;
        }
        if let Some(bathrooms) = bathrooms {
            house.bathrooms = bathrooms;
        }
        if let Some(capacity) = capacity {
            house.capacity = capacity;
        }
        if let Some(has_parking) = has_parking {
            house.has_parking = has_parking;
        }
        if let Some(is_available) = is_available {
            house.is_available = is_available;
        }
        if let Some(images) = images {
            house.images = images;
        }
        if let Some(description) = description {
            house.description = description;
        }
        if let Some(amenities) = amenities {
            house.amenities = amenities;
        }
        if let Some(contact_phone) = contact_phone {
            house.contact_phone = contact_phone;
        }
        if let Some(whatsapp_number) = whatsapp_number {
            house.whatsapp_number = whatsapp_number;
        }
        if let Some(location) = location {
            house.location = location;
        }
        house.updated_at = Some(DateTime::now().coerce());

        self.database()
            .execute(Update(house.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(house)
    }
}

/// Error of [`UpdateHouse`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`House`] with the provided ID does not exist.
    #[display("`House(id: {_0})` does not exist")]
    #[from(ignore)]
    HouseNotExists(#[error(not(source))] house::Id),
}
