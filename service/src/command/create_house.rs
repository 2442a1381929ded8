//! [`Command`] for creating a new [`House`].

use common::{operations::Insert, DateTime, Money};
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::{
    house::{
        Amenity, Area, Bathrooms, Bedrooms, Capacity, City, Description,
        Location, Title, Url,
    },
    user::Phone,
};
use crate::{
    domain::{house, user, House},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`House`].
#[derive(Clone, Debug)]
pub struct CreateHouse {
    /// [`Title`] of a new [`House`].
    pub title: house::Title,

    /// [`Area`] of a new [`House`].
    pub area: house::Area,

    /// [`City`] of a new [`House`].
    pub city: house::City,

    /// Price of one night at a new [`House`].
    pub price_per_night: Money,

    /// Number of bedrooms in a new [`House`].
    pub bedrooms: house::Bedrooms,

    /// Number of bathrooms in a new [`House`].
    pub bathrooms: house::Bathrooms,

    /// [`Capacity`] of a new [`House`].
    pub capacity: house::Capacity,

    /// Indicator whether a new [`House`] offers parking.
    pub has_parking: bool,

    /// Indicator whether a new [`House`] accepts bookings.
    pub is_available: bool,

    /// Image [`Url`]s of a new [`House`].
    pub images: Vec<house::Url>,

    /// [`Description`] of a new [`House`].
    pub description: house::Description,

    /// [`Amenity`]s of a new [`House`].
    pub amenities: Vec<house::Amenity>,

    /// Contact [`Phone`] of a new [`House`].
    pub contact_phone: user::Phone,

    /// WhatsApp [`Phone`] of a new [`House`].
    pub whatsapp_number: user::Phone,

    /// Geographical [`Location`] of a new [`House`].
    pub location: house::Location,
}

impl<Db> Command<CreateHouse> for Service<Db>
where
    Db: Database<Insert<House>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = House;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CreateHouse) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateHouse {
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

        let house = House {
            id: house::Id::new(),
            title,
            area,
            city,
            price_per_night,
            rating: house::Rating::default(),
            reviews_count: house::ReviewsCount::default(),
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
            created_at: DateTime::now().coerce(),
            updated_at: None,
        };

        self.database()
            .execute(Insert(house.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(house)
    }
}

/// Error of [`CreateHouse`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),
}
