//! [`House`] definitions.

use std::sync::LazyLock;

#[cfg(doc)]
use common::DateTime;
use common::{unit, DateTimeOf, Money};
use derive_more::{AsRef, Display, From, FromStr, Into};
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::user::Phone;

/// Summer house available for renting.
#[derive(Clone, Debug, Deserialize, From, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct House {
    /// ID of this [`House`].
    pub id: Id,

    /// [`Title`] of this [`House`].
    pub title: Title,

    /// [`Area`] this [`House`] is located in.
    pub area: Area,

    /// [`City`] this [`House`] is located in.
    pub city: City,

    /// Price of a single night of staying in this [`House`].
    pub price_per_night: Money,

    /// Average [`Rating`] of this [`House`], derived from its reviews.
    pub rating: Rating,

    /// Number of reviews this [`House`] has received.
    pub reviews_count: ReviewsCount,

    /// Number of bedrooms in this [`House`].
    pub bedrooms: Bedrooms,

    /// Number of bathrooms in this [`House`].
    pub bathrooms: Bathrooms,

    /// Maximum number of guests this [`House`] accommodates.
    pub capacity: Capacity,

    /// Indicator whether this [`House`] has a parking.
    pub has_parking: bool,

    /// Indicator whether this [`House`] is open for booking.
    pub is_available: bool,

    /// [`Url`]s of this [`House`] images.
    pub images: Vec<Url>,

    /// [`Description`] of this [`House`].
    pub description: Description,

    /// [`Amenity`]s of this [`House`].
    pub amenities: Vec<Amenity>,

    /// Contact [`Phone`] of this [`House`] owner.
    pub contact_phone: Phone,

    /// WhatsApp [`Phone`] of this [`House`] owner.
    pub whatsapp_number: Phone,

    /// Map [`Location`] of this [`House`].
    pub location: Location,

    /// [`DateTime`] when this [`House`] was created.
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`House`] was updated last time.
    pub updated_at: Option<UpdateDateTime>,
}

/// ID of a [`House`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Title of a [`House`].
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[as_ref(str, String)]
pub struct Title(String);

impl Title {
    /// Creates a new [`Title`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `title` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    /// Creates a new [`Title`] if the given `title` is valid.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Option<Self> {
        let title = title.into();
        Self::check(&title).then_some(Self(title))
    }

    /// Checks whether the given `title` is a valid [`Title`].
    fn check(title: impl AsRef<str>) -> bool {
        let title = title.as_ref();
        title.trim() == title && !title.is_empty() && title.len() <= 256
    }
}

impl FromStr for Title {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Title`")
    }
}

/// Area a [`House`] is located in.
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[as_ref(str, String)]
pub struct Area(String);

impl Area {
    /// Creates a new [`Area`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `area` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(area: impl Into<String>) -> Self {
        Self(area.into())
    }

    /// Creates a new [`Area`] if the given `area` is valid.
    #[must_use]
    pub fn new(area: impl Into<String>) -> Option<Self> {
        let area = area.into();
        Self::check(&area).then_some(Self(area))
    }

    /// Checks whether the given `area` is a valid [`Area`].
    fn check(area: impl AsRef<str>) -> bool {
        let area = area.as_ref();
        area.trim() == area && !area.is_empty() && area.len() <= 128
    }
}

impl FromStr for Area {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Area`")
    }
}

/// City a [`House`] is located in.
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[as_ref(str, String)]
pub struct City(String);

impl City {
    /// Creates a new [`City`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `city` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(city: impl Into<String>) -> Self {
        Self(city.into())
    }

    /// Creates a new [`City`] if the given `city` is valid.
    #[must_use]
    pub fn new(city: impl Into<String>) -> Option<Self> {
        let city = city.into();
        Self::check(&city).then_some(Self(city))
    }

    /// Checks whether the given `city` is a valid [`City`].
    fn check(city: impl AsRef<str>) -> bool {
        let city = city.as_ref();
        city.trim() == city && !city.is_empty() && city.len() <= 128
    }
}

impl FromStr for City {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `City`")
    }
}

/// Average rating of a [`House`], in the `0.0..=5.0` range.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Rating(Decimal);

impl Rating {
    /// Creates a new [`Rating`].
    ///
    /// # Safety
    ///
    /// The provided value must be in the `0.0..=5.0` range.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub const unsafe fn new_unchecked(val: Decimal) -> Self {
        Self(val)
    }

    /// Creates a new [`Rating`] if the provided value is in the `0.0..=5.0`
    /// range.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        (val >= Decimal::ZERO && val <= Decimal::from(5)).then_some(Self(val))
    }

    /// Returns the numeric value of this [`Rating`].
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

/// Number of reviews a [`House`] has received.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    Into,
    PartialEq,
    Serialize,
)]
pub struct ReviewsCount(u32);

/// Number of bedrooms in a [`House`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Bedrooms(u16);

/// Number of bathrooms in a [`House`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Bathrooms(u16);

/// Maximum number of guests a [`House`] accommodates.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Capacity(u16);

impl Capacity {
    /// Returns whether the provided number of guests fits this [`Capacity`].
    #[must_use]
    pub const fn fits(self, guests: u16) -> bool {
        guests <= self.0
    }
}

/// URL of an external resource.
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[as_ref(str, String)]
pub struct Url(String);

impl Url {
    /// Creates a new [`Url`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `url` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Creates a new [`Url`] if the given `url` is valid.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Option<Self> {
        let url = url.into();
        Self::check(&url).then_some(Self(url))
    }

    /// Checks whether the given `url` is a valid [`Url`].
    fn check(url: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Url`] format.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^(https?://|/)\S+$").expect("valid regex")
        });

        REGEX.is_match(url.as_ref())
    }
}

impl FromStr for Url {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Url`")
    }
}

/// Description of a [`House`].
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[as_ref(str, String)]
pub struct Description(String);

impl Description {
    /// Creates a new [`Description`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `text` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Creates a new [`Description`] if the given `text` is valid.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        Self::check(&text).then_some(Self(text))
    }

    /// Checks whether the given `text` is a valid [`Description`].
    fn check(text: impl AsRef<str>) -> bool {
        text.as_ref().len() <= 8192
    }
}

impl FromStr for Description {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Description`")
    }
}

/// Single amenity of a [`House`].
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[as_ref(str, String)]
pub struct Amenity(String);

impl Amenity {
    /// Creates a new [`Amenity`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`Amenity`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Amenity`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 64
    }
}

impl FromStr for Amenity {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Amenity`")
    }
}

/// Map location of a [`House`].
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Latitude of the location, in degrees.
    pub latitude: f64,

    /// Longitude of the location, in degrees.
    pub longitude: f64,
}

/// [`DateTime`] when a [`House`] was created.
pub type CreationDateTime = DateTimeOf<(House, unit::Creation)>;

/// [`DateTime`] when a [`House`] was updated.
pub type UpdateDateTime = DateTimeOf<(House, unit::Update)>;
