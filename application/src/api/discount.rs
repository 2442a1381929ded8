//! [`Discount`]-related definitions.

use common::{Date, DateTime, Money, Percent};
use derive_more::{Display, From, Into};
use juniper::graphql_object;
use juniper::{GraphQLEnum, GraphQLScalar};
use service::domain;
use uuid::Uuid;

use crate::{api, Context};

/// Price reduction applied to a `House` within a period of dates.
#[derive(Clone, Debug, From)]
pub struct Discount(domain::Discount);

/// Price reduction applied to a `House` within a period of dates.
#[graphql_object(context = Context)]
impl Discount {
    /// Unique identifier of this `Discount`.
    #[must_use]
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// `House` this `Discount` applies to.
    #[must_use]
    pub fn house(&self) -> api::House {
        #[expect(
            unsafe_code,
            reason = "`Discount` always refers an existing `House`"
        )]
        unsafe {
            api::House::new_unchecked(self.0.house_id)
        }
    }

    /// Kind of this `Discount` amount.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self.0.amount {
            domain::discount::Amount::Percentage(_) => Kind::Percentage,
            domain::discount::Amount::Fixed(_) => Kind::Fixed,
        }
    }

    /// Percentage taken off the base price, if this `Discount` is a
    /// percentage one.
    #[must_use]
    pub fn percentage(&self) -> Option<Percent> {
        if let domain::discount::Amount::Percentage(pct) = self.0.amount {
            Some(pct)
        } else {
            None
        }
    }

    /// Fixed sum taken off the base price, if this `Discount` is a fixed one.
    #[must_use]
    pub fn fixed(&self) -> Option<Money> {
        if let domain::discount::Amount::Fixed(sum) = self.0.amount {
            Some(sum)
        } else {
            None
        }
    }

    /// First `Date` this `Discount` applies on.
    #[must_use]
    pub fn start_date(&self) -> Date {
        self.0.period.start_date.coerce()
    }

    /// Last `Date` this `Discount` applies on.
    #[must_use]
    pub fn end_date(&self) -> Date {
        self.0.period.end_date.coerce()
    }

    /// Indicator whether this `Discount` is currently active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.0.is_active
    }

    /// `Admin` who created this `Discount`.
    #[must_use]
    pub fn created_by(&self) -> api::Admin {
        #[expect(
            unsafe_code,
            reason = "`Discount` always refers an existing `Admin`"
        )]
        unsafe {
            api::Admin::new_unchecked(self.0.created_by)
        }
    }

    /// `DateTime` when this `Discount` was created.
    #[must_use]
    pub fn created_at(&self) -> DateTime {
        self.0.created_at.coerce()
    }
}

/// Unique identifier of a `Discount`.
#[derive(
    Clone, Copy, Debug, Display, Eq, From, GraphQLScalar, Into, PartialEq,
)]
#[from(domain::discount::Id)]
#[into(domain::discount::Id)]
#[graphql(name = "DiscountId", transparent)]
pub struct Id(Uuid);

/// Kind of a `Discount` amount.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
#[graphql(name = "DiscountKind")]
pub enum Kind {
    /// Percentage taken off the base price.
    Percentage,

    /// Fixed sum taken off the base price, clamped at zero.
    Fixed,
}

/// Quotation of a single night price, with any `Discount` applied.
#[derive(Clone, Debug)]
pub struct Quote {
    /// Final price of the night.
    price: Money,

    /// `Discount` applied to the night, if any.
    applied: Option<Discount>,
}

impl From<service::query::discount::Output> for Quote {
    fn from(output: service::query::discount::Output) -> Self {
        Self {
            price: output.price,
            applied: output.applied.map(Into::into),
        }
    }
}

/// Quotation of a single night price, with any `Discount` applied.
#[graphql_object(name = "PriceQuote", context = Context)]
impl Quote {
    /// Final price of the night.
    #[must_use]
    pub fn price(&self) -> Money {
        self.price
    }

    /// `Discount` applied to the night, if any.
    #[must_use]
    pub fn applied(&self) -> &Option<Discount> {
        &self.applied
    }
}
