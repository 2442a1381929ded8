//! [`Booking`] read model definition.

#[cfg(doc)]
use crate::domain::Booking;

/// Wrapper around [`Booking`] indicating that it [`is_active()`].
///
/// [`is_active()`]: Booking::is_active
#[derive(Clone, Copy, Debug)]
pub struct Active<T>(pub T);
