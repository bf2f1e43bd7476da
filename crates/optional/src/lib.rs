//! A container holding zero or one value.
//!
//! [`Optional`] is built either present ([`Optional::new`]) or absent ([`Optional::empty`]) and
//! keeps that state for its whole life. Retrieving the value from an absent container fails with
//! [`ValueAbsent`]; [`Optional::or_else`] never fails.
//!
//! ```
//! use optional::{Optional, ValueAbsent};
//!
//! let answer = Optional::new(42);
//! assert_eq!(answer.get(), Ok(42));
//!
//! let nothing = Optional::<i32>::empty();
//! assert_eq!(nothing.get(), Err(ValueAbsent));
//! assert_eq!(nothing.or_else(100), 100);
//! ```
pub mod logger;

use std::{any, error, fmt};

use derive_where::derive_where;

/// Target of the events emitted when a value is requested from an empty container.
pub const ABSENT_TARGET: &str = "optional::absent";

/// Zero or one value of type `T`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive_where(Default)]
pub enum Optional<T> {
    Present(T),
    #[derive_where(default)]
    Absent,
}

impl<T> Optional<T> {
    pub const fn new(value: T) -> Self {
        Optional::Present(value)
    }

    pub const fn empty() -> Self {
        Optional::Absent
    }

    pub const fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    pub const fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Converts from `&Optional<T>` to `Optional<&T>`. Useful to call [`Optional::get`] and
    /// [`Optional::or_else`] when `T` is not [`Clone`].
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Consumes the container and returns the held value.
    pub fn into_value(self) -> Result<T, ValueAbsent> {
        match self {
            Optional::Present(value) => Ok(value),
            Optional::Absent => Err(absent::<T>()),
        }
    }
}

impl<T: Clone> Optional<T> {
    /// Returns a copy of the held value, or [`ValueAbsent`] if there is none.
    pub fn get(&self) -> Result<T, ValueAbsent> {
        match self {
            Optional::Present(value) => Ok(value.clone()),
            Optional::Absent => Err(absent::<T>()),
        }
    }

    /// Returns a copy of the held value, or `default` if there is none.
    pub fn or_else(&self, default: T) -> T {
        match self {
            Optional::Present(value) => value.clone(),
            Optional::Absent => default,
        }
    }
}

impl<T: Clone + Default> Optional<T> {
    /// Like [`Optional::get`] but always produces a value: when the container is empty the
    /// result is `T::default()` paired with the error. That value is a placeholder and must not
    /// be used unless the status is `Ok`.
    pub fn get_or_default(&self) -> (T, Result<(), ValueAbsent>) {
        match self.get() {
            Ok(value) => (value, Ok(())),
            Err(err) => (T::default(), Err(err)),
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Optional::Present(value),
            None => Optional::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}

/// Error returned when a value is requested from an empty [`Optional`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ValueAbsent;

impl fmt::Display for ValueAbsent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no value present")
    }
}

impl error::Error for ValueAbsent {}

fn absent<T>() -> ValueAbsent {
    tracing::trace!(target: ABSENT_TARGET, ty = any::type_name::<T>(), "no value present");
    ValueAbsent
}
