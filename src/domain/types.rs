//! Strongly-typed value objects used by domain entities.
//!
//! Identifiers and numeric constraints are wrapped so that invalid values are
//! rejected at the boundary instead of deep inside the persistence layer.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A numeric value required to be positive was zero/negative or invalid.
    #[error("{0} must be greater than zero")]
    NonPositiveNumber(&'static str),
    /// A numeric value required to be non-negative was negative.
    #[error("{0} must be zero or greater")]
    NegativeNumber(&'static str),
    /// A required string was empty.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
}

/// Rejects empty strings. Whitespace is kept as-is.
pub fn require_non_empty(value: &str, field: &'static str) -> Result<(), TypeConstraintError> {
    if value.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(())
    }
}

/// Macro to generate lightweight newtypes for positive identifiers.
///
/// Deserialization goes through `TryFrom<i32>`, so a stored or received id of
/// zero or below is rejected the same way as in `new`.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(try_from = "i32", into = "i32")]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(
    CategoryId,
    "Unique identifier for a category.",
    "category_id"
);
id_newtype!(OfferId, "Unique identifier for an offer.", "offer_id");

/// Strictly positive, finite offer price in standard currency units.
#[derive(Clone, Copy, Debug)]
pub struct OfferPrice(f64);

impl OfferPrice {
    pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositiveNumber("price"))
        }
    }

    pub const fn get(self) -> f64 {
        self.0
    }
}

/// Inclusive bound used when searching offers by price.
///
/// Zero and `+inf` are allowed so that open-ended searches such as
/// `0..=inf` work. Negative values and NaN are rejected.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct PriceBound(f64);

impl PriceBound {
    pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
        if value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NegativeNumber("price bound"))
        }
    }

    pub const fn get(self) -> f64 {
        self.0
    }
}

/// Validated inclusive price interval with `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceRange {
    min: PriceBound,
    max: PriceBound,
}

impl PriceRange {
    /// Builds a range from raw bounds, returning `None` when either bound is
    /// missing, negative or NaN, or when `min > max`.
    pub fn from_bounds(min: Option<f64>, max: Option<f64>) -> Option<Self> {
        let min = PriceBound::new(min?).ok()?;
        let max = PriceBound::new(max?).ok()?;
        if min > max {
            return None;
        }
        Some(Self { min, max })
    }

    pub const fn min(&self) -> PriceBound {
        self.min
    }

    pub const fn max(&self) -> PriceBound {
        self.max
    }

    /// Whether `price` falls inside the range, bounds included.
    pub fn contains(&self, price: f64) -> bool {
        self.min.get() <= price && price <= self.max.get()
    }
}
