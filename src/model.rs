//! Domain enums shared by services, seeding and DDL. Both are stored as text
//! columns and decode straight from them.

use serde::Serialize;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgTypeInfo, PgValueRef, Postgres};
use sqlx::{Decode, Type};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A column held a value outside the enum's text forms.
#[derive(Debug, Error, PartialEq)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Stall payment status. `Vacant` exactly when the stall has no vendor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StallStatus {
    Paid,
    Unpaid,
    Vacant,
}

impl StallStatus {
    pub const ALL: [StallStatus; 3] = [StallStatus::Paid, StallStatus::Unpaid, StallStatus::Vacant];

    pub fn as_str(self) -> &'static str {
        match self {
            StallStatus::Paid => "paid",
            StallStatus::Unpaid => "unpaid",
            StallStatus::Vacant => "vacant",
        }
    }

    pub fn is_occupied(self) -> bool {
        !matches!(self, StallStatus::Vacant)
    }
}

impl FromStr for StallStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paid" => Ok(StallStatus::Paid),
            "unpaid" => Ok(StallStatus::Unpaid),
            "vacant" => Ok(StallStatus::Vacant),
            other => Err(UnknownVariant {
                kind: "stall status",
                value: other.to_string(),
            }),
        }
    }
}

/// Ledger entry type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TransactionKind {
    #[serde(rename = "top-up")]
    TopUp,
    #[serde(rename = "rent")]
    Rent,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::TopUp => "top-up",
            TransactionKind::Rent => "rent",
        }
    }
}

impl FromStr for TransactionKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top-up" => Ok(TransactionKind::TopUp),
            "rent" => Ok(TransactionKind::Rent),
            other => Err(UnknownVariant {
                kind: "transaction type",
                value: other.to_string(),
            }),
        }
    }
}

/// Display, and decoding from any Postgres text column, via `as_str` / `FromStr`.
macro_rules! text_column {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Type<Postgres> for $ty {
            fn type_info() -> PgTypeInfo {
                <str as Type<Postgres>>::type_info()
            }

            fn compatible(ty: &PgTypeInfo) -> bool {
                <str as Type<Postgres>>::compatible(ty)
            }
        }

        impl<'r> Decode<'r, Postgres> for $ty {
            fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
                let text = <&'r str as Decode<'r, Postgres>>::decode(value)?;
                Ok(text.parse()?)
            }
        }
    };
}

text_column!(StallStatus);
text_column!(TransactionKind);
