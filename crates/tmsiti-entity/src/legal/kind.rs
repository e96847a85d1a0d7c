//! Legal act kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The category of a legal act.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
pub enum LegalActKind {
    /// Law.
    Qonun,
    /// Resolution.
    Qaror,
    /// Decree.
    Farmon,
}

impl LegalActKind {
    /// Return the stored name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Qonun => "Qonun",
            Self::Qaror => "Qaror",
            Self::Farmon => "Farmon",
        }
    }
}

impl fmt::Display for LegalActKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LegalActKind {
    type Err = tmsiti_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Qonun" => Ok(Self::Qonun),
            "Qaror" => Ok(Self::Qaror),
            "Farmon" => Ok(Self::Farmon),
            _ => Err(tmsiti_core::AppError::validation(format!(
                "Invalid legal act type '{s}', expected one of Qonun, Qaror, Farmon"
            ))),
        }
    }
}
