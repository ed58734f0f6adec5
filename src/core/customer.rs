use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum CustomerClass {
    /// Residential, billed by the progressive bracket schedule.
    Household,

    /// Commercial, flat average rate.
    Business,

    /// Industrial, flat average rate.
    Manufacturing,

    /// Public administration and non-profit, flat average rate.
    Administrative,
}

impl CustomerClass {
    pub const ALL: [Self; 4] =
        [Self::Household, Self::Business, Self::Manufacturing, Self::Administrative];

    /// Label used by the stored reports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Household => "Hộ gia đình",
            Self::Business => "Kinh doanh",
            Self::Manufacturing => "Sản xuất",
            Self::Administrative => "Hành chính sự nghiệp",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|class| class.label() == label)
    }
}

impl Display for CustomerClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Household => write!(f, "Household"),
            Self::Business => write!(f, "Business"),
            Self::Manufacturing => write!(f, "Manufacturing"),
            Self::Administrative => write!(f, "Administrative"),
        }
    }
}
