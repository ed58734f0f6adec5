use std::fmt::{Display, Formatter};

#[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum SystemTopology {
    /// No storage: only the daytime share of the load is covered.
    GridTied,

    /// Battery-backed: generation can be shifted to any time of the day.
    Hybrid,
}

impl SystemTopology {
    /// Decode the stored `systemType`: anything but `Hybrid` is grid-tied.
    pub fn from_system_type(system_type: &str) -> Self {
        if system_type == "Hybrid" { Self::Hybrid } else { Self::GridTied }
    }

    pub const fn has_storage(self) -> bool {
        matches!(self, Self::Hybrid)
    }
}

impl Display for SystemTopology {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GridTied => write!(f, "Grid-tied"),
            Self::Hybrid => write!(f, "Hybrid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_system_type() {
        assert_eq!(SystemTopology::from_system_type("Hybrid"), SystemTopology::Hybrid);
        assert_eq!(SystemTopology::from_system_type("On-grid"), SystemTopology::GridTied);
        assert_eq!(SystemTopology::from_system_type(""), SystemTopology::GridTied);
    }
}
