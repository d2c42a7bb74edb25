//! Travel modes understood by the route risk aggregator.
//!
//! # Examples
//! ```
//! use wayfare_core::TravelMode;
//!
//! assert_eq!(TravelMode::Walking.as_str(), "walking");
//! assert_eq!("cycling".parse::<TravelMode>(), Ok(TravelMode::Cycling));
//! ```

/// How the traveller intends to cover the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TravelMode {
    /// Motor vehicle travel. The only mode allowed on high-risk routes.
    #[default]
    Driving,
    /// Travel on foot.
    Walking,
    /// Travel by bicycle.
    Cycling,
}

impl TravelMode {
    /// Every supported mode, in declaration order.
    pub const ALL: [Self; 3] = [Self::Driving, Self::Walking, Self::Cycling];

    /// Return the mode as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Cycling => "cycling",
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TravelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "driving" => Ok(Self::Driving),
            "walking" => Ok(Self::Walking),
            "cycling" => Ok(Self::Cycling),
            _ => Err(format!(
                "unknown travel mode '{s}' (expected driving, walking or cycling)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("Driving", TravelMode::Driving)]
    #[case(" walking ", TravelMode::Walking)]
    #[case("CYCLING", TravelMode::Cycling)]
    fn parsing_is_case_insensitive(#[case] raw: &str, #[case] expected: TravelMode) {
        assert_eq!(TravelMode::from_str(raw), Ok(expected));
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = TravelMode::from_str("teleport").expect_err("unknown mode");
        assert!(err.contains("unknown travel mode"));
    }

    #[rstest]
    fn display_matches_as_str() {
        for mode in TravelMode::ALL {
            assert_eq!(mode.to_string(), mode.as_str());
        }
    }
}
