use crate::epoch::expand_two_digit_year;
use derive_more::Display;
use serde::Serialize;

/// COSPAR international designator, e.g. `98067A`
///
/// The fragments are kept as they appear on line 1. The launch year stays a
/// two-digit code; see [`InternationalDesignator::launch_year_full`].
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display, Serialize)]
#[display(fmt = "{}{}{}", "launch_year", "launch_number", "launch_piece")]
pub struct InternationalDesignator {
    /// Last two digits of the launch year
    pub launch_year: String,

    /// Launch number of the year
    pub launch_number: String,

    /// Piece of the launch, may be empty
    pub launch_piece: String,
}

impl InternationalDesignator {
    pub fn new<Y, N, P>(launch_year: Y, launch_number: N, launch_piece: P) -> Self
    where
        Y: Into<String>,
        N: Into<String>,
        P: Into<String>,
    {
        Self {
            launch_year: launch_year.into(),
            launch_number: launch_number.into(),
            launch_piece: launch_piece.into(),
        }
    }

    /// Four-digit launch year, using the same century pivot as the epoch.
    ///
    /// Returns `None` when the two-digit code is not a number.
    pub fn launch_year_full(&self) -> Option<i32> {
        let year = self.launch_year.parse::<u32>().ok()?;
        expand_two_digit_year(year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            InternationalDesignator::new("98", "067", "A").to_string(),
            "98067A"
        );
        assert_eq!(InternationalDesignator::new("58", "002", "").to_string(), "58002");
    }

    #[test]
    fn full_launch_year() {
        assert_eq!(
            InternationalDesignator::new("98", "067", "A").launch_year_full(),
            Some(1998)
        );
        assert_eq!(
            InternationalDesignator::new("09", "005", "A").launch_year_full(),
            Some(2009)
        );
        assert_eq!(
            InternationalDesignator::new("  ", "", "").launch_year_full(),
            None
        );
        assert_eq!(
            InternationalDesignator::new("9X", "005", "A").launch_year_full(),
            None
        );
    }
}
