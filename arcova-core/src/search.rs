use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use arcova_shared::CabinClass;

/// Hotel search input. Every field is optional; unset fields never narrow
/// the result set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HotelSearchCriteria {
    /// Free text matched case-insensitively against city, country and
    /// property name.
    pub destination: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    /// Property qualifies if ANY room type sleeps at least this many.
    pub guests: Option<u32>,
    /// Inclusive star-rating membership set.
    pub stars: Option<Vec<u8>>,
}

impl HotelSearchCriteria {
    pub fn destination(dest: impl Into<String>) -> Self {
        Self {
            destination: Some(dest.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FlightSearchCriteria {
    /// Matched against origin city or airport code.
    pub origin: Option<String>,
    /// Matched against destination city or airport code.
    pub destination: Option<String>,
    pub cabin_class: Option<CabinClass>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CarSearchCriteria {
    /// Accepted but currently a pass-through: the fixture fleet is available
    /// everywhere. Becomes a real filter once a live inventory backend exists.
    pub location: Option<String>,
    pub vehicle_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criteria_deserialization() {
        let json = r#"
            {
                "destination": "Santorini",
                "check_in": "2026-04-22",
                "check_out": "2026-04-28",
                "guests": 2
            }
        "#;
        let criteria: HotelSearchCriteria =
            serde_json::from_str(json).expect("failed to deserialize");
        assert_eq!(criteria.destination.as_deref(), Some("Santorini"));
        assert_eq!(
            criteria.check_in,
            Some(NaiveDate::from_ymd_opt(2026, 4, 22).unwrap())
        );
        assert_eq!(criteria.stars, None);
    }
}
