use serde::{Deserialize, Serialize};

/// Paging metadata present on every `MRData` envelope.
///
/// The API sends all of these as strings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Pagination {
    #[serde(default)]
    pub xmlns: Option<String>,
    pub series: String,
    pub url: String,
    pub limit: String,
    pub offset: String,
    pub total: String,
}

impl Pagination {
    /// Total number of records matching the query, across all pages
    pub fn total_records(&self) -> usize {
        self.total.parse().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub lat: String,
    pub long: String,
    pub locality: String,
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Circuit {
    #[serde(rename = "circuitId")]
    pub circuit_id: String,
    pub url: String,
    #[serde(rename = "circuitName")]
    pub circuit_name: String,
    #[serde(rename = "Location")]
    pub location: Location,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Constructor {
    #[serde(rename = "constructorId")]
    pub constructor_id: String,
    pub url: String,
    pub name: String,
    pub nationality: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Driver {
    #[serde(rename = "driverId")]
    pub driver_id: String,
    #[serde(rename = "permanentNumber", default)]
    pub permanent_number: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    pub url: String,
    #[serde(rename = "givenName")]
    pub given_name: String,
    #[serde(rename = "familyName")]
    pub family_name: String,
    #[serde(rename = "dateOfBirth", default)]
    pub date_of_birth: Option<String>,
    pub nationality: String,
}

impl Driver {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_optional_fields_default() {
        let json = r#"{
            "driverId": "fangio",
            "url": "http://en.wikipedia.org/wiki/Juan_Manuel_Fangio",
            "givenName": "Juan",
            "familyName": "Fangio",
            "nationality": "Argentine"
        }"#;

        let driver: Driver = serde_json::from_str(json).unwrap();
        assert_eq!(driver.driver_id, "fangio");
        assert_eq!(driver.permanent_number, None);
        assert_eq!(driver.code, None);
        assert_eq!(driver.full_name(), "Juan Fangio");
    }

    #[test]
    fn test_pagination_total_records() {
        let pagination = Pagination {
            xmlns: None,
            series: "f1".to_string(),
            url: "http://ergast.com/api/f1/seasons.json".to_string(),
            limit: "30".to_string(),
            offset: "0".to_string(),
            total: "74".to_string(),
        };
        assert_eq!(pagination.total_records(), 74);

        let garbled = Pagination {
            total: "n/a".to_string(),
            ..pagination
        };
        assert_eq!(garbled.total_records(), 0);
    }
}
