use super::common::{Circuit, Pagination};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Circuits {
    #[serde(rename = "MRData")]
    pub data: CircuitsData,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CircuitsData {
    #[serde(flatten)]
    pub pagination: Pagination,
    #[serde(rename = "CircuitTable")]
    pub circuit_table: CircuitTable,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CircuitTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(rename = "Circuits", default)]
    pub circuits: Vec<Circuit>,
}

impl Circuits {
    pub fn circuits(&self) -> &[Circuit] {
        &self.data.circuit_table.circuits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circuits_deserialization() {
        let json = r#"{"MRData":{
            "xmlns":"http://ergast.com/mrd/1.5","series":"f1",
            "url":"http://ergast.com/api/f1/2015/circuits.json",
            "limit":"30","offset":"0","total":"1",
            "CircuitTable":{"season":"2015","Circuits":[{
                "circuitId":"monza",
                "url":"http://en.wikipedia.org/wiki/Autodromo_Nazionale_Monza",
                "circuitName":"Autodromo Nazionale di Monza",
                "Location":{"lat":"45.6156","long":"9.28111","locality":"Monza","country":"Italy"}
            }]}
        }}"#;

        let circuits: Circuits = serde_json::from_str(json).unwrap();
        assert_eq!(circuits.data.pagination.total, "1");
        assert_eq!(circuits.data.circuit_table.season.as_deref(), Some("2015"));
        assert_eq!(circuits.circuits().len(), 1);
        assert_eq!(circuits.circuits()[0].circuit_id, "monza");
        assert_eq!(circuits.circuits()[0].location.country, "Italy");
    }

    #[test]
    fn test_circuit_table_without_season() {
        let json = r#"{"Circuits":[]}"#;
        let table: CircuitTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.season, None);
        assert!(table.circuits.is_empty());
    }
}
