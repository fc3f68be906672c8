use super::common::{Constructor, Pagination};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Constructors {
    #[serde(rename = "MRData")]
    pub data: ConstructorsData,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConstructorsData {
    #[serde(flatten)]
    pub pagination: Pagination,
    #[serde(rename = "ConstructorTable")]
    pub constructor_table: ConstructorTable,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConstructorTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(rename = "Constructors", default)]
    pub constructors: Vec<Constructor>,
}

impl Constructors {
    pub fn constructors(&self) -> &[Constructor] {
        &self.data.constructor_table.constructors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_deserialization() {
        let json = r#"{"MRData":{
            "series":"f1","url":"http://ergast.com/api/f1/1998/constructors.json",
            "limit":"30","offset":"0","total":"2",
            "ConstructorTable":{"season":"1998","Constructors":[
                {"constructorId":"mclaren","url":"http://en.wikipedia.org/wiki/McLaren","name":"McLaren","nationality":"British"},
                {"constructorId":"ferrari","url":"http://en.wikipedia.org/wiki/Scuderia_Ferrari","name":"Ferrari","nationality":"Italian"}
            ]}
        }}"#;

        let constructors: Constructors = serde_json::from_str(json).unwrap();
        assert_eq!(constructors.data.pagination.xmlns, None);
        assert_eq!(constructors.constructors().len(), 2);
        assert_eq!(constructors.constructors()[1].name, "Ferrari");
    }
}
