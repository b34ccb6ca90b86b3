use serde::{Deserialize, Serialize};

/// A customer record, keyed by `id`.
///
/// Wire names are `ID`, `Name` and `Email`. On input the lower-case,
/// upper-case and capitalized spellings are accepted too; other mixed-case
/// spellings are ignored like unknown fields. Missing fields decode as empty strings.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Customer {
    #[serde(rename = "ID", alias = "id", alias = "Id")]
    pub id: String,
    #[serde(rename = "Name", alias = "name", alias = "NAME")]
    pub name: String,
    #[serde(rename = "Email", alias = "email", alias = "EMAIL")]
    pub email: String,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), email: email.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_uses_capitalized_field_names() {
        let c = Customer::new("1", "Al", "a@x.com");
        let s = serde_json::to_string(&c).unwrap();
        assert_eq!(s, r#"{"ID":"1","Name":"Al","Email":"a@x.com"}"#);
    }

    #[test]
    fn decode_is_lenient() {
        let c: Customer = serde_json::from_str(r#"{"id":"7","Extra":true}"#).unwrap();
        assert_eq!(c, Customer::new("7", "", ""));
    }

    #[test]
    fn decode_accepts_case_variants() {
        let c: Customer = serde_json::from_str(r#"{"Id":"2","NAME":"Bo","EMAIL":"b@x.com"}"#).unwrap();
        assert_eq!(c, Customer::new("2", "Bo", "b@x.com"));
        let c: Customer = serde_json::from_str(r#"{"id":"3","name":"Cy","email":"c@x.com"}"#).unwrap();
        assert_eq!(c, Customer::new("3", "Cy", "c@x.com"));
    }

    #[test]
    fn decode_rejects_wrong_types() {
        assert!(serde_json::from_str::<Customer>(r#"{"ID":1}"#).is_err());
        assert!(serde_json::from_str::<Customer>("not json").is_err());
    }
}
