use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of both the create and the update endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HotelRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(required, length(min = 1))]
    pub city: Option<String>,
    #[validate(required, length(min = 1))]
    pub address: Option<String>,
    #[validate(required, length(min = 1))]
    pub telephone: Option<String>,
    pub email: Option<String>,
    pub image_url: Option<Vec<String>>,
}

impl HotelRequest {
    /// Names of the required fields that are absent or empty, sorted.
    pub fn missing_required_fields(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => {
                let mut fields: Vec<String> = errors
                    .field_errors()
                    .keys()
                    .map(|field| field.to_string())
                    .collect();
                fields.sort();
                fields
            }
        }
    }

    pub fn to_log_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn complete() -> HotelRequest {
        serde_json::from_value(json!({
            "name": "Ocean View",
            "city": "Colombo",
            "address": "12 Galle Road",
            "telephone": "0112345678",
            "imageUrl": ["https://img.example.com/1.png"]
        }))
        .unwrap()
    }

    #[test]
    fn complete_request_passes() {
        let req = complete();
        assert!(req.missing_required_fields().is_empty());
        assert_eq!(req.image_url.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn absent_fields_are_reported() {
        let mut req = complete();
        req.name = None;
        req.telephone = None;

        assert_eq!(req.missing_required_fields(), vec!["name", "telephone"]);
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let mut req = complete();
        req.city = Some(String::new());
        req.address = Some(String::new());

        assert_eq!(req.missing_required_fields(), vec!["address", "city"]);
    }

    #[test]
    fn optional_fields_are_not_required() {
        let mut req = complete();
        req.description = None;
        req.email = None;
        req.image_url = None;

        assert!(req.missing_required_fields().is_empty());
    }

    #[test]
    fn log_json_uses_wire_names() {
        let logged = complete().to_log_json();
        assert!(logged.contains("\"imageUrl\""));
    }
}
