use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::utils::format::{format_date, format_price};

/// Server-assigned identifier. The API has served both numbers and strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyId {
    Number(i64),
    Text(String),
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyId::Number(n) => write!(f, "{}", n),
            PropertyId::Text(s) => f.write_str(s),
        }
    }
}

/// Listing record. Display fields tolerate both missing keys and explicit
/// `null`; only `id`, the name key and `price` are required.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    #[serde(alias = "name", deserialize_with = "null_as_default")]
    pub property_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub property_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub check_in: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub check_out: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bedrooms: u32,
    #[serde(default)]
    pub nights: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub adults: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parking: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pets: u32,
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub website: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub website_image: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Property {
    pub fn display_price(&self) -> String {
        format_price(self.price)
    }

    pub fn display_check_in(&self) -> String {
        format_date(&self.check_in)
    }

    pub fn display_check_out(&self) -> String {
        format_date(&self.check_out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_listing_record() {
        let json = r#"{
            "id": 7,
            "property_name": "Harbour View Suite",
            "property_code": "HVS-07",
            "check_in": "2024-03-05T14:00:00.000Z",
            "check_out": "2024-03-09T10:00:00.000Z",
            "bedrooms": 2,
            "adults": 3,
            "children": 1,
            "parking": 1,
            "pets": 0,
            "price": 125.5,
            "website": "https://www.imah.com/hvs",
            "website_image": "https://cdn.imah.com/hvs.jpg"
        }"#;

        let property: Property = serde_json::from_str(json).unwrap();
        assert_eq!(property.id, PropertyId::Number(7));
        assert_eq!(property.property_name, "Harbour View Suite");
        assert_eq!(property.nights, None);
        assert_eq!(property.display_price(), "USD 125.50");
        assert_eq!(property.display_check_in(), "05 Mar 2024");
        assert_eq!(property.display_check_out(), "09 Mar 2024");
    }

    #[test]
    fn accepts_card_variant_fields() {
        let json = r#"{"id": "a-12", "name": "Loft", "price": 90, "nights": 4}"#;

        let property: Property = serde_json::from_str(json).unwrap();
        assert_eq!(property.id.to_string(), "a-12");
        assert_eq!(property.property_name, "Loft");
        assert_eq!(property.nights, Some(4));
        assert_eq!(property.bedrooms, 0);
        assert_eq!(property.website_image, "");
    }

    #[test]
    fn null_display_fields_fall_back_to_defaults() {
        let json = r#"{"id": 3, "property_name": "Dune House", "price": 80,
            "property_code": null, "check_in": null, "website": null,
            "website_image": null, "pets": null, "adults": null, "nights": null}"#;

        let property: Property = serde_json::from_str(json).unwrap();
        assert_eq!(property.property_code, "");
        assert_eq!(property.website, "");
        assert_eq!(property.pets, 0);
        assert_eq!(property.adults, 0);
        assert_eq!(property.nights, None);
        assert_eq!(property.display_check_in(), "");
    }

    #[test]
    fn wrong_types_are_still_rejected() {
        let json = r#"{"id": 3, "property_name": "Dune House", "price": 80, "pets": "many"}"#;
        assert!(serde_json::from_str::<Property>(json).is_err());

        let json = r#"{"id": 3, "price": 80}"#;
        assert!(serde_json::from_str::<Property>(json).is_err());
    }
}
