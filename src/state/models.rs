// Data model for the favourites store
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A home the user marked as a favourite.
///
/// The `id` is the listing id assigned by the listings API. Every other field
/// is carried verbatim in `details` and never inspected by the storage layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavouriteHome {
    pub id: i64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_fields_survive_untouched() {
        let home: FavouriteHome =
            serde_json::from_str(r#"{"id": 1, "name": "Flat A", "price": 2400}"#).unwrap();

        assert_eq!(home.id, 1);
        assert_eq!(home.details["name"], "Flat A");
        assert_eq!(home.details["price"], 2400);

        let json: Value = serde_json::to_value(&home).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Flat A");
    }
}
