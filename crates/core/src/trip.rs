use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::fmt::Hyphenated;
use uuid::Uuid;

use crate::error::TravelogError;

/// Store-assigned trip identifier.
pub type TripId = Uuid;

/// Name of the document collection trips are stored in.
pub const TRIP_COLLECTION: &str = "trip";

/// Parse a client-supplied id string into a [`TripId`].
///
/// Only the hyphenated form that ids are serialized as is accepted. A malformed
/// id is an [`TravelogError::InvalidId`], never a not-found.
pub fn parse_trip_id(raw: &str) -> Result<TripId, TravelogError> {
    if raw.len() != Hyphenated::LENGTH {
        return Err(TravelogError::InvalidId(raw.to_string()));
    }
    Uuid::parse_str(raw).map_err(|_| TravelogError::InvalidId(raw.to_string()))
}

/// A place visited on a trip. One trip can touch several countries and cities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TripLocation {
    /// ISO 3166-1 alpha-3 country code (e.g. DEU, IRL).
    pub country_code: String,
    pub country_name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

impl TripLocation {
    pub fn new(country_code: &str, country_name: &str) -> Self {
        Self {
            country_code: country_code.to_string(),
            country_name: country_name.to_string(),
            city: None,
            lat: None,
            lon: None,
        }
    }

    pub fn city(mut self, city: &str) -> Self {
        self.city = Some(city.to_string());
        self
    }

    pub fn coords(mut self, lat: f64, lon: f64) -> Self {
        self.lat = Some(lat);
        self.lon = Some(lon);
        self
    }
}

/// A validated travel-log entry, as stored in the `trip` collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Trip {
    pub title: String,
    /// Exact date, or descriptive text when the date is not remembered.
    pub date_text: String,
    #[serde(default)]
    pub people: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub locations: Vec<TripLocation>,
    /// Captions for photos that have not been uploaded yet.
    #[serde(default)]
    pub photo_placeholders: Vec<String>,
    #[serde(default)]
    pub video_urls: Vec<String>,
}

/// A persisted trip: the stored document with its public `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TripRecord {
    #[schema(value_type = String, format = "uuid")]
    pub id: TripId,
    #[serde(flatten)]
    pub trip: Trip,
}

impl TripRecord {
    pub fn new(id: TripId, trip: Trip) -> Self {
        Self { id, trip }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trip_id_accepts_hyphenated_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_trip_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn parse_trip_id_rejects_garbage_as_invalid_id() {
        match parse_trip_id("not-an-id") {
            Err(TravelogError::InvalidId(raw)) => assert_eq!(raw, "not-an-id"),
            other => panic!("expected InvalidId, got {other:?}"),
        }
    }

    #[test]
    fn parse_trip_id_rejects_other_uuid_spellings() {
        let id = Uuid::new_v4();
        for raw in [
            format!(" {id}"),
            format!("{id}\n"),
            id.simple().to_string(),
            id.braced().to_string(),
            id.urn().to_string(),
        ] {
            assert!(
                matches!(parse_trip_id(&raw), Err(TravelogError::InvalidId(_))),
                "accepted {raw:?}"
            );
        }
    }

    #[test]
    fn record_serializes_flat_with_string_id() {
        let id = Uuid::new_v4();
        let trip = Trip {
            title: "Dublin".to_string(),
            date_text: "Juli 2019".to_string(),
            locations: vec![TripLocation::new("IRL", "Irland").city("Dublin")],
            ..Trip::default()
        };
        let json = serde_json::to_value(TripRecord::new(id, trip)).unwrap();

        assert_eq!(json["id"], id.to_string());
        assert_eq!(json["title"], "Dublin");
        assert_eq!(json["description"], serde_json::Value::Null);
        assert_eq!(json["people"], serde_json::json!([]));
        assert_eq!(json["locations"][0]["city"], "Dublin");
        assert_eq!(json["locations"][0]["lat"], serde_json::Value::Null);
    }

    #[test]
    fn record_deserializes_from_flat_document() {
        let id = Uuid::new_v4();
        let json = serde_json::json!({
            "id": id.to_string(),
            "title": "Brüssel, Belgien",
            "date_text": "Datum nicht dokumentiert",
        });
        let record: TripRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.id, id);
        assert_eq!(record.trip.title, "Brüssel, Belgien");
        assert!(record.trip.video_urls.is_empty());
    }
}
