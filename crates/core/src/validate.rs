//! Trip schema validation.
//!
//! Payloads arrive as untyped JSON. [`trip_from_payload`] decodes them field by
//! field, collecting every violation instead of stopping at the first one, so
//! a client gets the full list of offending fields in a single response.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;
use utoipa::ToSchema;

use crate::trip::{Trip, TripLocation};

/// A single schema violation, addressed by a dotted/indexed field path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// All violations found in one payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct ValidationErrors {
    pub fields: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f.field == field)
    }

    fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .fields
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

const REQUIRED: &str = "field required";
const NOT_STRING: &str = "expected a string";
const NOT_ARRAY: &str = "expected an array";
const NOT_OBJECT: &str = "expected an object";
const NOT_NUMBER: &str = "expected a number";
const EMPTY: &str = "must not be empty";
const HAS_NUL: &str = "must not contain NUL characters";

/// Decode and validate an untyped payload into a [`Trip`].
pub fn trip_from_payload(payload: &Value) -> Result<Trip, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let Some(obj) = payload.as_object() else {
        errors.push("body", NOT_OBJECT);
        return Err(errors);
    };

    let title = required_string(obj, "title", "title", &mut errors);
    let date_text = required_string(obj, "date_text", "date_text", &mut errors);
    let people = string_list(obj, "people", &mut errors);
    let description = optional_string(obj, "description", "description", &mut errors);
    let photo_placeholders = string_list(obj, "photo_placeholders", &mut errors);

    let mut locations = Vec::new();
    if let Some(items) = array_field(obj, "locations", &mut errors) {
        for (i, item) in items.iter().enumerate() {
            if let Some(loc) = location_from_value(item, &format!("locations[{i}]"), &mut errors) {
                locations.push(loc);
            }
        }
    }

    let video_urls = string_list(obj, "video_urls", &mut errors);
    for (i, raw) in video_urls.iter().enumerate() {
        if let Err(msg) = check_url(raw) {
            errors.push(format!("video_urls[{i}]"), msg);
        }
    }

    errors.into_result(Trip {
        title: title.unwrap_or_default(),
        date_text: date_text.unwrap_or_default(),
        people,
        description,
        locations,
        photo_placeholders,
        video_urls,
    })
}

/// Check the invariants of an already-typed trip (seed data, stored documents).
pub fn check_trip(trip: &Trip) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    check_required_text(&trip.title, "title", &mut errors);
    check_required_text(&trip.date_text, "date_text", &mut errors);
    if let Some(description) = &trip.description {
        check_text(description, "description", &mut errors);
    }
    for (i, person) in trip.people.iter().enumerate() {
        check_text(person, &format!("people[{i}]"), &mut errors);
    }
    for (i, caption) in trip.photo_placeholders.iter().enumerate() {
        check_text(caption, &format!("photo_placeholders[{i}]"), &mut errors);
    }
    for (i, loc) in trip.locations.iter().enumerate() {
        check_required_text(&loc.country_code, &format!("locations[{i}].country_code"), &mut errors);
        check_required_text(&loc.country_name, &format!("locations[{i}].country_name"), &mut errors);
        if let Some(city) = &loc.city {
            check_text(city, &format!("locations[{i}].city"), &mut errors);
        }
    }
    for (i, raw) in trip.video_urls.iter().enumerate() {
        if raw.contains('\0') {
            errors.push(format!("video_urls[{i}]"), HAS_NUL);
        } else if let Err(msg) = check_url(raw) {
            errors.push(format!("video_urls[{i}]"), msg);
        }
    }
    errors.into_result(())
}

/// Stored documents cannot hold U+0000.
fn check_text(value: &str, path: &str, errors: &mut ValidationErrors) {
    if value.contains('\0') {
        errors.push(path, HAS_NUL);
    }
}

fn check_required_text(value: &str, path: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() {
        errors.push(path, EMPTY);
    } else {
        check_text(value, path, errors);
    }
}

/// Absolute http(s) URL with a host.
fn check_url(raw: &str) -> Result<(), String> {
    let url = Url::parse(raw).map_err(|e| format!("invalid URL: {e}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("invalid URL: scheme '{}' is not http or https", url.scheme()));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err("invalid URL: missing host".to_string());
    }
    Ok(())
}

fn location_from_value(value: &Value, path: &str, errors: &mut ValidationErrors) -> Option<TripLocation> {
    let Some(obj) = value.as_object() else {
        errors.push(path, NOT_OBJECT);
        return None;
    };
    let before = errors.fields.len();

    let country_code = required_string(obj, "country_code", &format!("{path}.country_code"), errors);
    let country_name = required_string(obj, "country_name", &format!("{path}.country_name"), errors);
    let city = optional_string(obj, "city", &format!("{path}.city"), errors);
    let lat = optional_float(obj, "lat", &format!("{path}.lat"), errors);
    let lon = optional_float(obj, "lon", &format!("{path}.lon"), errors);

    if errors.fields.len() > before {
        return None;
    }
    Some(TripLocation {
        country_code: country_code.unwrap_or_default(),
        country_name: country_name.unwrap_or_default(),
        city,
        lat,
        lon,
    })
}

fn required_string(
    obj: &Map<String, Value>,
    key: &str,
    path: &str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match obj.get(key) {
        None | Some(Value::Null) => {
            errors.push(path, REQUIRED);
            None
        }
        Some(Value::String(s)) if s.trim().is_empty() => {
            errors.push(path, EMPTY);
            None
        }
        Some(Value::String(s)) if s.contains('\0') => {
            errors.push(path, HAS_NUL);
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(path, NOT_STRING);
            None
        }
    }
}

fn optional_string(
    obj: &Map<String, Value>,
    key: &str,
    path: &str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match obj.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.contains('\0') => {
            errors.push(path, HAS_NUL);
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(path, NOT_STRING);
            None
        }
    }
}

/// Numbers pass through; numeric strings are coerced.
fn optional_float(
    obj: &Map<String, Value>,
    key: &str,
    path: &str,
    errors: &mut ValidationErrors,
) -> Option<f64> {
    let parsed = match obj.get(key) {
        None | Some(Value::Null) => return None,
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };
    match parsed {
        Some(v) if v.is_finite() => Some(v),
        _ => {
            errors.push(path, NOT_NUMBER);
            None
        }
    }
}

fn array_field<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
    errors: &mut ValidationErrors,
) -> Option<&'a Vec<Value>> {
    match obj.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => Some(items),
        Some(_) => {
            errors.push(key, NOT_ARRAY);
            None
        }
    }
}

fn string_list(obj: &Map<String, Value>, key: &str, errors: &mut ValidationErrors) -> Vec<String> {
    let Some(items) = array_field(obj, key, errors) else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match item {
            Value::String(s) if s.contains('\0') => errors.push(format!("{key}[{i}]"), HAS_NUL),
            Value::String(s) => out.push(s.clone()),
            _ => errors.push(format!("{key}[{i}]"), NOT_STRING),
        }
    }
    out
}
