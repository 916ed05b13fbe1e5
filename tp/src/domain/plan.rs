//! TripPlan response types
//!
//! The backend's JSON is decoded field by field so that a missing piece is
//! reported with its path (`itinerary[1].location`) before anything renders.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::PlanError;

/// Itinerary returned by the planning endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripPlan {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub destination: Option<String>,
    pub itinerary: Vec<DayPlan>,
}

/// One day of the itinerary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan {
    pub day: u32,
    pub location: Location,
    pub activities: Vec<Activity>,
    pub restaurant: Restaurant,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub name: String,
    pub description: String,
    pub city: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub price: Price,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Restaurant {
    pub name: String,
    pub description: String,
    pub price_range: String,
}

/// Activity price as sent by the backend: a number or free text
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Label(String),
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Amount(n) => write!(f, "{}", n),
            Self::Label(s) => write!(f, "{}", s),
        }
    }
}

impl TripPlan {
    /// Decode a response body
    pub fn from_json(body: &str) -> Result<Self, PlanError> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| PlanError::MalformedResponse(format!("invalid JSON: {}", e)))?;
        Self::from_value(&value)
    }

    /// Decode an already parsed response
    pub fn from_value(value: &Value) -> Result<Self, PlanError> {
        let root = Fields::at(value, String::new())?;

        let itinerary = root
            .array("itinerary")?
            .iter()
            .enumerate()
            .map(|(idx, day)| DayPlan::from_value(day, format!("itinerary[{}]", idx)))
            .collect::<Result<Vec<_>, _>>()?;

        let plan = Self {
            title: root.optional_text("title")?,
            summary: root.optional_text("summary")?,
            destination: root.optional_text("destination")?,
            itinerary,
        };
        debug!(days = plan.itinerary.len(), "TripPlan::from_value: decoded");
        Ok(plan)
    }

    /// Title, or "{destination} — Trip" when the backend sent none
    pub fn display_title(&self) -> String {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => format!("{} — Trip", self.destination.as_deref().unwrap_or_default()),
        }
    }

    pub fn display_summary(&self) -> &str {
        self.summary.as_deref().unwrap_or_default()
    }
}

impl DayPlan {
    fn from_value(value: &Value, path: String) -> Result<Self, PlanError> {
        let fields = Fields::at(value, path)?;

        let location = fields.object("location")?;
        let restaurant = fields.object("restaurant")?;

        let activities = fields
            .array("activities")?
            .iter()
            .enumerate()
            .map(|(idx, activity)| -> Result<Activity, PlanError> {
                let a = Fields::at(activity, format!("{}.activities[{}]", fields.path, idx))?;
                Ok(Activity {
                    name: a.text("name")?,
                    description: a.text("description")?,
                    price: a.price("price")?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            day: fields.day("day")?,
            location: Location {
                name: location.text("name")?,
                description: location.text("description")?,
                city: location.text("city")?,
                lat: location.number("lat")?,
                lng: location.number("lng")?,
            },
            activities,
            restaurant: Restaurant {
                name: restaurant.text("name")?,
                description: restaurant.text("description")?,
                price_range: restaurant.text("price_range")?,
            },
        })
    }
}

/// A JSON object plus the path it was reached by
struct Fields<'a> {
    map: &'a Map<String, Value>,
    path: String,
}

impl<'a> Fields<'a> {
    fn at(value: &'a Value, path: String) -> Result<Self, PlanError> {
        let label = if path.is_empty() { "<root>".to_string() } else { path.clone() };
        match value {
            Value::Object(map) => Ok(Self { map, path }),
            Value::Null => Err(PlanError::missing(label)),
            other => Err(PlanError::MalformedResponse(format!(
                "{}: expected an object, got {}",
                label,
                type_name(other)
            ))),
        }
    }

    fn child_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    fn required(&self, key: &str) -> Result<&'a Value, PlanError> {
        self.get(key).ok_or_else(|| PlanError::missing(self.child_path(key)))
    }

    fn mismatch(&self, key: &str, expected: &str, got: &Value) -> PlanError {
        PlanError::MalformedResponse(format!(
            "{}: expected {}, got {}",
            self.child_path(key),
            expected,
            type_name(got)
        ))
    }

    fn text(&self, key: &str) -> Result<String, PlanError> {
        let value = self.required(key)?;
        scalar_text(value).ok_or_else(|| self.mismatch(key, "text", value))
    }

    fn optional_text(&self, key: &str) -> Result<Option<String>, PlanError> {
        match self.get(key) {
            Some(value) => scalar_text(value)
                .map(Some)
                .ok_or_else(|| self.mismatch(key, "text", value)),
            None => Ok(None),
        }
    }

    fn number(&self, key: &str) -> Result<f64, PlanError> {
        let value = self.required(key)?;
        value.as_f64().ok_or_else(|| self.mismatch(key, "a number", value))
    }

    fn day(&self, key: &str) -> Result<u32, PlanError> {
        let value = self.required(key)?;
        value
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| self.mismatch(key, "a day number", value))
    }

    fn price(&self, key: &str) -> Result<Price, PlanError> {
        match self.required(key)? {
            Value::Number(n) => n
                .as_f64()
                .map(Price::Amount)
                .ok_or_else(|| PlanError::MalformedResponse(format!("{}: unrepresentable price", self.child_path(key)))),
            Value::String(s) => Ok(Price::Label(s.clone())),
            other => Err(self.mismatch(key, "a price", other)),
        }
    }

    fn object(&self, key: &str) -> Result<Fields<'a>, PlanError> {
        Fields::at(self.required(key)?, self.child_path(key))
    }

    fn array(&self, key: &str) -> Result<&'a [Value], PlanError> {
        let value = self.required(key)?;
        value
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| self.mismatch(key, "an array", value))
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn day_json(day: u32, name: &str) -> Value {
        json!({
            "day": day,
            "location": {
                "name": name,
                "description": "Thousands of torii gates",
                "city": "Kyoto",
                "lat": 34.9671,
                "lng": 135.7727
            },
            "activities": [
                {"name": "Hike", "description": "Walk to the summit", "price": 0},
                {"name": "Tea", "description": "Matcha tasting", "price": "15-20"}
            ],
            "restaurant": {"name": "Izakaya", "description": "Small plates", "price_range": "$$"}
        })
    }

    #[test]
    fn test_decode_full_plan() {
        let body = json!({
            "title": "Kyoto in Three Days",
            "summary": "Temples and food",
            "itinerary": [day_json(1, "Fushimi Inari"), day_json(2, "Arashiyama")]
        });

        let plan = TripPlan::from_value(&body).unwrap();
        assert_eq!(plan.display_title(), "Kyoto in Three Days");
        assert_eq!(plan.display_summary(), "Temples and food");
        assert_eq!(plan.itinerary.len(), 2);
        assert_eq!(plan.itinerary[1].location.name, "Arashiyama");
        assert_eq!(plan.itinerary[0].activities[0].price, Price::Amount(0.0));
        assert_eq!(plan.itinerary[0].activities[1].price, Price::Label("15-20".to_string()));
    }

    #[test]
    fn test_title_fallback() {
        let plan = TripPlan::from_json(r#"{"destination": "Kyoto", "itinerary": []}"#).unwrap();
        assert_eq!(plan.display_title(), "Kyoto — Trip");
        assert_eq!(plan.display_summary(), "");

        let plan = TripPlan::from_json(r#"{"title": "", "destination": "Rome", "itinerary": []}"#).unwrap();
        assert_eq!(plan.display_title(), "Rome — Trip");
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let err = TripPlan::from_json("<html>oops</html>").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);

        let err = TripPlan::from_json("[1, 2]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    }

    #[test]
    fn test_missing_itinerary() {
        let err = TripPlan::from_json(r#"{"title": "x"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);
        assert_eq!(err.to_string(), "Missing field: itinerary");
    }

    #[test]
    fn test_missing_location_reports_path() {
        let mut second = day_json(2, "Arashiyama");
        second.as_object_mut().unwrap().remove("location");
        let body = json!({"itinerary": [day_json(1, "Fushimi Inari"), second]});

        let err = TripPlan::from_value(&body).unwrap_err();
        assert!(matches!(err, PlanError::MissingField { ref path } if path == "itinerary[1].location"));
    }

    #[test]
    fn test_missing_coordinate_reports_path() {
        let mut day = day_json(1, "Fushimi Inari");
        day["location"]["lng"] = Value::Null;
        let body = json!({"itinerary": [day]});

        let err = TripPlan::from_value(&body).unwrap_err();
        assert_eq!(err.to_string(), "Missing field: itinerary[0].location.lng");
    }

    #[test]
    fn test_missing_activity_field_reports_path() {
        let mut day = day_json(3, "Gion");
        day["activities"][1].as_object_mut().unwrap().remove("price");
        let body = json!({"itinerary": [day]});

        let err = TripPlan::from_value(&body).unwrap_err();
        assert_eq!(err.to_string(), "Missing field: itinerary[0].activities[1].price");
    }

    #[test]
    fn test_wrong_type_is_malformed() {
        let mut day = day_json(1, "Gion");
        day["activities"] = json!("none");
        let body = json!({"itinerary": [day]});

        let err = TripPlan::from_value(&body).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
        assert!(err.to_string().contains("itinerary[0].activities"));
    }

    #[test]
    fn test_price_display() {
        assert_eq!(Price::Amount(25.0).to_string(), "25");
        assert_eq!(Price::Amount(12.5).to_string(), "12.5");
        assert_eq!(Price::Label("free".to_string()).to_string(), "free");
    }
}
