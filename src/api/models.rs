// src/api/models.rs
use serde::{Deserialize, Serialize};

/// Latitude/longitude pair, kept as the strings the form collected.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: String,
    pub lng: String,
}

/// Request body for the property-creation endpoint.
///
/// Field names follow the API's JSON contract (`listedIn`, `yearBuilt`,
/// `userId`), not Rust convention.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    pub title: String,
    pub description: String,
    pub category: String,
    pub listed_in: String,
    pub price: Option<i64>,
    pub size: String,
    pub bedrooms: Option<i64>,
    pub bathrooms: Option<i64>,
    pub kitchens: Option<i64>,
    pub year_built: String,
    pub floors: Option<i64>,
    pub amenities: Vec<String>,
    pub address: String,
    pub location: GeoPoint,
    pub user_id: Option<String>,
}

/// Whatever the API returns on success. Both fields are optional so an
/// empty 201/204 body still counts as a created property.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PropertyCreated {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body shape used by the API (`{ "message": "..." }`).
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}
