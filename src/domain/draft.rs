// src/domain/draft.rs

use crate::api::models::{GeoPoint, NewProperty};

/// The in-memory, not-yet-submitted property data collected by the
/// add-property form. Every field holds the raw input string; conversion
/// to the API's wire shape happens in [`PropertyDraft::to_payload`].
///
/// This acts as an anti-corruption layer between the posted form and the
/// upstream API model.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct PropertyDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub listed_in: String,
    pub price: String,
    pub size: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub kitchens: String,
    pub year_built: String,
    pub floors: String,
    pub address: String,
    pub location: GeoPoint,
    pub amenities: Vec<String>,
}

impl PropertyDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite one scalar field by its form name. Last write wins.
    /// Names that don't belong to the draft are ignored.
    pub fn set_field(&mut self, name: &str, value: &str) {
        match name {
            "title" => self.title = value.to_string(),
            "description" => self.description = value.to_string(),
            "category" => self.category = value.to_string(),
            "listedIn" => self.listed_in = value.to_string(),
            "price" => self.price = value.to_string(),
            "size" => self.size = value.to_string(),
            "bedrooms" => self.bedrooms = value.to_string(),
            "bathrooms" => self.bathrooms = value.to_string(),
            "kitchens" => self.kitchens = value.to_string(),
            "yearBuilt" => self.year_built = value.to_string(),
            "floors" => self.floors = value.to_string(),
            "address" => self.address = value.to_string(),
            _ => {}
        }
    }

    /// Overwrite one of the two nested coordinate fields.
    pub fn set_location(&mut self, name: &str, value: &str) {
        match name {
            "lat" => self.location.lat = value.to_string(),
            "lng" => self.location.lng = value.to_string(),
            _ => {}
        }
    }

    /// Add the amenity if absent, remove it if present.
    /// Membership, so the list never holds duplicates.
    pub fn toggle_amenity(&mut self, amenity: &str) {
        if let Some(pos) = self.amenities.iter().position(|a| a == amenity) {
            self.amenities.remove(pos);
        } else {
            self.amenities.push(amenity.to_string());
        }
    }

    /// Fold an ordered sequence of posted (name, value) pairs into a draft.
    ///
    /// Checkbox inputs post one `amenities` pair per checked box, which the
    /// toggle folds into membership. Repeated scalar names overwrite.
    pub fn from_form_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut draft = Self::new();
        for (name, value) in pairs {
            match name {
                "lat" | "lng" => draft.set_location(name, value),
                "amenities" => draft.toggle_amenity(value),
                _ => draft.set_field(name, value),
            }
        }
        draft
    }

    /// Convert the draft plus the submitting user's identifier into the
    /// shape the property API expects. Count and price inputs become JSON
    /// numbers when they parse and null when they don't; size and year
    /// stay free text, as in the form.
    pub fn to_payload(&self, user_id: Option<&str>) -> NewProperty {
        NewProperty {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            listed_in: self.listed_in.clone(),
            price: parse_number(&self.price),
            size: self.size.clone(),
            bedrooms: parse_number(&self.bedrooms),
            bathrooms: parse_number(&self.bathrooms),
            kitchens: parse_number(&self.kitchens),
            year_built: self.year_built.clone(),
            floors: parse_number(&self.floors),
            amenities: self.amenities.clone(),
            address: self.address.clone(),
            location: self.location.clone(),
            user_id: user_id.map(str::to_string),
        }
    }
}

fn parse_number(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
