// src/domain/catalog.rs

/// Property categories offered in the add-property form.
pub const CATEGORIES: &[&str] = &["Apartment", "House", "Villa"];

/// Listing types offered in the add-property form.
pub const LISTING_TYPES: &[&str] = &["Rent", "Sale"];

/// Amenity labels offered as checkboxes.
pub const AMENITIES: &[&str] = &["Pool", "Gym", "Garage", "Garden"];
