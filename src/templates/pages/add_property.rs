// templates/pages/add_property.rs

use crate::domain::catalog::{AMENITIES, CATEGORIES, LISTING_TYPES};
use crate::domain::PropertyDraft;
use crate::templates::{components::failure_notice, desktop_layout};
use maud::{html, Markup};

/// The add-property form. Rendered empty on GET; after a failed submit it
/// is rendered again with the draft's values filled back in and a notice
/// on top, so nothing the user typed is lost.
///
/// Required fields match the source form: everything except description
/// and the amenity boxes. Presence is the browser's job; no ranges or
/// formats are checked anywhere.
pub fn add_property_page(draft: &PropertyDraft, failure: Option<&str>) -> Markup {
    desktop_layout(
        "Add Property",
        html! {
            main class="container narrow" {
                h1 { "Add Property" }

                @if let Some(message) = failure {
                    (failure_notice(message))
                }

                form method="post" action="/dashboard/add-property" class="add-property-form" {
                    section class="form-section" {
                        label for="title" { "Title" }
                        input type="text" id="title" name="title" value=(draft.title) required;

                        label for="description" { "Description" }
                        textarea id="description" name="description" { (draft.description) }
                    }

                    section class="form-section" {
                        label for="category" { "Category" }
                        select id="category" name="category" required {
                            option value="" disabled selected[draft.category.is_empty()] { "Select Category" }
                            @for cat in CATEGORIES {
                                option value=(cat) selected[draft.category == *cat] { (cat) }
                            }
                        }

                        label for="listedIn" { "Listed In" }
                        select id="listedIn" name="listedIn" required {
                            option value="" disabled selected[draft.listed_in.is_empty()] { "Select Listing Type" }
                            @for listing in LISTING_TYPES {
                                option value=(listing) selected[draft.listed_in == *listing] { (listing) }
                            }
                        }

                        label for="price" { "Price" }
                        input type="number" id="price" name="price" value=(draft.price) required;

                        label for="size" { "Size (m²)" }
                        input type="text" id="size" name="size" value=(draft.size) required;

                        label for="bedrooms" { "Bedrooms" }
                        input type="number" id="bedrooms" name="bedrooms" value=(draft.bedrooms) required;

                        label for="bathrooms" { "Bathrooms" }
                        input type="number" id="bathrooms" name="bathrooms" value=(draft.bathrooms) required;

                        label for="kitchens" { "Kitchens" }
                        input type="number" id="kitchens" name="kitchens" value=(draft.kitchens) required;

                        label for="yearBuilt" { "Year Built" }
                        input type="text" id="yearBuilt" name="yearBuilt" value=(draft.year_built) required;

                        label for="floors" { "Floors" }
                        input type="number" id="floors" name="floors" value=(draft.floors) required;
                    }

                    section class="form-section" {
                        label for="address" { "Address" }
                        input type="text" id="address" name="address" value=(draft.address) required;
                    }

                    section class="form-section" {
                        label { "Location" }
                        input type="text" name="lat" placeholder="Latitude" value=(draft.location.lat) required;
                        input type="text" name="lng" placeholder="Longitude" value=(draft.location.lng) required;
                    }

                    section class="form-section" {
                        label { "Amenities" }
                        div class="checkbox-group" {
                            @for amenity in AMENITIES {
                                label {
                                    input
                                        type="checkbox"
                                        name="amenities"
                                        value=(amenity)
                                        checked[draft.amenities.iter().any(|a| a == amenity)];
                                    (amenity)
                                }
                            }
                        }
                    }

                    button type="submit" class="btn submit-btn" { "Submit" }
                }
            }
        },
    )
}
