// src/tests/router_tests/pages_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_to_string, ctx_for, get};

/// The GET routes never talk to the API, so a dead base URL is fine.
fn ctx() -> crate::router::AppCtx {
    ctx_for("http://127.0.0.1:9")
}

#[test]
fn home_page_renders() {
    let mut resp = handle(get("/"), &ctx()).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_to_string(&mut resp);
    assert!(body.contains("Find your next home"));
    assert!(body.contains("/dashboard/add-property"));
}

#[test]
fn about_page_composes_the_agency_blocks() {
    let mut resp = handle(get("/about"), &ctx()).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_to_string(&mut resp);
    // Composition order from the source page: breadcrumb, two feature
    // blocks, testimonials, partners, closing banner.
    assert!(body.contains("About Agency"));
    assert!(body.contains("Who we are"));
    assert!(body.contains("Why list with us"));
    assert!(body.contains("What our clients say"));
    assert!(body.contains("Trusted by"));
    assert!(body.contains("Have a property to sell or rent?"));
}

#[test]
fn add_property_form_lists_every_field() {
    let mut resp = handle(get("/dashboard/add-property"), &ctx()).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_to_string(&mut resp);
    for name in [
        "title",
        "description",
        "category",
        "listedIn",
        "price",
        "size",
        "bedrooms",
        "bathrooms",
        "kitchens",
        "yearBuilt",
        "floors",
        "address",
        "lat",
        "lng",
        "amenities",
    ] {
        assert!(
            body.contains(&format!("name=\"{name}\"")),
            "form is missing field {name}"
        );
    }

    // All four amenity boxes, none pre-checked on an empty draft.
    for amenity in ["Pool", "Gym", "Garage", "Garden"] {
        assert!(body.contains(amenity), "missing amenity {amenity}");
    }
    assert!(!body.contains("checked"));

    assert!(body.contains("Select Category"));
    assert!(body.contains("Select Listing Type"));
}

#[test]
fn stylesheet_is_served_as_css() {
    let resp = handle(get("/static/main.css"), &ctx()).unwrap();
    assert_eq!(resp.status(), 200);

    let content_type = resp
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(content_type.starts_with("text/css"));
}

#[test]
fn unknown_route_is_not_found() {
    let result = handle(get("/listings/42"), &ctx());
    assert!(matches!(result, Err(ServerError::NotFound)));
}
