// src/tests/router_tests/submit_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_to_string, ctx_for, post_form, spawn_api_stub};
use std::net::TcpListener;
use std::time::Duration;

const FORM: &str = "title=Lake+House&description=Quiet+shoreline&category=Villa\
                    &listedIn=Sale&price=450000&size=240&bedrooms=4&bathrooms=2\
                    &kitchens=1&yearBuilt=1987&floors=2&address=12+Shore+Road\
                    &lat=59.33&lng=18.06&amenities=Pool&amenities=Gym";

#[test]
fn submit_posts_the_draft_and_confirms() {
    let (base_url, rx) = spawn_api_stub(
        200,
        "OK",
        r#"{"id": 7, "message": "Property added successfully"}"#,
    );
    let ctx = ctx_for(&base_url);

    let req = post_form(
        "/dashboard/add-property",
        FORM,
        Some("user_id=42; token=secret-token"),
    );
    let mut resp = handle(req, &ctx).unwrap();
    assert_eq!(resp.status(), 200);

    let page = body_to_string(&mut resp);
    assert!(page.contains("Property added successfully"));
    assert!(page.contains("#7"));

    let captured = rx
        .recv_timeout(Duration::from_secs(5))
        .expect("the API never saw a request");
    let head = captured.head.to_lowercase();
    assert!(captured.head.starts_with("POST /api/properties"));
    assert!(head.contains("authorization: bearer secret-token"));
    assert!(head.contains("content-type: application/json"));

    // The body's fields equal the draft at call time.
    let sent: serde_json::Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(sent["title"], "Lake House");
    assert_eq!(sent["description"], "Quiet shoreline");
    assert_eq!(sent["category"], "Villa");
    assert_eq!(sent["listedIn"], "Sale");
    assert_eq!(sent["price"], 450000);
    assert_eq!(sent["size"], "240");
    assert_eq!(sent["bedrooms"], 4);
    assert_eq!(sent["yearBuilt"], "1987");
    assert_eq!(sent["address"], "12 Shore Road");
    assert_eq!(sent["location"]["lat"], "59.33");
    assert_eq!(sent["location"]["lng"], "18.06");
    assert_eq!(sent["amenities"], serde_json::json!(["Pool", "Gym"]));
    assert_eq!(sent["userId"], "42");

    // Exactly one upstream call was made.
    assert!(rx.try_recv().is_err());
}

#[test]
fn retoggled_amenity_is_absent_from_the_submission() {
    let (base_url, rx) = spawn_api_stub(200, "OK", "{}");
    let ctx = ctx_for(&base_url);

    // Pool is ticked, Gym is ticked, then Pool is unticked again.
    let form = format!("{FORM}&amenities=Pool");
    let req = post_form("/dashboard/add-property", &form, None);
    handle(req, &ctx).unwrap();

    let captured = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    let sent: serde_json::Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(sent["amenities"], serde_json::json!(["Gym"]));
}

#[test]
fn missing_cookies_still_submit() {
    let (base_url, rx) = spawn_api_stub(200, "OK", "{}");
    let ctx = ctx_for(&base_url);

    let req = post_form("/dashboard/add-property", FORM, None);
    let mut resp = handle(req, &ctx).unwrap();

    // Empty response body: the page falls back to its own confirmation.
    let page = body_to_string(&mut resp);
    assert!(page.contains("Property added successfully"));

    let captured = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert!(!captured.head.to_lowercase().contains("authorization:"));

    let sent: serde_json::Value = serde_json::from_str(&captured.body).unwrap();
    assert!(sent["userId"].is_null());
}

#[test]
fn api_rejection_shows_the_server_message_and_keeps_the_draft() {
    let (base_url, _rx) = spawn_api_stub(400, "Bad Request", r#"{"message": "Missing fields"}"#);
    let ctx = ctx_for(&base_url);

    let req = post_form("/dashboard/add-property", FORM, None);
    let mut resp = handle(req, &ctx).unwrap();
    assert_eq!(resp.status(), 200);

    let page = body_to_string(&mut resp);
    assert!(page.contains("Error: Missing fields"));
    // The form comes back with what the user typed.
    assert!(page.contains("Lake House"));
    assert!(page.contains("59.33"));
    // And no success indication anywhere.
    assert!(!page.contains("notice-success"));
}

#[test]
fn unreachable_api_shows_the_generic_failure() {
    // Bind and drop a listener so the port is known to be closed.
    let dead_url = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };
    let ctx = ctx_for(&dead_url);

    let req = post_form("/dashboard/add-property", FORM, None);
    let mut resp = handle(req, &ctx).unwrap();

    let page = body_to_string(&mut resp);
    assert!(page.contains("Failed to submit property."));
    assert!(!page.contains("notice-success"));
}
