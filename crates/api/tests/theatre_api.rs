//! Theatre endpoints: reference checks against live parents, inherited
//! coordinates for proximity search, and contact-detail validation.

mod common;

use axum::http::StatusCode;
use axum::Router;
use serde_json::json;
use sqlx::PgPool;

async fn seed_parents(app: &Router) -> (i64, i64) {
    let location_id = common::create_entity(
        app,
        "/api/v1/locations",
        &json!({
            "name": "West End",
            "city": "London",
            "country": "UK",
            "latitude": 51.5074,
            "longitude": -0.1278,
        }),
    )
    .await;
    let theatre_type_id = common::create_entity(
        app,
        "/api/v1/theatre-types",
        &json!({"name": "Playhouse"}),
    )
    .await;
    (location_id, theatre_type_id)
}

fn theatre_payload(location_id: i64, theatre_type_id: i64, name: &str) -> serde_json::Value {
    json!({
        "location_id": location_id,
        "theatre_type_id": theatre_type_id,
        "name": name,
        "capacity": 1200,
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_fetch(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (location_id, theatre_type_id) = seed_parents(&app).await;

    let (status, created) = common::post_json(
        &app,
        "/api/v1/theatres",
        &theatre_payload(location_id, theatre_type_id, "Lyceum"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["location_id"].as_i64().unwrap(), location_id);
    assert_eq!(created["is_featured"], false);

    let id = created["id"].as_i64().unwrap();
    let (status, fetched) = common::get(&app, &format!("/api/v1/theatres/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Lyceum");
    assert_eq!(fetched["capacity"], 1200);
}

/// Each dangling reference fails with the referenced entity's own
/// not-found, so the caller can tell which parent is missing.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_parents_give_specific_errors(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (location_id, theatre_type_id) = seed_parents(&app).await;

    let (status, body) = common::post_json(
        &app,
        "/api/v1/theatres",
        &theatre_payload(9999, theatre_type_id, "Orphan"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("Location"));

    let (status, body) = common::post_json(
        &app,
        "/api/v1/theatres",
        &theatre_payload(location_id, 9999, "Orphan"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("TheatreType"));
}

/// A soft-deleted parent counts as missing for new references.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleted_parent_rejected_for_new_references(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (location_id, theatre_type_id) = seed_parents(&app).await;
    common::delete(&app, &format!("/api/v1/locations/{location_id}")).await;

    let (status, body) = common::post_json(
        &app,
        "/api/v1/theatres",
        &theatre_payload(location_id, theatre_type_id, "Too Late"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("Location"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_checks_only_supplied_references(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (location_id, theatre_type_id) = seed_parents(&app).await;
    let id = common::create_entity(
        &app,
        "/api/v1/theatres",
        &theatre_payload(location_id, theatre_type_id, "Adelphi"),
    )
    .await;

    // Renaming without touching FKs needs no reference checks.
    let (status, _) = common::patch_json(
        &app,
        &format!("/api/v1/theatres/{id}"),
        &json!({"name": "Adelphi Renamed"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Reassigning to a nonexistent type fails.
    let (status, _) = common::patch_json(
        &app,
        &format!("/api/v1/theatres/{id}"),
        &json!({"theatre_type_id": 9999}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contact_detail_validation(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (location_id, theatre_type_id) = seed_parents(&app).await;

    let mut payload = theatre_payload(location_id, theatre_type_id, "Strict");
    payload["capacity"] = json!(0);
    let (status, _) = common::post_json(&app, "/api/v1/theatres", &payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    payload["capacity"] = json!(500);
    payload["email"] = json!("not-an-email");
    let (status, _) = common::post_json(&app, "/api/v1/theatres", &payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    payload["email"] = json!("box.office@example.com");
    payload["website"] = json!("ftp://example.com");
    let (status, _) = common::post_json(&app, "/api/v1/theatres", &payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    payload["website"] = json!("https://example.com");
    payload["phone"] = json!("12-34");
    let (status, _) = common::post_json(&app, "/api/v1/theatres", &payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    payload["phone"] = json!("+44 (0)20 7946 0123");
    let (status, _) = common::post_json(&app, "/api/v1/theatres", &payload).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_nearby_uses_location_coordinates(pool: PgPool) {
    let app = common::build_test_app(pool);
    let theatre_type_id = common::create_entity(
        &app,
        "/api/v1/theatre-types",
        &json!({"name": "Fringe Venue"}),
    )
    .await;

    let near_location = common::create_entity(
        &app,
        "/api/v1/locations",
        &json!({"name": "Near Spot", "city": "X", "country": "Y", "latitude": 0.05, "longitude": 0.0}),
    )
    .await;
    let far_location = common::create_entity(
        &app,
        "/api/v1/locations",
        &json!({"name": "Far Spot", "city": "X", "country": "Y", "latitude": 1.0, "longitude": 0.0}),
    )
    .await;
    let unmapped_location = common::create_entity(
        &app,
        "/api/v1/locations",
        &json!({"name": "Unmapped", "city": "X", "country": "Y"}),
    )
    .await;

    common::create_entity(
        &app,
        "/api/v1/theatres",
        &theatre_payload(near_location, theatre_type_id, "Near Stage"),
    )
    .await;
    common::create_entity(
        &app,
        "/api/v1/theatres",
        &theatre_payload(far_location, theatre_type_id, "Far Stage"),
    )
    .await;
    common::create_entity(
        &app,
        "/api/v1/theatres",
        &theatre_payload(unmapped_location, theatre_type_id, "Hidden Stage"),
    )
    .await;

    let (status, hits) =
        common::get(&app, "/api/v1/theatres/nearby?latitude=0&longitude=0&radius=10").await;
    assert_eq!(status, StatusCode::OK);
    let hits = hits.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["name"], "Near Stage");
    assert_eq!(hits[0]["latitude"], 0.05, "inherited coordinates are exposed");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_relationship_listings(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (location_id, theatre_type_id) = seed_parents(&app).await;
    let other_type = common::create_entity(
        &app,
        "/api/v1/theatre-types",
        &json!({"name": "Concert Hall"}),
    )
    .await;

    common::create_entity(
        &app,
        "/api/v1/theatres",
        &theatre_payload(location_id, theatre_type_id, "First"),
    )
    .await;
    common::create_entity(
        &app,
        "/api/v1/theatres",
        &theatre_payload(location_id, other_type, "Second"),
    )
    .await;

    let (_, at_location) =
        common::get(&app, &format!("/api/v1/theatres/location/{location_id}")).await;
    assert_eq!(at_location.as_array().unwrap().len(), 2);

    let (_, of_type) = common::get(&app, &format!("/api/v1/theatres/type/{other_type}")).await;
    let of_type = of_type.as_array().unwrap();
    assert_eq!(of_type.len(), 1);
    assert_eq!(of_type[0]["name"], "Second");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_featured_listing(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (location_id, theatre_type_id) = seed_parents(&app).await;

    let mut featured = theatre_payload(location_id, theatre_type_id, "Kings");
    featured["is_featured"] = json!(true);
    common::create_entity(&app, "/api/v1/theatres", &featured).await;
    common::create_entity(
        &app,
        "/api/v1/theatres",
        &theatre_payload(location_id, theatre_type_id, "Pavilion"),
    )
    .await;

    let (_, listed) = common::get(&app, "/api/v1/theatres/featured").await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["name"], "Kings");
}
