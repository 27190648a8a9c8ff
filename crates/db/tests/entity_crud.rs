//! Repository CRUD tests exercising the full entity chain:
//! location -> theatre type -> theatre -> show type -> show.

use chrono::NaiveDate;
use marquee_db::models::location::{CreateLocation, UpdateLocation};
use marquee_db::models::show::{CreateShow, UpdateShow};
use marquee_db::models::show_type::CreateShowType;
use marquee_db::models::theatre::{CreateTheatre, UpdateTheatre};
use marquee_db::models::theatre_type::CreateTheatreType;
use marquee_db::repositories::{
    LocationRepo, ShowRepo, ShowTypeRepo, TheatreRepo, TheatreTypeRepo,
};
use marquee_core::types::DbId;
use sqlx::PgPool;

fn location_input(name: &str) -> CreateLocation {
    CreateLocation {
        name: name.to_string(),
        city: "London".to_string(),
        state: None,
        country: "UK".to_string(),
        latitude: Some(51.5074),
        longitude: Some(-0.1278),
        postal_code: Some("WC2H 9ND".to_string()),
        address: Some("1 Theatre Lane".to_string()),
        description: None,
        is_active: None,
    }
}

async fn seed_theatre(pool: &PgPool, name: &str) -> (DbId, DbId, DbId) {
    let location = LocationRepo::create(pool, &location_input("West End"))
        .await
        .unwrap();
    let theatre_type = TheatreTypeRepo::create(
        pool,
        &CreateTheatreType {
            name: format!("{name} Hall"),
            description: None,
            is_active: None,
        },
    )
    .await
    .unwrap();
    let theatre = TheatreRepo::create(
        pool,
        &CreateTheatre {
            location_id: location.id,
            theatre_type_id: theatre_type.id,
            name: name.to_string(),
            description: None,
            capacity: Some(1200),
            address: None,
            phone: None,
            email: None,
            website: None,
            image_url: None,
            is_featured: None,
            is_active: None,
        },
    )
    .await
    .unwrap();
    (location.id, theatre_type.id, theatre.id)
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_location_create_defaults_and_roundtrip(pool: PgPool) {
    let created = LocationRepo::create(&pool, &location_input("Covent Garden"))
        .await
        .unwrap();

    assert!(created.id > 0);
    assert!(created.is_active, "is_active should default to true");
    assert!(created.deleted_at.is_none());
    assert_eq!(created.name, "Covent Garden");
    assert_eq!(created.latitude, Some(51.5074));

    let fetched = LocationRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("created location should be findable");
    assert_eq!(fetched.name, created.name);
    assert_eq!(fetched.city, created.city);
    assert_eq!(fetched.created_at, created.created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_location_partial_update_preserves_other_fields(pool: PgPool) {
    let created = LocationRepo::create(&pool, &location_input("Soho"))
        .await
        .unwrap();

    let updated = LocationRepo::update(
        &pool,
        created.id,
        &UpdateLocation {
            name: Some("Soho Quarter".to_string()),
            city: None,
            state: None,
            country: None,
            latitude: None,
            longitude: None,
            postal_code: None,
            address: None,
            description: None,
            is_active: None,
        },
    )
    .await
    .unwrap()
    .expect("update should match a live row");

    assert_eq!(updated.name, "Soho Quarter");
    assert_eq!(updated.city, "London", "unsupplied fields stay untouched");
    assert_eq!(updated.latitude, Some(51.5074));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_row_returns_none(pool: PgPool) {
    let result = LocationRepo::update(
        &pool,
        999_999,
        &UpdateLocation {
            name: Some("Ghost".to_string()),
            city: None,
            state: None,
            country: None,
            latitude: None,
            longitude: None,
            postal_code: None,
            address: None,
            description: None,
            is_active: None,
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_pagination_and_ordering(pool: PgPool) {
    for i in 0..5 {
        LocationRepo::create(&pool, &location_input(&format!("Venue {i}")))
            .await
            .unwrap();
    }

    let page = LocationRepo::list(&pool, 2, 0).await.unwrap();
    assert_eq!(page.len(), 2);

    let next = LocationRepo::list(&pool, 2, 2).await.unwrap();
    assert_eq!(next.len(), 2);
    assert_ne!(page[0].id, next[0].id);

    let all = LocationRepo::list(&pool, 100, 0).await.unwrap();
    assert_eq!(all.len(), 5);
    // Newest first.
    for pair in all.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_theatre_create_with_parents(pool: PgPool) {
    let (location_id, theatre_type_id, theatre_id) = seed_theatre(&pool, "Lyceum").await;

    let theatre = TheatreRepo::find_by_id(&pool, theatre_id)
        .await
        .unwrap()
        .expect("theatre should exist");
    assert_eq!(theatre.location_id, location_id);
    assert_eq!(theatre.theatre_type_id, theatre_type_id);
    assert_eq!(theatre.capacity, Some(1200));
    assert!(!theatre.is_featured, "is_featured should default to false");
    assert!(theatre.is_active, "is_active should default to true");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_theatre_create_rejects_missing_parent(pool: PgPool) {
    let result = TheatreRepo::create(
        &pool,
        &CreateTheatre {
            location_id: 42,
            theatre_type_id: 42,
            name: "Orphan".to_string(),
            description: None,
            capacity: None,
            address: None,
            phone: None,
            email: None,
            website: None,
            image_url: None,
            is_featured: None,
            is_active: None,
        },
    )
    .await;

    let err = result.expect_err("insert with dangling FKs should fail");
    let db_err = err.as_database_error().expect("should be a database error");
    assert_eq!(db_err.code().as_deref(), Some("23503"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_theatre_reassign_parent(pool: PgPool) {
    let (_, _, theatre_id) = seed_theatre(&pool, "Adelphi").await;
    let other_location = LocationRepo::create(&pool, &location_input("Broadway"))
        .await
        .unwrap();

    let updated = TheatreRepo::update(
        &pool,
        theatre_id,
        &UpdateTheatre {
            location_id: Some(other_location.id),
            theatre_type_id: None,
            name: None,
            description: None,
            capacity: None,
            address: None,
            phone: None,
            email: None,
            website: None,
            image_url: None,
            is_featured: None,
            is_active: None,
        },
    )
    .await
    .unwrap()
    .expect("theatre should be updatable");

    assert_eq!(updated.location_id, other_location.id);
    assert_eq!(updated.name, "Adelphi");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_show_create_and_update_dates(pool: PgPool) {
    let (_, _, theatre_id) = seed_theatre(&pool, "Palladium").await;
    let show_type = ShowTypeRepo::create(
        &pool,
        &CreateShowType {
            name: "Musical".to_string(),
            description: None,
            is_active: None,
        },
    )
    .await
    .unwrap();

    let created = ShowRepo::create(
        &pool,
        &CreateShow {
            theatre_id,
            show_type_id: show_type.id,
            title: "Evening Falls".to_string(),
            description: None,
            director: Some("R. Moreau".to_string()),
            cast_members: Some("A. Webb, T. Okafor".to_string()),
            duration: Some(140),
            start_date: NaiveDate::from_ymd_opt(2026, 9, 1),
            end_date: None,
            price: Some(65.0),
            image_url: None,
            trailer_url: None,
            is_featured: Some(true),
            is_active: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(created.title, "Evening Falls");
    assert!(created.is_featured);
    assert_eq!(created.price, Some(65.0));
    assert_eq!(created.start_date, NaiveDate::from_ymd_opt(2026, 9, 1));

    let updated = ShowRepo::update(
        &pool,
        created.id,
        &UpdateShow {
            theatre_id: None,
            show_type_id: None,
            title: None,
            description: None,
            director: None,
            cast_members: None,
            duration: None,
            start_date: None,
            end_date: NaiveDate::from_ymd_opt(2026, 12, 31),
            price: None,
            image_url: None,
            trailer_url: None,
            is_featured: None,
            is_active: None,
        },
    )
    .await
    .unwrap()
    .expect("show should be updatable");

    assert_eq!(updated.end_date, NaiveDate::from_ymd_opt(2026, 12, 31));
    assert_eq!(updated.director.as_deref(), Some("R. Moreau"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_updated_at_advances_on_update(pool: PgPool) {
    let created = LocationRepo::create(&pool, &location_input("Riverside"))
        .await
        .unwrap();

    let updated = LocationRepo::update(
        &pool,
        created.id,
        &UpdateLocation {
            name: None,
            city: Some("Manchester".to_string()),
            state: None,
            country: None,
            latitude: None,
            longitude: None,
            postal_code: None,
            address: None,
            description: None,
            is_active: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert!(updated.updated_at >= created.updated_at);
    assert_eq!(updated.created_at, created.created_at);
}
