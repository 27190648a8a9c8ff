//! Soft-delete semantics: tombstoned rows vanish from default reads but
//! remain resolvable through the include-deleted escape hatch.

use marquee_db::models::location::CreateLocation;
use marquee_db::models::show_type::CreateShowType;
use marquee_db::models::theatre::CreateTheatre;
use marquee_db::models::theatre_type::CreateTheatreType;
use marquee_db::repositories::{LocationRepo, ShowTypeRepo, TheatreRepo, TheatreTypeRepo};
use sqlx::PgPool;

fn location_input(name: &str) -> CreateLocation {
    CreateLocation {
        name: name.to_string(),
        city: "Dublin".to_string(),
        state: None,
        country: "Ireland".to_string(),
        latitude: None,
        longitude: None,
        postal_code: None,
        address: None,
        description: None,
        is_active: None,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_delete_hides_row_from_reads(pool: PgPool) {
    let created = LocationRepo::create(&pool, &location_input("Abbey")).await.unwrap();

    assert!(LocationRepo::soft_delete(&pool, created.id).await.unwrap());

    assert!(LocationRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
    assert!(LocationRepo::list(&pool, 20, 0).await.unwrap().is_empty());
    assert!(LocationRepo::list_active(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_delete_is_not_repeatable(pool: PgPool) {
    let created = LocationRepo::create(&pool, &location_input("Gate")).await.unwrap();

    assert!(LocationRepo::soft_delete(&pool, created.id).await.unwrap());
    assert!(
        !LocationRepo::soft_delete(&pool, created.id).await.unwrap(),
        "second delete should find no live row"
    );
    assert!(
        !LocationRepo::soft_delete(&pool, 999_999).await.unwrap(),
        "deleting a nonexistent id should report no rows"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_include_deleted_escape_hatch(pool: PgPool) {
    let created = LocationRepo::create(&pool, &location_input("Olympia")).await.unwrap();
    LocationRepo::soft_delete(&pool, created.id).await.unwrap();

    let tombstone = LocationRepo::find_by_id_include_deleted(&pool, created.id)
        .await
        .unwrap()
        .expect("tombstoned row should still be resolvable");
    assert_eq!(tombstone.name, "Olympia");
    assert!(tombstone.deleted_at.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleted_row_blocks_updates(pool: PgPool) {
    let created = TheatreTypeRepo::create(
        &pool,
        &CreateTheatreType {
            name: "Opera House".to_string(),
            description: None,
            is_active: None,
        },
    )
    .await
    .unwrap();
    TheatreTypeRepo::soft_delete(&pool, created.id).await.unwrap();

    let result = TheatreTypeRepo::update(
        &pool,
        created.id,
        &marquee_db::models::theatre_type::UpdateTheatreType {
            name: Some("Concert Hall".to_string()),
            description: None,
            is_active: None,
        },
    )
    .await
    .unwrap();
    assert!(result.is_none(), "updates must not resurrect tombstones");
}

/// Soft-deleting a parent leaves existing children untouched; the historical
/// reference stays resolvable through the escape hatch.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_parent_delete_leaves_children_live(pool: PgPool) {
    let location = LocationRepo::create(&pool, &location_input("Docklands")).await.unwrap();
    let theatre_type = TheatreTypeRepo::create(
        &pool,
        &CreateTheatreType {
            name: "Playhouse".to_string(),
            description: None,
            is_active: None,
        },
    )
    .await
    .unwrap();
    let theatre = TheatreRepo::create(
        &pool,
        &CreateTheatre {
            location_id: location.id,
            theatre_type_id: theatre_type.id,
            name: "Docklands Playhouse".to_string(),
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
    .unwrap();

    LocationRepo::soft_delete(&pool, location.id).await.unwrap();

    let still_there = TheatreRepo::find_by_id(&pool, theatre.id)
        .await
        .unwrap()
        .expect("child theatre should remain live");
    assert_eq!(still_there.location_id, location.id);

    let parent = LocationRepo::find_by_id_include_deleted(&pool, location.id)
        .await
        .unwrap()
        .expect("deleted parent should resolve via escape hatch");
    assert!(parent.deleted_at.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_delete_applies_to_category_lookups(pool: PgPool) {
    let created = ShowTypeRepo::create(
        &pool,
        &CreateShowType {
            name: "Cabaret".to_string(),
            description: None,
            is_active: None,
        },
    )
    .await
    .unwrap();

    assert!(ShowTypeRepo::find_by_name(&pool, "Cabaret")
        .await
        .unwrap()
        .is_some());

    ShowTypeRepo::soft_delete(&pool, created.id).await.unwrap();

    assert!(
        ShowTypeRepo::find_by_name(&pool, "Cabaret")
            .await
            .unwrap()
            .is_none(),
        "name lookup must not see tombstones"
    );
}
