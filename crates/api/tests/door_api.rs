//! Integration tests for the door store endpoints: details get/save,
//! status counts, reset, clear, and the real-time events they publish.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post, post_json};
use serde_json::json;
use sqlx::PgPool;

use dockboard_api::handlers::door::apply_status;
use dockboard_db::repositories::{DoorDetailRepo, DoorRepo};
use dockboard_events::DashboardEvent;

async fn seed(pool: &PgPool) {
    DoorRepo::seed_if_empty(pool, 1, 50).await.unwrap();
}

// ---------------------------------------------------------------------------
// Door details
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn details_absent_returns_bare_door_id(pool: PgPool) {
    seed(&pool).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/door/3/details").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body, json!({ "door_id": 3 }));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn save_details_echoes_and_persists(pool: PgPool) {
    seed(&pool).await;
    let app = common::build_test_app(pool.clone());

    let response = post_json(
        app.clone(),
        "/api/door/3/details",
        json!({
            "run_number": "R-300",
            "loader": "Sam",
            "trailer": "TR-9",
            "stores": "101, 102",
            "notes": "hold for driver"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["door_id"], 3);
    assert_eq!(body["run_number"], "R-300");
    assert_eq!(body["loader"], "Sam");
    // Fields the client never sent come back as explicit nulls.
    assert!(body["trailer_temp1"].is_null());

    let fetched = body_json(get(app, "/api/door/3/details").await).await;
    assert_eq!(fetched["run_number"], "R-300");
    assert_eq!(fetched["notes"], "hold for driver");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn save_details_is_full_replace(pool: PgPool) {
    seed(&pool).await;
    let app = common::build_test_app(pool);

    post_json(app.clone(), "/api/door/3/details", json!({ "notes": "x" })).await;
    post_json(app.clone(), "/api/door/3/details", json!({ "loader": "y" })).await;

    let body = body_json(get(app, "/api/door/3/details").await).await;
    assert_eq!(body["loader"], "y");
    assert!(
        body["notes"].is_null(),
        "omitting a field must clear it -- full replace, not merge"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn save_details_publishes_door_details_saved(pool: PgPool) {
    seed(&pool).await;
    let state = common::test_state(pool);
    let mut events = state.event_bus.subscribe();
    let app = common::build_app_with_state(state);

    post_json(app, "/api/door/5/details", json!({ "trailer": "TR-1" })).await;

    let event = events.try_recv().expect("a broadcast should be published");
    match event {
        DashboardEvent::DoorDetailsSaved(payload) => {
            assert_eq!(payload.door_id, 5);
            assert_eq!(payload.fields.trailer.as_deref(), Some("TR-1"));
            assert!(payload.fields.notes.is_none());
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn save_details_for_unknown_door_is_silent_noop(pool: PgPool) {
    seed(&pool).await;
    let state = common::test_state(pool.clone());
    let mut events = state.event_bus.subscribe();
    let app = common::build_app_with_state(state);

    let response = post_json(app, "/api/door/9999/details", json!({ "notes": "x" })).await;
    // The payload is echoed, nothing persisted, nothing broadcast.
    assert_eq!(response.status(), StatusCode::OK);
    assert!(events.try_recv().is_err());
    assert!(DoorDetailRepo::find_by_door(&pool, 9999)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Status counts + the websocket-originated status path
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn status_counts_follow_updates(pool: PgPool) {
    seed(&pool).await;
    let state = common::test_state(pool);
    let app = common::build_app_with_state(state.clone());

    let counts = body_json(get(app.clone(), "/api/status_counts").await).await;
    assert_eq!(counts, json!({ "Backhaul": 50 }));

    apply_status(&state, 1, "Loading").await.unwrap();

    let counts = body_json(get(app, "/api/status_counts").await).await;
    assert_eq!(counts, json!({ "Backhaul": 49, "Loading": 1 }));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn apply_status_broadcasts_to_all_listeners(pool: PgPool) {
    seed(&pool).await;
    let state = common::test_state(pool);

    let mut listener_a = state.event_bus.subscribe();
    let mut listener_b = state.event_bus.subscribe();

    apply_status(&state, 1, "Loading").await.unwrap();

    for listener in [&mut listener_a, &mut listener_b] {
        let event = listener.try_recv().expect("every listener should observe");
        match event {
            DashboardEvent::StatusUpdated(payload) => {
                assert_eq!(payload.door_id, 1);
                assert_eq!(payload.status, "Loading");
                // No details exist yet: the snapshot carries explicit nulls.
                let detail = payload.detail.expect("status path carries detail fields");
                assert!(detail.run_number.is_none());
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn apply_status_for_unknown_door_is_silent_noop(pool: PgPool) {
    seed(&pool).await;
    let state = common::test_state(pool.clone());
    let mut events = state.event_bus.subscribe();

    apply_status(&state, 9999, "Loaded").await.unwrap();

    assert!(events.try_recv().is_err(), "no event for a no-op");
    assert!(DoorRepo::find_by_id(&pool, 9999).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Reset / clear
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn reset_all_resets_statuses_and_reports_count(pool: PgPool) {
    seed(&pool).await;
    let state = common::test_state(pool);
    let mut events = state.event_bus.subscribe();
    let app = common::build_app_with_state(state);

    let response = post(app.clone(), "/api/reset_all").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "reset": true, "count": 50 }));

    let counts = body_json(get(app, "/api/status_counts").await).await;
    assert_eq!(counts, json!({ "Empty": 50 }));

    // One status_updated per door, without detail fields.
    let mut seen = 0;
    while let Ok(event) = events.try_recv() {
        match event {
            DashboardEvent::StatusUpdated(payload) => {
                assert_eq!(payload.status, "Empty");
                assert!(payload.detail.is_none(), "reset events omit detail keys");
                seen += 1;
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
    assert_eq!(seen, 50);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn clear_all_data_wipes_details_and_nulls_broadcasts(pool: PgPool) {
    seed(&pool).await;
    let state = common::test_state(pool.clone());
    let app = common::build_app_with_state(state.clone());

    post_json(app.clone(), "/api/door/1/details", json!({ "notes": "keep?" })).await;
    apply_status(&state, 1, "Loaded").await.unwrap();

    let mut events = state.event_bus.subscribe();

    let response = post(app.clone(), "/api/clear_all_data").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "cleared": true, "count": 50 })
    );

    // Every door is Empty and every detail row is gone.
    let counts = body_json(get(app.clone(), "/api/status_counts").await).await;
    assert_eq!(counts, json!({ "Empty": 50 }));
    let details = body_json(get(app, "/api/door/1/details").await).await;
    assert_eq!(details, json!({ "door_id": 1 }));

    // Clear events carry explicitly nulled detail fields.
    let mut seen = 0;
    while let Ok(event) = events.try_recv() {
        match event {
            DashboardEvent::StatusUpdated(payload) => {
                assert_eq!(payload.status, "Empty");
                let detail = payload.detail.expect("clear events carry nulled fields");
                assert!(detail.notes.is_none());
                seen += 1;
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
    assert_eq!(seen, 50);
}

// ---------------------------------------------------------------------------
// PDF export
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn export_pdf_returns_attachment(pool: PgPool) {
    seed(&pool).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/export_pdf").await;
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response.headers().get("content-type").unwrap();
    assert_eq!(content_type, "application/pdf");

    let disposition = response
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(disposition.starts_with("attachment; filename=\"door_management_report_"));
    assert!(disposition.ends_with(".pdf\""));

    let bytes = http_body_util::BodyExt::collect(response.into_body())
        .await
        .unwrap()
        .to_bytes();
    assert!(bytes.starts_with(b"%PDF"));
}
