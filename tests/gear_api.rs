//! HTTP-level tests for the gear catalogue endpoints (no database needed).

use actix_web::{http::StatusCode, test, web, App};
use alliance_server::http;
use serde_json::Value;

#[actix_rt::test]
async fn catalogue_lists_every_item() {
    let app = test::init_service(
        App::new().service(web::scope("/api").configure(http::gear::init_routes)),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/gear").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let items = body.as_array().expect("array response");
    assert_eq!(items.len(), 44);

    let helm = items
        .iter()
        .find(|item| item["id"] == "helm_inf_leg")
        .expect("war helm present");
    assert_eq!(helm["slot"], "helmet");
    assert_eq!(helm["rarity"], "legendary");
    assert_eq!(helm["stats"]["infantry"]["defense"], 8);
}

#[actix_rt::test]
async fn accessory_slots_share_one_pool() {
    let app = test::init_service(
        App::new().service(web::scope("/api").configure(http::gear::init_routes)),
    )
    .await;

    for slot in ["accessory1", "accessory2"] {
        let req = test::TestRequest::get()
            .uri(&format!("/api/gear/{slot}"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.as_array().expect("array response").len(), 8);
    }
}

#[actix_rt::test]
async fn armor_slots_list_their_own_gear() {
    let app = test::init_service(
        App::new().service(web::scope("/api").configure(http::gear::init_routes)),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/gear/helmet").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let items = body.as_array().expect("array response");
    assert_eq!(items.len(), 6);
    assert!(items.iter().all(|item| item["slot"] == "helmet"));
}

#[actix_rt::test]
async fn unknown_slot_is_rejected() {
    let app = test::init_service(
        App::new().service(web::scope("/api").configure(http::gear::init_routes)),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/gear/ring").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
