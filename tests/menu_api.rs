use actix_web::{test, web, App};
use courtside_ui::api;

// Integration tests for the menu endpoint

#[actix_web::test]
async fn menu_endpoint_serves_the_builtin_menu_without_a_document() {
    let app =
        test::init_service(App::new().route("/api/menu.json", web::get().to(api::menu))).await;

    let request = test::TestRequest::get().uri("/api/menu.json").to_request();
    let document: api::MenuDocument = test::call_and_read_body_json(&app, request).await;

    let routes: Vec<_> = document
        .items
        .iter()
        .map(|entry| entry.route.as_str())
        .collect();
    assert_eq!(routes, ["home", "schedule", "gallery", "join"]);
}

#[actix_web::test]
async fn menu_endpoint_answers_with_json() {
    let app =
        test::init_service(App::new().route("/api/menu.json", web::get().to(api::menu))).await;

    let request = test::TestRequest::get().uri("/api/menu.json").to_request();
    let response = test::call_service(&app, request).await;

    assert!(response.status().is_success());
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("application/json"));
}
