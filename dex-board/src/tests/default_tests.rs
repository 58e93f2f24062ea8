use crate::handlers::default_handler;
use crate::types::default::HealthCheckResponse;
use actix_web::{test, App};

#[actix_web::test]
async fn test_health_check() {
    let app = test::init_service(App::new().configure(default_handler::configure)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: HealthCheckResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.status, "ok");
}
