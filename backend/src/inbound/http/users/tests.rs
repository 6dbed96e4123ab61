//! Tests for users API handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{
    MockUserService, NoOpUserOperationLog, UserRepositoryError, UserService,
};
use crate::domain::UserAppService;
use crate::inbound::http::configure_api;
use crate::outbound::memory::InMemoryUserRepository;

fn memory_service(users: Vec<User>) -> Arc<dyn UserService> {
    Arc::new(UserAppService::new(
        Arc::new(InMemoryUserRepository::with_users(users)),
        Arc::new(NoOpUserOperationLog),
    ))
}

fn test_app(
    service: Arc<dyn UserService>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::new(service)))
        .configure(configure_api)
}

async fn send(service: Arc<dyn UserService>, request: actix_test::TestRequest) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(service)).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = serde_json::from_slice(&body).expect("json body");
    (status, value)
}

fn user(id: &str, name: &str) -> User {
    User::new(UserId::new(id), name)
}

#[actix_web::test]
async fn create_returns_created_user_with_generated_id() {
    let (status, body) = send(
        memory_service(Vec::new()),
        actix_test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({ "name": "John" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "John");
    let id = body["id"].as_str().expect("id string");
    assert!(uuid::Uuid::parse_str(id).is_ok(), "id: {id}");
}

#[actix_web::test]
async fn create_trims_name_and_ignores_supplied_id() {
    let (status, body) = send(
        memory_service(Vec::new()),
        actix_test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({ "id": "mine", "name": "  John  " })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "John");
    assert_ne!(body["id"], "mine");
}

#[rstest]
#[case(json!({ "name": "" }))]
#[case(json!({}))]
#[case(json!({ "name": null }))]
#[actix_web::test]
async fn create_rejects_empty_or_missing_name(#[case] payload: Value) {
    let (status, body) = send(
        Arc::new(MockUserService::new()),
        actix_test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "name is required" }));
}

#[actix_web::test]
async fn whitespace_name_passes_validation_and_is_trimmed() {
    let (status, body) = send(
        memory_service(Vec::new()),
        actix_test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({ "name": "   " })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "");
}

#[rstest]
#[case("{invalid}", ContentType::json())]
#[case(r#"{"name": 42}"#, ContentType::json())]
#[case("name=John", ContentType::form_url_encoded())]
#[actix_web::test]
async fn undecodable_bodies_are_invalid_requests(
    #[case] payload: &'static str,
    #[case] content_type: ContentType,
) {
    let (status, body) = send(
        Arc::new(MockUserService::new()),
        actix_test::TestRequest::post()
            .uri("/api/v1/users")
            .insert_header(content_type)
            .set_payload(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "invalid request" }));
}

#[rstest]
#[case(ContentType::form_url_encoded())]
#[case(ContentType::plaintext())]
#[actix_web::test]
async fn json_bodies_decode_whatever_the_content_type(#[case] content_type: ContentType) {
    let (status, body) = send(
        memory_service(Vec::new()),
        actix_test::TestRequest::post()
            .uri("/api/v1/users")
            .insert_header(content_type)
            .set_payload(r#"{"name":"John"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "John");
}

#[actix_web::test]
async fn update_with_null_name_is_rejected() {
    let (status, body) = send(
        Arc::new(MockUserService::new()),
        actix_test::TestRequest::put()
            .uri("/api/v1/users/123")
            .set_json(json!({ "name": null })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "name is required" }));
}

#[actix_web::test]
async fn create_surfaces_service_errors_as_500() {
    let mut service = MockUserService::new();
    service
        .expect_create()
        .times(1)
        .returning(|_| Err(UserRepositoryError::query("db error")));

    let (status, body) = send(
        Arc::new(service),
        actix_test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({ "name": "John" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "error": "user repository query failed: db error" })
    );
}

#[actix_web::test]
async fn list_on_empty_store_is_empty_array() {
    let (status, body) = send(
        memory_service(Vec::new()),
        actix_test::TestRequest::get().uri("/api/v1/users"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn list_returns_every_user() {
    let (status, body) = send(
        memory_service(vec![user("2", "Bob"), user("1", "Ada")]),
        actix_test::TestRequest::get().uri("/api/v1/users"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{ "id": "1", "name": "Ada" }, { "id": "2", "name": "Bob" }])
    );
}

#[actix_web::test]
async fn get_returns_stored_user() {
    let (status, body) = send(
        memory_service(vec![user("123", "John")]),
        actix_test::TestRequest::get().uri("/api/v1/users/123"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": "123", "name": "John" }));
}

#[actix_web::test]
async fn get_missing_user_is_500_with_message() {
    let (status, body) = send(
        memory_service(Vec::new()),
        actix_test::TestRequest::get().uri("/api/v1/users/123"),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "user not found" }));
}

#[actix_web::test]
async fn update_existing_user_confirms() {
    let service = memory_service(vec![user("123", "John")]);
    let (status, body) = send(
        Arc::clone(&service),
        actix_test::TestRequest::put()
            .uri("/api/v1/users/123")
            .set_json(json!({ "name": "Updated John" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "user updated" }));
    let stored = service
        .get_user(&UserId::new("123"))
        .await
        .expect("user still stored");
    assert_eq!(stored.name(), "Updated John");
}

#[actix_web::test]
async fn update_rejects_empty_name() {
    let (status, body) = send(
        Arc::new(MockUserService::new()),
        actix_test::TestRequest::put()
            .uri("/api/v1/users/123")
            .set_json(json!({ "name": "" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "name is required" }));
}

#[actix_web::test]
async fn update_missing_user_is_500() {
    let (status, body) = send(
        memory_service(Vec::new()),
        actix_test::TestRequest::put()
            .uri("/api/v1/users/123")
            .set_json(json!({ "name": "Updated John" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "user not found" }));
}

#[actix_web::test]
async fn update_passes_path_id_to_service() {
    let mut service = MockUserService::new();
    service
        .expect_update()
        .withf(|user| user.id().as_str() == "abc" && user.name() == "Ada")
        .times(1)
        .returning(|_| Ok(()));

    let (status, _) = send(
        Arc::new(service),
        actix_test::TestRequest::put()
            .uri("/api/v1/users/abc")
            .set_json(json!({ "id": "other", "name": "Ada" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn remove_existing_user_confirms() {
    let (status, body) = send(
        memory_service(vec![user("123", "John")]),
        actix_test::TestRequest::delete().uri("/api/v1/users/123"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "user removed" }));
}

#[actix_web::test]
async fn remove_missing_user_is_500() {
    let (status, body) = send(
        memory_service(Vec::new()),
        actix_test::TestRequest::delete().uri("/api/v1/users/123"),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "user not found" }));
}
