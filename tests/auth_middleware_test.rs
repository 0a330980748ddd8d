use actix_web::{test, web, App, HttpResponse, Responder};
use mongodb::bson::oid::ObjectId;
use serial_test::serial;

use wanderplan_api::middleware::auth::{create_token, decode_token, AuthMiddleware};
use wanderplan_api::middleware::auth_context::AuthenticatedUser;

async fn whoami(user: AuthenticatedUser) -> impl Responder {
    HttpResponse::Ok().body(user.email)
}

fn protected_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new().service(
        web::scope("")
            .wrap(AuthMiddleware)
            .route("/whoami", web::get().to(whoami)),
    )
}

#[actix_rt::test]
#[serial]
async fn test_token_round_trip() {
    std::env::set_var("JWT_SECRET", "test-secret");

    let user_id = ObjectId::new();
    let token = create_token("ana@example.com", &user_id).unwrap();
    let claims = decode_token(&token).unwrap();

    assert_eq!(claims.sub, "ana@example.com");
    assert_eq!(claims.user_id, user_id.to_hex());
    assert!(claims.exp > claims.iat);
}

#[actix_rt::test]
#[serial]
async fn test_bearer_token_grants_access() {
    std::env::set_var("JWT_SECRET", "test-secret");

    let app = test::init_service(protected_app()).await;
    let token = create_token("ana@example.com", &ObjectId::new()).unwrap();

    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body = test::read_body(resp).await;
    assert_eq!(body, "ana@example.com");
}

#[actix_rt::test]
#[serial]
async fn test_missing_header_is_unauthorized() {
    std::env::set_var("JWT_SECRET", "test-secret");

    let app = test::init_service(protected_app()).await;
    let req = test::TestRequest::get().uri("/whoami").to_request();

    let err = test::try_call_service(&app, req).await.unwrap_err();
    assert_eq!(err.as_response_error().status_code(), 401);
}

#[actix_rt::test]
#[serial]
async fn test_garbage_token_is_unauthorized() {
    std::env::set_var("JWT_SECRET", "test-secret");

    let app = test::init_service(protected_app()).await;
    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header(("Authorization", "Bearer not.a.token"))
        .to_request();

    let err = test::try_call_service(&app, req).await.unwrap_err();
    assert_eq!(err.as_response_error().status_code(), 401);
}
