use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::info;

use wanderplan_api::config::AppConfig;
use wanderplan_api::db;
use wanderplan_api::middleware;
use wanderplan_api::routes;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);

    let mongo_uri = std::env::var("MONGODB_URI").expect("MONGODB_URI must be set");
    let client = db::mongo::create_mongo_client(&mongo_uri).await;

    // All process-wide itinerary settings are read here, once, and threaded
    // through app data; the pure services never touch the environment.
    let app_config = AppConfig::from_env();

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(web::Data::new(client.clone()))
            .app_data(web::Data::new(app_config.clone()))
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api")
                    // Public routes
                    .service(
                        web::scope("/auth")
                            .route("/signup", web::post().to(routes::auth::signup))
                            .route("/signin", web::post().to(routes::auth::signin))
                            .service(
                                web::scope("").wrap(middleware::auth::AuthMiddleware).route(
                                    "/session",
                                    web::get().to(routes::auth::user_session),
                                ),
                            ),
                    )
                    .service(
                        web::scope("/destinations")
                            .route("", web::get().to(routes::destination::get_destinations))
                            .route("/{id}", web::get().to(routes::destination::get_by_id))
                            .route(
                                "/{id}/activities",
                                web::get().to(routes::activity::get_for_destination),
                            ),
                    )
                    // Protected routes
                    .service(
                        web::scope("/trips")
                            .wrap(middleware::auth::AuthMiddleware)
                            .route("", web::get().to(routes::trip::list))
                            .route("", web::post().to(routes::trip::create))
                            .route("/{id}", web::get().to(routes::trip::get_by_id))
                            .route("/{id}", web::put().to(routes::trip::update))
                            .route("/{id}", web::delete().to(routes::trip::delete))
                            .route(
                                "/{id}/itinerary",
                                web::get().to(routes::itinerary::get_for_trip),
                            )
                            .route(
                                "/{id}/itinerary/generate",
                                web::post().to(routes::itinerary::generate_for_trip),
                            )
                            .route(
                                "/{id}/itinerary/enrich",
                                web::post().to(routes::itinerary::enrich_for_trip),
                            ),
                    )
                    .service(
                        web::scope("/uploads")
                            .wrap(middleware::auth::AuthMiddleware)
                            .route("", web::post().to(routes::upload::create))
                            .route("/{id}", web::get().to(routes::upload::get_by_id)),
                    ),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
