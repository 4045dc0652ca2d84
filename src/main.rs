use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use quiz_crawler_server::{
    app_state::AppState, auth::AuthMiddleware, config::Config, handlers,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config)
        .await
        .expect("failed to initialise application state");

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::from(state.jwt_service.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(handlers::health_check)
            .service(handlers::health_check_live)
            .service(handlers::health_check_ready)
            .service(handlers::google_auth)
            .service(handlers::logout)
            .service(
                web::scope("")
                    .wrap(AuthMiddleware)
                    .service(handlers::generate_quiz)
                    .service(handlers::submit_rating)
                    .service(handlers::check_rating),
            )
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
