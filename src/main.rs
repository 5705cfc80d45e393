use actix_cors::Cors;
use actix_web::{http, middleware::Logger, web, App, HttpServer};

use lingua_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let cors_origin = config.cors_allowed_origin.clone();

    let state = AppState::new(config)
        .await
        .expect("failed to initialise application state");

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&cors_origin)
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allowed_headers(vec![http::header::AUTHORIZATION, http::header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(cors)
            .service(handlers::health_check)
            .service(handlers::health_check_live)
            .service(handlers::health_check_ready)
            .service(handlers::create_course)
            .service(handlers::get_course)
            .service(handlers::list_courses)
            .service(handlers::update_course)
            .service(handlers::delete_course)
            .service(handlers::create_activity)
            .service(handlers::get_activity)
            .service(handlers::list_course_activities)
            .service(handlers::reorder_activities)
            .service(handlers::update_activity)
            .service(handlers::delete_activity)
            .service(handlers::save_progress)
            .service(handlers::get_course_progress)
            .service(handlers::get_enrollments)
            .service(handlers::create_term)
            .service(handlers::get_term)
            .service(handlers::list_terms)
            .service(handlers::update_term)
            .service(handlers::delete_term)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
