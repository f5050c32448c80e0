use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use folio_backend::auth::AuthGate;
use folio_backend::config::AppConfig;
use folio_backend::{handlers, open_store};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    let store = open_store(&config.storage);
    tracing::info!(medium = store.medium_name(), "Portfolio store ready");
    let store_data = web::Data::new(store);

    let gate = AuthGate::new(
        config.admin_password.clone(),
        config.session_ttl,
        config.production,
    );
    let gate_data = web::Data::new(gate);

    let bind_addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Server running at http://{bind_addr}");

    let static_dir = config.static_dir.clone();
    let allowed_origin = config.allowed_origin.clone();

    HttpServer::new(move || {
        let cors = match &allowed_origin {
            Some(origin) => Cors::default().allowed_origin(origin).supports_credentials(),
            None => Cors::default().allow_any_origin(),
        }
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            actix_web::http::header::CONTENT_TYPE,
            actix_web::http::header::ACCEPT,
        ])
        .max_age(3600);

        let mut app = App::new()
            .wrap(cors)
            .app_data(store_data.clone())
            .app_data(gate_data.clone())
            .app_data(handlers::json_config())
            .service(web::scope("/api").configure(handlers::init_routes));

        if let Some(dir) = &static_dir {
            app = app.service(Files::new("/", dir).index_file("index.html"));
        }
        app
    })
    .bind(&bind_addr)?
    .run()
    .await
}
