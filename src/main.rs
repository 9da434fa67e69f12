use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use chrono::Utc;
use tracing_subscriber::EnvFilter;

use std::sync::Arc;

use breadit::common::AppConfig;
use breadit::db::{self, Database};
use breadit::services::SessionProvider;
use breadit::web::helpers::STATIC_PREFIX;
use breadit::web::{self, AppState, SessionLoader};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let database = match Database::new(&config.database_url, config.max_connections).await {
        Ok(database) => Arc::new(database),
        Err(e) => {
            log::error!("Failed to connect to database / run migrations: {e}");
            std::process::exit(1);
        }
    };

    match db::purge_expired_sessions(&database.pool, Utc::now()).await {
        Ok(0) => {}
        Ok(n) => log::info!("Purged {n} expired sessions"),
        Err(e) => log::warn!("Could not purge expired sessions: {e}"),
    }

    let sessions = SessionProvider::new(database.clone(), config.session_ttl);
    let state = Data::new(AppState::new(database, sessions, config.secure_cookies));
    let static_dir = config.static_dir.clone();

    log::info!("Listening on {}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(Files::new(STATIC_PREFIX, static_dir.clone()).prefer_utf8(true))
            .wrap(SessionLoader)
            .wrap(Logger::default())
            .configure(web::configure)
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
