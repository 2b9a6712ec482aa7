mod config;
mod cors;
mod services;
#[cfg(test)]
mod test_support;

use crate::config::ServerConfig;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::{info, warn};
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = ServerConfig::parse();
    let url = config.url();

    if !config.forms_dir.is_dir() {
        warn!(
            "Forms directory {} does not exist; every schema request will return 404",
            config.forms_dir.display()
        );
    }

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url);
        });
    }

    info!(
        "Server running at {} (forms: {}, database: {})",
        url,
        config.forms_dir.display(),
        config.database_path.display()
    );

    if !config.cors_origins.is_empty() {
        info!("Cross-origin requests allowed from {}", config.cors_origins.join(", "));
    }

    let bind = (config.host.clone(), config.port);
    let cors_origins = config.cors_origins.clone();
    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .app_data(config.clone())
            .wrap(cors::middleware(&cors_origins))
            .service(services::forms::configure_routes())
            .configure(services::submissions::configure_routes)
            .default_service(web::route().to(services::assets::process))
    })
    .bind(bind)?
    .run()
    .await
}
