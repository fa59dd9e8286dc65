use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use env_logger::Env;
use log::info;
use rail_qr_backend::config::AppConfig;
use rail_qr_backend::services;
use rail_qr_backend::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();
    tokio::fs::create_dir_all(&config.upload_dir).await?;
    let bind = config.bind_address();
    let url = format!("http://{}:{}", bind.0, bind.1);

    let state = AppState::from_config(config).map_err(std::io::Error::other)?;

    info!("Server running at {}", url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(|cfg| services::configure(cfg, &state))
    })
    .bind(bind)?
    .run()
    .await
}
