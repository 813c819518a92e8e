use actix_web::{middleware::Logger, web, App, HttpServer};
use clap::{Arg, Command};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::SystemTime;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use star_forum::config::AppConfig;
use star_forum::database::Database;
use star_forum::error::AppResult;
use star_forum::handlers::AppState;
use star_forum::routes;

#[actix_web::main]
async fn main() -> AppResult<()> {
    let matches = Command::new("star-forum")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Question and answer forum service with STAR-format answers")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to configuration file")
                .value_name("FILE"),
        )
        .get_matches();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("star_forum=info".parse().unwrap()))
        .init();

    tracing::info!("Starting star-forum server");

    let config = match matches.get_one::<String>("config") {
        Some(path) => AppConfig::load_from_file(&PathBuf::from(path))?,
        None => AppConfig::load()?,
    };

    let database = Arc::new(Database::new(&config.database.path)?);
    tracing::info!("Database initialized at {:?}", config.database.path);

    let app_state = web::Data::new(AppState {
        database,
        start_time: SystemTime::now(),
    });

    let server_addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Starting HTTP server on {}", server_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Logger::default())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await?;

    Ok(())
}
