extern crate actix_web as aw;

use ::aw::{web::Data, HttpServer};

use ::dotenvy::dotenv;
use ::log::{info, trace};
use ::sea_orm::{Database, DbErr};
use migration::{Migrator, MigratorTrait};

pub mod api;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod schemas;
pub mod session;
pub mod state;
pub mod store;
use config::Config;
use state::*;

macro_rules! app {
    ($frontend_url:expr) => {
        ::actix_web::App::new()
            .wrap(middleware::cors($frontend_url))
            .wrap(::actix_web::middleware::Logger::default())
            .configure(handlers::config)
            .default_service(::actix_web::web::to(handlers::not_found))
    };
}

#[derive(Debug, ::thiserror::Error)]
enum StartUpError {
    #[error("APP_PORT is not a valid port: {0}")]
    InvalidAppPort(#[from] std::num::ParseIntError),
    #[error("Database IO error: {0}")]
    DbErr(#[from] DbErr),
    #[error("general IO error: {0}")]
    IO(#[from] std::io::Error),
}

#[actix_web::main]
async fn main() -> Result<(), StartUpError> {
    dotenvy::from_path("../.env").ok();
    dotenv().ok();

    let config = Config::from_env();
    logging::init(&config.log_file);

    trace!("TRACE level enabled");

    let bind_addr = config.bind_addr()?;

    let db = Database::connect(config.connection_string()).await?;
    Migrator::up(&db, None).await?;

    let registry = Data::new(Registry { db });
    let frontend_url = config.frontend_url.clone();

    info!("listening on {}:{}", bind_addr.0, bind_addr.1);

    let srv = HttpServer::new(move || {
        app!(frontend_url.as_deref()).app_data(Data::clone(&registry))
    })
    .bind(bind_addr)?
    .run();

    srv.await?;

    Ok(())
}
