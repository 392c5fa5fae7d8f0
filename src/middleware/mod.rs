use ::actix_cors::Cors;
use ::log::warn;

/// CORS разрешён только фронтенду из `FRONTEND_URL`.
pub fn cors(frontend_url: Option<&str>) -> Cors {
    let cors = Cors::default()
        .allowed_methods(["GET", "POST", "OPTIONS"])
        .allow_any_header()
        .supports_credentials();

    match frontend_url {
        Some(origin) => cors.allowed_origin(origin),
        None => {
            warn!("FRONTEND_URL is not set, cross-origin requests will be rejected");
            cors
        }
    }
}
