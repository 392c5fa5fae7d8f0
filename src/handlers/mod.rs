use ::aw::{
    web::{self, Json, Redirect},
    HttpRequest, HttpResponse, Responder,
};
use ::log::trace;

use crate::{
    api::Valid,
    error::ApiError,
    schemas::{Rating, ReviewCreate, ReviewResponse},
    session::DbSession,
};

mod reviews;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/reviews").to(add_trailing_slash));
    cfg.configure(reviews::config);
}

/// `/reviews` -> `/reviews/` с сохранением метода и тела
async fn add_trailing_slash(req: HttpRequest) -> impl Responder {
    let location = match req.query_string() {
        "" => format!("{}/", req.path()),
        query => format!("{}/?{}", req.path(), query),
    };

    Redirect::to(location).temporary()
}

pub async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound)
}

pub async fn method_not_allowed() -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed)
}
