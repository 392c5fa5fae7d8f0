use std::{future::Future, pin::Pin};

use ::aw::{web::Json, FromRequest, HttpRequest};
use ::log::trace;
use ::serde_json::Value;

use crate::{
    error::ApiError,
    schemas::{FieldError, Validate},
};

/// Тело запроса, уже разобранное и проверенное схемой `T`.
///
/// Любая ошибка (не тот content-type, битый JSON, не прошёл `Validate`)
/// превращается в 422 ещё до того, как хендлер откроет сессию к базе.
#[derive(Debug, Clone)]
pub struct Valid<T>(pub T);

impl<T> FromRequest for Valid<T>
where
    T: Validate + 'static,
{
    type Error = ApiError;

    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut ::aw::dev::Payload) -> Self::Future {
        let body = Json::<Value>::from_request(req, payload);

        Box::pin(async move {
            let Json(value) = body
                .await
                .map_err(|err| ApiError::Validation(vec![FieldError::body(err)]))?;

            trace!("INPUT REQUEST: `{}`", &value);

            T::validate(value).map(Valid).map_err(ApiError::Validation)
        })
    }
}
