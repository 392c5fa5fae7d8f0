use std::borrow::Cow;

use ::serde::{Deserialize, Serialize};
use ::serde_json::{json, Value};

pub const RATING_MIN: i64 = 1;
pub const RATING_MAX: i64 = 5;

/// Описание одной ошибки валидации, в том же виде, что ждёт фронтенд:
/// `{"loc": ["body", "rating"], "msg": "...", "type": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub loc: Vec<Cow<'static, str>>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctx: Option<Value>,
}

impl FieldError {
    fn new(loc: &[&'static str], msg: impl Into<String>, kind: &'static str) -> Self {
        Self {
            loc: loc.iter().copied().map(Cow::Borrowed).collect(),
            msg: msg.into(),
            kind,
            ctx: None,
        }
    }

    /// тело вообще не удалось прочитать как JSON
    pub fn body(err: impl std::fmt::Display) -> Self {
        Self::new(&["body"], err.to_string(), "value_error.jsondecode")
    }

    pub fn missing(field: &'static str) -> Self {
        Self::new(&["body", field], "field required", "value_error.missing")
    }

    fn with_limit(mut self, limit: i64) -> Self {
        self.ctx = Some(json!({ "limit_value": limit }));
        self
    }
}

/// Схема тела запроса, которую можно проверить до обращения к базе.
pub trait Validate: Sized {
    fn validate(body: Value) -> Result<Self, Vec<FieldError>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReviewCreate {
    pub rating: i64,
}

impl Validate for ReviewCreate {
    fn validate(body: Value) -> Result<Self, Vec<FieldError>> {
        let Value::Object(fields) = body else {
            return Err(vec![FieldError::new(
                &["body"],
                "value is not a valid dict",
                "type_error.dict",
            )]);
        };

        let rating = match fields.get("rating") {
            None | Some(Value::Null) => return Err(vec![FieldError::missing("rating")]),
            Some(value) => value.as_i64().ok_or_else(|| {
                vec![FieldError::new(
                    &["body", "rating"],
                    "value is not a valid integer",
                    "type_error.integer",
                )]
            })?,
        };

        if rating < RATING_MIN {
            return Err(vec![FieldError::new(
                &["body", "rating"],
                format!("ensure this value is greater than or equal to {RATING_MIN}"),
                "value_error.number.not_ge",
            )
            .with_limit(RATING_MIN)]);
        }

        if rating > RATING_MAX {
            return Err(vec![FieldError::new(
                &["body", "rating"],
                format!("ensure this value is less than or equal to {RATING_MAX}"),
                "value_error.number.not_le",
            )
            .with_limit(RATING_MAX)]);
        }

        Ok(Self { rating })
    }
}

#[derive(Debug, ::thiserror::Error, PartialEq, Eq)]
#[error("rating must be between 1 and 5, got {0}")]
pub struct RatingError(pub i64);

/// Оценка, уже прошедшая проверку диапазона.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating(i32);

impl Rating {
    pub fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = RatingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (RATING_MIN..=RATING_MAX).contains(&value) {
            // диапазон уже гарантирует, что значение влезает в i32
            Ok(Self(value as i32))
        } else {
            Err(RatingError(value))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewResponse {
    pub id: i32,
    pub rating: i32,
    pub created_at: ::chrono::NaiveDateTime,
}

impl From<entity::review::Model> for ReviewResponse {
    fn from(review: entity::review::Model) -> Self {
        Self {
            id: review.id,
            rating: review.rating,
            created_at: review.created_at,
        }
    }
}
