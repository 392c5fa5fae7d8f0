use ::sea_orm::entity::prelude::*;
use ::serde::{Deserialize, Serialize};

pub mod prelude;

pub mod review;
