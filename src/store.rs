use ::sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

use crate::schemas::Rating;
use entity::{prelude::Review, review};

/// Операции над таблицей `reviews` поверх любого соединения
/// (пул или транзакция сессии).
pub struct ReviewStore<'c, C> {
    conn: &'c C,
}

impl<'c, C> ReviewStore<'c, C>
where
    C: ConnectionTrait,
{
    pub fn new(conn: &'c C) -> Self {
        Self { conn }
    }

    /// `id` и `created_at` проставляет база.
    pub async fn insert(&self, rating: Rating) -> Result<review::Model, DbErr> {
        review::ActiveModel {
            rating: ActiveValue::Set(rating.get()),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }

    pub async fn list_all(&self) -> Result<Vec<review::Model>, DbErr> {
        Review::find()
            .order_by_asc(review::Column::Id)
            .all(self.conn)
            .await
    }
}

