use std::{future::Future, pin::Pin};

use ::aw::{web::Data, FromRequest, HttpRequest};
use ::log::trace;
use ::sea_orm::{DatabaseTransaction, DbErr, TransactionTrait};

use crate::{error::ApiError, state::Registry, store::ReviewStore};

/// Сессия к базе на время одного запроса.
///
/// Открывает транзакцию при извлечении из запроса. `commit` поглощает
/// сессию; если хендлер вышел раньше (ошибка, `?`), транзакция
/// откатывается при drop и соединение возвращается в пул.
pub struct DbSession(DatabaseTransaction);

impl DbSession {
    pub async fn begin(reg: &Registry) -> Result<Self, DbErr> {
        let txn = reg.db.begin().await?;
        trace!("db session opened");
        Ok(Self(txn))
    }

    pub fn reviews(&self) -> ReviewStore<'_, DatabaseTransaction> {
        ReviewStore::new(&self.0)
    }

    pub async fn commit(self) -> Result<(), DbErr> {
        self.0.commit().await?;
        trace!("db session committed");
        Ok(())
    }
}

impl FromRequest for DbSession {
    type Error = ApiError;

    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut ::aw::dev::Payload) -> Self::Future {
        let reg = req.app_data::<Data<Registry>>().cloned();

        Box::pin(async move {
            let reg = reg.ok_or_else(|| ApiError::internal("Registry is not registered as app data"))?;

            DbSession::begin(&reg).await.map_err(ApiError::internal)
        })
    }
}
