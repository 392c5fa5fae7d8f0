use ::sea_orm::DbConn;

/// Общее для всех воркеров состояние: только пул соединений.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    pub db: DbConn,
}
