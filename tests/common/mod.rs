use std::ops::Deref;

pub use ::aw::{
    http::{header, Method, StatusCode},
    test,
    web::{self, Data},
};

pub use ::serde_json::{json, Value};
pub use ::tokio::sync::Mutex;

use ::sea_orm::{ConnectOptions, Database, DbConn, DbErr};
use ::tokio::sync::MutexGuard;
use migration::{Migrator, MigratorTrait};

use crate::config::Config;

pub const FRONTEND_URL: &str = "http://localhost:5173";

/// тесты одного бинарника делят тестовую базу, поэтому идут по очереди
static DB_LOCK: Mutex<()> = Mutex::const_new(());

/// Соединение с чистой таблицей `reviews`; база занята, пока жив `TestDb`.
pub struct TestDb {
    pub db: DbConn,
    _lock: MutexGuard<'static, ()>,
}

impl Deref for TestDb {
    type Target = DbConn;

    fn deref(&self) -> &Self::Target {
        &self.db
    }
}

/// `POSTGRES_TEST_*` из окружения (или `.env`), иначе in-memory SQLite.
///
/// Для SQLite в пуле ровно одно соединение: каждое новое
/// получило бы свою пустую базу.
pub async fn setup_db() -> Result<TestDb, DbErr> {
    let lock = DB_LOCK.lock().await;

    ::dotenvy::from_path("../.env").ok();
    ::dotenvy::dotenv().ok();

    let opts = match Config::from_env().test_connection_string() {
        Some(url) => {
            let mut opts = ConnectOptions::new(url);
            opts.sqlx_logging(false);
            opts
        }
        None => {
            let mut opts = ConnectOptions::new("sqlite::memory:");
            opts.max_connections(1).sqlx_logging(false);
            opts
        }
    };

    let db = Database::connect(opts).await?;
    Migrator::fresh(&db).await?;

    Ok(TestDb { db, _lock: lock })
}
