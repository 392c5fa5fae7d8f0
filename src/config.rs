use std::{collections::HashMap, num::ParseIntError, path::PathBuf};

const DEFAULT_LOG_FILE: &str = "logs/error.log";

/// Параметры подключения к PostgreSQL.
///
/// Отсутствующие переменные остаются `None` и никак не проверяются:
/// ошибка всплывёт только при подключении.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub name: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub host: Option<String>,
    pub port: Option<String>,
}

impl DatabaseConfig {
    /// Читает `<prefix>_DB`, `<prefix>_USER`, `<prefix>_PASSWORD`, `<prefix>_HOST`
    /// и `<prefix>_PORT`.
    pub fn from_vars(prefix: &str, vars: &HashMap<String, String>) -> Self {
        let get = |suffix: &str| vars.get(&format!("{prefix}_{suffix}")).cloned();

        Self {
            name: get("DB"),
            user: get("USER"),
            password: get("PASSWORD"),
            host: get("HOST"),
            port: get("PORT"),
        }
    }

    pub fn connection_string(&self) -> String {
        let part = |v: &Option<String>| v.as_deref().unwrap_or_default().to_owned();

        format!(
            "postgres://{}:{}@{}:{}/{}",
            part(&self.user),
            part(&self.password),
            part(&self.host),
            part(&self.port),
            part(&self.name),
        )
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub database: DatabaseConfig,
    /// набор `POSTGRES_TEST_*` для тестового окружения
    pub test_database: DatabaseConfig,
    pub database_url: Option<String>,
    pub app_host: Option<String>,
    pub app_port: Option<String>,
    /// единственный origin, которому разрешён CORS
    pub frontend_url: Option<String>,
    pub log_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
        let vars = vars.into_iter().collect::<HashMap<_, _>>();

        Self {
            database: DatabaseConfig::from_vars("POSTGRES", &vars),
            test_database: DatabaseConfig::from_vars("POSTGRES_TEST", &vars),
            database_url: vars.get("DATABASE_URL").cloned(),
            app_host: vars.get("APP_HOST").cloned(),
            app_port: vars.get("APP_PORT").cloned(),
            frontend_url: vars.get("FRONTEND_URL").cloned(),
            log_file: vars
                .get("LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
        }
    }

    /// `DATABASE_URL`, если задан, важнее строки, собранной из `POSTGRES_*`.
    pub fn connection_string(&self) -> String {
        self.database_url
            .clone()
            .unwrap_or_else(|| self.database.connection_string())
    }

    /// Строка подключения к тестовой базе, если задан `POSTGRES_TEST_DB`.
    pub fn test_connection_string(&self) -> Option<String> {
        self.test_database
            .name
            .as_ref()
            .map(|_| self.test_database.connection_string())
    }

    pub fn bind_addr(&self) -> Result<(String, u16), ParseIntError> {
        let host = self.app_host.clone().unwrap_or_default();
        let port = self.app_port.as_deref().unwrap_or_default().parse()?;

        Ok((host, port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn reads_production_and_test_sets() {
        let config = Config::from_vars(vars(&[
            ("POSTGRES_DB", "reviews"),
            ("POSTGRES_USER", "app"),
            ("POSTGRES_PASSWORD", "secret"),
            ("POSTGRES_HOST", "db"),
            ("POSTGRES_PORT", "5432"),
            ("POSTGRES_TEST_DB", "reviews_test"),
            ("POSTGRES_TEST_HOST", "localhost"),
            ("APP_HOST", "0.0.0.0"),
            ("APP_PORT", "8000"),
            ("FRONTEND_URL", "http://localhost:5173"),
        ]));

        assert_eq!(
            config.connection_string(),
            "postgres://app:secret@db:5432/reviews"
        );
        assert_eq!(config.test_database.name.as_deref(), Some("reviews_test"));
        assert_eq!(config.test_database.host.as_deref(), Some("localhost"));
        assert_eq!(config.test_database.user, None);
        assert_eq!(
            config.test_connection_string().as_deref(),
            Some("postgres://:@localhost:/reviews_test")
        );
        assert_eq!(config.frontend_url.as_deref(), Some("http://localhost:5173"));
        assert_eq!(config.bind_addr().unwrap(), ("0.0.0.0".to_owned(), 8000));
        assert_eq!(config.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn missing_values_interpolate_as_empty() {
        let config = Config::from_vars(vars(&[("POSTGRES_DB", "reviews")]));

        assert_eq!(config.connection_string(), "postgres://:@:/reviews");
        assert_eq!(config.frontend_url, None);
        assert_eq!(config.test_connection_string(), None);
        assert!(config.bind_addr().is_err());
    }

    #[test]
    fn database_url_overrides_parts() {
        let config = Config::from_vars(vars(&[
            ("POSTGRES_DB", "reviews"),
            ("DATABASE_URL", "sqlite://reviews.db?mode=rwc"),
            ("LOG_FILE", "/tmp/reviews.log"),
        ]));

        assert_eq!(config.connection_string(), "sqlite://reviews.db?mode=rwc");
        assert_eq!(config.log_file, PathBuf::from("/tmp/reviews.log"));
    }

    #[test]
    fn bind_addr_rejects_garbage_port() {
        let config = Config::from_vars(vars(&[("APP_HOST", "127.0.0.1"), ("APP_PORT", "http")]));

        assert!(config.bind_addr().is_err());
    }
}
