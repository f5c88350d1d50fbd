use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_host: String,
    pub database_port: String,
    pub database_name: String,
    pub database_user: String,
    pub database_password: String,
}

impl Config {
    /// Resolve the connection settings from the environment.
    ///
    /// Every variable has a default, so resolution never fails; a malformed
    /// value (bad port, wrong credentials) only surfaces once a connection
    /// is attempted.
    pub fn from_env() -> Self {
        Config {
            database_host: env::var("DATABASE_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            database_port: env::var("DATABASE_PORT").unwrap_or_else(|_| "5432".to_string()),
            database_name: env::var("DATABASE_NAME").unwrap_or_else(|_| "apen".to_string()),
            database_user: env::var("DATABASE_USERNAME").unwrap_or_else(|_| "postgres".to_string()),
            database_password: env::var("DATABASE_PASSWORD").unwrap_or_default(),
        }
    }

    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.database_user,
            self.database_password,
            self.database_host,
            self.database_port,
            self.database_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 5] = [
        "DATABASE_HOST",
        "DATABASE_PORT",
        "DATABASE_NAME",
        "DATABASE_USERNAME",
        "DATABASE_PASSWORD",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn defaults_apply_when_env_is_unset() {
        clear_env();

        let config = Config::from_env();

        assert_eq!(config.database_host, "127.0.0.1");
        assert_eq!(config.database_port, "5432");
        assert_eq!(config.database_name, "apen");
        assert_eq!(config.database_user, "postgres");
        assert_eq!(config.database_password, "");
    }

    #[test]
    #[serial]
    fn env_values_override_defaults() {
        clear_env();
        env::set_var("DATABASE_HOST", "db.internal");
        env::set_var("DATABASE_PORT", "6432");
        env::set_var("DATABASE_NAME", "feeds");
        env::set_var("DATABASE_USERNAME", "loader");
        env::set_var("DATABASE_PASSWORD", "hunter2");

        let config = Config::from_env();

        assert_eq!(config.database_host, "db.internal");
        assert_eq!(config.database_port, "6432");
        assert_eq!(config.database_name, "feeds");
        assert_eq!(config.database_user, "loader");
        assert_eq!(config.database_password, "hunter2");

        clear_env();
    }

    #[test]
    #[serial]
    fn database_url_renders_all_parts() {
        clear_env();

        let config = Config::from_env();

        assert_eq!(
            config.database_url(),
            "postgres://postgres:@127.0.0.1:5432/apen"
        );
    }

    #[test]
    #[serial]
    fn malformed_port_is_kept_verbatim() {
        clear_env();
        env::set_var("DATABASE_PORT", "not-a-port");

        let config = Config::from_env();

        // Surfaces as a connection error later, not here.
        assert_eq!(config.database_port, "not-a-port");

        clear_env();
    }
}
