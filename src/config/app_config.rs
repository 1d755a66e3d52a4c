use crate::site_scope::application::resolvers::privilege_classifier::{
    DEFAULT_GLOBAL_ROLE, DEFAULT_SUPER_PRINCIPAL,
};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub postgres_host: String,
    pub postgres_port: u16,
    pub postgres_user: String,
    pub postgres_password: String,
    pub postgres_database: String,
    pub super_principal: String,
    pub global_role: String,
    pub run_migrations: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8081".to_string())
                .parse()
                .unwrap_or(8081),
            postgres_host: std::env::var("POSTGRES_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            postgres_port: std::env::var("POSTGRES_PORT")
                .unwrap_or_else(|_| "5432".to_string())
                .parse()
                .unwrap_or(5432),
            postgres_user: std::env::var("POSTGRES_USER")
                .unwrap_or_else(|_| "postgres".to_string()),
            postgres_password: std::env::var("POSTGRES_PASSWORD")
                .unwrap_or_else(|_| "admin".to_string()),
            postgres_database: std::env::var("POSTGRES_DATABASE")
                .unwrap_or_else(|_| "site_scope".to_string()),
            super_principal: trimmed_or(
                std::env::var("SITE_SCOPE_SUPER_PRINCIPAL").ok(),
                DEFAULT_SUPER_PRINCIPAL,
            ),
            global_role: trimmed_or(
                std::env::var("SITE_SCOPE_GLOBAL_ROLE").ok(),
                DEFAULT_GLOBAL_ROLE,
            ),
            run_migrations: std::env::var("SITE_SCOPE_RUN_MIGRATIONS")
                .map(|value| !matches!(value.trim(), "0" | "false" | "no"))
                .unwrap_or(true),
        }
    }

    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.postgres_user,
            self.postgres_password,
            self.postgres_host,
            self.postgres_port,
            self.postgres_database
        )
    }
}

fn trimmed_or(value: Option<String>, default: &str) -> String {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}
