use clap::{ArgAction, Parser};
use flavorly_core::{
    domain::common::{DatabaseConfig, FlavorlyConfig, LLMConfig},
    infrastructure::llm::gemini_client::DEFAULT_GEMINI_BASE_URL,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "flavorly-api", version, about = "Flavorly café menu API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub llm: LLMArgs,

    #[command(flatten)]
    pub seed: SeedArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`
    #[arg(long = "root-path", env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173,http://localhost:8000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct DatabaseArgs {
    #[arg(id = "database_host", long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(id = "database_port", long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "postgres",
        hide_env_values = true
    )]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "flavorly")]
    pub name: String,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LLMArgs {
    #[arg(
        long = "gemini-api-key",
        env = "GEMINI_API_KEY",
        default_value = "",
        hide_env_values = true
    )]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub gemini_model: String,

    #[arg(
        long = "gemini-base-url",
        env = "GEMINI_BASE_URL",
        default_value = DEFAULT_GEMINI_BASE_URL
    )]
    pub gemini_base_url: String,

    /// Upper bound for a single language model call
    #[arg(long = "llm-timeout-secs", env = "LLM_TIMEOUT_SECS", default_value_t = 20)]
    pub timeout_secs: u64,
}

#[derive(clap::Args, Debug, Clone)]
pub struct SeedArgs {
    #[arg(
        long = "seed-on-startup",
        env = "SEED_ON_STARTUP",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub on_startup: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LogArgs {
    /// Used when RUST_LOG is not set
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false, action = ArgAction::Set)]
    pub json: bool,
}

impl From<Args> for FlavorlyConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
            },
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
                timeout_secs: args.llm.timeout_secs,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_flags_convert_into_core_config() {
        let args = Args::try_parse_from([
            "flavorly-api",
            "--database-host",
            "db",
            "--database-name",
            "menu",
            "--gemini-api-key",
            "secret",
            "--llm-timeout-secs",
            "5",
            "--seed-on-startup",
            "false",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ])
        .unwrap();

        assert!(!args.seed.on_startup);
        assert_eq!(args.server.allowed_origins.len(), 2);

        let config = FlavorlyConfig::from(args);
        assert_eq!(config.database.host, "db");
        assert!(config.database.url().ends_with("@db:5432/menu"));
        assert_eq!(config.llm.gemini_api_key, "secret");
        assert_eq!(config.llm.timeout(), Duration::from_secs(5));
    }
}
