use std::str::FromStr;

use hr_core::code_generator::CodeGenerator;
use hr_db::DEFAULT_MAX_CONNECTIONS;
use hr_domain::services::DEFAULT_ACTOR;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on pooled database connections.
    pub db_max_connections: u32,
    /// Name written into `created_by` / `modified_by` audit columns.
    pub audit_actor: String,
    pub project_codes: CodeGenerator,
    pub task_codes: CodeGenerator,
    /// Emit logs as JSON lines instead of the human-readable format.
    pub json_logs: bool,
}

/// Read and parse `key`, falling back to `default` when unset.
///
/// Panics on a present but unparseable value so misconfiguration fails fast.
fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key} has an invalid value '{raw}': {e}")),
        Err(_) => default,
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DB_MAX_CONNECTIONS`   | `20`                       |
    /// | `AUDIT_ACTOR`          | `system`                   |
    /// | `PROJECT_CODE_PREFIX`  | `PRJ`                      |
    /// | `PROJECT_CODE_WIDTH`   | `4`                        |
    /// | `TASK_CODE_PREFIX`     | `TSK`                      |
    /// | `TASK_CODE_WIDTH`      | `5`                        |
    /// | `LOG_FORMAT`           | `pretty` (`json` to switch)|
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port: u16 = env_or("PORT", 3000);

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", 30);
        let db_max_connections: u32 = env_or("DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS);
        let audit_actor = std::env::var("AUDIT_ACTOR").unwrap_or_else(|_| DEFAULT_ACTOR.into());

        let project_codes = CodeGenerator::new(
            std::env::var("PROJECT_CODE_PREFIX")
                .unwrap_or_else(|_| CodeGenerator::PROJECT_PREFIX.into()),
            CodeGenerator::DEFAULT_SEPARATOR,
            env_or("PROJECT_CODE_WIDTH", CodeGenerator::PROJECT_WIDTH),
        );
        let task_codes = CodeGenerator::new(
            std::env::var("TASK_CODE_PREFIX").unwrap_or_else(|_| CodeGenerator::TASK_PREFIX.into()),
            CodeGenerator::DEFAULT_SEPARATOR,
            env_or("TASK_CODE_WIDTH", CodeGenerator::TASK_WIDTH),
        );

        let json_logs = std::env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            db_max_connections,
            audit_actor,
            project_codes,
            task_codes,
            json_logs,
        }
    }
}
