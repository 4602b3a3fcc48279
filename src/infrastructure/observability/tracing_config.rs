use crate::presentation::config::Environment;

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: Environment,
    pub json_format: bool,
}

impl TracingConfig {
    /// JSON output is the default in production; `LOG_FORMAT` overrides it.
    pub fn for_environment(environment: Environment) -> Self {
        let json_format = std::env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(environment == Environment::Prod);

        Self {
            environment,
            json_format,
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::for_environment(Environment::Local)
    }
}
