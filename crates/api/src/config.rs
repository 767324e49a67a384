use munprep_gateway::{GatewayConfig, DEFAULT_MODEL, DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT_SECS};

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// `*` (the default) opens the API to any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `90`; must exceed the
    /// gateway timeout so upstream slowness surfaces as a gateway error,
    /// not a blanket request timeout).
    pub request_timeout_secs: u64,
    /// Completion gateway settings.
    pub gateway: GatewayConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                           |
    /// |------------------------|-----------------------------------|
    /// | `HOST`                 | `0.0.0.0`                         |
    /// | `PORT`                 | `3000`                            |
    /// | `CORS_ORIGINS`         | `*`                               |
    /// | `REQUEST_TIMEOUT_SECS` | `90`                              |
    /// | `AI_GATEWAY_URL`       | `https://ai.gateway.lovable.dev`  |
    /// | `AI_GATEWAY_API_KEY`   | (empty)                           |
    /// | `AI_MODEL`             | `google/gemini-3-flash-preview`   |
    /// | `AI_TEMPERATURE`       | `0.7`                             |
    /// | `AI_TIMEOUT_SECS`      | `60`                              |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "90".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let gateway = GatewayConfig {
            base_url: std::env::var("AI_GATEWAY_URL")
                .unwrap_or_else(|_| "https://ai.gateway.lovable.dev".into()),
            api_key: std::env::var("AI_GATEWAY_API_KEY").unwrap_or_default(),
            model: std::env::var("AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into()),
            temperature: std::env::var("AI_TEMPERATURE")
                .unwrap_or_else(|_| DEFAULT_TEMPERATURE.to_string())
                .parse()
                .expect("AI_TEMPERATURE must be a valid f64"),
            timeout_secs: std::env::var("AI_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
                .parse()
                .expect("AI_TIMEOUT_SECS must be a valid u64"),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            gateway,
        }
    }
}
