use tracing::warn;

const DEFAULT_HTTP_SERVER: &str = "http://localhost:8090";

/// Endpoints the console talks to.
///
/// Values come from the process environment and, for browser builds that have
/// no environment at runtime, from the same variables captured at build time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Root of the backend; report endpoints hang directly off it.
    pub http_server: String,
    /// `http_server` + `/api`; CRUD collections and login live here.
    pub api_base_url: String,
    /// Domain of the secondary customer-token API.
    pub accounts_url: String,
    /// Bearer token for the secondary API.
    pub api_token: String,
}

impl Config {
    pub fn new(http_server: impl Into<String>) -> Self {
        let http_server = http_server.into().trim_end_matches('/').to_string();
        let api_base_url = format!("{}{}", http_server, "/api");
        Self {
            accounts_url: http_server.clone(),
            http_server,
            api_base_url,
            api_token: String::new(),
        }
    }

    pub fn with_accounts(mut self, accounts_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        self.accounts_url = accounts_url.into().trim_end_matches('/').to_string();
        self.api_token = api_token.into();
        self
    }

    pub fn from_env() -> Self {
        let http_server = read_var(
            "TRANSPORTADORA_HTTP_SERVER",
            option_env!("TRANSPORTADORA_HTTP_SERVER"),
        )
        .unwrap_or_else(|| DEFAULT_HTTP_SERVER.to_string());

        let config = Self::new(http_server);
        let accounts_url = read_var(
            "TRANSPORTADORA_ACCOUNTS_URL",
            option_env!("TRANSPORTADORA_ACCOUNTS_URL"),
        )
        .unwrap_or_else(|| config.http_server.clone());
        let api_token = read_var(
            "TRANSPORTADORA_API_TOKEN",
            option_env!("TRANSPORTADORA_API_TOKEN"),
        )
        .unwrap_or_default();

        if api_token.is_empty() {
            warn!("TRANSPORTADORA_API_TOKEN not set, account management requests will be rejected");
        }

        config.with_accounts(accounts_url, api_token)
    }
}

/// Settings for the reference backend.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub admin_email: String,
    pub admin_password: String,
    pub api_token: String,
    pub allowed_origins: Vec<String>,
    /// Customers per page on the account listing.
    pub page_size: usize,
}

impl ServerConfig {
    const DEFAULT_HOST: &str = "0.0.0.0";
    const DEFAULT_PORT: u16 = 8090;
    const DEFAULT_ADMIN_EMAIL: &str = "admin@transportadora.com";
    const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
    const DEFAULT_API_TOKEN: &str = "dev-token";
    const DEFAULT_PAGE_SIZE: usize = 10;

    pub fn new(
        admin_email: impl Into<String>,
        admin_password: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        Self {
            host: Self::DEFAULT_HOST.to_string(),
            port: Self::DEFAULT_PORT,
            admin_email: admin_email.into(),
            admin_password: admin_password.into(),
            api_token: api_token.into(),
            allowed_origins: vec!["*".to_string()],
            page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }

    pub fn from_env() -> Self {
        let host =
            std::env::var("TRANSPORTADORA_HOST").unwrap_or_else(|_| Self::DEFAULT_HOST.to_string());
        let port = std::env::var("TRANSPORTADORA_PORT")
            .unwrap_or_else(|_| Self::DEFAULT_PORT.to_string())
            .parse::<u16>()
            .unwrap_or(Self::DEFAULT_PORT);
        let page_size = std::env::var("TRANSPORTADORA_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|size| *size > 0)
            .unwrap_or(Self::DEFAULT_PAGE_SIZE);

        Self {
            host,
            port,
            admin_email: std::env::var("TRANSPORTADORA_ADMIN_EMAIL")
                .unwrap_or_else(|_| Self::DEFAULT_ADMIN_EMAIL.to_string()),
            admin_password: std::env::var("TRANSPORTADORA_ADMIN_PASSWORD").unwrap_or_else(|_| {
                warn!("TRANSPORTADORA_ADMIN_PASSWORD not set, using default password 'admin123'");
                Self::DEFAULT_ADMIN_PASSWORD.to_string()
            }),
            api_token: std::env::var("TRANSPORTADORA_API_TOKEN").unwrap_or_else(|_| {
                warn!("TRANSPORTADORA_API_TOKEN not set, using default token 'dev-token'");
                Self::DEFAULT_API_TOKEN.to_string()
            }),
            allowed_origins: std::env::var("TRANSPORTADORA_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            page_size,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

fn read_var(key: &str, build_time: Option<&'static str>) -> Option<String> {
    std::env::var(key)
        .ok()
        .or_else(|| build_time.map(str::to_string))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
