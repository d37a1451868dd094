use chrono_tz::Tz;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub order_store: OrderStoreConfig,
    #[serde(default)]
    pub sales_statistics: SalesStatisticsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// IANA zone of the bakery; "today" for delivery checks is taken here
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_port() -> u16 {
    3000
}

fn default_timezone() -> String {
    "Pacific/Auckland".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            timezone: default_timezone(),
        }
    }
}

impl ServerConfig {
    pub fn tz(&self) -> anyhow::Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| anyhow::anyhow!("invalid server.timezone {:?}: {}", self.timezone, e))
    }
}

/// Remote bakery REST API that owns orders
#[derive(Debug, Deserialize, Clone)]
pub struct OrderStoreConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Deserialize, Clone)]
pub struct SalesStatisticsConfig {
    /// Image used for products whose order snapshot has none
    pub default_image: String,
}

impl Default for SalesStatisticsConfig {
    fn default() -> Self {
        Self {
            default_image: contracts::dashboards::d100_sales_statistics::DEFAULT_CAKE_IMAGE
                .to_string(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
timezone = "Pacific/Auckland"

[order_store]
base_url = "https://cakeshop-ewfffsajfrasd6db.newzealandnorth-01.azurewebsites.net"
timeout_secs = 30

[sales_statistics]
default_image = "/default-cake.jpg"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config: Config = toml::from_str(contents)?;
    let trimmed = config.order_store.base_url.trim_end_matches('/').to_string();
    config.order_store.base_url = trimmed;
    if config.order_store.base_url.is_empty() {
        anyhow::bail!("order_store.base_url must not be empty");
    }
    config.server.tz()?;
    Ok(config)
}
