use chrono_tz::Tz;
use routinely_utils::create_random_secret;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// SQLite connection string. In-memory repositories are used when unset,
    /// which means nothing survives a restart.
    pub database_url: Option<String>,
    /// Device timezone used for wall-clock reminder computations
    pub timezone: Tz,
    /// Webhook that fired notifications are POSTed to. When unset the
    /// notification is presented as a structured log line instead.
    pub webhook_url: Option<String>,
    /// Key sent in the `routinely-webhook-key` header on every delivery
    pub webhook_key: String,
}

impl Config {
    pub fn new() -> Self {
        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or(default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };

        let database_url = std::env::var("DATABASE_URL").ok();
        if database_url.is_none() {
            info!("Did not find DATABASE_URL environment variable. Falling back to in-memory repositories.");
        }

        let timezone = match std::env::var("ROUTINELY_TIMEZONE") {
            Ok(timezone) => match timezone.parse::<Tz>() {
                Ok(timezone) => timezone,
                Err(_) => {
                    warn!(
                        "The given ROUTINELY_TIMEZONE: {} is not a valid IANA timezone, falling back to UTC.",
                        timezone
                    );
                    Tz::UTC
                }
            },
            Err(_) => Tz::UTC,
        };

        let webhook_url = std::env::var("ROUTINELY_WEBHOOK_URL").ok();
        let webhook_key = match std::env::var("ROUTINELY_WEBHOOK_KEY") {
            Ok(key) => key,
            Err(_) => {
                let key = create_random_secret(16);
                info!("Did not find ROUTINELY_WEBHOOK_KEY environment variable. Going to create one.");
                key
            }
        };

        Self {
            port,
            database_url,
            timezone,
            webhook_url,
            webhook_key,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
