//! Application configuration management.

use serde::Deserialize;

/// Longest accepted broadcast lifetime (one year).
const MAX_NOTIFICATION_TTL_HOURS: i64 = 365 * 24;

/// Longest accepted Premium period (ten years).
const MAX_PREMIUM_PERIOD_DAYS: i64 = 3_650;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// JWT configuration.
    pub jwt: JwtSettings,
    /// Account configuration.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Plan limits and subscription settings.
    #[serde(default)]
    pub plans: PlanConfig,
    /// Broadcast notification settings.
    #[serde(default)]
    pub notifications: NotificationConfig,
    /// Store persistence settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// JWT configuration as read from config sources.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    /// Secret key for signing tokens.
    pub secret: String,
    /// Access token expiration in seconds.
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry_secs: u64,
}

fn default_access_token_expiry() -> u64 {
    28_800 // 8 hours
}

/// Account configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// Emails that are granted the Master role on registration.
    #[serde(default)]
    pub master_emails: Vec<String>,
}

impl AuthConfig {
    /// Returns true if the email belongs to a platform master account.
    #[must_use]
    pub fn is_master_email(&self, email: &str) -> bool {
        self.master_emails
            .iter()
            .any(|m| m.eq_ignore_ascii_case(email.trim()))
    }
}

/// Plan limits for the Free tier and subscription period for Premium.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PlanConfig {
    /// Maximum line items per budget on the Free plan.
    #[serde(default = "default_free_max_items")]
    pub free_max_items: usize,
    /// Maximum payment records per budget on the Free plan.
    #[serde(default = "default_free_max_payments")]
    pub free_max_payments: usize,
    /// Maximum expense records per budget on the Free plan.
    #[serde(default = "default_free_max_expenses")]
    pub free_max_expenses: usize,
    /// Maximum trade specialties per company on the Free plan.
    #[serde(default = "default_free_max_specialties")]
    pub free_max_specialties: usize,
    /// Length of a Premium subscription period in days.
    #[serde(default = "default_premium_period_days")]
    pub premium_period_days: i64,
}

fn default_free_max_items() -> usize {
    2
}

fn default_free_max_payments() -> usize {
    3
}

fn default_free_max_expenses() -> usize {
    3
}

fn default_free_max_specialties() -> usize {
    2
}

fn default_premium_period_days() -> i64 {
    30
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            free_max_items: default_free_max_items(),
            free_max_payments: default_free_max_payments(),
            free_max_expenses: default_free_max_expenses(),
            free_max_specialties: default_free_max_specialties(),
            premium_period_days: default_premium_period_days(),
        }
    }
}

/// Broadcast notification settings.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct NotificationConfig {
    /// How long a broadcast stays visible, in hours.
    #[serde(default = "default_notification_ttl_hours")]
    pub ttl_hours: i64,
}

fn default_notification_ttl_hours() -> i64 {
    72
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            ttl_hours: default_notification_ttl_hours(),
        }
    }
}

/// Store persistence settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    /// JSON snapshot file loaded at startup and written on shutdown.
    pub snapshot_path: Option<String>,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("ATRIO")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("auth.master_emails")
                    .try_parsing(true),
            )
            .build()?;

        let app: Self = config.try_deserialize()?;
        app.validate()?;
        Ok(app)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if !(1..=MAX_NOTIFICATION_TTL_HOURS).contains(&self.notifications.ttl_hours) {
            return Err(config::ConfigError::Message(format!(
                "notifications.ttl_hours must be between 1 and {MAX_NOTIFICATION_TTL_HOURS}, got {}",
                self.notifications.ttl_hours
            )));
        }
        if !(1..=MAX_PREMIUM_PERIOD_DAYS).contains(&self.plans.premium_period_days) {
            return Err(config::ConfigError::Message(format!(
                "plans.premium_period_days must be between 1 and {MAX_PREMIUM_PERIOD_DAYS}, got {}",
                self.plans.premium_period_days
            )));
        }
        Ok(())
    }
}
