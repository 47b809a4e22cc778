use crate::{
    error::{config::ConfigError, AppError},
    service::identifier::{CollisionPolicy, ScanOptions, DEFAULT_SCAN_BATCH_SIZE},
};

const DATABASE_URL: &str = "DATABASE_URL";
const LEGACY_SCAN_BATCH_SIZE: &str = "LEGACY_SCAN_BATCH_SIZE";
const LEGACY_COLLISION_POLICY: &str = "LEGACY_COLLISION_POLICY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,

    /// Identifiers read per batch during a legacy identifier scan.
    pub scan_batch_size: u64,
    pub collision_policy: CollisionPolicy,
}

impl Config {
    /// Loads configuration from the environment, reading a `.env` file first if present.
    pub fn from_env() -> Result<Self, AppError> {
        let _ = dotenvy::dotenv();

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, which returns the value of a variable.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - `DATABASE_URL` is not set
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - An optional variable has an unusable value
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = lookup(DATABASE_URL)
            .ok_or_else(|| ConfigError::MissingEnvVar(DATABASE_URL.to_string()))?;

        let scan_batch_size = match lookup(LEGACY_SCAN_BATCH_SIZE) {
            None => DEFAULT_SCAN_BATCH_SIZE,
            Some(value) => match value.trim().parse::<u64>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(ConfigError::InvalidEnvVar {
                        name: LEGACY_SCAN_BATCH_SIZE.to_string(),
                        value,
                        reason: "expected a positive integer".to_string(),
                    }
                    .into())
                }
            },
        };

        let collision_policy = match lookup(LEGACY_COLLISION_POLICY) {
            None => CollisionPolicy::default(),
            Some(value) => value
                .parse::<CollisionPolicy>()
                .map_err(|reason| ConfigError::InvalidEnvVar {
                    name: LEGACY_COLLISION_POLICY.to_string(),
                    value: value.clone(),
                    reason,
                })?,
        };

        Ok(Self {
            database_url,
            scan_batch_size,
            collision_policy,
        })
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            batch_size: self.scan_batch_size,
            collision: self.collision_policy,
        }
    }
}
