use dotenv::dotenv;
use error_stack::{Report, ResultExt};
use tracing::{debug, warn};

pub type ConfigResult<T> = Result<T, Report<ConfigError>>;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be a positive whole number")]
    InvalidNumber(&'static str),
    #[error("default page size {default} is larger than the maximum {max}")]
    DefaultExceedsMax { default: u64, max: u64 },
}

const RAK_DEFAULT_PAGE_SIZE: &str = "RAK_DEFAULT_PAGE_SIZE";
const RAK_MAX_PAGE_SIZE: &str = "RAK_MAX_PAGE_SIZE";

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RakConfig {
    /// Page size used when a request does not ask for one.
    pub default_page_size: u64,
    /// Largest page size a request may ask for.
    pub max_page_size: u64,
}

impl Default for RakConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

impl RakConfig {
    /// Reads the process environment, after loading a `.env` file if there is one.
    pub fn from_env() -> ConfigResult<Self> {
        if let Err(e) = dotenv() {
            warn!("failed to load .env file: {e}");
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_page_size = page_size(&lookup, RAK_DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE)?;
        let max_page_size = page_size(&lookup, RAK_MAX_PAGE_SIZE, MAX_PAGE_SIZE)?;

        if default_page_size > max_page_size {
            return Err(Report::new(ConfigError::DefaultExceedsMax {
                default: default_page_size,
                max: max_page_size,
            }));
        }

        Ok(Self {
            default_page_size,
            max_page_size,
        })
    }
}

fn page_size<F>(lookup: &F, key: &'static str, default: u64) -> ConfigResult<u64>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        debug!("{key} not specified, going with default {default}");
        return Ok(default);
    };

    let size = raw
        .trim()
        .parse::<u64>()
        .change_context(ConfigError::InvalidNumber(key))
        .attach(format!("received '{raw}'"))?;

    if size == 0 {
        return Err(Report::new(ConfigError::InvalidNumber(key)).attach("received 0"));
    }

    Ok(size)
}
