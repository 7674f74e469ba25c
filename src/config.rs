//! Process configuration parsed from environment variables.

pub const DEFAULT_API_VERSION: &str = "2024-10";
pub const DEFAULT_REGION_CODE: &str = "NSW";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ADMIN_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_ADMIN_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set or is blank.
    #[error("missing required env var {var}")]
    Missing { var: &'static str },

    /// An environment variable is set but could not be parsed.
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Shop the offline access token belongs to, e.g. `example.myshopify.com`.
    pub shop_domain: String,
    pub access_token: String,
    pub api_version: String,
    /// Delivery customization function that new customizations are bound to.
    pub function_id: String,
    /// Region code written into every function configuration metafield.
    pub region_code: String,
    pub timeouts: AdminTimeouts,
    pub port: u16,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `SHOPIFY_SHOP_DOMAIN`
    /// - `SHOPIFY_ADMIN_ACCESS_TOKEN`
    /// - `SHOPIFY_DELIVERY_CUSTOMIZATION_ID`
    ///
    /// Optional:
    /// - `SHOPIFY_API_VERSION`: default `2024-10`
    /// - `FUNCTION_CONFIG_REGION_CODE`: default `NSW`
    /// - `ADMIN_REQUEST_TIMEOUT_SECS`: default 30
    /// - `ADMIN_CONNECT_TIMEOUT_SECS`: default 10
    /// - `PORT`: default 3000
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a
    /// numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let shop_domain = normalize_shop_domain(&required("SHOPIFY_SHOP_DOMAIN")?);
        let access_token = required("SHOPIFY_ADMIN_ACCESS_TOKEN")?;
        let function_id = required("SHOPIFY_DELIVERY_CUSTOMIZATION_ID")?;

        let api_version = optional("SHOPIFY_API_VERSION").unwrap_or_else(|| DEFAULT_API_VERSION.to_string());
        let region_code = optional("FUNCTION_CONFIG_REGION_CODE").unwrap_or_else(|| DEFAULT_REGION_CODE.to_string());

        let timeouts = AdminTimeouts {
            request_secs: env_parse("ADMIN_REQUEST_TIMEOUT_SECS", DEFAULT_ADMIN_REQUEST_TIMEOUT_SECS)?,
            connect_secs: env_parse("ADMIN_CONNECT_TIMEOUT_SECS", DEFAULT_ADMIN_CONNECT_TIMEOUT_SECS)?,
        };
        let port = env_parse("PORT", DEFAULT_PORT)?;

        Ok(Self { shop_domain, access_token, api_version, function_id, region_code, timeouts, port })
    }

    /// Admin GraphQL endpoint for the configured shop and API version.
    #[must_use]
    pub fn graphql_url(&self) -> String {
        format!("https://{}/admin/api/{}/graphql.json", self.shop_domain, self.api_version)
    }
}

fn optional(key: &'static str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    optional(key).ok_or(ConfigError::Missing { var: key })
}

fn env_parse<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match optional(key) {
        None => Ok(default),
        Some(raw) => raw.parse::<T>().map_err(|_| ConfigError::Invalid { var: key, value: raw }),
    }
}

/// Strip scheme and trailing slashes so `https://shop.myshopify.com/` and
/// `shop.myshopify.com` name the same shop.
pub(crate) fn normalize_shop_domain(raw: &str) -> String {
    raw.trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/')
        .to_ascii_lowercase()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
