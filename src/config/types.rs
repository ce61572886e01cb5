use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            request_timeout_secs: default_timeout(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
    #[serde(default = "default_ttl")]
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            ttl_secs: default_ttl(),
        }
    }
}

/// Auditable pricing policy knobs. Control flow never hard-codes these.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PricingConfig {
    /// Customer-facing totals are snapped down to multiples of this step.
    #[serde(default = "default_rounding_step")]
    pub rounding_step: f64,
    /// Flat fee charged once when a pet travels, independent of pet count.
    #[serde(default = "default_pet_fee")]
    pub pet_fee: f64,
    /// Linen service fee per guest occupying a bed.
    #[serde(default = "default_linen_fee")]
    pub linen_fee_per_guest: f64,
    /// Share of the final total due as deposit, before grid rounding.
    #[serde(default = "default_deposit_percent")]
    pub deposit_percent: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            rounding_step: default_rounding_step(),
            pet_fee: default_pet_fee(),
            linen_fee_per_guest: default_linen_fee(),
            deposit_percent: default_deposit_percent(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:54321".into()
}

fn default_timeout() -> u64 {
    30
}

fn default_max_entries() -> usize {
    500
}

fn default_ttl() -> u64 {
    300
}

fn default_rounding_step() -> f64 {
    50.0
}

fn default_pet_fee() -> f64 {
    50.0
}

fn default_linen_fee() -> f64 {
    15.0
}

fn default_deposit_percent() -> f64 {
    0.30
}
