use common::PermitDomain;
use eyre::{eyre, Result, WrapErr};
use std::env;
use std::fmt;
use std::path::Path;

/// Attestor configuration
#[derive(Clone)]
pub struct AttestorConfig {
    /// Hex-encoded secp256k1 key; its address must match the bridge's attestor
    pub private_key: String,
    /// Bridge contract address, bound into every digest as the verifying contract
    pub bridge_address: String,
    /// Chain id the bridge was instantiated with
    pub chain_id: u64,
}

/// Custom Debug that redacts private_key to prevent accidental log leakage.
impl fmt::Debug for AttestorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttestorConfig")
            .field("private_key", &"<redacted>")
            .field("bridge_address", &self.bridge_address)
            .field("chain_id", &self.chain_id)
            .finish()
    }
}

impl AttestorConfig {
    /// Load configuration from environment variables
    /// Loads .env file if present, then reads from environment
    pub fn load() -> Result<Self> {
        Self::load_from_file(".env").or_else(|_| Self::load_from_env())
    }

    /// Load from a specific .env file path
    pub fn load_from_file(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            dotenvy::from_filename(path)
                .wrap_err_with(|| format!("Failed to load .env file from {}", path))?;
        }
        Self::load_from_env()
    }

    pub fn load_from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `load_from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| eyre!("{} environment variable is required", key))
        };

        let config = Self {
            private_key: required("ATTESTOR_PRIVATE_KEY")?,
            bridge_address: required("BRIDGE_ADDRESS")?.trim().to_string(),
            chain_id: required("BRIDGE_CHAIN_ID")?
                .trim()
                .parse()
                .wrap_err("BRIDGE_CHAIN_ID must be a valid u64")?,
        };
        Ok(config)
    }

    pub fn domain(&self) -> PermitDomain {
        PermitDomain::new(self.chain_id, self.bridge_address.clone())
    }
}
