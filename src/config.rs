//! Per-network expected configuration.
//!
//! Everything the expected topology cannot derive on its own lives here:
//! the production owner override, the trusted slasher address, and the
//! submission gas price limit. Values are keyed by network identifier and
//! loaded from a YAML file supplied by the operator.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

/// Errors that can occur while loading or resolving network configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("No configuration found for network '{network}'")]
    NotFound { network: String },

    #[error("Network '{network}' is the production network but has no owner override")]
    MissingOwnerOverride { network: String },

    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Expected values for one network that are not derivable from the topology.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkConfig {
    /// Governance address that owns the contracts on the production network.
    /// Ignored everywhere else, where ownership stays with the deployer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    /// Externally trusted slasher address wired into the settlement contract.
    pub slasher: String,

    /// Expected submission gas price limit. Kept as a decimal string because
    /// on-chain values may exceed native integer range.
    pub submission_gas_price_limit: String,
}

/// Keyed lookup of per-network configuration.
///
/// The lookup is total over the supported networks: asking for an unknown
/// network fails with [`ConfigError::NotFound`] instead of handing back
/// defaulted values, so a typo in a network name can never masquerade as a
/// clean verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfigs {
    // BTreeMap keeps network listing deterministic in logs and serialization
    networks: BTreeMap<String, NetworkConfig>,
}

impl NetworkConfigs {
    /// Build from an explicit network -> config map
    pub fn new(networks: BTreeMap<String, NetworkConfig>) -> Self {
        Self { networks }
    }

    /// Load network configurations from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        info!("Loading network configuration from: {:?}", path);
        let file = File::open(path)?;
        let configs: NetworkConfigs = serde_yaml::from_reader(file)?;
        info!(
            "Loaded configuration for {} network(s): {}",
            configs.networks.len(),
            configs.network_names().join(", ")
        );
        Ok(configs)
    }

    /// Resolve the configuration for one network
    pub fn get(&self, network: &str) -> Result<&NetworkConfig, ConfigError> {
        self.networks
            .get(network)
            .ok_or_else(|| ConfigError::NotFound {
                network: network.to_string(),
            })
    }

    /// Names of all supported networks, in sorted order
    pub fn network_names(&self) -> Vec<String> {
        self.networks.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_yaml() -> &'static str {
        r#"
networks:
  mainnet:
    owner: "0xAA00000000000000000000000000000000000001"
    slasher: "0xAA00000000000000000000000000000000000002"
    submission_gas_price_limit: "100000000000"
  nightly:
    slasher: "0xBB00000000000000000000000000000000000002"
    submission_gas_price_limit: "1000000000"
"#
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(sample_yaml().as_bytes()).unwrap();

        let configs = NetworkConfigs::load(file.path()).unwrap();
        assert_eq!(configs.network_names(), vec!["mainnet", "nightly"]);

        let mainnet = configs.get("mainnet").unwrap();
        assert_eq!(
            mainnet.owner.as_deref(),
            Some("0xAA00000000000000000000000000000000000001")
        );
        assert_eq!(mainnet.submission_gas_price_limit, "100000000000");

        let nightly = configs.get("nightly").unwrap();
        assert!(nightly.owner.is_none());
    }

    #[test]
    fn test_unknown_network_is_not_found() {
        let configs: NetworkConfigs = serde_yaml::from_str(sample_yaml()).unwrap();

        let err = configs.get("ropsten").unwrap_err();
        match err {
            ConfigError::NotFound { network } => assert_eq!(network, "ropsten"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = NetworkConfigs::load(Path::new("/nonexistent/networks.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
