//! The verification engine.
//!
//! Walks the declared topology in declaration order, reads each
//! component's live state through a [`ComponentDirectory`], and records
//! one Pass/Fail outcome per expected relationship. Mismatches never stop
//! the walk; an unreadable live state aborts the whole run.

use log::{info, warn};
use num_bigint::BigInt;

use crate::config::{ConfigError, NetworkConfig, NetworkConfigs};
use crate::directory::{ComponentDirectory, FetchError};
use crate::report::{CheckOutcome, VerificationReport};
use crate::topology::{Component, ConfigValue, OwnerRule, Topology};

/// Network whose ownership is transferred to a governance address after
/// deployment. Every other network keeps the deploying account as owner.
pub const PRODUCTION_NETWORK: &str = "mainnet";

/// Errors that abort a verification run before a report is produced
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Invalid expected topology: {0}")]
    Topology(String),

    #[error("No deployer accounts supplied for network '{network}'")]
    NoAccounts { network: String },

    #[error("Configured submission gas price limit '{value}' is not an integer")]
    InvalidLimit { value: String },
}

/// Compare two hexadecimal addresses, ignoring letter case
fn addresses_equal(left: &str, right: &str) -> bool {
    left.eq_ignore_ascii_case(right)
}

/// Resolve the address every `OwnerRule::Deployer` check compares against
fn effective_owner<'a>(
    network: &str,
    accounts: &'a [String],
    config: &'a NetworkConfig,
) -> Result<&'a str, VerifyError> {
    if network == PRODUCTION_NETWORK {
        config
            .owner
            .as_deref()
            .ok_or_else(|| ConfigError::MissingOwnerOverride {
                network: network.to_string(),
            })
            .map_err(VerifyError::from)
    } else {
        accounts
            .first()
            .map(String::as_str)
            .ok_or_else(|| VerifyError::NoAccounts {
                network: network.to_string(),
            })
    }
}

/// Verify one deployed system against its expected topology.
///
/// Resolves the network configuration first (failing fast on an unknown
/// network), then walks the components in declaration order. Every check
/// is read-once-compare-once; the returned report is deterministic for
/// unchanged inputs. Any failed live read aborts the run with no partial
/// report.
pub fn verify<D: ComponentDirectory>(
    network: &str,
    accounts: &[String],
    directory: &D,
    topology: &Topology,
    configs: &NetworkConfigs,
) -> Result<VerificationReport, VerifyError> {
    // No meaningful check can run without the network's expected values
    let config = configs.get(network)?;
    topology.validate().map_err(VerifyError::Topology)?;

    let owner = effective_owner(network, accounts, config)?;
    info!(
        "Verifying deployment on network '{}' (effective owner {})",
        network, owner
    );

    let mut report = VerificationReport::default();
    for component in &topology.components {
        if !component.has_checks() {
            continue;
        }
        info!("Verifying {}...", component.name);
        verify_component(component, network, owner, directory, config, &mut report)?;
    }

    let failures = report.failures().len();
    if failures == 0 {
        info!("All {} check(s) passed", report.outcomes.len());
    } else {
        warn!("{} of {} check(s) failed", failures, report.outcomes.len());
    }
    Ok(report)
}

fn verify_component<D: ComponentDirectory>(
    component: &Component,
    network: &str,
    owner: &str,
    directory: &D,
    config: &NetworkConfig,
    report: &mut VerificationReport,
) -> Result<(), VerifyError> {
    let name = component.name;

    if component.check_version {
        let version = directory.version(name)?;
        report.record(if version.contains(network) {
            CheckOutcome::pass(name, "VERSION")
        } else {
            mismatch(name, "VERSION", network, &version)
        });
    }

    match &component.owner {
        OwnerRule::Deployer => {
            let actual = directory.owner(name)?;
            report.record(compare_address(name, "owner", owner, &actual));
        }
        OwnerRule::Component(target) => {
            let expected = directory.address(target)?;
            let actual = directory.owner(name)?;
            report.record(compare_address(name, "owner", &expected, &actual));
        }
        OwnerRule::None => {}
    }

    for reference in &component.references {
        let expected = directory.address(reference.target)?;
        let actual = directory.field(name, reference.field)?;
        report.record(compare_address(name, reference.field, &expected, &actual));
    }

    for scalar in &component.scalars {
        let actual = directory.field(name, scalar.field)?;
        let outcome = match scalar.value {
            ConfigValue::SlasherAddress => {
                compare_address(name, scalar.field, &config.slasher, &actual)
            }
            ConfigValue::SubmissionGasPriceLimit => compare_limit(
                name,
                scalar.field,
                &config.submission_gas_price_limit,
                &actual,
            )?,
        };
        report.record(outcome);
    }

    Ok(())
}

fn compare_address(component: &str, field: &str, expected: &str, actual: &str) -> CheckOutcome {
    if addresses_equal(expected, actual) {
        CheckOutcome::pass(component, field)
    } else {
        mismatch(component, field, expected, actual)
    }
}

/// Numeric limits are read as text and compared as arbitrary-precision
/// integers; on-chain values may exceed native integer range.
fn compare_limit(
    component: &str,
    field: &str,
    expected: &str,
    actual: &str,
) -> Result<CheckOutcome, VerifyError> {
    let expected_value: BigInt =
        expected
            .trim()
            .parse()
            .map_err(|_| VerifyError::InvalidLimit {
                value: expected.to_string(),
            })?;

    // A live value that is not an integer is a mismatch, not a fetch
    // failure: the read itself completed.
    let outcome = match actual.trim().parse::<BigInt>() {
        Ok(actual_value) if actual_value == expected_value => {
            CheckOutcome::pass(component, field)
        }
        _ => mismatch(component, field, expected, actual),
    };
    Ok(outcome)
}

fn mismatch(component: &str, field: &str, expected: &str, actual: &str) -> CheckOutcome {
    warn!(
        "Mismatch in {}.{}: expected {}, got {}",
        component, field, expected, actual
    );
    CheckOutcome::fail(component, field, expected, actual)
}
