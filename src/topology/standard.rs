//! The standard settlement-suite topology.
//!
//! Declares the expected wiring of the deployed settlement system as data.
//! One declaration per system version; the verifier never mutates it.

use super::types::{Component, ConfigValue, OwnerRule, Reference, ScalarExpectation, Topology};

fn reference(field: &'static str, target: &'static str) -> Reference {
    Reference { field, target }
}

/// Build the expected reference graph for the deployed settlement suite.
///
/// Components are declared leaf-first so the report reads in dependency
/// order, though the checks themselves are order-independent.
pub fn standard_topology() -> Topology {
    Topology {
        components: vec![
            // Token is a reference target only; it predates this deployment
            // and is not verified itself.
            Component::target_only("Token"),
            Component {
                name: "RegistryStore",
                check_version: true,
                // The store is administered by the registry contract, not
                // by the deployer.
                owner: OwnerRule::Component("Registry"),
                references: vec![reference("token", "Token")],
                scalars: vec![],
            },
            Component {
                name: "Registry",
                check_version: true,
                owner: OwnerRule::Deployer,
                references: vec![
                    reference("token", "Token"),
                    reference("store", "RegistryStore"),
                ],
                scalars: vec![],
            },
            Component {
                name: "SettlementRegistry",
                check_version: true,
                owner: OwnerRule::Deployer,
                references: vec![],
                scalars: vec![],
            },
            Component {
                name: "Orderbook",
                check_version: true,
                owner: OwnerRule::Deployer,
                references: vec![
                    reference("registry", "Registry"),
                    reference("settlementRegistry", "SettlementRegistry"),
                ],
                scalars: vec![],
            },
            Component {
                name: "RewardVault",
                check_version: true,
                owner: OwnerRule::Deployer,
                references: vec![reference("registry", "Registry")],
                scalars: vec![],
            },
            Component {
                name: "Slasher",
                check_version: true,
                owner: OwnerRule::Deployer,
                references: vec![
                    reference("trustedRegistry", "Registry"),
                    reference("trustedOrderbook", "Orderbook"),
                ],
                scalars: vec![],
            },
            Component {
                name: "Tokens",
                check_version: true,
                owner: OwnerRule::Deployer,
                references: vec![],
                scalars: vec![],
            },
            Component {
                name: "BrokerVerifier",
                check_version: true,
                owner: OwnerRule::Deployer,
                references: vec![reference("balancesContract", "Balances")],
                scalars: vec![],
            },
            Component {
                name: "Balances",
                check_version: true,
                owner: OwnerRule::Deployer,
                references: vec![
                    reference("settlementContract", "Settlement"),
                    reference("brokerVerifierContract", "BrokerVerifier"),
                    reference("rewardVaultContract", "RewardVault"),
                ],
                scalars: vec![],
            },
            Component {
                name: "Settlement",
                check_version: true,
                owner: OwnerRule::Deployer,
                references: vec![
                    reference("orderbookContract", "Orderbook"),
                    reference("tokensContract", "Tokens"),
                    reference("balancesContract", "Balances"),
                ],
                scalars: vec![
                    ScalarExpectation {
                        field: "slasherAddress",
                        value: ConfigValue::SlasherAddress,
                    },
                    ScalarExpectation {
                        field: "submissionGasPriceLimit",
                        value: ConfigValue::SubmissionGasPriceLimit,
                    },
                ],
            },
            Component {
                name: "AtomicSwapper",
                check_version: true,
                owner: OwnerRule::None,
                references: vec![],
                scalars: vec![],
            },
        ],
    }
}
