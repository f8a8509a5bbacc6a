//! Integration tests driving the verifier over the full standard
//! settlement-suite topology, with configuration and snapshot files on
//! disk the way the CLI supplies them.

use std::collections::BTreeMap;
use std::io::Write;

use tempfile::NamedTempFile;

use chaincheck::config::NetworkConfigs;
use chaincheck::directory::{ComponentState, SnapshotDirectory};
use chaincheck::report::CheckStatus;
use chaincheck::topology::standard_topology;
use chaincheck::verifier::{verify, VerifyError};

const DEPLOYER: &str = "0xDE00000000000000000000000000000000000001";
const SLASHER: &str = "0x51AbC00000000000000000000000000000000001";
const LIMIT: &str = "100000000000";

// Slasher address deliberately lower-cased here; address checks are
// case-insensitive and the snapshot carries the mixed-case form.
const NETWORKS_YAML: &str = r#"
networks:
  nightly:
    slasher: "0x51abc00000000000000000000000000000000001"
    submission_gas_price_limit: "100000000000"
  falcon:
    slasher: "0x51abc00000000000000000000000000000000001"
    submission_gas_price_limit: "100000000000"
"#;

/// Deterministic per-component fake address
fn addr(index: u32) -> String {
    format!("0x{index:040x}")
}

fn component(
    index: u32,
    network: &str,
    name: &str,
    owner: &str,
    fields: &[(&str, String)],
) -> (String, ComponentState) {
    let state = ComponentState {
        address: addr(index),
        version: Some(format!("{}-v1-{network}", name.to_lowercase())),
        owner: Some(owner.to_string()),
        fields: fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect(),
    };
    (name.to_string(), state)
}

/// A snapshot wired exactly the way the standard topology expects
fn consistent_snapshot(network: &str) -> SnapshotDirectory {
    let token = addr(1);
    let store = addr(2);
    let registry = addr(3);
    let settlement_registry = addr(4);
    let orderbook = addr(5);
    let reward_vault = addr(6);
    let tokens = addr(8);
    let broker_verifier = addr(9);
    let balances = addr(10);
    let settlement = addr(11);

    let mut components = BTreeMap::new();
    components.insert(
        "Token".to_string(),
        ComponentState {
            address: token.clone(),
            version: None,
            owner: None,
            fields: BTreeMap::new(),
        },
    );
    for (name, state) in [
        component(2, network, "RegistryStore", &registry, &[("token", token.clone())]),
        component(
            3,
            network,
            "Registry",
            DEPLOYER,
            &[("token", token.clone()), ("store", store.clone())],
        ),
        component(4, network, "SettlementRegistry", DEPLOYER, &[]),
        component(
            5,
            network,
            "Orderbook",
            DEPLOYER,
            &[
                ("registry", registry.clone()),
                ("settlementRegistry", settlement_registry.clone()),
            ],
        ),
        component(6, network, "RewardVault", DEPLOYER, &[("registry", registry.clone())]),
        component(
            7,
            network,
            "Slasher",
            DEPLOYER,
            &[
                ("trustedRegistry", registry.clone()),
                ("trustedOrderbook", orderbook.clone()),
            ],
        ),
        component(8, network, "Tokens", DEPLOYER, &[]),
        component(
            9,
            network,
            "BrokerVerifier",
            DEPLOYER,
            &[("balancesContract", balances.clone())],
        ),
        component(
            10,
            network,
            "Balances",
            DEPLOYER,
            &[
                ("settlementContract", settlement.clone()),
                ("brokerVerifierContract", broker_verifier.clone()),
                ("rewardVaultContract", reward_vault.clone()),
            ],
        ),
        component(
            11,
            network,
            "Settlement",
            DEPLOYER,
            &[
                ("orderbookContract", orderbook.clone()),
                ("tokensContract", tokens.clone()),
                ("balancesContract", balances.clone()),
                ("slasherAddress", SLASHER.to_string()),
                ("submissionGasPriceLimit", LIMIT.to_string()),
            ],
        ),
        component(12, network, "AtomicSwapper", DEPLOYER, &[]),
    ] {
        components.insert(name, state);
    }

    SnapshotDirectory::new(components)
}

fn configs() -> NetworkConfigs {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(NETWORKS_YAML.as_bytes()).unwrap();
    NetworkConfigs::load(file.path()).unwrap()
}

fn accounts() -> Vec<String> {
    vec![DEPLOYER.to_string()]
}

#[test]
fn test_consistent_suite_verifies_clean() {
    let report = verify(
        "nightly",
        &accounts(),
        &consistent_snapshot("nightly"),
        &standard_topology(),
        &configs(),
    )
    .unwrap();

    assert!(report.is_clean(), "failures: {:?}", report.failures());
    // 11 verified components: VERSION each, owner for all but AtomicSwapper,
    // 15 reference edges, 2 settlement scalars
    assert_eq!(report.outcomes.len(), 11 + 10 + 15 + 2);
}

#[test]
fn test_target_only_component_emits_no_outcomes() {
    let report = verify(
        "nightly",
        &accounts(),
        &consistent_snapshot("nightly"),
        &standard_topology(),
        &configs(),
    )
    .unwrap();

    assert!(report.outcomes.iter().all(|o| o.component != "Token"));
    assert!(!report.render_text().contains("Verifying Token..."));
}

#[test]
fn test_miswired_reference_is_reported_not_fatal() {
    // Point the orderbook's registry reference at the token contract
    let snapshot = {
        let json = serde_json::to_string(&consistent_snapshot("nightly")).unwrap();
        let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
        value["components"]["Orderbook"]["fields"]["registry"] =
            serde_json::Value::String(addr(1));
        serde_json::from_value::<SnapshotDirectory>(value).unwrap()
    };

    let report = verify(
        "nightly",
        &accounts(),
        &snapshot,
        &standard_topology(),
        &configs(),
    )
    .unwrap();

    let failures = report.failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].component, "Orderbook");
    assert_eq!(failures[0].field, "registry");
    match &failures[0].status {
        CheckStatus::Fail { expected, actual } => {
            assert_eq!(expected, &addr(3));
            assert_eq!(actual, &addr(1));
        }
        CheckStatus::Pass => unreachable!(),
    }

    // Checks after the bad edge still ran
    assert!(report
        .outcomes
        .iter()
        .any(|o| o.component == "Settlement" && o.is_pass()));
}

#[test]
fn test_wrong_network_tag_fails_every_version_check() {
    let report = verify(
        "falcon",
        &accounts(),
        &consistent_snapshot("nightly"),
        &standard_topology(),
        &configs(),
    )
    .unwrap();

    let version_failures: Vec<_> = report
        .failures()
        .into_iter()
        .filter(|o| o.field == "VERSION")
        .collect();
    assert_eq!(version_failures.len(), 11);
}

#[test]
fn test_missing_component_aborts_with_no_report() {
    let snapshot = {
        let json = serde_json::to_string(&consistent_snapshot("nightly")).unwrap();
        let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
        value["components"]
            .as_object_mut()
            .unwrap()
            .remove("Balances");
        serde_json::from_value::<SnapshotDirectory>(value).unwrap()
    };

    let err = verify(
        "nightly",
        &accounts(),
        &snapshot,
        &standard_topology(),
        &configs(),
    )
    .unwrap_err();

    assert!(matches!(err, VerifyError::Fetch(_)));
}

#[test]
fn test_unknown_network_fails_before_snapshot_reads() {
    // An empty directory is fine: config resolution must fail first
    let empty = SnapshotDirectory::new(BTreeMap::new());
    let err = verify(
        "ropsten",
        &accounts(),
        &empty,
        &standard_topology(),
        &configs(),
    )
    .unwrap_err();

    assert!(matches!(err, VerifyError::Config(_)));
}
