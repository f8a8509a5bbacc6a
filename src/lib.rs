//! # Chaincheck - Post-deployment topology verifier for on-chain component suites
//!
//! This library verifies that a freshly deployed system of interdependent
//! on-chain components is wired the way it is supposed to be: every
//! cross-reference resolves to the right peer address, every contract is
//! owned by the right account, and every version tag matches the network
//! it was deployed to.
//!
//! ## Overview
//!
//! The expected wiring is declared once as data (components, reference
//! edges, scalar expectations) and interpreted by a single verification
//! engine. Checks are read-only: chaincheck never deploys, never mutates
//! on-chain state, never retries, and never rolls back. Mismatches are
//! collected into one report so an operator sees every misconfiguration
//! in a single pass instead of fixing them one at a time.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - `config`: Per-network expected values (owner override, trusted
//!   addresses, numeric limits), loaded from YAML
//! - `topology`: Declarative model of the expected reference graph, plus
//!   the standard settlement-suite declaration
//! - `directory`: Read access to live component state, including the
//!   JSON-snapshot-backed directory used by the CLI
//! - `report`: Ordered Pass/Fail outcomes with per-component, per-field
//!   identity
//! - `verifier`: The engine walking the topology against live state
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chaincheck::{config::NetworkConfigs, directory::SnapshotDirectory};
//! use chaincheck::{topology, verifier};
//! use std::path::Path;
//!
//! let configs = NetworkConfigs::load(Path::new("networks.yaml"))?;
//! let directory = SnapshotDirectory::load(Path::new("deployment.json"))?;
//! let accounts = vec!["0xDeployerAddress".to_string()];
//!
//! let report = verifier::verify(
//!     "nightly",
//!     &accounts,
//!     &directory,
//!     &topology::standard_topology(),
//!     &configs,
//! )?;
//! println!("{}", report.render_text());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error Handling
//!
//! A run distinguishes "could not run checks" from "checks ran and found
//! a mismatch". Unknown networks and failed live reads are fatal and
//! produce no report; mismatches are recorded and never halt the walk.

pub mod config;
pub mod directory;
pub mod report;
pub mod topology;
pub mod verifier;
