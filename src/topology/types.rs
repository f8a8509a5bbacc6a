//! Expected-topology type definitions.
//!
//! The expected wiring between deployed components is declared as plain
//! data: components, reference edges, and scalar expectations. The
//! verifier interprets this data; nothing here touches live state.

/// How a component's `owner()` is expected to resolve
#[derive(Debug, Clone, PartialEq)]
pub enum OwnerRule {
    /// Owned by the effective deployment owner (governance address on the
    /// production network, first deployer account everywhere else)
    Deployer,
    /// Owned by another deployed component (named by its component name)
    Component(&'static str),
    /// No ownership concept in this deployment's governance model
    None,
}

/// Which network configuration value a scalar expectation compares against
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigValue {
    /// The trusted slasher address; compared case-insensitively
    SlasherAddress,
    /// The submission gas price limit; compared as an arbitrary-precision integer
    SubmissionGasPriceLimit,
}

/// A directed edge: the source component's live `field` getter must resolve
/// to the target component's deployed address.
#[derive(Debug, Clone, PartialEq)]
pub struct Reference {
    /// Getter name on the source component
    pub field: &'static str,
    /// Name of the component whose deployed address is expected
    pub target: &'static str,
}

/// An expected equality between a component's live field and a value
/// supplied by the network configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarExpectation {
    /// Getter name on the source component
    pub field: &'static str,
    /// Configuration value supplying the expected side
    pub value: ConfigValue,
}

/// One deployed, addressable unit of the system under verification
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    /// Unique component name, matching the directory's naming
    pub name: &'static str,
    /// Whether the live `VERSION()` must contain the network identifier
    pub check_version: bool,
    /// Expected resolution of the live `owner()` getter
    pub owner: OwnerRule,
    /// Expected references to other components
    pub references: Vec<Reference>,
    /// Expected externally-configured values
    pub scalars: Vec<ScalarExpectation>,
}

impl Component {
    /// A component that appears only as a reference target and is not
    /// itself verified
    pub fn target_only(name: &'static str) -> Self {
        Self {
            name,
            check_version: false,
            owner: OwnerRule::None,
            references: Vec::new(),
            scalars: Vec::new(),
        }
    }

    /// Whether any check applies to this component
    pub fn has_checks(&self) -> bool {
        self.check_version
            || self.owner != OwnerRule::None
            || !self.references.is_empty()
            || !self.scalars.is_empty()
    }
}

/// The full expected reference graph, in fixed declaration order.
///
/// Declaration order is the report order: checks are independent and
/// read-only, so any order would be correct, but a stable one keeps
/// reports reproducible run to run.
#[derive(Debug, Clone, PartialEq)]
pub struct Topology {
    pub components: Vec<Component>,
}

impl Topology {
    /// Validate structural invariants of the declared graph.
    ///
    /// Checks that component names are unique and that every reference and
    /// owner edge targets a declared component (no dangling expectations).
    pub fn validate(&self) -> Result<(), String> {
        use std::collections::HashSet;

        let mut names = HashSet::new();
        for component in &self.components {
            if !names.insert(component.name) {
                return Err(format!("Duplicate component name '{}'", component.name));
            }
        }

        for component in &self.components {
            if let OwnerRule::Component(target) = &component.owner {
                if !names.contains(target) {
                    return Err(format!(
                        "Component '{}' declares owner '{}' which is not in the component set",
                        component.name, target
                    ));
                }
            }
            for reference in &component.references {
                if !names.contains(reference.target) {
                    return Err(format!(
                        "Component '{}' field '{}' references '{}' which is not in the component set",
                        component.name, reference.field, reference.target
                    ));
                }
            }
        }

        Ok(())
    }
}
