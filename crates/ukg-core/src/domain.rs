//! Domain descriptions and their normalization into a complete context.

use serde::{Deserialize, Serialize};

/// Problem family a kernel is generated for. Drives the per-tree
/// coefficient multiplier and whether a tableau is attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainType {
    Physics,
    Chemistry,
    Biology,
    Computing,
    Consciousness,
}

/// Manifold shape of the domain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topology {
    pub manifold_dimension: usize,
    pub curvature: Vec<f64>,
    pub genus: i64,
    pub euler_characteristic: i64,
}

impl Default for Topology {
    /// Flat 3-manifold: zero curvature, genus 0, χ = 2.
    fn default() -> Self {
        Self {
            manifold_dimension: 3,
            curvature: vec![0.0; 3],
            genus: 0,
            euler_characteristic: 2,
        }
    }
}

/// Symmetry group acting on the domain: a kind tag plus generator matrices.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SymmetryGroup {
    pub kind: String,
    pub generators: Vec<Vec<Vec<f64>>>,
}

/// Named conserved quantity and the law it follows from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Invariant {
    pub name: String,
    pub value: f64,
    pub law: String,
}

/// Critical point of the flow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Singularity {
    pub location: Vec<f64>,
    pub kind: String,
    pub stability: f64,
}

/// Vector-field description: symbolic components, fixed points, and
/// sampled flow lines (polylines of points).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowField {
    pub components: Vec<String>,
    pub fixed_points: Vec<Vec<f64>>,
    pub flow_lines: Vec<Vec<Vec<f64>>>,
}

/// Caller-supplied domain description. Read-only input: topology and flow
/// may be omitted and the geometric lists may be empty; [`analyze`] fills
/// the gaps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DomainSpecification {
    pub name: String,
    #[serde(rename = "type")]
    pub domain_type: DomainType,
    pub order: usize,
    #[serde(default)]
    pub topology: Option<Topology>,
    #[serde(default)]
    pub symmetries: Vec<SymmetryGroup>,
    #[serde(default)]
    pub invariants: Vec<Invariant>,
    #[serde(default)]
    pub singularities: Vec<Singularity>,
    #[serde(default)]
    pub flow: Option<FlowField>,
}

impl DomainSpecification {
    /// Minimal description: name, type, and order. Everything geometric is
    /// left for [`analyze`] to default.
    pub fn new(name: &str, domain_type: DomainType, order: usize) -> Self {
        Self {
            name: name.to_string(),
            domain_type,
            order,
            topology: None,
            symmetries: Vec::new(),
            invariants: Vec::new(),
            singularities: Vec::new(),
            flow: None,
        }
    }
}

/// Fully normalized domain context consumed by expansion and optimization.
/// Built fresh per generation call; never shared across calls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextTensor {
    pub topology: Topology,
    pub symmetries: Vec<SymmetryGroup>,
    pub invariants: Vec<Invariant>,
    pub singularities: Vec<Singularity>,
    pub flow: FlowField,
    /// Overall grip once measured; 0.0 until then.
    pub grip_metric: f64,
}

/// Normalize a partial domain description into a complete context.
/// Pure and total: absent fields take defaults, nothing fails.
pub fn analyze(spec: &DomainSpecification) -> ContextTensor {
    ContextTensor {
        topology: spec.topology.clone().unwrap_or_default(),
        symmetries: spec.symmetries.clone(),
        invariants: spec.invariants.clone(),
        singularities: spec.singularities.clone(),
        flow: spec.flow.clone().unwrap_or_default(),
        grip_metric: 0.0,
    }
}
