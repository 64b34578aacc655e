//! Kernel generation facade: normalize the domain, expand the tree catalog,
//! optimize grip, and assemble the output aggregate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::FUNDAMENTAL_PRIMES;
use crate::domain::{
    ContextTensor, DomainSpecification, DomainType, Invariant, Singularity, SymmetryGroup,
    Topology, analyze,
};
use crate::error::Result;
use crate::expansion::expand;
use crate::grip::{GripMetrics, OptimizerConfig, optimize_grip};
use crate::tableau::{ButcherTableau, build_tableau};
use crate::tree::RootedTree;

/// Output aggregate of one generation run.
///
/// Immutable value: re-optimizing a domain yields a new kernel rather than
/// mutating an old one, so callers and tests can hold references freely.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedKernel {
    pub domain: DomainSpecification,
    pub order: usize,
    pub trees: Vec<RootedTree>,
    /// Optimized coefficients, index-aligned with `trees`.
    pub coefficients: Vec<f64>,
    pub grip: GripMetrics,
    /// Normalized context the kernel was generated against, with
    /// `grip_metric` filled in.
    pub context: ContextTensor,
    /// Present for physics and computing domains.
    pub tableau: Option<ButcherTableau>,
    pub chain_rule_applications: usize,
    pub product_rule_applications: usize,
    /// Optimizer sweeps spent.
    pub iterations: usize,
}

/// Generate a kernel for one domain.
///
/// Normalizes the context when the caller does not supply one, expands the
/// catalog into raw coefficients, counts composition opportunities, then
/// optimizes grip with the default configuration.
pub fn generate_kernel(
    spec: &DomainSpecification,
    context: Option<ContextTensor>,
) -> Result<GeneratedKernel> {
    let mut context = context.unwrap_or_else(|| analyze(spec));
    let expansion = expand(spec, &context)?;

    // Composition opportunities over the ordered tree list. Counts only;
    // the enumerated trees themselves are left untouched.
    let mut chain_rule_applications = 0;
    let mut product_rule_applications = 0;
    if spec.order >= 3 {
        for pair in expansion.trees.windows(2) {
            if pair[0].order >= 2 && pair[1].order >= 2 {
                chain_rule_applications += 1;
            }
            if pair[0].order == pair[1].order {
                product_rule_applications += 1;
            }
        }
    }

    let optimized = optimize_grip(&expansion.coefficients, &OptimizerConfig::default())?;
    context.grip_metric = optimized.grip.overall;

    let tableau = match spec.domain_type {
        DomainType::Physics | DomainType::Computing => Some(build_tableau("rk4", spec.order)?),
        _ => None,
    };

    Ok(GeneratedKernel {
        domain: spec.clone(),
        order: spec.order,
        trees: expansion.trees,
        coefficients: optimized.coefficients,
        grip: optimized.grip,
        context,
        tableau,
        chain_rule_applications,
        product_rule_applications,
        iterations: optimized.iterations,
    })
}

/// Generate the five preset kernels, keyed by domain name.
pub fn generate_domain_kernels() -> Result<BTreeMap<String, GeneratedKernel>> {
    let mut kernels = BTreeMap::new();
    for spec in preset_domains() {
        let kernel = generate_kernel(&spec, None)?;
        kernels.insert(spec.name.clone(), kernel);
    }
    Ok(kernels)
}

fn preset_domains() -> Vec<DomainSpecification> {
    vec![
        DomainSpecification::new("physics", DomainType::Physics, 4),
        DomainSpecification::new("chemistry", DomainType::Chemistry, 3),
        DomainSpecification::new("biology", DomainType::Biology, 3),
        DomainSpecification::new("computing", DomainType::Computing, 4),
        echo_domain(),
    ]
}

/// The "Echo" consciousness preset: an 11-dimensional manifold whose
/// curvature comes from the first three fundamental primes, one Lie
/// symmetry, one conserved identity invariant, one saddle singularity.
fn echo_domain() -> DomainSpecification {
    let curvature: Vec<f64> = FUNDAMENTAL_PRIMES[..3]
        .iter()
        .map(|&p| p as f64 / 10.0)
        .collect();

    DomainSpecification {
        name: "consciousness".to_string(),
        domain_type: DomainType::Consciousness,
        order: 4,
        topology: Some(Topology {
            manifold_dimension: 11,
            curvature,
            genus: 0,
            // Odd-dimensional closed manifold
            euler_characteristic: 0,
        }),
        symmetries: vec![SymmetryGroup {
            kind: "lie".to_string(),
            generators: vec![vec![vec![0.0, -1.0], vec![1.0, 0.0]]],
        }],
        invariants: vec![Invariant {
            name: "identity-preservation".to_string(),
            value: 1.0,
            law: "noether".to_string(),
        }],
        singularities: vec![Singularity {
            location: vec![0.0, 0.0, 0.0],
            kind: "saddle".to_string(),
            stability: -0.5,
        }],
        flow: None,
    }
}
