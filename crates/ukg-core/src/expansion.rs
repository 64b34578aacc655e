//! B-series expansion: one coefficient per catalog tree, weighted by
//! domain geometry and domain type.

use serde::{Deserialize, Serialize};

use crate::catalog::elementary_differentials;
use crate::constants::{CURVATURE_GAIN, SYMMETRY_GAIN};
use crate::domain::{ContextTensor, DomainSpecification, DomainType};
use crate::error::Result;
use crate::tree::RootedTree;

/// Trees and their raw coefficients, index-aligned and order-preserving.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BSeriesExpansion {
    pub trees: Vec<RootedTree>,
    pub coefficients: Vec<f64>,
}

/// Expand the catalog for the requested order into a coefficient vector.
///
/// Each coefficient starts at the tree's Butcher weight, then scales by the
/// leading curvature, the symmetry-group count, and a domain-type multiplier.
pub fn expand(spec: &DomainSpecification, context: &ContextTensor) -> Result<BSeriesExpansion> {
    let trees = elementary_differentials(spec.order)?;

    let curvature = context.topology.curvature.first().copied().unwrap_or(0.0);
    let curvature_factor = 1.0 + curvature * CURVATURE_GAIN;
    let symmetry_factor = 1.0 + context.symmetries.len() as f64 * SYMMETRY_GAIN;

    let coefficients = trees
        .iter()
        .map(|tree| {
            tree.weight
                * curvature_factor
                * symmetry_factor
                * domain_multiplier(spec.domain_type, tree)
        })
        .collect();

    Ok(BSeriesExpansion {
        trees,
        coefficients,
    })
}

/// Per-tree emphasis by domain family.
fn domain_multiplier(domain_type: DomainType, tree: &RootedTree) -> f64 {
    match domain_type {
        DomainType::Physics => tree.symmetry as f64,
        DomainType::Chemistry => tree.density as f64,
        DomainType::Biology => (tree.order as f64).sqrt(),
        DomainType::Computing => 1.0 / tree.order as f64,
        DomainType::Consciousness => tree.order as f64 * tree.symmetry as f64,
    }
}
