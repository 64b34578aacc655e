//! Universal kernel generator.
//!
//! Represents the elementary differentials of a B-series expansion as
//! rooted trees (orders 1 through 4), weights each tree per domain, and
//! tunes the coefficient vector with a finite-difference grip ascent.
//! Physics and computing domains additionally get an explicit Runge-Kutta
//! tableau. One `GeneratedKernel` comes back per domain; five presets are
//! built in.
//!
//! Zero I/O — pure math engine with no opinions about transport or
//! rendering.

pub mod catalog;
pub mod compose;
pub mod constants;
pub mod domain;
pub mod error;
pub mod expansion;
pub mod generator;
pub mod grip;
pub mod serde_compat;
pub mod tableau;
pub mod tree;

pub use catalog::elementary_differentials;
pub use compose::{chain_rule, product_rule};
pub use constants::{EPSILON, FUNDAMENTAL_PRIMES, GRIP_TARGET, MAX_CATALOG_ORDER};
pub use domain::{
    ContextTensor, DomainSpecification, DomainType, FlowField, Invariant, Singularity,
    SymmetryGroup, Topology, analyze,
};
pub use error::{KernelError, Result};
pub use expansion::{BSeriesExpansion, expand};
pub use generator::{GeneratedKernel, generate_domain_kernels, generate_kernel};
pub use grip::{GripMetrics, OptimizationResult, OptimizerConfig, measure_grip, optimize_grip};
pub use serde_compat::{CURRENT_VERSION, export_json, import_json};
pub use tableau::{ButcherTableau, build_tableau};
pub use tree::{RootedTree, TreeNode};
