/// Grip weight of the contact term
pub const CONTACT_WEIGHT: f64 = 0.3;

/// Grip weight of the coverage term
pub const COVERAGE_WEIGHT: f64 = 0.3;

/// Grip weight of the efficiency term
pub const EFFICIENCY_WEIGHT: f64 = 0.2;

/// Grip weight of the stability term
pub const STABILITY_WEIGHT: f64 = 0.2;

/// Coefficients at or below this magnitude count as zero for coverage
pub const COVERAGE_FLOOR: f64 = 1e-10;

/// e-folding scale of the efficiency penalty (coefficient count)
pub const EFFICIENCY_SCALE: f64 = 10.0;

/// e-folding scale of the stability penalty (largest magnitude)
pub const STABILITY_SCALE: f64 = 10.0;

/// Gradient-ascent step size for grip optimization
pub const LEARNING_RATE: f64 = 0.1;

/// Forward finite-difference step for gradient estimation
pub const GRADIENT_STEP: f64 = 1e-6;

/// Overall grip at which optimization stops early
pub const GRIP_TARGET: f64 = 0.8;

/// Default sweep cap for the grip optimizer
pub const MAX_ITERATIONS: usize = 100;

/// Curvature contribution per unit of leading sectional curvature
pub const CURVATURE_GAIN: f64 = 0.1;

/// Coefficient contribution per symmetry group
pub const SYMMETRY_GAIN: f64 = 0.05;

/// Highest order with an explicit catalog entry
pub const MAX_CATALOG_ORDER: usize = 4;

/// Numerical epsilon for near-zero comparisons
pub const EPSILON: f64 = 1e-10;

/// First fifteen primes. The consciousness preset derives its curvature
/// from the first three.
pub const FUNDAMENTAL_PRIMES: [u32; 15] =
    [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];
