//! Integration tests exercising the full generation pipeline:
//! domain → context → expansion → optimization → kernel → wire format.

use approx::assert_relative_eq;
use ukg_core::{
    DomainSpecification, DomainType, GRIP_TARGET, OptimizerConfig, analyze, build_tableau,
    chain_rule, elementary_differentials, expand, export_json, generate_domain_kernels,
    generate_kernel, import_json, measure_grip, optimize_grip, product_rule,
};

/// Test 1: The preset registry produces five coherent kernels.
#[test]
fn preset_registry_pipeline() {
    let kernels = generate_domain_kernels().unwrap();
    assert_eq!(kernels.len(), 5);

    for (name, kernel) in &kernels {
        assert_eq!(
            kernel.trees.len(),
            kernel.coefficients.len(),
            "{name}: misaligned coefficients"
        );
        assert!(kernel.grip.overall > 0.0, "{name}: no grip");
        assert!(kernel.grip.overall <= 1.0, "{name}: grip above 1");

        // Every tree in a kernel satisfies the node-count invariant.
        for tree in &kernel.trees {
            assert_eq!(tree.node_count(), tree.order);
        }
    }

    // Order-4 domains carry the full cumulative catalog.
    assert_eq!(kernels["physics"].trees.len(), 9);
    assert_eq!(kernels["computing"].trees.len(), 9);
    // Order-3 domains stop at the order-3 entries.
    assert_eq!(kernels["chemistry"].trees.len(), 4);
    assert_eq!(kernels["biology"].trees.len(), 4);
}

/// Test 2: The Echo preset keeps its 11-dimensional geometry through the
/// whole pipeline.
#[test]
fn echo_kernel_geometry() {
    let kernels = generate_domain_kernels().unwrap();
    let echo = &kernels["consciousness"];

    assert_eq!(echo.context.topology.manifold_dimension, 11);
    assert_eq!(echo.context.topology.curvature.len(), 3);
    assert!(echo.context.topology.curvature.iter().all(|&k| k > 0.0));
    assert_eq!(echo.context.symmetries.len(), 1);
    assert_eq!(echo.context.invariants.len(), 1);
    assert_eq!(echo.context.singularities.len(), 1);
    assert!(echo.tableau.is_none());
}

/// Test 3: Raw expansion scales, then optimization only improves grip.
#[test]
fn expansion_then_optimization() {
    let spec = DomainSpecification::new("computing", DomainType::Computing, 4);
    let ctx = analyze(&spec);
    let expansion = expand(&spec, &ctx).unwrap();

    // Raw coefficients are weight / order under a defaulted context.
    for (tree, &coeff) in expansion.trees.iter().zip(&expansion.coefficients) {
        assert_relative_eq!(coeff, tree.weight / tree.order as f64, epsilon = 1e-12);
    }

    let before = measure_grip(&expansion.coefficients).unwrap();
    let result = optimize_grip(&expansion.coefficients, &OptimizerConfig::default()).unwrap();
    assert!(result.grip.overall >= before.overall);

    let kernel = generate_kernel(&spec, None).unwrap();
    assert_eq!(kernel.coefficients, result.coefficients);
    assert_eq!(kernel.iterations, result.iterations);
}

/// Test 4: Physics and computing kernels attach a consistent rk4 tableau.
#[test]
fn tableau_attachment() {
    let kernels = generate_domain_kernels().unwrap();

    for name in ["physics", "computing"] {
        let tableau = kernels[name].tableau.as_ref().unwrap();
        assert!(tableau.is_consistent(), "{name}: inconsistent tableau");
        let sum: f64 = tableau.b.iter().sum();
        assert_relative_eq!(sum, 1.0, epsilon = 1e-10);
        assert_eq!(tableau, &build_tableau("rk4", 4).unwrap());
    }
}

/// Test 5: Wire roundtrip preserves a kernel exactly.
#[test]
fn wire_roundtrip() {
    let kernels = generate_domain_kernels().unwrap();
    for (name, kernel) in &kernels {
        let json = export_json(kernel).unwrap();
        let back = import_json(&json).unwrap();

        assert_eq!(back.coefficients, kernel.coefficients, "{name}");
        assert_eq!(back.grip, kernel.grip, "{name}");
        assert_eq!(back.context, kernel.context, "{name}");
        assert_eq!(back.tableau, kernel.tableau, "{name}");
        assert_eq!(back.domain, kernel.domain, "{name}");
    }
}

/// Test 6: Composition operators agree with the catalog's bookkeeping.
#[test]
fn composition_over_catalog() {
    let trees = elementary_differentials(3).unwrap();
    let f = &trees[1]; // f'(f), order 2
    let g = &trees[2]; // f''(f, f), order 3

    let chained = chain_rule(f, g);
    assert_eq!(chained.order, 4);
    assert_relative_eq!(chained.weight, f.weight * g.weight, epsilon = 1e-12);

    let product = product_rule(f, g);
    assert_eq!(product.order, 3);
    assert_relative_eq!(product.weight, f.weight + g.weight, epsilon = 1e-12);
    assert_eq!(product.symmetry, 1);

    // Derived trees feed straight back into grip scoring via their weights.
    let grip = measure_grip(&[chained.weight, product.weight]).unwrap();
    assert!(grip.overall > 0.0);
}

/// Test 7: A caller-tightened optimizer target still terminates normally.
#[test]
fn strict_target_hits_iteration_cap() {
    let config = OptimizerConfig {
        // Unreachable: efficiency alone caps overall well below 1.
        target: 0.999,
        max_iterations: 25,
        ..OptimizerConfig::default()
    };
    let result = optimize_grip(&[0.2, 0.2, 0.2], &config).unwrap();
    assert_eq!(result.iterations, 25);
    assert!(result.grip.overall < 0.999);
    assert!(result.grip.overall > 0.0);
}

/// Test 8: Defaulted and explicit contexts produce the same kernel.
#[test]
fn default_context_matches_analyze() {
    let spec = DomainSpecification::new("bio", DomainType::Biology, 3);
    let explicit = generate_kernel(&spec, Some(analyze(&spec))).unwrap();
    let defaulted = generate_kernel(&spec, None).unwrap();

    assert_eq!(explicit.coefficients, defaulted.coefficients);
    assert_eq!(explicit.grip, defaulted.grip);

    if explicit.grip.overall >= GRIP_TARGET {
        assert!(explicit.iterations < 100, "early stop should not exhaust the cap");
    }
}
