//! Composition operators over elementary-differential trees.
//!
//! `chain_rule` models (f∘g)' = f'(g)·g' and `product_rule` models
//! (f·g)' = f'·g + f·g'. Both are pure and total over any two trees.

use crate::tree::{RootedTree, TreeNode};

/// Chain-rule composition: nests `g` under `f` with a composite label.
///
/// Order adds minus the shared root, weight multiplies, density adds,
/// symmetry multiplies.
pub fn chain_rule(f: &RootedTree, g: &RootedTree) -> RootedTree {
    let mut structure = f.structure.clone();
    structure.id = format!("chain({},{})", f.structure.id, g.structure.id);
    structure.label = format!("({}∘{})'", f.structure.label, g.structure.label);
    structure.children.push(g.structure.clone());

    RootedTree {
        order: f.order + g.order - 1,
        structure,
        weight: f.weight * g.weight,
        density: f.density + g.density,
        symmetry: f.symmetry * g.symmetry,
    }
}

/// Product-rule composition: roots both operands under a product label.
///
/// Order takes the max, weight adds, density adds, symmetry takes the min.
pub fn product_rule(f: &RootedTree, g: &RootedTree) -> RootedTree {
    let structure = TreeNode::branch(
        &format!("product({},{})", f.structure.id, g.structure.id),
        &format!("({}·{})'", f.structure.label, g.structure.label),
        vec![f.structure.clone(), g.structure.clone()],
    );

    RootedTree {
        order: f.order.max(g.order),
        structure,
        weight: f.weight + g.weight,
        density: f.density + g.density,
        symmetry: f.symmetry.min(g.symmetry),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::elementary_differentials;

    #[test]
    fn test_chain_rule_laws() {
        let trees = elementary_differentials(4).unwrap();
        for f in &trees {
            for g in &trees {
                let composed = chain_rule(f, g);
                assert_eq!(composed.order, f.order + g.order - 1);
                assert!((composed.weight - f.weight * g.weight).abs() < 1e-12);
                assert_eq!(composed.density, f.density + g.density);
                assert_eq!(composed.symmetry, f.symmetry * g.symmetry);
            }
        }
    }

    #[test]
    fn test_chain_rule_nests_g_under_f() {
        let trees = elementary_differentials(2).unwrap();
        let f = &trees[1]; // f'(f)
        let g = &trees[0]; // f
        let composed = chain_rule(f, g);

        assert_eq!(
            composed.structure.children.len(),
            f.structure.children.len() + 1
        );
        assert_eq!(composed.structure.children[1], g.structure);
    }

    #[test]
    fn test_product_rule_laws() {
        let trees = elementary_differentials(4).unwrap();
        for f in &trees {
            for g in &trees {
                let composed = product_rule(f, g);
                assert_eq!(composed.order, f.order.max(g.order));
                assert!((composed.weight - (f.weight + g.weight)).abs() < 1e-12);
                assert_eq!(composed.density, f.density + g.density);
                assert_eq!(composed.symmetry, f.symmetry.min(g.symmetry));
            }
        }
    }

    #[test]
    fn test_product_rule_roots_both_operands() {
        let trees = elementary_differentials(3).unwrap();
        let f = &trees[2]; // f''(f, f)
        let g = &trees[3]; // f'(f'(f))
        let composed = product_rule(f, g);

        assert_eq!(composed.structure.children.len(), 2);
        assert_eq!(composed.structure.children[0], f.structure);
        assert_eq!(composed.structure.children[1], g.structure);
    }

    #[test]
    fn test_composed_trees_compose_again() {
        // Composition output is a valid input; no catalog membership required.
        let trees = elementary_differentials(2).unwrap();
        let once = chain_rule(&trees[1], &trees[1]);
        let twice = product_rule(&once, &trees[0]);
        assert_eq!(twice.order, once.order);
        assert!((twice.weight - (once.weight + 1.0)).abs() < 1e-12);
    }
}
