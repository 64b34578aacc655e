//! Explicit elementary-differential catalog for orders 1 through 4.
//!
//! The enumeration is a fixed table, not a general rooted-tree generator.
//! Order 4 carries five entries: the two mirrored `f''` terms are listed
//! separately, one more than the four unlabeled shapes of A000081.

use crate::constants::MAX_CATALOG_ORDER;
use crate::error::{KernelError, Result};
use crate::tree::{RootedTree, TreeNode};

/// All elementary-differential trees of orders 1..=order, in catalog order.
///
/// Cumulative: order 3 returns the order-1, order-2, and order-3 trees.
/// Orders above [`MAX_CATALOG_ORDER`] return the cumulative catalog through
/// order 4, since the table has no higher entries.
pub fn elementary_differentials(order: usize) -> Result<Vec<RootedTree>> {
    if order == 0 {
        return Err(KernelError::InvalidOrder(order));
    }

    let mut trees = Vec::new();
    for n in 1..=order.min(MAX_CATALOG_ORDER) {
        trees.extend(trees_of_order(n));
    }
    Ok(trees)
}

fn trees_of_order(order: usize) -> Vec<RootedTree> {
    match order {
        1 => vec![tree(1, TreeNode::leaf("t1"), 1.0, 1)],
        2 => vec![tree(
            2,
            TreeNode::branch("t2", "f'", vec![TreeNode::leaf("t2.1")]),
            1.0 / 2.0,
            1,
        )],
        3 => vec![
            // f''(f, f)
            tree(
                3,
                TreeNode::branch(
                    "t3a",
                    "f''",
                    vec![TreeNode::leaf("t3a.1"), TreeNode::leaf("t3a.2")],
                ),
                1.0 / 6.0,
                2,
            ),
            // f'(f'(f))
            tree(
                3,
                TreeNode::branch(
                    "t3b",
                    "f'",
                    vec![TreeNode::branch(
                        "t3b.1",
                        "f'",
                        vec![TreeNode::leaf("t3b.2")],
                    )],
                ),
                1.0 / 3.0,
                1,
            ),
        ],
        4 => vec![
            // f'''(f, f, f)
            tree(
                4,
                TreeNode::branch(
                    "t4a",
                    "f'''",
                    vec![
                        TreeNode::leaf("t4a.1"),
                        TreeNode::leaf("t4a.2"),
                        TreeNode::leaf("t4a.3"),
                    ],
                ),
                1.0 / 24.0,
                6,
            ),
            // f''(f'(f), f)
            tree(
                4,
                TreeNode::branch(
                    "t4b",
                    "f''",
                    vec![
                        TreeNode::branch("t4b.1", "f'", vec![TreeNode::leaf("t4b.2")]),
                        TreeNode::leaf("t4b.3"),
                    ],
                ),
                1.0 / 8.0,
                2,
            ),
            // f''(f, f'(f))
            tree(
                4,
                TreeNode::branch(
                    "t4c",
                    "f''",
                    vec![
                        TreeNode::leaf("t4c.1"),
                        TreeNode::branch("t4c.2", "f'", vec![TreeNode::leaf("t4c.3")]),
                    ],
                ),
                1.0 / 8.0,
                2,
            ),
            // f'(f''(f, f))
            tree(
                4,
                TreeNode::branch(
                    "t4d",
                    "f'",
                    vec![TreeNode::branch(
                        "t4d.1",
                        "f''",
                        vec![TreeNode::leaf("t4d.2"), TreeNode::leaf("t4d.3")],
                    )],
                ),
                1.0 / 12.0,
                2,
            ),
            // f'(f'(f'(f)))
            tree(
                4,
                TreeNode::branch(
                    "t4e",
                    "f'",
                    vec![TreeNode::branch(
                        "t4e.1",
                        "f'",
                        vec![TreeNode::branch(
                            "t4e.2",
                            "f'",
                            vec![TreeNode::leaf("t4e.3")],
                        )],
                    )],
                ),
                1.0 / 4.0,
                1,
            ),
        ],
        _ => Vec::new(),
    }
}

/// Catalog trees have density equal to their order.
fn tree(order: usize, structure: TreeNode, weight: f64, symmetry: u64) -> RootedTree {
    RootedTree {
        order,
        structure,
        weight,
        density: order as u64,
        symmetry,
    }
}
