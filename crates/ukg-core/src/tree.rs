use serde::{Deserialize, Serialize};

/// A node in an elementary-differential tree.
///
/// `label` is the derivative symbol at this node ("f", "f'", "f''", ...);
/// children are the ordered arguments of that derivative.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: String,
    pub label: String,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Leaf node: a bare `f` evaluation.
    pub fn leaf(id: &str) -> Self {
        Self {
            id: id.to_string(),
            label: "f".to_string(),
            children: Vec::new(),
        }
    }

    /// Interior node: a derivative applied to ordered child arguments.
    pub fn branch(id: &str, label: &str, children: Vec<TreeNode>) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            children,
        }
    }

    /// Total node count including this node.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::count).sum::<usize>()
    }
}

/// Rooted tree representing one elementary differential of a B-series.
///
/// `order` is the node count, `weight` the Butcher weight of the term,
/// `density` the tree density γ(t), `symmetry` the symmetry factor σ(t).
/// Immutable once built; only the catalog and the composition operators
/// construct these.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RootedTree {
    pub order: usize,
    pub structure: TreeNode,
    pub weight: f64,
    pub density: u64,
    pub symmetry: u64,
}

impl RootedTree {
    /// Node count of the underlying structure. Equals `order` for every
    /// catalog tree.
    pub fn node_count(&self) -> usize {
        self.structure.count()
    }
}
