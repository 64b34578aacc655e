//! Explicit Runge-Kutta tableaux: named methods plus a generic fallback.

use serde::{Deserialize, Serialize};

use crate::constants::EPSILON;
use crate::error::{KernelError, Result};

/// Butcher tableau (a, b, c) of an explicit Runge-Kutta method.
///
/// `a` is lower triangular; `b` are the weights; `c` the nodes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ButcherTableau {
    pub a: Vec<Vec<f64>>,
    pub b: Vec<f64>,
    pub c: Vec<f64>,
    pub order: usize,
    pub stages: usize,
}

impl ButcherTableau {
    /// Explicit-method consistency: for every stage i ≥ 1, the row sum of
    /// `a[i]` equals `c[i]`.
    pub fn is_consistent(&self) -> bool {
        self.c
            .iter()
            .enumerate()
            .skip(1)
            .all(|(i, &ci)| (self.a[i].iter().sum::<f64>() - ci).abs() < EPSILON)
    }
}

/// Build a tableau by method name.
///
/// `euler`, `midpoint`, and `rk4` return their standard tableaux and ignore
/// `order`. Any other name falls back to a generic `order`-stage scheme with
/// Simpson-like weights; the fallback always builds but carries no accuracy
/// claim beyond consistency.
pub fn build_tableau(method: &str, order: usize) -> Result<ButcherTableau> {
    if order == 0 {
        return Err(KernelError::InvalidOrder(order));
    }

    Ok(match method {
        "euler" => euler(),
        "midpoint" => midpoint(),
        "rk4" => rk4(),
        _ => generic(order),
    })
}

fn euler() -> ButcherTableau {
    ButcherTableau {
        a: vec![vec![0.0]],
        b: vec![1.0],
        c: vec![0.0],
        order: 1,
        stages: 1,
    }
}

fn midpoint() -> ButcherTableau {
    ButcherTableau {
        a: vec![vec![0.0, 0.0], vec![0.5, 0.0]],
        b: vec![0.0, 1.0],
        c: vec![0.0, 0.5],
        order: 2,
        stages: 2,
    }
}

fn rk4() -> ButcherTableau {
    ButcherTableau {
        a: vec![
            vec![0.0, 0.0, 0.0, 0.0],
            vec![0.5, 0.0, 0.0, 0.0],
            vec![0.0, 0.5, 0.0, 0.0],
            vec![0.0, 0.0, 1.0, 0.0],
        ],
        b: vec![1.0 / 6.0, 1.0 / 3.0, 1.0 / 3.0, 1.0 / 6.0],
        c: vec![0.0, 0.5, 0.5, 1.0],
        order: 4,
        stages: 4,
    }
}

/// Generic `order`-stage scheme: evenly spaced nodes, row-constant `a`,
/// trapezoid-tapered weights. A single stage leaves no interior spacing,
/// so order 1 degrades to the Euler tableau.
fn generic(order: usize) -> ButcherTableau {
    if order == 1 {
        return euler();
    }

    let stages = order;
    let span = (stages - 1) as f64;
    let c: Vec<f64> = (0..stages).map(|i| i as f64 / span).collect();

    let mut a = vec![vec![0.0; stages]; stages];
    for i in 1..stages {
        for j in 0..i {
            a[i][j] = c[i] / i as f64;
        }
    }

    let b: Vec<f64> = (0..stages)
        .map(|i| {
            if i == 0 || i == stages - 1 {
                1.0 / (2.0 * span)
            } else {
                1.0 / span
            }
        })
        .collect();

    ButcherTableau {
        a,
        b,
        c,
        order,
        stages,
    }
}
