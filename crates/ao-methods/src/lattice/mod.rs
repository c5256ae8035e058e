//! Lattice methods for option pricing.
//!
//! * [`BinomialTree`] — recombining CRR binomial tree
//! * [`price_european`] / [`price_american`] — backward-induction pricing

pub mod binomial_tree;

pub use binomial_tree::BinomialTree;

use ao_core::Real;

// ─── Backward-induction pricing ───────────────────────────────────────────────

/// Price a European option by backward induction on a binomial tree.
///
/// # Arguments
/// * `tree` — the binomial tree (already constructed)
/// * `payoff` — payoff function `S → value` (e.g. `|s| (s - K).max(0.0)`)
/// * `discount` — per-step discount factor, typically `exp(−r · Δt)`
pub fn price_european(tree: &BinomialTree, payoff: &dyn Fn(Real) -> Real, discount: Real) -> Real {
    roll_back(tree, payoff, discount, false)
}

/// Price an American option by backward induction on a binomial tree.
///
/// Same as European pricing, but allows early exercise at every node.
pub fn price_american(tree: &BinomialTree, payoff: &dyn Fn(Real) -> Real, discount: Real) -> Real {
    roll_back(tree, payoff, discount, true)
}

fn roll_back(
    tree: &BinomialTree,
    payoff: &dyn Fn(Real) -> Real,
    discount: Real,
    early_exercise: bool,
) -> Real {
    let n = tree.steps();

    // Terminal values at maturity
    let mut values: Vec<Real> = (0..tree.size(n))
        .map(|j| payoff(tree.underlying(n, j)))
        .collect();

    // Ascending j reads values[j + 1] before it is overwritten
    for i in (0..n).rev() {
        for j in 0..tree.size(i) {
            let pu = tree.probability(i, j, 1);
            let pd = tree.probability(i, j, 0);
            let d_up = tree.descendant(i, j, 1);
            let d_down = tree.descendant(i, j, 0);
            let hold = discount * (pu * values[d_up] + pd * values[d_down]);
            values[j] = if early_exercise {
                hold.max(payoff(tree.underlying(i, j)))
            } else {
                hold
            };
        }
    }

    values[0]
}

// ─── Tests ────────────────────────────────────────────────────────────────────
