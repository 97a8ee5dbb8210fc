//! Copy constraints as a permutation over the `3n` wire positions.
//!
//! Position `i` of lane `j` (left, right, output) is `j * n + i`. Positions
//! holding the same variable form one cycle, so a wire assignment is
//! consistent exactly when it is invariant under the permutation.
use crate::plonk::constraint_system::SparseR1CS;
use zksetup_algebra::prelude::*;

/// Return the variable id at every wire position.
///
/// Placeholder rows carry public variable `i` on the left lane. Their right
/// and output lanes, and every padding row, carry variable `0`.
pub fn wire_variable_ids<F: Scalar>(cs: &SparseR1CS<F>, n: usize) -> Vec<usize> {
    assert!(n >= cs.nb_rows());

    let mut lro = vec![0usize; 3 * n];
    for (i, id) in lro.iter_mut().enumerate().take(cs.nb_public_variables) {
        *id = i;
    }

    let offset = cs.nb_public_variables;
    for (i, c) in cs.rows().enumerate() {
        lro[offset + i] = c.l.variable_id;
        lro[n + offset + i] = c.r.variable_id;
        lro[2 * n + offset + i] = c.o.variable_id;
    }
    lro
}

/// Build the copy-constraint permutation of `cs` over a domain of size `n`.
///
/// Each position points to the previous occurrence of its variable, and the
/// first occurrence points to the last one, closing the cycle. A variable
/// used once is a fixed point.
pub fn build_permutation<F: Scalar>(cs: &SparseR1CS<F>, n: usize) -> Vec<usize> {
    let lro = wire_variable_ids(cs, n);

    let mut permutation: Vec<Option<usize>> = vec![None; 3 * n];
    let mut last_seen: Vec<Option<usize>> = vec![None; cs.nb_variables().max(1)];

    for (i, id) in lro.iter().enumerate() {
        if let Some(prev) = last_seen[*id] {
            permutation[i] = Some(prev);
        }
        last_seen[*id] = Some(i);
    }

    // Position `i` itself was recorded, so `last_seen` is set for its variable.
    permutation
        .into_iter()
        .zip_eq(lro.iter())
        .enumerate()
        .map(|(i, (p, id))| p.or(last_seen[*id]).unwrap_or(i))
        .collect()
}
