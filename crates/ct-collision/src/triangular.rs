//! Index arithmetic over the row-major upper-triangular list of species pairs.
//!
//! For `n` species the list is `(0,0),(0,1),…,(0,n-1),(1,1),…,(n-1,n-1)`.

use ct_core::{CoreError, CoreResult};

/// Number of unordered pairs (self pairs included) among `n` species.
pub const fn pair_count(n: usize) -> usize {
    n * (n + 1) / 2
}

/// Position of pair `(i, i)`, the first entry of row `i`.
pub const fn row_start(i: usize, n: usize) -> usize {
    i * (2 * n + 1 - i) / 2
}

/// Position of the pair `{i, j}`; argument order does not matter.
pub fn pair_index(i: usize, j: usize, n: usize) -> CoreResult<usize> {
    let (i, j) = if i <= j { (i, j) } else { (j, i) };
    if j >= n {
        return Err(CoreError::IndexOob {
            what: "species pair",
            index: j,
            len: n,
        });
    }
    Ok(row_start(i, n) + (j - i))
}

/// Positions of the self pairs `(i, i)` for `i` in `first..n`, in order.
///
/// Starts at row `first` and strides forward by the remaining length of each row.
pub fn diagonal_indices(first: usize, n: usize) -> impl Iterator<Item = usize> {
    (first..n).scan(row_start(first, n), move |index, i| {
        let current = *index;
        *index += n - i;
        Some(current)
    })
}

/// The `(i, j)` pairs in list order.
pub fn pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i..n).map(move |j| (i, j)))
}
