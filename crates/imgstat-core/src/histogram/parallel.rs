//! Block-wise fold/reduce with optional parallel dispatch
//!
//! The slice is cut into blocks of `block_len` elements. Each block is
//! folded into a fresh accumulator and the per-block accumulators are
//! combined with `reduce_fn`. With the `parallel` feature enabled and
//! `parallel == true`, blocks are folded on the rayon thread pool.
//!
//! `reduce_fn` must be associative and commutative for the parallel and
//! sequential paths to agree, which holds for element-wise integer sums.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub(crate) fn fold_reduce_blocks<T, A, I, F, R>(
    data: &[T],
    block_len: usize,
    parallel: bool,
    init: I,
    fold_fn: F,
    reduce_fn: R,
) -> A
where
    T: Sync,
    A: Send,
    I: Fn() -> A + Sync,
    F: Fn(A, &[T]) -> A + Sync,
    R: Fn(A, A) -> A + Sync,
{
    #[cfg(feature = "parallel")]
    {
        if parallel {
            return data
                .par_chunks(block_len)
                .fold(&init, &fold_fn)
                .reduce(&init, &reduce_fn);
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    data.chunks(block_len)
        .map(|block| fold_fn(init(), block))
        .fold(init(), &reduce_fn)
}
