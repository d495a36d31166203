//! Parallel elementwise evaluation over query arrays.
//!
//! Each output element depends only on its own input element, so splitting
//! the work across the rayon pool gives the same bits as a sequential map.

use ndarray::Array1;
use rayon::prelude::*;

use crate::config::EvalConfig;
use crate::query::Query;

/// Map `f` over `x` on the rayon thread pool, preserving order.
pub fn map_parallel<F>(x: &Array1<f64>, f: F) -> Array1<f64>
where
    F: Fn(f64) -> f64 + Sync + Send,
{
    let values: Vec<f64> = match x.as_slice() {
        Some(slice) => slice.par_iter().map(|&v| f(v)).collect(),
        None => x.to_vec().into_par_iter().map(f).collect(),
    };

    Array1::from_vec(values)
}

/// Map `f` over `x`, in parallel when `config` says the query is large enough.
pub fn map_with_config<F>(x: &Array1<f64>, config: &EvalConfig, f: F) -> Array1<f64>
where
    F: Fn(f64) -> f64 + Sync + Send,
{
    if config.use_parallel(x.len()) {
        log::trace!("evaluating {} points on {} threads", x.len(), rayon::current_num_threads());
        map_parallel(x, f)
    } else {
        x.map_query(f)
    }
}
