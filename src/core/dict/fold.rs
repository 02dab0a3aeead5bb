//! Folds over the present values of a [`Dict`]

use super::Dict;
use tracing::{debug, trace};

/// Fold every present value of `source` into one accumulator.
///
/// Values are visited in enumeration order starting from `initial`; absent
/// entries are skipped. An empty dictionary returns `initial` unchanged.
pub fn fold_dict<T, A, F>(source: &Dict<T>, mut f: F, initial: A) -> A
where
    F: FnMut(A, &T, &str) -> A,
{
    let mut visited = 0usize;
    let acc = source.present().fold(initial, |acc, (key, value)| {
        visited += 1;
        f(acc, value, key)
    });

    trace!("Folded {} present values across {} keys", visited, source.len());
    acc
}

/// Like [`fold_dict`], but `f` may fail; the first error aborts the fold and
/// is returned as is
pub fn try_fold_dict<T, A, E, F>(source: &Dict<T>, mut f: F, initial: A) -> Result<A, E>
where
    F: FnMut(A, &T, &str) -> Result<A, E>,
{
    let mut acc = initial;
    let mut visited = 0usize;

    for (key, value) in source.present() {
        acc = match f(acc, value, key) {
            Ok(next) => next,
            Err(err) => {
                debug!("Fold aborted at key '{}'", key);
                return Err(err);
            }
        };
        visited += 1;
    }

    trace!("Folded {} present values across {} keys", visited, source.len());
    Ok(acc)
}
