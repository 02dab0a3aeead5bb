//! Value transforms over a [`Dict`]

use super::Dict;
use tracing::{debug, trace};

/// Apply `f` to every present value, producing a new dictionary.
///
/// `f` receives the value and the zero-based position of its key among all
/// keys of `source`, absent ones included. It runs at most once per present
/// key, in enumeration order. Absent keys are left out of the result.
pub fn transform_dict<T, U, F>(source: &Dict<T>, mut f: F) -> Dict<U>
where
    F: FnMut(&T, usize) -> U,
{
    let mut output = Dict::with_capacity(source.len());

    for (index, (key, slot)) in source.iter().enumerate() {
        if let Some(value) = slot {
            output.insert(key, f(value, index));
        }
    }

    trace!(
        "Transformed {} present values across {} keys",
        output.len(),
        source.len()
    );
    output
}

/// Like [`transform_dict`], but `f` may fail.
///
/// The first error stops the pass and is returned as is; `f` is not called
/// for any later key and no partial dictionary is produced.
pub fn try_transform_dict<T, U, E, F>(source: &Dict<T>, mut f: F) -> Result<Dict<U>, E>
where
    F: FnMut(&T, usize) -> Result<U, E>,
{
    let mut output = Dict::with_capacity(source.len());

    for (index, (key, slot)) in source.iter().enumerate() {
        let Some(value) = slot else {
            continue;
        };

        match f(value, index) {
            Ok(mapped) => {
                output.insert(key, mapped);
            }
            Err(err) => {
                debug!("Transform aborted at key '{}' (index {})", key, index);
                return Err(err);
            }
        }
    }

    trace!(
        "Transformed {} present values across {} keys",
        output.len(),
        source.len()
    );
    Ok(output)
}

/// Apply `f` to every present value without exposing the key index
pub fn map_values<T, U, F>(source: &Dict<T>, mut f: F) -> Dict<U>
where
    F: FnMut(&T) -> U,
{
    transform_dict(source, |value, _| f(value))
}
