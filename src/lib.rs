//! # dictmap
//!
//! Order-preserving transforms and folds over string-keyed dictionaries
//! whose values may be individually absent.
//!
//! ```
//! use dictmap::Dict;
//!
//! let source = Dict::from_iter([("a", Some(1)), ("b", None), ("c", Some(3))]);
//!
//! let indexed = source.transform(|value, index| (*value, index));
//! assert_eq!(indexed.get("c"), Some(&(3, 2)));
//! assert!(!indexed.contains_key("b"));
//!
//! let total = source.fold(0i32, |acc, value, _key| acc + value);
//! assert_eq!(total, 4);
//! ```
//!
//! ## Modules
//!
//! - `core` - Pure dictionary type, transforms and folds
//! - `error` - Unified error type with numeric codes
//! - `app` - Environment configuration and logging setup for host programs
pub mod app;
pub mod core;
pub mod error;

#[cfg(test)]
mod testing;

pub use crate::core::dict::{
    fold_dict, map_values, transform_dict, try_fold_dict, try_transform_dict, Dict,
};
pub use crate::error::{DictError, ErrorCode, Result};
