// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Collection and map checks: emptiness, size and quantifiers.
//!
//! Size checks work on anything implementing [`Size`] and take the collection
//! by value, so both `vec` and `&vec` can be checked and handed back. The nine
//! size checks are bound accessor checks (`require_*_by`) with the field label
//! `"size"`.
//!
//! ```
//! use std::collections::BTreeMap;
//! use requisite::collection::{require_for_all_values, require_size_less_than};
//! use requisite::number::require_positive;
//!
//! let mut scores = BTreeMap::new();
//! scores.insert("ada", 3);
//! scores.insert("bob", 0);
//!
//! assert!(require_size_less_than(&scores, 5, "scores").is_ok());
//!
//! let error = require_for_all_values(&scores, |v| require_positive(*v, "score"), "scores")
//!     .unwrap_err();
//! assert_eq!(
//!     error.to_string(),
//!     "Every value of scores must meet the requirement:\n\
//!      1: score must be positive; it is '0'."
//! );
//! ```

use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::fmt;

use crate::aggregate::{require_for_all_by, require_there_exists_by};
use crate::assertion::require_with;
use crate::bound::{
    require_bound_exclusive_by, require_bound_inclusive_by,
    require_bound_minimum_exclusive_maximum_inclusive_by,
    require_bound_minimum_inclusive_maximum_exclusive_by, require_equal_by,
    require_greater_than_by, require_greater_than_or_equal_by, require_less_than_by,
    require_less_than_or_equal_by,
};
use crate::error::Result;
use crate::name::{require_name, IntoName};

pub use crate::aggregate::{require_for_all, require_there_exists};

/// Field label used by the size checks.
const SIZE: &str = "size";

/// Number of elements (or entries) held.
pub trait Size {
    fn size(&self) -> usize;
}

macro_rules! impl_size {
    ($([$($generics:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($generics)*> Size for $ty {
                fn size(&self) -> usize {
                    self.len()
                }
            }
        )*
    };
}

impl_size! {
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T] LinkedList<T>,
    [T] BinaryHeap<T>,
    [T] [T],
    [T, const N: usize] [T; N],
    [T, S] HashSet<T, S>,
    [T] BTreeSet<T>,
    [K, V, S] HashMap<K, V, S>,
    [K, V] BTreeMap<K, V>,
}

impl<C: Size + ?Sized> Size for &C {
    fn size(&self) -> usize {
        (**self).size()
    }
}

/// A keyed collection whose keys and values can be checked separately.
pub trait Mapping: Size {
    type Key;
    type Value;

    fn keys(&self) -> impl Iterator<Item = &Self::Key>;
    fn values(&self) -> impl Iterator<Item = &Self::Value>;
}

impl<K, V, S> Mapping for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn keys(&self) -> impl Iterator<Item = &K> {
        HashMap::keys(self)
    }

    fn values(&self) -> impl Iterator<Item = &V> {
        HashMap::values(self)
    }
}

impl<K, V> Mapping for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn keys(&self) -> impl Iterator<Item = &K> {
        BTreeMap::keys(self)
    }

    fn values(&self) -> impl Iterator<Item = &V> {
        BTreeMap::values(self)
    }
}

// ============================================================================
// EMPTINESS
// ============================================================================

pub fn require_empty<'n, C: Size>(value: C, name: impl IntoName<'n>) -> Result<C> {
    let name = require_name(name)?;

    let size = value.size();
    require_with(size == 0, value, |_| {
        format!("{} must be empty; its size is '{}'.", name, size)
    })
}

pub fn require_non_empty<'n, C: Size>(value: C, name: impl IntoName<'n>) -> Result<C> {
    let name = require_name(name)?;

    let size = value.size();
    require_with(size != 0, value, |_| format!("{} must be non-empty.", name))
}

// ============================================================================
// SIZE
// ============================================================================

pub fn require_size_less_than<'n, C: Size>(
    value: C,
    maximum: usize,
    name: impl IntoName<'n>,
) -> Result<C> {
    require_less_than_by(value, C::size, maximum, name, SIZE)
}

pub fn require_size_less_than_or_equal<'n, C: Size>(
    value: C,
    maximum: usize,
    name: impl IntoName<'n>,
) -> Result<C> {
    require_less_than_or_equal_by(value, C::size, maximum, name, SIZE)
}

pub fn require_size<'n, C: Size>(value: C, size: usize, name: impl IntoName<'n>) -> Result<C> {
    require_equal_by(value, C::size, size, name, SIZE)
}

pub fn require_size_greater_than_or_equal<'n, C: Size>(
    value: C,
    minimum: usize,
    name: impl IntoName<'n>,
) -> Result<C> {
    require_greater_than_or_equal_by(value, C::size, minimum, name, SIZE)
}

pub fn require_size_greater_than<'n, C: Size>(
    value: C,
    minimum: usize,
    name: impl IntoName<'n>,
) -> Result<C> {
    require_greater_than_by(value, C::size, minimum, name, SIZE)
}

pub fn require_size_exclusive<'n, C: Size>(
    value: C,
    minimum: usize,
    maximum: usize,
    name: impl IntoName<'n>,
) -> Result<C> {
    require_bound_exclusive_by(value, C::size, minimum, maximum, name, SIZE)
}

pub fn require_size_inclusive<'n, C: Size>(
    value: C,
    minimum: usize,
    maximum: usize,
    name: impl IntoName<'n>,
) -> Result<C> {
    require_bound_inclusive_by(value, C::size, minimum, maximum, name, SIZE)
}

pub fn require_size_minimum_exclusive_maximum_inclusive<'n, C: Size>(
    value: C,
    minimum: usize,
    maximum: usize,
    name: impl IntoName<'n>,
) -> Result<C> {
    require_bound_minimum_exclusive_maximum_inclusive_by(
        value, C::size, minimum, maximum, name, SIZE,
    )
}

pub fn require_size_minimum_inclusive_maximum_exclusive<'n, C: Size>(
    value: C,
    minimum: usize,
    maximum: usize,
    name: impl IntoName<'n>,
) -> Result<C> {
    require_bound_minimum_inclusive_maximum_exclusive_by(
        value, C::size, minimum, maximum, name, SIZE,
    )
}

// ============================================================================
// MAP QUANTIFIERS
// ============================================================================

/// Require that every key of `map` passes `check`.
pub fn require_for_all_keys<'a, 'n, M, F, R, X>(
    map: &'a M,
    check: F,
    name: impl IntoName<'n>,
) -> Result<&'a M>
where
    M: Mapping + ?Sized,
    M::Key: 'a,
    F: FnMut(&'a M::Key) -> std::result::Result<R, X>,
    X: fmt::Display,
{
    require_for_all_by(map, |m: &'a M| m.keys(), check, name, "key")
}

/// Require that at least one key of `map` passes `check`.
pub fn require_there_exists_key<'a, 'n, M, F, R, X>(
    map: &'a M,
    check: F,
    name: impl IntoName<'n>,
) -> Result<&'a M>
where
    M: Mapping + ?Sized,
    M::Key: 'a,
    F: FnMut(&'a M::Key) -> std::result::Result<R, X>,
    X: fmt::Display,
{
    require_there_exists_by(map, |m: &'a M| m.keys(), check, name, "key")
}

/// Require that every value of `map` passes `check`.
pub fn require_for_all_values<'a, 'n, M, F, R, X>(
    map: &'a M,
    check: F,
    name: impl IntoName<'n>,
) -> Result<&'a M>
where
    M: Mapping + ?Sized,
    M::Value: 'a,
    F: FnMut(&'a M::Value) -> std::result::Result<R, X>,
    X: fmt::Display,
{
    require_for_all_by(map, |m: &'a M| m.values(), check, name, "value")
}

/// Require that at least one value of `map` passes `check`.
pub fn require_there_exists_value<'a, 'n, M, F, R, X>(
    map: &'a M,
    check: F,
    name: impl IntoName<'n>,
) -> Result<&'a M>
where
    M: Mapping + ?Sized,
    M::Value: 'a,
    F: FnMut(&'a M::Value) -> std::result::Result<R, X>,
    X: fmt::Display,
{
    require_there_exists_by(map, |m: &'a M| m.values(), check, name, "value")
}
