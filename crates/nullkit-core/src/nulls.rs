//! Null-coalescing helpers
//!
//! Each helper is a pure function over one possibly-absent value, plus at
//! most one auxiliary argument (default, supplier, predicate, descriptor or
//! transform). None of them panic: absence is the only way they signal that
//! there is nothing to return.
//!
//! The `*_with` variants take the auxiliary argument itself as an `Option`;
//! a missing supplier, predicate or transform is treated as "no match".

use std::any::Any;

use crate::{NullsError, NullsResult, TypeDescriptor};

/// Returns `true` if the value is absent.
#[inline]
pub fn is_null<T>(value: &Option<T>) -> bool {
    value.is_none()
}

/// Returns `true` if the value is present.
#[inline]
pub fn is_not_null<T>(value: &Option<T>) -> bool {
    value.is_some()
}

/// Returns the value if present, or `default` otherwise.
#[inline]
pub fn or<T>(value: Option<T>, default: T) -> T {
    value.unwrap_or(default)
}

/// Returns the value if present, or the result of `supplier` otherwise.
///
/// `supplier` is only called when the value is absent.
///
/// ```rust
/// use nullkit_core::nulls::or_get;
///
/// let cached = Some(3);
/// let value = or_get(cached, || unreachable!("present value skips the supplier"));
/// assert_eq!(value, 3);
/// ```
#[inline]
pub fn or_get<T, F>(value: Option<T>, supplier: F) -> T
where
    F: FnOnce() -> T,
{
    value.unwrap_or_else(supplier)
}

/// Like [`or_get`], but the supplier itself may be absent, in which case an
/// absent value stays absent.
#[inline]
pub fn or_get_with<T, F>(value: Option<T>, supplier: Option<F>) -> Option<T>
where
    F: FnOnce() -> T,
{
    value.or_else(|| supplier.map(|supply| supply()))
}

/// Converts the value into the optional wrapper.
#[inline]
pub fn to_optional<T>(value: Option<T>) -> Option<T> {
    value
}

/// Alias of [`to_optional`].
#[inline]
pub fn when_not_null<T>(value: Option<T>) -> Option<T> {
    to_optional(value)
}

/// Keeps the value only if it is present and `predicate` accepts it.
#[inline]
pub fn when<T, P>(value: Option<T>, predicate: P) -> Option<T>
where
    P: FnOnce(&T) -> bool,
{
    value.filter(predicate)
}

/// Like [`when`], but an absent predicate rejects every value.
#[inline]
pub fn when_with<T, P>(value: Option<T>, predicate: Option<P>) -> Option<T>
where
    P: FnOnce(&T) -> bool,
{
    let predicate = predicate?;
    value.filter(predicate)
}

/// Narrows the value to the type named by `target`.
///
/// Returns `None` when the value is absent or its runtime type is not `S`.
///
/// ```rust
/// use std::any::Any;
/// use nullkit_core::{nulls::as_type, TypeDescriptor};
///
/// let number: &dyn Any = &1234i32;
/// assert_eq!(as_type(Some(number), TypeDescriptor::of::<i32>()), Some(&1234));
/// assert_eq!(as_type(Some(number), TypeDescriptor::of::<f64>()), None);
/// ```
#[inline]
pub fn as_type<'a, S: Any>(value: Option<&'a dyn Any>, target: TypeDescriptor<S>) -> Option<&'a S> {
    target.cast(value?)
}

/// Owned counterpart of [`as_type`]. A value of the wrong type is dropped.
#[inline]
pub fn as_type_boxed<S: Any>(value: Option<Box<dyn Any>>, target: TypeDescriptor<S>) -> Option<Box<S>> {
    target.cast_boxed(value?).ok()
}

/// Like [`as_type`], but reports a mismatch as [`NullsError::InvalidCast`].
///
/// Takes the value itself rather than an `Option`: there is no absent-value
/// form, so unwrap or branch on presence before calling.
pub fn try_as_type<'a, S: Any>(value: &'a dyn Any, target: TypeDescriptor<S>) -> NullsResult<&'a S> {
    target.cast(value).ok_or(NullsError::InvalidCast {
        expected: target.name(),
    })
}

/// Applies `transform` to a present value; an absent value stays absent and
/// `transform` is not called.
#[inline]
pub fn map_to<F, T, M>(value: Option<F>, transform: M) -> Option<T>
where
    M: FnOnce(F) -> T,
{
    value.map(transform)
}

/// Like [`map_to`], but an absent transform yields an absent result.
#[inline]
pub fn map_to_with<F, T, M>(value: Option<F>, transform: Option<M>) -> Option<T>
where
    M: FnOnce(F) -> T,
{
    let transform = transform?;
    value.map(transform)
}

// Primitive coalescing

/// Returns the integer if present, or `default` otherwise.
#[inline]
pub fn or_int(value: Option<i32>, default: i32) -> i32 {
    value.unwrap_or(default)
}

/// Returns the long if present, or `default` otherwise.
#[inline]
pub fn or_long(value: Option<i64>, default: i64) -> i64 {
    value.unwrap_or(default)
}

/// Returns the double if present, or `default` otherwise.
#[inline]
pub fn or_double(value: Option<f64>, default: f64) -> f64 {
    value.unwrap_or(default)
}
