//! Method-call form of the null helpers
//!
//! Bringing these traits into scope lets the helpers chain off any `Option`:
//!
//! ```rust
//! use nullkit_core::{AnyNullsExt, NullsExt, NumericNullsExt};
//! use std::any::Any;
//!
//! let greeting: Option<&str> = None;
//! assert_eq!(greeting.or_value("world"), "world");
//!
//! let number: &dyn Any = &1234i32;
//! assert_eq!(Some(number).as_type::<i32>(), Some(&1234));
//! assert_eq!(Some(number).as_type::<f64>().copied().or_primitive(0.0), 0.0);
//! ```

use std::any::Any;

use crate::nulls;
use crate::TypeDescriptor;

/// Null helpers on `Option<T>`
///
/// The default-value method is `or_value` since `Option::or` already exists
/// with `Option`-to-`Option` semantics.
pub trait NullsExt<T>: Sized {
    /// Is the value absent?
    fn is_null(&self) -> bool;

    /// Is the value present?
    fn is_not_null(&self) -> bool;

    /// The value, or `default` when absent.
    fn or_value(self, default: T) -> T;

    /// `supplier` runs only when the value is absent.
    fn or_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T;

    /// Like `or_get`, but an absent supplier leaves an absent value absent.
    fn or_get_with<F>(self, supplier: Option<F>) -> Option<T>
    where
        F: FnOnce() -> T;

    /// The value as the optional wrapper.
    fn to_optional(self) -> Option<T>;

    /// Alias of `to_optional`.
    fn when_not_null(self) -> Option<T>;

    /// The value, if present and accepted by `predicate`.
    fn when<P>(self, predicate: P) -> Option<T>
    where
        P: FnOnce(&T) -> bool;

    /// Like `when`, but an absent predicate rejects every value.
    fn when_with<P>(self, predicate: Option<P>) -> Option<T>
    where
        P: FnOnce(&T) -> bool;

    /// `transform` applied to a present value; not called when absent.
    fn map_to<U, M>(self, transform: M) -> Option<U>
    where
        M: FnOnce(T) -> U;

    /// Like `map_to`, but an absent transform yields an absent result.
    fn map_to_with<U, M>(self, transform: Option<M>) -> Option<U>
    where
        M: FnOnce(T) -> U;
}

impl<T> NullsExt<T> for Option<T> {
    #[inline]
    fn is_null(&self) -> bool {
        nulls::is_null(self)
    }

    #[inline]
    fn is_not_null(&self) -> bool {
        nulls::is_not_null(self)
    }

    #[inline]
    fn or_value(self, default: T) -> T {
        nulls::or(self, default)
    }

    #[inline]
    fn or_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        nulls::or_get(self, supplier)
    }

    #[inline]
    fn or_get_with<F>(self, supplier: Option<F>) -> Option<T>
    where
        F: FnOnce() -> T,
    {
        nulls::or_get_with(self, supplier)
    }

    #[inline]
    fn to_optional(self) -> Option<T> {
        nulls::to_optional(self)
    }

    #[inline]
    fn when_not_null(self) -> Option<T> {
        nulls::when_not_null(self)
    }

    #[inline]
    fn when<P>(self, predicate: P) -> Option<T>
    where
        P: FnOnce(&T) -> bool,
    {
        nulls::when(self, predicate)
    }

    #[inline]
    fn when_with<P>(self, predicate: Option<P>) -> Option<T>
    where
        P: FnOnce(&T) -> bool,
    {
        nulls::when_with(self, predicate)
    }

    #[inline]
    fn map_to<U, M>(self, transform: M) -> Option<U>
    where
        M: FnOnce(T) -> U,
    {
        nulls::map_to(self, transform)
    }

    #[inline]
    fn map_to_with<U, M>(self, transform: Option<M>) -> Option<U>
    where
        M: FnOnce(T) -> U,
    {
        nulls::map_to_with(self, transform)
    }
}

/// Runtime downcasting on type-erased optional values
pub trait AnyNullsExt: Sized {
    /// What a successful narrowing to `S` produces
    type Narrowed<S: Any>;

    /// Narrow to the type named by `target`; absent on mismatch.
    fn as_type_of<S: Any>(self, target: TypeDescriptor<S>) -> Self::Narrowed<S>;

    /// Shorthand for `as_type_of(TypeDescriptor::<S>::new())`.
    #[inline]
    fn as_type<S: Any>(self) -> Self::Narrowed<S> {
        self.as_type_of(TypeDescriptor::new())
    }
}

impl<'a> AnyNullsExt for Option<&'a dyn Any> {
    type Narrowed<S: Any> = Option<&'a S>;

    #[inline]
    fn as_type_of<S: Any>(self, target: TypeDescriptor<S>) -> Option<&'a S> {
        nulls::as_type(self, target)
    }
}

impl AnyNullsExt for Option<Box<dyn Any>> {
    type Narrowed<S: Any> = Option<Box<S>>;

    #[inline]
    fn as_type_of<S: Any>(self, target: TypeDescriptor<S>) -> Option<Box<S>> {
        nulls::as_type_boxed(self, target)
    }
}

/// Coalescing of optional numbers straight to the primitive
pub trait NumericNullsExt {
    type Primitive;

    /// The number, or `default` when absent.
    fn or_primitive(self, default: Self::Primitive) -> Self::Primitive;
}

impl NumericNullsExt for Option<i32> {
    type Primitive = i32;

    #[inline]
    fn or_primitive(self, default: i32) -> i32 {
        nulls::or_int(self, default)
    }
}

impl NumericNullsExt for Option<i64> {
    type Primitive = i64;

    #[inline]
    fn or_primitive(self, default: i64) -> i64 {
        nulls::or_long(self, default)
    }
}

impl NumericNullsExt for Option<f64> {
    type Primitive = f64;

    #[inline]
    fn or_primitive(self, default: f64) -> f64 {
        nulls::or_double(self, default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_null_checks() {
        let present = Some(1);
        let absent: Option<i32> = None;
        assert!(present.is_not_null());
        assert!(!present.is_null());
        assert!(absent.is_null());
        assert!(!absent.is_not_null());
    }

    #[test]
    fn test_method_chain() {
        let name = Some(String::from("  nullkit "));
        let trimmed = name
            .map_to(|s| s.trim().to_string())
            .when(|s| !s.is_empty())
            .or_get(|| String::from("anonymous"));
        assert_eq!(trimmed, "nullkit");

        let blank = Some(String::from("   "));
        let trimmed = blank
            .map_to(|s| s.trim().to_string())
            .when(|s| !s.is_empty())
            .or_get(|| String::from("anonymous"));
        assert_eq!(trimmed, "anonymous");
    }

    #[test]
    fn test_method_with_absent_auxiliaries() {
        assert_eq!(Some(3).when_with(None::<fn(&i32) -> bool>), None);
        assert_eq!(Some(3).map_to_with(None::<fn(i32) -> i32>), None);
        assert_eq!(None::<i32>.or_get_with(None::<fn() -> i32>), None);
        assert_eq!(None::<i32>.or_get_with(Some(|| 9)), Some(9));
    }

    #[test]
    fn test_method_optional_conversion() {
        assert_eq!(Some("x").to_optional(), Some("x"));
        assert_eq!(None::<&str>.when_not_null(), None);
    }

    #[test]
    fn test_as_type_on_borrowed() {
        let value: &dyn Any = &1234i32;
        assert_eq!(Some(value).as_type::<i32>(), Some(&1234));
        assert_eq!(Some(value).as_type::<f64>(), None);
        assert_eq!(None::<&dyn Any>.as_type::<i32>(), None);
    }

    #[test]
    fn test_as_type_on_boxed() {
        let value: Option<Box<dyn Any>> = Some(Box::new(vec![1u8, 2, 3]));
        let narrowed = value.as_type_of(TypeDescriptor::of::<Vec<u8>>());
        assert_eq!(narrowed.map(|v| v.len()), Some(3));
    }

    #[test]
    fn test_or_primitive() {
        assert_eq!(Some(5i32).or_primitive(0), 5);
        assert_eq!(None::<i64>.or_primitive(-1), -1);
        assert_eq!(None::<f64>.or_primitive(2.5), 2.5);
    }
}
