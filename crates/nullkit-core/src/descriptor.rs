//! Target-type descriptors
//!
//! A [`TypeDescriptor`] names a concrete type at runtime so a value seen
//! only as `dyn Any` can be tested against it and narrowed without panicking.

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::marker::PhantomData;

/// Runtime descriptor of the concrete type `S`
///
/// Zero-sized and `Copy` regardless of `S`.
pub struct TypeDescriptor<S: Any> {
    _marker: PhantomData<fn() -> S>,
}

impl<S: Any> TypeDescriptor<S> {
    /// Descriptor for `S`
    #[inline]
    pub const fn new() -> Self {
        TypeDescriptor {
            _marker: PhantomData,
        }
    }

    /// Runtime identity of `S`, used for matching and equality
    #[inline]
    pub fn type_id(&self) -> TypeId {
        TypeId::of::<S>()
    }

    /// Fully qualified name of `S`, for diagnostics only
    #[inline]
    pub fn name(&self) -> &'static str {
        type_name::<S>()
    }

    /// Is the runtime type of `value` exactly `S`?
    ///
    /// Note that a `&Box<dyn Any>` coerced to `&dyn Any` describes the box,
    /// not its contents; deref the box first.
    #[inline]
    pub fn is_instance(&self, value: &dyn Any) -> bool {
        value.is::<S>()
    }

    /// Narrow a borrowed value to `S`, or `None` on mismatch
    pub fn cast<'a>(&self, value: &'a dyn Any) -> Option<&'a S> {
        let narrowed = value.downcast_ref::<S>();
        if narrowed.is_none() {
            trace_mismatch(self.name());
        }
        narrowed
    }

    /// Narrow an owned value to `S`, handing the value back on mismatch
    pub fn cast_boxed(&self, value: Box<dyn Any>) -> Result<Box<S>, Box<dyn Any>> {
        value.downcast::<S>().map_err(|original| {
            trace_mismatch(self.name());
            original
        })
    }
}

impl TypeDescriptor<()> {
    /// Descriptor for `S`, usable without naming the descriptor type
    #[inline]
    pub const fn of<S: Any>() -> TypeDescriptor<S> {
        TypeDescriptor::new()
    }
}

#[inline]
fn trace_mismatch(expected: &'static str) {
    #[cfg(feature = "tracing")]
    tracing::trace!(
        target: "nullkit::cast",
        expected,
        "value is not an instance of the target type"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = expected;
}

impl<S: Any> Clone for TypeDescriptor<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Any> Copy for TypeDescriptor<S> {}

impl<S: Any> Default for TypeDescriptor<S> {
    fn default() -> Self {
        TypeDescriptor::new()
    }
}

impl<S: Any, U: Any> PartialEq<TypeDescriptor<U>> for TypeDescriptor<S> {
    fn eq(&self, other: &TypeDescriptor<U>) -> bool {
        self.type_id() == other.type_id()
    }
}

impl<S: Any> Eq for TypeDescriptor<S> {}

impl<S: Any> fmt::Debug for TypeDescriptor<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type({})", self.name())
    }
}

impl<S: Any> fmt::Display for TypeDescriptor<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_instance() {
        let value: &dyn Any = &1234i32;
        assert!(TypeDescriptor::<i32>::new().is_instance(value));
        assert!(!TypeDescriptor::<f64>::new().is_instance(value));
        assert!(!TypeDescriptor::<i64>::new().is_instance(value));
    }

    #[test]
    fn test_cast_borrowed() {
        let value: &dyn Any = &String::from("text");
        assert_eq!(
            TypeDescriptor::of::<String>().cast(value).map(String::as_str),
            Some("text")
        );
        assert!(TypeDescriptor::of::<&str>().cast(value).is_none());
    }

    #[test]
    fn test_cast_boxed_returns_original_on_mismatch() {
        let value: Box<dyn Any> = Box::new(7u8);
        let original = TypeDescriptor::of::<u16>().cast_boxed(value).unwrap_err();
        let narrowed = TypeDescriptor::of::<u8>().cast_boxed(original).unwrap();
        assert_eq!(*narrowed, 7);
    }

    #[test]
    fn test_equality_by_type_id() {
        assert_eq!(TypeDescriptor::of::<i32>(), TypeDescriptor::<i32>::default());
        assert_ne!(TypeDescriptor::of::<i32>(), TypeDescriptor::of::<u32>());
    }

    #[test]
    fn test_display_names_the_type() {
        assert_eq!(TypeDescriptor::of::<f64>().to_string(), "f64");
        assert_eq!(format!("{:?}", TypeDescriptor::of::<bool>()), "Type(bool)");
    }
}
