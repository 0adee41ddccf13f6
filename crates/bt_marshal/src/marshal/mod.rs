// -----------------------------------------------------------------------------
// Modules

mod kind;
mod scalar;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{MarshalKind, MarshalRef};
pub use scalar::Scalar;

use core::any::Any;

use serde_json::Value;

use crate::DeserializeError;
use crate::de::DeserializeDriver;

// -----------------------------------------------------------------------------
// Marshal

/// A value the engine can turn into JSON and rebuild from JSON.
///
/// Usually derived with [`derive::Marshal`](crate::derive::Marshal). Manual
/// impls pick a [`MarshalRef`] shape for serialization and do their own
/// coercion in [`apply_json`](Marshal::apply_json).
///
/// # Examples
///
/// ```
/// use bt_marshal::{Marshal, MarshalKind};
///
/// let values: [&dyn Marshal; 3] = [&Option::<u8>::None, &vec![1, 2], &"text".to_string()];
/// let kinds: Vec<_> = values.iter().map(|v| v.marshal_ref().kind()).collect();
///
/// assert_eq!(kinds, [MarshalKind::Null, MarshalKind::List, MarshalKind::Scalar]);
/// ```
pub trait Marshal: Any + Send + Sync {
    /// Classifies `self` into one of the fixed serialization shapes.
    fn marshal_ref(&self) -> MarshalRef<'_>;

    /// Overwrites `self` with the coerced contents of `value`.
    ///
    /// `null` leaves non-optional values unchanged. On error `self` keeps
    /// a valid value, but callers should not rely on which one.
    fn apply_json(
        &mut self,
        value: &Value,
        driver: &DeserializeDriver<'_>,
    ) -> Result<(), DeserializeError>;
}

impl dyn Marshal {
    /// Returns `true` if the underlying value is a `T`.
    #[inline]
    pub fn is<T: Marshal>(&self) -> bool {
        (self as &dyn Any).is::<T>()
    }

    /// Downcasts to a concrete `T`.
    #[inline]
    pub fn downcast_ref<T: Marshal>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}
