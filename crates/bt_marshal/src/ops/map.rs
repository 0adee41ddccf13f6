use alloc::borrow::Cow;

use crate::{CoercionError, Marshal};

// -----------------------------------------------------------------------------
// Map

/// A key-value mapping serialized as a JSON object.
pub trait Map: Marshal {
    fn len(&self) -> usize;

    /// Iterates entries with their keys in wire form.
    fn entries(&self) -> Box<dyn Iterator<Item = (Cow<'_, str>, &dyn Marshal)> + '_>;
}

// -----------------------------------------------------------------------------
// MapKey

/// A map key type with a textual wire form.
///
/// Integer keys are written in decimal and parsed back from it.
pub trait MapKey: Sized + Send + Sync + 'static {
    fn to_key(&self) -> Cow<'_, str>;

    fn from_key(key: &str) -> Result<Self, CoercionError>;
}

impl MapKey for String {
    #[inline]
    fn to_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }

    #[inline]
    fn from_key(key: &str) -> Result<Self, CoercionError> {
        Ok(key.into())
    }
}

macro_rules! impl_map_key_int {
    ($($ty:ty),* $(,)?) => {$(
        impl MapKey for $ty {
            #[inline]
            fn to_key(&self) -> Cow<'_, str> {
                Cow::Owned(self.to_string())
            }

            fn from_key(key: &str) -> Result<Self, CoercionError> {
                key.parse().map_err(|_| CoercionError::Unparsable {
                    expected: stringify!($ty),
                    raw: key.into(),
                })
            }
        }
    )*};
}

impl_map_key_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::MapKey;
    use crate::CoercionError;

    #[test]
    fn integer_keys_use_decimal_text() {
        assert_eq!(42_u16.to_key(), "42");
        assert_eq!(i32::from_key("-7"), Ok(-7));
        assert_eq!(
            u8::from_key("300"),
            Err(CoercionError::Unparsable {
                expected: "u8",
                raw: "300".into()
            })
        );
        assert_eq!(String::from_key("any key").unwrap(), "any key");
    }
}
