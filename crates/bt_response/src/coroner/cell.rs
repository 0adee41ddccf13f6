use bt_marshal::JsonKind;
use serde_json::Value;

use super::CellError;

// -----------------------------------------------------------------------------
// CellValue

/// A type a response cell can be read as.
///
/// The cast is strict: a string cell is never parsed as a number and a
/// number cell is never printed as a string.
pub trait CellValue: Sized {
    /// Name of the expected JSON shape, used in [`CellError::Mismatch`].
    const EXPECTED: &'static str;

    fn from_cell(value: &Value) -> Result<Self, CellError>;
}

#[inline]
fn mismatch<T: CellValue>(found: &Value) -> CellError {
    CellError::Mismatch {
        expected: T::EXPECTED,
        found: JsonKind::of(found),
    }
}

impl CellValue for String {
    const EXPECTED: &'static str = "string";

    fn from_cell(value: &Value) -> Result<Self, CellError> {
        match value {
            Value::String(text) => Ok(text.clone()),
            other => Err(mismatch::<Self>(other)),
        }
    }
}

impl CellValue for bool {
    const EXPECTED: &'static str = "boolean";

    fn from_cell(value: &Value) -> Result<Self, CellError> {
        value.as_bool().ok_or_else(|| mismatch::<Self>(value))
    }
}

impl CellValue for Value {
    const EXPECTED: &'static str = "any value";

    #[inline]
    fn from_cell(value: &Value) -> Result<Self, CellError> {
        Ok(value.clone())
    }
}

impl<T: CellValue> CellValue for Option<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn from_cell(value: &Value) -> Result<Self, CellError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_cell(other).map(Some),
        }
    }
}

macro_rules! impl_cell_integer {
    ($($ty:ty),*) => {$(
        impl CellValue for $ty {
            const EXPECTED: &'static str = stringify!($ty);

            fn from_cell(value: &Value) -> Result<Self, CellError> {
                value
                    .as_i64()
                    .and_then(|n| <$ty>::try_from(n).ok())
                    .or_else(|| value.as_u64().and_then(|n| <$ty>::try_from(n).ok()))
                    .ok_or_else(|| mismatch::<Self>(value))
            }
        }
    )*};
}

impl_cell_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl CellValue for f64 {
    const EXPECTED: &'static str = "f64";

    fn from_cell(value: &Value) -> Result<Self, CellError> {
        value.as_f64().ok_or_else(|| mismatch::<Self>(value))
    }
}

impl CellValue for f32 {
    const EXPECTED: &'static str = "f32";

    fn from_cell(value: &Value) -> Result<Self, CellError> {
        value
            .as_f64()
            .map(|n| n as f32)
            .ok_or_else(|| mismatch::<Self>(value))
    }
}
