use serde_json::{Number, Value};

// -----------------------------------------------------------------------------
// Scalar

/// A borrowed scalar value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Str(&'a str),
}

impl Scalar<'_> {
    /// Native JSON form. Non-finite floats have none and become `null`.
    pub fn to_native(self) -> Value {
        match self {
            Self::Bool(v) => Value::Bool(v),
            Self::Int(v) => Value::from(v),
            Self::UInt(v) => Value::from(v),
            Self::Float(v) => Number::from_f64(v).map_or(Value::Null, Value::Number),
            Self::Char(v) => Value::String(v.into()),
            Self::Str(v) => Value::String(v.into()),
        }
    }

    /// Text form, as used for stringified attributes.
    pub fn to_text(self) -> String {
        match self {
            Self::Bool(v) => v.to_string(),
            Self::Int(v) => v.to_string(),
            Self::UInt(v) => v.to_string(),
            Self::Float(v) => v.to_string(),
            Self::Char(v) => v.into(),
            Self::Str(v) => v.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Scalar;

    #[test]
    fn native_and_text_forms() {
        assert_eq!(Scalar::Int(-3).to_native(), json!(-3));
        assert_eq!(Scalar::UInt(123).to_native(), json!(123));
        assert_eq!(Scalar::Float(1.5).to_native(), json!(1.5));
        assert_eq!(Scalar::Float(f64::NAN).to_native(), json!(null));
        assert_eq!(Scalar::Char('x').to_native(), json!("x"));

        assert_eq!(Scalar::Bool(true).to_text(), "true");
        assert_eq!(Scalar::UInt(123).to_text(), "123");
        assert_eq!(Scalar::Float(2.25).to_text(), "2.25");
        assert_eq!(Scalar::Str("ok").to_text(), "ok");
    }
}
