//! Best-effort conversion of JSON scalars. `Ok(None)` means `null`.

use serde_json::{Number, Value};

use crate::CoercionError;

fn narrow<T, N>(n: N, expected: &'static str) -> Result<T, CoercionError>
where
    T: TryFrom<N>,
    N: ToString + Copy,
{
    T::try_from(n).map_err(|_| CoercionError::OutOfRange {
        expected,
        value: n.to_string(),
    })
}

fn integer_from_number<T>(n: &Number, expected: &'static str) -> Result<T, CoercionError>
where
    T: TryFrom<i64> + TryFrom<u64>,
{
    if let Some(v) = n.as_i64() {
        return narrow(v, expected);
    }
    if let Some(v) = n.as_u64() {
        return narrow(v, expected);
    }
    match n.as_f64() {
        Some(v) if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 => {
            narrow(v as i64, expected)
        }
        Some(v) if v.fract() == 0.0 && v >= 0.0 && v < u64::MAX as f64 => narrow(v as u64, expected),
        _ => Err(CoercionError::Unparsable {
            expected,
            raw: n.to_string(),
        }),
    }
}

pub(crate) fn integer<T>(value: &Value, expected: &'static str) -> Result<Option<T>, CoercionError>
where
    T: TryFrom<i64> + TryFrom<u64>,
{
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => integer_from_number(n, expected).map(Some),
        Value::String(raw) => {
            let trimmed = raw.trim();
            if let Ok(v) = trimmed.parse::<i64>() {
                narrow(v, expected).map(Some)
            } else if let Ok(v) = trimmed.parse::<u64>() {
                narrow(v, expected).map(Some)
            } else {
                Err(CoercionError::Unparsable {
                    expected,
                    raw: raw.clone(),
                })
            }
        }
        other => Err(CoercionError::mismatch(expected, other)),
    }
}

pub(crate) fn float(value: &Value, expected: &'static str) -> Result<Option<f64>, CoercionError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n.as_f64().map(Some).ok_or_else(|| CoercionError::Unparsable {
            expected,
            raw: n.to_string(),
        }),
        Value::String(raw) => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| CoercionError::Unparsable {
                expected,
                raw: raw.clone(),
            }),
        other => Err(CoercionError::mismatch(expected, other)),
    }
}

pub(crate) fn boolean(value: &Value) -> Result<Option<bool>, CoercionError> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(v) => Ok(Some(*v)),
        Value::String(raw) if raw.eq_ignore_ascii_case("true") => Ok(Some(true)),
        Value::String(raw) if raw.eq_ignore_ascii_case("false") => Ok(Some(false)),
        Value::String(raw) => Err(CoercionError::Unparsable {
            expected: "bool",
            raw: raw.clone(),
        }),
        other => Err(CoercionError::mismatch("bool", other)),
    }
}

pub(crate) fn character(value: &Value) -> Result<Option<char>, CoercionError> {
    match value {
        Value::Null => Ok(None),
        Value::String(raw) => {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Ok(Some(ch)),
                _ => Err(CoercionError::Unparsable {
                    expected: "char",
                    raw: raw.clone(),
                }),
            }
        }
        other => Err(CoercionError::mismatch("char", other)),
    }
}

pub(crate) fn text(value: &Value) -> Result<Option<String>, CoercionError> {
    match value {
        Value::Null => Ok(None),
        Value::String(raw) => Ok(Some(raw.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(v) => Ok(Some(v.to_string())),
        other => Err(CoercionError::mismatch("string", other)),
    }
}
