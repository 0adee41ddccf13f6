use serde_json::Value;

use crate::ops::UnitEnum;
use crate::{CoercionError, DeserializeError};

/// Parses a unit enum from a variant wire name.
///
/// Case is ignored when the enum is derived with `#[marshal(ignore_case)]`.
pub fn parse_unit_enum<E: UnitEnum>(raw: &str) -> Result<E, CoercionError> {
    let info = E::enum_info();
    info.index_of(raw)
        .and_then(E::from_variant_index)
        .ok_or_else(|| CoercionError::UnknownVariant {
            type_path: info.type_path(),
            raw: raw.into(),
        })
}

/// The body of every derived [`Marshal::apply_json`](crate::Marshal::apply_json)
/// for unit enums.
pub fn apply_unit_enum<E: UnitEnum>(target: &mut E, value: &Value) -> Result<(), DeserializeError> {
    match value {
        Value::String(raw) => {
            *target = parse_unit_enum(raw)?;
            Ok(())
        }
        Value::Null => Ok(()),
        other => Err(CoercionError::mismatch("string", other).into()),
    }
}
