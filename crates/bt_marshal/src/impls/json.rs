use serde_json::Value;

use crate::de::DeserializeDriver;
use crate::{DeserializeError, Marshal, MarshalRef};

// Pre-built JSON keeps its structure in both directions.
impl Marshal for Value {
    #[inline]
    fn marshal_ref(&self) -> MarshalRef<'_> {
        match self {
            Value::Null => MarshalRef::Null,
            value => MarshalRef::Json(value),
        }
    }

    #[inline]
    fn apply_json(
        &mut self,
        value: &Value,
        _driver: &DeserializeDriver<'_>,
    ) -> Result<(), DeserializeError> {
        value.clone_into(self);
        Ok(())
    }
}
