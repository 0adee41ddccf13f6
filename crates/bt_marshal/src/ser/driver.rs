use serde_json::{Map as JsonMap, Value};

use crate::fault::{DETAIL_MESSAGE, ReportableError, STACK_TRACE, SUPPRESSED_EXCEPTIONS};
use crate::naming::NamingPolicy;
use crate::ops::{ListIter, Map, Struct};
use crate::{Marshal, MarshalConfig, MarshalRef, NamingError, Scalar, ScalarStyle};
use crate::SerializeError;

// -----------------------------------------------------------------------------
// SerializeDriver

/// Builds JSON trees with one policy and one configuration.
///
/// Depth starts at 0 for the root. Entering a container raises it by one
/// for the container's children; any non-null value deeper than
/// [`MarshalConfig::max_depth`] is written as `{}`.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
///
/// use bt_marshal::{MarshalConfig, ScalarStyle, naming::NamingPolicy, ser::SerializeDriver};
/// use serde_json::json;
///
/// let attributes = BTreeMap::from([("app.version".to_string(), 3_u32)]);
///
/// let policy = NamingPolicy::default();
/// let config = MarshalConfig::new().with_scalars(ScalarStyle::Stringify);
/// let json = SerializeDriver::new(&policy, &config).serialize(&attributes).unwrap();
///
/// assert_eq!(json, json!({ "app.version": "3" }));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SerializeDriver<'a> {
    policy: &'a NamingPolicy,
    config: &'a MarshalConfig,
}

impl<'a> SerializeDriver<'a> {
    #[inline]
    pub const fn new(policy: &'a NamingPolicy, config: &'a MarshalConfig) -> Self {
        Self { policy, config }
    }

    #[inline]
    pub const fn policy(&self) -> &'a NamingPolicy {
        self.policy
    }

    #[inline]
    pub const fn config(&self) -> &'a MarshalConfig {
        self.config
    }

    /// Serializes `value` as a root.
    #[inline]
    pub fn serialize(&self, value: &dyn Marshal) -> Result<Value, SerializeError> {
        self.serialize_at(value, 0)
    }

    fn serialize_at(&self, value: &dyn Marshal, depth: usize) -> Result<Value, SerializeError> {
        let shape = value.marshal_ref();
        match shape {
            MarshalRef::Null => return Ok(Value::Null),
            MarshalRef::Json(json) => return Ok(self.passthrough(json, depth)),
            _ if depth > self.config.max_depth => return Ok(self.truncated(depth)),
            _ => {}
        }

        let depth = depth + 1;
        match shape {
            MarshalRef::Null => Ok(Value::Null),
            MarshalRef::Scalar(scalar) => Ok(self.scalar(scalar)),
            MarshalRef::Json(json) => Ok(self.passthrough(json, depth)),
            MarshalRef::List(list) => ListIter::new(list)
                .map(|item| self.serialize_at(item, depth))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            MarshalRef::Map(map) => self.map(map, depth),
            MarshalRef::Fault(fault) => self.fault(fault, depth),
            MarshalRef::Struct(value) => self.structure(value, depth),
        }
    }

    #[inline]
    fn truncated(&self, depth: usize) -> Value {
        log::debug!(
            "value at depth {depth} exceeds max depth {}, written as an empty object",
            self.config.max_depth
        );
        Value::Object(JsonMap::new())
    }

    #[inline]
    fn scalar(&self, scalar: Scalar<'_>) -> Value {
        match self.config.scalars {
            ScalarStyle::Native => scalar.to_native(),
            ScalarStyle::Stringify => Value::String(scalar.to_text()),
        }
    }

    // Copies pre-built JSON; scalars stay native whatever the scalar style.
    fn passthrough(&self, value: &Value, depth: usize) -> Value {
        if value.is_null() {
            return Value::Null;
        }
        if depth > self.config.max_depth {
            return self.truncated(depth);
        }
        match value {
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|item| self.passthrough(item, depth + 1))
                    .collect(),
            ),
            Value::Object(object) => Value::Object(
                object
                    .iter()
                    .map(|(key, item)| {
                        let key = if self.config.rename_passthrough_keys {
                            self.policy.convert(key)
                        } else {
                            key.clone()
                        };
                        (key, self.passthrough(item, depth + 1))
                    })
                    .collect(),
            ),
            scalar => scalar.clone(),
        }
    }

    fn map(&self, map: &dyn Map, depth: usize) -> Result<Value, SerializeError> {
        let mut object = JsonMap::with_capacity(map.len());
        for (key, value) in map.entries() {
            object.insert(key.into_owned(), self.serialize_at(value, depth)?);
        }
        Ok(Value::Object(object))
    }

    fn fault(&self, fault: &ReportableError, depth: usize) -> Result<Value, SerializeError> {
        let mut object = JsonMap::with_capacity(3);
        object.insert(
            self.policy.convert(DETAIL_MESSAGE),
            self.serialize_at(&fault.message, depth)?,
        );
        object.insert(
            self.policy.convert(STACK_TRACE),
            self.serialize_at(&fault.stack_trace, depth)?,
        );
        object.insert(
            self.policy.convert(SUPPRESSED_EXCEPTIONS),
            self.serialize_at(&fault.suppressed, depth)?,
        );
        Ok(Value::Object(object))
    }

    fn structure(&self, value: &dyn Struct, depth: usize) -> Result<Value, SerializeError> {
        let info = value.struct_info();
        let mut object = JsonMap::with_capacity(info.field_len());
        for field in info.iter() {
            let wire_name = self.policy.field_name(info, field.name())?;
            let field_value = value
                .field(field.name())
                .ok_or_else(|| NamingError::UnknownField {
                    type_path: info.type_path(),
                    field: field.name().into(),
                })?;
            object.insert(String::from(&*wire_name), self.serialize_at(field_value, depth)?);
        }
        Ok(Value::Object(object))
    }
}
