use serde_json::Value;

use crate::de::DeserializeDriver;
use crate::naming::NamingPolicy;
use crate::ser::SerializeDriver;
use crate::{DeserializeError, Marshal, MarshalConfig, MarshalError, SerializeError};

// -----------------------------------------------------------------------------
// Marshaller

/// A naming policy and a configuration bundled into one entry point.
///
/// # Examples
///
/// ```
/// use bt_marshal::{Marshaller, derive::Marshal};
///
/// #[derive(Marshal, Default, Debug, PartialEq)]
/// struct Breadcrumb {
///     message: String,
///     level: u8,
/// }
///
/// let marshaller = Marshaller::default();
/// let text = marshaller
///     .to_json_string(&Breadcrumb { message: "tap".into(), level: 2 })
///     .unwrap();
/// assert_eq!(text, r#"{"message":"tap","level":2}"#);
///
/// let back: Breadcrumb = marshaller.from_json_str(&text).unwrap();
/// assert_eq!(back.level, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Marshaller {
    policy: NamingPolicy,
    config: MarshalConfig,
}

impl Marshaller {
    #[inline]
    pub fn new(policy: NamingPolicy, config: MarshalConfig) -> Self {
        Self { policy, config }
    }

    #[inline]
    pub fn policy(&self) -> &NamingPolicy {
        &self.policy
    }

    #[inline]
    pub fn config(&self) -> &MarshalConfig {
        &self.config
    }

    #[inline]
    pub fn serializer(&self) -> SerializeDriver<'_> {
        SerializeDriver::new(&self.policy, &self.config)
    }

    #[inline]
    pub fn deserializer(&self) -> DeserializeDriver<'_> {
        DeserializeDriver::new(&self.policy, &self.config)
    }

    #[inline]
    pub fn serialize(&self, value: &dyn Marshal) -> Result<Value, SerializeError> {
        self.serializer().serialize(value)
    }

    /// Serializes `value` to compact JSON text.
    pub fn to_json_string(&self, value: &dyn Marshal) -> Result<String, MarshalError> {
        Ok(serde_json::to_string(&self.serialize(value)?)?)
    }

    #[inline]
    pub fn deserialize<T: Marshal + Default>(&self, value: &Value) -> Result<T, DeserializeError> {
        self.deserializer().deserialize(value)
    }

    /// Parses JSON text and deserializes a `T` from it.
    pub fn from_json_str<T: Marshal + Default>(&self, text: &str) -> Result<T, MarshalError> {
        let value: Value = serde_json::from_str(text)?;
        Ok(self.deserialize(&value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::Marshaller;
    use crate::MarshalError;

    #[test]
    fn malformed_text_is_a_json_error() {
        let error = Marshaller::default()
            .from_json_str::<Vec<u8>>("[1, 2")
            .unwrap_err();
        assert!(matches!(error, MarshalError::Json(_)));
    }

    #[test]
    fn coercion_failure_is_a_deserialize_error() {
        let error = Marshaller::default()
            .from_json_str::<Vec<u8>>(r#"["x"]"#)
            .unwrap_err();
        assert!(matches!(error, MarshalError::Deserialize(_)));
    }
}
