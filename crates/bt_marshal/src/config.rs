use serde::{Deserialize, Serialize};

// -----------------------------------------------------------------------------
// ScalarStyle

/// How scalars of declared fields are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScalarStyle {
    /// Numbers and booleans stay native JSON values.
    #[default]
    Native,
    /// Every scalar becomes a JSON string, as attribute payloads expect.
    Stringify,
}

// -----------------------------------------------------------------------------
// FieldErrorPolicy

/// What the deserializer does when one field fails to coerce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldErrorPolicy {
    /// Return the error; the caller gets no instance.
    #[default]
    Abort,
    /// Log at `warn` and keep the field's default value.
    Skip,
}

// -----------------------------------------------------------------------------
// MarshalConfig

/// Engine settings shared by the serializer and the deserializer.
///
/// Loadable from the host's own config file:
///
/// ```
/// use bt_marshal::{FieldErrorPolicy, MarshalConfig, ScalarStyle};
///
/// let config: MarshalConfig =
///     serde_json::from_str(r#"{ "scalars": "stringify", "field-errors": "skip" }"#).unwrap();
///
/// assert_eq!(config.scalars, ScalarStyle::Stringify);
/// assert_eq!(config.field_errors, FieldErrorPolicy::Skip);
/// assert_eq!(config.max_depth, MarshalConfig::DEFAULT_MAX_DEPTH);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MarshalConfig {
    /// Deepest nesting level serialized; anything below becomes `{}`.
    pub max_depth: usize,
    pub scalars: ScalarStyle,
    /// Pass the object keys of pre-built JSON values through the naming policy.
    pub rename_passthrough_keys: bool,
    /// On deserialize, also read the declared field name; it wins over the wire name.
    pub accept_declared_names: bool,
    pub field_errors: FieldErrorPolicy,
}

impl MarshalConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 5;

    /// The default configuration.
    #[inline]
    pub const fn new() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            scalars: ScalarStyle::Native,
            rename_passthrough_keys: false,
            accept_declared_names: true,
            field_errors: FieldErrorPolicy::Abort,
        }
    }

    #[inline]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[inline]
    pub const fn with_scalars(mut self, scalars: ScalarStyle) -> Self {
        self.scalars = scalars;
        self
    }

    #[inline]
    pub const fn with_rename_passthrough_keys(mut self, enabled: bool) -> Self {
        self.rename_passthrough_keys = enabled;
        self
    }

    #[inline]
    pub const fn with_accept_declared_names(mut self, enabled: bool) -> Self {
        self.accept_declared_names = enabled;
        self
    }

    #[inline]
    pub const fn with_field_errors(mut self, policy: FieldErrorPolicy) -> Self {
        self.field_errors = policy;
        self
    }

    /// A `'static` default instance for the free-function entry points.
    #[inline]
    pub(crate) fn default_ref() -> &'static Self {
        static DEFAULT: MarshalConfig = MarshalConfig::new();
        &DEFAULT
    }
}

impl Default for MarshalConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldErrorPolicy, MarshalConfig, ScalarStyle};

    #[test]
    fn defaults() {
        let config = MarshalConfig::default();
        assert_eq!(config.max_depth, 5);
        assert_eq!(config.scalars, ScalarStyle::Native);
        assert!(!config.rename_passthrough_keys);
        assert!(config.accept_declared_names);
        assert_eq!(config.field_errors, FieldErrorPolicy::Abort);
    }

    #[test]
    fn kebab_case_keys() {
        let config = MarshalConfig::new()
            .with_max_depth(2)
            .with_rename_passthrough_keys(true);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["max-depth"], 2);
        assert_eq!(json["rename-passthrough-keys"], true);
        assert_eq!(json["scalars"], "native");

        let back: MarshalConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }
}
