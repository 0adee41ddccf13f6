use serde_json::Value;

use crate::naming::NamingPolicy;
use crate::ops::Struct;
use crate::{CoercionError, DeserializeError, FieldErrorPolicy, Marshal, MarshalConfig, NamingError};

// -----------------------------------------------------------------------------
// DeserializeDriver

/// Rebuilds values with one policy and one configuration.
///
/// # Examples
///
/// ```
/// use bt_marshal::{derive::Marshal, MarshalConfig, naming::NamingPolicy, de::DeserializeDriver};
/// use serde_json::json;
///
/// #[derive(Marshal, Default, Debug, PartialEq)]
/// struct SourceCode {
///     start_line: u32,
///     source_code_full_path: Option<String>,
/// }
///
/// let policy = NamingPolicy::default();
/// let config = MarshalConfig::default();
/// let driver = DeserializeDriver::new(&policy, &config);
///
/// let code: SourceCode = driver
///     .deserialize(&json!({ "start-line": "123", "unknown-key": true }))
///     .unwrap();
///
/// assert_eq!(code, SourceCode { start_line: 123, source_code_full_path: None });
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DeserializeDriver<'a> {
    policy: &'a NamingPolicy,
    config: &'a MarshalConfig,
}

impl<'a> DeserializeDriver<'a> {
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

    /// Builds a fresh `T` from `value`.
    ///
    /// On error nothing is returned; the partially filled value is dropped.
    #[inline]
    pub fn deserialize<T: Marshal + Default>(&self, value: &Value) -> Result<T, DeserializeError> {
        let mut out = T::default();
        out.apply_json(value, self)?;
        Ok(out)
    }

    /// Applies a JSON object to the declared fields of `target`.
    ///
    /// This is the body of every derived [`Marshal::apply_json`] for structs.
    pub fn apply_struct(&self, target: &mut dyn Struct, value: &Value) -> Result<(), DeserializeError> {
        let object = match value {
            Value::Object(object) => object,
            Value::Null => return Ok(()),
            other => return Err(CoercionError::mismatch("object", other).into()),
        };

        let info = target.struct_info();
        for field in info.iter() {
            let wire_name = self.policy.field_name(info, field.name())?;
            // An accepted declared name wins over the wire name.
            let declared = if self.config.accept_declared_names {
                object.get(field.name())
            } else {
                None
            };
            let Some(raw) = declared.or_else(|| object.get(&*wire_name)) else {
                continue;
            };

            let slot = target
                .field_mut(field.name())
                .ok_or_else(|| NamingError::UnknownField {
                    type_path: info.type_path(),
                    field: field.name().into(),
                })?;

            if let Err(source) = slot.apply_json(raw, self) {
                self.field_failed(DeserializeError::Field {
                    type_path: info.type_path(),
                    field: field.name(),
                    wire_name,
                    source: Box::new(source),
                })?;
            }
        }
        Ok(())
    }

    /// Handles the failure of one field under [`MarshalConfig::field_errors`].
    ///
    /// Returns `error` under [`FieldErrorPolicy::Abort`]; under
    /// [`FieldErrorPolicy::Skip`] logs it and returns `Ok`, leaving the
    /// field as it was.
    pub fn field_failed(&self, error: DeserializeError) -> Result<(), DeserializeError> {
        match self.config.field_errors {
            FieldErrorPolicy::Abort => Err(error),
            FieldErrorPolicy::Skip => {
                log::warn!("skipped undeserializable field: {error}");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;

    use serde_json::json;

    use super::DeserializeDriver;
    use crate::derive::Marshal;
    use crate::naming::{Identity, NamingPolicy};
    use crate::ser::SerializeDriver;
    use crate::{CoercionError, DeserializeError, FieldErrorPolicy, MarshalConfig, ScalarStyle};

    #[derive(Marshal, Debug, Clone, Default, PartialEq)]
    struct SourceCode {
        start_line: u32,
        source_code_full_path: Option<String>,
    }

    #[derive(Marshal, Debug, Default, PartialEq)]
    struct Report {
        uuid: String,
        #[marshal(rename = "_rxid")]
        rx_id: Option<String>,
        source_code: BTreeMap<String, SourceCode>,
        thread_ids: Vec<i64>,
        level: Level,
        #[marshal(skip)]
        local_only: u8,
    }

    #[derive(Marshal, Debug, Clone, Copy, Default, PartialEq, Eq)]
    enum Level {
        #[default]
        Info,
        #[marshal(rename = "warning")]
        Warn,
    }

    #[derive(Marshal, Debug, Default, PartialEq)]
    struct Wrapper<T> {
        inner_value: T,
    }

    fn with(config: MarshalConfig, run: impl FnOnce(DeserializeDriver<'_>, SerializeDriver<'_>)) {
        let policy = NamingPolicy::default();
        run(
            DeserializeDriver::new(&policy, &config),
            SerializeDriver::new(&policy, &config),
        );
    }

    fn sample() -> Report {
        Report {
            uuid: "a-1".into(),
            rx_id: Some("rx".into()),
            source_code: BTreeMap::from([(
                "main".into(),
                SourceCode {
                    start_line: 123,
                    source_code_full_path: Some("/src/main.rs".into()),
                },
            )]),
            thread_ids: vec![1, 2, 3],
            level: Level::Warn,
            local_only: 0,
        }
    }

    #[test]
    fn nested_round_trip() {
        with(MarshalConfig::new(), |de, ser| {
            let json = ser.serialize(&sample()).unwrap();
            assert_eq!(
                json,
                json!({
                    "uuid": "a-1",
                    "_rxid": "rx",
                    "source-code": {
                        "main": { "start-line": 123, "source-code-full-path": "/src/main.rs" }
                    },
                    "thread-ids": [1, 2, 3],
                    "level": "warning",
                })
            );

            let back: Report = de.deserialize(&json).unwrap();
            assert_eq!(back, sample());
        });
    }

    #[test]
    fn missing_and_null_keys_keep_defaults() {
        with(MarshalConfig::new(), |de, _| {
            let report: Report = de
                .deserialize(&json!({ "uuid": "u", "thread-ids": null, "extra": [1] }))
                .unwrap();
            assert_eq!(report.uuid, "u");
            assert!(report.thread_ids.is_empty());
            assert_eq!(report.level, Level::Info);
            assert_eq!(report.rx_id, None);
        });
    }

    #[test]
    fn skipped_field_is_neither_written_nor_read() {
        with(MarshalConfig::new(), |de, ser| {
            let mut report = sample();
            report.local_only = 7;
            let json = ser.serialize(&report).unwrap();
            assert!(json.get("local-only").is_none());
            assert!(json.get("localOnly").is_none());

            let back: Report = de.deserialize(&json!({ "local-only": 9 })).unwrap();
            assert_eq!(back.local_only, 0);
        });
    }

    #[test]
    fn declared_names_are_accepted() {
        let input = json!({ "startLine": 7, "source-code-full-path": "p" });

        with(MarshalConfig::new(), |de, _| {
            let code: SourceCode = de.deserialize(&input).unwrap();
            assert_eq!(code.start_line, 7);
            assert_eq!(code.source_code_full_path.as_deref(), Some("p"));
        });

        with(MarshalConfig::new().with_accept_declared_names(false), |de, _| {
            let code: SourceCode = de.deserialize(&input).unwrap();
            assert_eq!(code.start_line, 0);
        });
    }

    #[test]
    fn declared_name_wins_over_wire_name() {
        let input = json!({ "startLine": 1, "start-line": 2 });

        with(MarshalConfig::new(), |de, _| {
            let code: SourceCode = de.deserialize(&input).unwrap();
            assert_eq!(code.start_line, 1);
        });

        with(MarshalConfig::new().with_accept_declared_names(false), |de, _| {
            let code: SourceCode = de.deserialize(&input).unwrap();
            assert_eq!(code.start_line, 2);
        });
    }

    #[test]
    fn field_error_names_field_and_wire_name() {
        with(MarshalConfig::new(), |de, _| {
            let err = de
                .deserialize::<SourceCode>(&json!({ "start-line": "abc" }))
                .unwrap_err();

            let DeserializeError::Field {
                field, wire_name, ..
            } = &err
            else {
                panic!("unexpected error: {err:?}");
            };
            assert_eq!(*field, "startLine");
            assert_eq!(&**wire_name, "start-line");
            assert_eq!(err.wire_path(), "start-line");
            assert!(matches!(
                err.root_cause(),
                DeserializeError::Coercion(CoercionError::Unparsable { .. })
            ));
        });
    }

    #[test]
    fn nested_errors_carry_the_wire_path() {
        with(MarshalConfig::new(), |de, _| {
            let err = de
                .deserialize::<Report>(&json!({
                    "source-code": { "main": { "start-line": -1 } }
                }))
                .unwrap_err();
            assert_eq!(err.wire_path(), "source-code[\"main\"].start-line");

            let err = de
                .deserialize::<Report>(&json!({ "thread-ids": [1, "x"] }))
                .unwrap_err();
            assert_eq!(err.wire_path(), "thread-ids[1]");
        });
    }

    #[test]
    fn skip_policy_keeps_other_fields() {
        let config = MarshalConfig::new().with_field_errors(FieldErrorPolicy::Skip);
        with(config, |de, _| {
            let report: Report = de
                .deserialize(&json!({
                    "uuid": "u",
                    "thread-ids": [1, {}],
                    "level": "fatal",
                }))
                .unwrap();
            assert_eq!(report.uuid, "u");
            assert!(report.thread_ids.is_empty());
            assert_eq!(report.level, Level::Info);
        });
    }

    #[test]
    fn failed_collection_is_not_partially_assigned() {
        with(MarshalConfig::new(), |de, _| {
            let mut report = sample();
            let err = crate::Marshal::apply_json(
                &mut report,
                &json!({ "uuid": "b-2", "thread-ids": [9, "x"] }),
                &de,
            );
            assert!(err.is_err());
            assert_eq!(report.uuid, "b-2");
            assert_eq!(report.thread_ids, vec![1, 2, 3]);
        });
    }

    #[test]
    fn root_must_be_an_object() {
        with(MarshalConfig::new(), |de, _| {
            let err = de.deserialize::<SourceCode>(&json!([1])).unwrap_err();
            assert_eq!(
                err,
                DeserializeError::Coercion(CoercionError::Mismatch {
                    expected: "object",
                    found: crate::JsonKind::Array,
                })
            );
            assert_eq!(
                de.deserialize::<SourceCode>(&json!(null)).unwrap(),
                SourceCode::default()
            );
        });
    }

    #[test]
    fn stringified_structs_read_back() {
        with(MarshalConfig::new().with_scalars(ScalarStyle::Stringify), |de, ser| {
            let json = ser.serialize(&sample()).unwrap();
            assert_eq!(json["thread-ids"], json!(["1", "2", "3"]));
            assert_eq!(json["source-code"]["main"]["start-line"], json!("123"));

            let back: Report = de.deserialize(&json).unwrap();
            assert_eq!(back, sample());
        });
    }

    #[test]
    fn unit_enum_values() {
        with(MarshalConfig::new(), |de, _| {
            assert_eq!(de.deserialize::<Level>(&json!("warning")).unwrap(), Level::Warn);
            assert_eq!(de.deserialize::<Level>(&json!("Info")).unwrap(), Level::Info);
            // Case matters without `ignore_case`.
            assert!(de.deserialize::<Level>(&json!("info")).is_err());
            assert!(de.deserialize::<Level>(&json!(1)).is_err());
        });
    }

    #[test]
    fn generic_structs() {
        with(MarshalConfig::new(), |de, ser| {
            let value = Wrapper { inner_value: vec![String::from("x")] };
            let json = ser.serialize(&value).unwrap();
            assert_eq!(json, json!({ "inner-value": ["x"] }));
            assert_eq!(de.deserialize::<Wrapper<Vec<String>>>(&json).unwrap(), value);

            let number = Wrapper { inner_value: 5_u8 };
            assert_eq!(ser.serialize(&number).unwrap(), json!({ "inner-value": 5 }));
        });
    }

    #[test]
    fn policy_converter_applies_both_ways() {
        let policy = NamingPolicy::new(Identity);
        let config = MarshalConfig::new();
        let json = SerializeDriver::new(&policy, &config)
            .serialize(&SourceCode { start_line: 1, source_code_full_path: None })
            .unwrap();
        assert_eq!(json, json!({ "startLine": 1, "sourceCodeFullPath": null }));

        let back: SourceCode = DeserializeDriver::new(&policy, &config).deserialize(&json).unwrap();
        assert_eq!(back.start_line, 1);
    }
}
