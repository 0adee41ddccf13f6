//! Error information as payload data.
//!
//! Host errors are converted into a [`ReportableError`] at the boundary
//! ([`ReportableError::from_error`]); the serializer only ever sees the
//! data type and writes it with a fixed three-key shape:
//!
//! ```text
//! {"detail-message": <string|null>, "stack-trace": [...], "suppressed-exceptions": [...]}
//! ```
//!
//! (keys shown after the default naming policy).

use core::error::Error;
use core::mem;

use serde_json::{Map as JsonMap, Value};

use crate::de::DeserializeDriver;
use crate::derive::Marshal;
use crate::{CoercionError, DeserializeError, Marshal, MarshalRef};

/// Declared name of the message key.
pub const DETAIL_MESSAGE: &str = "detailMessage";
/// Declared name of the stack frame list key.
pub const STACK_TRACE: &str = "stackTrace";
/// Declared name of the nested error list key.
pub const SUPPRESSED_EXCEPTIONS: &str = "suppressedExceptions";

// -----------------------------------------------------------------------------
// StackFrame

/// One frame of a captured stack.
#[derive(Marshal, Debug, Clone, Default, PartialEq, Eq)]
pub struct StackFrame {
    pub declaring_class: String,
    pub method_name: String,
    pub file_name: Option<String>,
    pub line_number: i32,
}

impl StackFrame {
    pub fn new(declaring_class: impl Into<String>, method_name: impl Into<String>) -> Self {
        Self {
            declaring_class: declaring_class.into(),
            method_name: method_name.into(),
            file_name: None,
            line_number: 0,
        }
    }

    pub fn at(mut self, file_name: impl Into<String>, line_number: i32) -> Self {
        self.file_name = Some(file_name.into());
        self.line_number = line_number;
        self
    }
}

// -----------------------------------------------------------------------------
// ReportableError

/// A fault reported as data: message, stack frames and nested errors.
///
/// # Examples
///
/// ```
/// use bt_marshal::{fault::ReportableError, naming::NamingPolicy};
///
/// let json = bt_marshal::serialize(&NamingPolicy::default(), &ReportableError::new("test")).unwrap();
///
/// assert_eq!(
///     serde_json::to_string(&json).unwrap(),
///     r#"{"detail-message":"test","stack-trace":[],"suppressed-exceptions":[]}"#,
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportableError {
    pub message: Option<String>,
    pub stack_trace: Vec<StackFrame>,
    pub suppressed: Vec<ReportableError>,
}

impl ReportableError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn with_frame(mut self, frame: StackFrame) -> Self {
        self.stack_trace.push(frame);
        self
    }

    pub fn with_suppressed(mut self, suppressed: ReportableError) -> Self {
        self.suppressed.push(suppressed);
        self
    }

    /// Converts a host error and its `source()` chain.
    ///
    /// The message is the `Display` text of `error`; each source becomes
    /// the single suppressed entry of the one before it.
    ///
    /// ```
    /// use bt_marshal::fault::ReportableError;
    ///
    /// let io = std::io::Error::other("disk full");
    /// let fault = ReportableError::from_error(&io);
    ///
    /// assert_eq!(fault.message.as_deref(), Some("disk full"));
    /// assert!(fault.suppressed.is_empty());
    /// ```
    pub fn from_error(error: &(dyn Error + 'static)) -> Self {
        let mut chain = Vec::new();
        let mut current = Some(error);
        while let Some(error) = current {
            chain.push(Self::new(error.to_string()));
            current = error.source();
        }

        let mut root = chain.pop().unwrap_or_default();
        while let Some(mut outer) = chain.pop() {
            outer.suppressed.push(mem::take(&mut root));
            root = outer;
        }
        root
    }

    fn field_error(field: &'static str, wire_name: String, source: DeserializeError) -> DeserializeError {
        DeserializeError::Field {
            type_path: core::any::type_name::<Self>(),
            field,
            wire_name: wire_name.into(),
            source: Box::new(source),
        }
    }
}

// Applies one fault key; a failure goes through the driver's field policy.
fn apply_key(
    target: &mut dyn Marshal,
    object: &JsonMap<String, Value>,
    field: &'static str,
    driver: &DeserializeDriver<'_>,
) -> Result<(), DeserializeError> {
    let wire_name = driver.policy().convert(field);
    match object.get(&wire_name) {
        Some(raw) => match target.apply_json(raw, driver) {
            Ok(()) => Ok(()),
            Err(source) => driver.field_failed(ReportableError::field_error(field, wire_name, source)),
        },
        None => Ok(()),
    }
}

impl Marshal for ReportableError {
    #[inline]
    fn marshal_ref(&self) -> MarshalRef<'_> {
        MarshalRef::Fault(self)
    }

    fn apply_json(
        &mut self,
        value: &Value,
        driver: &DeserializeDriver<'_>,
    ) -> Result<(), DeserializeError> {
        let object = match value {
            Value::Object(object) => object,
            Value::Null => return Ok(()),
            other => return Err(CoercionError::mismatch("object", other).into()),
        };

        let mut out = Self::default();
        apply_key(&mut out.message, object, DETAIL_MESSAGE, driver)?;
        apply_key(&mut out.stack_trace, object, STACK_TRACE, driver)?;
        apply_key(&mut out.suppressed, object, SUPPRESSED_EXCEPTIONS, driver)?;
        *self = out;
        Ok(())
    }
}
