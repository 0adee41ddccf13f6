use bt_marshal::de::DeserializeDriver;
use bt_marshal::{CoercionError, DeserializeError, Marshal, MarshalRef};
use serde_json::Value;

// -----------------------------------------------------------------------------
// ResponseGroup

/// One positional row of a column-grouped response.
///
/// Two row shapes are accepted:
///
/// - folded: `[group_id, [[v0], [v1], ...], count]`, exactly three
///   elements with the cell list in the middle;
/// - flat: `[[v0], [v1], ...]`, a non-empty list whose first element is
///   already a cell.
///
/// The row is kept as received and serialized back unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseGroup {
    raw: Value,
}

impl ResponseGroup {
    /// The group identifier of a folded row.
    #[inline]
    pub fn group_id(&self) -> Option<&Value> {
        match &self.raw {
            Value::Array(items) if is_folded(items) => items.first(),
            _ => None,
        }
    }

    /// The cells of this row, each normally a one-element array.
    pub fn cells(&self) -> &[Value] {
        match &self.raw {
            Value::Array(items) if is_folded(items) => items
                .get(1)
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or_default(),
            Value::Array(items) => items,
            _ => &[],
        }
    }

    #[inline]
    pub fn cell(&self, position: usize) -> Option<&Value> {
        self.cells().get(position)
    }
}

fn is_folded(items: &[Value]) -> bool {
    items.len() == 3 && !items[0].is_array() && items[1].is_array()
}

fn validate(row: &Value) -> Result<(), CoercionError> {
    let Value::Array(items) = row else {
        return Err(CoercionError::mismatch("array", row));
    };
    if is_folded(items) || items.first().is_some_and(Value::is_array) {
        return Ok(());
    }
    Err(CoercionError::Shape {
        expected: "response group",
        detail: if items.is_empty() {
            "the row is empty".into()
        } else {
            format!("expected a folded group of 3 elements or a list of cells, got {} elements", items.len())
        },
    })
}

impl TryFrom<Value> for ResponseGroup {
    type Error = CoercionError;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        validate(&raw)?;
        Ok(Self { raw })
    }
}

impl Marshal for ResponseGroup {
    #[inline]
    fn marshal_ref(&self) -> MarshalRef<'_> {
        match &self.raw {
            Value::Null => MarshalRef::Null,
            raw => MarshalRef::Json(raw),
        }
    }

    fn apply_json(&mut self, value: &Value, _driver: &DeserializeDriver<'_>) -> Result<(), DeserializeError> {
        if value.is_null() {
            return Ok(());
        }
        validate(value)?;
        value.clone_into(&mut self.raw);
        Ok(())
    }
}
