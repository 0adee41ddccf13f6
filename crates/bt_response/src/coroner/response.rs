use bt_marshal::derive::Marshal;
use serde_json::Value;

use super::{CellError, CellValue, ResponseError, ResponseGroup};

// -----------------------------------------------------------------------------
// ColumnDesc

/// Describes one positional slot of every group in a response.
#[derive(Marshal, Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnDesc {
    pub name: String,
    pub format: Option<String>,
    #[marshal(rename = "type")]
    pub kind: Option<String>,
    pub op: Option<String>,
}

impl ColumnDesc {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

// -----------------------------------------------------------------------------
// CoronerResponse

/// A column-grouped query result.
///
/// Column positions are looked up on every access: two responses to
/// different queries may order the same attribute differently.
#[derive(Marshal, Debug, Clone, Default, PartialEq)]
pub struct CoronerResponse {
    #[marshal(rename = "columns_desc")]
    pub columns_desc: Vec<ColumnDesc>,
    #[marshal(rename = "values")]
    pub values: Vec<ResponseGroup>,
}

impl CoronerResponse {
    #[inline]
    pub fn new(columns_desc: Vec<ColumnDesc>, values: Vec<ResponseGroup>) -> Self {
        Self { columns_desc, values }
    }

    /// Number of groups in the response.
    #[inline]
    pub fn results_number(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn group(&self, index: usize) -> Option<&ResponseGroup> {
        self.values.get(index)
    }

    /// Position of the first column named `name`.
    pub fn attribute_index(&self, name: &str) -> Option<usize> {
        self.columns_desc.iter().position(|column| column.name == name)
    }

    /// Reads attribute `name` of group `group_index` as a `T`.
    ///
    /// Each cell is a one-element array; the element is cast to `T`.
    pub fn get_attribute<T: CellValue>(&self, group_index: usize, name: &str) -> Result<T, ResponseError> {
        let group = self.group(group_index).ok_or(ResponseError::GroupOutOfRange {
            index: group_index,
            count: self.results_number(),
        })?;
        let index = self
            .attribute_index(name)
            .ok_or_else(|| ResponseError::AttributeNotFound { name: name.into() })?;

        unwrap_cell(group.cell(index))
            .and_then(T::from_cell)
            .map_err(|reason| ResponseError::Processing {
                attribute: name.into(),
                index,
                reason,
            })
    }
}

fn unwrap_cell(cell: Option<&Value>) -> Result<&Value, CellError> {
    match cell {
        Some(Value::Array(wrapper)) => wrapper.first().ok_or(CellError::Missing),
        Some(_) => Err(CellError::NotWrapped),
        None => Err(CellError::Missing),
    }
}
