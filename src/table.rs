//! A small column-oriented table with a row index.
//!
//! `Table` holds the per-document metadata handed to
//! [`create_dtm`](crate::dtm::create_dtm) and the document-term matrix it
//! returns. Cells are JSON-like scalars (`serde_json::Value`) so arbitrary
//! descriptive fields fit without a schema. Column names need not be unique.

use crate::error::TableError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Name given to the column created by [`Table::reset_index`] for an unnamed index.
pub const DEFAULT_INDEX_COLUMN: &str = "index";
/// Fallback name used when [`DEFAULT_INDEX_COLUMN`] is already taken.
pub const FALLBACK_INDEX_COLUMN: &str = "level_0";

/// A named column of cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
  /// The column name.
  pub name: String,
  /// One cell per row.
  pub values: Vec<Value>,
}

/// An ordered collection of equally long columns plus one index label per row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TableParts")]
pub struct Table {
  index: Vec<Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  index_name: Option<String>,
  columns: Vec<Column>,
}

// Unchecked shape used to validate deserialized tables.
#[derive(Deserialize)]
struct TableParts {
  index: Vec<Value>,
  #[serde(default)]
  index_name: Option<String>,
  columns: Vec<Column>,
}

impl TryFrom<TableParts> for Table {
  type Error = TableError;

  fn try_from(parts: TableParts) -> Result<Self, Self::Error> {
    let expected = parts.index.len();
    for column in &parts.columns {
      check_len(&column.name, expected, column.values.len())?;
    }

    Ok(Self {
      index: parts.index,
      index_name: parts.index_name,
      columns: parts.columns,
    })
  }
}

fn check_len(column: &str, expected: usize, found: usize) -> Result<(), TableError> {
  if expected == found {
    Ok(())
  } else {
    Err(TableError::LengthMismatch {
      column: column.to_string(),
      expected,
      found,
    })
  }
}

fn range_index(n: usize) -> Vec<Value> {
  (0..n as u64).map(Value::from).collect()
}

// Map each label to its row position, rejecting repeated labels.
fn label_positions(index: &[Value]) -> Result<HashMap<String, usize>, TableError> {
  let mut positions = HashMap::with_capacity(index.len());
  for (pos, label) in index.iter().enumerate() {
    let key = label.to_string();
    if positions.insert(key.clone(), pos).is_some() {
      return Err(TableError::DuplicateIndex(key));
    }
  }
  Ok(positions)
}

impl Table {
  /// Creates an empty table with no rows and no columns.
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates a table with `n` rows, a `0..n` index and no columns.
  pub fn with_row_count(n: usize) -> Self {
    Self {
      index: range_index(n),
      ..Self::default()
    }
  }

  /// Builds a table from `(name, values)` pairs with a `0..n` index.
  ///
  /// Every column must have the same length.
  pub fn from_columns<I, N>(columns: I) -> Result<Self, TableError>
  where
    I: IntoIterator<Item = (N, Vec<Value>)>,
    N: Into<String>,
  {
    let mut table = Self::new();
    for (name, values) in columns {
      table.push_column(name, values)?;
    }
    Ok(table)
  }

  /// Builds a table from serializable records, one row per record.
  ///
  /// Each record must serialize to a JSON object. Columns follow the order in
  /// which fields are first seen; a record lacking a field gets a null cell.
  pub fn from_records<T: Serialize>(records: &[T]) -> Result<Self, TableError> {
    let mut names: Vec<String> = Vec::new();
    let mut rows = Vec::with_capacity(records.len());

    for (pos, record) in records.iter().enumerate() {
      let value =
        serde_json::to_value(record).map_err(|e| TableError::Serialize(e.to_string()))?;
      let Value::Object(fields) = value else {
        return Err(TableError::NotARecord(pos));
      };
      for key in fields.keys() {
        if !names.contains(key) {
          names.push(key.clone());
        }
      }
      rows.push(fields);
    }

    let columns = names
      .into_iter()
      .map(|name| {
        let values = rows
          .iter()
          .map(|fields| fields.get(&name).cloned().unwrap_or(Value::Null))
          .collect();
        Column { name, values }
      })
      .collect();

    Ok(Self {
      index: range_index(records.len()),
      index_name: None,
      columns,
    })
  }

  /// Replaces the row index labels.
  pub fn with_index(mut self, labels: Vec<Value>) -> Result<Self, TableError> {
    if labels.len() != self.n_rows() {
      return Err(TableError::IndexLength {
        expected: self.n_rows(),
        found: labels.len(),
      });
    }
    self.index = labels;
    Ok(self)
  }

  /// Names the row index.
  pub fn with_index_name(mut self, name: impl Into<String>) -> Self {
    self.index_name = Some(name.into());
    self
  }

  /// Appends a column.
  ///
  /// The first column pushed onto a table without rows or columns fixes the
  /// row count and gets a `0..n` index.
  pub fn push_column(
    &mut self,
    name: impl Into<String>,
    values: Vec<Value>,
  ) -> Result<(), TableError> {
    let name = name.into();
    if self.columns.is_empty() && self.index.is_empty() {
      self.index = range_index(values.len());
    }
    check_len(&name, self.n_rows(), values.len())?;
    self.columns.push(Column { name, values });
    Ok(())
  }

  /// Number of rows.
  pub fn n_rows(&self) -> usize {
    self.index.len()
  }

  /// Number of columns, not counting the index.
  pub fn n_cols(&self) -> usize {
    self.columns.len()
  }

  /// The row index labels.
  pub fn index(&self) -> &[Value] {
    &self.index
  }

  /// The row index name, if any.
  pub fn index_name(&self) -> Option<&str> {
    self.index_name.as_deref()
  }

  /// All columns in order.
  pub fn columns(&self) -> &[Column] {
    &self.columns
  }

  /// Column names in order, duplicates included.
  pub fn column_names(&self) -> Vec<&str> {
    self.columns.iter().map(|c| c.name.as_str()).collect()
  }

  /// Values of the first column called `name`.
  pub fn column(&self, name: &str) -> Option<&[Value]> {
    self
      .columns
      .iter()
      .find(|c| c.name == name)
      .map(|c| c.values.as_slice())
  }

  /// The cell at `row` in the first column called `column`.
  pub fn cell(&self, row: usize, column: &str) -> Option<&Value> {
    self.column(column).and_then(|values| values.get(row))
  }

  /// All cells of row `row`, in column order.
  pub fn row(&self, row: usize) -> Option<Vec<&Value>> {
    if row >= self.n_rows() {
      return None;
    }
    Some(self.columns.iter().map(|c| &c.values[row]).collect())
  }

  /// Moves the index into a leading column and replaces it with `0..n`.
  ///
  /// The new column is named after the index, or [`DEFAULT_INDEX_COLUMN`]
  /// when the index is unnamed ([`FALLBACK_INDEX_COLUMN`] if that name is
  /// taken). Fails if the chosen name already exists.
  pub fn reset_index(&self) -> Result<Table, TableError> {
    let name = match &self.index_name {
      Some(name) => name.clone(),
      None if self.column(DEFAULT_INDEX_COLUMN).is_some() => FALLBACK_INDEX_COLUMN.to_string(),
      None => DEFAULT_INDEX_COLUMN.to_string(),
    };
    if self.column(&name).is_some() {
      return Err(TableError::DuplicateColumn(name));
    }

    let mut columns = Vec::with_capacity(self.columns.len() + 1);
    columns.push(Column {
      name,
      values: self.index.clone(),
    });
    columns.extend(self.columns.iter().cloned());

    Ok(Table {
      index: range_index(self.n_rows()),
      index_name: None,
      columns,
    })
  }

  /// Places the columns of `other` to the right of this table's columns,
  /// aligning rows by index label.
  ///
  /// Identical indexes are zipped row by row. Otherwise the result index is
  /// this table's labels followed by the labels only `other` has, and cells
  /// missing on either side are null. Aligning non-identical indexes requires
  /// both to be free of duplicate labels.
  pub fn concat_columns(&self, other: &Table) -> Result<Table, TableError> {
    let index_name = if self.index_name == other.index_name {
      self.index_name.clone()
    } else {
      None
    };

    if self.index == other.index {
      let mut columns = self.columns.clone();
      columns.extend(other.columns.iter().cloned());
      return Ok(Table {
        index: self.index.clone(),
        index_name,
        columns,
      });
    }

    let left = label_positions(&self.index)?;
    let right = label_positions(&other.index)?;

    let mut index = self.index.clone();
    index.extend(
      other
        .index
        .iter()
        .filter(|label| !left.contains_key(&label.to_string()))
        .cloned(),
    );

    let keys: Vec<String> = index.iter().map(Value::to_string).collect();
    let realign = |column: &Column, positions: &HashMap<String, usize>| Column {
      name: column.name.clone(),
      values: keys
        .iter()
        .map(|key| match positions.get(key) {
          Some(&pos) => column.values[pos].clone(),
          None => Value::Null,
        })
        .collect(),
    };

    let columns = self
      .columns
      .iter()
      .map(|c| realign(c, &left))
      .chain(other.columns.iter().map(|c| realign(c, &right)))
      .collect();

    Ok(Table {
      index,
      index_name,
      columns,
    })
  }
}
