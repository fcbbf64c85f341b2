use anyhow::bail;

/// An ordered tabular gene dataset with raw text cells.
///
/// Column names are kept verbatim as read from the source file. Every cell
/// is untyped text; empty fields are empty strings, never a null sentinel.
/// Numeric interpretation of coordinate cells happens at query time, not
/// here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneTable {
    columns: Vec<String>,
    rows:    Vec<Vec<String>>,
}

impl GeneTable {
    /// Creates an empty table with the given column names.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Creates a table from column names and pre-built rows.
    pub fn from_rows(
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    ) -> anyhow::Result<Self> {
        let mut table = Self::new(columns);
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Returns the column names in table order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the position of a column, matched verbatim.
    pub fn column_index(
        &self,
        name: &str,
    ) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over rows in source order.
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Returns a single row by position.
    pub fn row(
        &self,
        index: usize,
    ) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Returns the cell at a row position and column name.
    pub fn get(
        &self,
        row: usize,
        column: &str,
    ) -> Option<&str> {
        let index = self.column_index(column)?;
        self.rows
            .get(row)
            .map(|cells| cells[index].as_str())
    }

    /// Appends a row. Every row must have exactly one cell per column.
    pub fn push_row(
        &mut self,
        row: Vec<String>,
    ) -> anyhow::Result<()> {
        if row.len() != self.columns.len() {
            bail!(
                "row has {} cells, expected {} (one per column)",
                row.len(),
                self.columns.len()
            );
        }
        self.rows.push(row);
        Ok(())
    }

    /// Appends a column with one value per existing row.
    pub fn append_column(
        &mut self,
        name: String,
        values: Vec<String>,
    ) -> anyhow::Result<()> {
        if values.len() != self.rows.len() {
            bail!(
                "column {:?} has {} values, expected {} (one per row)",
                name,
                values.len(),
                self.rows.len()
            );
        }
        if self.column_index(&name).is_some() {
            bail!("column {:?} already present in table", name);
        }
        self.columns.push(name);
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
        Ok(())
    }

    /// Returns a new table containing the rows satisfying the predicate,
    /// in original relative order, with all columns preserved.
    pub fn filter<P>(
        &self,
        mut predicate: P,
    ) -> GeneTable
    where
        P: FnMut(&[String]) -> bool, {
        GeneTable {
            columns: self.columns.clone(),
            rows:    self
                .rows
                .iter()
                .filter(|row| predicate(row.as_slice()))
                .cloned()
                .collect(),
        }
    }
}
