//! Reorderable, sortable demo table shown inside a timeline step.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::pager::ViewportClass;

/// Table columns in their default order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Name,
    Status,
    Location,
    Balance,
}

impl Column {
    pub const ALL: [Self; 4] = [Self::Name, Self::Status, Self::Location, Self::Balance];

    pub fn header(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Status => "Status",
            Self::Location => "Location",
            Self::Balance => "Balance",
        }
    }

    /// Columns shown for a viewport class. Narrow screens keep only the
    /// name and status.
    pub fn visible_for(class: ViewportClass) -> Vec<Self> {
        match class {
            ViewportClass::Mobile => vec![Self::Name, Self::Status],
            ViewportClass::Tablet | ViewportClass::Desktop => Self::ALL.to_vec(),
        }
    }
}

/// Row status. Ordered alphabetically for sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Status {
    Active,
    Inactive,
    Pending,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Inactive => write!(f, "Inactive"),
            Self::Pending => write!(f, "Pending"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub id: String,
    pub name: String,
    pub email: String,
    pub location: String,
    pub flag: String,
    pub status: Status,
    pub balance: f64,
}

impl Row {
    /// Display text of one cell.
    pub fn cell(&self, column: Column) -> String {
        match column {
            Column::Name => self.name.clone(),
            Column::Status => self.status.to_string(),
            Column::Location => format!("{} {}", self.flag, self.location),
            Column::Balance => format_balance(self.balance),
        }
    }

    fn compare(&self, other: &Self, column: Column) -> Ordering {
        match column {
            Column::Name => self.name.cmp(&other.name),
            Column::Status => self.status.cmp(&other.status),
            Column::Location => self.location.cmp(&other.location),
            Column::Balance => self.balance.total_cmp(&other.balance),
        }
    }
}

/// Active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub column: Column,
    pub descending: bool,
}

/// Format an amount as US dollars, e.g. `$1,500.00`.
pub fn format_balance(amount: f64) -> String {
    let negative = amount < 0.0;
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

/// Demo table state: rows, column order and sort.
#[derive(Debug, Clone)]
pub struct DemoTable {
    rows: Vec<Row>,
    columns: Vec<Column>,
    sort: Option<Sort>,
}

impl DemoTable {
    pub fn new(rows: Vec<Row>, class: ViewportClass) -> Self {
        Self {
            rows,
            columns: Column::visible_for(class),
            sort: None,
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn sort(&self) -> Option<Sort> {
        self.sort
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Re-derive the column order for a new viewport class. Any manual
    /// reordering is lost.
    pub fn set_class(&mut self, class: ViewportClass) {
        self.columns = Column::visible_for(class);
    }

    /// Move `active` to the position of `over`, shifting the columns in
    /// between. No-op when the two are equal or either is not shown.
    pub fn move_column(&mut self, active: Column, over: Column) {
        if active == over {
            return;
        }
        let from = self.columns.iter().position(|c| *c == active);
        let to = self.columns.iter().position(|c| *c == over);
        if let (Some(from), Some(to)) = (from, to) {
            let column = self.columns.remove(from);
            self.columns.insert(to, column);
            tracing::debug!(?column, to, "column moved");
        }
    }

    /// Sort by a column. A new column starts ascending; toggling the same
    /// column flips direction. Sorting is never removed.
    pub fn toggle_sort(&mut self, column: Column) {
        self.sort = Some(match self.sort {
            Some(sort) if sort.column == column => Sort {
                column,
                descending: !sort.descending,
            },
            _ => Sort {
                column,
                descending: false,
            },
        });
    }

    /// Rows in display order.
    pub fn sorted_rows(&self) -> Vec<&Row> {
        let mut rows: Vec<&Row> = self.rows.iter().collect();
        if let Some(sort) = self.sort {
            rows.sort_by(|a, b| {
                let ord = a.compare(b, sort.column);
                if sort.descending {
                    ord.reverse()
                } else {
                    ord
                }
            });
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, name: &str, status: Status, balance: f64) -> Row {
        Row {
            id: id.into(),
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            location: format!("{name} Team"),
            flag: "🎨".into(),
            status,
            balance,
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            row("1", "Wireframes", Status::Active, 0.0),
            row("2", "Mockups", Status::Pending, 1500.0),
            row("3", "Prototypes", Status::Inactive, 2500.0),
        ]
    }

    fn names(table: &DemoTable) -> Vec<&str> {
        table.sorted_rows().iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_format_balance() {
        assert_eq!(format_balance(0.0), "$0.00");
        assert_eq!(format_balance(1500.0), "$1,500.00");
        assert_eq!(format_balance(2500.5), "$2,500.50");
        assert_eq!(format_balance(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_balance(999.999), "$1,000.00");
        assert_eq!(format_balance(-42.0), "-$42.00");
    }

    #[test]
    fn test_mobile_columns() {
        let table = DemoTable::new(rows(), ViewportClass::Mobile);
        assert_eq!(table.columns(), &[Column::Name, Column::Status]);

        let mut wide = DemoTable::new(rows(), ViewportClass::Desktop);
        assert_eq!(wide.columns().len(), 4);
        wide.set_class(ViewportClass::Mobile);
        assert_eq!(wide.columns().len(), 2);
    }

    #[test]
    fn test_move_column() {
        let mut table = DemoTable::new(rows(), ViewportClass::Desktop);
        table.move_column(Column::Name, Column::Location);
        assert_eq!(
            table.columns(),
            &[Column::Status, Column::Location, Column::Name, Column::Balance]
        );

        table.move_column(Column::Balance, Column::Status);
        assert_eq!(
            table.columns(),
            &[Column::Balance, Column::Status, Column::Location, Column::Name]
        );
    }

    #[test]
    fn test_move_column_noops() {
        let mut table = DemoTable::new(rows(), ViewportClass::Mobile);
        table.move_column(Column::Name, Column::Name);
        table.move_column(Column::Name, Column::Balance);
        assert_eq!(table.columns(), &[Column::Name, Column::Status]);
    }

    #[test]
    fn test_set_class_resets_order() {
        let mut table = DemoTable::new(rows(), ViewportClass::Desktop);
        table.move_column(Column::Balance, Column::Name);
        table.set_class(ViewportClass::Desktop);
        assert_eq!(table.columns(), &Column::ALL);
    }

    #[test]
    fn test_toggle_sort() {
        let mut table = DemoTable::new(rows(), ViewportClass::Desktop);
        assert_eq!(names(&table), vec!["Wireframes", "Mockups", "Prototypes"]);

        table.toggle_sort(Column::Name);
        assert_eq!(names(&table), vec!["Mockups", "Prototypes", "Wireframes"]);

        table.toggle_sort(Column::Name);
        assert_eq!(names(&table), vec!["Wireframes", "Prototypes", "Mockups"]);

        // Third toggle flips back instead of clearing
        table.toggle_sort(Column::Name);
        assert_eq!(
            table.sort(),
            Some(Sort {
                column: Column::Name,
                descending: false
            })
        );
    }

    #[test]
    fn test_sort_other_columns() {
        let mut table = DemoTable::new(rows(), ViewportClass::Desktop);
        table.toggle_sort(Column::Status);
        assert_eq!(names(&table), vec!["Wireframes", "Prototypes", "Mockups"]);

        table.toggle_sort(Column::Balance);
        assert!(!table.sort().unwrap().descending);
        table.toggle_sort(Column::Balance);
        assert_eq!(names(&table), vec!["Prototypes", "Mockups", "Wireframes"]);
    }

    #[test]
    fn test_cells() {
        let r = row("2", "Mockups", Status::Pending, 1500.0);
        assert_eq!(r.cell(Column::Status), "Pending");
        assert_eq!(r.cell(Column::Balance), "$1,500.00");
        assert_eq!(r.cell(Column::Location), "🎨 Mockups Team");
    }
}
