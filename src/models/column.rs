use std::fmt;
use std::str::FromStr;

use crate::error::MonitorError;

/// Job list columns. The order is part of the sort-state contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    Filename,
    Client,
    Server,
    State,
    Real,
    User,
    Faults,
    SizeIn,
    SizeOut,
}

impl Column {
    pub const ALL: [Column; 10] = [
        Column::Id,
        Column::Filename,
        Column::Client,
        Column::Server,
        Column::State,
        Column::Real,
        Column::User,
        Column::Faults,
        Column::SizeIn,
        Column::SizeOut,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn header(&self) -> &'static str {
        match self {
            Column::Id => "ID",
            Column::Filename => "Filename",
            Column::Client => "Client",
            Column::Server => "Server",
            Column::State => "State",
            Column::Real => "Real",
            Column::User => "User",
            Column::Faults => "Faults",
            Column::SizeIn => "Size In",
            Column::SizeOut => "Size Out",
        }
    }

    /// Numeric columns sort on the underlying value, never on display text.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Column::Id | Column::Real | Column::User | Column::Faults | Column::SizeIn | Column::SizeOut
        )
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

impl FromStr for Column {
    type Err = MonitorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "id" => Ok(Column::Id),
            "filename" | "file" => Ok(Column::Filename),
            "client" => Ok(Column::Client),
            "server" => Ok(Column::Server),
            "state" => Ok(Column::State),
            "real" => Ok(Column::Real),
            "user" => Ok(Column::User),
            "faults" => Ok(Column::Faults),
            "sizein" | "in" => Ok(Column::SizeIn),
            "sizeout" | "out" => Ok(Column::SizeOut),
            _ => Err(MonitorError::UnknownColumn(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl FromStr for SortOrder {
    type Err = MonitorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(MonitorError::InvalidArgument(format!("sort order '{}'", s))),
        }
    }
}
