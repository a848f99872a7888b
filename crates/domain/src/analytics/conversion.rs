use std::fmt;

use linestat_shared_kernel::ItemIndex;
use serde::Serialize;

use crate::{model::ParsedValue, radix::ConversionSettings};

/// The VALUE column: the parsed integer, or the text that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Integer(i64),
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionRow {
    pub item: ItemIndex,
    pub value: CellValue,
    pub binary: String,
    pub hex: String,
}

impl ConversionRow {
    pub fn is_valid(&self) -> bool {
        matches!(self.value, CellValue::Integer(_))
    }
}

/// Conversion rows in input order, invalid records included.
#[derive(Debug, Clone)]
pub struct ConversionTable {
    settings: ConversionSettings,
    rows: Vec<ConversionRow>,
    next_item: ItemIndex,
}

impl ConversionTable {
    pub fn new(settings: ConversionSettings) -> Self {
        Self { settings, rows: Vec::new(), next_item: ItemIndex::FIRST }
    }

    /// Appends one row per non-blank record and returns its item index.
    pub fn push(&mut self, parsed: ParsedValue<i64>) -> ItemIndex {
        let item = self.next_item;
        let row = match parsed {
            ParsedValue::Valid(value) => ConversionRow {
                item,
                value: CellValue::Integer(value),
                binary: self.settings.to_binary(value),
                hex: self.settings.to_hex(value),
            },
            ParsedValue::Invalid(text) => ConversionRow {
                item,
                value: CellValue::Text(text),
                binary: self.settings.sentinel().to_string(),
                hex: self.settings.sentinel().to_string(),
            },
        };
        self.rows.push(row);
        self.next_item = item.next();
        item
    }

    pub fn into_rows(self) -> Vec<ConversionRow> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn invalid_count(&self) -> usize {
        self.rows.iter().filter(|row| !row.is_valid()).count()
    }
}
