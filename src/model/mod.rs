//! Data model for tabular data representation

mod cell;
mod table;

pub use cell::CellValue;
pub use table::{Row, Table};
