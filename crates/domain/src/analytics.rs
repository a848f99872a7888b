pub mod conversion;
pub mod statistics;
pub mod word_frequency;

pub use conversion::{CellValue, ConversionRow, ConversionTable};
pub use statistics::{NumberSample, Statistics};
pub use word_frequency::{WordEntry, WordFrequencies};
