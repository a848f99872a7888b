pub mod json;
pub mod text;

pub use json::output_json;
pub use text::{format_float, output_text};
