mod formatter;
mod generator;
mod record;
mod words;

pub use formatter::{format_json, format_table, FormatOptions};
pub use generator::{Category, FakeGenerator, Generator};
pub use record::Record;
