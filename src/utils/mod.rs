pub mod formatting;
pub mod fs_utils;
pub mod parse;
pub mod path;

pub use formatting::is_reported;
pub use parse::{parse_optional_float, parse_optional_int};
