pub mod parse;

pub use parse::{parse_line, ParseError, VcfReader};
