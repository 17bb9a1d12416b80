pub mod pack;
pub mod types;

pub use pack::{pack_record, unpack_record};
pub use types::Record;
