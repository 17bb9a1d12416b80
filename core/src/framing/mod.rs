pub mod decode;
pub mod encode;
pub mod types;

pub use decode::{decode_frame, decode_frame_header, read_frame};
pub use encode::{encode_frame, encode_frame_header};
pub use types::{FrameError, FrameHeader, FrameView, OwnedFrame};
