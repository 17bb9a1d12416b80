/// Packed size of one variant record on the wire (bytes).
pub const RECORD_LEN: usize = 16;

/// Default block capacity: 1 MiB of packed records (65,536 records).
///
/// A block is the unit of encryption; each full (or final partial)
/// block becomes exactly one frame on disk.
pub const DEFAULT_BLOCK_SIZE: usize = RECORD_LEN * (1 << 16);

/// Sanity bound on a frame's declared plaintext length when reading
/// frames back (64 MiB). A corrupt length field must not drive an
/// unbounded allocation.
pub const MAX_FRAME_PLAINTEXT: usize = 64 * 1024 * 1024;
