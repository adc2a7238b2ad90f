//! Work entries: input validation and payload encoding

pub mod codec;

pub use codec::{CodecError, EncodedEntry, duration_hours, encode, reported_hours};
