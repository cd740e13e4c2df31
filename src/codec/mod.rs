pub mod codec;
pub mod format;

pub use codec::{decode, decode_as, encode, CodecError, EncodeOptions};
pub use format::ImageFormat;
