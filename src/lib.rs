pub mod grid;
pub mod grayscale;
pub mod filter;
pub mod edges;
pub mod codec;

// Convenience re-exports
pub use grid::{GridError, IntensityGrid};
pub use grayscale::{luma, reduce, reduce_raw, ChannelLayout};
pub use filter::{filter, filter_with, gradient_at, FilterOptions, Saturation};
pub use edges::detect_edges;
pub use codec::{decode, decode_as, encode, CodecError, EncodeOptions, ImageFormat};
