pub mod luma;
pub mod reduce;

pub use luma::{luma, reduce_raw, ChannelLayout};
pub use reduce::reduce;
