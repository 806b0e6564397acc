pub mod frame;
pub mod svg;
pub mod text;

pub use frame::*;
pub use text::*;
