pub mod dataset;
pub mod extent;
pub mod picking;
pub mod visibility;

pub use dataset::*;
pub use extent::*;
pub use picking::*;
pub use visibility::*;
