pub mod legend;
pub mod markers;
pub mod symbology;
pub mod tooltip;

pub use legend::*;
pub use markers::*;
pub use symbology::*;
pub use tooltip::*;
