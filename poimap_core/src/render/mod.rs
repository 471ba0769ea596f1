mod palette;
mod popup;
mod style;

pub use palette::*;
pub use popup::*;
pub use style::*;
