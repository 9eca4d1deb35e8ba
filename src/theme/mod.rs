//! Look and feel of the greeting page.

pub mod assets;
pub mod colors;
mod cursor;
mod styles;

pub use cursor::DomStyleHost;
pub use styles::GLOBAL_STYLES;
