pub mod colors;
pub mod format;
pub mod table;

pub use format::fmt2;
