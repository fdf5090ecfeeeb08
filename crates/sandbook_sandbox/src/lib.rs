
pub mod controller;
pub mod files;
pub mod language;
pub mod path;

pub use controller::*;
pub use files::*;
pub use language::*;
pub use path::*;
