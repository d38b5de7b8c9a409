mod json;
pub use json::*;
mod table;
pub use table::*;
