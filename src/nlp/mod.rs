pub mod fillers;
pub mod lexrank;
pub mod readability;
pub mod sentiment;
pub mod tokenize;

pub use fillers::*;
pub use lexrank::*;
pub use readability::*;
pub use sentiment::*;
pub use tokenize::*;
