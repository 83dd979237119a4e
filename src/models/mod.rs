pub mod analytics;
pub mod grammar;
pub mod transcript;

pub use analytics::*;
pub use grammar::*;
pub use transcript::*;
