pub mod client;
pub mod corrections;

pub use client::*;
pub use corrections::*;
