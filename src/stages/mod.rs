pub mod stage0_segment;
pub mod stage1_metrics;
pub mod stage2_grammar;
pub mod stage3_summarize;

pub use stage0_segment::*;
pub use stage1_metrics::*;
pub use stage2_grammar::*;
pub use stage3_summarize::*;
