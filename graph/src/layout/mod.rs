pub mod rails;
pub mod counts;
pub mod merge;
pub mod branch;

pub use rails::{Rail, RailState};
pub use counts::{runs, LabelCounts, Run};
pub use merge::{pending_merge, resolve_merge};
pub use branch::expand_branch;
