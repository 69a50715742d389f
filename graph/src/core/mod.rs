pub mod node;
pub mod history;

pub use node::CommitNode;
pub use history::{History, HistoryStats, OrderPolicy};
