//! ASCII commit graphs.
//!
//! A [`History`] is walked oldest commit first. Each commit folds its
//! parents' rails into one, prints a row, then fans its rail out to its
//! children; connector art is drawn wherever rails merge or split.

pub mod core;
pub mod error;
pub mod git_backend;
pub mod layout;
pub mod render;

pub use crate::core::{CommitNode, History, HistoryStats, OrderPolicy};
pub use error::{GraphError, Result};
pub use git_backend::{history_from_log, parse_log, GitWalker, LOG_FORMAT};
pub use layout::{expand_branch, resolve_merge, Rail, RailState};
pub use render::{
    branch_art, merge_art, render, split_art, GraphRenderer, RenderOptions, RenderState,
    RowFormatter,
};
