pub mod split;
pub mod crossover;
pub mod text;
pub mod options;
pub mod row;
pub mod renderer;

pub use split::split_art;
pub use crossover::{branch_art, merge_art};
pub use text::TextLayout;
pub use options::{RenderOptions, DEFAULT_MAX_WIDTH};
pub use row::RowFormatter;
pub use renderer::{render, GraphRenderer, RenderState};
