use super::crossover::{branch_art, merge_art};
use super::options::RenderOptions;
use super::row::RowFormatter;
use super::split::split_art;
use super::text::TextLayout;
use crate::core::History;
use crate::error::{GraphError, Result};
use crate::layout::{expand_branch, pending_merge, resolve_merge, RailState};
use tracing::{debug, trace};

/// Where a renderer is in its single forward pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    AwaitingFirstCommit,
    Rendering,
    Done,
}

/// Walks a history row by row, carrying the rail layout between rows
pub struct GraphRenderer<'a> {
    history: &'a History,
    rails: RailState,
    rows: RowFormatter,
    layout: TextLayout,
    show_messages: bool,
    state: RenderState,
}

impl<'a> GraphRenderer<'a> {
    pub fn new(history: &'a History, options: &RenderOptions) -> Self {
        Self {
            history,
            rails: RailState::new(),
            rows: RowFormatter::new(options),
            layout: TextLayout::new(options.max_width),
            show_messages: options.show_messages,
            state: RenderState::AwaitingFirstCommit,
        }
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Current rail labels
    pub fn rails(&self) -> &[String] {
        self.rails.rails()
    }

    /// Draw one commit: merge art, its row, then branch art.
    ///
    /// Either every line for the commit is returned and the rails advance,
    /// or an error is returned and the rails are left as they were.
    pub fn step(&mut self, commit_id: &str) -> Result<Vec<String>> {
        if self.state == RenderState::Done {
            return Err(GraphError::LayoutInconsistency(format!(
                "commit {} arrived after the render finished",
                commit_id
            )));
        }

        let history = self.history;
        let parents = history.parents(commit_id);
        if parents.len() > 2 {
            return Err(GraphError::UnsupportedMergeArity(format!(
                "commit {} has {} parents; only two-way merges can be drawn",
                commit_id,
                parents.len()
            )));
        }

        let current = self.rails.rails();
        let merged = resolve_merge(current, commit_id, parents)?;

        let mut lines = Vec::new();
        if parents.len() == 2 {
            let (before, after) = pending_merge(current, &merged, commit_id, parents);
            let art = merge_art(&before, &after)?;
            debug!(commit = commit_id, lines = art.len(), "merge art");
            lines.extend(art.iter().map(|line| self.layout.clip(line)));
        }

        let message = if self.show_messages {
            history.message(commit_id)
        } else {
            None
        };
        lines.push(self.rows.format(commit_id, &merged, message)?);

        let children = history.children(commit_id).len();
        let expanded = expand_branch(&merged, commit_id, children);
        if children > 1 {
            let art = if merged.len() == 1 {
                split_art(children - 1)
            } else {
                branch_art(&merged, &expanded)?
            };
            debug!(commit = commit_id, children, lines = art.len(), "branch art");
            lines.extend(art.iter().map(|line| self.layout.clip(line)));
        }

        trace!(commit = commit_id, rails = ?expanded, "rails advanced");
        self.rails.replace(expanded);
        self.state = RenderState::Rendering;

        Ok(lines)
    }

    /// Close the pass; no further commits are accepted.
    pub fn finish(&mut self) {
        self.state = RenderState::Done;
    }

    /// Draw every commit of the history in order.
    pub fn run(mut self) -> Result<Vec<String>> {
        let history = self.history;
        let mut output = Vec::with_capacity(history.len());
        for commit_id in history.commits() {
            output.extend(self.step(commit_id)?);
        }
        self.finish();
        debug!(
            commits = history.len(),
            lines = output.len(),
            "graph rendered"
        );
        Ok(output)
    }
}

/// Render a whole history, enforcing its ordering per `options.order`.
pub fn render(history: &History, options: &RenderOptions) -> Result<Vec<String>> {
    if history.check_order().is_ok() {
        return GraphRenderer::new(history, options).run();
    }
    let mut ordered = history.clone();
    ordered.apply_order(options.order)?;
    GraphRenderer::new(&ordered, options).run()
}
