use super::node::CommitNode;
use crate::error::{GraphError, Result};
use serde::Deserialize;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};
use tracing::{debug, warn};

/// What to do when commits arrive out of parent-before-child order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderPolicy {
    /// Reject the history
    Strict,
    /// Reorder it topologically, keeping the supplied order where valid
    #[default]
    Reorder,
}

/// An ordered commit history, oldest first, ready to be drawn
#[derive(Debug, Clone, Default)]
pub struct History {
    /// Commit IDs in render order
    order: Vec<String>,
    /// All nodes indexed by commit ID
    nodes: HashMap<String, CommitNode>,
    /// Quick lookup: commit ID -> children IDs
    children: HashMap<String, Vec<String>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the newest-first order most VCS logs print.
    pub fn from_newest_first(mut nodes: Vec<CommitNode>) -> Result<Self> {
        nodes.reverse();
        Self::from_oldest_first(nodes)
    }

    /// Build from an oldest-first list.
    ///
    /// Parents that are not part of `nodes` (history cut off by a limit) are
    /// dropped so that the remaining commits still form a closed graph.
    pub fn from_oldest_first(nodes: Vec<CommitNode>) -> Result<Self> {
        let mut known = HashSet::with_capacity(nodes.len());
        for node in &nodes {
            if !known.insert(node.id.clone()) {
                return Err(GraphError::LayoutInconsistency(format!(
                    "commit {} is listed more than once",
                    node.id
                )));
            }
        }

        let mut history = Self::new();
        for mut node in nodes {
            let mut seen = HashSet::new();
            if let Some(dup) = node.parents.iter().find(|p| !seen.insert(p.as_str())) {
                return Err(GraphError::LayoutInconsistency(format!(
                    "commit {} lists parent {} more than once",
                    node.id, dup
                )));
            }

            let listed = node.parents.len();
            node.parents.retain(|p| known.contains(p));
            if node.parents.len() < listed {
                warn!(
                    commit = %node.id,
                    dropped = listed - node.parents.len(),
                    "parents outside the loaded history were pruned"
                );
            }
            history.push(node);
        }

        debug!(commits = history.len(), "history assembled");
        Ok(history)
    }

    fn push(&mut self, node: CommitNode) {
        for parent_id in &node.parents {
            self.children
                .entry(parent_id.clone())
                .or_default()
                .push(node.id.clone());
        }
        self.order.push(node.id.clone());
        self.nodes.insert(node.id.clone(), node);
    }

    /// Commit IDs in render order
    pub fn commits(&self) -> &[String] {
        &self.order
    }

    /// Parents of a commit, first parent first
    pub fn parents(&self, commit_id: &str) -> &[String] {
        self.nodes
            .get(commit_id)
            .map(|node| node.parents.as_slice())
            .unwrap_or_default()
    }

    /// Children of a commit, in render order
    pub fn children(&self, commit_id: &str) -> &[String] {
        self.children
            .get(commit_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn message(&self, commit_id: &str) -> Option<&str> {
        self.nodes
            .get(commit_id)
            .and_then(|node| node.message.as_deref())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Verify that every parent is rendered before any of its children.
    pub fn check_order(&self) -> Result<()> {
        let position = self.positions();
        for (index, commit_id) in self.order.iter().enumerate() {
            for parent_id in self.parents(commit_id) {
                if position[parent_id.as_str()] > index {
                    return Err(GraphError::LayoutInconsistency(format!(
                        "commit {} is ordered before its parent {}",
                        commit_id, parent_id
                    )));
                }
            }
        }
        Ok(())
    }

    /// Stable topological sort: parents first, otherwise supplied order.
    pub fn reorder_topologically(&mut self) -> Result<()> {
        let sorted = self.topological_order()?;
        if sorted != self.order {
            debug!("history reordered topologically");
            self.order = sorted;
        }
        Ok(())
    }

    fn topological_order(&self) -> Result<Vec<String>> {
        let position = self.positions();
        let mut pending: HashMap<&str, usize> = self
            .order
            .iter()
            .map(|id| (id.as_str(), self.parents(id).len()))
            .collect();

        let mut ready: BinaryHeap<Reverse<usize>> = pending
            .iter()
            .filter(|&(_, &count)| count == 0)
            .map(|(&id, _)| Reverse(position[id]))
            .collect();

        let mut sorted = Vec::with_capacity(self.order.len());
        while let Some(Reverse(index)) = ready.pop() {
            let commit_id = self.order[index].as_str();
            sorted.push(commit_id.to_string());
            for child_id in self.children(commit_id) {
                if let Some(count) = pending.get_mut(child_id.as_str()) {
                    *count -= 1;
                    if *count == 0 {
                        ready.push(Reverse(position[child_id.as_str()]));
                    }
                }
            }
        }

        if sorted.len() != self.order.len() {
            return Err(GraphError::LayoutInconsistency(
                "history contains a cycle".to_string(),
            ));
        }
        Ok(sorted)
    }

    /// Enforce the parent-before-child contract according to `policy`.
    pub fn apply_order(&mut self, policy: OrderPolicy) -> Result<()> {
        match policy {
            OrderPolicy::Strict => self.check_order(),
            OrderPolicy::Reorder => self.reorder_topologically(),
        }
    }

    fn positions(&self) -> HashMap<&str, usize> {
        self.order
            .iter()
            .enumerate()
            .map(|(index, id)| (id.as_str(), index))
            .collect()
    }

    /// Get statistics about the history
    pub fn stats(&self) -> HistoryStats {
        let nodes = self.nodes.values();
        let merge_commits = nodes.clone().filter(|n| n.is_merge()).count();
        let root_commits = nodes.clone().filter(|n| n.is_root()).count();
        let tip_commits = self
            .order
            .iter()
            .filter(|id| self.children(id).is_empty())
            .count();
        let widest_merge = nodes.map(|n| n.parents.len()).max().unwrap_or(0);

        HistoryStats {
            total_commits: self.order.len(),
            merge_commits,
            root_commits,
            tip_commits,
            widest_merge,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStats {
    pub total_commits: usize,
    pub merge_commits: usize,
    pub root_commits: usize,
    pub tip_commits: usize,
    pub widest_merge: usize,
}
