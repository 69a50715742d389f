use crate::core::{CommitNode, History};
use anyhow::{Context, Result};
use git2::{BranchType, Commit, Repository, Sort};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Minimum hex digits kept from each commit ID, as `git log --pretty=%h` does
pub const DEFAULT_ABBREV: usize = 7;

const FULL_HEX_LEN: usize = 40;

pub struct GitWalker {
    repo: Repository,
    abbrev: usize,
}

impl GitWalker {
    pub fn new(repo_path: Option<&Path>) -> Result<Self> {
        let repo = match repo_path {
            Some(path) => Repository::open(path),
            None => Repository::open_from_env(),
        }
        .context("Failed to open repository")?;

        Ok(Self {
            repo,
            abbrev: DEFAULT_ABBREV,
        })
    }

    /// Keep at least `abbrev` hex digits of every ID (4..=40).
    pub fn with_abbrev(mut self, abbrev: usize) -> Self {
        self.abbrev = abbrev.clamp(4, FULL_HEX_LEN);
        self
    }

    /// Load HEAD and every local branch, oldest commit first.
    ///
    /// `limit` keeps the newest commits only; parents cut off by it are
    /// dropped from the loaded ones. IDs are shortened to the shortest prefix
    /// of at least `abbrev` digits that is unique among the loaded commits.
    pub fn into_history(&self, limit: Option<usize>) -> Result<History> {
        if self.repo.is_empty()? {
            return Ok(History::new());
        }

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push_head()?;
        for branch in self.repo.branches(Some(BranchType::Local))? {
            let (branch, _) = branch?;
            if let Some(target) = branch.get().target() {
                revwalk.push(target)?;
            }
        }

        // Children before parents, ties broken by commit date
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;

        let mut nodes = Vec::new();
        for oid in revwalk.take(limit.unwrap_or(usize::MAX)) {
            let commit = self.repo.find_commit(oid?)?;
            nodes.push(commit_to_node(&commit));
        }
        debug!(commits = nodes.len(), "repository walked");

        // Parents outside the walk keep their full ID so they can never
        // alias a shortened one; the history prunes them.
        let labels = unique_prefixes(nodes.iter().map(|node| node.id.as_str()), self.abbrev);
        for node in &mut nodes {
            if let Some(label) = labels.get(node.id.as_str()) {
                node.id = label.clone();
            }
            for parent in &mut node.parents {
                if let Some(label) = labels.get(parent.as_str()) {
                    *parent = label.clone();
                }
            }
        }

        History::from_newest_first(nodes).context("Repository history cannot be drawn")
    }
}

fn commit_to_node(commit: &Commit) -> CommitNode {
    let parents = commit.parent_ids().map(|oid| oid.to_string()).collect();
    let message = commit.summary().map(str::to_string);
    CommitNode::new(commit.id().to_string(), parents, message)
}

/// Shortest prefix of each ID, at least `min_len` long, shared with no other.
fn unique_prefixes<'a>(
    ids: impl Iterator<Item = &'a str>,
    min_len: usize,
) -> HashMap<String, String> {
    let mut sorted: Vec<&str> = ids.collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut labels = HashMap::with_capacity(sorted.len());
    for (index, &id) in sorted.iter().enumerate() {
        let prev = index
            .checked_sub(1)
            .map_or(0, |prev| common_prefix(sorted[prev], id));
        let next = sorted
            .get(index + 1)
            .map_or(0, |&next| common_prefix(id, next));
        let len = (prev.max(next) + 1).max(min_len).min(id.len());
        labels.insert(id.to_string(), id[..len].to_string());
    }
    labels
}

fn common_prefix(a: &str, b: &str) -> usize {
    a.bytes().zip(b.bytes()).take_while(|(x, y)| x == y).count()
}
