use super::rails::Rail;
use crate::error::{GraphError, Result};
use smallvec::SmallVec;

/// Fold a commit's parent rails into one rail labelled with the commit.
///
/// Rails are scanned left to right. The first rail carrying each parent is
/// consumed: the leftmost consumed rail becomes `commit`, the others are
/// dropped. Later rails with an already consumed parent label belong to
/// that parent's other children and stay put. A root commit opens a new rail
/// on the right.
pub fn resolve_merge(rails: &[String], commit: &str, parents: &[String]) -> Result<Vec<String>> {
    if parents.is_empty() {
        let mut merged = rails.to_vec();
        merged.push(commit.to_string());
        return Ok(merged);
    }

    let consumed = consumed_rails(rails, parents);
    if let Some(missing) = parents
        .iter()
        .find(|parent| !consumed.iter().any(|&index| &rails[index] == *parent))
    {
        return Err(GraphError::LayoutInconsistency(format!(
            "parent {} of {} has no rail; was it rendered first?",
            missing, commit
        )));
    }

    let mut merged = Vec::with_capacity(rails.len() + 1 - parents.len());
    let mut written = false;
    for (index, rail) in rails.iter().enumerate() {
        if !consumed.contains(&index) {
            merged.push(rail.clone());
        } else if !written {
            merged.push(commit.to_string());
            written = true;
        }
    }
    Ok(merged)
}

/// Positions of the first rail carrying each parent.
fn consumed_rails(rails: &[String], parents: &[String]) -> SmallVec<[usize; 2]> {
    let mut consumed: SmallVec<[usize; 2]> = SmallVec::new();
    for (index, rail) in rails.iter().enumerate() {
        let seen = consumed.iter().any(|&taken| &rails[taken] == rail);
        if parents.contains(rail) && !seen {
            consumed.push(index);
        }
    }
    consumed
}

/// Before/after rail views of a merge for the connector-art generator.
///
/// In `before` every consumed parent rail is `PendingMerge`; in `after` the
/// rail now carrying `commit` is. All other rails keep their labels.
pub fn pending_merge(
    before: &[String],
    after: &[String],
    commit: &str,
    parents: &[String],
) -> (Vec<Rail>, Vec<Rail>) {
    let consumed = consumed_rails(before, parents);
    let start = before
        .iter()
        .enumerate()
        .map(|(index, rail)| {
            if consumed.contains(&index) {
                Rail::PendingMerge
            } else {
                Rail::Branch(rail.clone())
            }
        })
        .collect();
    let finish = after
        .iter()
        .map(|rail| {
            if rail == commit {
                Rail::PendingMerge
            } else {
                Rail::Branch(rail.clone())
            }
        })
        .collect();
    (start, finish)
}
