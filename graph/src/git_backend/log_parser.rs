use crate::core::{CommitNode, History};
use crate::error::{GraphError, Result};

/// `git log --pretty=format:` string producing what `parse_log` reads
pub const LOG_FORMAT: &str = "%h|%p|%s";

/// Parse `hash|parents|message` lines, newest first, as printed by
/// `git log --date-order --pretty=format:'%h|%p|%s'`.
///
/// Blank lines are skipped. A line may be wrapped in single quotes. The
/// message may contain `|`; the hash and parents may not.
pub fn parse_log(text: &str) -> Result<Vec<CommitNode>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_record(line, index + 1))
        .collect()
}

/// Parse log text straight into a renderable history.
pub fn history_from_log(text: &str) -> Result<History> {
    History::from_newest_first(parse_log(text)?)
}

fn parse_record(line: &str, line_number: usize) -> Result<CommitNode> {
    let malformed = |detail: String| GraphError::MalformedRecord {
        line: line_number,
        detail,
    };

    let record = line.trim_end();
    let record = record
        .strip_prefix('\'')
        .and_then(|inner| inner.strip_suffix('\''))
        .unwrap_or(record);

    let fields: Vec<&str> = record.splitn(3, '|').collect();
    let [hash, parents, message] = fields.as_slice() else {
        return Err(malformed(format!(
            "expected 3 '|'-separated fields, found {}",
            fields.len()
        )));
    };

    if !is_commit_id(hash) {
        return Err(malformed(format!("invalid commit id {:?}", hash)));
    }

    let parents = parents
        .split_whitespace()
        .map(|parent| {
            if is_commit_id(parent) {
                Ok(parent.to_string())
            } else {
                Err(malformed(format!("invalid parent id {:?}", parent)))
            }
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CommitNode::new(*hash, parents, None).message(*message))
}

fn is_commit_id(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_alphanumeric())
}
