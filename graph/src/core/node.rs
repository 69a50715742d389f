/// A commit as supplied by a history loader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitNode {
    /// Commit ID (usually an abbreviated SHA)
    pub id: String,
    /// Parent commit IDs, first parent first
    pub parents: Vec<String>,
    /// One-line summary, if any
    pub message: Option<String>,
}

impl CommitNode {
    pub fn new(id: impl Into<String>, parents: Vec<String>, message: Option<String>) -> Self {
        Self {
            id: id.into(),
            parents,
            message,
        }
    }

    /// Shorthand used heavily by tests and the demo binary.
    pub fn with_parents(id: &str, parents: &[&str]) -> Self {
        Self::new(id, parents.iter().map(|p| p.to_string()).collect(), None)
    }

    /// Attach a message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.message = if message.is_empty() { None } else { Some(message) };
        self
    }

    /// Check if this is a root commit (no parents)
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    /// Check if this is a merge commit (multiple parents)
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert!(CommitNode::with_parents("a", &[]).is_root());
        assert!(!CommitNode::with_parents("b", &["a"]).is_merge());
        assert!(CommitNode::with_parents("m", &["a", "b"]).is_merge());
    }

    #[test]
    fn test_empty_message_is_absent() {
        let node = CommitNode::with_parents("a", &[]).message("");
        assert_eq!(node.message, None);
        let node = CommitNode::with_parents("a", &[]).message("init");
        assert_eq!(node.message.as_deref(), Some("init"));
    }
}
