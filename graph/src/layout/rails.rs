/// A column as seen while building connector art
///
/// Merge art needs to tell the rails being joined apart from rails that
/// merely pass through, without borrowing a commit ID for the purpose.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Rail {
    /// A branch lineage, labelled with the commit it leads to
    Branch(String),
    /// A rail taking part in the merge being drawn
    PendingMerge,
}

/// The ordered rail labels carried from one row to the next
///
/// The same label may sit on several rails at once after a fan-out, until
/// each child has claimed one of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RailState {
    rails: Vec<String>,
}

impl RailState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current rail labels, left to right
    pub fn rails(&self) -> &[String] {
        &self.rails
    }

    /// Swap in a new layout, returning the previous one
    pub fn replace(&mut self, rails: Vec<String>) -> Vec<String> {
        std::mem::replace(&mut self.rails, rails)
    }

    pub fn len(&self) -> usize {
        self.rails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rails.is_empty()
    }
}
