use smallvec::SmallVec;
use std::collections::HashMap;
use std::hash::Hash;

/// Multiset view of a rail sequence: label -> number of rails carrying it
#[derive(Debug, Clone)]
pub struct LabelCounts<'a, T> {
    counts: HashMap<&'a T, usize>,
}

impl<'a, T: Eq + Hash> LabelCounts<'a, T> {
    pub fn of(labels: &'a [T]) -> Self {
        let mut counts = HashMap::with_capacity(labels.len());
        for label in labels {
            *counts.entry(label).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn get(&self, label: &T) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Both sequences use exactly the same set of labels.
    pub fn same_labels(&self, other: &LabelCounts<'_, T>) -> bool {
        self.counts.len() == other.counts.len()
            && self.counts.keys().all(|label| other.counts.contains_key(*label))
    }

    /// Labels that lost rails going from `self` to `after`, with the loss.
    pub fn decreased(&self, after: &LabelCounts<'_, T>) -> Vec<(&'a T, usize)> {
        self.counts
            .iter()
            .filter_map(|(&label, &count)| {
                let remaining = after.get(label);
                (count > remaining).then(|| (label, count - remaining))
            })
            .collect()
    }
}

/// A maximal stretch of adjacent rails with the same label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<'a, T> {
    pub label: &'a T,
    pub len: usize,
}

/// Run-length encode a rail sequence.
pub fn runs<T: PartialEq>(labels: &[T]) -> SmallVec<[Run<'_, T>; 8]> {
    let mut encoded: SmallVec<[Run<'_, T>; 8]> = SmallVec::new();
    for label in labels {
        if let Some(run) = encoded.last_mut().filter(|run| run.label == label) {
            run.len += 1;
            continue;
        }
        encoded.push(Run { label, len: 1 });
    }
    encoded
}
