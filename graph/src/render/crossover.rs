use super::split::split_art;
use crate::error::{GraphError, Result};
use crate::layout::{runs, LabelCounts};
use std::hash::Hash;

/// The four-line loop that carries a rail over `gap` rails and back under
/// them to the left.
fn crossover(gap: usize) -> [String; 4] {
    let rails = "| ".repeat(gap);
    [
        format!("| {} \\", rails),
        format!("| {}_/", "|_".repeat(gap)),
        format!("|/{}  ", rails),
        format!("| {} ", rails),
    ]
}

/// Connector art for a two-way merge.
///
/// `before` and `after` differ by exactly one rail of a single label: the
/// right-hand rail of that label is folded into the left-hand one. Rails
/// between the two are bridged with the crossover loop; rails to the right
/// shift one column left. Adjacent rails need only a single `|/` line.
pub fn merge_art<T: Eq + Hash>(before: &[T], after: &[T]) -> Result<Vec<String>> {
    if before.len() != after.len() + 1 {
        return Err(GraphError::UnsupportedMergeArity(format!(
            "{} rails cannot fold into {} with a two-way merge",
            before.len(),
            after.len()
        )));
    }

    let merged = match LabelCounts::of(before)
        .decreased(&LabelCounts::of(after))
        .as_slice()
    {
        &[(label, 1)] => label,
        other => {
            return Err(GraphError::LayoutInconsistency(format!(
                "a merge must close exactly one rail, {} labels changed",
                other.len()
            )))
        }
    };

    let dest = after.iter().position(|rail| rail == merged);
    let dest = match dest {
        Some(dest) if before.iter().position(|rail| rail == merged) == Some(dest) => dest,
        _ => {
            return Err(GraphError::LayoutInconsistency(
                "merge target moved between layouts".to_string(),
            ))
        }
    };
    let origin = before[dest + 1..]
        .iter()
        .position(|rail| rail == merged)
        .map(|offset| dest + 1 + offset)
        .ok_or_else(|| {
            GraphError::LayoutInconsistency("merge source rail not found".to_string())
        })?;

    let lead = "| ".repeat(dest);
    let trailing = before.len() - origin - 1;
    let gap = origin - dest - 1;

    if gap == 0 {
        return Ok(vec![format!("{}|/{}", lead, " /".repeat(trailing))]);
    }

    let tails = [" \\", " /", "/ ", "/ "];
    Ok(crossover(gap)
        .iter()
        .zip(tails)
        .map(|(line, tail)| {
            format!("{}{}{}", lead, line, tail.repeat(trailing))
                .trim_end()
                .to_string()
        })
        .collect())
}

/// Connector art for one rail splitting into several.
///
/// Both layouts must carry the same labels in the same order; exactly one
/// run of equal labels grows. Rails left of the split pass straight down,
/// rails to its right are pushed right with `\`.
pub fn branch_art<T: Eq + Hash>(before: &[T], after: &[T]) -> Result<Vec<String>> {
    if after.len() <= before.len() {
        return Err(GraphError::LayoutInconsistency(format!(
            "a branch must widen the rails, got {} -> {}",
            before.len(),
            after.len()
        )));
    }
    if !LabelCounts::of(before).same_labels(&LabelCounts::of(after)) {
        return Err(GraphError::LayoutInconsistency(
            "rail labels changed across a branch".to_string(),
        ));
    }

    let start = runs(before);
    let finish = runs(after);
    if start.len() != finish.len()
        || start.iter().zip(&finish).any(|(from, to)| from.label != to.label)
    {
        return Err(GraphError::LayoutInconsistency(
            "rail order changed across a branch".to_string(),
        ));
    }

    let grown: Vec<usize> = start
        .iter()
        .zip(&finish)
        .enumerate()
        .filter(|(_, (from, to))| from.len != to.len)
        .map(|(index, _)| index)
        .collect();
    let index = match grown.as_slice() {
        &[index] if finish[index].len > start[index].len => index,
        _ => {
            return Err(GraphError::LayoutInconsistency(
                "a branch must widen exactly one rail".to_string(),
            ))
        }
    };

    let passing: usize = start[..index].iter().map(|run| run.len).sum();
    let lead = "| ".repeat(passing + start[index].len - 1);
    let tail = " \\".repeat(finish[index + 1..].iter().map(|run| run.len).sum());

    Ok(split_art(finish[index].len - start[index].len)
        .into_iter()
        .map(|line| format!("{}{}{}", lead, line, tail))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{pending_merge, resolve_merge, Rail};

    fn rails(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_crossover_shape() {
        assert_eq!(
            crossover(3),
            [
                "| | | |  \\".to_string(),
                "| |_|_|__/".to_string(),
                "|/| | |   ".to_string(),
                "| | | |  ".to_string(),
            ]
        );
    }

    #[test]
    fn test_merge_over_one_rail() {
        let lines = merge_art(&[1, 2, 1], &[1, 2]).unwrap();
        assert_eq!(lines, ["| |  \\", "| |__/", "|/|", "| |"]);
    }

    #[test]
    fn test_merge_with_trailing_rails() {
        let lines = merge_art(&[1, 2, 2, 3, 1, 4], &[1, 2, 2, 3, 4]).unwrap();
        assert_eq!(
            lines,
            ["| | | |  \\ \\", "| |_|_|__/ /", "|/| | |   /", "| | | |  /"]
        );
    }

    #[test]
    fn test_adjacent_merge_is_one_line() {
        assert_eq!(merge_art(&[1, 1], &[1]).unwrap(), ["|/"]);
        assert_eq!(merge_art(&[1, 1, 2], &[1, 2]).unwrap(), ["|/ /"]);
        assert_eq!(merge_art(&[0, 1, 1, 2, 3], &[0, 1, 2, 3]).unwrap(), ["| |/ / /"]);
    }

    #[test]
    fn test_merge_rejects_wider_collapse() {
        let err = merge_art(&[1, 1, 1], &[1]).unwrap_err();
        assert!(matches!(err, GraphError::UnsupportedMergeArity(_)));
    }

    #[test]
    fn test_merge_rejects_relabelled_rails() {
        let err = merge_art(&[1, 2, 3], &[4, 5]).unwrap_err();
        assert!(matches!(err, GraphError::LayoutInconsistency(_)));
    }

    #[test]
    fn test_merge_shape_ignores_parent_positions() {
        let parents = rails(&["b", "c"]);
        let art = |labels: &[&str]| {
            let before = rails(labels);
            let after = resolve_merge(&before, "m", &parents).unwrap();
            let (start, finish): (Vec<Rail>, Vec<Rail>) =
                pending_merge(&before, &after, "m", &parents);
            merge_art(&start, &finish).unwrap()
        };

        let forward = art(&["b", "x", "c"]);
        assert_eq!(forward, art(&["c", "x", "b"]));

        let shifted = art(&["y", "b", "x", "c"]);
        let padded: Vec<String> = forward.iter().map(|line| format!("| {}", line)).collect();
        assert_eq!(shifted, padded);
    }

    #[test]
    fn test_branch_in_middle() {
        let lines = branch_art(&[1, 2, 3], &[1, 2, 2, 3]).unwrap();
        assert_eq!(lines, ["| |\\ \\"]);
    }

    #[test]
    fn test_branch_matches_plain_split_when_alone() {
        assert_eq!(branch_art(&[7], &[7, 7, 7]).unwrap(), split_art(2));
    }

    #[test]
    fn test_three_way_branch_with_neighbours() {
        let lines = branch_art(&["x", "a", "y"], &["x", "a", "a", "a", "y"]).unwrap();
        assert_eq!(lines, ["| |\\ \\", "| | \\ \\", "| | |\\ \\"]);
    }

    #[test]
    fn test_branch_rejects_foreign_labels() {
        let err = branch_art(&[1, 2], &[1, 1, 3]).unwrap_err();
        assert!(matches!(err, GraphError::LayoutInconsistency(_)));
    }

    #[test]
    fn test_branch_rejects_narrowing() {
        let err = branch_art(&[1, 1, 2], &[1, 2]).unwrap_err();
        assert!(matches!(err, GraphError::LayoutInconsistency(_)));
    }
}
