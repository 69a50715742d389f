/// Ladder of diagonals fanning one rail out into `splits + 1` rails.
///
/// Each extra branch opens with `|\`; between branches a `\` steps the new
/// rail one column further right. `splits` branches take `2 * splits - 1`
/// lines and the last one is indented `splits - 1` rails deep.
///
/// ```text
/// |\
/// | \
/// | |\
/// ```
pub fn split_art(splits: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity((2 * splits).saturating_sub(1));
    for depth in 0..splits {
        lines.push(format!("{}|\\", "| ".repeat(depth)));
        if depth + 1 == splits {
            break;
        }
        lines.push(format!("{}\\", "| ".repeat(depth + 1)));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_split() {
        assert_eq!(split_art(1), ["|\\"]);
    }

    #[test]
    fn test_three_way_ladder() {
        assert_eq!(split_art(2), ["|\\", "| \\", "| |\\"]);
        assert_eq!(
            split_art(3),
            ["|\\", "| \\", "| |\\", "| | \\", "| | |\\"]
        );
    }

    #[test]
    fn test_line_count_and_depth() {
        for splits in 1..8 {
            let lines = split_art(splits);
            assert_eq!(lines.len(), 2 * splits - 1);
            let last = lines.last().unwrap();
            assert_eq!(last.matches("| ").count(), splits - 1);
            assert!(last.ends_with("|\\"));
        }
    }

    #[test]
    fn test_no_split() {
        assert!(split_art(0).is_empty());
    }
}
