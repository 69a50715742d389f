use graph::{
    expand_branch, history_from_log, render, resolve_merge, CommitNode, GraphError, History,
    RenderOptions,
};
use pretty_assertions::assert_eq;

fn history(nodes: &[(&str, &[&str])]) -> History {
    History::from_oldest_first(
        nodes
            .iter()
            .map(|(id, parents)| CommitNode::with_parents(id, parents))
            .collect(),
    )
    .unwrap()
}

fn draw(history: &History) -> Vec<String> {
    render(history, &RenderOptions::default()).unwrap()
}

#[test]
fn single_root() {
    let lines = draw(&history(&[("A", &[])]));
    assert_eq!(lines, vec!["o   A"]);
}

#[test]
fn linear_history() {
    let lines = draw(&history(&[("A", &[]), ("B", &["A"])]));
    assert_eq!(lines, vec!["o   A", "o   B"]);
}

#[test]
fn adjacent_merge() {
    let lines = draw(&history(&[
        ("A", &[]),
        ("B", &["A"]),
        ("C", &["A"]),
        ("M", &["B", "C"]),
    ]));

    assert_eq!(
        lines,
        vec!["o   A", "|\\", "o |   B", "| o   C", "|/", "o   M"]
    );
}

#[test]
fn merge_across_a_rail() {
    let lines = draw(&history(&[
        ("R", &[]),
        ("A", &["R"]),
        ("X", &["R"]),
        ("B", &["A"]),
        ("C", &["A"]),
        ("M", &["B", "X"]),
        ("D", &["C"]),
    ]));

    assert_eq!(
        lines,
        vec![
            "o   R",
            "|\\",
            "o |   A",
            "|\\ \\",
            "| | o   X",
            "o | |   B",
            "| o |   C",
            "| |  \\",
            "| |__/",
            "|/|",
            "| |",
            "o |   M",
            "o   D",
        ]
    );
}

#[test]
fn three_way_fan_out() {
    let lines = draw(&history(&[
        ("A", &[]),
        ("B", &["A"]),
        ("C", &["A"]),
        ("D", &["A"]),
    ]));

    assert_eq!(
        lines,
        vec!["o   A", "|\\", "| \\", "| |\\", "o | |   B", "o |   C", "o   D"]
    );
}

#[test]
fn octopus_merge_is_rejected() {
    let history = history(&[
        ("A", &[]),
        ("B", &["A"]),
        ("C", &["A"]),
        ("D", &["A"]),
        ("M", &["B", "C", "D"]),
    ]);

    let err = render(&history, &RenderOptions::default()).unwrap_err();
    assert!(matches!(err, GraphError::UnsupportedMergeArity(_)));
}

#[test]
fn log_text_end_to_end() {
    let log = "\
'm0|b0 c0|Merge branch topic'
'c0|a0|topic work'
'b0|a0|main work'
'a0||initial'
";
    let history = history_from_log(log).unwrap();

    assert_eq!(
        draw(&history),
        vec![
            "o   a0 initial",
            "|\\",
            "o |   b0 main work",
            "| o   c0 topic work",
            "|/",
            "o   m0 Merge branch topic",
        ]
    );
}

#[test]
fn rail_counts_follow_parents_and_children() {
    let history = history(&[
        ("R", &[]),
        ("A", &["R"]),
        ("X", &["R"]),
        ("B", &["A"]),
        ("C", &["A"]),
        ("M", &["B", "X"]),
        ("S", &[]),
        ("D", &["C", "S"]),
        ("E", &["M", "D"]),
    ]);

    let mut rails: Vec<String> = Vec::new();
    for commit in history.commits() {
        let parents = history.parents(commit);
        let merged = resolve_merge(&rails, commit, parents).unwrap();
        assert_eq!(merged.len(), rails.len() + 1 - parents.len());

        let children = history.children(commit).len();
        let expanded = expand_branch(&merged, commit, children);
        assert_eq!(expanded.len(), merged.len() - 1 + children);

        let foreign = |labels: &[String]| -> Vec<String> {
            labels.iter().filter(|l| *l != commit).cloned().collect()
        };
        assert_eq!(foreign(&merged), foreign(&expanded));

        rails = expanded;
    }
    assert!(rails.is_empty());

    assert!(render(&history, &RenderOptions::default()).is_ok());
}
