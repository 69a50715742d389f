use graph::{render, CommitNode, History, RenderOptions};

/// A small history exercising fan-out, an adjacent merge and a merge that
/// has to cross another rail.
fn sample_history() -> Vec<CommitNode> {
    vec![
        CommitNode::with_parents("a1f3c09", &[]).message("Initial commit"),
        CommitNode::with_parents("b27de11", &["a1f3c09"]).message("Add parser"),
        CommitNode::with_parents("c90ab4e", &["a1f3c09"]).message("Start docs"),
        CommitNode::with_parents("d4410fa", &["b27de11"]).message("Parser: handle quotes"),
        CommitNode::with_parents("e5c2b77", &["b27de11"]).message("Experiment with caching"),
        CommitNode::with_parents("f06d3a2", &["d4410fa", "c90ab4e"]).message("Merge docs"),
        CommitNode::with_parents("0b81e9c", &["e5c2b77"]).message("Cache eviction"),
        CommitNode::with_parents("19ce4d0", &["f06d3a2", "0b81e9c"]).message("Merge caching"),
    ]
}

fn main() {
    println!("gitgraph demo");
    println!("=============\n");

    let history = match History::from_oldest_first(sample_history()) {
        Ok(h) => h,
        Err(e) => {
            eprintln!("Error building history: {}", e);
            return;
        }
    };

    let stats = history.stats();
    println!("History statistics:");
    println!("  Total commits: {}", stats.total_commits);
    println!("  Merge commits: {}", stats.merge_commits);
    println!("  Root commits: {}", stats.root_commits);
    println!();

    match render(&history, &RenderOptions::default()) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(e) => eprintln!("Error rendering graph: {}", e),
    }
}
