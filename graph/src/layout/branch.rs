/// Give every child of `commit` its own rail.
///
/// Each rail carrying `commit` becomes `children` adjacent copies; a tip
/// commit (no children) gives its rail up.
pub fn expand_branch(rails: &[String], commit: &str, children: usize) -> Vec<String> {
    rails
        .iter()
        .flat_map(|rail| {
            let copies = if rail == commit { children } else { 1 };
            std::iter::repeat(rail).take(copies).cloned()
        })
        .collect()
}
