//! Text layout of an aggregated error report

/// Indentation added for each nesting level
const INDENT: &str = "    ";

/// Marker placed in front of the first line of every entry
const BULLET: &str = "* ";

/// Header line announcing how many entries follow
pub(super) fn header(count: usize) -> String {
    let grammar = if count == 1 {
        "1 error".to_string()
    } else {
        format!("{} errors", count)
    };

    format!("encountered {} during validation:", grammar)
}

/// Bullet the first line of `text` and indent every line by one level
pub(super) fn bullet_block(text: &str) -> String {
    format!("{}{}", BULLET, text)
        .split('\n')
        .map(|line| format!("{}{}", INDENT, line))
        .collect::<Vec<_>>()
        .join("\n")
}
