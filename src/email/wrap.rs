//! Fixed-width word wrapping for plain-text mail bodies.

/// Wrap `text` so lines stay within `width` columns where possible.
///
/// Breaks only on spaces and never splits a word, so a single word longer
/// than `width` is left intact on its own line. Pre-existing newlines are
/// preserved. Wrapping is purely cosmetic: rejoining the wrapped lines and
/// collapsing whitespace reproduces the input text, nothing is truncated
/// or dropped.
pub(crate) fn word_wrap(text: &str, width: usize) -> String {
    let mut wrapped = String::with_capacity(text.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            wrapped.push('\n');
        }
        wrap_line(line, width, &mut wrapped);
    }
    wrapped
}

fn wrap_line(line: &str, width: usize, out: &mut String) {
    let mut column = 0;
    for word in line.split(' ').filter(|word| !word.is_empty()) {
        let len = word.chars().count();
        if column == 0 {
            out.push_str(word);
            column = len;
        } else if column + 1 + len <= width {
            out.push(' ');
            out.push_str(word);
            column += 1 + len;
        } else {
            out.push('\n');
            out.push_str(word);
            column = len;
        }
    }
}
