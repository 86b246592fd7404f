fn is_word_char(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Turns a file name into a C identifier: non-word characters become `_`,
/// and a leading digit gets a `_` prefix.
pub fn sanitize_identifier(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 1);
    if name.chars().next().is_some_and(|c| c.is_numeric()) {
        out.push('_');
    }
    out.extend(name.chars().map(|c| if is_word_char(c) { c } else { '_' }));
    out
}
