use core::fmt;

/// Writes `items` separated by `sep`, using each item's [`fmt::Display`].
pub(crate) fn display_separated<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    sep: &str,
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

/// Writes `items` separated by `", "`.
pub(crate) fn display_comma_separated<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
) -> fmt::Result {
    display_separated(f, items, ", ")
}

/// Escapes a string for embedding in a single-quoted QL string literal:
/// `\` becomes `\\`, `'` becomes `\'`, matching `QuoteString`.
pub(crate) fn escape_single_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}
