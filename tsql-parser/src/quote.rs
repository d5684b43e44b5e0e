/// Wraps `s` in single quotes, escaping `\` as `\\`, newlines as `\n`, and
/// `'` as `\'`.
pub fn quote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\'' => out.push_str("\\'"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Joins `segments` with `.`, wrapping each in double quotes. Inner `"`
/// characters are not escaped in v1 — segments containing `"` are out of
/// scope.
pub fn quote_ident(segments: &[&str]) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push('.');
        }
        out.push('"');
        out.push_str(segment);
        out.push('"');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_string_escapes_backslash_and_quote() {
        assert_eq!(quote_string(r"it's a \test"), r"'it\'s a \\test'");
    }

    #[test]
    fn quote_ident_joins_segments_with_dots() {
        assert_eq!(quote_ident(&["1h", "cpu"]), "\"1h\".\"cpu\"");
        assert_eq!(quote_ident(&["mydb"]), "\"mydb\"");
    }
}
