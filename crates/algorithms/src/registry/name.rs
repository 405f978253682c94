//! Algorithm name parsing

/// Split `tmpl(inner)` into its template and inner name
///
/// Returns `None` for plain names and for malformed ones (unbalanced
/// parentheses, empty template or inner name, trailing text).
pub fn split_template(name: &str) -> Option<(&str, &str)> {
    let open = name.find('(')?;
    let (tmpl, rest) = name.split_at(open);
    let inner = rest.strip_prefix('(')?.strip_suffix(')')?;
    if tmpl.is_empty() || inner.is_empty() || !balanced(inner) {
        return None;
    }
    Some((tmpl, inner))
}

fn balanced(s: &str) -> bool {
    let mut depth = 0usize;
    for c in s.chars() {
        match c {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

/// Format the name of a template instance
pub fn instance_name(tmpl: &str, inner: &str) -> String {
    format!("{tmpl}({inner})")
}
