/// Checks that a glossary name can be used as a LaTeX control word
///
/// Names start with an ASCII letter followed by ASCII letters or digits. The stores accept
/// any name; this check belongs to the editing surface.
///
/// # Examples
///
/// ```
/// use glossary_store::is_valid_name;
///
/// assert!(is_valid_name("rhoL2"));
/// assert!(!is_valid_name("2rho"));
/// assert!(!is_valid_name("rho_L"));
/// ```
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

/// Checks that every `{` in `value` is closed and no `}` closes more than was opened
///
/// Record fields are written verbatim between braces, so an unbalanced field would be cut
/// short or make its whole line unreadable on the next load.
///
/// # Examples
///
/// ```
/// use glossary_store::has_balanced_braces;
///
/// assert!(has_balanced_braces(r"\rho_{L}"));
/// assert!(!has_balanced_braces("open }"));
/// assert!(!has_balanced_braces(r"\hat{x"));
/// ```
pub fn has_balanced_braces(value: &str) -> bool {
    let mut depth = 0usize;
    for ch in value.chars() {
        match ch {
            '{' => depth += 1,
            '}' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

/// The control sequence that invokes a glossary entry in a document (`\name`)
pub fn macro_reference(name: &str) -> String {
    format!("\\{name}")
}
