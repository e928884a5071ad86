//! Name search for glossary listings.

/// Keep the names containing `query`, compared case-insensitively
///
/// A blank query keeps every name. Input order is preserved.
///
/// # Examples
///
/// ```
/// use glossary_store::filter_names;
///
/// let names = ["rhoL", "rhoV", "T"];
/// assert_eq!(filter_names(names, "RHO"), vec!["rhoL", "rhoV"]);
/// assert_eq!(filter_names(names, "  ").len(), 3);
/// ```
pub fn filter_names<I, S>(names: I, query: &str) -> Vec<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if query.trim().is_empty() {
        return names.into_iter().collect();
    }

    let needle = query.to_lowercase();
    names.into_iter().filter(|name| name.as_ref().to_lowercase().contains(&needle)).collect()
}
