/// Separators collapsed into word boundaries by [`pascal_case`].
const SEPARATORS: [char; 4] = ['_', '/', '-', '.'];

/// Converts a field name into the PascalCase stem used for accessor names.
///
/// Each of `_ / - .` becomes a word boundary, every word gets an upper-cased
/// first character, and the words are concatenated. Characters after the first
/// in each word are left alone, so `userName` stays `UserName`.
pub fn pascal_case(text: &str) -> String {
    let spaced: String = text
        .chars()
        .map(|c| if SEPARATORS.contains(&c) { ' ' } else { c })
        .collect();

    let joined: String = spaced.split(' ').map(upper_first).collect();
    upper_first(&joined)
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Accessor names tried for `field_name`, in priority order.
///
/// Names that already carry the `is` prefix skip the `get` form.
pub fn accessor_candidates(field_name: &str) -> Vec<String> {
    let classified = pascal_case(field_name);
    let mut candidates = Vec::with_capacity(3);
    if !field_name.starts_with("is") {
        candidates.push(format!("get{classified}"));
    }
    candidates.push(format!("is{classified}"));
    candidates.push(classified);
    candidates
}
