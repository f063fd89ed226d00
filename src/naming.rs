//! Entity naming: pluralization and case-variant replacement pairs.

/// Naive English pluralization for single-word entity names.
///
/// Not a general-purpose pluralizer; it only has to be stable, because its
/// output becomes literal substitution strings.
///
/// * ends in `s` but not `ss` → already plural, unchanged
/// * ends in `s`, `x`, `z`, `sh`, `ch` → `+es`
/// * consonant + `y` → `y` becomes `ies`
/// * otherwise → `+s`
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let lower = word.to_lowercase();

    if lower.ends_with('s') && !lower.ends_with("ss") {
        return word.to_string();
    }

    if ["s", "x", "z", "sh", "ch"].iter().any(|suffix| lower.ends_with(suffix)) {
        return format!("{word}es");
    }

    let mut tail = lower.chars().rev();
    if let (Some('y'), Some(before)) = (tail.next(), tail.next()) {
        if !"aeiou".contains(before) {
            return format!("{}ies", &word[..word.len() - 1]);
        }
    }

    format!("{word}s")
}

/// First character upper-cased, the rest lower-cased.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Ordered `(old, new)` substitutions turning one entity noun into another.
///
/// All plural pairs come before all singular pairs: replacing `item` before
/// `items` would leave `categorys`-style leftovers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityReplacementPlan {
    pairs: Vec<(String, String)>,
}

impl EntityReplacementPlan {
    /// Builds the six pairs, or an empty plan when `old == new`.
    ///
    /// Order: UPPER plural, Capitalized plural, lower plural,
    /// UPPER singular, Capitalized singular, lower singular.
    pub fn new(old: &str, new: &str) -> Self {
        if old == new {
            return Self::default();
        }

        let old_lower = old.to_lowercase();
        let new_lower = new.to_lowercase();
        let old_plural = pluralize(&old_lower);
        let new_plural = pluralize(&new_lower);

        let pairs = vec![
            (old_plural.to_uppercase(), new_plural.to_uppercase()),
            (capitalize(&old_plural), capitalize(&new_plural)),
            (old_plural, new_plural),
            (old_lower.to_uppercase(), new_lower.to_uppercase()),
            (capitalize(&old_lower), capitalize(&new_lower)),
            (old_lower, new_lower),
        ];
        Self { pairs }
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// True if any `old` string occurs in `text`.
    pub fn matches(&self, text: &str) -> bool {
        self.pairs.iter().any(|(old, _)| text.contains(old.as_str()))
    }

    /// Applies every pair, in order, as a literal substring replacement.
    pub fn apply(&self, text: &str) -> String {
        self.pairs.iter().fold(text.to_string(), |acc, (old, new)| acc.replace(old.as_str(), new))
    }
}
