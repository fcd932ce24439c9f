/// A case-insensitive substring pattern used by search.
///
/// Built from raw user input: surrounding whitespace is trimmed and the rest
/// lower-cased. Blank input yields no pattern, which matches everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern(String);

impl Pattern {
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let trimmed = raw?.trim();
        if trimmed.is_empty() { return None; }
        Some(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str { &self.0 }

    pub fn is_match(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.0)
    }
}

/// True when `pattern` is absent or found in `haystack`.
pub fn passes(pattern: Option<&Pattern>, haystack: &str) -> bool {
    pattern.map_or(true, |p| p.is_match(haystack))
}
