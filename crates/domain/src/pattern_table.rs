mod builtin;

use std::sync::Arc;

/// Single-substring rule. Patterns are stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternRule {
    pub pattern: Arc<str>,
    pub asset_id: Arc<str>,
}

impl PatternRule {
    pub fn new(pattern: &str, asset_id: &str) -> Self {
        Self {
            pattern: pattern.to_lowercase().into(),
            asset_id: asset_id.into(),
        }
    }

    fn matches(&self, haystack: &str) -> bool {
        haystack.contains(&*self.pattern)
    }
}

/// Rule that fires only when both substrings occur in the same label,
/// in any order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DualPatternRule {
    pub pattern_a: Arc<str>,
    pub pattern_b: Arc<str>,
    pub asset_id: Arc<str>,
}

impl DualPatternRule {
    pub fn new(pattern_a: &str, pattern_b: &str, asset_id: &str) -> Self {
        Self {
            pattern_a: pattern_a.to_lowercase().into(),
            pattern_b: pattern_b.to_lowercase().into(),
            asset_id: asset_id.into(),
        }
    }

    fn matches(&self, haystack: &str) -> bool {
        haystack.contains(&*self.pattern_a) && haystack.contains(&*self.pattern_b)
    }
}

/// Ordered, immutable rule tables mapping label fragments to bundled assets.
#[derive(Debug, Clone, Default)]
pub struct PatternTable {
    single: Vec<PatternRule>,
    dual: Vec<DualPatternRule>,
}

impl PatternTable {
    pub fn new(single: Vec<PatternRule>, dual: Vec<DualPatternRule>) -> Self {
        Self { single, dual }
    }

    /// Tables shipped with the application.
    pub fn builtin() -> Self {
        Self::new(builtin::single_rules(), builtin::dual_rules())
    }

    pub fn single_rules(&self) -> &[PatternRule] {
        &self.single
    }

    pub fn dual_rules(&self) -> &[DualPatternRule] {
        &self.dual
    }

    /// First single rule contained in `raw`, case-insensitively.
    pub fn match_single(&self, raw: &str) -> Option<&str> {
        self.single_candidates(raw).next()
    }

    /// First dual rule whose two fragments are both contained in `raw`.
    pub fn match_dual(&self, raw: &str) -> Option<&str> {
        self.dual_candidates(raw).next()
    }

    /// Asset ids of every matching single rule, in table order.
    pub fn single_candidates<'a>(&'a self, raw: &str) -> impl Iterator<Item = &'a str> + 'a {
        let haystack = raw.to_lowercase();
        self.single
            .iter()
            .filter(move |rule| rule.matches(&haystack))
            .map(|rule| &*rule.asset_id)
    }

    /// Asset ids of every matching dual rule, in table order.
    pub fn dual_candidates<'a>(&'a self, raw: &str) -> impl Iterator<Item = &'a str> + 'a {
        let haystack = raw.to_lowercase();
        self.dual
            .iter()
            .filter(move |rule| rule.matches(&haystack))
            .map(|rule| &*rule.asset_id)
    }
}
