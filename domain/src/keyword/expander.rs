//! Keyword expander and the ordered keyword set it produces

use super::cip::CipCode;
use super::table::KeywordTable;
use crate::core::error::DomainError;
use crate::core::trade::Trade;
use serde::{Deserialize, Serialize};

/// Ordered, duplicate-free, non-empty list of search keywords.
///
/// Position is priority: providers that accept one keyword per call are
/// queried in this order, and the dedup merge keeps the first keyword's
/// scalar values on conflict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    /// Start a set with its primary keyword.
    fn with_primary(primary: String) -> Self {
        Self {
            keywords: vec![primary],
        }
    }

    /// Append a keyword unless it is blank or already present (case-insensitive).
    fn push(&mut self, keyword: &str) {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() || self.keywords.contains(&keyword) {
            return;
        }
        self.keywords.push(keyword);
    }

    /// The primary keyword (always the trade's lowercase label).
    pub fn primary(&self) -> &str {
        &self.keywords[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.keywords
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// How the institutions need matches programs to a trade.
///
/// Both strategies exist in the wild and neither is treated as the
/// canonical one; the choice is a configuration decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStrategy {
    /// Free-text keyword search over program titles.
    #[default]
    TitleKeyword,
    /// Exact match on CIP program classification codes.
    ClassificationCode,
}

impl MatchStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStrategy::TitleKeyword => "title-keyword",
            MatchStrategy::ClassificationCode => "classification-code",
        }
    }
}

impl std::fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MatchStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title-keyword" | "title" | "keyword" => Ok(MatchStrategy::TitleKeyword),
            "classification-code" | "code" | "cip" => Ok(MatchStrategy::ClassificationCode),
            other => Err(format!(
                "unknown match strategy '{}' (expected 'title-keyword' or 'classification-code')",
                other
            )),
        }
    }
}

/// One institutions lookup term, in the form its strategy needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SearchTerm {
    Keyword(String),
    Code(CipCode),
}

impl SearchTerm {
    pub fn as_str(&self) -> &str {
        match self {
            SearchTerm::Keyword(k) => k,
            SearchTerm::Code(c) => c.as_str(),
        }
    }
}

impl std::fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Expands a trade into search keywords and classification codes.
#[derive(Debug, Clone)]
pub struct KeywordExpander {
    table: KeywordTable,
}

impl KeywordExpander {
    pub fn new(table: KeywordTable) -> Self {
        Self { table }
    }

    /// Expand a trade into its keyword set.
    ///
    /// The first keyword is the trade's lowercase label whether or not the
    /// table has an entry for it; table synonyms follow in table order.
    pub fn expand(&self, trade: Trade) -> KeywordSet {
        let mut set = KeywordSet::with_primary(trade.lowercase_label());
        for synonym in self.table.synonyms(trade) {
            set.push(synonym);
        }
        set
    }

    /// CIP codes for a trade, possibly empty.
    pub fn codes(&self, trade: Trade) -> &[CipCode] {
        self.table.codes(trade)
    }

    /// Institutions lookup terms for a trade under a strategy.
    ///
    /// A trade with no configured codes falls back to its keywords so the
    /// institutions need is never left without a query.
    pub fn terms(&self, trade: Trade, strategy: MatchStrategy) -> Vec<SearchTerm> {
        match strategy {
            MatchStrategy::ClassificationCode if !self.codes(trade).is_empty() => self
                .codes(trade)
                .iter()
                .cloned()
                .map(SearchTerm::Code)
                .collect(),
            _ => self
                .expand(trade)
                .iter()
                .map(|k| SearchTerm::Keyword(k.to_string()))
                .collect(),
        }
    }

    /// Parse a user-supplied keyword, rejecting blanks.
    pub fn parse_keyword(keyword: &str) -> Result<String, DomainError> {
        let trimmed = keyword.trim();
        if trimmed.is_empty() {
            Err(DomainError::EmptyKeyword)
        } else {
            Ok(trimmed.to_lowercase())
        }
    }
}

impl Default for KeywordExpander {
    fn default() -> Self {
        Self::new(KeywordTable::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_trade_expands_to_label_first() {
        for table in [KeywordTable::builtin(), KeywordTable::empty()] {
            let expander = KeywordExpander::new(table);
            for trade in Trade::ALL {
                let set = expander.expand(trade);
                assert!(!set.is_empty());
                assert_eq!(set.primary(), trade.lowercase_label());
            }
        }
    }

    #[test]
    fn test_identity_fallback_without_entry() {
        let expander = KeywordExpander::new(KeywordTable::empty());
        let set = expander.expand(Trade::Energy);
        assert_eq!(set.as_slice(), ["energy".to_string()]);
    }

    #[test]
    fn test_synonyms_follow_in_table_order() {
        let table = KeywordTable::empty()
            .with_synonyms(Trade::Construction, vec!["carpentry".into(), "masonry".into()]);
        let set = KeywordExpander::new(table).expand(Trade::Construction);
        let keywords: Vec<_> = set.iter().collect();
        assert_eq!(keywords, vec!["construction", "carpentry", "masonry"]);
    }

    #[test]
    fn test_duplicates_and_blanks_are_skipped() {
        let table = KeywordTable::empty().with_synonyms(
            Trade::Construction,
            vec![
                "Construction".into(),
                "  ".into(),
                "carpentry".into(),
                "CARPENTRY".into(),
            ],
        );
        let set = KeywordExpander::new(table).expand(Trade::Construction);
        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice()[1], "carpentry");
    }

    #[test]
    fn test_terms_by_strategy() {
        let expander = KeywordExpander::default();
        let by_title = expander.terms(Trade::Healthcare, MatchStrategy::TitleKeyword);
        assert_eq!(by_title[0], SearchTerm::Keyword("healthcare".to_string()));

        let by_code = expander.terms(Trade::Healthcare, MatchStrategy::ClassificationCode);
        assert_eq!(by_code[0], SearchTerm::Code(CipCode::parse("51.38").unwrap()));
        assert!(by_code.iter().all(|t| matches!(t, SearchTerm::Code(_))));
    }

    #[test]
    fn test_code_strategy_falls_back_to_keywords() {
        let expander = KeywordExpander::new(KeywordTable::empty());
        let terms = expander.terms(Trade::Energy, MatchStrategy::ClassificationCode);
        assert_eq!(terms, vec![SearchTerm::Keyword("energy".to_string())]);
    }

    #[test]
    fn test_match_strategy_parse() {
        assert_eq!(
            "classification-code".parse::<MatchStrategy>().unwrap(),
            MatchStrategy::ClassificationCode
        );
        assert_eq!("title".parse::<MatchStrategy>().unwrap(), MatchStrategy::TitleKeyword);
        assert!("fuzzy".parse::<MatchStrategy>().is_err());
    }

    #[test]
    fn test_parse_keyword() {
        assert_eq!(KeywordExpander::parse_keyword(" Welding ").unwrap(), "welding");
        assert_eq!(
            KeywordExpander::parse_keyword("   ").unwrap_err(),
            DomainError::EmptyKeyword
        );
    }
}
