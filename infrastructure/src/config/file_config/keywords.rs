//! Keyword table overrides from TOML (`[keywords]` and `[cip_codes]` sections)
//!
//! ```toml
//! [keywords]
//! construction = ["carpentry", "masonry", "welding"]
//!
//! [cip_codes]
//! healthcare = ["51.38", "51.39"]
//! ```
//!
//! A listed trade replaces the built-in entries for that trade; unlisted
//! trades keep theirs. The trade label itself is always searched first and
//! does not need to be listed.

use crate::config::issue::{ConfigIssue, ConfigIssueCode};
use std::collections::BTreeMap;
use trade_insight_domain::{CipCode, KeywordExpander, KeywordTable, Trade};

fn parse_trade(section: &str, key: &str) -> Result<Trade, ConfigIssue> {
    key.parse::<Trade>().map_err(|_| {
        ConfigIssue::warning(
            ConfigIssueCode::UnknownTrade {
                section: section.to_string(),
                key: key.to_string(),
            },
            format!("{}.{}: not a supported trade, entry ignored", section, key),
        )
    })
}

/// Apply the overrides to the built-in table.
pub fn build_keyword_table(
    keywords: &BTreeMap<String, Vec<String>>,
    cip_codes: &BTreeMap<String, Vec<String>>,
) -> (KeywordTable, Vec<ConfigIssue>) {
    let mut table = KeywordTable::builtin();
    let mut issues = Vec::new();

    for (key, words) in keywords {
        let trade = match parse_trade("keywords", key) {
            Ok(trade) => trade,
            Err(issue) => {
                issues.push(issue);
                continue;
            }
        };
        let mut parsed = Vec::with_capacity(words.len());
        for word in words {
            match KeywordExpander::parse_keyword(word) {
                Ok(word) => parsed.push(word),
                Err(_) => issues.push(ConfigIssue::warning(
                    ConfigIssueCode::EmptyKeyword {
                        trade: key.clone(),
                    },
                    format!("keywords.{}: blank keyword ignored", key),
                )),
            }
        }
        table = table.with_synonyms(trade, parsed);
    }

    for (key, codes) in cip_codes {
        let trade = match parse_trade("cip_codes", key) {
            Ok(trade) => trade,
            Err(issue) => {
                issues.push(issue);
                continue;
            }
        };
        let mut parsed = Vec::with_capacity(codes.len());
        for code in codes {
            match CipCode::parse(code) {
                Ok(code) => parsed.push(code),
                Err(e) => issues.push(ConfigIssue::warning(
                    ConfigIssueCode::InvalidCipCode {
                        trade: key.clone(),
                        value: code.clone(),
                    },
                    format!("cip_codes.{}: {}, entry ignored", key, e),
                )),
            }
        }
        table = table.with_codes(trade, parsed);
    }

    (table, issues)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.iter().map(|s| s.to_string()).collect()))
            .collect()
    }

    #[test]
    fn test_no_overrides_is_builtin() {
        let (table, issues) = build_keyword_table(&BTreeMap::new(), &BTreeMap::new());
        assert!(issues.is_empty());
        assert_eq!(
            table.synonyms(Trade::Construction),
            KeywordTable::builtin().synonyms(Trade::Construction)
        );
    }

    #[test]
    fn test_override_replaces_only_listed_trade() {
        let (table, issues) = build_keyword_table(
            &map(&[("construction", &["Masonry", "  "])]),
            &map(&[("healthcare", &["51.38", "5139"])]),
        );

        assert_eq!(table.synonyms(Trade::Construction), ["masonry".to_string()]);
        assert_eq!(
            table.synonyms(Trade::Healthcare),
            KeywordTable::builtin().synonyms(Trade::Healthcare)
        );
        let codes: Vec<_> = table
            .codes(Trade::Healthcare)
            .iter()
            .map(|c| c.as_str().to_string())
            .collect();
        assert_eq!(codes, vec!["51.38", "51.39"]);

        assert_eq!(issues.len(), 1);
        assert!(matches!(issues[0].code, ConfigIssueCode::EmptyKeyword { .. }));
    }

    #[test]
    fn test_unknown_trade_and_bad_code_are_reported() {
        let (_, issues) = build_keyword_table(
            &map(&[("agriculture", &["farming"])]),
            &map(&[("automotive", &["47.0x"])]),
        );
        assert_eq!(issues.len(), 2);
        assert!(matches!(issues[0].code, ConfigIssueCode::UnknownTrade { .. }));
        assert!(matches!(issues[1].code, ConfigIssueCode::InvalidCipCode { .. }));
    }
}
