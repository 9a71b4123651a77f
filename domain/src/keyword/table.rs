//! Static synonym and classification-code tables per trade

use super::cip::CipCode;
use crate::core::trade::Trade;
use std::collections::HashMap;

/// Synonyms and CIP codes for each trade.
///
/// The table is immutable once handed to a
/// [`KeywordExpander`](super::KeywordExpander). Trades without an entry
/// still expand to their own label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordTable {
    synonyms: HashMap<Trade, Vec<String>>,
    codes: HashMap<Trade, Vec<CipCode>>,
}

impl KeywordTable {
    /// An empty table: every trade expands to its label alone.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in table.
    pub fn builtin() -> Self {
        let synonyms: [(Trade, &[&str]); 6] = [
            (
                Trade::Manufacturing,
                &["machining", "welding", "industrial maintenance", "mechatronics"],
            ),
            (
                Trade::Automotive,
                &["automotive technology", "diesel", "collision repair"],
            ),
            (
                Trade::Construction,
                &["carpentry", "electrician", "plumbing", "hvac"],
            ),
            (
                Trade::Energy,
                &["electrical power", "solar", "wind energy", "petroleum"],
            ),
            (
                Trade::Healthcare,
                &["nursing", "medical assistant", "pharmacy technician"],
            ),
            (
                Trade::InformationTechnology,
                &["computer science", "networking", "cybersecurity"],
            ),
        ];
        let codes: [(Trade, &[&str]); 6] = [
            (Trade::Manufacturing, &["48.05", "15.06", "15.04"]),
            (Trade::Automotive, &["47.06"]),
            (Trade::Construction, &["46.02", "46.03", "46.05", "46.04", "15.10"]),
            (Trade::Energy, &["15.17", "46.03", "15.05"]),
            (Trade::Healthcare, &["51.38", "51.39", "51.08"]),
            (Trade::InformationTechnology, &["11.01", "11.09", "11.10"]),
        ];

        let mut table = Self::empty();
        for (trade, words) in synonyms {
            table = table.with_synonyms(trade, words.iter().map(|w| w.to_string()).collect());
        }
        for (trade, list) in codes {
            table = table.with_codes(trade, list.iter().map(|c| CipCode::known(c)).collect());
        }
        table
    }

    /// Replace the synonyms for one trade.
    pub fn with_synonyms(mut self, trade: Trade, words: Vec<String>) -> Self {
        self.synonyms.insert(trade, words);
        self
    }

    /// Replace the classification codes for one trade.
    pub fn with_codes(mut self, trade: Trade, codes: Vec<CipCode>) -> Self {
        self.codes.insert(trade, codes);
        self
    }

    pub fn synonyms(&self, trade: Trade) -> &[String] {
        self.synonyms.get(&trade).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn codes(&self, trade: Trade) -> &[CipCode] {
        self.codes.get(&trade).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_trade() {
        let table = KeywordTable::builtin();
        for trade in Trade::ALL {
            assert!(!table.synonyms(trade).is_empty(), "{trade} has no synonyms");
            assert!(!table.codes(trade).is_empty(), "{trade} has no codes");
        }
    }

    #[test]
    fn test_builtin_codes_are_well_formed() {
        let table = KeywordTable::builtin();
        for trade in Trade::ALL {
            for code in table.codes(trade) {
                assert_eq!(CipCode::parse(code.as_str()).unwrap(), *code);
            }
        }
    }

    #[test]
    fn test_override_replaces_entry() {
        let table =
            KeywordTable::builtin().with_synonyms(Trade::Energy, vec!["geothermal".to_string()]);
        assert_eq!(table.synonyms(Trade::Energy), ["geothermal".to_string()]);
    }

    #[test]
    fn test_empty_table_lookups() {
        let table = KeywordTable::empty();
        assert!(table.synonyms(Trade::Healthcare).is_empty());
        assert!(table.codes(Trade::Healthcare).is_empty());
    }
}
