//! Search query templating
//!
//! Every query sent to a provider is produced by [`build_query`] or
//! [`build_term_query`] from an [`Intent`], a trade (or one of its
//! expanded terms), and a region. The rendered text is what free-text
//! providers send; schema-driven providers (College Scorecard) read the
//! structured fields instead.

use crate::core::{region::Region, trade::Trade};
use crate::keyword::SearchTerm;
use serde::Serialize;

/// What a query is trying to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// State-scoped BLS employment projections.
    StateOutlook,
    /// State workforce agency / regional labor market reports.
    RegionalWorkforce,
    /// National BLS outlook, the broadest outlook query.
    NationalOutlook,
    /// Institutions offering programs that match one term.
    Institutions,
    /// Current job postings.
    JobPostings,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::StateOutlook => "state_outlook",
            Intent::RegionalWorkforce => "regional_workforce",
            Intent::NationalOutlook => "national_outlook",
            Intent::Institutions => "institutions",
            Intent::JobPostings => "job_postings",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fully-built provider query (Value Object).
///
/// Determined entirely by its inputs and never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    intent: Intent,
    trade: Trade,
    term: SearchTerm,
    region: Region,
    text: String,
}

impl SearchQuery {
    pub fn intent(&self) -> Intent {
        self.intent
    }

    pub fn trade(&self) -> Trade {
        self.trade
    }

    pub fn term(&self) -> &SearchTerm {
        &self.term
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// Rendered free-text query.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Build a trade-level query; the term is the trade's lowercase label.
pub fn build_query(intent: Intent, trade: Trade, region: Region) -> SearchQuery {
    build_term_query(
        intent,
        trade,
        SearchTerm::Keyword(trade.lowercase_label()),
        region,
    )
}

/// Build a query for one expanded term of a trade.
pub fn build_term_query(
    intent: Intent,
    trade: Trade,
    term: SearchTerm,
    region: Region,
) -> SearchQuery {
    let state = region.name();
    let label = trade.label();
    let text = match intent {
        Intent::StateOutlook => format!(
            "Bureau of Labor Statistics employment projections for the {} industry in {}",
            label, state
        ),
        Intent::RegionalWorkforce => format!(
            "{} workforce commission labor market outlook for {} occupations",
            state, label
        ),
        Intent::NationalOutlook => format!(
            "Bureau of Labor Statistics Occupational Outlook Handbook {} occupations national employment projections",
            label
        ),
        Intent::Institutions => match &term {
            SearchTerm::Keyword(keyword) => format!(
                "colleges and universities in {} offering {} programs",
                state, keyword
            ),
            SearchTerm::Code(code) => format!(
                "colleges and universities in {} offering CIP {} programs",
                state, code
            ),
        },
        Intent::JobPostings => format!("{} jobs in {}", term.as_str(), state),
    };

    SearchQuery {
        intent,
        trade,
        term,
        region,
        text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyword::CipCode;

    fn texas() -> Region {
        Region::from_name("Texas").unwrap()
    }

    #[test]
    fn test_state_outlook_is_state_scoped() {
        let q = build_query(Intent::StateOutlook, Trade::Construction, texas());
        assert_eq!(
            q.text(),
            "Bureau of Labor Statistics employment projections for the Construction industry in Texas"
        );
        assert_eq!(q.term(), &SearchTerm::Keyword("construction".to_string()));
    }

    #[test]
    fn test_national_outlook_omits_state() {
        let q = build_query(Intent::NationalOutlook, Trade::Energy, texas());
        assert!(!q.text().contains("Texas"));
        assert!(q.text().contains("Energy"));
    }

    #[test]
    fn test_institutions_query_by_keyword_and_code() {
        let by_keyword = build_term_query(
            Intent::Institutions,
            Trade::Construction,
            SearchTerm::Keyword("carpentry".to_string()),
            texas(),
        );
        assert_eq!(
            by_keyword.text(),
            "colleges and universities in Texas offering carpentry programs"
        );

        let code = CipCode::parse("46.02").unwrap();
        let by_code = build_term_query(
            Intent::Institutions,
            Trade::Construction,
            SearchTerm::Code(code.clone()),
            texas(),
        );
        assert!(by_code.text().contains("CIP 46.02"));
        assert_eq!(by_code.term(), &SearchTerm::Code(code));
        assert_eq!(by_code.region().abbreviation(), "TX");
    }

    #[test]
    fn test_job_postings_query() {
        let q = build_query(Intent::JobPostings, Trade::Healthcare, texas());
        assert_eq!(q.text(), "healthcare jobs in Texas");
        assert_eq!(q.intent(), Intent::JobPostings);
    }

    #[test]
    fn test_queries_are_deterministic() {
        let a = build_query(Intent::RegionalWorkforce, Trade::Automotive, texas());
        let b = build_query(Intent::RegionalWorkforce, Trade::Automotive, texas());
        assert_eq!(a, b);
    }
}
