//! Case-insensitive name search over index entries.

use tracing::debug;

use super::entry::IndexEntry;

/// Return the entries whose name contains every term, ignoring case.
///
/// Matches keep index order. An empty term list matches every entry.
pub fn search<'a, S: AsRef<str>>(entries: &'a [IndexEntry], terms: &[S]) -> Vec<&'a IndexEntry> {
    let terms: Vec<String> = terms.iter().map(|t| t.as_ref().to_lowercase()).collect();

    let found: Vec<&IndexEntry> = entries
        .iter()
        .filter(|entry| {
            let name = entry.common_name.to_lowercase();
            terms.iter().all(|term| name.contains(term.as_str()))
        })
        .collect();

    debug!(terms = ?terms, candidates = entries.len(), matches = found.len(), "search");
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> IndexEntry {
        IndexEntry {
            common_name: name.to_string(),
            id: name.to_string(),
            url: format!("/Place/{name}"),
            lat: 51.5,
            lon: -0.1,
        }
    }

    fn names<'a>(found: &[&'a IndexEntry]) -> Vec<&'a str> {
        found.iter().map(|e| e.common_name.as_str()).collect()
    }

    fn sample() -> Vec<IndexEntry> {
        vec![
            entry("Soho Square , Soho"),
            entry("Frith Street, Soho"),
            entry("Great Marlborough Street, Soho"),
            entry("Hyde Park Corner, Hyde Park"),
        ]
    }

    #[test]
    fn single_term_is_case_insensitive() {
        let index = sample();
        let found = search(&index, &["SOHO"]);
        assert_eq!(
            names(&found),
            [
                "Soho Square , Soho",
                "Frith Street, Soho",
                "Great Marlborough Street, Soho"
            ]
        );
    }

    #[test]
    fn all_terms_must_match() {
        let index = sample();
        let found = search(&index, &["street", "soho"]);
        assert_eq!(
            names(&found),
            ["Frith Street, Soho", "Great Marlborough Street, Soho"]
        );

        let found = search(&index, &["street", "hyde"]);
        assert!(found.is_empty());
    }

    #[test]
    fn empty_terms_match_everything() {
        let index = sample();
        let found = search::<&str>(&index, &[]);
        assert_eq!(found.len(), index.len());
    }

    #[test]
    fn no_match_is_empty() {
        let index = sample();
        assert!(search(&index, &["paris"]).is_empty());
    }

    #[test]
    fn repeated_term_behaves_like_single() {
        let index = sample();
        assert_eq!(
            search(&index, &["hyde", "hyde"]),
            search(&index, &["hyde"])
        );
    }
}
