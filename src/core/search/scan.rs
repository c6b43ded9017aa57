//! Substring scan over article collections.
//!
//! This is the no-precomputation search path: each query runs the KMP
//! matcher once per article, against the case-folded title and
//! optionally the description. Nothing is cached between queries.

use crate::core::error::{NewsdeskError, Result};
use crate::core::search::kmp;
use crate::core::types::{Article, ArticleMatch};

/// Stateless substring scanner
#[derive(Debug, Clone)]
pub struct Scanner {
    match_descriptions: bool,
    max_query_length: usize,
}

impl Scanner {
    /// Create a scanner
    ///
    /// `match_descriptions` extends matching beyond titles to the
    /// description field; `max_query_length` bounds accepted queries
    /// (in chars).
    pub fn new(match_descriptions: bool, max_query_length: usize) -> Self {
        Self {
            match_descriptions,
            max_query_length,
        }
    }

    /// Filter `articles` down to those containing `query` as a
    /// substring (case-insensitive).
    ///
    /// Both sides are folded per char (first char of each
    /// `to_lowercase` expansion), so reported offsets always index
    /// the original text, even for chars whose lowercase form has a
    /// different length (e.g. 'İ').
    ///
    /// A blank query matches nothing: an all-whitespace search box is
    /// a request to clear results, not to list every article.
    pub fn scan<'a>(&self, articles: &'a [Article], query: &str) -> Result<Vec<ArticleMatch<'a>>> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }

        if trimmed.chars().count() > self.max_query_length {
            return Err(NewsdeskError::InvalidQuery(format!(
                "Query exceeds maximum length of {} characters",
                self.max_query_length
            )));
        }

        let pattern = fold_chars(trimmed);

        let mut matches = Vec::new();
        for article in articles {
            let title = fold_chars(&article.title);
            let title_offset = kmp::find_from(&title, &pattern, 0);

            let description_offset = if self.match_descriptions {
                article
                    .description
                    .as_deref()
                    .and_then(|d| kmp::find_from(&fold_chars(d), &pattern, 0))
            } else {
                None
            };

            if title_offset.is_some() || description_offset.is_some() {
                matches.push(ArticleMatch {
                    article,
                    title_offset,
                    description_offset,
                });
            }
        }

        tracing::debug!(
            query = trimmed,
            matched = matches.len(),
            total = articles.len(),
            "substring scan complete"
        );

        Ok(matches)
    }
}

/// Lowercase one char at a time, keeping only the first char of each
/// expansion. `str::to_lowercase` can change the char count ('İ'
/// lowercases to two chars), which would skew offsets into the
/// original text.
fn fold_chars(s: &str) -> Vec<char> {
    s.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn articles() -> Vec<Article> {
        vec![
            Article::new("u1", "Markets rally on rate cut hopes")
                .with_description("Stocks climbed across the board."),
            Article::new("u2", "Rain expected across the coast")
                .with_description("A storm front is moving in."),
            Article::new("u3", "Championship Final Tonight"),
        ]
    }

    #[test]
    fn test_scan_matches_titles_case_insensitively() {
        let scanner = Scanner::new(false, 500);
        let articles = articles();

        let matches = scanner.scan(&articles, "RALLY").unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].article.id, "u1");
        assert_eq!(matches[0].title_offset, Some(8));
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        let scanner = Scanner::new(false, 500);
        let articles = articles();
        assert!(scanner.scan(&articles, "").unwrap().is_empty());
        assert!(scanner.scan(&articles, "   ").unwrap().is_empty());
    }

    #[test]
    fn test_descriptions_only_when_enabled() {
        let articles = articles();

        let title_only = Scanner::new(false, 500);
        assert!(title_only.scan(&articles, "storm").unwrap().is_empty());

        let with_desc = Scanner::new(true, 500);
        let matches = with_desc.scan(&articles, "storm").unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].article.id, "u2");
        assert_eq!(matches[0].title_offset, None);
        assert_eq!(matches[0].description_offset, Some(2));
    }

    #[test]
    fn test_query_length_limit() {
        let scanner = Scanner::new(false, 4);
        let articles = articles();
        let err = scanner.scan(&articles, "rally").unwrap_err();
        assert!(err.is_bad_request());
    }

    #[test]
    fn test_offsets_index_original_text_despite_expanding_lowercase() {
        // 'İ' lowercases to two chars, so a full to_lowercase pass
        // would shift every offset after it by one
        let articles = vec![Article::new("u1", "İstanbul rally draws crowds")];

        let scanner = Scanner::new(false, 500);
        let matches = scanner.scan(&articles, "rally").unwrap();
        assert_eq!(matches.len(), 1);

        let offset = matches[0].title_offset.unwrap();
        assert_eq!(offset, 9);
        let chars: Vec<char> = articles[0].title.chars().collect();
        let found: String = chars[offset..offset + 5].iter().collect();
        assert_eq!(found, "rally");
    }

    #[test]
    fn test_no_match() {
        let scanner = Scanner::new(true, 500);
        let articles = articles();
        assert!(scanner.scan(&articles, "cricket").unwrap().is_empty());
    }
}
