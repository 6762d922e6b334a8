//! Search Model
//!
//! A query text, the results fetched for it, and result-page slicing.

use serde::{Deserialize, Serialize};

use super::error::FetchError;
use super::recipe::RecipeSummary;
use crate::ports::RecipeSource;

/// One submitted search and its results
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    generation: u64,
    query: String,
    results: Vec<RecipeSummary>,
}

/// Which pagination buttons to show, carrying the page each one goes to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageButtons {
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

/// A page of search results
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPage<'a> {
    /// 1-based page number after clamping
    pub page: usize,
    pub total_pages: usize,
    pub items: &'a [RecipeSummary],
    pub buttons: PageButtons,
}

impl SearchQuery {
    pub fn new(generation: u64, query: impl Into<String>, results: Vec<RecipeSummary>) -> Self {
        Self {
            generation,
            query: query.into(),
            results,
        }
    }

    /// Run the remote lookup for `query`.
    ///
    /// Zero matches is a valid, empty answer.
    pub async fn search<S: RecipeSource + ?Sized>(
        source: &S,
        query: &str,
    ) -> Result<Vec<RecipeSummary>, FetchError> {
        let results = source.search(query).await?;
        log::debug!("search {:?} returned {} results", query, results.len());
        Ok(results)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[RecipeSummary] {
        &self.results
    }

    pub fn total_pages(&self, per_page: usize) -> usize {
        let per_page = per_page.max(1);
        self.results.len().div_ceil(per_page).max(1)
    }

    /// Slice out one page of results; `page` is clamped into range.
    pub fn page(&self, page: usize, per_page: usize) -> ResultPage<'_> {
        let per_page = per_page.max(1);
        let total_pages = self.total_pages(per_page);
        let page = page.clamp(1, total_pages);

        let start = (page - 1) * per_page;
        let end = (start + per_page).min(self.results.len());
        let items = self.results.get(start..end).unwrap_or(&[]);

        let buttons = PageButtons {
            prev: (page > 1).then(|| page - 1),
            next: (page < total_pages).then(|| page + 1),
        };

        ResultPage {
            page,
            total_pages,
            items,
            buttons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summaries(count: usize) -> Vec<RecipeSummary> {
        (0..count)
            .map(|i| RecipeSummary {
                id: format!("r{}", i),
                title: format!("Recipe {}", i),
                author: "Kitchen".to_string(),
                thumbnail_url: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_first_page_of_many() {
        let search = SearchQuery::new(1, "pizza", summaries(25));
        let page = search.page(1, 10);
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.items[0].id, "r0");
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.buttons, PageButtons { prev: None, next: Some(2) });
    }

    #[test]
    fn test_middle_and_last_page() {
        let search = SearchQuery::new(1, "pizza", summaries(25));

        let middle = search.page(2, 10);
        assert_eq!(middle.items[0].id, "r10");
        assert_eq!(middle.buttons, PageButtons { prev: Some(1), next: Some(3) });

        let last = search.page(3, 10);
        assert_eq!(last.items.len(), 5);
        assert_eq!(last.buttons, PageButtons { prev: Some(2), next: None });
    }

    #[test]
    fn test_single_page_has_no_buttons() {
        let search = SearchQuery::new(1, "pizza", summaries(4));
        assert_eq!(search.page(1, 10).buttons, PageButtons::default());
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let search = SearchQuery::new(1, "pizza", summaries(25));
        assert_eq!(search.page(9, 10).page, 3);
        assert_eq!(search.page(0, 10).page, 1);
    }

    #[test]
    fn test_empty_results() {
        let search = SearchQuery::new(1, "nothing", Vec::new());
        let page = search.page(1, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.buttons, PageButtons::default());
    }
}
