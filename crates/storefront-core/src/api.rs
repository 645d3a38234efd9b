//! Review Backend Interface
//!
//! The review widget talks to its backend only through `ReviewApi`. The
//! browser build implements it over fetch; tests use in-memory doubles.

use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::WidgetResult;
use crate::models::Review;

/// `page` / `limit` query of a paginated list request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub limit: u32,
}

impl PageQuery {
    pub fn to_query_string(&self) -> String {
        format!("page={}&limit={}", self.page, self.limit)
    }
}

/// Build the list URL for `endpoint`, with the page query when given
pub fn reviews_url(endpoint: &str, query: Option<PageQuery>) -> String {
    match query {
        Some(query) => {
            let separator = if endpoint.contains('?') { '&' } else { '?' };
            format!("{}{}{}", endpoint, separator, query.to_query_string())
        }
        None => endpoint.to_string(),
    }
}

/// Review collection backend
///
/// Both calls hand back the raw JSON body. A body that is not JSON is a
/// `WidgetError::Network`; shape checks happen in the caller.
#[async_trait(?Send)]
pub trait ReviewApi {
    /// POST a new review
    async fn create_review(&self, review: &Review) -> WidgetResult<Value>;

    /// GET the collection, a single page when `query` is set
    async fn fetch_reviews(&self, query: Option<PageQuery>) -> WidgetResult<Value>;
}

#[async_trait(?Send)]
impl<T: ReviewApi + ?Sized> ReviewApi for Rc<T> {
    async fn create_review(&self, review: &Review) -> WidgetResult<Value> {
        (**self).create_review(review).await
    }

    async fn fetch_reviews(&self, query: Option<PageQuery>) -> WidgetResult<Value> {
        (**self).fetch_reviews(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reviews_url() {
        let endpoint = "http://localhost:8080/reviews";
        assert_eq!(reviews_url(endpoint, None), endpoint);
        assert_eq!(
            reviews_url(endpoint, Some(PageQuery { page: 2, limit: 10 })),
            "http://localhost:8080/reviews?page=2&limit=10"
        );
        assert_eq!(
            reviews_url("/reviews?sort=new", Some(PageQuery { page: 1, limit: 5 })),
            "/reviews?sort=new&page=1&limit=5"
        );
    }
}
