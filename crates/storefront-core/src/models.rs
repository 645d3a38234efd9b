//! Review Models
//!
//! Data structures exchanged with the review backend, plus the row shape
//! the testimonials table renders.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{WidgetError, WidgetResult};
use crate::rating::StarGlyphs;

/// A customer review (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub name: String,
    pub rating: u8,
    pub message: String,
}

/// One page of reviews as returned by `GET /reviews`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReviewPage {
    pub data: Vec<Review>,
    /// Size of the whole collection, when the backend reports it
    pub total: Option<u64>,
}

impl ReviewPage {
    /// Decode a response body, rejecting anything without a `data` array
    pub fn from_json(body: Value) -> WidgetResult<Self> {
        let Value::Object(mut fields) = body else {
            return Err(WidgetError::MalformedResponse("expected a JSON object".into()));
        };
        let data = match fields.remove("data") {
            Some(data @ Value::Array(_)) => data,
            _ => return Err(WidgetError::MalformedResponse("missing `data` array".into())),
        };
        let data: Vec<Review> = serde_json::from_value(data)
            .map_err(|e| WidgetError::MalformedResponse(e.to_string()))?;
        // A zero total falls back to the page length, like an absent one
        let total = fields.get("total").and_then(Value::as_u64).filter(|t| *t > 0);

        Ok(Self { data, total })
    }

    /// Collection size used for page math
    pub fn effective_total(&self) -> u64 {
        self.total.unwrap_or(self.data.len() as u64)
    }
}

/// A rendered testimonials table row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReviewRow {
    /// 1-based position across the whole collection
    pub number: u64,
    pub name: String,
    pub rating: u8,
    pub message: String,
}

impl ReviewRow {
    /// Build rows for a page whose first entry sits at `offset` in the collection
    pub fn from_page(reviews: Vec<Review>, offset: u64) -> Vec<ReviewRow> {
        reviews
            .into_iter()
            .zip(offset + 1..)
            .map(|(review, number)| ReviewRow {
                number,
                name: review.name,
                rating: review.rating,
                message: review.message,
            })
            .collect()
    }

    /// Row label, e.g. `"22."`
    pub fn label(&self) -> String {
        format!("{}.", self.number)
    }

    pub fn glyphs(&self) -> StarGlyphs {
        StarGlyphs::for_rating(self.rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_page_with_total() {
        let page = ReviewPage::from_json(json!({
            "data": [{ "name": "Ada", "rating": 5, "message": "Lovely service overall" }],
            "total": 25
        }))
        .unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].name, "Ada");
        assert_eq!(page.effective_total(), 25);
    }

    #[test]
    fn test_total_falls_back_to_page_length() {
        let page = ReviewPage::from_json(json!({
            "data": [
                { "name": "Ada", "rating": 5, "message": "a" },
                { "name": "Bob", "rating": 3, "message": "b" }
            ]
        }))
        .unwrap();
        assert_eq!(page.total, None);
        assert_eq!(page.effective_total(), 2);
    }

    #[test]
    fn test_malformed_shapes_are_rejected() {
        for body in [
            json!([]),
            json!({ "reviews": [] }),
            json!({ "data": "nope" }),
            json!({ "data": [{ "name": "Ada" }] }),
        ] {
            assert!(matches!(
                ReviewPage::from_json(body),
                Err(WidgetError::MalformedResponse(_))
            ));
        }
    }

    #[test]
    fn test_rows_are_numbered_from_offset() {
        let reviews = vec![
            Review { name: "A".into(), rating: 1, message: "x".into() },
            Review { name: "B".into(), rating: 2, message: "y".into() },
        ];
        let rows = ReviewRow::from_page(reviews, 20);
        assert_eq!(rows[0].label(), "21.");
        assert_eq!(rows[1].label(), "22.");
    }

    #[test]
    fn test_review_serializes_with_wire_names() {
        let review = Review { name: "Ada".into(), rating: 4, message: "Great".into() };
        assert_eq!(
            serde_json::to_value(&review).unwrap(),
            json!({ "name": "Ada", "rating": 4, "message": "Great" })
        );
    }
}
