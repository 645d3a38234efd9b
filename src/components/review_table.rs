//! Review Table Component
//!
//! Testimonials table repainted from the latest snapshot. Review text is
//! inserted as text nodes.

use leptos::prelude::*;
use storefront_core::{ReviewRow, StarGlyphs};

use crate::context::ReviewContext;

/// Read-only star display for one review
#[component]
fn RatingStars(row: ReviewRow) -> impl IntoView {
    let StarGlyphs { filled, empty } = row.glyphs();
    view! {
        <div class="rating-stars">
            {filled}
            {(!empty.is_empty()).then(|| view! { <span class="empty">{empty}</span> })}
        </div>
    }
}

#[component]
pub fn ReviewTable() -> impl IntoView {
    let ctx = use_context::<ReviewContext>().expect("ReviewContext should be provided");
    // Form edits change the snapshot but not the rows
    let rows = Memo::new(move |_| ctx.snapshot.with(|s| s.rows.clone()));

    view! {
        <table class="testimonials-table">
            <tbody>
                <For
                    each=move || rows.get()
                    // Whole row: a reload can put a different review under the same number
                    key=|row| row.clone()
                    children=move |row| {
                        let label = row.label();
                        let name = row.name.clone();
                        let message = row.message.clone();
                        view! {
                            <tr>
                                <td>{label}</td>
                                <td>{name}</td>
                                <td><RatingStars row=row /></td>
                                <td>{message}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
