//! Review Section Component
//!
//! Root of the review island: builds the widget controller, provides it to
//! the form, table and pager, and loads the first listing on mount.

use leptos::prelude::*;
use storefront_core::ReviewConfig;

use crate::components::{Pagination, ReviewForm, ReviewTable};
use crate::context::ReviewContext;

#[component]
pub fn ReviewSection(config: ReviewConfig) -> impl IntoView {
    let ctx = ReviewContext::new(config);
    provide_context(ctx);

    // Initial listing
    Effect::new(move |_| ctx.load());

    view! {
        <section class="reviews">
            <ReviewForm />
            <ReviewTable />
            {ctx.is_paginated().then(|| view! { <Pagination /> })}
        </section>
    }
}
