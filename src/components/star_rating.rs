//! Star Rating Component
//!
//! Five clickable stars. Hover previews a rating, leaving the control
//! restores the committed one.

use leptos::prelude::*;
use storefront_core::STAR_COUNT;

use crate::context::ReviewContext;

#[component]
pub fn StarRating() -> impl IntoView {
    let ctx = use_context::<ReviewContext>().expect("ReviewContext should be provided");

    view! {
        <div class="star-rating" on:mouseleave=move |_| ctx.leave_stars()>
            {(0..STAR_COUNT).map(|index| {
                let filled = move || ctx.snapshot.with(|s| s.form.stars[index]);
                view! {
                    <span
                        class="star"
                        class:empty=move || !filled()
                        on:click=move |_| ctx.click_star(index)
                        on:mouseover=move |_| ctx.hover_star(index)
                    >
                        "★"
                    </span>
                }
            }).collect_view()}
        </div>
    }
}
