//! Pagination Component
//!
//! Previous, numbered and next controls for the testimonials list.
//! Disabled controls carry a `disabled` attribute and are inert.

use leptos::prelude::*;
use storefront_core::{PagerAction, PagerControl};

use crate::context::ReviewContext;

#[component]
fn PagerLink(control: PagerControl) -> impl IntoView {
    let ctx = use_context::<ReviewContext>().expect("ReviewContext should be provided");
    let (class, label, action, disabled) = match control {
        PagerControl::Previous { disabled } => ("prev", "<".to_string(), PagerAction::Previous, disabled),
        PagerControl::Page { number, active } => (
            if active { "page-number active" } else { "page-number" },
            number.to_string(),
            PagerAction::Page(number),
            false,
        ),
        PagerControl::Next { disabled } => ("next", ">".to_string(), PagerAction::Next, disabled),
    };

    view! {
        <a
            href="#"
            class=class
            on:click=move |ev: web_sys::MouseEvent| {
                ev.prevent_default();
                if !disabled {
                    ctx.paginate(action);
                }
            }
            {::leptos::tachys::html::attribute::custom::custom_attribute("disabled", disabled.then_some(""))}
        >
            {label}
        </a>
    }
}

#[component]
pub fn Pagination() -> impl IntoView {
    let ctx = use_context::<ReviewContext>().expect("ReviewContext should be provided");
    let pager = Memo::new(move |_| ctx.snapshot.with(|s| s.pager));

    view! {
        <div class="pagination">
            <For
                each=move || pager.get().map(|pager| pager.controls()).unwrap_or_default()
                key=|control| *control
                children=move |control| view! { <PagerLink control=control /> }
            />
        </div>
    }
}
