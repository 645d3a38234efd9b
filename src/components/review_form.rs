//! Review Form Component
//!
//! Name, star rating and message inputs with their inline errors, plus the
//! submit control.

use leptos::prelude::*;

use crate::components::{FieldErrorMessage, StarRating};
use crate::context::ReviewContext;

#[component]
pub fn ReviewForm() -> impl IntoView {
    let ctx = use_context::<ReviewContext>().expect("ReviewContext should be provided");
    let form = move || ctx.snapshot.with(|s| s.form.clone());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <form class="review-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Your name"
                prop:value=move || form().name
                on:input=move |ev| ctx.input_name(event_target_value(&ev))
            />
            <FieldErrorMessage message=Signal::derive(move || form().errors.name.map(|e| e.to_string())) />

            <StarRating />
            <FieldErrorMessage message=Signal::derive(move || form().errors.rating.map(|e| e.to_string())) />

            <textarea
                placeholder="Your review"
                prop:value=move || form().message
                on:input=move |ev| ctx.input_message(event_target_value(&ev))
            ></textarea>
            <FieldErrorMessage message=Signal::derive(move || form().errors.message.map(|e| e.to_string())) />

            <button type="submit" disabled=move || !form().submit_enabled>
                {move || form().submit_label}
            </button>
            <FieldErrorMessage message=Signal::derive(move || form().submit_error) />
        </form>
    }
}
