//! Field Error Component

use leptos::prelude::*;

/// Inline error placed right after a form field; renders nothing when `None`
#[component]
pub fn FieldErrorMessage(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|text| view! {
            <div class="error-message" style="color: red; font-size: 12px; margin-top: 4px;">
                {text}
            </div>
        })
    }
}
