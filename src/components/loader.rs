//! Loader Component

use leptos::prelude::*;

use crate::context::AuthContext;

/// Full-page loading indicator shown while an auth action is pending
#[component]
pub fn Loader(auth: AuthContext) -> impl IntoView {
    view! {
        <div
            id="loader"
            class="loader"
            style:display=move || if auth.view.get().loading { "block" } else { "none" }
        ></div>
    }
}
