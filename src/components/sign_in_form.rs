//! Sign-In Form Component
//!
//! Email and password inputs are collected but never inspected; submitting
//! only runs the session's simulated credential check.

use leptos::prelude::*;

use crate::context::AuthContext;

#[component]
pub fn SignInForm(auth: AuthContext) -> impl IntoView {
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        auth.sign_in();
    };

    view! {
        <form class="signin-form" on:submit=on_submit>
            <input type="email" name="email" placeholder="Email" autocomplete="email" />
            <input type="password" name="password" placeholder="Password" autocomplete="current-password" />
            <button type="submit" disabled=move || auth.view.get().loading>"Sign In"</button>
        </form>
    }
}
