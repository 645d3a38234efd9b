//! Auth Nav Link Component
//!
//! The single Sign In / Sign Out entry appended to the page navigation.

use leptos::prelude::*;
use storefront_core::NavLink;

use crate::context::AuthContext;

/// Navigation entry reflecting the stored sign-in flag
///
/// Re-renders in place when the flag changes, so the list never holds
/// more than one auth link.
#[component]
pub fn AuthNavLink(auth: AuthContext, #[prop(into)] sign_in_page: String) -> impl IntoView {
    let nav = move || auth.view.get().nav;

    let on_click = move |ev: web_sys::MouseEvent| {
        if nav() == NavLink::SignOut {
            ev.prevent_default();
            auth.sign_out();
        }
    };

    view! {
        <li>
            <a
                href=move || match nav() {
                    NavLink::SignIn => sign_in_page.clone(),
                    NavLink::SignOut => "#".to_string(),
                }
                class="nav-button text-primary-dark"
                id=move || nav().id()
                on:click=on_click
            >
                {move || nav().label()}
            </a>
        </li>
    }
}
