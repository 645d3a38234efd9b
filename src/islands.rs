//! Island Mounting
//!
//! The page HTML is authored elsewhere; each widget is mounted into its
//! host element. Islands are independent: one failing to mount does not
//! stop the others.

use leptos::mount::mount_to;
use leptos::prelude::*;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::components::{AuthNavLink, Loader, ReviewSection, SignInForm};
use crate::config::AppConfig;
use crate::context::AuthContext;

#[derive(Debug, Error)]
pub enum MountError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("invalid selector `{0}`")]
    InvalidSelector(String),
    #[error("required host element `{0}` not found")]
    MissingHost(String),
}

/// Mount every island whose host is on this page
pub fn mount_all(config: &AppConfig) {
    if let Err(err) = mount_auth(config) {
        tracing::error!(error = %err, "auth widgets not mounted");
    }
    if let Err(err) = mount_reviews(config) {
        tracing::error!(error = %err, "review widget not mounted");
    }
}

fn find_host(selector: &str) -> Result<Option<HtmlElement>, MountError> {
    let document = web_sys::window()
        .ok_or(MountError::NoWindow)?
        .document()
        .ok_or(MountError::NoDocument)?;
    let element = document
        .query_selector(selector)
        .map_err(|_| MountError::InvalidSelector(selector.to_string()))?;
    Ok(element.and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

fn require_host(selector: &str) -> Result<HtmlElement, MountError> {
    find_host(selector)?.ok_or_else(|| MountError::MissingHost(selector.to_string()))
}

fn mount_auth(config: &AppConfig) -> Result<(), MountError> {
    let nav = require_host(&config.hosts.nav_links)?;
    let loader = require_host(&config.hosts.loader)?;
    let sign_in = find_host(&config.hosts.sign_in)?;

    let auth = AuthContext::new(config.auth.clone());
    let sign_in_page = config.auth.sign_in_page.clone();

    mount_to(nav, move || view! { <AuthNavLink auth=auth sign_in_page=sign_in_page /> }).forget();
    mount_to(loader, move || view! { <Loader auth=auth /> }).forget();
    match sign_in {
        Some(host) => mount_to(host, move || view! { <SignInForm auth=auth /> }).forget(),
        None => tracing::debug!("no sign-in form host on this page"),
    }
    Ok(())
}

fn mount_reviews(config: &AppConfig) -> Result<(), MountError> {
    let Some(host) = find_host(&config.hosts.reviews)? else {
        tracing::debug!("no review host on this page");
        return Ok(());
    };

    let reviews = config.reviews.clone();
    mount_to(host, move || view! { <ReviewSection config=reviews /> }).forget();
    Ok(())
}
