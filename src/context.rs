//! Widget Contexts
//!
//! Copyable handles pairing a core controller with the signal that mirrors
//! its snapshot. Event handlers call through the handle; views only read
//! the signal.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_core::{
    AuthConfig, AuthSession, AuthView, PagerAction, ReviewConfig, ReviewSnapshot, ReviewWidget,
};

use crate::api::{self, HttpReviewApi, LocalFlagStore, SimulatedAuthenticator};

pub type SiteAuthSession = AuthSession<LocalFlagStore, SimulatedAuthenticator>;
pub type SiteReviewWidget = ReviewWidget<HttpReviewApi>;

/// Auth island handle, shared by the nav link, loader and sign-in form
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: StoredValue<Rc<SiteAuthSession>, LocalStorage>,
    /// Latest auth view
    pub view: ReadSignal<AuthView>,
}

impl AuthContext {
    pub fn new(config: AuthConfig) -> Self {
        let authenticator = SimulatedAuthenticator::new(config.latency_ms);
        let session = AuthSession::new(LocalFlagStore, authenticator, config);
        let (view, set_view) = signal(session.view());
        let session = session.with_observer(move |next| set_view.set(*next));

        Self {
            session: StoredValue::new_local(Rc::new(session)),
            view,
        }
    }

    pub fn sign_in(&self) {
        let session = self.session.get_value();
        spawn_local(async move {
            // Failures are logged by the session
            let _ = session.sign_in().await;
        });
    }

    pub fn sign_out(&self) {
        let session = self.session.get_value();
        spawn_local(async move {
            if let Ok(target) = session.sign_out().await {
                api::redirect(&target);
            }
        });
    }
}

/// Review widget handle, provided via context to the widget's children
#[derive(Clone, Copy)]
pub struct ReviewContext {
    widget: StoredValue<Rc<SiteReviewWidget>, LocalStorage>,
    /// Latest widget snapshot
    pub snapshot: ReadSignal<ReviewSnapshot>,
    pub config: StoredValue<ReviewConfig>,
}

impl ReviewContext {
    pub fn new(config: ReviewConfig) -> Self {
        let widget = ReviewWidget::new(HttpReviewApi::new(config.endpoint.clone()), config.clone());
        let (snapshot, set_snapshot) = signal(widget.snapshot());
        let widget = widget.with_observer(move |next| set_snapshot.set(next.clone()));

        Self {
            widget: StoredValue::new_local(Rc::new(widget)),
            snapshot,
            config: StoredValue::new(config),
        }
    }

    fn widget(&self) -> Rc<SiteReviewWidget> {
        self.widget.get_value()
    }

    pub fn is_paginated(&self) -> bool {
        self.config.with_value(|config| config.is_paginated())
    }

    // ========================
    // Form Events
    // ========================

    pub fn input_name(&self, value: String) {
        self.widget().input_name(value);
    }

    pub fn input_message(&self, value: String) {
        self.widget().input_message(value);
    }

    pub fn click_star(&self, index: usize) {
        self.widget().click_star(index);
    }

    pub fn hover_star(&self, index: usize) {
        self.widget().hover_star(index);
    }

    pub fn leave_stars(&self) {
        self.widget().leave_stars();
    }

    pub fn submit(&self) {
        let widget = self.widget();
        spawn_local(async move {
            widget.submit().await;
        });
    }

    // ========================
    // Listing
    // ========================

    pub fn load(&self) {
        let widget = self.widget();
        spawn_local(async move {
            let _ = widget.load_reviews().await;
        });
    }

    pub fn paginate(&self, action: PagerAction) {
        let widget = self.widget();
        spawn_local(async move {
            widget.paginate(action).await;
        });
    }
}
