//! Auth Toggle
//!
//! Signed-in flag persisted in client storage, plus the session controller
//! that flips it. The credential check is an injected `Authenticator`; the
//! page ships with a simulated one that always succeeds.

use std::cell::Cell;

use async_trait::async_trait;

use crate::config::AuthConfig;
use crate::error::{WidgetError, WidgetResult};

const TRUE_FLAG: &str = "true";
const FALSE_FLAG: &str = "false";

/// Synchronous string key-value storage
pub trait FlagStore {
    fn load(&self, key: &str) -> WidgetResult<Option<String>>;
    fn save(&self, key: &str, value: &str) -> WidgetResult<()>;
}

/// Credential check behind sign-in and sign-out
#[async_trait(?Send)]
pub trait Authenticator {
    async fn sign_in(&self) -> WidgetResult<()>;
    async fn sign_out(&self) -> WidgetResult<()>;
}

/// The single navigation link the auth island renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLink {
    SignIn,
    SignOut,
}

impl NavLink {
    pub fn for_state(signed_in: bool) -> Self {
        if signed_in {
            NavLink::SignOut
        } else {
            NavLink::SignIn
        }
    }

    /// Element id, kept stable for page CSS and scripts
    pub fn id(&self) -> &'static str {
        match self {
            NavLink::SignIn => "signInBtn",
            NavLink::SignOut => "signOutBtn",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavLink::SignIn => "Sign In",
            NavLink::SignOut => "Sign Out",
        }
    }
}

/// Render-ready auth state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthView {
    pub nav: NavLink,
    /// Loader visibility
    pub loading: bool,
}

type Observer = Box<dyn Fn(&AuthView)>;

/// Sign-in/sign-out controller for one page
pub struct AuthSession<S, A> {
    store: S,
    authenticator: A,
    config: AuthConfig,
    loading: Cell<bool>,
    observer: Option<Observer>,
}

impl<S: FlagStore, A: Authenticator> AuthSession<S, A> {
    pub fn new(store: S, authenticator: A, config: AuthConfig) -> Self {
        Self {
            store,
            authenticator,
            config,
            loading: Cell::new(false),
            observer: None,
        }
    }

    pub fn with_observer(mut self, observer: impl Fn(&AuthView) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Persisted flag; anything but the literal `"true"` reads as signed out
    pub fn is_signed_in(&self) -> bool {
        match self.store.load(&self.config.storage_key) {
            Ok(value) => value.as_deref() == Some(TRUE_FLAG),
            Err(err) => {
                tracing::warn!(error = %err, "could not read sign-in flag");
                false
            }
        }
    }

    pub fn nav_link(&self) -> NavLink {
        NavLink::for_state(self.is_signed_in())
    }

    pub fn view(&self) -> AuthView {
        AuthView {
            nav: self.nav_link(),
            loading: self.loading.get(),
        }
    }

    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
        if let Some(observer) = &self.observer {
            observer(&self.view());
        }
    }

    fn persist(&self, signed_in: bool) -> WidgetResult<()> {
        let value = if signed_in { TRUE_FLAG } else { FALSE_FLAG };
        self.store.save(&self.config.storage_key, value)
    }

    /// Show the loader, run the credential check, store the flag
    ///
    /// Ignored while another sign-in or sign-out is in flight.
    pub async fn sign_in(&self) -> WidgetResult<()> {
        if self.loading.get() {
            return Ok(());
        }
        self.set_loading(true);
        let result = match self.authenticator.sign_in().await {
            Ok(()) => self.persist(true),
            Err(err) => Err(err),
        };
        if let Err(err) = &result {
            tracing::error!(error = %err, "sign-in failed");
        } else {
            tracing::debug!("signed in");
        }
        self.set_loading(false);
        result
    }

    /// Clear the flag; returns the page the browser should go to next
    ///
    /// The loader stays up on success since the page is about to unload.
    pub async fn sign_out(&self) -> WidgetResult<String> {
        if self.loading.get() {
            return Err(WidgetError::Auth("another auth action is in progress".into()));
        }
        self.set_loading(true);
        let result = match self.authenticator.sign_out().await {
            Ok(()) => self.persist(false),
            Err(err) => Err(err),
        };
        match result {
            Ok(()) => {
                tracing::debug!(redirect = %self.config.sign_in_page, "signed out");
                Ok(self.config.sign_in_page.clone())
            }
            Err(err) => {
                tracing::error!(error = %err, "sign-out failed");
                self.set_loading(false);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AUTH_STORAGE_KEY;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// In-memory `FlagStore`
    #[derive(Debug, Default)]
    struct MemoryFlagStore {
        entries: RefCell<HashMap<String, String>>,
    }

    impl MemoryFlagStore {
        fn new() -> Self {
            Self::default()
        }

        fn with_entry(key: &str, value: &str) -> Self {
            let store = Self::new();
            store.entries.borrow_mut().insert(key.to_string(), value.to_string());
            store
        }

        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }
    }

    impl FlagStore for MemoryFlagStore {
        fn load(&self, key: &str) -> WidgetResult<Option<String>> {
            Ok(self.get(key))
        }

        fn save(&self, key: &str, value: &str) -> WidgetResult<()> {
            self.entries.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    /// Authenticator double that answers after one scheduler turn
    struct InstantAuth {
        fail: bool,
        calls: Cell<u32>,
    }

    impl InstantAuth {
        fn ok() -> Self {
            Self { fail: false, calls: Cell::new(0) }
        }

        fn failing() -> Self {
            Self { fail: true, calls: Cell::new(0) }
        }

        fn answer(&self) -> WidgetResult<()> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                Err(WidgetError::Auth("rejected".into()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait(?Send)]
    impl Authenticator for InstantAuth {
        async fn sign_in(&self) -> WidgetResult<()> {
            tokio::task::yield_now().await;
            self.answer()
        }

        async fn sign_out(&self) -> WidgetResult<()> {
            tokio::task::yield_now().await;
            self.answer()
        }
    }

    struct ReadOnlyStore;

    impl FlagStore for ReadOnlyStore {
        fn load(&self, _: &str) -> WidgetResult<Option<String>> {
            Ok(None)
        }

        fn save(&self, _: &str, _: &str) -> WidgetResult<()> {
            Err(WidgetError::Storage("quota exceeded".into()))
        }
    }

    fn session(store: MemoryFlagStore, auth: InstantAuth) -> AuthSession<MemoryFlagStore, InstantAuth> {
        AuthSession::new(store, auth, AuthConfig::default())
    }

    #[test]
    fn test_flag_parsing() {
        let cases = [
            (None, NavLink::SignIn),
            (Some("true"), NavLink::SignOut),
            (Some("false"), NavLink::SignIn),
            (Some("yes"), NavLink::SignIn),
        ];
        for (stored, expected) in cases {
            let store = match stored {
                Some(value) => MemoryFlagStore::with_entry(AUTH_STORAGE_KEY, value),
                None => MemoryFlagStore::new(),
            };
            assert_eq!(session(store, InstantAuth::ok()).nav_link(), expected);
        }
    }

    #[test]
    fn test_nav_link_markup_values() {
        assert_eq!(NavLink::SignIn.id(), "signInBtn");
        assert_eq!(NavLink::SignIn.label(), "Sign In");
        assert_eq!(NavLink::SignOut.id(), "signOutBtn");
        assert_eq!(NavLink::SignOut.label(), "Sign Out");
    }

    #[tokio::test]
    async fn test_sign_in_persists_and_toggles_loader() {
        let views = Rc::new(RefCell::new(Vec::new()));
        let sink = views.clone();
        let session = session(MemoryFlagStore::new(), InstantAuth::ok())
            .with_observer(move |view| sink.borrow_mut().push(*view));

        session.sign_in().await.unwrap();

        assert_eq!(session.store.get(AUTH_STORAGE_KEY).as_deref(), Some("true"));
        assert_eq!(session.nav_link(), NavLink::SignOut);
        assert_eq!(
            *views.borrow(),
            vec![
                AuthView { nav: NavLink::SignIn, loading: true },
                AuthView { nav: NavLink::SignOut, loading: false },
            ]
        );
    }

    #[tokio::test]
    async fn test_sign_out_returns_redirect() {
        let store = MemoryFlagStore::with_entry(AUTH_STORAGE_KEY, "true");
        let session = session(store, InstantAuth::ok());

        let redirect = session.sign_out().await.unwrap();

        assert_eq!(redirect, "signin.html");
        assert_eq!(session.store.get(AUTH_STORAGE_KEY).as_deref(), Some("false"));
        assert!(session.view().loading);
    }

    #[tokio::test]
    async fn test_concurrent_sign_in_is_ignored() {
        let session = session(MemoryFlagStore::new(), InstantAuth::ok());
        let (first, second) = tokio::join!(session.sign_in(), session.sign_in());
        assert!(first.is_ok() && second.is_ok());
        assert_eq!(session.authenticator.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_rejected_sign_in_keeps_flag() {
        let session = session(MemoryFlagStore::new(), InstantAuth::failing());
        assert!(matches!(session.sign_in().await, Err(WidgetError::Auth(_))));
        assert_eq!(session.store.get(AUTH_STORAGE_KEY), None);
        assert!(!session.view().loading);
    }

    #[tokio::test]
    async fn test_storage_failure_surfaces() {
        let session = AuthSession::new(ReadOnlyStore, InstantAuth::ok(), AuthConfig::default());
        assert!(matches!(session.sign_in().await, Err(WidgetError::Storage(_))));
        assert_eq!(session.nav_link(), NavLink::SignIn);
        assert!(!session.view().loading);
    }
}
