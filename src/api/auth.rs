//! Auth Bindings
//!
//! The simulated credential check and browser navigation.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use storefront_core::{Authenticator, WidgetResult};

/// Stand-in for a real credential check: waits, then succeeds
#[derive(Debug, Clone, Copy)]
pub struct SimulatedAuthenticator {
    latency_ms: u32,
}

impl SimulatedAuthenticator {
    pub fn new(latency_ms: u32) -> Self {
        Self { latency_ms }
    }
}

#[async_trait(?Send)]
impl Authenticator for SimulatedAuthenticator {
    async fn sign_in(&self) -> WidgetResult<()> {
        TimeoutFuture::new(self.latency_ms).await;
        Ok(())
    }

    async fn sign_out(&self) -> WidgetResult<()> {
        TimeoutFuture::new(self.latency_ms).await;
        Ok(())
    }
}

/// Send the browser to `url`
pub fn redirect(url: &str) {
    let Some(window) = web_sys::window() else {
        tracing::error!("no window to navigate from");
        return;
    };
    if let Err(err) = window.location().set_href(url) {
        tracing::error!("navigation to {} failed: {:?}", url, err);
    }
}
