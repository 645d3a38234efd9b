//! Widget Configuration
//!
//! Plain settings structs with the page defaults. The UI crate layers
//! compile-time overrides on top of these.

use std::fmt;
use std::str::FromStr;

pub const DEFAULT_REVIEWS_ENDPOINT: &str = "http://localhost:8080/reviews";
pub const DEFAULT_REVIEWS_PER_PAGE: u32 = 10;
pub const DEFAULT_SIGN_IN_LATENCY_MS: u32 = 3000;
pub const DEFAULT_SIGN_IN_PAGE: &str = "signin.html";
pub const AUTH_STORAGE_KEY: &str = "isSignedIn";

/// Which flavor of the review widget to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewVariant {
    /// Unpaginated list, submit gated on non-empty fields, no inline errors
    Basic,
    /// Inline field errors and a page-based list
    #[default]
    Paginated,
}

impl ReviewVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewVariant::Basic => "basic",
            ReviewVariant::Paginated => "paginated",
        }
    }
}

impl fmt::Display for ReviewVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReviewVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" | "v1" => Ok(ReviewVariant::Basic),
            "paginated" | "v2" => Ok(ReviewVariant::Paginated),
            other => Err(format!("unknown review variant '{}'", other)),
        }
    }
}

/// Review widget settings
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewConfig {
    /// Collection URL, used for both POST and GET
    pub endpoint: String,
    pub variant: ReviewVariant,
    /// Page size sent as `limit` (paginated variant only)
    pub per_page: u32,
    /// Committed rating before the user touches the stars
    pub initial_rating: u8,
}

impl ReviewConfig {
    pub fn new(endpoint: impl Into<String>, variant: ReviewVariant) -> Self {
        Self {
            endpoint: endpoint.into(),
            variant,
            per_page: DEFAULT_REVIEWS_PER_PAGE,
            initial_rating: Self::default_initial_rating(variant),
        }
    }

    /// The basic page shipped with four stars preselected
    pub fn default_initial_rating(variant: ReviewVariant) -> u8 {
        match variant {
            ReviewVariant::Basic => 4,
            ReviewVariant::Paginated => 0,
        }
    }

    pub fn is_paginated(&self) -> bool {
        self.variant == ReviewVariant::Paginated
    }
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self::new(DEFAULT_REVIEWS_ENDPOINT, ReviewVariant::default())
    }
}

/// Auth toggle settings
#[derive(Debug, Clone, PartialEq)]
pub struct AuthConfig {
    pub storage_key: String,
    /// Where the browser goes after signing out
    pub sign_in_page: String,
    /// Artificial latency of the simulated authenticator
    pub latency_ms: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            storage_key: AUTH_STORAGE_KEY.to_string(),
            sign_in_page: DEFAULT_SIGN_IN_PAGE.to_string(),
            latency_ms: DEFAULT_SIGN_IN_LATENCY_MS,
        }
    }
}
