//! Frontend Configuration
//!
//! Widget settings with compile-time overrides. Values come from
//! `option_env!` so a static build can be pointed at another backend
//! without code changes.

use std::fmt::Display;
use std::str::FromStr;

use storefront_core::config::{DEFAULT_REVIEWS_ENDPOINT, DEFAULT_SIGN_IN_PAGE};
use storefront_core::{AuthConfig, ReviewConfig, ReviewVariant};

/// CSS selectors of the page elements the islands mount into
#[derive(Debug, Clone, PartialEq)]
pub struct HostSelectors {
    /// Navigation list that receives the Sign In / Sign Out link
    pub nav_links: String,
    pub loader: String,
    /// Optional: only the sign-in page has it
    pub sign_in: String,
    /// Optional: only pages with testimonials have it
    pub reviews: String,
}

impl Default for HostSelectors {
    fn default() -> Self {
        Self {
            nav_links: ".nav-links".to_string(),
            loader: ".loader-host".to_string(),
            sign_in: ".signin-host".to_string(),
            reviews: ".reviews-host".to_string(),
        }
    }
}

/// Raw override values, `None` when the variable was not set at build time
#[derive(Debug, Default, Clone, Copy)]
struct Overrides<'a> {
    endpoint: Option<&'a str>,
    variant: Option<&'a str>,
    per_page: Option<&'a str>,
    latency_ms: Option<&'a str>,
    sign_in_page: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub reviews: ReviewConfig,
    pub auth: AuthConfig,
    pub hosts: HostSelectors,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_overrides(Overrides {
            endpoint: option_env!("STOREFRONT_REVIEWS_ENDPOINT"),
            variant: option_env!("STOREFRONT_REVIEW_VARIANT"),
            per_page: option_env!("STOREFRONT_REVIEWS_PER_PAGE"),
            latency_ms: option_env!("STOREFRONT_SIGN_IN_LATENCY_MS"),
            sign_in_page: option_env!("STOREFRONT_SIGN_IN_PAGE"),
        })
    }

    fn from_overrides(overrides: Overrides<'_>) -> Self {
        let variant = parse_or("STOREFRONT_REVIEW_VARIANT", overrides.variant, ReviewVariant::default());
        let mut reviews = ReviewConfig::new(
            non_empty(overrides.endpoint).unwrap_or(DEFAULT_REVIEWS_ENDPOINT),
            variant,
        );
        let per_page = parse_or("STOREFRONT_REVIEWS_PER_PAGE", overrides.per_page, reviews.per_page);
        if per_page > 0 {
            reviews.per_page = per_page;
        } else {
            tracing::warn!("STOREFRONT_REVIEWS_PER_PAGE must be positive, keeping {}", reviews.per_page);
        }

        let defaults = AuthConfig::default();
        let auth = AuthConfig {
            latency_ms: parse_or("STOREFRONT_SIGN_IN_LATENCY_MS", overrides.latency_ms, defaults.latency_ms),
            sign_in_page: non_empty(overrides.sign_in_page)
                .unwrap_or(DEFAULT_SIGN_IN_PAGE)
                .to_string(),
            ..defaults
        };

        Self {
            reviews,
            auth,
            hosts: HostSelectors::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_overrides(Overrides::default())
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

/// Parse an override, logging and falling back to `default` when it is bad
fn parse_or<T>(name: &str, raw: Option<&str>, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match non_empty(raw) {
        Some(value) => value.parse().unwrap_or_else(|err| {
            tracing::warn!("ignoring {}={:?}: {}", name, value, err);
            default
        }),
        None => default,
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.reviews.endpoint, "http://localhost:8080/reviews");
        assert_eq!(config.reviews.variant, ReviewVariant::Paginated);
        assert_eq!(config.reviews.per_page, 10);
        assert_eq!(config.auth.latency_ms, 3000);
        assert_eq!(config.auth.sign_in_page, "signin.html");
        assert_eq!(config.hosts.nav_links, ".nav-links");
    }

    #[wasm_bindgen_test]
    fn test_overrides_apply() {
        let config = AppConfig::from_overrides(Overrides {
            endpoint: Some("https://api.example.com/reviews"),
            variant: Some("basic"),
            per_page: Some("5"),
            latency_ms: Some("0"),
            sign_in_page: Some("/login"),
        });
        assert_eq!(config.reviews.endpoint, "https://api.example.com/reviews");
        assert_eq!(config.reviews.variant, ReviewVariant::Basic);
        assert_eq!(config.reviews.initial_rating, 4);
        assert_eq!(config.reviews.per_page, 5);
        assert_eq!(config.auth.latency_ms, 0);
        assert_eq!(config.auth.sign_in_page, "/login");
    }

    #[wasm_bindgen_test]
    fn test_bad_overrides_fall_back() {
        let config = AppConfig::from_overrides(Overrides {
            variant: Some("carousel"),
            per_page: Some("0"),
            latency_ms: Some("soon"),
            endpoint: Some("   "),
            ..Overrides::default()
        });
        assert_eq!(config.reviews.variant, ReviewVariant::Paginated);
        assert_eq!(config.reviews.per_page, 10);
        assert_eq!(config.auth.latency_ms, 3000);
        assert_eq!(config.reviews.endpoint, "http://localhost:8080/reviews");
    }
}
