//! Storefront Core
//!
//! State and rules behind the storefront page widgets: the fake sign-in
//! toggle and the customer review widget. Nothing in here touches the DOM;
//! browser facilities come in through the `ReviewApi`, `FlagStore` and
//! `Authenticator` traits.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod pagination;
pub mod rating;
pub mod validation;
pub mod widget;

pub use api::{PageQuery, ReviewApi};
pub use auth::{AuthSession, AuthView, Authenticator, FlagStore, NavLink};
pub use config::{AuthConfig, ReviewConfig, ReviewVariant};
pub use error::{WidgetError, WidgetResult};
pub use form::{FormView, ReviewForm, SubmitBlocked};
pub use models::{Review, ReviewPage, ReviewRow};
pub use pagination::{Pager, PagerAction, PagerControl};
pub use rating::{StarGlyphs, StarPicker, STAR_COUNT};
pub use validation::{FieldError, FieldErrors};
pub use widget::{ReviewSnapshot, ReviewWidget, SubmitOutcome};
