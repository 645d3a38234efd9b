//! UI Components
//!
//! Leptos components for the auth and review islands.

mod auth_nav_link;
mod field_error;
mod loader;
mod pagination;
mod review_form;
mod review_section;
mod review_table;
mod sign_in_form;
mod star_rating;

pub use auth_nav_link::AuthNavLink;
pub use field_error::FieldErrorMessage;
pub use loader::Loader;
pub use pagination::Pagination;
pub use review_form::ReviewForm;
pub use review_section::ReviewSection;
pub use review_table::ReviewTable;
pub use sign_in_form::SignInForm;
pub use star_rating::StarRating;
