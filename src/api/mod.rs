//! Browser Bindings
//!
//! Implementations of the core widget seams over browser facilities,
//! organized by domain.

mod auth;
mod reviews;
mod storage;

pub use auth::{redirect, SimulatedAuthenticator};
pub use reviews::HttpReviewApi;
pub use storage::LocalFlagStore;
