//! Review Form State
//!
//! Synchronous state machine behind the review form. Every UI event maps
//! to one method; the async submit path is driven by `ReviewWidget`.

use crate::config::ReviewVariant;
use crate::models::Review;
use crate::rating::{StarPicker, STAR_COUNT};
use crate::validation::{self, FieldErrors};

pub const SUBMIT_LABEL: &str = "Submit";
pub const SUBMITTING_LABEL: &str = "Submitting...";
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit review. Please try again.";

/// Why a submit attempt did not produce a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A previous submission is still in flight
    InFlight,
    /// Validation failed
    Invalid,
}

/// Render-ready view of the form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormView {
    pub name: String,
    pub message: String,
    pub rating: u8,
    pub stars: [bool; STAR_COUNT],
    pub errors: FieldErrors,
    pub submit_error: Option<String>,
    pub is_loading: bool,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
}

/// Review form state
#[derive(Debug, Clone)]
pub struct ReviewForm {
    variant: ReviewVariant,
    name: String,
    message: String,
    picker: StarPicker,
    errors: FieldErrors,
    submit_error: Option<String>,
    is_loading: bool,
}

impl ReviewForm {
    pub fn new(variant: ReviewVariant, initial_rating: u8) -> Self {
        Self {
            variant,
            name: String::new(),
            message: String::new(),
            picker: StarPicker::new(initial_rating),
            errors: FieldErrors::default(),
            submit_error: None,
            is_loading: false,
        }
    }

    fn validates_inline(&self) -> bool {
        self.variant == ReviewVariant::Paginated
    }

    pub fn rating(&self) -> u8 {
        self.picker.rating()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    // ========================
    // Input Events
    // ========================

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
        if self.validates_inline() {
            self.errors.name = validation::check_name(&self.name);
        }
    }

    pub fn set_message(&mut self, value: impl Into<String>) {
        self.message = value.into();
        if self.validates_inline() {
            self.errors.message = validation::check_message(&self.message);
        }
    }

    pub fn click_star(&mut self, index: usize) {
        let rating = self.picker.click(index);
        if self.validates_inline() {
            self.errors.rating = validation::check_rating(rating);
        }
    }

    pub fn hover_star(&mut self, index: usize) {
        self.picker.hover(index);
    }

    pub fn leave_stars(&mut self) {
        self.picker.leave();
    }

    // ========================
    // Submission
    // ========================

    /// Whether the submit control is clickable
    pub fn submit_enabled(&self) -> bool {
        if self.is_loading {
            return false;
        }
        match self.variant {
            ReviewVariant::Basic => validation::is_complete(&self.name, self.picker.rating(), &self.message),
            ReviewVariant::Paginated => self.errors.is_empty(),
        }
    }

    /// Validate and enter the loading state; returns the payload to POST
    pub fn begin_submit(&mut self) -> Result<Review, SubmitBlocked> {
        if self.is_loading {
            return Err(SubmitBlocked::InFlight);
        }
        let rating = self.picker.rating();
        let valid = match self.variant {
            ReviewVariant::Basic => validation::is_complete(&self.name, rating, &self.message),
            ReviewVariant::Paginated => {
                self.errors = validation::validate_submission(&self.name, rating, &self.message);
                self.errors.is_empty()
            }
        };
        if !valid {
            return Err(SubmitBlocked::Invalid);
        }

        self.is_loading = true;
        self.submit_error = None;
        Ok(Review {
            name: self.name.trim().to_string(),
            rating,
            message: self.message.trim().to_string(),
        })
    }

    /// The backend accepted the review
    pub fn complete_submit(&mut self) {
        self.reset();
        self.is_loading = false;
    }

    /// The request failed; only the paginated variant shows a banner
    pub fn fail_submit(&mut self) {
        self.is_loading = false;
        if self.validates_inline() {
            self.submit_error = Some(SUBMIT_FAILED_MESSAGE.to_string());
        }
    }

    /// Empty fields, unset rating, no errors
    pub fn reset(&mut self) {
        self.name.clear();
        self.message.clear();
        self.picker.reset();
        self.errors.clear();
    }

    pub fn view(&self) -> FormView {
        FormView {
            name: self.name.clone(),
            message: self.message.clone(),
            rating: self.picker.rating(),
            stars: self.picker.filled(),
            errors: self.errors,
            submit_error: self.submit_error.clone(),
            is_loading: self.is_loading,
            submit_enabled: self.submit_enabled(),
            submit_label: if self.is_loading { SUBMITTING_LABEL } else { SUBMIT_LABEL },
        }
    }
}
