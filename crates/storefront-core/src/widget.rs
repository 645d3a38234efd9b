//! Review Widget Controller
//!
//! One instance per review widget on the page. Owns the form state and the
//! listing state, drives the backend through `ReviewApi`, and pushes a
//! fresh `ReviewSnapshot` to its observer after every change.
//!
//! All methods take `&self`: handlers run on one thread and may overlap at
//! `.await` points, so state lives in `RefCell`s whose borrows never span
//! an await.

use std::cell::RefCell;

use crate::api::{PageQuery, ReviewApi};
use crate::config::ReviewConfig;
use crate::error::{WidgetError, WidgetResult};
use crate::form::{FormView, ReviewForm, SubmitBlocked};
use crate::models::{ReviewPage, ReviewRow};
use crate::pagination::{page_offset, total_pages, Pager, PagerAction, MAX_PAGES};

/// Everything the view needs to paint the widget
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReviewSnapshot {
    pub form: FormView,
    pub rows: Vec<ReviewRow>,
    /// Present once a paginated listing has loaded
    pub pager: Option<Pager>,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    Blocked(SubmitBlocked),
    Failed(WidgetError),
}

#[derive(Debug)]
struct ListState {
    current_page: u32,
    rows: Vec<ReviewRow>,
    /// Collection size from the last accepted response
    total: Option<u64>,
    /// Bumped per fetch; responses for an older value are dropped
    generation: u64,
}

type Observer = Box<dyn Fn(&ReviewSnapshot)>;

pub struct ReviewWidget<A> {
    api: A,
    config: ReviewConfig,
    form: RefCell<ReviewForm>,
    list: RefCell<ListState>,
    observer: Option<Observer>,
}

impl<A: ReviewApi> ReviewWidget<A> {
    pub fn new(api: A, config: ReviewConfig) -> Self {
        let form = ReviewForm::new(config.variant, config.initial_rating);
        Self {
            api,
            config,
            form: RefCell::new(form),
            list: RefCell::new(ListState {
                current_page: 1,
                rows: Vec::new(),
                total: None,
                generation: 0,
            }),
            observer: None,
        }
    }

    /// Register the callback that receives every new snapshot
    pub fn with_observer(mut self, observer: impl Fn(&ReviewSnapshot) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn current_page(&self) -> u32 {
        self.list.borrow().current_page
    }

    pub fn snapshot(&self) -> ReviewSnapshot {
        ReviewSnapshot {
            form: self.form.borrow().view(),
            rows: self.list.borrow().rows.clone(),
            pager: self.pager(),
        }
    }

    fn pager(&self) -> Option<Pager> {
        if !self.config.is_paginated() {
            return None;
        }
        let list = self.list.borrow();
        list.total
            .map(|total| Pager::new(list.current_page, total, self.config.per_page))
    }

    fn notify(&self) {
        if let Some(observer) = &self.observer {
            observer(&self.snapshot());
        }
    }

    fn update_form(&self, f: impl FnOnce(&mut ReviewForm)) {
        f(&mut self.form.borrow_mut());
        self.notify();
    }

    // ========================
    // Form Events
    // ========================

    pub fn input_name(&self, value: String) {
        self.update_form(|form| form.set_name(value));
    }

    pub fn input_message(&self, value: String) {
        self.update_form(|form| form.set_message(value));
    }

    pub fn click_star(&self, index: usize) {
        self.update_form(|form| form.click_star(index));
    }

    pub fn hover_star(&self, index: usize) {
        self.update_form(|form| form.hover_star(index));
    }

    pub fn leave_stars(&self) {
        self.update_form(|form| form.leave_stars());
    }

    /// Validate, POST, and on success reset the form and reload the list
    pub async fn submit(&self) -> SubmitOutcome {
        let started = self.form.borrow_mut().begin_submit();
        self.notify();
        let payload = match started {
            Ok(payload) => payload,
            Err(blocked) => {
                tracing::debug!(?blocked, "review submit blocked");
                return SubmitOutcome::Blocked(blocked);
            }
        };

        match self.api.create_review(&payload).await {
            Ok(_) => {
                self.form.borrow_mut().complete_submit();
                if self.config.is_paginated() {
                    self.list.borrow_mut().current_page = 1;
                }
                self.notify();
                tracing::debug!(rating = payload.rating, "review submitted");
                // Listing failures are logged by load_reviews and do not undo the submit
                let _ = self.load_reviews().await;
                SubmitOutcome::Submitted
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to submit review");
                self.form.borrow_mut().fail_submit();
                self.notify();
                SubmitOutcome::Failed(err)
            }
        }
    }

    // ========================
    // Listing
    // ========================

    /// Fetch the current page (or the whole list) and repaint the table
    ///
    /// A malformed body leaves the table as it was. If another fetch was
    /// issued while this one was in flight, this response is discarded.
    pub async fn load_reviews(&self) -> WidgetResult<()> {
        let (query, generation) = {
            let mut list = self.list.borrow_mut();
            list.generation += 1;
            let query = self.config.is_paginated().then(|| PageQuery {
                page: list.current_page,
                limit: self.config.per_page,
            });
            (query, list.generation)
        };

        let page = match self
            .api
            .fetch_reviews(query)
            .await
            .and_then(ReviewPage::from_json)
            .and_then(|page| self.check_page_count(page))
        {
            Ok(page) => page,
            Err(err) => {
                tracing::error!(error = %err, ?query, "failed to load reviews");
                return Err(err);
            }
        };

        {
            let mut list = self.list.borrow_mut();
            if list.generation != generation {
                tracing::debug!(?query, "discarding stale review page");
                return Ok(());
            }
            let offset = query.map_or(0, |q| page_offset(q.page, q.limit));
            list.total = Some(page.effective_total());
            list.rows = ReviewRow::from_page(page.data, offset);
            tracing::debug!(rows = list.rows.len(), total = ?list.total, "reviews loaded");
        }
        self.notify();
        Ok(())
    }

    /// Reject a listing whose reported size would need an absurd pager
    fn check_page_count(&self, page: ReviewPage) -> WidgetResult<ReviewPage> {
        if !self.config.is_paginated() {
            return Ok(page);
        }
        let total = page.effective_total();
        if total_pages(total, self.config.per_page) > MAX_PAGES {
            return Err(WidgetError::MalformedResponse(format!(
                "total {total} exceeds {MAX_PAGES} pages"
            )));
        }
        Ok(page)
    }

    /// Handle a pager click; returns the page that was requested, if any
    pub async fn paginate(&self, action: PagerAction) -> Option<u32> {
        let target = self.pager()?.apply(action)?;
        self.list.borrow_mut().current_page = target;
        let _ = self.load_reviews().await;
        Some(target)
    }
}
