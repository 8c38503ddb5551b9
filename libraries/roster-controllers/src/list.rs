//! Paginated staff listing controller

use crate::{
    error::{ControllerError, Result},
    in_flight::InFlight,
    types::ListState,
};
use roster_core::{ApiClient, ApiError, ApiResult, ListItem, StaffPage};
use tokio::sync::watch;
use tracing::{debug, warn};

/// Fetches staff pages one at a time and accumulates the records.
///
/// The cursor starts at page 1 and advances by one after every fetch that
/// returns a page body, including a page with no records. Failed fetches
/// leave the cursor alone so calling [`load_next_page`] again retries the
/// same page. A new controller is a new session; there is no rewind.
///
/// [`load_next_page`]: StaffListController::load_next_page
pub struct StaffListController<A> {
    api: A,
    generic_error: String,
    state: watch::Sender<ListState>,
}

impl<A: ApiClient> StaffListController<A> {
    pub fn new(api: A, generic_error: impl Into<String>) -> Self {
        let (state, _) = watch::channel(ListState::default());
        Self {
            api,
            generic_error: generic_error.into(),
            state,
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> ListState {
        self.state.borrow().clone()
    }

    /// Receive a notification after every completed step.
    pub fn subscribe(&self) -> watch::Receiver<ListState> {
        self.state.subscribe()
    }

    /// Records plus a trailing "load more" entry while pages remain.
    pub fn view_list(&self) -> Vec<ListItem> {
        self.state.borrow().view_list()
    }

    /// Fetch the page at the cursor and merge it into the list.
    ///
    /// Request failures are not returned; they land in
    /// [`ListState::last_error`].
    ///
    /// # Errors
    /// [`ControllerError::Busy`] if a fetch is already outstanding
    pub async fn load_next_page(&self) -> Result<()> {
        let mut cursor = None;
        self.state.send_if_modified(|state| {
            if state.loading {
                return false;
            }
            state.loading = true;
            state.last_error = None;
            cursor = Some(state.next_page);
            true
        });

        let Some(page) = cursor else {
            debug!("Staff page already loading");
            return Err(ControllerError::Busy);
        };

        debug!(page, "Loading staff page");
        let guard = InFlight::new(&self.state, settle);
        let response = self.api.fetch_page(page).await;

        let generic_error = self.generic_error.as_str();
        let mut merged = None;
        guard.finish(|state| merged = Some(merge(state, page, response, generic_error)));

        if let Some(merged) = merged {
            log_merge(page, &merged);
        }

        Ok(())
    }
}

/// What a merge did to the list, logged once the state is published.
enum Merged {
    Page { records: usize, more_available: bool },
    NoBody,
    Failed { error: ApiError, message: String },
}

fn settle(state: &mut ListState) {
    state.loading = false;
}

fn merge(
    state: &mut ListState,
    page: u32,
    response: ApiResult<Option<StaffPage>>,
    generic_error: &str,
) -> Merged {
    match response {
        Ok(Some(body)) => {
            let reported_more = body.has_more();
            let total_pages = body.total_pages;
            let records = body.data.unwrap_or_default();
            let count = records.len();

            state.accumulated.extend(records);
            state.next_page = state.next_page.saturating_add(1);
            state.total_pages = total_pages;
            // A page number the server got wrong must not keep the cursor
            // running past the reported total.
            state.more_available =
                reported_more && total_pages.is_some_and(|total| state.next_page <= total);

            Merged::Page {
                records: count,
                more_available: state.more_available,
            }
        }
        Ok(None) => {
            state.last_error = Some(generic_error.to_string());
            Merged::NoBody
        }
        Err(error) => {
            let message = error.user_message(generic_error);
            state.last_error = Some(message.clone());
            Merged::Failed { error, message }
        }
    }
}

fn log_merge(page: u32, merged: &Merged) {
    match merged {
        Merged::Page {
            records,
            more_available,
        } => debug!(page, records, more_available, "Merged staff page"),
        Merged::NoBody => warn!(page, "Staff page had no body"),
        Merged::Failed { error, message } => {
            warn!(page, error = %error, message = %message, "Staff page request failed");
        }
    }
}
