//! Observable controller state

use roster_core::{Credentials, ListItem, StaffMember, ValidationState};
use std::fmt;

/// Outcome of the current login attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthResult {
    /// No attempt outstanding and no result to show
    #[default]
    Idle,
    /// Request sent, waiting for the server
    Pending,
    /// Login succeeded with this token
    Success(String),
    /// Login failed with this user-facing message
    Failure(String),
}

impl AuthResult {
    pub fn token(&self) -> Option<&str> {
        match self {
            AuthResult::Success(token) => Some(token),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AuthResult::Failure(message) => Some(message),
            _ => None,
        }
    }

    /// Whether this is a result the caller still has to consume.
    pub fn is_settled(&self) -> bool {
        matches!(self, AuthResult::Success(_) | AuthResult::Failure(_))
    }
}

/// Snapshot of an [`AuthController`](crate::AuthController).
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub(crate) email: String,
    pub(crate) password: String,
    pub(crate) validation: ValidationState,
    pub(crate) loading: bool,
    pub(crate) result: AuthResult,
}

impl AuthState {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn validation(&self) -> ValidationState {
        self.validation
    }

    pub fn email_invalid(&self) -> bool {
        self.validation.email_invalid
    }

    pub fn password_invalid(&self) -> bool {
        self.validation.password_invalid
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> &AuthResult {
        &self.result
    }

    pub fn token(&self) -> Option<&str> {
        self.result.token()
    }

    pub fn error(&self) -> Option<&str> {
        self.result.error()
    }

    /// Credentials for a new attempt, built from the current input.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.clone())
    }
}

impl fmt::Debug for AuthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthState")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("validation", &self.validation)
            .field("loading", &self.loading)
            .field("result", &self.result)
            .finish()
    }
}

/// Snapshot of a [`StaffListController`](crate::StaffListController).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    /// Records fetched so far, in arrival order; never shrinks
    pub(crate) accumulated: Vec<StaffMember>,
    /// 1-based page requested by the next load
    pub(crate) next_page: u32,
    pub(crate) last_error: Option<String>,
    pub(crate) loading: bool,
    /// Whether the most recently fetched page reported a successor
    pub(crate) more_available: bool,
    /// Page count reported by the most recent page body
    pub(crate) total_pages: Option<u32>,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            accumulated: Vec::new(),
            next_page: 1,
            last_error: None,
            loading: false,
            more_available: false,
            total_pages: None,
        }
    }
}

impl ListState {
    pub fn accumulated(&self) -> &[StaffMember] {
        &self.accumulated
    }

    pub fn next_page(&self) -> u32 {
        self.next_page
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn more_available(&self) -> bool {
        self.more_available
    }

    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    /// Records followed by a trailing [`ListItem::LoadMore`] while more
    /// pages remain.
    pub fn view_list(&self) -> Vec<ListItem> {
        let mut items: Vec<ListItem> = self
            .accumulated
            .iter()
            .cloned()
            .map(ListItem::Staff)
            .collect();
        if self.more_available {
            items.push(ListItem::LoadMore);
        }
        items
    }
}
