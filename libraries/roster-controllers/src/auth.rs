//! Login controller
//!
//! Validates input locally, sends a single login request and reconciles
//! its outcome into observable state.

use crate::{
    error::{ControllerError, Result},
    in_flight::InFlight,
    types::{AuthResult, AuthState},
};
use roster_core::{validation, ApiClient, ApiResult, LoginResponse};
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Drives one login attempt at a time.
///
/// State transitions:
/// ```text
/// Idle ──submit──► Pending ──► Success(token) ──reset──► Idle
///   ▲                 │    └─► Failure(message) ─reset─┘
///   └──invalid input──┘
/// ```
///
/// Every mutation is published to subscribers as one complete step, so an
/// observer never sees validation half-applied or a result without the
/// loading flag cleared.
pub struct AuthController<A> {
    api: A,
    generic_error: String,
    state: watch::Sender<AuthState>,
}

impl<A: ApiClient> AuthController<A> {
    /// Create a controller.
    ///
    /// `generic_error` is shown whenever no more specific message can be
    /// extracted from a failure.
    pub fn new(api: A, generic_error: impl Into<String>) -> Self {
        let (state, _) = watch::channel(AuthState::default());
        Self {
            api,
            generic_error: generic_error.into(),
            state,
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Receive a notification after every completed step.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// Update the email input and clear only the email error.
    pub fn set_email(&self, email: impl Into<String>) {
        let email = email.into();
        self.state.send_modify(|state| {
            state.email = email;
            state.validation.email_invalid = false;
        });
    }

    /// Update the password input and clear only the password error.
    pub fn set_password(&self, password: impl Into<String>) {
        let password = password.into();
        self.state.send_modify(|state| {
            state.password = password;
            state.validation.password_invalid = false;
        });
    }

    pub fn clear_email_error(&self) {
        self.state.send_if_modified(|state| {
            std::mem::take(&mut state.validation.email_invalid)
        });
    }

    pub fn clear_password_error(&self) {
        self.state.send_if_modified(|state| {
            std::mem::take(&mut state.validation.password_invalid)
        });
    }

    /// Validate the current input and, if it passes, log in.
    ///
    /// Returns the settled result. Invalid input never reaches the API;
    /// the per-field flags are set and the controller returns to `Idle`.
    ///
    /// # Errors
    /// - [`ControllerError::Busy`] if a login is already outstanding
    /// - [`ControllerError::InvalidInput`] if validation failed
    pub async fn submit_login(&self) -> Result<AuthResult> {
        let mut outcome = Err(ControllerError::Busy);
        self.state.send_if_modified(|state| {
            if state.loading {
                return false;
            }

            let credentials = state.credentials();
            state.validation = validation::validate(&credentials);

            if state.validation.has_errors() {
                state.loading = false;
                state.result = AuthResult::Idle;
                outcome = Err(ControllerError::InvalidInput {
                    email_invalid: state.validation.email_invalid,
                    password_invalid: state.validation.password_invalid,
                });
            } else {
                state.loading = true;
                state.result = AuthResult::Pending;
                outcome = Ok(credentials);
            }
            true
        });

        let credentials = match outcome {
            Ok(credentials) => credentials,
            Err(e) => {
                debug!(error = %e, "Login not submitted");
                return Err(e);
            }
        };

        debug!(email = %credentials.email, "Submitting login");
        let guard = InFlight::new(&self.state, settle);
        let response = self.api.login(credentials).await;
        let result = self.reconcile(response);

        let published = result.clone();
        guard.finish(move |state| state.result = published);

        Ok(result)
    }

    /// Clear a settled result back to `Idle`, keeping the input.
    ///
    /// Call after consuming a token so a replayed state does not trigger
    /// navigation twice.
    pub fn reset_result(&self) {
        self.state.send_if_modified(|state| {
            if state.result.is_settled() {
                state.result = AuthResult::Idle;
                true
            } else {
                false
            }
        });
    }

    fn reconcile(&self, response: ApiResult<Option<LoginResponse>>) -> AuthResult {
        match response {
            Ok(body) => match body.as_ref().and_then(LoginResponse::usable_token) {
                Some(token) => {
                    info!("Login succeeded");
                    AuthResult::Success(token.to_string())
                }
                None => {
                    warn!("Login response carried no usable token");
                    AuthResult::Failure(self.generic_error.clone())
                }
            },
            Err(e) => {
                let message = e.user_message(&self.generic_error);
                warn!(error = %e, message = %message, "Login failed");
                AuthResult::Failure(message)
            }
        }
    }
}

/// Clear loading; an attempt abandoned mid-flight returns to `Idle`.
fn settle(state: &mut AuthState) {
    state.loading = false;
    if state.result == AuthResult::Pending {
        state.result = AuthResult::Idle;
    }
}
