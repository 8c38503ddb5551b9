//! Subcommand flows built on the controllers

use crate::error::{CliError, Result};
use roster_controllers::{AuthController, AuthResult, ControllerError, StaffListController};
use roster_core::validation::{MAX_PASSWORD_LEN, MIN_PASSWORD_LEN};
use roster_core::{ApiClient, ListItem};
use tracing::{debug, info};

/// Run one login attempt and return the token.
///
/// The controller's result is reset once the token has been taken.
pub async fn login<A: ApiClient>(
    controller: &AuthController<A>,
    email: &str,
    password: &str,
) -> Result<String> {
    controller.set_email(email);
    controller.set_password(password);

    let outcome = controller.submit_login().await;
    let token = match outcome {
        Ok(AuthResult::Success(token)) => Ok(token),
        Ok(AuthResult::Failure(message)) => Err(CliError::LoginFailed(message)),
        Ok(other) => Err(CliError::LoginFailed(format!("unexpected state {other:?}"))),
        Err(ControllerError::InvalidInput {
            email_invalid,
            password_invalid,
        }) => Err(CliError::InvalidInput(describe_invalid(
            email_invalid,
            password_invalid,
        ))),
        Err(e) => Err(CliError::LoginFailed(e.to_string())),
    };

    controller.reset_result();
    token
}

fn describe_invalid(email_invalid: bool, password_invalid: bool) -> String {
    let mut problems = Vec::new();
    if email_invalid {
        problems.push("email address is not valid".to_string());
    }
    if password_invalid {
        problems.push(format!(
            "password must be {MIN_PASSWORD_LEN}-{MAX_PASSWORD_LEN} characters"
        ));
    }
    problems.join("; ")
}

/// Load pages until none remain or `max_pages` have been loaded.
///
/// Returns the view list, ending in [`ListItem::LoadMore`] when the page
/// limit stopped loading early. Loading also stops once the cursor passes
/// the page count the server reported, whatever page numbers it sends.
///
/// A failed page yields [`CliError::Listing`] carrying the view list loaded
/// before the failure.
pub async fn load_staff<A: ApiClient>(
    controller: &StaffListController<A>,
    max_pages: Option<u32>,
) -> Result<Vec<ListItem>> {
    let mut loaded = 0u32;

    loop {
        if let Err(e) = controller.load_next_page().await {
            return Err(CliError::Listing {
                message: e.to_string(),
                loaded: controller.view_list(),
            });
        }

        let state = controller.state();
        if let Some(message) = state.last_error() {
            return Err(CliError::Listing {
                message: message.to_string(),
                loaded: state.view_list(),
            });
        }

        loaded += 1;
        debug!(
            loaded,
            records = state.accumulated().len(),
            total_pages = ?state.total_pages(),
            "Loaded staff page"
        );

        let within_total = state
            .total_pages()
            .is_some_and(|total| state.next_page() <= total);
        if !state.more_available() || !within_total || max_pages.is_some_and(|max| loaded >= max) {
            info!(
                pages = loaded,
                records = state.accumulated().len(),
                "Finished loading staff"
            );
            return Ok(state.view_list());
        }
    }
}

/// One output line for a view list entry.
pub fn render_item(item: &ListItem) -> String {
    match item {
        ListItem::Staff(member) => {
            let id = member
                .id
                .map_or_else(|| "-".to_string(), |id| id.to_string());
            let name = member.display_name();
            let name = if name.is_empty() { "(no name)" } else { &name };
            match member.email.as_deref() {
                Some(email) => format!("{id:>4}  {name}  <{email}>"),
                None => format!("{id:>4}  {name}"),
            }
        }
        ListItem::LoadMore => "   …  more staff available (raise --pages to load more)".to_string(),
    }
}
