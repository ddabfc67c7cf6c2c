//! Failure presentation policy.
//!
//! Every failure variant translates to exactly one user-facing phrase, and
//! an unauthorized response on a protected page additionally tears the
//! session down and sends the user back to the login page.

use crate::frontend::{Frontend, Page};
use ladle_core::LadleError;
use ladle_core::session::SessionStore;

/// The single user-facing phrase for a failure variant.
pub fn failure_message(err: &LadleError) -> String {
    match err {
        LadleError::Validation(message) => message.clone(),
        LadleError::NotFound { .. } => err.to_string(),
        LadleError::Unauthorized => "Your session has expired, please log in again".to_string(),
        LadleError::Forbidden => "Admin access is required for that".to_string(),
        LadleError::Conflict => "That name already exists".to_string(),
        LadleError::RemoteNotFound => "Not found on the server".to_string(),
        LadleError::RemoteFailure { status } => format!("Request failed (status {status})"),
        LadleError::Network(_) => "Could not reach the server".to_string(),
        LadleError::Io { .. }
        | LadleError::Serialization { .. }
        | LadleError::Config(_)
        | LadleError::Internal(_) => "Something went wrong, please try again".to_string(),
    }
}

/// Presents a failure raised on the ingredient/recipe pages.
///
/// Unauthorized means the token is no longer good: the stored session is
/// discarded and the client navigates back to login (the Authenticated ->
/// Anonymous transition). Every other failure is a message only — inputs
/// stay, the mirror stays, the session stays.
pub fn handle_protected_failure(
    session: &dyn SessionStore,
    frontend: &dyn Frontend,
    err: &LadleError,
) {
    if err.is_unauthorized() {
        if let Err(clear_err) = session.clear() {
            tracing::warn!(error = %clear_err, "failed to clear session after 401");
        }
        frontend.notify(&failure_message(err));
        frontend.navigate(Page::Login);
    } else {
        frontend.notify(&failure_message(err));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_has_a_message() {
        let variants = [
            LadleError::validation("Name is required"),
            LadleError::not_found("recipe", "Toast"),
            LadleError::Unauthorized,
            LadleError::Forbidden,
            LadleError::Conflict,
            LadleError::RemoteNotFound,
            LadleError::RemoteFailure { status: 502 },
            LadleError::network("connection refused"),
            LadleError::io("disk full"),
            LadleError::internal("bug"),
        ];

        for err in variants {
            assert!(!failure_message(&err).is_empty(), "no message for {err:?}");
        }
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err = LadleError::validation("Name is required");
        assert_eq!(failure_message(&err), "Name is required");
    }
}
