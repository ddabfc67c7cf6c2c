//! Login, registration and logout workflows.

use crate::frontend::{Frontend, Page};
use crate::message::failure_message;
use ladle_api::ApiClient;
use ladle_core::LadleError;
use ladle_core::session::SessionStore;
use std::sync::Arc;

/// Use case behind the login and registration pages.
///
/// Auth state machine: `Anonymous --login success--> Authenticated`;
/// `Authenticated --logout success or any unauthorized--> Anonymous`.
/// Nothing here retries; every failure is one message and done.
pub struct AuthUseCase {
    api: Arc<ApiClient>,
    session: Arc<dyn SessionStore>,
    frontend: Arc<dyn Frontend>,
}

impl AuthUseCase {
    pub fn new(
        api: Arc<ApiClient>,
        session: Arc<dyn SessionStore>,
        frontend: Arc<dyn Frontend>,
    ) -> Self {
        Self {
            api,
            session,
            frontend,
        }
    }

    /// Authenticates and persists the returned session.
    ///
    /// On success the client lands on the recipes page. A 401 here means
    /// bad credentials, not an expired session, so it gets its own
    /// message and neither stores a session nor navigates.
    pub async fn login(&self, username: &str, password: &str) {
        let username = username.trim();
        let password = password.trim();

        if username.is_empty() || password.is_empty() {
            self.frontend.notify("Username and password are required");
            return;
        }

        match self.api.login(username, password).await {
            Ok(session) => {
                if let Err(err) = self.session.store(&session) {
                    tracing::error!(error = %err, "failed to persist session");
                    self.frontend.notify("Something went wrong, please try again");
                    return;
                }
                tracing::info!(username, is_admin = session.is_admin, "logged in");
                self.frontend.clear_form();
                self.frontend.navigate(Page::Recipes);
            }
            Err(LadleError::Unauthorized) => {
                self.frontend.notify("Invalid username or password");
            }
            Err(err) => self.frontend.notify(&failure_message(&err)),
        }
    }

    /// Creates an account and sends the user to the login page.
    pub async fn register(&self, username: &str, password: &str, repeat_password: &str) {
        let username = username.trim();
        let password = password.trim();
        let repeat_password = repeat_password.trim();

        if username.is_empty() || password.is_empty() || repeat_password.is_empty() {
            self.frontend.notify("All fields are required");
            return;
        }
        if password != repeat_password {
            self.frontend.notify("Passwords do not match");
            return;
        }

        match self.api.register(username, password).await {
            Ok(()) => {
                tracing::info!(username, "registered");
                self.frontend.clear_form();
                self.frontend.notify("Registration successful, please log in");
                self.frontend.navigate(Page::Login);
            }
            Err(err) => self.frontend.notify(&failure_message(&err)),
        }
    }

    /// Drops the session and returns to the login page.
    ///
    /// An unauthorized answer still ends the local session — the token is
    /// dead either way.
    pub async fn logout(&self) {
        match self.api.logout().await {
            Ok(()) | Err(LadleError::Unauthorized) => {
                if let Err(err) = self.session.clear() {
                    tracing::warn!(error = %err, "failed to clear session on logout");
                }
                tracing::info!("logged out");
                self.frontend.navigate(Page::Login);
            }
            Err(err) => self.frontend.notify(&failure_message(&err)),
        }
    }
}
