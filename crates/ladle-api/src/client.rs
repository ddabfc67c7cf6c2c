//! The HTTP client behind every workflow.

use crate::payloads::{Credentials, IngredientPayload, RecipePayload, parse_login_body};
use ladle_core::config::ClientConfig;
use ladle_core::entity::{Ingredient, Recipe};
use ladle_core::session::{Session, SessionStore};
use ladle_core::{LadleError, Result};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Client for the recipe backend's REST surface.
///
/// Holds the base URL fixed at construction and the injected session
/// store. The bearer token is read from the store on every call rather
/// than cached here, so a login or logout in one workflow is immediately
/// visible to the next request. The client performs no retries and
/// configures no timeouts beyond transport defaults; each failure is
/// surfaced once to the caller.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    /// Creates a client for the configured backend.
    pub fn new(config: &ClientConfig, session: Arc<dyn SessionStore>) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ============================================================================
    // Endpoints
    // ============================================================================

    /// `POST /login` — authenticates and returns the parsed session.
    ///
    /// The caller decides whether to persist the session; this method does
    /// not touch the store.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session> {
        let body = Credentials { username, password };
        let response = self
            .execute(self.anonymous(Method::POST, "/login").json(&body))
            .await?;
        let text = response.text().await?;
        parse_login_body(&text)
    }

    /// `POST /logout` — invalidates the token server-side.
    pub async fn logout(&self) -> Result<()> {
        self.execute(self.authenticated(Method::POST, "/logout"))
            .await?;
        Ok(())
    }

    /// `POST /register` — creates an account. 409 means the username is
    /// taken.
    pub async fn register(&self, username: &str, password: &str) -> Result<()> {
        let body = Credentials { username, password };
        self.execute(self.anonymous(Method::POST, "/register").json(&body))
            .await?;
        Ok(())
    }

    /// `GET /ingredients` — the full ingredient collection.
    pub async fn list_ingredients(&self) -> Result<Vec<Ingredient>> {
        let response = self
            .execute(self.authenticated(Method::GET, "/ingredients"))
            .await?;
        Self::decode(response).await
    }

    /// `POST /ingredients` — creates an ingredient.
    pub async fn create_ingredient(&self, name: &str) -> Result<()> {
        let body = IngredientPayload { name };
        self.execute(self.authenticated(Method::POST, "/ingredients").json(&body))
            .await?;
        Ok(())
    }

    /// `DELETE /ingredients/{id}`.
    pub async fn delete_ingredient(&self, id: i64) -> Result<()> {
        self.execute(self.authenticated(Method::DELETE, &format!("/ingredients/{id}")))
            .await?;
        Ok(())
    }

    /// `GET /recipes[?name=]` — the recipe collection, optionally filtered
    /// by name.
    ///
    /// A 404 on a *filtered* fetch is an empty search result, not an
    /// error.
    pub async fn list_recipes(&self, name_filter: Option<&str>) -> Result<Vec<Recipe>> {
        let mut request = self.authenticated(Method::GET, "/recipes");
        if let Some(term) = name_filter {
            request = request.query(&[("name", term)]);
        }

        match self.execute(request).await {
            Ok(response) => Self::decode(response).await,
            Err(LadleError::RemoteNotFound) if name_filter.is_some() => Ok(Vec::new()),
            Err(err) => Err(err),
        }
    }

    /// `POST /recipes` — creates a recipe; the backend fills in the author.
    pub async fn create_recipe(&self, name: &str, instructions: &str) -> Result<()> {
        let body = RecipePayload { name, instructions };
        self.execute(self.authenticated(Method::POST, "/recipes").json(&body))
            .await?;
        Ok(())
    }

    /// `PUT /recipes/{id}` — replaces name and instructions.
    pub async fn update_recipe(&self, id: i64, name: &str, instructions: &str) -> Result<()> {
        let body = RecipePayload { name, instructions };
        self.execute(
            self.authenticated(Method::PUT, &format!("/recipes/{id}"))
                .json(&body),
        )
        .await?;
        Ok(())
    }

    /// `DELETE /recipes/{id}`.
    pub async fn delete_recipe(&self, id: i64) -> Result<()> {
        self.execute(self.authenticated(Method::DELETE, &format!("/recipes/{id}")))
            .await?;
        Ok(())
    }

    // ============================================================================
    // Request plumbing
    // ============================================================================

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request builder for endpoints that do not require authentication.
    fn anonymous(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.url(path))
            .header(CONTENT_TYPE, "application/json")
    }

    /// Request builder for protected endpoints.
    ///
    /// The token is read from the session store now, not at client
    /// construction. With no stored token the request goes out without an
    /// Authorization header and the server's 401 drives the outcome.
    fn authenticated(&self, method: Method, path: &str) -> RequestBuilder {
        let mut request = self.anonymous(method, path);
        if let Some(token) = self.session.token() {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        request
    }

    /// Sends the request and classifies the response.
    async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(|err| {
            tracing::debug!(error = %err, "transport failure");
            LadleError::Network(err.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            tracing::debug!(status = status.as_u16(), "request rejected");
            Err(classify_failure(status))
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        response.json().await.map_err(|err| LadleError::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        })
    }
}

/// Maps a non-2xx status to exactly one error variant.
///
/// Together with the 2xx success path and the transport-failure path this
/// makes classification total: every response lands in one of seven
/// outcomes and callers never need a fallthrough default beyond
/// `RemoteFailure`.
pub fn classify_failure(status: StatusCode) -> LadleError {
    match status {
        StatusCode::UNAUTHORIZED => LadleError::Unauthorized,
        StatusCode::FORBIDDEN => LadleError::Forbidden,
        StatusCode::NOT_FOUND => LadleError::RemoteNotFound,
        StatusCode::CONFLICT => LadleError::Conflict,
        other => LadleError::RemoteFailure {
            status: other.as_u16(),
        },
    }
}
