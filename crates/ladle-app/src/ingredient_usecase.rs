//! Ingredient page workflows.

use crate::frontend::Frontend;
use crate::message::{failure_message, handle_protected_failure};
use ladle_api::ApiClient;
use ladle_core::entity::Ingredient;
use ladle_core::mirror::CollectionMirror;
use ladle_core::session::SessionStore;
use ladle_core::LadleError;
use std::sync::Arc;

/// Use case behind the ingredient management page.
///
/// Owns the local mirror of the ingredient collection. Every mutation ends
/// in a full re-fetch — the mirror is never patched in place, so it can
/// trail server state by at most one round trip.
pub struct IngredientUseCase {
    api: Arc<ApiClient>,
    session: Arc<dyn SessionStore>,
    frontend: Arc<dyn Frontend>,
    mirror: CollectionMirror<Ingredient>,
}

impl IngredientUseCase {
    pub fn new(
        api: Arc<ApiClient>,
        session: Arc<dyn SessionStore>,
        frontend: Arc<dyn Frontend>,
    ) -> Self {
        Self {
            api,
            session,
            frontend,
            mirror: CollectionMirror::new(),
        }
    }

    /// The current snapshot, for rendering and lookups.
    pub fn mirror(&self) -> &CollectionMirror<Ingredient> {
        &self.mirror
    }

    /// Re-fetches the whole collection and re-renders the list.
    pub async fn refresh(&mut self) {
        match self.api.list_ingredients().await {
            Ok(records) => {
                tracing::debug!(count = records.len(), "refreshed ingredients");
                self.mirror.replace_all(records);
                self.render();
            }
            Err(err) => {
                handle_protected_failure(self.session.as_ref(), self.frontend.as_ref(), &err)
            }
        }
    }

    /// Creates an ingredient, then re-fetches.
    pub async fn add(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            self.frontend.notify("Ingredient name is required");
            return;
        }

        match self.api.create_ingredient(name).await {
            Ok(()) => {
                self.frontend.clear_form();
                self.refresh().await;
            }
            Err(err) => {
                handle_protected_failure(self.session.as_ref(), self.frontend.as_ref(), &err)
            }
        }
    }

    /// Deletes the ingredient carrying the given display name.
    ///
    /// The id is resolved against the current mirror; an unknown name
    /// aborts locally without a request.
    pub async fn remove(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            self.frontend.notify("Ingredient name is required");
            return;
        }

        let Some(id) = self.mirror.find_by_name(name).map(|record| record.id) else {
            self.frontend
                .notify(&failure_message(&LadleError::not_found("ingredient", name)));
            return;
        };

        match self.api.delete_ingredient(id).await {
            Ok(()) => self.refresh().await,
            Err(err) => {
                handle_protected_failure(self.session.as_ref(), self.frontend.as_ref(), &err)
            }
        }
    }

    fn render(&self) {
        let rows: Vec<String> = self.mirror.all().iter().map(ToString::to_string).collect();
        self.frontend.render_rows(&rows);
    }
}
