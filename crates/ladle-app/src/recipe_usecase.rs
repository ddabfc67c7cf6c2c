//! Recipe page workflows.

use crate::frontend::Frontend;
use crate::message::{failure_message, handle_protected_failure};
use ladle_api::ApiClient;
use ladle_core::LadleError;
use ladle_core::entity::Recipe;
use ladle_core::mirror::CollectionMirror;
use ladle_core::session::SessionStore;
use std::sync::Arc;

/// Use case behind the recipe management page.
///
/// Owns the local mirror of the recipe collection, which always holds the
/// last server response — either the full collection or the latest search
/// result. Name-driven update and delete resolve ids against that
/// snapshot.
pub struct RecipeUseCase {
    api: Arc<ApiClient>,
    session: Arc<dyn SessionStore>,
    frontend: Arc<dyn Frontend>,
    mirror: CollectionMirror<Recipe>,
}

impl RecipeUseCase {
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
    pub fn mirror(&self) -> &CollectionMirror<Recipe> {
        &self.mirror
    }

    /// Re-fetches the unfiltered collection and re-renders the list.
    pub async fn refresh(&mut self) {
        self.fetch(None).await;
    }

    /// Fetches recipes matching the term and renders them.
    ///
    /// An empty (or all-whitespace) term is the unfiltered fetch. A search
    /// with no hits renders an empty list — the backend's 404 on that path
    /// is not an error.
    pub async fn search(&mut self, term: &str) {
        let term = term.trim();
        if term.is_empty() {
            self.fetch(None).await;
        } else {
            self.fetch(Some(term)).await;
        }
    }

    /// Creates a recipe, then re-fetches.
    pub async fn add(&mut self, name: &str, instructions: &str) {
        let name = name.trim();
        let instructions = instructions.trim();
        if name.is_empty() || instructions.is_empty() {
            self.frontend.notify("Recipe name and instructions are required");
            return;
        }

        match self.api.create_recipe(name, instructions).await {
            Ok(()) => {
                self.frontend.clear_form();
                self.refresh().await;
            }
            Err(err) => {
                handle_protected_failure(self.session.as_ref(), self.frontend.as_ref(), &err)
            }
        }
    }

    /// Replaces the instructions of the recipe carrying the given name.
    ///
    /// The id is resolved against the current mirror; an unknown name
    /// aborts locally without a request.
    pub async fn update(&mut self, name: &str, instructions: &str) {
        let name = name.trim();
        let instructions = instructions.trim();
        if name.is_empty() || instructions.is_empty() {
            self.frontend.notify("Recipe name and instructions are required");
            return;
        }

        let Some(id) = self.mirror.find_by_name(name).map(|record| record.id) else {
            self.frontend
                .notify(&failure_message(&LadleError::not_found("recipe", name)));
            return;
        };

        match self.api.update_recipe(id, name, instructions).await {
            Ok(()) => {
                self.frontend.clear_form();
                self.refresh().await;
            }
            Err(err) => {
                handle_protected_failure(self.session.as_ref(), self.frontend.as_ref(), &err)
            }
        }
    }

    /// Deletes the recipe carrying the given display name.
    pub async fn remove(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            self.frontend.notify("Recipe name is required");
            return;
        }

        let Some(id) = self.mirror.find_by_name(name).map(|record| record.id) else {
            self.frontend
                .notify(&failure_message(&LadleError::not_found("recipe", name)));
            return;
        };

        match self.api.delete_recipe(id).await {
            Ok(()) => self.refresh().await,
            Err(err) => {
                handle_protected_failure(self.session.as_ref(), self.frontend.as_ref(), &err)
            }
        }
    }

    async fn fetch(&mut self, term: Option<&str>) {
        match self.api.list_recipes(term).await {
            Ok(records) => {
                tracing::debug!(count = records.len(), filtered = term.is_some(), "refreshed recipes");
                self.mirror.replace_all(records);
                self.render();
            }
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
