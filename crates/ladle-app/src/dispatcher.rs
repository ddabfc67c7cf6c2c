//! Routes user intents to the owning use case.

use crate::auth_usecase::AuthUseCase;
use crate::frontend::Frontend;
use crate::ingredient_usecase::IngredientUseCase;
use crate::intent::UserIntent;
use crate::recipe_usecase::RecipeUseCase;
use ladle_api::ApiClient;
use ladle_core::session::SessionStore;
use std::sync::Arc;

/// The dispatch table: one entry point for every workflow, independent of
/// how the frontend produced the intent.
pub struct IntentDispatcher {
    auth: AuthUseCase,
    ingredients: IngredientUseCase,
    recipes: RecipeUseCase,
}

impl IntentDispatcher {
    /// Wires all three page use cases against shared collaborators.
    pub fn new(
        api: Arc<ApiClient>,
        session: Arc<dyn SessionStore>,
        frontend: Arc<dyn Frontend>,
    ) -> Self {
        Self {
            auth: AuthUseCase::new(api.clone(), session.clone(), frontend.clone()),
            ingredients: IngredientUseCase::new(api.clone(), session.clone(), frontend.clone()),
            recipes: RecipeUseCase::new(api, session, frontend),
        }
    }

    /// Runs one workflow to completion.
    ///
    /// Workflows are sequential per dispatcher: the caller's event loop
    /// decides whether two intents may overlap, and the mirrors simply
    /// keep whichever refresh lands last.
    pub async fn dispatch(&mut self, intent: UserIntent) {
        match intent {
            UserIntent::Login { username, password } => {
                self.auth.login(&username, &password).await
            }
            UserIntent::Register {
                username,
                password,
                repeat_password,
            } => {
                self.auth
                    .register(&username, &password, &repeat_password)
                    .await
            }
            UserIntent::Logout => self.auth.logout().await,
            UserIntent::ShowIngredients => self.ingredients.refresh().await,
            UserIntent::AddIngredient { name } => self.ingredients.add(&name).await,
            UserIntent::RemoveIngredient { name } => self.ingredients.remove(&name).await,
            UserIntent::ShowRecipes => self.recipes.refresh().await,
            UserIntent::AddRecipe { name, instructions } => {
                self.recipes.add(&name, &instructions).await
            }
            UserIntent::UpdateRecipe { name, instructions } => {
                self.recipes.update(&name, &instructions).await
            }
            UserIntent::RemoveRecipe { name } => self.recipes.remove(&name).await,
            UserIntent::SearchRecipes { term } => self.recipes.search(&term).await,
        }
    }

    pub fn ingredients(&self) -> &IngredientUseCase {
        &self.ingredients
    }

    pub fn recipes(&self) -> &RecipeUseCase {
        &self.recipes
    }
}
