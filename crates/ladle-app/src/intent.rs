//! User intents, decoupled from any UI toolkit's event model.
//!
//! Each workflow is an explicit intent; front-ends translate whatever
//! their input mechanism produces (REPL lines here, click handlers in the
//! original) into a [`UserIntent`] and hand it to the dispatcher.

/// Everything a user can ask the client to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIntent {
    Login {
        username: String,
        password: String,
    },
    Register {
        username: String,
        password: String,
        repeat_password: String,
    },
    Logout,
    ShowIngredients,
    AddIngredient {
        name: String,
    },
    RemoveIngredient {
        name: String,
    },
    ShowRecipes,
    AddRecipe {
        name: String,
        instructions: String,
    },
    UpdateRecipe {
        name: String,
        instructions: String,
    },
    RemoveRecipe {
        name: String,
    },
    SearchRecipes {
        term: String,
    },
}

impl UserIntent {
    /// Parses a REPL line into an intent.
    ///
    /// Names may contain spaces, so everything after the (sub)command is
    /// taken verbatim; recipe bodies separate name from instructions with
    /// `::`. Field-level validation (empty name, mismatched passwords) is
    /// the workflow's job, not the parser's.
    pub fn parse(line: &str) -> Result<Self, String> {
        let trimmed = line.trim();
        let (command, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (trimmed, ""),
        };

        match command {
            "login" => {
                let mut parts = rest.split_whitespace();
                match (parts.next(), parts.next()) {
                    (Some(username), Some(password)) => Ok(Self::Login {
                        username: username.to_string(),
                        password: password.to_string(),
                    }),
                    _ => Err("Usage: login <username> <password>".to_string()),
                }
            }
            "register" => {
                let mut parts = rest.split_whitespace();
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(username), Some(password), Some(repeat_password)) => {
                        Ok(Self::Register {
                            username: username.to_string(),
                            password: password.to_string(),
                            repeat_password: repeat_password.to_string(),
                        })
                    }
                    _ => Err("Usage: register <username> <password> <repeat-password>".to_string()),
                }
            }
            "logout" => Ok(Self::Logout),
            "ingredients" => Ok(Self::ShowIngredients),
            "ingredient" => match rest.split_once(char::is_whitespace) {
                Some(("add", name)) => Ok(Self::AddIngredient {
                    name: name.trim().to_string(),
                }),
                Some(("rm", name)) => Ok(Self::RemoveIngredient {
                    name: name.trim().to_string(),
                }),
                _ => Err("Usage: ingredient add|rm <name>".to_string()),
            },
            "recipes" => Ok(Self::ShowRecipes),
            "recipe" => {
                let (action, body) = rest
                    .split_once(char::is_whitespace)
                    .map(|(action, body)| (action, body.trim()))
                    .unwrap_or((rest, ""));
                match action {
                    "add" => Self::parse_recipe_body(body).map(|(name, instructions)| {
                        Self::AddRecipe { name, instructions }
                    }),
                    "update" => Self::parse_recipe_body(body).map(|(name, instructions)| {
                        Self::UpdateRecipe { name, instructions }
                    }),
                    "rm" => Ok(Self::RemoveRecipe {
                        name: body.to_string(),
                    }),
                    _ => Err(
                        "Usage: recipe add|update <name> :: <instructions>, or recipe rm <name>"
                            .to_string(),
                    ),
                }
            }
            "search" => Ok(Self::SearchRecipes {
                term: rest.to_string(),
            }),
            other => Err(format!("Unknown command: {other}")),
        }
    }

    fn parse_recipe_body(body: &str) -> Result<(String, String), String> {
        match body.split_once("::") {
            Some((name, instructions)) => {
                Ok((name.trim().to_string(), instructions.trim().to_string()))
            }
            None => Err("Expected: <name> :: <instructions>".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login() {
        assert_eq!(
            UserIntent::parse("login alice secret").unwrap(),
            UserIntent::Login {
                username: "alice".to_string(),
                password: "secret".to_string(),
            }
        );
        assert!(UserIntent::parse("login alice").is_err());
    }

    #[test]
    fn test_parse_register() {
        assert_eq!(
            UserIntent::parse("register bob pw pw").unwrap(),
            UserIntent::Register {
                username: "bob".to_string(),
                password: "pw".to_string(),
                repeat_password: "pw".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_ingredient_names_keep_spaces() {
        assert_eq!(
            UserIntent::parse("ingredient add Sea Salt").unwrap(),
            UserIntent::AddIngredient {
                name: "Sea Salt".to_string(),
            }
        );
        assert_eq!(
            UserIntent::parse("ingredient rm Sea Salt").unwrap(),
            UserIntent::RemoveIngredient {
                name: "Sea Salt".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_recipe_add_with_separator() {
        assert_eq!(
            UserIntent::parse("recipe add French Toast :: Soak bread, then fry").unwrap(),
            UserIntent::AddRecipe {
                name: "French Toast".to_string(),
                instructions: "Soak bread, then fry".to_string(),
            }
        );
        assert!(UserIntent::parse("recipe add French Toast").is_err());
    }

    #[test]
    fn test_parse_search_allows_empty_term() {
        assert_eq!(
            UserIntent::parse("search").unwrap(),
            UserIntent::SearchRecipes {
                term: String::new(),
            }
        );
        assert_eq!(
            UserIntent::parse("search toast").unwrap(),
            UserIntent::SearchRecipes {
                term: "toast".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(UserIntent::parse("frobnicate").is_err());
    }
}
