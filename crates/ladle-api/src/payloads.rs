//! Wire payloads exchanged with the backend.

use ladle_core::session::Session;
use ladle_core::{LadleError, Result};
use serde::Serialize;

#[derive(Serialize)]
pub(crate) struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub(crate) struct IngredientPayload<'a> {
    pub name: &'a str,
}

#[derive(Serialize)]
pub(crate) struct RecipePayload<'a> {
    pub name: &'a str,
    pub instructions: &'a str,
}

/// Parses the `/login` success body.
///
/// The backend answers with plain text, not JSON: the token and the admin
/// flag separated by whitespace (`"<token> <isAdmin>"`). A missing admin
/// flag reads as non-admin.
pub(crate) fn parse_login_body(body: &str) -> Result<Session> {
    let mut parts = body.split_whitespace();

    let token = parts
        .next()
        .filter(|token| !token.is_empty())
        .ok_or_else(|| LadleError::internal("login response carried no token"))?;

    let is_admin = parts.next().map(Session::admin_flag).unwrap_or(false);

    Ok(Session::new(token, is_admin))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login_body() {
        let session = parse_login_body("tok-123 true").unwrap();
        assert_eq!(session.token, "tok-123");
        assert!(session.is_admin);
    }

    #[test]
    fn test_parse_login_body_non_admin() {
        let session = parse_login_body("tok-123 false").unwrap();
        assert!(!session.is_admin);

        // Only the exact literal grants admin
        let session = parse_login_body("tok-123 TRUE").unwrap();
        assert!(!session.is_admin);
    }

    #[test]
    fn test_parse_login_body_missing_flag() {
        let session = parse_login_body("tok-123").unwrap();
        assert_eq!(session.token, "tok-123");
        assert!(!session.is_admin);
    }

    #[test]
    fn test_parse_login_body_empty() {
        assert!(parse_login_body("").is_err());
        assert!(parse_login_body("   ").is_err());
    }
}
