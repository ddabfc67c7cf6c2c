//! The port through which workflows talk to whatever renders them.
//!
//! The original client manipulated the DOM, called `alert`, and assigned
//! `window.location`. Those three collaborators are abstracted here so the
//! use cases run unchanged under a terminal frontend or a recording test
//! double.

/// The pages a workflow can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Register,
    Ingredients,
    Recipes,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Login => "Login",
            Page::Register => "Register",
            Page::Ingredients => "Ingredients",
            Page::Recipes => "Recipes",
        }
    }
}

/// User-facing surface of a page.
pub trait Frontend: Send + Sync {
    /// Shows a blocking notification (the `alert` of the web client).
    fn notify(&self, message: &str);

    /// Replaces the visible list with one row per record.
    fn render_rows(&self, rows: &[String]);

    /// Switches to another page.
    fn navigate(&self, page: Page);

    /// Clears the current page's form inputs after a successful submit.
    fn clear_form(&self);
}
