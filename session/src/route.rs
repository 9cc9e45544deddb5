//! Application paths.

/// Every page the app can navigate to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// Public landing page. Renders the login form.
    Landing,
    Login,
    Signup,
    /// The only protected page.
    Dashboard,
}

impl Route {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Dashboard => "/dashboard",
        }
    }

    /// Whether the page requires an authenticated session.
    #[must_use]
    pub fn is_protected(self) -> bool {
        matches!(self, Self::Dashboard)
    }
}
