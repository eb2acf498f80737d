// Path-based routing for the storefront pages.
//
// Only three routes are served by this bundle.  The rest are destinations
// owned by other parts of the site; we only ever navigate *to* them.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Landing,
    SignUp,
    Merchant,
    ChooseRole,
    Waitlist,
    SignIn,
    ForgotPassword,
    WaitlistSuccess,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::SignUp => "/signup",
            Route::Merchant => "/merchant",
            Route::ChooseRole => "/choose-role",
            Route::Waitlist => "/waitlist",
            Route::SignIn => "/signin",
            Route::ForgotPassword => "/forgot-password",
            Route::WaitlistSuccess => "/waitlist-success",
        }
    }

    /// Resolve `location.pathname`.  Unknown paths land on the marketing page.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Landing,
            "/signup" => Route::SignUp,
            "/merchant" => Route::Merchant,
            "/choose-role" => Route::ChooseRole,
            "/waitlist" => Route::Waitlist,
            "/signin" => Route::SignIn,
            "/forgot-password" => Route::ForgotPassword,
            "/waitlist-success" => Route::WaitlistSuccess,
            _ => Route::Landing,
        }
    }

    /// Whether this bundle renders the route itself.
    pub fn is_served_here(self) -> bool {
        matches!(self, Route::Landing | Route::SignUp | Route::Merchant)
    }
}
