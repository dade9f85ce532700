// src/router.rs
//! Declarative path-to-page mapping with a single gate: private routes
//! require an active session. Session state is re-evaluated on every
//! navigation, so a cleared session redirects on the next hop.

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    Resume,
    Jobs,
    Applications,
    HrContacts,
    Settings,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Dashboard => "/dashboard",
            Route::Resume => "/resume",
            Route::Jobs => "/jobs",
            Route::Applications => "/applications",
            Route::HrContacts => "/hr-contacts",
            Route::Settings => "/settings",
        }
    }

    fn from_path(path: &str) -> Option<Route> {
        match path {
            "/login" => Some(Route::Login),
            "/register" => Some(Route::Register),
            "/dashboard" => Some(Route::Dashboard),
            "/resume" => Some(Route::Resume),
            "/jobs" => Some(Route::Jobs),
            "/applications" => Some(Route::Applications),
            "/hr-contacts" => Some(Route::HrContacts),
            "/settings" => Some(Route::Settings),
            _ => None,
        }
    }

    /// Login and register are reachable without a session.
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Login | Route::Register)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect(&'static str),
}

/// One routing step for a requested path.
///
/// - public paths render regardless of session state;
/// - `/` redirects to the dashboard;
/// - private paths render only with a session, otherwise redirect to login;
/// - unknown paths redirect to the dashboard regardless of session state.
pub fn resolve(path: &str, authenticated: bool) -> Navigation {
    let path = normalize(path);

    match Route::from_path(path) {
        Some(route) if route.is_public() => Navigation::Render(route),
        Some(route) if authenticated => Navigation::Render(route),
        Some(_) => Navigation::Redirect("/login"),
        // Index and unknown paths both land on the dashboard.
        None => Navigation::Redirect("/dashboard"),
    }
}

/// Follow redirects until a route renders. The redirect graph is acyclic
/// for any fixed session state, so this terminates in at most two hops.
pub fn navigate(path: &str, authenticated: bool) -> Route {
    let mut current = normalize(path).to_string();
    loop {
        match resolve(&current, authenticated) {
            Navigation::Render(route) => return route,
            Navigation::Redirect(next) => {
                debug!("Redirecting {} -> {}", current, next);
                current = next.to_string();
            }
        }
    }
}

fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}
