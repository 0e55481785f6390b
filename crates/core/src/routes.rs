// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::guard::{GuardDecision, guard_session};
use crate::session::Session;
use blood_bank_domain::Role;

/// Who may open a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// Anyone, logged in or not.
    Public,
    /// Authenticated users holding one of the listed roles.
    /// An empty list admits any authenticated user.
    Roles(Vec<Role>),
}

/// A path and the access rule guarding it.
///
/// A route also covers every path nested below it, so `/admin` guards
/// `/admin/users` unless a more specific route exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    path: String,
    access: Access,
}

impl Route {
    /// Creates a route.
    #[must_use]
    pub fn new(path: &str, access: Access) -> Self {
        Self {
            path: normalize(path).to_string(),
            access,
        }
    }

    /// The route's path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The route's access rule.
    #[must_use]
    pub const fn access(&self) -> &Access {
        &self.access
    }

    fn covers(&self, path: &str) -> bool {
        if self.path == path {
            return true;
        }
        self.path != "/"
            && path
                .strip_prefix(self.path.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

/// The application's route list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// The table used by the blood bank client.
    ///
    /// Public pages are open to everyone. The role areas are:
    /// `/admin` for administrators, `/staff` for staff and administrators,
    /// `/donor` and `/user` for donors, and `/medical-center` for medical
    /// centers.
    #[must_use]
    pub fn standard() -> Self {
        let public: [&str; 10] = [
            "/",
            "/about",
            "/login",
            "/register",
            "/blood-request",
            "/blood-search",
            "/schedule",
            "/donation-registration",
            "/donation-information",
            "/contact",
        ];

        let mut table: Self = Self::new();
        for path in public {
            table = table.with_route(Route::new(path, Access::Public));
        }
        table
            .with_route(Route::new("/admin", Access::Roles(vec![Role::Admin])))
            .with_route(Route::new(
                "/staff",
                Access::Roles(vec![Role::Staff, Role::Admin]),
            ))
            .with_route(Route::new("/donor", Access::Roles(vec![Role::Donor])))
            .with_route(Route::new("/user", Access::Roles(vec![Role::Donor])))
            .with_route(Route::new(
                "/medical-center",
                Access::Roles(vec![Role::MedicalCenter]),
            ))
    }

    /// Adds a route, returning the extended table.
    #[must_use]
    pub fn with_route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// Finds the most specific route covering `path`.
    ///
    /// Query strings and trailing slashes are ignored.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<&Route> {
        let path: &str = normalize(path);
        self.routes
            .iter()
            .filter(|route| route.covers(path))
            .max_by_key(|route| route.path.len())
    }

    /// Resolves `path` and guards it against `session`.
    ///
    /// Returns `None` when no route covers the path.
    #[must_use]
    pub fn decide(&self, path: &str, session: &Session) -> Option<GuardDecision> {
        let route: &Route = self.resolve(path)?;
        Some(match &route.access {
            Access::Public => GuardDecision::Allow,
            Access::Roles(roles) => guard_session(session, roles, path),
        })
    }
}

fn normalize(path: &str) -> &str {
    let path: &str = path.split(['?', '#']).next().unwrap_or(path);
    let trimmed: &str = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}
