//! Session Authentication Service
//!
//! Holds the single login flag for the lifetime of the page load. There is
//! no identity and no credential check yet; the login form feeds an
//! `Authenticator` capability whose only current implementation accepts
//! everything, so a real check can be wired in without touching the router.

use std::sync::Arc;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Credentials captured by the login form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Capability seam for credential verification.
pub trait Authenticator {
    fn authenticate(&self, credentials: &Credentials) -> bool;
}

/// Accepts any credentials.
pub struct AcceptAll;

impl Authenticator for AcceptAll {
    fn authenticate(&self, _credentials: &Credentials) -> bool {
        true
    }
}

/// What the router should do with a request for a protected page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    RedirectToLogin,
    RedirectToDashboard,
}

/// Decision for any page behind the login gate.
pub fn protected_route_decision(logged_in: bool) -> RouteDecision {
    if logged_in {
        RouteDecision::Render
    } else {
        RouteDecision::RedirectToLogin
    }
}

/// Decision for the login route itself. A logged-in session has no business
/// on the login form and lands on the default dashboard instead.
pub fn login_route_decision(logged_in: bool) -> RouteDecision {
    if logged_in {
        RouteDecision::RedirectToDashboard
    } else {
        RouteDecision::Render
    }
}

#[derive(Clone)]
pub struct AuthState {
    pub logged_in: RwSignal<bool>,
    authenticator: Arc<dyn Authenticator + Send + Sync>,
}

impl AuthState {
    pub fn new() -> Self {
        Self::with_authenticator(Arc::new(AcceptAll))
    }

    pub fn with_authenticator(authenticator: Arc<dyn Authenticator + Send + Sync>) -> Self {
        Self {
            logged_in: RwSignal::new(false),
            authenticator,
        }
    }

    /// Runs the credentials through the authenticator and flips the session
    /// flag on success. There is no logout transition.
    pub fn login(&self, credentials: &Credentials) -> bool {
        let accepted = self.authenticator.authenticate(credentials);
        if accepted {
            self.logged_in.set(true);
        } else {
            log::warn!("login rejected for user {:?}", credentials.username);
        }
        accepted
    }
}

pub fn provide_auth_state() {
    provide_context(AuthState::new());
}

pub fn use_auth_state() -> AuthState {
    expect_context::<AuthState>()
}
