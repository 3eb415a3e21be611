//! Navigation guard.
//!
//! Authentication is re-read from the session store on every check, never
//! from a cached flag.

use crate::route::AppRoute;
use crate::session::{KeyValueStore, SessionStore};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect(AppRoute),
}

/// Guard rules, in order:
/// 1. protected destination without a session -> login;
/// 2. login/register with a session -> back to where the user came from
///    (home when there is no usable previous location);
/// 3. otherwise proceed.
pub fn decide(to: AppRoute, from: Option<AppRoute>, is_authenticated: bool) -> Navigation {
    if to.requires_auth() && !is_authenticated {
        return Navigation::Redirect(AppRoute::auth_failure_redirect());
    }
    if is_authenticated && to.should_redirect_when_authenticated() {
        let back = from
            .filter(|r| !r.should_redirect_when_authenticated())
            .unwrap_or_default();
        return Navigation::Redirect(back);
    }
    Navigation::Proceed
}

#[derive(Clone, Copy)]
pub struct RouteGuard<S> {
    session: SessionStore<S>,
}

impl<S: KeyValueStore> RouteGuard<S> {
    pub fn new(session: SessionStore<S>) -> Self {
        Self { session }
    }

    pub fn check(&self, to: AppRoute, from: Option<AppRoute>) -> Navigation {
        let decision = decide(to, from, self.session.is_authenticated());
        debug!(%to, ?from, ?decision, "route guard");
        decision
    }

    /// The route actually shown for a navigation request.
    pub fn resolve(&self, to: AppRoute, from: Option<AppRoute>) -> AppRoute {
        match self.check(to, from) {
            Navigation::Proceed => to,
            Navigation::Redirect(target) => target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStore;

    fn guard() -> (MemoryStore, RouteGuard<MemoryStore>) {
        let store = MemoryStore::new();
        let guard = RouteGuard::new(SessionStore::new(store.clone()));
        (store, guard)
    }

    #[test]
    fn protected_route_without_session_goes_to_login() {
        let (_, guard) = guard();
        assert_eq!(
            guard.check(AppRoute::Admin, Some(AppRoute::Games)),
            Navigation::Redirect(AppRoute::Login)
        );
    }

    #[test]
    fn session_bounces_off_login_and_register() {
        let (store, guard) = guard();
        store.set("token", "abc");

        assert_eq!(
            guard.check(AppRoute::Login, Some(AppRoute::Admin)),
            Navigation::Redirect(AppRoute::Admin)
        );
        assert_eq!(
            guard.check(AppRoute::Register, Some(AppRoute::Games)),
            Navigation::Redirect(AppRoute::Games)
        );
        assert_eq!(guard.resolve(AppRoute::Login, None), AppRoute::Games);
        assert_eq!(
            guard.resolve(AppRoute::Login, Some(AppRoute::Register)),
            AppRoute::Games
        );
    }

    #[test]
    fn everything_else_proceeds() {
        let (store, guard) = guard();
        assert_eq!(guard.check(AppRoute::Games, None), Navigation::Proceed);
        assert_eq!(guard.check(AppRoute::Login, None), Navigation::Proceed);

        store.set("token", "abc");
        assert_eq!(guard.check(AppRoute::Admin, None), Navigation::Proceed);
        assert_eq!(guard.check(AppRoute::NotFound, None), Navigation::Proceed);
    }

    #[test]
    fn stale_flag_does_not_authenticate() {
        let (store, guard) = guard();
        store.set("isLoggedIn", "true");
        assert_eq!(
            guard.check(AppRoute::Admin, None),
            Navigation::Redirect(AppRoute::Login)
        );
    }

    #[test]
    fn session_is_reread_every_navigation() {
        let (store, guard) = guard();
        store.set("token", "abc");
        assert_eq!(guard.check(AppRoute::Admin, None), Navigation::Proceed);

        store.delete("token");
        assert_eq!(
            guard.check(AppRoute::Admin, None),
            Navigation::Redirect(AppRoute::Login)
        );
    }
}
