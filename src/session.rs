//! The session pointer: the wallet the current browser is working with.
//!
//! The pointer is kept in a private (encrypted) cookie so it survives page reloads, and is
//! only written or cleared by explicit user actions.

use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, SameSite},
};
use time::{Duration, OffsetDateTime};

use crate::api::WalletId;

pub(crate) const COOKIE_WALLET_ID: &str = "wallet_id";

/// Read, write and clear the identifier of the active wallet.
///
/// Writes consume and return the store so cookie jars can be handed back to axum as part of the
/// response.
pub trait SessionStore: Sized {
    /// The active wallet, if one has been set up in this session.
    fn wallet_id(&self) -> Option<WalletId>;

    /// Make `wallet_id` the active wallet.
    fn remember(self, wallet_id: &WalletId) -> Self;

    /// Forget the active wallet.
    fn forget(self) -> Self;
}

impl SessionStore for PrivateCookieJar {
    fn wallet_id(&self) -> Option<WalletId> {
        self.get(COOKIE_WALLET_ID)
            .map(|cookie| cookie.value_trimmed().to_owned())
            .filter(|id| !id.is_empty())
            .map(WalletId::new)
    }

    fn remember(self, wallet_id: &WalletId) -> Self {
        self.add(
            Cookie::build((COOKIE_WALLET_ID, wallet_id.as_str().to_owned()))
                .path("/")
                .permanent()
                .http_only(true)
                .same_site(SameSite::Strict)
                .secure(true),
        )
    }

    /// Set the cookie to an empty value and set its max age to zero, which deletes the cookie
    /// on the client side.
    fn forget(self) -> Self {
        self.add(
            Cookie::build((COOKIE_WALLET_ID, ""))
                .path("/")
                .expires(OffsetDateTime::UNIX_EPOCH)
                .max_age(Duration::ZERO)
                .http_only(true)
                .same_site(SameSite::Strict)
                .secure(true),
        )
    }
}

/// A session store that lives in memory, for callers without a browser.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemorySession {
    wallet_id: Option<WalletId>,
}

impl MemorySession {
    /// A session that already points at `wallet_id`.
    pub fn with_wallet(wallet_id: WalletId) -> Self {
        Self {
            wallet_id: Some(wallet_id),
        }
    }
}

impl SessionStore for MemorySession {
    fn wallet_id(&self) -> Option<WalletId> {
        self.wallet_id.clone()
    }

    fn remember(self, wallet_id: &WalletId) -> Self {
        Self {
            wallet_id: Some(wallet_id.clone()),
        }
    }

    fn forget(self) -> Self {
        Self { wallet_id: None }
    }
}

#[cfg(test)]
mod tests {
    use axum_extra::extract::{PrivateCookieJar, cookie::Key};
    use time::Duration;

    use crate::api::WalletId;

    use super::{COOKIE_WALLET_ID, MemorySession, SessionStore};

    #[test]
    fn empty_jar_has_no_wallet() {
        let jar = PrivateCookieJar::new(Key::generate());

        assert_eq!(jar.wallet_id(), None);
    }

    #[test]
    fn jar_remembers_wallet() {
        let jar = PrivateCookieJar::new(Key::generate());

        let jar = jar.remember(&WalletId::new("w1"));

        assert_eq!(jar.wallet_id(), Some(WalletId::new("w1")));
        let cookie = jar.get(COOKIE_WALLET_ID).unwrap();
        assert_eq!(cookie.http_only(), Some(true));
        assert!(cookie.max_age().is_some_and(|age| age > Duration::days(365)));
    }

    #[test]
    fn jar_forgets_wallet() {
        let jar = PrivateCookieJar::new(Key::generate()).remember(&WalletId::new("w1"));

        let jar = jar.forget();

        assert_eq!(jar.wallet_id(), None);
        let cookie = jar.get(COOKIE_WALLET_ID).unwrap();
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }

    #[test]
    fn memory_session_round_trip() {
        let session = MemorySession::default();
        assert_eq!(session.wallet_id(), None);

        let session = session.remember(&WalletId::new("w1"));
        assert_eq!(session.wallet_id(), Some(WalletId::new("w1")));

        let session = session.forget();
        assert_eq!(session.wallet_id(), None);
    }
}
