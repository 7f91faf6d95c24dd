//! Browser localStorage backing for the session.
//!
//! Only the hydrated client has a `window`; during server rendering the
//! session is an empty in-memory store, so every private page renders its
//! loading shell until the browser takes over.

use std::sync::Arc;

use routine_client::{MemorySessionStore, SessionContext, SessionError, SessionStore};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, SessionError> {
    let window =
        web_sys::window().ok_or_else(|| SessionError::Unavailable("no window".into()))?;
    window
        .local_storage()
        .map_err(|e| SessionError::Unavailable(format!("{e:?}")))?
        .ok_or_else(|| SessionError::Unavailable("localStorage disabled".into()))
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage().ok()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| SessionError::Write {
                    key: key.to_owned(),
                    reason: format!("{e:?}"),
                })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(SessionError::Unavailable("not running in a browser".into()))
        }
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| SessionError::Write {
                    key: key.to_owned(),
                    reason: format!("{e:?}"),
                })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

/// Session for the current render target.
pub fn session_context() -> SessionContext {
    if cfg!(feature = "hydrate") {
        SessionContext::new(Arc::new(BrowserSessionStore))
    } else {
        SessionContext::new(Arc::new(MemorySessionStore::new()))
    }
}

/// Origin used to resolve a relative API base URL.
pub fn page_origin() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.location().origin().ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Some("http://localhost".to_owned())
    }
}
