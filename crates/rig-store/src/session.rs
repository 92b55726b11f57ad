//! Per-user session bags over the key-value store.

use crate::{Store, StoreError};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// A unique session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Create a session ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new cryptographically secure session ID.
    pub fn generate() -> Self {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
        use rand::Rng;

        let bytes: [u8; 18] = rand::thread_rng().gen();
        Self(format!("sess_{}", URL_SAFE_NO_PAD.encode(bytes)))
    }

    /// Get the session ID as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Manager for one kind of per-session value.
///
/// Generic over the bag type `T`; each session id maps to at most one
/// bag, stored under `"<namespace>:<session-id>"`. Two requests updating
/// the same session concurrently are last-write-wins at the store — the
/// wizard's single-user flow accepts that rather than imposing a locking
/// discipline.
///
/// # Example
///
/// ```
/// use rig_store::{Session, SessionId, Store};
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Serialize, Deserialize, Default, Clone)]
/// struct Prefs {
///     theme: Option<String>,
/// }
///
/// let sessions = Session::<Prefs>::new(Store::open("sessions"), "prefs");
/// let id = SessionId::generate();
///
/// let prefs = sessions.update(&id, |p| {
///     p.theme = Some("dark".to_string());
/// }).unwrap();
/// assert_eq!(prefs.theme.as_deref(), Some("dark"));
/// ```
#[derive(Debug, Clone)]
pub struct Session<T> {
    store: Store,
    namespace: String,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Session<T>
where
    T: Serialize + DeserializeOwned + Default + Clone,
{
    /// Create a session manager over a store handle, namespacing keys
    /// with the given prefix.
    pub fn new(store: Store, namespace: impl Into<String>) -> Self {
        Self {
            store,
            namespace: namespace.into(),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Get session data if it exists.
    pub fn get(&self, id: &SessionId) -> Result<Option<T>, StoreError> {
        self.store.get(&self.session_key(id))
    }

    /// Get session data, creating and persisting the default when absent.
    pub fn get_or_create(&self, id: &SessionId) -> Result<T, StoreError> {
        let key = self.session_key(id);
        match self.store.get::<T>(&key)? {
            Some(data) => Ok(data),
            None => {
                let data = T::default();
                self.store.set(&key, &data)?;
                Ok(data)
            }
        }
    }

    /// Set session data unconditionally.
    pub fn set(&self, id: &SessionId, data: &T) -> Result<(), StoreError> {
        self.store.set(&self.session_key(id), data)
    }

    /// Update session data with a closure and persist the result.
    ///
    /// The closure receives the current data (or the default when the
    /// session is new) and mutates it in place; the updated value is
    /// written back and returned.
    pub fn update<F>(&self, id: &SessionId, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut T),
    {
        let key = self.session_key(id);
        let mut data = self.store.get::<T>(&key)?.unwrap_or_default();
        f(&mut data);
        self.store.set(&key, &data)?;
        Ok(data)
    }

    /// Delete a session bag. Returns whether it existed.
    pub fn delete(&self, id: &SessionId) -> Result<bool, StoreError> {
        self.store.delete(&self.session_key(id))
    }

    /// Check if a session bag exists.
    pub fn exists(&self, id: &SessionId) -> Result<bool, StoreError> {
        self.store.exists(&self.session_key(id))
    }

    fn session_key(&self, id: &SessionId) -> String {
        format!("{}:{}", self.namespace, id)
    }
}
