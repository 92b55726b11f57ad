//! Key-value storage and session bags for RigForge.
//!
//! Provides a simple, ergonomic store with type-safe JSON values, plus a
//! generic per-session bag manager on top of it. Store handles are
//! injected explicitly wherever persistence is needed.
//!
//! # Example
//!
//! ```
//! use rig_store::Store;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Widget {
//!     name: String,
//! }
//!
//! let store = Store::open("widgets");
//! store.set("w:1", &Widget { name: "gear".into() }).unwrap();
//!
//! let widget: Option<Widget> = store.get("w:1").unwrap();
//! assert!(widget.is_some());
//! ```

mod error;
mod kv;
mod session;

pub use error::StoreError;
pub use kv::Store;
pub use session::{Session, SessionId};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{store_key, Session, SessionId, Store, StoreError};
}
