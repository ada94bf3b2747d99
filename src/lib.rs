//! autopage: page-object facade for browser UI test automation
//!
//! This crate models logical web pages for UI test suites. A [`Page`]
//! orchestrates an injected browser [`Engine`]: it resolves placeholder
//! tokens in its configured URL, navigates, manages windows, and holds a
//! page-scoped key/value store. The engine itself — WebDriver, CDP, or an
//! in-process fake — is supplied by the caller; this crate never talks to a
//! browser directly.
//!
//! # Example
//!
//! ```ignore
//! use autopage::{MapData, Page};
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! # async fn demo(engine: Arc<dyn autopage::Engine>) -> autopage::Result<()> {
//! // A "system" provider resolves environment-level placeholders before
//! // per-page data substitution runs.
//! let mut hosts = HashMap::new();
//! hosts.insert("https://${host}/login".to_string(),
//!              "https://staging.app.test/login".to_string());
//!
//! let login = Page::builder(engine)
//!     .id("login")
//!     .url("https://${host}/login")
//!     .param_prefix("$")
//!     .dynamic_data(vec![Arc::new(MapData::new("system", hosts))])
//!     .build();
//!
//! login.open().await?;
//! assert_eq!(login.title().await?, "Sign in");
//!
//! // Opened a popup? Keep only windows titled like this page.
//! login.close_others().await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Call model
//!
//! Every engine-touching operation is an `async fn` awaited to completion
//! before the next call; the crate spawns no background work and has no
//! cancellation semantics of its own.

pub mod data;
pub mod engine;
pub mod error;
pub mod input;
pub mod page;
pub mod params;

pub use data::{DynamicData, MapData, SYSTEM_DATA_TYPE, first_of_type};
pub use engine::Engine;
pub use error::{Error, Result};
pub use input::{Keyboard, Mouse};
pub use page::{Page, PageBuilder};
