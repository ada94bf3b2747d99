// Page - the page-object facade
//
// Models one logical web page in a test suite: lifecycle operations,
// a page-scoped key/value store, and parameter translation before
// navigation. All browser control is delegated to the injected engine.

use crate::data::{self, DynamicData, SYSTEM_DATA_TYPE};
use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::input::{Keyboard, Mouse};
use crate::params;
use parking_lot::{Mutex, RwLock};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Page models one logical screen of the application under test.
///
/// A page does not own a browser: it orchestrates the injected [`Engine`],
/// holds a page-scoped key/value store, and resolves placeholder tokens in
/// its configured URL before navigating. It is not necessarily one-to-one
/// with a physical HTML document.
///
/// `Page` is `Clone`; clones share the same engine, data store, and
/// configuration. Mutation of the store is not coordinated across tasks —
/// test runners sharing one page across tasks must serialize access
/// themselves.
///
/// # Example
///
/// ```ignore
/// use autopage::Page;
/// use std::sync::Arc;
///
/// # async fn demo(engine: Arc<dyn autopage::Engine>) -> autopage::Result<()> {
/// let page = Page::builder(engine)
///     .id("user-profile")
///     .url("https://app.test/users/${user_id}")
///     .param_prefix("$")
///     .build();
///
/// page.put_data("user_id", "42")?;
/// page.open().await?;
/// assert_eq!(page.current_url().await?, "https://app.test/users/42");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Page {
    engine: Arc<dyn Engine>,
    /// Page identifier, unique within a suite
    id: Arc<RwLock<Option<String>>>,
    /// URL template this page navigates to
    url: Arc<RwLock<Option<String>>>,
    /// Name of the external data source this page is bound to
    data_source: Arc<RwLock<Option<String>>>,
    /// Marker for substitutable tokens in the URL template
    param_prefix: Arc<RwLock<String>>,
    /// Page-scoped key/value store
    data: Arc<Mutex<HashMap<String, Value>>>,
    /// Ordered provider list, consumed read-only during translation
    dynamic_data: Arc<Vec<Arc<dyn DynamicData>>>,
}

impl Page {
    /// Starts building a page over the given engine.
    pub fn builder(engine: Arc<dyn Engine>) -> PageBuilder {
        PageBuilder {
            engine,
            id: None,
            url: None,
            data_source: None,
            param_prefix: String::new(),
            dynamic_data: Vec::new(),
        }
    }

    /// Opens (navigates to) this page.
    ///
    /// The configured URL is parameter-translated first; navigation always
    /// receives the resolved URL, never the raw template. After navigation
    /// the engine recalibrates its toolbar height. If that calibration fails
    /// because a native dialog is blocking the page, the dialog is dismissed
    /// and the calibration retried exactly once; any other failure, and a
    /// failure of the retry itself, propagates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingUrl`] if no URL has been configured.
    pub async fn open(&self) -> Result<()> {
        let template = self.url.read().clone().ok_or(Error::MissingUrl)?;
        let url = self.param_translate(&template);

        tracing::debug!(url = %url, "opening page");
        self.engine.open_url(&url).await?;

        if let Err(err) = self.engine.compute_toolbar_height().await {
            match err {
                Error::UnhandledDialog { message } => {
                    tracing::warn!(%message, "dismissing dialog blocking toolbar calibration");
                    self.engine.dismiss_alert().await?;
                    self.engine.compute_toolbar_height().await?;
                }
                other => return Err(other),
            }
        }

        Ok(())
    }

    /// Closes the current window or tab.
    pub async fn close(&self) -> Result<()> {
        self.engine.close().await
    }

    /// Closes every window whose title differs from the current window's
    /// title, then restores focus to the current window.
    ///
    /// Matching is by exact title string equality, not handle identity:
    /// other windows that share the current title survive. Callers needing
    /// stronger guarantees should close windows by handle themselves.
    pub async fn close_others(&self) -> Result<()> {
        let current_title = self.engine.title().await?;
        let current_handle = self.engine.window_handle().await?;

        tracing::debug!(title = %current_title, "closing windows with other titles");
        for handle in self.engine.window_handles().await? {
            self.engine.switch_to_window(&handle).await?;
            if self.engine.title().await? != current_title {
                self.engine.close_window().await?;
            }
        }

        self.engine.switch_to_window(&current_handle).await
    }

    /// URL the browser is currently at, as reported by the engine.
    ///
    /// Contrast with [`Page::url`], the configured template.
    pub async fn current_url(&self) -> Result<String> {
        self.engine.current_url().await
    }

    /// Full source of the current document.
    pub async fn page_source(&self) -> Result<String> {
        self.engine.page_source().await
    }

    /// Title of the current document.
    pub async fn title(&self) -> Result<String> {
        self.engine.title().await
    }

    /// Resolves placeholder tokens in `value`.
    ///
    /// Two passes, in contractual order:
    ///
    /// 1. The first provider in the list tagged `"system"` transforms the
    ///    whole string. The scan stops at the first match — later system
    ///    providers are never applied.
    /// 2. Prefix-marked tokens (`<prefix>{key}`) in the result are replaced
    ///    from the page's data store.
    ///
    /// Pass 2 operates on the output of pass 1, so a system provider can
    /// rewrite tokens before the store sees them.
    pub fn param_translate(&self, value: &str) -> String {
        let mut result = value.to_string();
        if let Some(system) = data::first_of_type(&self.dynamic_data, SYSTEM_DATA_TYPE) {
            result = system.resolve(&result);
        }

        let data = self.data.lock();
        params::param_translate(&data, &self.param_prefix.read(), &result)
    }

    /// Stores a value in the page-scoped store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if `value` cannot be represented as JSON.
    pub fn put_data(&self, key: impl Into<String>, value: impl Serialize) -> Result<()> {
        let value = serde_json::to_value(value)?;
        self.data.lock().insert(key.into(), value);
        Ok(())
    }

    /// Merges all entries into the page-scoped store, overwriting existing
    /// keys.
    pub fn put_all_data(&self, entries: impl IntoIterator<Item = (String, Value)>) {
        self.data.lock().extend(entries);
    }

    /// Removes a key from the store, returning its value if present.
    pub fn remove_data(&self, key: &str) -> Option<Value> {
        self.data.lock().remove(key)
    }

    /// Whether the store holds a value for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.lock().contains_key(key)
    }

    /// Empties the page-scoped store.
    pub fn clear_data(&self) {
        self.data.lock().clear();
    }

    /// A copy-on-read snapshot of the store.
    pub fn data(&self) -> HashMap<String, Value> {
        self.data.lock().clone()
    }

    /// Low-level pointer control for this page's engine.
    pub fn mouse(&self) -> Mouse {
        Mouse::new(Arc::clone(&self.engine))
    }

    /// Low-level key control for this page's engine.
    pub fn keyboard(&self) -> Keyboard {
        Keyboard::new(Arc::clone(&self.engine))
    }

    /// Page identifier.
    pub fn id(&self) -> Option<String> {
        self.id.read().clone()
    }

    pub fn set_id(&self, id: impl Into<String>) {
        *self.id.write() = Some(id.into());
    }

    /// Configured URL template. See [`Page::current_url`] for the live URL.
    pub fn url(&self) -> Option<String> {
        self.url.read().clone()
    }

    pub fn set_url(&self, url: impl Into<String>) {
        *self.url.write() = Some(url.into());
    }

    /// Name of the external data source this page is bound to.
    pub fn data_source(&self) -> Option<String> {
        self.data_source.read().clone()
    }

    pub fn set_data_source(&self, data_source: impl Into<String>) {
        *self.data_source.write() = Some(data_source.into());
    }

    /// Marker for substitutable tokens in templates. Empty by default.
    pub fn param_prefix(&self) -> String {
        self.param_prefix.read().clone()
    }

    pub fn set_param_prefix(&self, prefix: impl Into<String>) {
        *self.param_prefix.write() = prefix.into();
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("id", &*self.id.read())
            .field("url", &*self.url.read())
            .field("data_source", &*self.data_source.read())
            .field("param_prefix", &*self.param_prefix.read())
            .field("data_keys", &self.data.lock().len())
            .field("dynamic_data", &self.dynamic_data.len())
            .finish()
    }
}

/// Builder for [`Page`].
///
/// Obtained from [`Page::builder`]; the engine is the only required
/// collaborator.
pub struct PageBuilder {
    engine: Arc<dyn Engine>,
    id: Option<String>,
    url: Option<String>,
    data_source: Option<String>,
    param_prefix: String,
    dynamic_data: Vec<Arc<dyn DynamicData>>,
}

impl PageBuilder {
    /// Sets the page identifier.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the URL template [`Page::open`] navigates to.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Names the external data source this page is bound to.
    pub fn data_source(mut self, data_source: impl Into<String>) -> Self {
        self.data_source = Some(data_source.into());
        self
    }

    /// Sets the substitution-token marker.
    pub fn param_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.param_prefix = prefix.into();
        self
    }

    /// Supplies the ordered dynamic-data provider list.
    ///
    /// Order matters: type-tag lookups during translation are
    /// first-match-wins.
    pub fn dynamic_data(mut self, providers: Vec<Arc<dyn DynamicData>>) -> Self {
        self.dynamic_data = providers;
        self
    }

    /// Builds the page.
    pub fn build(self) -> Page {
        Page {
            engine: self.engine,
            id: Arc::new(RwLock::new(self.id)),
            url: Arc::new(RwLock::new(self.url)),
            data_source: Arc::new(RwLock::new(self.data_source)),
            param_prefix: Arc::new(RwLock::new(self.param_prefix)),
            data: Arc::new(Mutex::new(HashMap::new())),
            dynamic_data: Arc::new(self.dynamic_data),
        }
    }
}
