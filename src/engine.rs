// Engine - the browser-driver seam
//
// Everything that actually touches a browser happens behind this trait.
// The page facade only sequences calls against it; concrete drivers
// (WebDriver, CDP, an in-process fake) live outside this crate.

use crate::error::Result;
use async_trait::async_trait;

/// The injected browser-automation engine a [`Page`](crate::Page) drives.
///
/// One engine instance corresponds to one browser session. Window-addressed
/// operations (`switch_to_window`, `close_window`) act on the session's
/// focus model: the engine tracks a currently focused window, and
/// state queries (`title`, `current_url`, `page_source`) answer for that
/// window.
///
/// All methods are blocking from the caller's point of view: the facade
/// awaits each call to completion before issuing the next one.
#[async_trait]
pub trait Engine: Send + Sync {
    /// Navigates the focused window to `url`.
    async fn open_url(&self, url: &str) -> Result<()>;

    /// Measures the browser toolbar height for the focused window.
    ///
    /// Engines use this after navigation to calibrate screen-coordinate
    /// input. Fails with [`Error::UnhandledDialog`](crate::Error::UnhandledDialog)
    /// when a native dialog is blocking the page.
    async fn compute_toolbar_height(&self) -> Result<i32>;

    /// Dismisses the currently active native dialog.
    async fn dismiss_alert(&self) -> Result<()>;

    /// Closes the focused window or tab.
    async fn close(&self) -> Result<()>;

    /// URL the focused window is currently at.
    async fn current_url(&self) -> Result<String>;

    /// Full source of the document in the focused window.
    async fn page_source(&self) -> Result<String>;

    /// Title of the document in the focused window.
    async fn title(&self) -> Result<String>;

    /// Handle of the focused window.
    async fn window_handle(&self) -> Result<String>;

    /// Handles of all open windows, in driver-reported order.
    ///
    /// The list is a snapshot; handles may go stale as windows close.
    async fn window_handles(&self) -> Result<Vec<String>>;

    /// Moves focus to the window identified by `handle`.
    async fn switch_to_window(&self, handle: &str) -> Result<()>;

    /// Closes the focused window, leaving focus unassigned until the next
    /// `switch_to_window`.
    async fn close_window(&self) -> Result<()>;

    // Raw input primitives, consumed by the Mouse and Keyboard wrappers.
    // Coordinates are CSS pixels relative to the viewport's top-left corner.

    /// Dispatches a `mousemove` to viewport coordinates.
    async fn mouse_move(&self, x: i32, y: i32) -> Result<()>;

    /// Clicks at viewport coordinates.
    async fn mouse_click(&self, x: i32, y: i32) -> Result<()>;

    /// Double-clicks at viewport coordinates.
    async fn mouse_dblclick(&self, x: i32, y: i32) -> Result<()>;

    /// Executes a complete key press (down + up) for a named key.
    async fn keyboard_press(&self, key: &str) -> Result<()>;

    /// Types `text` character by character, dispatching key events.
    async fn keyboard_type(&self, text: &str) -> Result<()>;

    /// Inserts `text` directly, without per-character key events.
    async fn keyboard_insert_text(&self, text: &str) -> Result<()>;
}
