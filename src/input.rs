// Mouse and Keyboard - low-level input control
//
// Thin wrappers over the engine's raw input primitives. Obtained from a
// page via `page.mouse()` / `page.keyboard()`.

use crate::engine::Engine;
use crate::error::Result;
use std::sync::Arc;

/// Mouse provides low-level pointer control.
///
/// Coordinates are CSS pixels relative to the viewport's top-left corner.
#[derive(Clone)]
pub struct Mouse {
    engine: Arc<dyn Engine>,
}

impl Mouse {
    /// Creates a new Mouse instance for the given engine
    pub(crate) fn new(engine: Arc<dyn Engine>) -> Self {
        Self { engine }
    }

    /// Dispatches a `mousemove` event.
    pub async fn move_to(&self, x: i32, y: i32) -> Result<()> {
        self.engine.mouse_move(x, y).await
    }

    /// Combines move, button-down, and button-up actions.
    pub async fn click(&self, x: i32, y: i32) -> Result<()> {
        self.engine.mouse_click(x, y).await
    }

    /// Performs two click sequences in succession.
    pub async fn dblclick(&self, x: i32, y: i32) -> Result<()> {
        self.engine.mouse_dblclick(x, y).await
    }
}

/// Keyboard provides low-level key control.
#[derive(Clone)]
pub struct Keyboard {
    engine: Arc<dyn Engine>,
}

impl Keyboard {
    /// Creates a new Keyboard instance for the given engine
    pub(crate) fn new(engine: Arc<dyn Engine>) -> Self {
        Self { engine }
    }

    /// Executes a complete key press (down + up sequence).
    pub async fn press(&self, key: &str) -> Result<()> {
        self.engine.keyboard_press(key).await
    }

    /// Sends key events for each character of `text`.
    pub async fn type_text(&self, text: &str) -> Result<()> {
        self.engine.keyboard_type(text).await
    }

    /// Inserts `text` directly, without dispatching per-character key events.
    pub async fn insert_text(&self, text: &str) -> Result<()> {
        self.engine.keyboard_insert_text(text).await
    }
}
