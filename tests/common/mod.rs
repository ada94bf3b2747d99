//! Shared test support: a fully scripted in-memory engine.
//!
//! `MockEngine` records every call a page makes and lets tests script
//! toolbar-calibration failures, so lifecycle behavior can be verified
//! without a browser.

#![allow(dead_code)]

use async_trait::async_trait;
use autopage::{Engine, Error, Result};
use parking_lot::Mutex;
use std::collections::VecDeque;

/// One open browser window in the mock session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub handle: String,
    pub title: String,
}

#[derive(Default)]
struct State {
    navigations: Vec<String>,
    toolbar_script: VecDeque<Result<i32>>,
    toolbar_calls: usize,
    dismissed_alerts: usize,
    close_calls: usize,
    windows: Vec<Window>,
    focused: Option<String>,
    switches: Vec<String>,
    current_url: String,
    page_source: String,
    mouse_events: Vec<String>,
    key_events: Vec<String>,
}

pub struct MockEngine {
    state: Mutex<State>,
}

impl MockEngine {
    /// A session with a single focused window titled "Main".
    pub fn new() -> Self {
        Self::with_windows(&[("w1", "Main")])
    }

    /// A session with the given (handle, title) windows; the first one is
    /// focused.
    pub fn with_windows(windows: &[(&str, &str)]) -> Self {
        let windows: Vec<Window> = windows
            .iter()
            .map(|(handle, title)| Window {
                handle: handle.to_string(),
                title: title.to_string(),
            })
            .collect();
        let focused = windows.first().map(|w| w.handle.clone());

        Self {
            state: Mutex::new(State {
                windows,
                focused,
                page_source: "<html></html>".to_string(),
                ..State::default()
            }),
        }
    }

    /// Scripts the next `times` toolbar calibrations to fail with an
    /// unhandled-dialog condition. Unscripted calls succeed.
    pub fn fail_toolbar_with_dialog(&self, times: usize) {
        let mut state = self.state.lock();
        for _ in 0..times {
            state.toolbar_script.push_back(Err(Error::UnhandledDialog {
                message: "unexpected alert".to_string(),
            }));
        }
    }

    /// Scripts the next toolbar calibration to fail with `err`.
    pub fn fail_toolbar_with(&self, err: Error) {
        self.state.lock().toolbar_script.push_back(Err(err));
    }

    pub fn navigations(&self) -> Vec<String> {
        self.state.lock().navigations.clone()
    }

    pub fn toolbar_calls(&self) -> usize {
        self.state.lock().toolbar_calls
    }

    pub fn dismissed_alerts(&self) -> usize {
        self.state.lock().dismissed_alerts
    }

    pub fn close_calls(&self) -> usize {
        self.state.lock().close_calls
    }

    pub fn open_windows(&self) -> Vec<Window> {
        self.state.lock().windows.clone()
    }

    pub fn focused_handle(&self) -> Option<String> {
        self.state.lock().focused.clone()
    }

    pub fn switches(&self) -> Vec<String> {
        self.state.lock().switches.clone()
    }

    pub fn mouse_events(&self) -> Vec<String> {
        self.state.lock().mouse_events.clone()
    }

    pub fn key_events(&self) -> Vec<String> {
        self.state.lock().key_events.clone()
    }

    pub fn set_page_source(&self, source: &str) {
        self.state.lock().page_source = source.to_string();
    }
}

#[async_trait]
impl Engine for MockEngine {
    async fn open_url(&self, url: &str) -> Result<()> {
        let mut state = self.state.lock();
        state.navigations.push(url.to_string());
        state.current_url = url.to_string();
        Ok(())
    }

    async fn compute_toolbar_height(&self) -> Result<i32> {
        let mut state = self.state.lock();
        state.toolbar_calls += 1;
        state.toolbar_script.pop_front().unwrap_or(Ok(24))
    }

    async fn dismiss_alert(&self) -> Result<()> {
        self.state.lock().dismissed_alerts += 1;
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        let mut state = self.state.lock();
        state.close_calls += 1;
        if let Some(focused) = state.focused.take() {
            state.windows.retain(|w| w.handle != focused);
        }
        Ok(())
    }

    async fn current_url(&self) -> Result<String> {
        Ok(self.state.lock().current_url.clone())
    }

    async fn page_source(&self) -> Result<String> {
        Ok(self.state.lock().page_source.clone())
    }

    async fn title(&self) -> Result<String> {
        let state = self.state.lock();
        let focused = state
            .focused
            .as_ref()
            .ok_or_else(|| Error::Driver("no window focused".to_string()))?;
        state
            .windows
            .iter()
            .find(|w| &w.handle == focused)
            .map(|w| w.title.clone())
            .ok_or_else(|| Error::WindowNotFound(focused.clone()))
    }

    async fn window_handle(&self) -> Result<String> {
        self.state
            .lock()
            .focused
            .clone()
            .ok_or_else(|| Error::Driver("no window focused".to_string()))
    }

    async fn window_handles(&self) -> Result<Vec<String>> {
        Ok(self
            .state
            .lock()
            .windows
            .iter()
            .map(|w| w.handle.clone())
            .collect())
    }

    async fn switch_to_window(&self, handle: &str) -> Result<()> {
        let mut state = self.state.lock();
        if !state.windows.iter().any(|w| w.handle == handle) {
            return Err(Error::WindowNotFound(handle.to_string()));
        }
        state.focused = Some(handle.to_string());
        state.switches.push(handle.to_string());
        Ok(())
    }

    async fn close_window(&self) -> Result<()> {
        let mut state = self.state.lock();
        let focused = state
            .focused
            .take()
            .ok_or_else(|| Error::Driver("no window focused".to_string()))?;
        state.windows.retain(|w| w.handle != focused);
        Ok(())
    }

    async fn mouse_move(&self, x: i32, y: i32) -> Result<()> {
        self.state.lock().mouse_events.push(format!("move {x},{y}"));
        Ok(())
    }

    async fn mouse_click(&self, x: i32, y: i32) -> Result<()> {
        self.state
            .lock()
            .mouse_events
            .push(format!("click {x},{y}"));
        Ok(())
    }

    async fn mouse_dblclick(&self, x: i32, y: i32) -> Result<()> {
        self.state
            .lock()
            .mouse_events
            .push(format!("dblclick {x},{y}"));
        Ok(())
    }

    async fn keyboard_press(&self, key: &str) -> Result<()> {
        self.state.lock().key_events.push(format!("press {key}"));
        Ok(())
    }

    async fn keyboard_type(&self, text: &str) -> Result<()> {
        self.state.lock().key_events.push(format!("type {text}"));
        Ok(())
    }

    async fn keyboard_insert_text(&self, text: &str) -> Result<()> {
        self.state.lock().key_events.push(format!("insert {text}"));
        Ok(())
    }
}

/// Installs a fmt subscriber once per test binary; repeat calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .with_test_writer()
        .try_init();
}
