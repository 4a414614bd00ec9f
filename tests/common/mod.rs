//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_service;

use async_trait::async_trait;
use linksnap::shorten::{ShortenError, ShortenResult, Shortener};
use linksnap::ui::app::{App, UiCommand};
use std::collections::VecDeque;
use std::net::TcpListener;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::{mpsc, Mutex};

pub const TOAST_DURATION: Duration = Duration::from_secs(6);

/// Find a port nothing is listening on.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to a temporary `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// App wired to a command channel the test can inspect.
pub fn app_with_channel() -> (App, mpsc::Receiver<UiCommand>) {
    let (tx, rx) = mpsc::channel(4);
    let mut app = App::new(TOAST_DURATION);
    app.set_command_sender(tx);
    (app, rx)
}

/// Type `text` into the app's field.
pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.field_mut().insert_char(ch);
    }
}

/// Scripted [`Shortener`] recording every URL it was asked about.
pub struct FakeShortener {
    calls: Mutex<Vec<String>>,
    outcomes: Mutex<VecDeque<Result<ShortenResult, ShortenError>>>,
}

impl FakeShortener {
    pub fn new(outcomes: Vec<Result<ShortenResult, ShortenError>>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            outcomes: Mutex::new(outcomes.into()),
        }
    }

    pub fn resolving(short_url: &str) -> Self {
        Self::new(vec![Ok(ShortenResult {
            short_url: short_url.to_string(),
        })])
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl Shortener for FakeShortener {
    async fn shorten(&self, original_url: &str) -> Result<ShortenResult, ShortenError> {
        self.calls.lock().await.push(original_url.to_string());
        self.outcomes
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| {
                Err(ShortenError::Service {
                    status: 500,
                    message: None,
                })
            })
    }
}

/// [`Shortener`] whose calls never complete.
pub struct StalledShortener {
    calls: Mutex<Vec<String>>,
}

impl StalledShortener {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl Shortener for StalledShortener {
    async fn shorten(&self, original_url: &str) -> Result<ShortenResult, ShortenError> {
        self.calls.lock().await.push(original_url.to_string());
        std::future::pending::<Result<ShortenResult, ShortenError>>().await
    }
}
