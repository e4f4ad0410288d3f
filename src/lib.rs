//! # Flagdex
//!
//! A terminal country browser: every country as a card with its flag and
//! name, filtered live by a search box.
//!
//! ## Features
//! - Country list fetched once from a configurable endpoint
//! - Case-insensitive substring search
//! - Per-card flag loading with a placeholder fallback
//! - Keyboard navigation over a responsive grid
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod config;
pub mod constants;
pub mod error;
pub mod filter;
pub mod models;
pub mod view;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use config::Config;
pub use error::LoadError;
pub use filter::filter_countries;
pub use models::{CountryRecord, FlagStatus, LoadState};
pub use view::{build_view, Card, View};
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{AppState, AppActor};
pub use network::NetworkActor;
