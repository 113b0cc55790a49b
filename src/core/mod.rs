//! # Core Application Logic
//!
//! This module contains Art Space's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (artworks)   │
//!                    │  • NavigationState      │
//!                    │  • present() (view)     │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal. Pure.     │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: The `Catalog` of `Artwork`s, built once at startup
//! - [`navigation`]: `NavigationState`, the saturating 1-based position
//! - [`presenter`]: `present()`, position + catalog → what to draw
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod catalog;
pub mod config;
pub mod navigation;
pub mod presenter;
pub mod state;
