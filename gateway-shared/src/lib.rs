#![cfg_attr(not(test), forbid(unsafe_code))]
#![deny(warnings, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Shared building blocks for the gateway admin console.
//!
//! Everything in here is plain Rust so it can be exercised natively: the wire
//! models exchanged with the proxy, the router settings editor, fallback table
//! logic, operator notifications and the load/save workflow behind the
//! [`service::RouterSettingsService`] seam.

pub mod editor;
pub mod explanations;
pub mod fallbacks;
pub mod models;
pub mod notification;
pub mod service;

pub use editor::{SettingRow, SettingsEditor, render_value};
pub use fallbacks::{FallbackChange, FallbackEntry, FallbackRow, FallbackValidationError};
pub use notification::{Notification, NotificationKind};
pub use service::RouterSettingsService;
