//! Core widget logic for Mugshot.
//!
//! This crate contains the profile-picture upload widget with ZERO web
//! dependencies. The network transport and the UI surfaces it touches are
//! trait seams injected by the caller.
//!
//! # Modules
//!
//! - `events` - File selection events (picker and drag-and-drop)
//! - `upload` - Upload widget, types, and errors

pub mod events;
pub mod upload;
