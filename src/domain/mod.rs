//! Domain layer: entities, collaborator traits, and the click worker.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - External collaborator trait definitions
//! - [`click_event`] - Click tracking event model
//! - [`click_worker`] - Asynchronous click processing worker
//!
//! # Click processing flow
//!
//! 1. The redirect resolver serves a destination
//! 2. A [`click_event::ClickEvent`] is built from request metadata and sent
//!    to a bounded channel without blocking
//! 3. [`click_worker::run_click_worker`] drains the channel and writes each
//!    event to the [`repositories::AnalyticsSink`]
//! 4. Any failure along the way is logged and dropped, never surfaced

pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod repositories;
