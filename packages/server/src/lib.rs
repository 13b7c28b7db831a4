//! Matsuri server library.
//!
//! A room relay and lottery coordinator: a central process holds transient
//! room state and a global lottery, and relays named events between a
//! "screen" display client and many "mobile" participant clients over
//! WebSocket connections.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
