//! Data Transfer Objects (DTOs) for the Matsuri server.
//!
//! DTOs are organized by protocol:
//! - `websocket`: WebSocket event DTOs (`{"event": ..., "data": ...}` frames)
//! - `http`: HTTP API response DTOs

pub mod conversion;
pub mod http;
pub mod websocket;
