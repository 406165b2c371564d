#![forbid(unsafe_code)]

//! Core primitives for folio: cell-grid geometry, canonical input events,
//! terminal session lifecycle, and easing curves.

pub mod easing;
pub mod event;
pub mod geometry;
pub mod session;
