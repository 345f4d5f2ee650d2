//! Core application logic: countdown state, animation timing, event handling,
//! and action dispatch.

pub mod action;
pub mod animation;
pub mod event;
pub mod handler;
pub mod state;
