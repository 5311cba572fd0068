//! Coach API - backend for a personal-training practice.
//!
//! Client profiles, scheduled sessions and weekly workout plans behind a
//! tenant-scoped persistence port, a single-administrator auth gate, and a
//! proxy to an OpenAI-compatible chat model.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
