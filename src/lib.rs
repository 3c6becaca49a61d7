//! stima — a small self-hosted appraisal console for collectible putters.
//!
//! The core is the report formatter in [`domain::report`]: raw research text
//! from the upstream model in, sectioned HTML out. Everything else is the
//! plumbing that feeds it — configuration, the upstream messages client, the
//! HTTP surface, and the server-rendered console page.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
