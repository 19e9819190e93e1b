//! Client-side report layer for the SEO audit service.
//!
//! The remote service crawls and scores a site; this crate turns its raw
//! audit payload into a multi-view report: session state, score bands,
//! per-view derivations, and export orchestration. Rendering is plain text
//! so everything stays testable without a UI.

pub mod controller;
pub mod domain;
pub mod error;
pub mod lifecycle;
pub mod render;
pub mod report;
pub mod service;
pub mod session;
pub mod test_utils;
