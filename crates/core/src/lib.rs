//! Client-side orchestration for a remote face-classification service.
//!
//! The service holds two image collections — reference photos of known
//! people and an unclassified dataset — plus the grouped output of its
//! last classification run. This crate keeps a client's displayed state
//! consistent with that server state across uploads, job runs, failures
//! and resets:
//!
//! - [`catalog`] — read side: collection listings and result fetches
//! - [`transfer`] — write side: multipart image uploads
//! - [`jobs`] — job trigger and destructive reset
//! - [`orchestration`] — the session state machine tying it together
//! - [`shared`] — identifiers, endpoints, asset URL conventions

pub mod catalog;
pub mod jobs;
pub mod orchestration;
pub mod shared;
pub mod transfer;
