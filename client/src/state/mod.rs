//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is the reactive snapshot pages render from; `session` owns the
//! store behind it and is the only path that mutates it.

pub mod auth;
pub mod session;
