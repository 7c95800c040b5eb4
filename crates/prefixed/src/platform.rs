//! Hosts the resolver can probe.
//!
//! The browser host lives in the `prefixed-web` crate so this crate stays
//! free of `web-sys`.

pub mod memory;
