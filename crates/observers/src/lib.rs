//! Reusable observers for Pluma solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across solvers emitting grid-based events.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasGrid`], [`HasPass`])
//! - [`PassHistory`]: records how many points survive each pass
//!
//! [`Observer`]: pluma_core::Observer
//! [`HasGrid`]: traits::HasGrid
//! [`HasPass`]: traits::HasPass

pub mod traits;

mod history;

pub use history::PassHistory;
