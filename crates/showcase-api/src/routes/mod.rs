//! # Route Modules
//!
//! - `pages`: server-rendered HTML pages (grid, upload, results) and the
//!   form commands behind them (submit, vote).
//! - `projects`: JSON API over the same store, used by scripted clients.

pub mod pages;
pub mod projects;
