//! # showcase-view — Server-Side Renderer
//!
//! Stateless projections of a [`showcase_core::ProjectStore`] snapshot into
//! HTML. Nothing here mutates the store; every function takes the data it
//! renders by reference and returns a `String`.
//!
//! ## Views
//!
//! - [`grid`]: project cards with the per-session vote button.
//! - [`leaderboard`]: ranked rows, badge tiers, progress bars.
//! - [`stats`]: header badges and results stat cards.
//! - [`upload`]: the submission form.
//! - [`feedback`]: toasts, confirmation modal, loading overlay.
//! - [`page`]: full documents for the three pages.
//!
//! ## Client-Side Timers
//!
//! Toast and modal auto-dismiss and the leaderboard count-up run in the
//! browser. Their intervals are constants here ([`feedback`], [`counter`])
//! and reach the script through `data-*` attributes.
//!
//! ## Escaping
//!
//! Every user-supplied string passes through [`escape_html`] before it is
//! written into element content or an attribute value.

pub mod assets;
pub mod counter;
pub mod escape;
pub mod feedback;
pub mod grid;
pub mod leaderboard;
pub mod navigation;
pub mod page;
pub mod stats;
pub mod upload;

pub use escape::escape_html;
pub use feedback::{Toast, ToastKind};
pub use grid::render_grid;
pub use leaderboard::{leaderboard_rows, render_leaderboard, LeaderboardRow, RankTier};
pub use navigation::{Navigator, Page, Refresh, UnknownPage};
pub use page::{render_home, render_results, render_upload, Chrome};
pub use stats::{render_header_stats, render_results_stats};
pub use upload::render_upload_form;
