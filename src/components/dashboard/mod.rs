//! Author collaboration dashboard.
//!
//! Fetches precomputed collaboration statistics from the backend and renders
//! them as summary cards, Chart.js charts and ranked lists, with an author
//! search that can be followed collaborator by collaborator:
//! - Statistics reload whenever the country filter changes
//! - Country charts are omitted while a country filter is active
//! - Live charts are owned by a registry and disposed before every re-render
//! - Stale responses of superseded requests are discarded
//!
//! # Example
//!
//! ```ignore
//! use collab_dashboard::{CollaborationDashboard, DashboardConfig};
//!
//! view! { <CollaborationDashboard config=DashboardConfig::default() /> }
//! ```

pub mod binding;
pub mod charts;
mod component;
mod controller;
pub mod format;
pub mod markup;
pub mod registry;
mod render;
pub mod search;
mod sequence;
pub mod theme;
pub mod types;

pub use charts::ChartSlot;
pub use component::CollaborationDashboard;
pub use controller::DashboardController;
pub use registry::{ChartBackend, ChartRegistry};
pub use render::render_statistics;
pub use sequence::{RequestSequencer, RequestTicket};
pub use theme::ChartTheme;
pub use types::{FilterOptions, SearchResponse, StatisticsPayload};
