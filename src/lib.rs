//! collab-dashboard: browser dashboard for author collaboration statistics.
//!
//! This crate provides a WASM front end that fetches precomputed statistics
//! from the backend API and renders them as summary cards, charts, and an
//! author search that can be followed from collaborator to collaborator.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod api;
pub mod components;
pub mod config;
pub mod error;

pub use components::dashboard::{CollaborationDashboard, StatisticsPayload};
pub use config::DashboardConfig;
pub use error::DashboardError;

/// Id of the inline JSON block carrying [`DashboardConfig`].
pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("collab-dashboard: logging initialized");
}

/// Load configuration from a script element with id="dashboard-config".
/// Expected format: JSON with { api_base, request_timeout_ms }, all optional.
fn load_config() -> Option<DashboardConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match DashboardConfig::from_json(&json_text) {
		Ok(config) => {
			info!("collab-dashboard: loaded configuration");
			Some(config)
		}
		Err(e) => {
			warn!("collab-dashboard: failed to parse configuration: {}", e);
			None
		}
	}
}

/// Main application component.
/// Reads configuration from the DOM and mounts the dashboard.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Author Collaboration Dashboard" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<CollaborationDashboard config=config />
	}
}
