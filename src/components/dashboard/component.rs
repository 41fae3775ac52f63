//! Leptos component rendering the dashboard shell.
//!
//! The component emits the static page regions, then builds a
//! [`DashboardController`] in an effect once they are mounted. Events are
//! routed to the controller; clicks inside the content and results regions
//! are delegated through the nearest `[data-author-id]` ancestor, since those
//! regions are filled with generated markup.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::error;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent, MouseEvent};

use super::binding::{ViewBinding, ids};
use super::controller::DashboardController;
use super::markup::AUTHOR_ID_ATTR;
use crate::config::DashboardConfig;

type ControllerSlot = Rc<RefCell<Option<Rc<DashboardController>>>>;

/// Runs `f` with the controller once it exists. Events before mount are dropped.
fn with_controller(slot: &ControllerSlot, f: impl FnOnce(&Rc<DashboardController>)) {
	let controller = slot.borrow().clone();
	if let Some(controller) = controller {
		f(&controller);
	}
}

/// Author id of the clicked row, if the click landed inside one.
fn clicked_author_id(ev: &MouseEvent) -> Option<String> {
	let target: Element = ev.target()?.dyn_into().ok()?;
	let row = target.closest(&format!("[{AUTHOR_ID_ATTR}]")).ok()??;
	row.get_attribute(AUTHOR_ID_ATTR)
}

/// The collaboration dashboard: loading overlay, filter and search controls,
/// search results, and the statistics content region.
#[component]
pub fn CollaborationDashboard(
	/// Backend location and request timeout.
	config: DashboardConfig,
) -> impl IntoView {
	let controller: ControllerSlot = Rc::new(RefCell::new(None));
	let controller_init = controller.clone();

	Effect::new(move |_| {
		if controller_init.borrow().is_some() {
			return;
		}
		let Some(document) = web_sys::window().and_then(|w| w.document()) else {
			error!("dashboard: no document available");
			return;
		};
		match ViewBinding::from_document(&document) {
			Ok(view) => {
				let dashboard = Rc::new(DashboardController::new(view, &config, document));
				dashboard.bootstrap();
				*controller_init.borrow_mut() = Some(dashboard);
			}
			Err(err) => error!("dashboard: cannot bind page regions: {}", err),
		}
	});

	let controller_filter = controller.clone();
	let on_filter_change = move |_: Event| {
		with_controller(&controller_filter, |c| c.reload_statistics());
	};

	let controller_click = controller.clone();
	let on_search_click = move |_: MouseEvent| {
		with_controller(&controller_click, |c| c.perform_search());
	};

	let controller_key = controller.clone();
	let on_search_keypress = move |ev: KeyboardEvent| {
		if ev.key() == "Enter" {
			with_controller(&controller_key, |c| c.perform_search());
		}
	};

	let controller_results = controller.clone();
	let on_results_click = move |ev: MouseEvent| {
		if let Some(id) = clicked_author_id(&ev) {
			with_controller(&controller_results, |c| c.search_author_by_id(&id));
		}
	};

	let controller_content = controller;
	let on_content_click = move |ev: MouseEvent| {
		if let Some(id) = clicked_author_id(&ev) {
			with_controller(&controller_content, |c| c.search_author_by_id(&id));
		}
	};

	view! {
		<div id={ids::LOADING_OVERLAY} class="loading-overlay">
			<div class="loading-spinner"></div>
			<div class="loading-text">"Loading collaboration data..."</div>
		</div>

		<div id={ids::MAIN_CONTAINER} class="container" style="display: none;">
			<header class="header">
				<h1>"Author Collaboration Network"</h1>
				<p class="subtitle">"Explore who publishes with whom, by country and over time."</p>
			</header>

			<div class="controls">
				<select id={ids::COUNTRY_FILTER} class="filter-select" on:change=on_filter_change>
					<option value="">"All Countries"</option>
				</select>
				<div class="search-box">
					<input
						id={ids::SEARCH_INPUT}
						class="search-input"
						type="text"
						placeholder="Search by author ID or name"
						on:keypress=on_search_keypress
					/>
					<button id={ids::SEARCH_BUTTON} class="search-button" on:click=on_search_click>
						"Search"
					</button>
				</div>
			</div>

			<div id={ids::SEARCH_RESULTS} class="search-results" style="display: none;" on:click=on_results_click></div>
			<div id={ids::CONTENT} on:click=on_content_click></div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn events_before_mount_are_dropped() {
		let slot: ControllerSlot = Rc::new(RefCell::new(None));
		let mut reached = false;
		with_controller(&slot, |_| reached = true);
		assert!(!reached);
	}
}
