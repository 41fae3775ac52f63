//! Request/render cycle of the dashboard.
//!
//! The controller owns everything with a lifetime: the view binding, the
//! chart registry and the per-operation request sequencers. Every operation is
//! a fetch followed by a synchronous render, so the registry is never borrowed
//! across an await point.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error, info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::binding::ViewBinding;
use super::markup;
use super::registry::{ChartJsBackend, ChartRegistry};
use super::render::render_statistics;
use super::search::{SearchOutcome, SearchQuery};
use super::sequence::RequestSequencer;
use super::theme::ChartTheme;
use crate::api::ApiClient;
use crate::config::DashboardConfig;
use crate::error::DashboardError;

/// Prompt shown instead of searching for a blank query.
pub const EMPTY_QUERY_PROMPT: &str = "Please enter an author ID or name to search";

/// Shows a blocking message to the user.
pub type Prompt = Box<dyn Fn(&str)>;

fn alert(message: &str) {
	if let Some(window) = web_sys::window() {
		let _ = window.alert_with_message(message);
	}
}

/// Drives loading, searching and rendering for one mounted dashboard.
pub struct DashboardController {
	view: ViewBinding,
	api: ApiClient,
	theme: ChartTheme,
	charts: RefCell<ChartRegistry<ChartJsBackend>>,
	statistics_seq: RequestSequencer,
	search_seq: RequestSequencer,
	prompt: Prompt,
}

impl DashboardController {
	/// Controller over `view`, drawing charts into canvases of `document`.
	pub fn new(view: ViewBinding, config: &DashboardConfig, document: Document) -> Self {
		let theme = ChartTheme::default();
		info!(
			"dashboard: api base {:?}, timeout {} ms, theme {}",
			config.api_base, config.request_timeout_ms, theme.name
		);
		Self {
			view,
			api: ApiClient::new(config),
			theme,
			charts: RefCell::new(ChartRegistry::new(ChartJsBackend::new(document))),
			statistics_seq: RequestSequencer::new(),
			search_seq: RequestSequencer::new(),
			prompt: Box::new(alert),
		}
	}

	/// Replaces `window.alert` for user prompts.
	pub fn with_prompt(mut self, prompt: impl Fn(&str) + 'static) -> Self {
		self.prompt = Box::new(prompt);
		self
	}

	/// Runs [`start`](Self::start) in the background.
	pub fn bootstrap(self: &Rc<Self>) {
		let this = Rc::clone(self);
		spawn_local(async move { this.start().await });
	}

	/// Loads filters, then statistics, then reveals the dashboard. On failure
	/// the overlay stays up with an error; reloading the page is the recovery.
	pub async fn start(&self) {
		let loaded: Result<(), DashboardError> = async {
			self.load_filters().await?;
			self.load_statistics().await
		}
		.await;
		match loaded {
			Ok(()) => {
				self.view.reveal();
				info!("dashboard: ready");
			}
			Err(err) => {
				error!("dashboard: initialization failed: {}", err);
				self.view
					.loading_overlay
					.set_inner_html(&markup::overlay_error(&err));
			}
		}
	}

	/// Populates the country dropdown.
	pub async fn load_filters(&self) -> Result<(), DashboardError> {
		let filters = self.api.filters().await?;
		debug!("dashboard: {} countries available", filters.countries.len());
		self.view
			.country_filter
			.set_inner_html(&markup::filter_options(&filters.countries));
		Ok(())
	}

	/// Fetches statistics for the selected country and renders them. A
	/// response superseded by a newer request is dropped.
	pub async fn load_statistics(&self) -> Result<(), DashboardError> {
		let country = self.view.selected_country();
		let ticket = self.statistics_seq.begin();
		let payload = self.api.statistics(country.as_deref()).await;
		if !self.statistics_seq.is_current(ticket) {
			debug!("dashboard: discarding stale statistics for {:?}", country);
			return Ok(());
		}
		let payload = payload?;

		let mut charts = self.charts.borrow_mut();
		render_statistics(&payload, &self.theme, &mut *charts, |html| {
			self.view.content.set_inner_html(html)
		})
	}

	/// Country filter changed: reload statistics, showing failures inline.
	pub fn reload_statistics(self: &Rc<Self>) {
		let this = Rc::clone(self);
		spawn_local(async move {
			if let Err(err) = this.load_statistics().await {
				error!("dashboard: loading statistics failed: {}", err);
				this.charts.borrow_mut().dispose_all();
				this.view
					.content
					.set_inner_html(&markup::statistics_error(&err));
			}
		});
	}

	/// Searches for the text in the search input.
	pub fn perform_search(self: &Rc<Self>) {
		let Some(query) = SearchQuery::parse(&self.view.search_input.value()) else {
			(self.prompt)(EMPTY_QUERY_PROMPT);
			return;
		};

		self.view.show_search_results(&markup::loading());
		let ticket = self.search_seq.begin();
		let this = Rc::clone(self);
		spawn_local(async move {
			let reply = this.api.search_authors(query.as_str()).await;
			if !this.search_seq.is_current(ticket) {
				debug!("dashboard: discarding stale search for {:?}", query.as_str());
				return;
			}
			let outcome = SearchOutcome::from_reply(query, reply);
			match &outcome {
				SearchOutcome::TransportFailure(err) => error!("dashboard: search failed: {}", err),
				SearchOutcome::ServerError(text) => warn!("dashboard: search rejected: {}", text),
				SearchOutcome::NotFound(_) | SearchOutcome::Found(_) => {}
			}
			this.view.show_search_results(&outcome.to_markup());
		});
	}

	/// Searches for a listed author or collaborator by id and scrolls to the results.
	pub fn search_author_by_id(self: &Rc<Self>, author_id: &str) {
		self.view.search_input.set_value(author_id);
		self.perform_search();

		let opts = ScrollIntoViewOptions::new();
		opts.set_behavior(ScrollBehavior::Smooth);
		opts.set_block(ScrollLogicalPosition::Start);
		self.view
			.search_results
			.scroll_into_view_with_scroll_into_view_options(&opts);
	}
}
