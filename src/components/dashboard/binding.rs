//! Typed handles to the page regions the dashboard writes into.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement, HtmlSelectElement};

use crate::error::DashboardError;

/// Element ids shared with the shell markup.
pub mod ids {
	/// Full-page overlay shown until the first statistics render.
	pub const LOADING_OVERLAY: &str = "loadingOverlay";
	/// Dashboard body, hidden while loading.
	pub const MAIN_CONTAINER: &str = "mainContainer";
	/// Summary cards, charts and the author ranking.
	pub const CONTENT: &str = "content";
	/// Country `<select>`.
	pub const COUNTRY_FILTER: &str = "countryFilter";
	/// Author search `<input>`.
	pub const SEARCH_INPUT: &str = "authorSearch";
	/// Search button.
	pub const SEARCH_BUTTON: &str = "searchBtn";
	/// Search result cards.
	pub const SEARCH_RESULTS: &str = "searchResults";
}

/// Every element the controller touches, resolved and type-checked once.
#[derive(Clone, Debug)]
pub struct ViewBinding {
	/// [`ids::LOADING_OVERLAY`]
	pub loading_overlay: HtmlElement,
	/// [`ids::MAIN_CONTAINER`]
	pub main_container: HtmlElement,
	/// [`ids::CONTENT`]
	pub content: HtmlElement,
	/// [`ids::COUNTRY_FILTER`]
	pub country_filter: HtmlSelectElement,
	/// [`ids::SEARCH_INPUT`]
	pub search_input: HtmlInputElement,
	/// [`ids::SEARCH_RESULTS`]
	pub search_results: HtmlElement,
}

fn lookup<T: JsCast>(
	document: &Document,
	id: &'static str,
	expected: &'static str,
) -> Result<T, DashboardError> {
	document
		.get_element_by_id(id)
		.ok_or(DashboardError::MissingElement(id))?
		.dyn_into::<T>()
		.map_err(|_| DashboardError::WrongElementType { id, expected })
}

impl ViewBinding {
	/// Resolves all regions, failing on the first missing or mistyped one.
	pub fn from_document(document: &Document) -> Result<Self, DashboardError> {
		Ok(Self {
			loading_overlay: lookup(document, ids::LOADING_OVERLAY, "element")?,
			main_container: lookup(document, ids::MAIN_CONTAINER, "element")?,
			content: lookup(document, ids::CONTENT, "element")?,
			country_filter: lookup(document, ids::COUNTRY_FILTER, "select")?,
			search_input: lookup(document, ids::SEARCH_INPUT, "input")?,
			search_results: lookup(document, ids::SEARCH_RESULTS, "element")?,
		})
	}

	/// Selected country code, `None` for "All Countries".
	pub fn selected_country(&self) -> Option<String> {
		Some(self.country_filter.value()).filter(|v| !v.is_empty())
	}

	/// Hides the loading overlay and shows the dashboard.
	pub fn reveal(&self) {
		set_display(&self.loading_overlay, "none");
		set_display(&self.main_container, "block");
	}

	/// Makes the results region visible and replaces its content.
	pub fn show_search_results(&self, html: &str) {
		set_display(&self.search_results, "block");
		self.search_results.set_inner_html(html);
	}
}

fn set_display(element: &HtmlElement, value: &str) {
	let _ = element.style().set_property("display", value);
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
	use super::fixture::{Fixture, SHELL, document};
	use super::*;
	use wasm_bindgen_test::*;

	wasm_bindgen_test_configure!(run_in_browser);

	fn display(element: &HtmlElement) -> String {
		element.style().get_property_value("display").unwrap()
	}

	#[wasm_bindgen_test]
	fn binds_every_region_of_the_shell() {
		let _page = Fixture::mount(SHELL);
		let view = ViewBinding::from_document(&document()).unwrap();

		assert_eq!(view.search_input.id(), ids::SEARCH_INPUT);
		assert_eq!(view.selected_country(), None);
		view.country_filter.set_value("DE");
		assert_eq!(view.selected_country().as_deref(), Some("DE"));
	}

	#[wasm_bindgen_test]
	fn missing_region_is_reported_by_id() {
		let _page = Fixture::mount(&SHELL.replace(
			r#"<div id="searchResults" style="display: none;"></div>"#,
			"",
		));
		let err = ViewBinding::from_document(&document()).unwrap_err();
		assert_eq!(err, DashboardError::MissingElement(ids::SEARCH_RESULTS));
	}

	#[wasm_bindgen_test]
	fn mistyped_region_is_rejected() {
		let _page = Fixture::mount(&SHELL.replace(
			r#"<input id="authorSearch" type="text">"#,
			r#"<div id="authorSearch"></div>"#,
		));
		let err = ViewBinding::from_document(&document()).unwrap_err();
		assert_eq!(
			err,
			DashboardError::WrongElementType {
				id: ids::SEARCH_INPUT,
				expected: "input",
			}
		);
	}

	#[wasm_bindgen_test]
	fn reveal_swaps_overlay_for_dashboard() {
		let _page = Fixture::mount(SHELL);
		let view = ViewBinding::from_document(&document()).unwrap();

		view.reveal();
		assert_eq!(display(&view.loading_overlay), "none");
		assert_eq!(display(&view.main_container), "block");
	}

	#[wasm_bindgen_test]
	fn search_results_become_visible_when_filled() {
		let _page = Fixture::mount(SHELL);
		let view = ViewBinding::from_document(&document()).unwrap();
		assert_eq!(display(&view.search_results), "none");

		view.show_search_results("<p>2 authors</p>");
		assert_eq!(display(&view.search_results), "block");
		assert_eq!(view.search_results.inner_html(), "<p>2 authors</p>");
	}
}
