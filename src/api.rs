//! HTTP client for the statistics backend, built on the browser's fetch API.
//!
//! Bodies are decoded regardless of status because the backend reports
//! application errors as `{"error": ...}` with a 4xx status.

use std::cell::Cell;
use std::rc::Rc;

use log::debug;
use serde::de::DeserializeOwned;
use url::form_urlencoded;
use js_sys::{Array, Function, Promise};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Headers, Request, RequestInit, Response, Window};

use crate::components::dashboard::{FilterOptions, SearchResponse, StatisticsPayload};
use crate::components::dashboard::types::ApiReply;
use crate::config::DashboardConfig;
use crate::error::DashboardError;

/// Path of the country list.
pub const FILTERS_PATH: &str = "/api/filters";
/// Path of the aggregate statistics.
pub const STATISTICS_PATH: &str = "/api/statistics";
/// Path of the author search.
pub const SEARCH_PATH: &str = "/api/search/author";

/// Statistics URL path, with `country` only when a filter is selected.
pub fn statistics_path(country: Option<&str>) -> String {
	match country.filter(|c| !c.is_empty()) {
		Some(code) => {
			let query = form_urlencoded::Serializer::new(String::new())
				.append_pair("country", code)
				.finish();
			format!("{STATISTICS_PATH}?{query}")
		}
		None => STATISTICS_PATH.to_string(),
	}
}

/// Search URL path with the query string encoded as-is.
pub fn search_path(query: &str) -> String {
	let query = form_urlencoded::Serializer::new(String::new())
		.append_pair("q", query)
		.finish();
	format!("{SEARCH_PATH}?{query}")
}

/// Interprets a response body: `{error}` wins over the status code, and an
/// unreadable body is blamed on the status when that status is not 2xx.
pub fn decode_reply<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, DashboardError> {
	match serde_json::from_str::<ApiReply<T>>(body) {
		Ok(reply) => reply.into_result(),
		Err(_) if !(200..300).contains(&status) => Err(DashboardError::Http(status)),
		Err(e) => Err(DashboardError::Decode(e.to_string())),
	}
}

/// Issues GET requests against the backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
	base_url: String,
	timeout_ms: u32,
}

impl ApiClient {
	/// Client for `config.api_base`, aborting after `config.request_timeout_ms`.
	pub fn new(config: &DashboardConfig) -> Self {
		Self {
			base_url: config.api_base.clone(),
			timeout_ms: config.request_timeout_ms,
		}
	}

	/// `GET /api/filters`
	pub async fn filters(&self) -> Result<FilterOptions, DashboardError> {
		self.get_json(FILTERS_PATH).await
	}

	/// `GET /api/statistics[?country=<code>]`
	pub async fn statistics(&self, country: Option<&str>) -> Result<StatisticsPayload, DashboardError> {
		self.get_json(&statistics_path(country)).await
	}

	/// `GET /api/search/author?q=<query>`
	pub async fn search_authors(&self, query: &str) -> Result<SearchResponse, DashboardError> {
		self.get_json(&search_path(query)).await
	}

	async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, DashboardError> {
		let url = format!("{}{}", self.base_url, path);
		let window = web_sys::window().ok_or(DashboardError::NoWindow)?;

		let opts = RequestInit::new();
		opts.set_method("GET");

		let headers = Headers::new().map_err(DashboardError::from_js)?;
		headers
			.set("Accept", "application/json")
			.map_err(DashboardError::from_js)?;
		opts.set_headers(&headers);

		let abort = AbortController::new().map_err(DashboardError::from_js)?;
		opts.set_signal(Some(&abort.signal()));

		let request = Request::new_with_str_and_init(&url, &opts).map_err(DashboardError::from_js)?;

		// Armed until the body is read; dropping it clears the timer.
		let deadline = RequestDeadline::arm(&window, self.timeout_ms, abort)?;
		let response: Response = settle(deadline.as_ref(), window.fetch_with_request(&request))
			.await?
			.dyn_into()
			.map_err(DashboardError::from_js)?;

		let status = response.status();
		let body = read_body(&response, deadline.as_ref()).await?;

		debug!("GET {} -> {} ({} bytes)", url, status, body.len());
		decode_reply(status, &body)
	}
}

/// Reads the whole body as text, still bounded by `deadline`.
async fn read_body(
	response: &Response,
	deadline: Option<&RequestDeadline>,
) -> Result<String, DashboardError> {
	let text = response.text().map_err(DashboardError::from_js)?;
	Ok(settle(deadline, text).await?.as_string().unwrap_or_default())
}

/// Awaits `promise`, or the deadline if it expires first.
async fn settle(deadline: Option<&RequestDeadline>, promise: Promise) -> Result<JsValue, DashboardError> {
	let Some(deadline) = deadline else {
		return JsFuture::from(promise)
			.await
			.map_err(|e| transport_error(false, 0, DashboardError::from_js(e)));
	};
	let raced = Promise::race(&Array::of2(&promise, &deadline.expired));
	JsFuture::from(raced).await.map_err(|e| {
		transport_error(
			deadline.fired.get(),
			deadline.timeout_ms,
			DashboardError::from_js(e),
		)
	})
}

/// A rejection after the deadline fired is a timeout, whatever the browser
/// reports; anything else is a network failure.
fn transport_error(timed_out: bool, timeout_ms: u32, cause: DashboardError) -> DashboardError {
	if timed_out {
		DashboardError::Timeout(timeout_ms)
	} else {
		DashboardError::Network(cause.to_string())
	}
}

/// Pending request timeout covering the fetch and the body read.
///
/// When it fires it aborts the request and rejects `expired`, so a body that
/// stalls after the headers arrived is cut off too.
struct RequestDeadline {
	window: Window,
	handle: i32,
	timeout_ms: u32,
	fired: Rc<Cell<bool>>,
	expired: Promise,
	_callback: Closure<dyn FnMut()>,
}

impl RequestDeadline {
	/// Starts the timer; `None` when `timeout_ms` is 0.
	fn arm(
		window: &Window,
		timeout_ms: u32,
		abort: AbortController,
	) -> Result<Option<Self>, DashboardError> {
		if timeout_ms == 0 {
			return Ok(None);
		}
		let mut reject_slot: Option<Function> = None;
		let expired = Promise::new(&mut |_resolve, reject| reject_slot = Some(reject));

		let fired = Rc::new(Cell::new(false));
		let fired_cb = fired.clone();
		let callback = Closure::once(move || {
			fired_cb.set(true);
			abort.abort();
			if let Some(reject) = reject_slot {
				let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("request timed out"));
			}
		});
		let handle = window
			.set_timeout_with_callback_and_timeout_and_arguments_0(
				callback.as_ref().unchecked_ref(),
				timeout_ms.min(i32::MAX as u32) as i32,
			)
			.map_err(DashboardError::from_js)?;
		Ok(Some(Self {
			window: window.clone(),
			handle,
			timeout_ms,
			fired,
			expired,
			_callback: callback,
		}))
	}
}

impl Drop for RequestDeadline {
	fn drop(&mut self) {
		self.window.clear_timeout_with_handle(self.handle);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn statistics_path_only_carries_a_selected_country() {
		assert_eq!(statistics_path(None), "/api/statistics");
		assert_eq!(statistics_path(Some("")), "/api/statistics");
		assert_eq!(statistics_path(Some("DE")), "/api/statistics?country=DE");
	}

	#[test]
	fn search_path_encodes_the_query() {
		assert_eq!(search_path("Q123"), "/api/search/author?q=Q123");
		assert_eq!(search_path("Ada & Co"), "/api/search/author?q=Ada+%26+Co");
		assert_eq!(search_path("Zoë"), "/api/search/author?q=Zo%C3%AB");
	}

	#[test]
	fn error_body_beats_status_code() {
		let err = decode_reply::<FilterOptions>(400, r#"{"error": "Data not loaded"}"#).unwrap_err();
		assert_eq!(err, DashboardError::Server("Data not loaded".into()));
	}

	#[test]
	fn unreadable_body_is_blamed_on_status() {
		let err = decode_reply::<FilterOptions>(502, "<html>Bad Gateway</html>").unwrap_err();
		assert_eq!(err, DashboardError::Http(502));

		let err = decode_reply::<FilterOptions>(200, "not json").unwrap_err();
		assert!(matches!(err, DashboardError::Decode(_)));
	}

	#[test]
	fn well_formed_body_decodes() {
		let filters = decode_reply::<FilterOptions>(
			200,
			r#"{"countries": [{"code": "FR", "name": "France"}]}"#,
		)
		.unwrap();
		assert_eq!(filters.countries[0].name, "France");
	}

	#[test]
	fn rejection_after_the_deadline_is_a_timeout() {
		let aborted = DashboardError::Js("The user aborted a request.".into());
		assert_eq!(
			transport_error(true, 5_000, aborted.clone()),
			DashboardError::Timeout(5_000)
		);
		assert_eq!(
			transport_error(false, 5_000, aborted),
			DashboardError::Network("JavaScript error: The user aborted a request.".into())
		);
	}
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
	use super::*;
	use wasm_bindgen_test::*;
	use web_sys::ReadableStream;

	wasm_bindgen_test_configure!(run_in_browser);

	fn window() -> Window {
		web_sys::window().unwrap()
	}

	#[wasm_bindgen_test]
	async fn stalled_body_times_out() {
		// Headers are available immediately, the body never arrives.
		let stream = ReadableStream::new().unwrap();
		let response = Response::new_with_opt_readable_stream(Some(&stream)).unwrap();

		let abort = AbortController::new().unwrap();
		let deadline = RequestDeadline::arm(&window(), 20, abort).unwrap();
		assert!(deadline.is_some());

		let err = read_body(&response, deadline.as_ref()).await.unwrap_err();
		assert_eq!(err, DashboardError::Timeout(20));
	}

	#[wasm_bindgen_test]
	async fn body_read_within_the_deadline_succeeds() {
		let response = Response::new_with_opt_str(Some(r#"{"countries": []}"#)).unwrap();
		let abort = AbortController::new().unwrap();
		let deadline = RequestDeadline::arm(&window(), 5_000, abort).unwrap();

		let body = read_body(&response, deadline.as_ref()).await.unwrap();
		assert_eq!(body, r#"{"countries": []}"#);
		assert!(!deadline.as_ref().is_some_and(|d| d.fired.get()));
	}

	#[wasm_bindgen_test]
	async fn zero_timeout_arms_nothing() {
		let abort = AbortController::new().unwrap();
		assert!(RequestDeadline::arm(&window(), 0, abort).unwrap().is_none());

		let response = Response::new_with_opt_str(Some("ok")).unwrap();
		assert_eq!(read_body(&response, None).await.unwrap(), "ok");
	}
}
