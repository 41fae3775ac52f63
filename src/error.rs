//! Error type shared by the dashboard's loaders, renderer and view binding.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Everything that can go wrong between issuing a request and mounting a chart.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
	/// Not running in a browser window.
	#[error("no browser window available")]
	NoWindow,

	/// No element with this id exists.
	#[error("required element #{0} is missing from the page")]
	MissingElement(&'static str),

	/// The element exists but has the wrong tag.
	#[error("element #{id} is not a {expected}")]
	WrongElementType {
		/// Element id.
		id: &'static str,
		/// Tag the element should have.
		expected: &'static str,
	},

	/// The request failed before a response arrived.
	#[error("network request failed: {0}")]
	Network(String),

	/// The request or its body outlived the configured timeout.
	#[error("request timed out after {0} ms")]
	Timeout(u32),

	/// Non-2xx status with a body that is not a reply envelope.
	#[error("server responded with status {0}")]
	Http(u16),

	/// 2xx status with a body that does not match the payload.
	#[error("malformed response: {0}")]
	Decode(String),

	/// Application-level error carried in a response body as `{"error": ...}`.
	#[error("{0}")]
	Server(String),

	/// Chart.js rejected a chart configuration.
	#[error("chart {slot} failed to mount: {message}")]
	Chart {
		/// Slot name.
		slot: &'static str,
		/// What Chart.js reported.
		message: String,
	},

	/// Any other exception thrown by a browser API.
	#[error("JavaScript error: {0}")]
	Js(String),
}

impl DashboardError {
	/// Wraps an exception thrown across the JS boundary.
	pub fn from_js(value: JsValue) -> Self {
		let message = match value.dyn_ref::<js_sys::Error>() {
			Some(err) => String::from(err.message()),
			None => value.as_string().unwrap_or_else(|| format!("{value:?}")),
		};
		Self::Js(message)
	}

	/// True for failures that never produced a readable response body.
	pub fn is_transport(&self) -> bool {
		matches!(
			self,
			Self::Network(_) | Self::Timeout(_) | Self::Http(_) | Self::Decode(_)
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn server_errors_display_the_server_text_verbatim() {
		let err = DashboardError::Server("Data not loaded".into());
		assert_eq!(err.to_string(), "Data not loaded");
		assert!(!err.is_transport());
	}

	#[test]
	fn transport_errors_are_classified() {
		assert!(DashboardError::Timeout(30_000).is_transport());
		assert!(DashboardError::Http(502).is_transport());
		assert!(!DashboardError::MissingElement("content").is_transport());
	}
}
