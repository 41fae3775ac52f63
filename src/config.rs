//! Runtime configuration, embedded in the host page as inline JSON.

use serde::Deserialize;

fn default_request_timeout_ms() -> u32 {
	30_000
}

/// Settings read from `<script id="dashboard-config" type="application/json">`.
///
/// Every field is optional in the JSON; a page without the element runs
/// against the same origin with a 30 second request timeout.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
	/// Prefix prepended to every `/api/...` path. Empty means same origin.
	pub api_base: String,
	/// Abort requests after this many milliseconds; `0` disables the timer.
	#[serde(default = "default_request_timeout_ms")]
	pub request_timeout_ms: u32,
}

impl Default for DashboardConfig {
	fn default() -> Self {
		Self {
			api_base: String::new(),
			request_timeout_ms: default_request_timeout_ms(),
		}
	}
}

impl DashboardConfig {
	/// Parses the inline JSON block.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		let mut config: Self = serde_json::from_str(text)?;
		config.api_base = config.api_base.trim_end_matches('/').to_string();
		Ok(config)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_object_yields_defaults() {
		let config = DashboardConfig::from_json("{}").unwrap();
		assert_eq!(config, DashboardConfig::default());
		assert_eq!(config.request_timeout_ms, 30_000);
	}

	#[test]
	fn trailing_slash_is_stripped_from_api_base() {
		let config =
			DashboardConfig::from_json(r#"{"api_base": "https://stats.example.org/", "request_timeout_ms": 0}"#)
				.unwrap();
		assert_eq!(config.api_base, "https://stats.example.org");
		assert_eq!(config.request_timeout_ms, 0);
	}

	#[test]
	fn malformed_json_is_rejected() {
		assert!(DashboardConfig::from_json("{api_base:").is_err());
	}
}
