//! HTML generation for the statistics view and shared status messages.
//!
//! Everything here is a pure function of its input. Interactive rows carry a
//! `data-author-id` attribute; the dashboard component delegates clicks on
//! them, so no inline handlers are emitted. All server-supplied text is
//! escaped.

use std::fmt::Write;

use super::charts::ChartSlot;
use super::format::{escape_html, group_thousands, plain_number};
use super::types::{AuthorCount, CountryOption, StatisticsPayload, Summary};
use crate::error::DashboardError;

/// Attribute marking an element whose click searches for an author.
pub const AUTHOR_ID_ATTR: &str = "data-author-id";

/// Message shown in the loading overlay when bootstrap fails.
pub const LOAD_FAILED: &str = "Error loading data. Please refresh the page.";

/// Message shown for transport failures during search.
pub const SEARCH_FAILED: &str = "Error performing search. Please try again.";

/// `<option>` list for the country filter, led by the "All Countries" sentinel.
pub fn filter_options(countries: &[CountryOption]) -> String {
	let mut html = String::from(r#"<option value="">All Countries</option>"#);
	for country in countries {
		let _ = write!(
			html,
			r#"<option value="{}">{}</option>"#,
			escape_html(&country.code),
			escape_html(&country.name)
		);
	}
	html
}

/// Content region for a statistics payload: summary cards, chart cards and
/// the ranked author list.
pub fn statistics(payload: &StatisticsPayload) -> String {
	let mut html = String::new();
	summary_cards(&mut html, &payload.summary);
	chart_cards(&mut html, &visible_slots(payload.has_country_filter));
	top_author_list(&mut html, &payload.top_authors);
	html
}

/// Chart slots present on the page, in order.
pub fn visible_slots(has_country_filter: bool) -> Vec<ChartSlot> {
	ChartSlot::ALL
		.into_iter()
		.filter(|slot| !(has_country_filter && slot.is_country_specific()))
		.collect()
}

fn stat_card(html: &mut String, label: &str, value: &str, description: &str) {
	let _ = write!(
		html,
		r#"<div class="stat-card"><div class="stat-label">{label}</div><div class="stat-value">{value}</div><div class="stat-description">{description}</div></div>"#
	);
}

fn summary_cards(html: &mut String, summary: &Summary) {
	html.push_str(r#"<div class="stats-grid">"#);
	stat_card(html, "Total Authors", &group_thousands(summary.total_authors), "in dataset");
	stat_card(
		html,
		"Collaborations",
		&group_thousands(summary.total_collaborations),
		"total instances",
	);
	stat_card(
		html,
		"Avg per Author",
		&plain_number(summary.avg_collaborations),
		"collaborations",
	);
	stat_card(
		html,
		"Unique Connections",
		&group_thousands(summary.unique_connections),
		"author pairs",
	);
	html.push_str("</div>");
}

fn chart_cards(html: &mut String, slots: &[ChartSlot]) {
	html.push_str(r#"<div class="charts-section">"#);
	for slot in slots {
		let (card_class, container_class) = match slot {
			ChartSlot::Year => ("chart-card full-width", "chart-container tall"),
			_ => ("chart-card", "chart-container"),
		};
		let _ = write!(
			html,
			r#"<div class="{card_class}"><div class="chart-title">{}</div><div class="{container_class}"><canvas id="{}"></canvas></div></div>"#,
			slot.title(),
			slot.canvas_id()
		);
	}
	html.push_str("</div>");
}

fn top_author_list(html: &mut String, authors: &[AuthorCount]) {
	html.push_str(r#"<div class="top-list-card"><div class="section-title">Most Collaborative Authors</div>"#);
	for (rank, author) in authors.iter().enumerate() {
		let _ = write!(
			html,
			r#"<div class="list-item" {AUTHOR_ID_ATTR}="{}"><div class="list-rank">#{}</div><div class="list-content"><div class="list-name">{}</div><div class="list-meta">Click to view details</div></div><div class="list-count">{}</div></div>"#,
			escape_html(&author.id),
			rank + 1,
			escape_html(&author.name),
			author.count
		);
	}
	html.push_str("</div>");
}

/// Spinner placeholder shown while a search is in flight.
pub fn loading() -> String {
	r#"<div class="no-results"><div class="loading-spinner"></div></div>"#.to_string()
}

/// Inline message block used by the search and content regions.
pub fn message(text: &str) -> String {
	format!(
		r#"<div class="no-results"><div class="no-results-text">{}</div></div>"#,
		escape_html(text)
	)
}

/// Inline error for a failed statistics reload. Server-supplied messages are
/// shown as-is; transport failures get a generic hint.
pub fn statistics_error(err: &DashboardError) -> String {
	match err {
		DashboardError::Server(text) => message(text),
		_ => message("Error loading statistics. Please try again."),
	}
}

/// Replacement content for the loading overlay when bootstrap fails.
pub fn overlay_error(err: &DashboardError) -> String {
	let detail = match err {
		DashboardError::Server(text) => format!(
			r#"<div class="loading-detail">{}</div>"#,
			escape_html(text)
		),
		_ => String::new(),
	};
	format!(r#"<div class="loading-text" style="color: #ff3b30;">{LOAD_FAILED}</div>{detail}"#)
}

#[cfg(test)]
pub(crate) mod tests {
	use super::*;
	use crate::components::dashboard::types::CountryCount;

	pub(crate) fn payload(has_country_filter: bool) -> StatisticsPayload {
		StatisticsPayload {
			summary: Summary {
				total_authors: 1000,
				total_collaborations: 1_234_567,
				avg_collaborations: 4.2,
				unique_connections: 870,
			},
			top_countries: vec![CountryCount {
				country: "Germany".into(),
				code: Some("DE".into()),
				count: 300,
			}],
			top_authors: vec![
				AuthorCount {
					id: "Q1".into(),
					name: "Ada <Lovelace>".into(),
					count: 55,
				},
				AuthorCount {
					id: "Q2".into(),
					name: "Alan".into(),
					count: 40,
				},
			],
			has_country_filter,
			..Default::default()
		}
	}

	#[test]
	fn summary_counts_are_grouped_but_average_is_not() {
		let html = statistics(&payload(false));
		assert!(html.contains(r#"<div class="stat-value">1,000</div>"#));
		assert!(html.contains(r#"<div class="stat-value">1,234,567</div>"#));
		assert!(html.contains(r#"<div class="stat-value">4.2</div>"#));
		assert!(html.contains(r#"<div class="stat-value">870</div>"#));
	}

	#[test]
	fn country_filter_omits_country_chart_regions() {
		let filtered = statistics(&payload(true));
		assert!(!filtered.contains("countryChart"));
		assert!(!filtered.contains("countryDonutChart"));
		assert!(filtered.contains(r#"id="yearChart""#));
		assert!(filtered.contains(r#"id="authorsChart""#));
		assert!(filtered.contains(r#"id="strengthChart""#));

		let unfiltered = statistics(&payload(false));
		assert!(unfiltered.contains(r#"id="countryChart""#));
		assert!(unfiltered.contains(r#"id="countryDonutChart""#));
	}

	#[test]
	fn top_authors_are_ranked_clickable_and_escaped() {
		let html = statistics(&payload(false));
		assert!(html.contains(r##"data-author-id="Q1"><div class="list-rank">#1</div>"##));
		assert!(html.contains(r##"data-author-id="Q2"><div class="list-rank">#2</div>"##));
		assert!(html.contains("Ada &lt;Lovelace&gt;"));
	}

	#[test]
	fn filter_options_lead_with_all_countries() {
		let html = filter_options(&[CountryOption {
			code: "DE".into(),
			name: "Germany".into(),
		}]);
		assert_eq!(
			html,
			r#"<option value="">All Countries</option><option value="DE">Germany</option>"#
		);
	}

	#[test]
	fn overlay_error_includes_server_detail_only() {
		let server = overlay_error(&DashboardError::Server("Data not loaded".into()));
		assert!(server.contains(LOAD_FAILED));
		assert!(server.contains("Data not loaded"));

		let network = overlay_error(&DashboardError::Network("offline".into()));
		assert!(network.contains(LOAD_FAILED));
		assert!(!network.contains("offline"));
	}
}
