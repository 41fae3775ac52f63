//! Author search: query validation, outcome classification and result cards.

use std::fmt::Write;

use super::format::{average_per_collaborator, escape_html};
use super::markup::{self, AUTHOR_ID_ATTR, SEARCH_FAILED};
use super::types::{AuthorResult, Collaborator, SearchResponse};
use crate::error::DashboardError;

/// A non-empty, trimmed search string. Case and inner whitespace are kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
	/// Returns `None` for empty or whitespace-only input.
	pub fn parse(raw: &str) -> Option<Self> {
		let trimmed = raw.trim();
		if trimmed.is_empty() {
			None
		} else {
			Some(Self(trimmed.to_string()))
		}
	}

	/// The trimmed query text.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

/// What the results region shows once a search request settles.
#[derive(Debug)]
pub enum SearchOutcome {
	/// The backend rejected the search and said why.
	ServerError(String),
	/// The search succeeded but matched nobody.
	NotFound(SearchQuery),
	/// One or more matching authors.
	Found(Vec<AuthorResult>),
	/// The request never produced a readable response.
	TransportFailure(DashboardError),
}

impl SearchOutcome {
	/// Classifies a search reply for `query`.
	pub fn from_reply(query: SearchQuery, reply: Result<SearchResponse, DashboardError>) -> Self {
		match reply {
			Err(DashboardError::Server(text)) => Self::ServerError(text),
			Err(err) => Self::TransportFailure(err),
			Ok(response) if response.count == 0 || response.results.is_empty() => {
				Self::NotFound(query)
			}
			Ok(response) => Self::Found(response.results),
		}
	}

	/// Markup replacing the results region.
	pub fn to_markup(&self) -> String {
		match self {
			Self::ServerError(text) => markup::message(text),
			Self::NotFound(query) => {
				markup::message(&format!("No authors found matching \"{}\"", query.as_str()))
			}
			Self::Found(results) => result_cards(results),
			Self::TransportFailure(_) => markup::message(SEARCH_FAILED),
		}
	}
}

/// One card per matched author.
pub fn result_cards(results: &[AuthorResult]) -> String {
	let mut html = String::new();
	for author in results {
		author_card(&mut html, author);
	}
	html
}

fn author_card(html: &mut String, author: &AuthorResult) {
	html.push_str(r#"<div class="search-result-card"><div class="author-header"><div class="author-info">"#);
	let _ = write!(
		html,
		r#"<h2>{}</h2><div class="author-meta"><span class="meta-tag">ID: {}</span><span class="meta-tag">{}</span><span class="meta-tag">Since {}</span></div>"#,
		escape_html(&author.author_name),
		escape_html(&author.author_id),
		escape_html(author.country_code.as_deref().unwrap_or("Unknown")),
		author.first_pubyear
	);
	html.push_str("</div></div>");

	html.push_str(r#"<div class="author-stats">"#);
	stat_item(html, author.total_collaborations, "Total Collaborations");
	stat_item(html, author.num_collaborators, "Unique Collaborators");
	stat_item(
		html,
		average_per_collaborator(author.total_collaborations, author.num_collaborators),
		"Avg per Collaborator",
	);
	html.push_str("</div>");

	if !author.top_collaborators.is_empty() {
		html.push_str(r#"<div class="collaborators-section"><h3>Top Collaborators</h3>"#);
		for collaborator in &author.top_collaborators {
			collaborator_row(html, collaborator);
		}
		html.push_str("</div>");
	}

	html.push_str("</div>");
}

fn stat_item(html: &mut String, value: u64, label: &str) {
	let _ = write!(
		html,
		r#"<div class="stat-item"><div class="stat-item-value">{value}</div><div class="stat-item-label">{label}</div></div>"#
	);
}

fn collaborator_row(html: &mut String, collaborator: &Collaborator) {
	let id = escape_html(&collaborator.id);
	let _ = write!(
		html,
		r#"<div class="collaborator-item" {AUTHOR_ID_ATTR}="{id}"><div class="collaborator-info"><div class="collaborator-name">{}</div><div class="collaborator-meta">ID: {id}</div></div><div class="collaborator-count">{} collabs</div></div>"#,
		escape_html(&collaborator.name),
		collaborator.collaboration_count
	);
}
