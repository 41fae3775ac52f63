//! Response payloads of the statistics backend.
//!
//! These are transient view-models: decoded on every fetch, rendered, and
//! dropped. Field names follow the backend's JSON exactly.

use serde::Deserialize;

use crate::error::DashboardError;

/// Envelope shared by every endpoint. The backend reports application errors
/// as `{"error": "..."}` (usually with a 4xx status) instead of the payload.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum ApiReply<T> {
	/// Application-level failure.
	Failure {
		/// Human-readable reason, shown to the user as-is.
		error: String,
	},
	/// Regular payload.
	Success(T),
}

impl<T> ApiReply<T> {
	/// Folds the envelope into a `Result`, mapping `{error}` to [`DashboardError::Server`].
	pub fn into_result(self) -> Result<T, DashboardError> {
		match self {
			Self::Failure { error } => Err(DashboardError::Server(error)),
			Self::Success(payload) => Ok(payload),
		}
	}
}

/// A selectable country for the filter dropdown.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CountryOption {
	/// ISO country code, sent back as the `country` query parameter.
	pub code: String,
	/// Display name.
	pub name: String,
}

/// Response of `GET /api/filters`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FilterOptions {
	/// Countries in display order.
	#[serde(default)]
	pub countries: Vec<CountryOption>,
}

/// Headline counts shown in the summary cards.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Summary {
	/// Authors in the (filtered) dataset.
	pub total_authors: u64,
	/// Sum of all pairwise collaboration counts.
	pub total_collaborations: u64,
	/// Already rounded to one decimal by the backend.
	pub avg_collaborations: f64,
	/// Distinct collaborating author pairs.
	pub unique_connections: u64,
}

/// Author count for one country; `code` is absent on older backends.
#[derive(Clone, Debug, Deserialize)]
pub struct CountryCount {
	/// Country display name.
	pub country: String,
	/// ISO country code.
	#[serde(default)]
	pub code: Option<String>,
	/// Number of authors.
	pub count: u64,
}

/// Collaboration total for one author.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthorCount {
	/// Author id, searchable.
	pub id: String,
	/// Display name.
	pub name: String,
	/// Total collaborations.
	pub count: u64,
}

/// Number of authors whose first publication falls in `year`.
#[derive(Clone, Debug, Deserialize)]
pub struct YearCount {
	/// Year of first publication.
	pub year: i32,
	/// Number of authors.
	pub count: u64,
}

/// Number of author pairs that collaborated exactly `strength` times.
#[derive(Clone, Debug, Deserialize)]
pub struct StrengthCount {
	/// Collaborations per pair.
	pub strength: u64,
	/// Number of pairs.
	pub count: u64,
}

/// Response of `GET /api/statistics`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct StatisticsPayload {
	/// Headline counts.
	pub summary: Summary,
	/// Countries with the most authors, descending.
	#[serde(default)]
	pub top_countries: Vec<CountryCount>,
	/// Every country with at least one author.
	#[serde(default)]
	pub all_countries: Vec<CountryCount>,
	/// Most collaborative authors, descending.
	#[serde(default)]
	pub top_authors: Vec<AuthorCount>,
	/// Authors per first-publication year, ascending by year.
	#[serde(default)]
	pub year_distribution: Vec<YearCount>,
	/// Pairs per collaboration strength, ascending by strength.
	#[serde(default)]
	pub strength_distribution: Vec<StrengthCount>,
	/// Set when the statistics were filtered to a single country.
	#[serde(default)]
	pub has_country_filter: bool,
}

/// One of an author's strongest collaborators.
#[derive(Clone, Debug, Deserialize)]
pub struct Collaborator {
	/// Author id, searchable.
	pub id: String,
	/// Display name.
	pub name: String,
	/// Publications shared with the matched author.
	pub collaboration_count: u64,
}

/// A single author matched by a search.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthorResult {
	/// Author id.
	pub author_id: String,
	/// Display name.
	pub author_name: String,
	/// ISO country code, if known.
	#[serde(default)]
	pub country_code: Option<String>,
	/// Year of first publication.
	pub first_pubyear: i32,
	/// Sum of collaboration counts over all collaborators.
	pub total_collaborations: u64,
	/// Distinct collaborators.
	pub num_collaborators: u64,
	/// Strongest collaborators, descending.
	#[serde(default)]
	pub top_collaborators: Vec<Collaborator>,
}

/// Response of `GET /api/search/author`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SearchResponse {
	/// Number of matches returned.
	pub count: u64,
	/// Matched authors.
	#[serde(default)]
	pub results: Vec<AuthorResult>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn statistics_payload_decodes_backend_shape() {
		let json = r#"{
			"summary": {"total_authors": 1000, "total_collaborations": 4200,
				"avg_collaborations": 4.2, "unique_connections": 870},
			"top_countries": [{"country": "Germany", "code": "DE", "count": 300}],
			"all_countries": [{"country": "Germany", "code": "DE", "count": 300}],
			"top_authors": [{"id": "Q1", "name": "Ada", "count": 55}],
			"year_distribution": [{"year": 1998, "count": 12}],
			"strength_distribution": [{"strength": 1, "count": 700}],
			"has_country_filter": false
		}"#;
		let payload = serde_json::from_str::<ApiReply<StatisticsPayload>>(json)
			.unwrap()
			.into_result()
			.unwrap();
		assert_eq!(payload.summary.total_authors, 1000);
		assert_eq!(payload.top_countries[0].code.as_deref(), Some("DE"));
		assert_eq!(payload.top_authors[0].id, "Q1");
		assert!(!payload.has_country_filter);
	}

	#[test]
	fn error_body_becomes_server_error() {
		let reply: ApiReply<FilterOptions> =
			serde_json::from_str(r#"{"error": "Data not loaded"}"#).unwrap();
		assert_eq!(
			reply.into_result().unwrap_err(),
			DashboardError::Server("Data not loaded".into())
		);
	}

	#[test]
	fn empty_search_decodes_without_results() {
		let reply: ApiReply<SearchResponse> =
			serde_json::from_str(r#"{"results": [], "count": 0}"#).unwrap();
		let response = reply.into_result().unwrap();
		assert_eq!(response.count, 0);
		assert!(response.results.is_empty());
	}
}
