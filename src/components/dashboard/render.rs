//! Statistics renderer.
//!
//! A render always replaces the whole content region and rebuilds every
//! chart; there is no incremental path. Order matters:
//! 1. Dispose all live charts
//! 2. Write the new markup (which creates the canvases)
//! 3. Mount one chart per visible slot

use serde_json::Value;

use super::charts::{self, ChartSlot};
use super::markup;
use super::registry::{ChartBackend, ChartRegistry};
use super::theme::ChartTheme;
use super::types::StatisticsPayload;
use crate::error::DashboardError;

/// Chart configuration for one slot.
fn chart_config(slot: ChartSlot, payload: &StatisticsPayload, theme: &ChartTheme) -> Value {
	match slot {
		ChartSlot::Year => charts::year_chart(&payload.year_distribution, theme),
		ChartSlot::Country => charts::country_chart(&payload.top_countries, theme),
		ChartSlot::CountryDonut => charts::country_donut_chart(&payload.all_countries, theme),
		ChartSlot::Authors => charts::authors_chart(&payload.top_authors, theme),
		ChartSlot::Strength => charts::strength_chart(&payload.strength_distribution, theme),
	}
}

/// Renders `payload` into the content region via `write_markup` and mounts its charts.
///
/// A chart that fails to mount aborts the render with the error; charts mounted
/// before it stay registered and are disposed on the next render.
pub fn render_statistics<B: ChartBackend>(
	payload: &StatisticsPayload,
	theme: &ChartTheme,
	registry: &mut ChartRegistry<B>,
	write_markup: impl FnOnce(&str),
) -> Result<(), DashboardError> {
	registry.dispose_all();

	write_markup(&markup::statistics(payload));

	for slot in markup::visible_slots(payload.has_country_filter) {
		registry.mount(slot, &chart_config(slot, payload, theme))?;
	}
	Ok(())
}
