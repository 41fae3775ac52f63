//! Chart.js configuration builders.
//!
//! Each builder turns one slice of the statistics payload into the JSON
//! configuration object passed to `new Chart(canvas, config)`. Shared pieces
//! (tooltip, axes) come from [`ChartTheme`] so every chart looks the same.

use std::fmt;

use serde_json::{Value, json};

use super::theme::ChartTheme;
use super::types::{AuthorCount, CountryCount, StrengthCount, YearCount};

/// The fixed set of charts the dashboard can mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChartSlot {
	Year,
	Country,
	CountryDonut,
	Authors,
	Strength,
}

impl ChartSlot {
	/// All slots in page order.
	pub const ALL: [ChartSlot; 5] = [
		ChartSlot::Year,
		ChartSlot::Country,
		ChartSlot::CountryDonut,
		ChartSlot::Authors,
		ChartSlot::Strength,
	];

	/// Registry key.
	pub fn name(self) -> &'static str {
		match self {
			ChartSlot::Year => "year",
			ChartSlot::Country => "country",
			ChartSlot::CountryDonut => "countryDonut",
			ChartSlot::Authors => "authors",
			ChartSlot::Strength => "strength",
		}
	}

	/// Id of the `<canvas>` the chart is drawn into.
	pub fn canvas_id(self) -> &'static str {
		match self {
			ChartSlot::Year => "yearChart",
			ChartSlot::Country => "countryChart",
			ChartSlot::CountryDonut => "countryDonutChart",
			ChartSlot::Authors => "authorsChart",
			ChartSlot::Strength => "strengthChart",
		}
	}

	/// Card heading.
	pub fn title(self) -> &'static str {
		match self {
			ChartSlot::Year => "Authors by Publication Year",
			ChartSlot::Country => "Top 10 Countries",
			ChartSlot::CountryDonut => "Country Distribution",
			ChartSlot::Authors => "Top 10 Most Collaborative Authors",
			ChartSlot::Strength => "Collaboration Strength Distribution",
		}
	}

	/// Country charts are meaningless once the data is filtered to one country.
	pub fn is_country_specific(self) -> bool {
		matches!(self, ChartSlot::Country | ChartSlot::CountryDonut)
	}
}

impl fmt::Display for ChartSlot {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Which axis carries the counts. Horizontal bar charts swap the usual layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ValueAxis {
	X,
	Y,
}

fn tooltip(theme: &ChartTheme, swatches: bool) -> Value {
	let style = &theme.tooltip;
	json!({
		"backgroundColor": style.background.to_css(),
		"titleColor": style.text.to_css(),
		"bodyColor": style.text.to_css(),
		"borderColor": style.border.to_css(),
		"borderWidth": style.border_width,
		"padding": style.padding,
		"displayColors": swatches,
		"titleFont": { "size": style.title_size, "weight": style.title_weight },
		"bodyFont": { "size": style.body_size },
	})
}

fn ticks(theme: &ChartTheme) -> Value {
	json!({
		"color": theme.axis.tick_color.to_css(),
		"font": { "size": theme.axis.tick_size },
	})
}

fn cartesian_scales(theme: &ChartTheme, value_axis: ValueAxis) -> Value {
	let value = json!({
		"beginAtZero": true,
		"grid": { "color": theme.axis.grid_color.to_css() },
		"ticks": ticks(theme),
	});
	let category = json!({
		"grid": { "display": false },
		"ticks": ticks(theme),
	});
	match value_axis {
		ValueAxis::Y => json!({ "y": value, "x": category }),
		ValueAxis::X => json!({ "x": value, "y": category }),
	}
}

fn cartesian_options(theme: &ChartTheme, value_axis: ValueAxis) -> Value {
	let mut options = json!({
		"responsive": true,
		"maintainAspectRatio": false,
		"plugins": {
			"legend": { "display": false },
			"tooltip": tooltip(theme, false),
		},
		"scales": cartesian_scales(theme, value_axis),
	});
	if value_axis == ValueAxis::X {
		options["indexAxis"] = json!("y");
	}
	options
}

fn bar_chart(
	theme: &ChartTheme,
	labels: Vec<Value>,
	label: &str,
	data: Vec<u64>,
	color: String,
	value_axis: ValueAxis,
) -> Value {
	json!({
		"type": "bar",
		"data": {
			"labels": labels,
			"datasets": [{
				"label": label,
				"data": data,
				"backgroundColor": color,
				"borderRadius": theme.bar_radius,
				"borderSkipped": false,
			}],
		},
		"options": cartesian_options(theme, value_axis),
	})
}

/// Filled line of authors per first-publication year.
pub fn year_chart(data: &[YearCount], theme: &ChartTheme) -> Value {
	let primary = theme.primary.to_css();
	json!({
		"type": "line",
		"data": {
			"labels": data.iter().map(|d| d.year).collect::<Vec<_>>(),
			"datasets": [{
				"label": "Number of Authors",
				"data": data.iter().map(|d| d.count).collect::<Vec<_>>(),
				"borderColor": primary,
				"backgroundColor": theme.area_fill().to_css(),
				"borderWidth": 3,
				"fill": true,
				"tension": 0.4,
				"pointRadius": 4,
				"pointHoverRadius": 6,
				"pointBackgroundColor": primary,
			}],
		},
		"options": cartesian_options(theme, ValueAxis::Y),
	})
}

/// Vertical bars for the top countries.
pub fn country_chart(data: &[CountryCount], theme: &ChartTheme) -> Value {
	bar_chart(
		theme,
		data.iter().map(|d| json!(d.country)).collect(),
		"Authors",
		data.iter().map(|d| d.count).collect(),
		theme.primary.to_css(),
		ValueAxis::Y,
	)
}

/// Doughnut of every country's share. The only chart with a legend.
pub fn country_donut_chart(data: &[CountryCount], theme: &ChartTheme) -> Value {
	let colors: Vec<String> = (0..data.len())
		.map(|i| theme.palette.get(i).to_css())
		.collect();
	json!({
		"type": "doughnut",
		"data": {
			"labels": data.iter().map(|d| d.country.as_str()).collect::<Vec<_>>(),
			"datasets": [{
				"data": data.iter().map(|d| d.count).collect::<Vec<_>>(),
				"backgroundColor": colors,
				"borderWidth": 0,
			}],
		},
		"options": {
			"responsive": true,
			"maintainAspectRatio": false,
			"plugins": {
				"legend": {
					"position": "right",
					"labels": {
						"color": theme.text.to_css(),
						"font": { "size": theme.axis.tick_size },
						"padding": 12,
						"usePointStyle": true,
						"pointStyle": "circle",
					},
				},
				"tooltip": tooltip(theme, true),
			},
		},
	})
}

/// Horizontal bars, so long author names fit on the category axis.
pub fn authors_chart(data: &[AuthorCount], theme: &ChartTheme) -> Value {
	bar_chart(
		theme,
		data.iter().map(|d| json!(d.name)).collect(),
		"Collaborations",
		data.iter().map(|d| d.count).collect(),
		theme.secondary.to_css(),
		ValueAxis::X,
	)
}

/// Histogram of how often author pairs collaborated.
pub fn strength_chart(data: &[StrengthCount], theme: &ChartTheme) -> Value {
	bar_chart(
		theme,
		data.iter()
			.map(|d| json!(format!("{} collabs", d.strength)))
			.collect(),
		"Number of Pairs",
		data.iter().map(|d| d.count).collect(),
		theme.tertiary.to_css(),
		ValueAxis::Y,
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn countries() -> Vec<CountryCount> {
		["Germany", "France", "Japan"]
			.iter()
			.enumerate()
			.map(|(i, name)| CountryCount {
				country: name.to_string(),
				code: None,
				count: 100 - i as u64,
			})
			.collect()
	}

	#[test]
	fn authors_chart_is_horizontal_with_value_axis_on_x() {
		let data = vec![AuthorCount {
			id: "Q1".into(),
			name: "A very long author name".into(),
			count: 42,
		}];
		let config = authors_chart(&data, &ChartTheme::default());
		assert_eq!(config["options"]["indexAxis"], "y");
		assert_eq!(config["options"]["scales"]["x"]["beginAtZero"], true);
		assert_eq!(config["options"]["scales"]["y"]["grid"]["display"], false);
		assert_eq!(config["data"]["labels"][0], "A very long author name");
		assert_eq!(config["data"]["datasets"][0]["backgroundColor"], "#5856d6");
	}

	#[test]
	fn vertical_charts_have_no_index_axis() {
		let config = country_chart(&countries(), &ChartTheme::default());
		assert!(config["options"].get("indexAxis").is_none());
		assert_eq!(config["options"]["scales"]["y"]["beginAtZero"], true);
	}

	#[test]
	fn only_the_donut_shows_a_legend_and_swatches() {
		let theme = ChartTheme::default();
		let donut = country_donut_chart(&countries(), &theme);
		let legend = &donut["options"]["plugins"]["legend"];
		assert_eq!(legend["position"], "right");
		assert_eq!(legend["labels"]["pointStyle"], "circle");
		assert_eq!(donut["options"]["plugins"]["tooltip"]["displayColors"], true);
		assert_eq!(donut["data"]["datasets"][0]["backgroundColor"][1], "#34c759");

		let year = year_chart(
			&[YearCount {
				year: 2001,
				count: 3,
			}],
			&theme,
		);
		assert_eq!(year["options"]["plugins"]["legend"]["display"], false);
		assert_eq!(year["options"]["plugins"]["tooltip"]["displayColors"], false);
		assert_eq!(
			year["options"]["plugins"]["tooltip"]["backgroundColor"],
			"rgba(255, 255, 255, 0.95)"
		);
	}

	#[test]
	fn strength_labels_name_the_bucket() {
		let data = vec![
			StrengthCount {
				strength: 1,
				count: 700,
			},
			StrengthCount {
				strength: 4,
				count: 12,
			},
		];
		let config = strength_chart(&data, &ChartTheme::default());
		assert_eq!(config["data"]["labels"][1], "4 collabs");
		assert_eq!(config["data"]["datasets"][0]["data"][0], 700);
	}

	#[test]
	fn slots_map_to_distinct_canvases() {
		let mut ids: Vec<_> = ChartSlot::ALL.iter().map(|s| s.canvas_id()).collect();
		ids.sort();
		ids.dedup();
		assert_eq!(ids.len(), 5);
		assert_eq!(ChartSlot::CountryDonut.to_string(), "countryDonut");
	}
}
