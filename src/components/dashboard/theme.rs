//! Visual theming for the dashboard charts.
//!
//! Provides the series palette, axis and tooltip styling shared by every chart.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity, 0.0 to 1.0.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit opacity.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color at opacity `a`.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// `#rrggbb` when opaque, `rgba(r, g, b, a)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Ordered colors for multi-slice charts.
#[derive(Clone, Debug)]
pub struct ChartPalette {
	/// Series colors in assignment order.
	pub colors: Vec<Color>,
}

impl ChartPalette {
	/// Bright system palette (default)
	pub fn system() -> Self {
		Self {
			colors: vec![
				Color::rgb(0, 122, 255),   // Blue
				Color::rgb(52, 199, 89),   // Green
				Color::rgb(255, 149, 0),   // Orange
				Color::rgb(88, 86, 214),   // Indigo
				Color::rgb(255, 45, 85),   // Pink
				Color::rgb(90, 200, 250),  // Teal
				Color::rgb(255, 204, 0),   // Yellow
				Color::rgb(255, 59, 48),   // Red
				Color::rgb(175, 82, 222),  // Purple
				Color::rgb(50, 173, 230),  // Cyan
			],
		}
	}

	/// Color of series `index`, wrapping around.
	pub fn get(&self, index: usize) -> Color {
		self.colors[index % self.colors.len()]
	}
}

/// Tooltip appearance, identical on every chart apart from swatches.
#[derive(Clone, Debug)]
pub struct TooltipStyle {
	/// Box fill.
	pub background: Color,
	/// Title and body text.
	pub text: Color,
	/// Box outline.
	pub border: Color,
	/// Outline width in px.
	pub border_width: u32,
	/// Inner padding in px.
	pub padding: u32,
	/// Title font size in px.
	pub title_size: u32,
	/// Title font weight, as CSS.
	pub title_weight: &'static str,
	/// Body font size in px.
	pub body_size: u32,
}

/// Axis tick and grid styling.
#[derive(Clone, Debug)]
pub struct AxisStyle {
	/// Tick label color.
	pub tick_color: Color,
	/// Tick label font size in px.
	pub tick_size: u32,
	/// Grid line color.
	pub grid_color: Color,
}

/// Complete chart theme.
#[derive(Clone, Debug)]
pub struct ChartTheme {
	/// Theme name, for logging.
	pub name: &'static str,
	/// Year line and country bars
	pub primary: Color,
	/// Author bars
	pub secondary: Color,
	/// Strength histogram
	pub tertiary: Color,
	/// Legend label color
	pub text: Color,
	/// Cartesian axes.
	pub axis: AxisStyle,
	/// Tooltips on every chart.
	pub tooltip: TooltipStyle,
	/// Donut slices.
	pub palette: ChartPalette,
	/// Corner radius of bar chart bars
	pub bar_radius: u32,
}

impl ChartTheme {
	/// Light theme matching the dashboard stylesheet (default)
	pub fn light() -> Self {
		let text = Color::rgb(29, 29, 31);
		Self {
			name: "light",
			primary: Color::rgb(0, 122, 255),
			secondary: Color::rgb(88, 86, 214),
			tertiary: Color::rgb(52, 199, 89),
			text,
			axis: AxisStyle {
				tick_color: Color::rgb(110, 110, 115),
				tick_size: 12,
				grid_color: Color::rgba(0, 0, 0, 0.05),
			},
			tooltip: TooltipStyle {
				background: Color::rgba(255, 255, 255, 0.95),
				text,
				border: Color::rgba(0, 0, 0, 0.1),
				border_width: 1,
				padding: 12,
				title_size: 14,
				title_weight: "600",
				body_size: 13,
			},
			palette: ChartPalette::system(),
			bar_radius: 8,
		}
	}

	/// Translucent fill under the year line.
	pub fn area_fill(&self) -> Color {
		self.primary.with_alpha(0.1)
	}
}

impl Default for ChartTheme {
	fn default() -> Self {
		Self::light()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_serialization_matches_stylesheet_values() {
		assert_eq!(Color::rgb(0, 122, 255).to_css(), "#007aff");
		assert_eq!(Color::rgba(255, 255, 255, 0.95).to_css(), "rgba(255, 255, 255, 0.95)");
		assert_eq!(ChartTheme::light().area_fill().to_css(), "rgba(0, 122, 255, 0.1)");
	}

	#[test]
	fn palette_wraps_around() {
		let palette = ChartPalette::system();
		assert_eq!(palette.colors.len(), 10);
		assert_eq!(palette.get(10), palette.get(0));
		assert_eq!(palette.get(9).to_css(), "#32ade6");
	}
}
