//! Number formatting and escaping for generated markup.

/// Groups digits in threes with commas: `1234567` -> `"1,234,567"`.
pub fn group_thousands(value: u64) -> String {
	let digits = value.to_string();
	let mut out = String::with_capacity(digits.len() + digits.len() / 3);
	for (i, ch) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			out.push(',');
		}
		out.push(ch);
	}
	out
}

/// Shortest decimal form, without grouping: `4.2` -> `"4.2"`, `5.0` -> `"5"`.
pub fn plain_number(value: f64) -> String {
	value.to_string()
}

/// Collaborations per distinct collaborator, rounded half up. Zero when the
/// author has no collaborators.
pub fn average_per_collaborator(total_collaborations: u64, num_collaborators: u64) -> u64 {
	if num_collaborators == 0 {
		return 0;
	}
	(total_collaborations as f64 / num_collaborators as f64).round() as u64
}

/// Escapes text for use in element content and double- or single-quoted attributes.
pub fn escape_html(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	for ch in text.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			_ => out.push(ch),
		}
	}
	out
}
