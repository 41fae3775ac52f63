//! Client entrypoint for the CSR build. The host page loads Chart.js first.

// Bin target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use collab_dashboard::{App, init_logging};
use leptos::prelude::*;

fn main() {
	init_logging();

	mount_to_body(|| {
		view! { <App /> }
	})
}
