//! Client entrypoint for the CSR build.

// Bin target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use folio_motion::{App, init_logging, intro_already_played};
use leptos::prelude::*;

fn main() {
	init_logging();

	mount_to_body(|| {
		let has_played_intro = intro_already_played();
		view! { <App has_played_intro /> }
	})
}
