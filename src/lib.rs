//! folio-motion: animated backdrop and motion layer for a single-page
//! portfolio site.
//!
//! This crate provides the page's decorative motion: a pointer-coupled
//! particle backdrop on a fullscreen canvas, a smoothed custom cursor, a
//! once-per-session intro sequence driven by a declarative tween table, and
//! the contact form with its single-shot relay submission. The reusable
//! animation utilities live in [`motion`].

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod motion;

pub use components::contact::ContactSection;
pub use components::cursor::CustomCursor;
pub use components::loading::LoadingScreen;
pub use components::particles::ParticlesBackdrop;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("folio-motion: logging initialized");
}

/// Page configuration injected by the host document.
#[derive(Clone, Debug, Deserialize)]
pub struct SiteConfig {
	/// Headline shown in the hero overlay.
	pub title: String,
	/// Line under the headline.
	pub tagline: String,
	/// Form relay endpoint receiving contact submissions.
	pub contact_endpoint: String,
}

impl Default for SiteConfig {
	fn default() -> Self {
		Self {
			title: "Portfolio".to_string(),
			tagline: "Design-minded software engineer".to_string(),
			contact_endpoint: "https://formspree.io/f/your-form-id".to_string(),
		}
	}
}

/// Load site configuration from a script element with id="site-config".
/// Expected format: JSON with { title, tagline, contact_endpoint }
fn load_site_config() -> Option<SiteConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("site-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<SiteConfig>(&json_text) {
		Ok(config) => {
			info!("folio-motion: loaded site config for {:?}", config.title);
			Some(config)
		}
		Err(e) => {
			warn!("folio-motion: failed to parse site config: {}", e);
			None
		}
	}
}

const INTRO_FLAG_KEY: &str = "introPlayed";

/// Whether the intro sequence already played this browser session.
///
/// Session storage is touched only here at the entry layer; components
/// receive the resolved flag as a plain input and never read ambient state.
pub fn intro_already_played() -> bool {
	session_storage()
		.and_then(|storage| storage.get_item(INTRO_FLAG_KEY).ok().flatten())
		.is_some()
}

/// Record that the intro sequence has played for this browser session.
pub fn mark_intro_played() {
	if let Some(storage) = session_storage() {
		let _ = storage.set_item(INTRO_FLAG_KEY, "true");
	}
}

fn session_storage() -> Option<web_sys::Storage> {
	web_sys::window()?.session_storage().ok().flatten()
}

/// Root application component.
///
/// Shows the intro overlay on the first visit of a session, then reveals
/// the page: particle backdrop, custom cursor, hero overlay, and the
/// contact section.
#[component]
pub fn App(
	/// Skip the intro overlay when it already played this session.
	has_played_intro: bool,
) -> impl IntoView {
	provide_meta_context();

	let config = load_site_config().unwrap_or_default();
	let loaded = RwSignal::new(has_played_intro);
	let on_intro_done = Callback::new(move |_| {
		mark_intro_played();
		loaded.set(true);
	});

	let page_title = config.title.clone();
	let hero_title = config.title.clone();
	let hero_tagline = config.tagline.clone();
	let contact_endpoint = config.contact_endpoint.clone();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text=page_title />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Show when=move || !loaded.get()>
			<LoadingScreen on_complete=on_intro_done />
		</Show>
		<Show when=move || loaded.get()>
			<div class="page">
				<ParticlesBackdrop />
				<CustomCursor />
				<main>
					<section id="hero" class="hero-overlay">
						<h1>{hero_title.clone()}</h1>
						<p class="tagline">{hero_tagline.clone()}</p>
					</section>
					<ContactSection endpoint=contact_endpoint.clone() />
				</main>
			</div>
		</Show>
	}
}
