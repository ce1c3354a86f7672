//! heart-swarm: a glowing particle swarm that converges onto a pulsing heart.
//!
//! This crate provides a WASM canvas component. Particles seek points on a
//! parametric heart curve, leave fading comet trails and brighten where they
//! overlap.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

// Only needed for its "js" feature, which lets rand seed from the browser.
use getrandom as _;

pub use components::heart::{HeartCanvas, SwarmConfig};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("heart-swarm: logging initialized");
}

/// Load configuration from a script element with id="heart-config".
/// Expected format: a JSON object, see [`SwarmConfig`] for the fields.
/// A missing element gives the defaults; an invalid one logs and gives the defaults.
pub fn load_config() -> SwarmConfig {
	let Some(text) = config_text() else {
		return SwarmConfig::default();
	};

	match SwarmConfig::from_json(&text) {
		Ok(config) => {
			info!("heart-swarm: loaded config {:?}", config);
			config
		}
		Err(e) => {
			warn!("heart-swarm: ignoring config: {}", e);
			SwarmConfig::default()
		}
	}
}

fn config_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("heart-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Main application component.
/// Loads configuration from the DOM and renders the heart swarm.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Heart" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-heart">
			<HeartCanvas config=config />
		</div>
	}
}
