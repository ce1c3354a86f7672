//! Leptos component hosting the swarm on a canvas element.
//!
//! Once the canvas is mounted the component sizes its backing store to the
//! viewport (scaled by the device profile), builds a [`Swarm`] and drives it
//! with `requestAnimationFrame`. Window resizes rescale and clear the surface.
//! Unmounting raises a stop flag that the loop checks before rescheduling.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::config::SwarmConfig;
use super::profile::{DeviceClass, DeviceProfile};
use super::swarm::Swarm;
use super::theme::Theme;

type JsCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Timer period used when the host has no frame scheduler.
const FALLBACK_FRAME_MS: i32 = 1000 / 60;

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	let w = window.inner_width().ok()?.as_f64()?;
	let h = window.inner_height().ok()?.as_f64()?;
	Some((w, h))
}

fn detect_device(window: &Window) -> DeviceClass {
	let ua = window.navigator().user_agent().unwrap_or_default();
	DeviceClass::from_user_agent(&ua)
}

/// Size the canvas backing store for the current viewport.
fn fit_canvas(canvas: &HtmlCanvasElement, window: &Window, profile: &DeviceProfile) -> (f64, f64) {
	let (vw, vh) = viewport_size(window).unwrap_or((800.0, 600.0));
	let (w, h) = profile.surface_size(vw, vh);
	canvas.set_width(w);
	canvas.set_height(h);
	(w as f64, h as f64)
}

/// Requests the next frame, switching to a fixed-rate timer for good if the
/// native scheduler call fails.
struct FrameScheduler {
	window: Window,
	fallback: Cell<bool>,
}

impl FrameScheduler {
	fn request(&self, cb: &Closure<dyn FnMut()>) {
		let f: &js_sys::Function = cb.as_ref().unchecked_ref();
		if !self.fallback.get() && self.window.request_animation_frame(f).is_ok() {
			return;
		}
		if !self.fallback.replace(true) {
			warn!(
				"heart-swarm: requestAnimationFrame unavailable, falling back to {}ms timer",
				FALLBACK_FRAME_MS
			);
		}
		let _ = self
			.window
			.set_timeout_with_callback_and_timeout_and_arguments_0(f, FALLBACK_FRAME_MS);
	}
}

/// Renders the heart swarm on a full-viewport canvas.
///
/// Configuration is read once when the canvas mounts. A missing canvas or 2D
/// context leaves the page blank without raising an error.
#[component]
pub fn HeartCanvas(#[prop(optional)] config: SwarmConfig) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let swarm: Rc<RefCell<Option<Swarm<StdRng>>>> = Rc::new(RefCell::new(None));
	let animate: JsCallback = Rc::new(RefCell::new(None));
	let resize_cb: JsCallback = Rc::new(RefCell::new(None));
	let stop = Arc::new(AtomicBool::new(false));
	let stop_cleanup = stop.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if swarm.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			warn!("heart-swarm: no window, not starting");
			return;
		};
		let Some(mut ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("heart-swarm: canvas has no 2d context, not starting");
			return;
		};

		let class = config.device.unwrap_or_else(|| detect_device(&window));
		debug!("heart-swarm: device class {:?}", class);
		let profile = DeviceProfile::for_class(class);
		let (w, h) = fit_canvas(&canvas, &window, &profile);
		let rng = match config.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_entropy(),
		};

		let mut s = Swarm::new(&config, &profile, &Theme::default(), w, h, rng);
		s.start(&mut ctx);
		*swarm.borrow_mut() = Some(s);

		let (swarm_resize, canvas_resize, mut ctx_resize) =
			(swarm.clone(), canvas.clone(), ctx.clone());
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = fit_canvas(&canvas_resize, &win, &profile);
			if let Some(ref mut s) = *swarm_resize.borrow_mut() {
				s.resize(&mut ctx_resize, nw, nh);
				info!("heart-swarm: resized to {}x{}", nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let scheduler = Rc::new(FrameScheduler {
			window,
			fallback: Cell::new(false),
		});
		let (swarm_anim, animate_inner, resize_anim, stop_anim, scheduler_anim) = (
			swarm.clone(),
			animate.clone(),
			resize_cb.clone(),
			stop.clone(),
			scheduler.clone(),
		);
		*animate.borrow_mut() = Some(Closure::new(move || {
			let mut running = false;
			if let Some(ref mut s) = *swarm_anim.borrow_mut() {
				if stop_anim.load(Ordering::Relaxed) {
					s.stop();
				}
				s.frame(&mut ctx);
				running = s.is_running();
			}
			if !running {
				if let Some(ref cb) = *resize_anim.borrow() {
					let _ = scheduler_anim
						.window
						.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
				}
				return;
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				scheduler_anim.request(cb);
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			scheduler.request(cb);
		}
	});

	on_cleanup(move || stop_cleanup.store(true, Ordering::Relaxed));

	view! {
		<canvas
			node_ref=canvas_ref
			id="heart"
			class="heart-canvas"
			style="display: block; width: 100vw; height: 100vh; background: #000;"
		/>
	}
}
