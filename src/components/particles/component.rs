//! Leptos component wrapping the particle backdrop canvas.
//!
//! The component creates a fullscreen canvas element and wires up a global
//! pointer listener plus a window resize handler. An animation loop runs via
//! the frame clock, advancing the field and redrawing each frame. All
//! recurring callbacks are deregistered when the component unmounts.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, PointerEvent, Window};

use super::field::ParticleField;
use super::render;
use super::theme::BackdropTheme;
use crate::motion::clock::FrameClock;
use crate::motion::pointer::PointerState;

/// Renders the ambient particle field behind the page content.
///
/// The canvas fills the viewport, ignores pointer events, and resizes with
/// the window. Particle positions survive a resize; the field's wrap-around
/// topology redistributes them over time.
#[component]
pub fn ParticlesBackdrop(#[prop(optional)] theme: Option<BackdropTheme>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let field: Rc<RefCell<Option<ParticleField>>> = Rc::new(RefCell::new(None));
	let pointer: Rc<RefCell<PointerState>> = Rc::new(RefCell::new(PointerState::default()));
	let clock = Rc::new(FrameClock::new());
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let pointer_cb: Rc<RefCell<Option<Closure<dyn FnMut(PointerEvent)>>>> =
		Rc::new(RefCell::new(None));

	let (field_init, pointer_init, clock_init, resize_cb_init, pointer_cb_init) = (
		field.clone(),
		pointer.clone(),
		clock.clone(),
		resize_cb.clone(),
		pointer_cb.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = viewport_size(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = context_2d(&canvas) else {
			return;
		};

		let theme = theme.clone().unwrap_or_default();
		*field_init.borrow_mut() = Some(ParticleField::new(&theme.particle, w, h));

		let (field_resize, canvas_resize) = (field_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = viewport_size(&win);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut f) = *field_resize.borrow_mut() {
				f.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let pointer_move = pointer_init.clone();
		*pointer_cb_init.borrow_mut() = Some(Closure::new(move |ev: PointerEvent| {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (vw, vh) = viewport_size(&win);
			*pointer_move.borrow_mut() =
				PointerState::from_client(ev.client_x() as f64, ev.client_y() as f64, vw, vh);
		}));
		if let Some(ref cb) = *pointer_cb_init.borrow() {
			let _ =
				window.add_event_listener_with_callback("pointermove", cb.as_ref().unchecked_ref());
		}

		let (field_tick, pointer_tick) = (field_init.clone(), pointer_init.clone());
		clock_init.start(move |sample| {
			let p = *pointer_tick.borrow();
			if let Some(ref mut f) = *field_tick.borrow_mut() {
				f.update(sample.delta_ms / 1000.0, p.normalized_x, p.normalized_y);
				render::render(f, &ctx, &theme);
			}
		});
	});

	on_cleanup(move || {
		clock.stop();
		let Some(window) = web_sys::window() else {
			return;
		};
		if let Some(cb) = resize_cb.borrow_mut().take() {
			let _ =
				window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
		if let Some(cb) = pointer_cb.borrow_mut().take() {
			let _ = window
				.remove_event_listener_with_callback("pointermove", cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particles-backdrop"
			style="position: fixed; inset: 0; pointer-events: none; z-index: 0; opacity: 0.6;"
		/>
	}
}

fn viewport_size(window: &Window) -> (f64, f64) {
	let w = window
		.inner_width()
		.ok()
		.and_then(|v| v.as_f64())
		.unwrap_or(0.0);
	let h = window
		.inner_height()
		.ok()
		.and_then(|v| v.as_f64())
		.unwrap_or(0.0);
	(w, h)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into().ok())
}
