//! Custom cursor: a lerp-smoothed ring and dot trailing the pointer.
//!
//! Activates only on fine-pointer devices; on touch screens the component
//! mounts inert and never registers listeners. Hovering an interactive
//! element swells the dot.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlDivElement, PointerEvent};

use crate::motion::clock::FrameClock;
use crate::motion::pointer::{PointerState, SmoothedPointer};

/// Lerp speed of the outer ring; trails with a visible delay.
const RING_SPEED: f64 = 0.15;

/// Lerp speed of the inner dot; snappier than the ring.
const DOT_SPEED: f64 = 0.3;

/// Parking position before the first pointer sample arrives.
const OFFSCREEN: f64 = -100.0;

/// Elements that swell the cursor on hover.
const INTERACTIVE_SELECTOR: &str = "a, button, input, textarea, [data-cursor]";

/// Renders the two cursor layers and drives them from pointer samples.
#[component]
pub fn CustomCursor() -> impl IntoView {
	let ring_ref = NodeRef::<leptos::html::Div>::new();
	let dot_ref = NodeRef::<leptos::html::Div>::new();
	let pointer: Rc<RefCell<PointerState>> = Rc::new(RefCell::new(PointerState::from_client(
		OFFSCREEN, OFFSCREEN, 0.0, 0.0,
	)));
	let hovering = Rc::new(Cell::new(false));
	let clock = Rc::new(FrameClock::new());
	let move_cb: Rc<RefCell<Option<Closure<dyn FnMut(PointerEvent)>>>> =
		Rc::new(RefCell::new(None));
	let over_cb: Rc<RefCell<Option<Closure<dyn FnMut(PointerEvent)>>>> =
		Rc::new(RefCell::new(None));
	let out_cb: Rc<RefCell<Option<Closure<dyn FnMut(PointerEvent)>>>> = Rc::new(RefCell::new(None));

	let (pointer_init, hovering_init, clock_init) =
		(pointer.clone(), hovering.clone(), clock.clone());
	let (move_cb_init, over_cb_init, out_cb_init) =
		(move_cb.clone(), over_cb.clone(), out_cb.clone());

	Effect::new(move |_| {
		let (Some(ring), Some(dot)) = (ring_ref.get(), dot_ref.get()) else {
			return;
		};
		let ring: HtmlDivElement = ring.into();
		let dot: HtmlDivElement = dot.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		// Touch devices keep the native cursor.
		if !has_fine_pointer(&window) {
			return;
		}
		let Some(document) = window.document() else {
			return;
		};

		let pointer_move = pointer_init.clone();
		*move_cb_init.borrow_mut() = Some(Closure::new(move |ev: PointerEvent| {
			let Some(win) = web_sys::window() else {
				return;
			};
			let vw = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
			let vh = win
				.inner_height()
				.ok()
				.and_then(|v| v.as_f64())
				.unwrap_or(0.0);
			*pointer_move.borrow_mut() =
				PointerState::from_client(ev.client_x() as f64, ev.client_y() as f64, vw, vh);
		}));
		if let Some(ref cb) = *move_cb_init.borrow() {
			let _ =
				window.add_event_listener_with_callback("pointermove", cb.as_ref().unchecked_ref());
		}

		let hovering_over = hovering_init.clone();
		*over_cb_init.borrow_mut() = Some(Closure::new(move |ev: PointerEvent| {
			if interactive_target(ev.target()).is_some() {
				hovering_over.set(true);
			}
		}));
		let hovering_out = hovering_init.clone();
		*out_cb_init.borrow_mut() = Some(Closure::new(move |ev: PointerEvent| {
			if interactive_target(ev.related_target()).is_none() {
				hovering_out.set(false);
			}
		}));
		if let Some(ref cb) = *over_cb_init.borrow() {
			let _ = document
				.add_event_listener_with_callback("pointerover", cb.as_ref().unchecked_ref());
		}
		if let Some(ref cb) = *out_cb_init.borrow() {
			let _ = document
				.add_event_listener_with_callback("pointerout", cb.as_ref().unchecked_ref());
		}

		let mut ring_follow = SmoothedPointer::new(OFFSCREEN, OFFSCREEN, RING_SPEED);
		let mut dot_follow = SmoothedPointer::new(OFFSCREEN, OFFSCREEN, DOT_SPEED);
		let (pointer_tick, hovering_tick) = (pointer_init.clone(), hovering_init.clone());
		clock_init.start(move |sample| {
			let target = *pointer_tick.borrow();
			ring_follow.follow(&target);
			dot_follow.follow(&target);
			let (rx, ry) = ring_follow.tick(sample.delta_ms);
			let (dx, dy) = dot_follow.tick(sample.delta_ms);

			let _ = web_sys::HtmlElement::style(&ring)
				.set_property("transform", &translate_centered(rx, ry, 1.0));
			let dot_scale = if hovering_tick.get() { 2.0 } else { 1.0 };
			let _ = web_sys::HtmlElement::style(&dot)
				.set_property("transform", &translate_centered(dx, dy, dot_scale));
		});
	});

	on_cleanup(move || {
		clock.stop();
		let Some(window) = web_sys::window() else {
			return;
		};
		if let Some(cb) = move_cb.borrow_mut().take() {
			let _ = window
				.remove_event_listener_with_callback("pointermove", cb.as_ref().unchecked_ref());
		}
		let Some(document) = window.document() else {
			return;
		};
		if let Some(cb) = over_cb.borrow_mut().take() {
			let _ = document
				.remove_event_listener_with_callback("pointerover", cb.as_ref().unchecked_ref());
		}
		if let Some(cb) = out_cb.borrow_mut().take() {
			let _ = document
				.remove_event_listener_with_callback("pointerout", cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<div
			node_ref=ring_ref
			class="cursor-ring"
			style="position: fixed; top: 0; left: 0; width: 32px; height: 32px; \
				border: 2px solid rgba(255, 255, 255, 0.5); border-radius: 50%; \
				pointer-events: none; z-index: 9998; transform: translate(-100px, -100px);"
		/>
		<div
			node_ref=dot_ref
			class="cursor-dot"
			style="position: fixed; top: 0; left: 0; width: 8px; height: 8px; \
				background: rgb(94, 129, 172); border-radius: 50%; \
				pointer-events: none; z-index: 9999; transform: translate(-100px, -100px); \
				transition: width 0.2s ease-out, height 0.2s ease-out;"
		/>
	}
}

fn has_fine_pointer(window: &web_sys::Window) -> bool {
	window
		.match_media("(pointer: fine)")
		.ok()
		.flatten()
		.map(|list| list.matches())
		.unwrap_or(false)
}

fn interactive_target(target: Option<web_sys::EventTarget>) -> Option<web_sys::Element> {
	target
		.and_then(|t| t.dyn_into::<web_sys::Element>().ok())
		.and_then(|el| el.closest(INTERACTIVE_SELECTOR).ok().flatten())
}

fn translate_centered(x: f64, y: f64, scale: f64) -> String {
	format!("translate({x:.1}px, {y:.1}px) translate(-50%, -50%) scale({scale})")
}
