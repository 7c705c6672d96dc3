//! Intro loading overlay, played once per browser session.
//!
//! The sequence is a data table of tweens: the progress counter sweeps to
//! 100, the title fades and lifts in while the counter is still running,
//! then the whole overlay fades away and the completion callback fires.

use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::motion::clock::FrameClock;
use crate::motion::easing::Easing;
use crate::motion::timeline::{Offset, Timeline, Tween};

fn intro_table() -> Vec<Tween> {
	vec![
		Tween {
			label: "progress",
			from: 0.0,
			to: 100.0,
			duration_ms: 1800.0,
			offset: Offset::FromStart(0.0),
			easing: Easing::EaseInOutCubic,
		},
		Tween {
			label: "title:opacity",
			from: 0.0,
			to: 1.0,
			duration_ms: 600.0,
			offset: Offset::AfterPrev(-400.0),
			easing: Easing::EaseOutCubic,
		},
		Tween {
			label: "title:y",
			from: 24.0,
			to: 0.0,
			duration_ms: 600.0,
			offset: Offset::AfterPrev(-600.0),
			easing: Easing::EaseOutQuart,
		},
		Tween {
			label: "overlay:opacity",
			from: 1.0,
			to: 0.0,
			duration_ms: 500.0,
			offset: Offset::AfterPrev(150.0),
			easing: Easing::EaseOutQuad,
		},
	]
}

/// Fullscreen intro overlay. Invokes `on_complete` exactly once, after the
/// final tween window closes.
#[component]
pub fn LoadingScreen(#[prop(into)] on_complete: Callback<()>) -> impl IntoView {
	let progress = RwSignal::new(0.0_f64);
	let title_opacity = RwSignal::new(0.0_f64);
	let title_y = RwSignal::new(24.0_f64);
	let overlay_opacity = RwSignal::new(1.0_f64);

	let clock = Rc::new(FrameClock::new());
	let clock_run = clock.clone();
	let completed = Rc::new(Cell::new(false));

	Effect::new(move |_| {
		let mut timeline = Timeline::from_table(&intro_table());
		timeline.start();
		let clock_tick = clock_run.clone();
		let completed = completed.clone();
		clock_run.start(move |sample| {
			timeline.tick(sample.delta_ms);
			progress.set(timeline.value_of("progress").unwrap_or(0.0));
			title_opacity.set(timeline.value_of("title:opacity").unwrap_or(1.0));
			title_y.set(timeline.value_of("title:y").unwrap_or(0.0));
			overlay_opacity.set(timeline.value_of("overlay:opacity").unwrap_or(1.0));

			if timeline.finished() && !completed.get() {
				completed.set(true);
				clock_tick.stop();
				on_complete.run(());
			}
		});
	});

	on_cleanup(move || {
		clock.stop();
	});

	view! {
		<div
			class="loading-screen"
			style="position: fixed; inset: 0; z-index: 10000; display: flex; \
				flex-direction: column; align-items: center; justify-content: center; \
				background: rgb(22, 27, 34);"
			style:opacity=move || overlay_opacity.get().to_string()
		>
			<h1
				class="loading-title"
				style="color: rgba(255, 255, 255, 0.92); font-size: 2rem; margin: 0;"
				style:opacity=move || title_opacity.get().to_string()
				style:transform=move || format!("translateY({:.1}px)", title_y.get())
			>
				"Portfolio"
			</h1>
			<div
				class="loading-progress"
				style="color: rgba(255, 255, 255, 0.5); font-variant-numeric: tabular-nums; \
					margin-top: 1rem;"
			>
				{move || format!("{:.0}%", progress.get())}
			</div>
		</div>
	}
}
