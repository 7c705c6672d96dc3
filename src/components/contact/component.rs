//! Contact form component and its outbound submission.

use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::model::{ContactPayload, SubmitStatus};

/// How long the success notice stays up before clearing on its own.
const SUCCESS_NOTICE: Duration = Duration::from_secs(5);

/// POST the payload to the relay. Returns whether the response status was
/// in the 2xx range; transport failures bubble as `Err`.
async fn post_payload(endpoint: &str, payload: &ContactPayload) -> Result<bool, JsValue> {
	let body = serde_json::to_string(payload)
		.map_err(|e| JsValue::from_str(&format!("payload serialization: {e}")))?;

	let init = RequestInit::new();
	init.set_method("POST");
	init.set_body(&JsValue::from_str(&body));

	let request = Request::new_with_str_and_init(endpoint, &init)?;
	request.headers().set("Content-Type", "application/json")?;

	let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
	let response: Response = JsFuture::from(window.fetch_with_request(&request))
		.await?
		.dyn_into()?;
	Ok(response.ok())
}

/// Contact form with name/email/subject/message fields.
///
/// A submission is a single attempt against `endpoint`; failure surfaces a
/// generic error notice and the visitor decides whether to try again.
#[component]
pub fn ContactSection(#[prop(into)] endpoint: String) -> impl IntoView {
	let name = RwSignal::new(String::new());
	let email = RwSignal::new(String::new());
	let subject = RwSignal::new(String::new());
	let message = RwSignal::new(String::new());
	let status = RwSignal::new(SubmitStatus::Idle);
	let endpoint = StoredValue::new(endpoint);

	// Editing a field dismisses a lingering success or error notice.
	let edit =
		move |signal: RwSignal<String>, value: String| {
			signal.set(value);
			if status.get_untracked() != SubmitStatus::Sending {
				status.set(SubmitStatus::Idle);
			}
		};

	let on_submit = move |ev: leptos::ev::SubmitEvent| {
		ev.prevent_default();
		if status.get_untracked() == SubmitStatus::Sending {
			return;
		}
		status.set(SubmitStatus::Sending);

		let payload = ContactPayload::new(
			name.get_untracked(),
			email.get_untracked(),
			subject.get_untracked(),
			message.get_untracked(),
		);
		let endpoint = endpoint.get_value();

		spawn_local(async move {
			let next = match post_payload(&endpoint, &payload).await {
				Ok(ok) => SubmitStatus::from_response_ok(ok),
				Err(e) => {
					warn!("folio-motion: contact submission failed: {e:?}");
					SubmitStatus::Error
				}
			};
			status.set(next);

			if next == SubmitStatus::Success {
				name.set(String::new());
				email.set(String::new());
				subject.set(String::new());
				message.set(String::new());
				set_timeout(
					move || {
						if status.get_untracked() == SubmitStatus::Success {
							status.set(SubmitStatus::Idle);
						}
					},
					SUCCESS_NOTICE,
				);
			}
		});
	};

	view! {
		<section id="contact" class="contact-section">
			<h2>"Get in touch"</h2>
			<form class="contact-form" on:submit=on_submit>
				<input
					type="text"
					name="name"
					placeholder="Name"
					required
					prop:value=move || name.get()
					on:input=move |ev| edit(name, event_target_value(&ev))
				/>
				<input
					type="email"
					name="email"
					placeholder="Email"
					required
					prop:value=move || email.get()
					on:input=move |ev| edit(email, event_target_value(&ev))
				/>
				<input
					type="text"
					name="subject"
					placeholder="Subject"
					required
					prop:value=move || subject.get()
					on:input=move |ev| edit(subject, event_target_value(&ev))
				/>
				<textarea
					name="message"
					placeholder="Message"
					rows="6"
					required
					prop:value=move || message.get()
					on:input=move |ev| edit(message, event_target_value(&ev))
				></textarea>
				<button type="submit" disabled=move || status.get() == SubmitStatus::Sending>
					{move || {
						if status.get() == SubmitStatus::Sending { "Sending..." } else { "Send message" }
					}}
				</button>
			</form>
			<Show when=move || status.get() == SubmitStatus::Success>
				<p class="contact-notice contact-notice-success">
					"Thanks for reaching out - I will get back to you soon."
				</p>
			</Show>
			<Show when=move || status.get() == SubmitStatus::Error>
				<p class="contact-notice contact-notice-error">
					"Something went wrong. Please try again."
				</p>
			</Show>
		</section>
	}
}
