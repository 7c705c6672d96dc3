// Host-side tests for the contact form's wire payload and status mapping.
// The main crate targets WASM, so we include the pure-Rust module directly.

#![allow(dead_code)]
#![allow(unused_crate_dependencies)]
mod model {
	include!("../src/components/contact/model.rs");
}

use model::{ContactPayload, SubmitStatus};

#[test]
fn payload_mirrors_email_into_replyto() {
	let payload = ContactPayload::new(
		"Ada".to_string(),
		"ada@example.com".to_string(),
		"Hello".to_string(),
		"Nice site".to_string(),
	);
	let json = serde_json::to_value(&payload).expect("payload serializes");

	assert_eq!(json["name"], "Ada");
	assert_eq!(json["email"], "ada@example.com");
	assert_eq!(json["subject"], "Hello");
	assert_eq!(json["message"], "Nice site");
	assert_eq!(json["_replyto"], "ada@example.com");
	assert!(
		json.get("reply_to").is_none(),
		"field must serialize under the relay's name only"
	);
}

#[test]
fn server_error_maps_to_error_never_success() {
	// An HTTP 500 response has ok == false.
	assert_eq!(SubmitStatus::from_response_ok(false), SubmitStatus::Error);
	assert_ne!(SubmitStatus::from_response_ok(false), SubmitStatus::Success);
}

#[test]
fn accepted_response_maps_to_success() {
	assert_eq!(SubmitStatus::from_response_ok(true), SubmitStatus::Success);
}

#[test]
fn status_starts_idle() {
	assert_eq!(SubmitStatus::default(), SubmitStatus::Idle);
}
