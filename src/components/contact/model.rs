//! Wire payload and submission state for the contact form.

use serde::Serialize;

/// JSON body posted to the form relay service.
#[derive(Clone, Debug, Serialize)]
pub struct ContactPayload {
	pub name: String,
	pub email: String,
	pub subject: String,
	pub message: String,
	/// Reply-to mirror of `email`, understood by the relay service.
	#[serde(rename = "_replyto")]
	pub reply_to: String,
}

impl ContactPayload {
	/// Assemble the wire payload from form fields.
	pub fn new(name: String, email: String, subject: String, message: String) -> Self {
		let reply_to = email.clone();
		Self {
			name,
			email,
			subject,
			message,
			reply_to,
		}
	}
}

/// Submission lifecycle surfaced to the form UI.
///
/// One attempt per submission: there is no retry and no offline queue.
/// `Success` auto-clears back to `Idle` after a few seconds; `Error` clears
/// as soon as the visitor edits a field again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
	/// Nothing in flight, nothing to report.
	#[default]
	Idle,
	/// Request in flight; the submit control is disabled.
	Sending,
	/// The relay accepted the submission.
	Success,
	/// The request failed or the relay rejected it.
	Error,
}

impl SubmitStatus {
	/// Map the HTTP outcome of the attempt. Any non-2xx status is a failure;
	/// success is never reported for an error response.
	pub fn from_response_ok(ok: bool) -> Self {
		if ok {
			SubmitStatus::Success
		} else {
			SubmitStatus::Error
		}
	}
}
