use crate::{
	alerts::{self, Severity},
	cookies, listener,
};
use gloo_net::http::Request;
use serde::Serialize;
use tracing::{trace, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, HtmlFormElement, HtmlInputElement};

pub const SUBSCRIBE_ENDPOINT: &str = "/newsletter/subscribe/";
pub const CSRF_COOKIE: &str = "csrftoken";

#[derive(Serialize)]
struct Subscription<'a> {
	email: &'a str,
}

/// How one subscription attempt settled, as far as the page cares.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
	/// OK-range response.
	Subscribed,
	/// The server answered outside the OK range.
	Rejected,
	/// The request never completed.
	TransportFailed,
}

/// Intercepts `.newsletter-form` submission and turns it into a JSON POST.
///
/// Each submit event spawns exactly one request; an in-flight request is not
/// cancelled or deduplicated by a second submission.
pub fn bind(document: &Document) {
	let form = match document
		.query_selector(".newsletter-form")
		.ok()
		.flatten()
		.and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
	{
		Some(form) => form,
		None => {
			trace!("no newsletter form, subscription handling skipped");
			return;
		}
	};

	let document = Document::clone(document);
	let handler_form = form.clone();
	listener::listen(&form, "submit", move |event: Event| {
		event.prevent_default();
		let email = match email_input(&handler_form).map(|input| input.value()) {
			Some(email) => email,
			None => return,
		};
		let document = document.clone();
		let form = handler_form.clone();
		spawn_local(async move {
			let outcome = subscribe(&document, &email).await;
			settle(&document, &form, outcome);
		});
	});
}

fn email_input(form: &HtmlFormElement) -> Option<HtmlInputElement> {
	form.query_selector("input[type=\"email\"]")
		.ok()
		.flatten()?
		.dyn_into()
		.ok()
}

/// POSTs `email` to [`SUBSCRIBE_ENDPOINT`], attaching the CSRF token from the
/// [`CSRF_COOKIE`] cookie when present.
pub async fn subscribe(document: &Document, email: &str) -> Outcome {
	let mut builder = Request::post(SUBSCRIBE_ENDPOINT).header("Content-Type", "application/json");
	if let Some(token) = cookies::get(document, CSRF_COOKIE) {
		builder = builder.header("X-CSRFToken", &token);
	}
	let request = match builder.json(&Subscription { email }) {
		Ok(request) => request,
		Err(error) => {
			warn!(%error, "could not encode subscription body");
			return Outcome::TransportFailed;
		}
	};
	match request.send().await {
		Ok(response) if response.ok() => Outcome::Subscribed,
		Ok(response) => {
			trace!(status = response.status(), "subscription rejected");
			Outcome::Rejected
		}
		Err(error) => {
			warn!(%error, "subscription request failed");
			Outcome::TransportFailed
		}
	}
}

/// Applies a settled outcome to the page: exactly one banner, plus a form
/// reset on success.
pub fn settle(document: &Document, form: &HtmlFormElement, outcome: Outcome) {
	match outcome {
		Outcome::Subscribed => {
			alerts::show(document, Severity::Success, "Thank you for subscribing!");
			form.reset();
		}
		Outcome::Rejected => {
			alerts::show(document, Severity::Danger, "Subscription failed. Please try again.");
		}
		Outcome::TransportFailed => {
			alerts::show(document, Severity::Danger, "An error occurred. Please try again later.");
		}
	}
}
