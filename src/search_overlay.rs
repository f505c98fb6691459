use crate::listener;
use gloo_timers::callback::Timeout;
use tracing::trace;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlInputElement, KeyboardEvent};

/// Delay before focusing the search input, so the opening transition can
/// start first.
pub const FOCUS_DELAY_MS: u32 = 300;

/// Open/closed state is exactly the `active` class on the overlay node.
const ACTIVE: &str = "active";

/// Wires the search overlay's trigger, close control and Escape key.
pub fn bind(document: &Document) {
	let trigger = match document.query_selector(".search-trigger").ok().flatten() {
		Some(trigger) => trigger,
		None => {
			trace!("no search trigger, overlay skipped");
			return;
		}
	};
	let overlay = match document.query_selector(".search-overlay").ok().flatten() {
		Some(overlay) => overlay,
		None => {
			trace!("no search overlay, overlay skipped");
			return;
		}
	};
	let input = document
		.query_selector(".search-overlay input[type=\"search\"]")
		.ok()
		.flatten()
		.and_then(|element| element.dyn_into::<HtmlInputElement>().ok());

	{
		let overlay = overlay.clone();
		listener::listen(&trigger, "click", move |event: Event| {
			event.prevent_default();
			let _ = overlay.class_list().add_1(ACTIVE);
			if let Some(input) = input.clone() {
				Timeout::new(FOCUS_DELAY_MS, move || {
					let _ = input.focus();
				})
				.forget();
			}
		});
	}

	if let Some(close) = document.query_selector(".close-search").ok().flatten() {
		let overlay = overlay.clone();
		listener::listen(&close, "click", move |_: Event| {
			let _ = overlay.class_list().remove_1(ACTIVE);
		});
	}

	listener::listen(document, "keydown", move |event: KeyboardEvent| {
		if event.key() == "Escape" && overlay.class_list().contains(ACTIVE) {
			let _ = overlay.class_list().remove_1(ACTIVE);
		}
	});
}
