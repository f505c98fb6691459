use crate::listener;
use tracing::trace;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Intercepts clicks on every in-page anchor present right now and replaces
/// the default jump with a smooth scroll to the target's top edge.
///
/// Anchors added to the page after this runs are not covered.
pub fn bind(document: &Document) {
	let anchors = match document.query_selector_all("a[href^=\"#\"]") {
		Ok(anchors) => anchors,
		Err(_) => return,
	};
	trace!(count = anchors.length(), "binding in-page anchors");

	for index in 0..anchors.length() {
		let anchor = match anchors.item(index).and_then(|node| node.dyn_into::<Element>().ok()) {
			Some(anchor) => anchor,
			None => continue,
		};
		let document = Document::clone(document);
		let clicked = anchor.clone();
		listener::listen(&anchor, "click", move |event: Event| {
			event.prevent_default();
			let href = match clicked.get_attribute("href") {
				Some(href) => href,
				None => return,
			};
			if let Ok(Some(target)) = document.query_selector(&href) {
				let options = ScrollIntoViewOptions::new();
				options.set_behavior(ScrollBehavior::Smooth);
				options.set_block(ScrollLogicalPosition::Start);
				target.scroll_into_view_with_scroll_into_view_options(&options);
			}
		});
	}
}
