use crate::listener;
use tracing::trace;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement};

/// Scroll progress through the content region as a percentage in `[0, 100]`.
///
/// `content_height - viewport_height` is the scrollable distance. Content no
/// taller than the viewport has nothing left to scroll and counts as fully
/// read, so the division never sees a non-positive denominator.
#[must_use]
pub fn progress_percent(scrolled: f64, content_height: f64, viewport_height: f64) -> f64 {
	let scrollable = content_height - viewport_height;
	if scrollable <= 0.0 {
		return 100.0;
	}
	(scrolled / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Drives `.reading-progress-bar`'s width from the window scroll position.
pub fn bind(document: &Document) {
	let article = match document.query_selector("article").ok().flatten() {
		Some(article) => article,
		None => {
			trace!("no article region, reading progress skipped");
			return;
		}
	};
	let bar = match document
		.query_selector(".reading-progress-bar")
		.ok()
		.flatten()
		.and_then(|element| element.dyn_into::<HtmlElement>().ok())
	{
		Some(bar) => bar,
		None => {
			trace!("no progress bar, reading progress skipped");
			return;
		}
	};
	let window = match web_sys::window() {
		Some(window) => window,
		None => return,
	};

	let scroll_window = window.clone();
	listener::listen(&window, "scroll", move |_: Event| {
		let scrolled = scroll_window.scroll_y().unwrap_or(0.0);
		let viewport = scroll_window
			.inner_height()
			.ok()
			.and_then(|height| height.as_f64())
			.unwrap_or(0.0);
		let progress = progress_percent(scrolled, f64::from(article.client_height()), viewport);
		let _ = bar.style().set_property("width", &format!("{}%", progress));
	});
}
