use tracing::debug;
use urlencoding::encode;
use wasm_bindgen::prelude::wasm_bindgen;

/// Popup geometry for every share intent.
pub const POPUP_FEATURES: &str = "width=600,height=400";

/// Builds the share-intent URL for a platform tag, with the page URL and
/// title percent-encoded into it.
///
/// Unknown platforms yield `None` rather than a half-built URL.
#[must_use]
pub fn share_url(platform: &str, page_url: &str, title: &str) -> Option<String> {
	let url = encode(page_url);
	let title = encode(title);
	match platform {
		"twitter" => Some(format!("https://twitter.com/intent/tweet?url={}&text={}", url, title)),
		"facebook" => Some(format!("https://www.facebook.com/sharer/sharer.php?u={}", url)),
		"linkedin" => Some(format!(
			"https://www.linkedin.com/shareArticle?mini=true&url={}&title={}",
			url, title
		)),
		_ => None,
	}
}

/// Opens the platform's share intent for the current page in a fixed-size
/// popup.
///
/// Exported so the template's `onclick` hooks can call it directly. Unknown
/// platforms are an explicit no-op.
#[wasm_bindgen(js_name = shareArticle)]
pub fn share_article(platform: &str) {
	let window = match web_sys::window() {
		Some(window) => window,
		None => return,
	};
	let document = match window.document() {
		Some(document) => document,
		None => return,
	};
	let href = match window.location().href() {
		Ok(href) => href,
		Err(_) => return,
	};
	let intent = match share_url(platform, &href, &document.title()) {
		Some(intent) => intent,
		None => {
			debug!(platform, "unknown share platform, nothing opened");
			return;
		}
	};
	let _ = window.open_with_url_and_target_and_features(&intent, "_blank", POPUP_FEATURES);
}
