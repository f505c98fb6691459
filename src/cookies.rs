use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlDocument};

/// Looks up `name` in the document's cookie store.
///
/// Read-only; this crate never writes cookies.
#[must_use]
pub fn get(document: &Document, name: &str) -> Option<String> {
	let cookie_string = document.dyn_ref::<HtmlDocument>()?.cookie().ok()?;
	lookup(&cookie_string, name)
}

/// Finds `name` in a raw `;`-separated cookie string.
///
/// Each pair is trimmed and matched against the exact prefix `{name}=`, so
/// `foo` never matches inside `foobar`. Returns the percent-decoded value of
/// the first match, or the raw value where decoding fails.
#[must_use]
pub fn lookup(cookie_string: &str, name: &str) -> Option<String> {
	if cookie_string.is_empty() {
		return None;
	}
	for pair in cookie_string.split(';') {
		let value = match pair.trim().strip_prefix(name).and_then(|rest| rest.strip_prefix('=')) {
			Some(value) => value,
			None => continue,
		};
		return Some(match urlencoding::decode(value) {
			Ok(decoded) => decoded.into_owned(),
			Err(_) => value.to_owned(),
		});
	}
	None
}
