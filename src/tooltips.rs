use js_sys::{Array, Function, Reflect};
use tracing::{debug, trace};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Document;

/// Activates the third-party Bootstrap tooltip widget on every element opted
/// in through `data-bs-toggle="tooltip"`, once.
///
/// A missing `bootstrap` global (or `Tooltip` constructor) skips the whole
/// pass, the same way a missing DOM node skips a behavior.
pub fn init(document: &Document) {
	let constructor = match tooltip_constructor() {
		Some(constructor) => constructor,
		None => {
			debug!("bootstrap.Tooltip unavailable, tooltips skipped");
			return;
		}
	};
	let triggers = match document.query_selector_all("[data-bs-toggle=\"tooltip\"]") {
		Ok(triggers) => triggers,
		Err(_) => return,
	};

	for index in 0..triggers.length() {
		if let Some(node) = triggers.item(index) {
			let args = Array::of1(node.as_ref());
			if let Err(error) = Reflect::construct(&constructor, &args) {
				trace!(?error, "tooltip construction failed");
			}
		}
	}
}

fn tooltip_constructor() -> Option<Function> {
	let bootstrap = Reflect::get(&js_sys::global(), &JsValue::from_str("bootstrap")).ok()?;
	if bootstrap.is_undefined() {
		return None;
	}
	Reflect::get(&bootstrap, &JsValue::from_str("Tooltip")).ok()?.dyn_into().ok()
}
