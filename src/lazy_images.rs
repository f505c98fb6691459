use js_sys::Reflect;
use tracing::{trace, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlImageElement, HtmlScriptElement};

/// Fallback for runtimes without native lazy loading.
pub const POLYFILL_URL: &str =
	"https://cdnjs.cloudflare.com/ajax/libs/lazysizes/5.3.2/lazysizes.min.js";

/// Resolves every `img[loading="lazy"]`'s deferred source.
///
/// With native lazy-loading support the `data-src` attribute is copied into
/// `src` right away, leaving the actual deferral to the browser attribute.
/// Without support a single lazysizes polyfill script is injected instead and
/// the sources are left for it to pick up.
pub fn init(document: &Document) {
	let images = match document.query_selector_all("img[loading=\"lazy\"]") {
		Ok(images) => images,
		Err(_) => return,
	};
	if images.length() == 0 {
		trace!("no deferred images");
		return;
	}

	if native_lazy_loading(document) {
		for index in 0..images.length() {
			let image = match images
				.item(index)
				.and_then(|node| node.dyn_into::<HtmlImageElement>().ok())
			{
				Some(image) => image,
				None => continue,
			};
			if let Some(source) = image.get_attribute("data-src") {
				image.set_src(&source);
			}
		}
	} else if let Err(error) = inject_polyfill(document) {
		warn!(?error, "could not inject lazy-loading polyfill");
	}
}

/// Probes a throwaway image element for the `loading` property, equivalent to
/// checking `HTMLImageElement.prototype`.
fn native_lazy_loading(document: &Document) -> bool {
	document.create_element("img").ok().map_or(false, |image| {
		Reflect::has(image.as_ref(), &JsValue::from_str("loading")).unwrap_or(false)
	})
}

fn inject_polyfill(document: &Document) -> Result<(), JsValue> {
	let script: HtmlScriptElement = document.create_element("script")?.dyn_into()?;
	script.set_src(POLYFILL_URL);
	if let Some(body) = document.body() {
		body.append_child(&script)?;
	}
	Ok(())
}
