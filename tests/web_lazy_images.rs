use blog_dom::lazy_images;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{window, Document, HtmlImageElement};

wasm_bindgen_test_configure!(run_in_browser);

fn native_support(document: &Document) -> bool {
	let probe = document.create_element("img").unwrap();
	js_sys::Reflect::has(probe.as_ref(), &JsValue::from_str("loading")).unwrap()
}

#[wasm_bindgen_test]
fn deferred_sources_resolve_or_the_polyfill_loads() {
	let document = window().unwrap().document().unwrap();
	document.body().unwrap().set_inner_html(
		"<img loading=\"lazy\" data-src=\"/logo.png\">\
		<img loading=\"lazy\">",
	);

	lazy_images::init(&document);

	if native_support(&document) {
		let image = document
			.query_selector("img[data-src]")
			.unwrap()
			.unwrap()
			.dyn_into::<HtmlImageElement>()
			.unwrap();
		assert!(image.src().ends_with("/logo.png"));
		assert!(document.query_selector("script[src*=\"lazysizes\"]").unwrap().is_none());
	} else {
		let script = document.query_selector("script[src*=\"lazysizes\"]").unwrap();
		assert!(script.is_some());
	}
}

#[wasm_bindgen_test]
fn images_without_a_deferred_source_are_untouched() {
	let document = window().unwrap().document().unwrap();
	document
		.body()
		.unwrap()
		.set_inner_html("<img loading=\"lazy\" id=\"plain\">");

	lazy_images::init(&document);

	let image = document.get_element_by_id("plain").unwrap();
	assert!(image.get_attribute("src").is_none());
}

#[wasm_bindgen_test]
fn no_deferred_images_means_no_polyfill() {
	let document = window().unwrap().document().unwrap();
	document.body().unwrap().set_inner_html("<img src=\"/eager.png\">");

	lazy_images::init(&document);
	assert!(document.query_selector("script[src*=\"lazysizes\"]").unwrap().is_none());
}
