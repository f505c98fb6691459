use blog_dom::cookies;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{window, HtmlDocument};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn exact_prefix_beats_longer_names() {
	assert_eq!(cookies::lookup("a=1; foobar=2; foo=3", "foo").as_deref(), Some("3"));
	assert_eq!(cookies::lookup("a=1; foobar=2; foo=3", "foobar").as_deref(), Some("2"));
}

#[wasm_bindgen_test]
fn empty_store_is_absent() {
	assert_eq!(cookies::lookup("", "csrftoken"), None);
}

#[wasm_bindgen_test]
fn missing_name_is_absent() {
	assert_eq!(cookies::lookup("a=1; b=2", "c"), None);
}

#[wasm_bindgen_test]
fn values_are_percent_decoded() {
	assert_eq!(cookies::lookup("token=a%20b%2Fc", "token").as_deref(), Some("a b/c"));
}

#[wasm_bindgen_test]
fn reads_the_live_document() {
	let document = window().unwrap().document().unwrap();
	document
		.dyn_ref::<HtmlDocument>()
		.unwrap()
		.set_cookie("blog-dom-test=yes")
		.unwrap();

	assert_eq!(cookies::get(&document, "blog-dom-test").as_deref(), Some("yes"));
	assert_eq!(cookies::get(&document, "blog-dom"), None);
}
