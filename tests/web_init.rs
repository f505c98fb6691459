use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::window;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn empty_page_binds_nothing_and_survives() {
	let document = window().unwrap().document().unwrap();
	document.body().unwrap().set_inner_html("");
	blog_dom::init(&document);
}

#[wasm_bindgen_test]
fn full_page_wires_every_behavior() {
	let document = window().unwrap().document().unwrap();
	document.body().unwrap().set_inner_html(
		"<main class=\"container\"></main>\
		<article><h2>One</h2><h3>Two</h3></article>\
		<div class=\"reading-progress-bar\"></div>\
		<nav class=\"table-of-contents\"><ul></ul></nav>\
		<form class=\"newsletter-form\"><input type=\"email\"></form>\
		<a href=\"?search\" class=\"search-trigger\">s</a>\
		<div class=\"search-overlay\"><input type=\"search\"></div>\
		<button class=\"close-search\">x</button>\
		<a href=\"#heading-0\">toc link</a>",
	);

	blog_dom::init(&document);

	// The contents pass ran and assigned positional heading ids.
	assert!(document.get_element_by_id("heading-0").is_some());
	assert!(document.get_element_by_id("heading-1").is_some());
	assert_eq!(document.query_selector_all(".table-of-contents ul li").unwrap().length(), 2);
}
