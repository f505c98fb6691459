#![warn(clippy::pedantic)]

//! Scripted interactive behaviors for a blog template, attached to a
//! server-rendered page.
//!
//! Each module wires exactly one UI affordance to the live DOM. The modules
//! share no state and touch disjoint subtrees; a behavior whose required
//! nodes are missing from the page skips itself silently. Call [`init`] once
//! the document is ready (the host page can use the exported
//! `initBehaviors`).

pub mod alerts;
pub mod cookies;
pub mod lazy_images;
mod listener;
pub mod newsletter;
pub mod reading_progress;
pub mod search_overlay;
pub mod share;
pub mod smooth_scroll;
pub mod toc;
pub mod tooltips;

use tracing::debug;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Document;

/// Binds every behavior whose DOM contract the page satisfies.
pub fn init(document: &Document) {
	reading_progress::bind(document);
	newsletter::bind(document);
	toc::generate(document);
	lazy_images::init(document);
	search_overlay::bind(document);
	smooth_scroll::bind(document);
	tooltips::init(document);
	debug!("page behaviors initialized");
}

/// Entry point for the host page; call at `DOMContentLoaded`.
#[wasm_bindgen(js_name = initBehaviors)]
pub fn init_behaviors() {
	if let Some(document) = web_sys::window().and_then(|window| window.document()) {
		init(&document);
	}
}
