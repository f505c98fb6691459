use tracing::trace;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

/// Builds the table of contents from the content region's `h2`/`h3` headings.
///
/// Heading `i` (document order) gets the id `heading-{i}` and one link in
/// `.table-of-contents ul`; entries from `h3` headings are indented. Running
/// this twice appends a second copy of every entry, so [`crate::init`] calls
/// it exactly once.
pub fn generate(document: &Document) {
	let article = match document.query_selector("article").ok().flatten() {
		Some(article) => article,
		None => {
			trace!("no article region, table of contents skipped");
			return;
		}
	};
	let toc = match document.query_selector(".table-of-contents ul").ok().flatten() {
		Some(toc) => toc,
		None => {
			trace!("no contents list, table of contents skipped");
			return;
		}
	};
	let headings = match article.query_selector_all("h2, h3") {
		Ok(headings) => headings,
		Err(_) => return,
	};

	for index in 0..headings.length() {
		let heading = match headings.item(index).and_then(|node| node.dyn_into::<Element>().ok()) {
			Some(heading) => heading,
			None => continue,
		};
		if let Err(error) = append_entry(document, &toc, &heading, index) {
			trace!(?error, index, "contents entry skipped");
		}
	}
}

fn append_entry(document: &Document, toc: &Element, heading: &Element, index: u32) -> Result<(), JsValue> {
	let id = format!("heading-{}", index);
	heading.set_id(&id);

	let item = document.create_element("li")?;
	let link = document.create_element("a")?;
	link.set_attribute("href", &format!("#{}", id))?;
	link.set_text_content(heading.text_content().as_deref());
	if heading.tag_name().eq_ignore_ascii_case("h3") {
		if let Some(item) = item.dyn_ref::<HtmlElement>() {
			item.style().set_property("padding-left", "1rem")?;
		}
	}
	item.append_child(&link)?;
	toc.append_child(&item)?;
	Ok(())
}
