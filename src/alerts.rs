use crate::listener;
use gloo_timers::callback::Timeout;
use tracing::trace;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Event};

/// How long a banner stays on the page without manual dismissal.
pub const DISMISS_AFTER_MS: u32 = 5_000;

/// Banner severity, mapped onto the stylesheet's `alert-*` classes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Severity {
	Success,
	Danger,
}

impl Severity {
	fn class_suffix(self) -> &'static str {
		match self {
			Severity::Success => "success",
			Severity::Danger => "danger",
		}
	}
}

/// Inserts a dismissible banner as the first child of `main.container` and
/// removes it after [`DISMISS_AFTER_MS`].
///
/// The close button detaches the banner immediately; the expiry timer firing
/// after that is a no-op, since removing an already-detached node does not
/// fault. Dropped silently when the container is missing.
pub fn show(document: &Document, severity: Severity, message: &str) {
	let container = match document.query_selector("main.container").ok().flatten() {
		Some(container) => container,
		None => {
			trace!("no main container, alert dropped");
			return;
		}
	};
	let alert = match build(document, severity, message) {
		Ok(alert) => alert,
		Err(error) => {
			trace!(?error, "could not build alert");
			return;
		}
	};
	let _ = container.insert_before(&alert, container.first_child().as_ref());
	Timeout::new(DISMISS_AFTER_MS, move || alert.remove()).forget();
}

fn build(document: &Document, severity: Severity, message: &str) -> Result<Element, JsValue> {
	let alert = document.create_element("div")?;
	alert.set_class_name(&format!(
		"alert alert-{} alert-dismissible fade show",
		severity.class_suffix()
	));
	alert.append_with_str_1(message)?;

	let close = document.create_element("button")?;
	close.set_class_name("btn-close");
	close.set_attribute("type", "button")?;
	close.set_attribute("data-bs-dismiss", "alert")?;
	{
		let alert = alert.clone();
		listener::listen(&close, "click", move |_: Event| alert.remove());
	}
	alert.append_child(&close)?;
	Ok(alert)
}
