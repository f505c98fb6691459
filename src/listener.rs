use wasm_bindgen::{closure::Closure, convert::FromWasmAbi, JsCast};
use web_sys::EventTarget;

/// Registers `handler` for `event` on `target` for the remaining page
/// lifetime.
///
/// The backing [`Closure`] is leaked: every behavior in this crate binds once
/// at page-ready and never unbinds, so the handler's lifetime is the page's.
pub(crate) fn listen<E>(target: &EventTarget, event: &str, handler: impl Fn(E) + 'static)
where
	E: FromWasmAbi + 'static,
{
	let closure = Closure::wrap(Box::new(handler) as Box<dyn Fn(E)>);
	if target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()).is_ok() {
		closure.forget();
	}
}
