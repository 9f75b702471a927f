use checker_core::FileInfo;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget, FileList};

/// Attaches a listener for the lifetime of the page.
pub(crate) fn listen(
    target: &EventTarget,
    event_name: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    listen_owned(target, event_name, handler)?.forget();
    Ok(())
}

/// Attaches a listener whose closure the caller keeps. The listener must be
/// unreachable (its target removed) before the returned closure is dropped.
pub(crate) fn listen_owned(
    target: &EventTarget,
    event_name: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<Closure<dyn FnMut(Event)>, JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
    Ok(closure)
}

pub(crate) fn file_infos(files: &FileList) -> Vec<FileInfo> {
    (0..files.length())
        .filter_map(|index| files.get(index))
        .map(|file| FileInfo::new(file.name(), file.size() as u64, file.type_()))
        .collect()
}
