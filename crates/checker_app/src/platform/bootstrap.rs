//! Bootstrap component initialisation through the page's `bootstrap` global.

use checker_logging::{checker_debug, checker_warn};
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Window};

use super::ui::constants::{COLLAPSIBLE, POPOVER_TRIGGERS, TOOLTIP_TRIGGERS};
use crate::components::{BootstrapComponent, OptionValue};

/// Returns the elements that now carry a Bootstrap tooltip.
pub(crate) fn init_tooltips(window: &Window, document: &Document) -> Vec<Element> {
    construct_all(window, document, TOOLTIP_TRIGGERS, BootstrapComponent::Tooltip)
}

pub(crate) fn init_popovers(window: &Window, document: &Document) {
    construct_all(window, document, POPOVER_TRIGGERS, BootstrapComponent::Popover);
}

/// Opens every collapsible section through its Bootstrap instance so the
/// component state matches what is shown. Returns the sections it opened.
pub(crate) fn show_collapses(window: &Window, document: &Document) -> Vec<Element> {
    construct_all(window, document, COLLAPSIBLE, BootstrapComponent::Collapse)
}

fn construct_all(
    window: &Window,
    document: &Document,
    selector: &str,
    component: BootstrapComponent,
) -> Vec<Element> {
    let Ok(triggers) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    if triggers.length() == 0 {
        return Vec::new();
    }
    let Some(constructor) = component_constructor(window, component) else {
        checker_debug!(
            "bootstrap.{} unavailable; skipping {}",
            component.name(),
            selector
        );
        return Vec::new();
    };

    let options = options_object(component);
    let mut handled = Vec::new();
    for element in (0..triggers.length())
        .filter_map(|index| triggers.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
    {
        let args = match &options {
            Some(options) => Array::of2(&element, options),
            None => Array::of1(&element),
        };
        match instantiate(&constructor, &args, component) {
            Ok(()) => handled.push(element),
            Err(err) => checker_warn!("bootstrap.{} failed: {:?}", component.name(), err),
        }
    }
    handled
}

fn instantiate(
    constructor: &Function,
    args: &Array,
    component: BootstrapComponent,
) -> Result<(), JsValue> {
    let instance = if component.reuses_instance() {
        let factory: Function =
            Reflect::get(constructor, &"getOrCreateInstance".into())?.dyn_into()?;
        factory.apply(constructor, args)?
    } else {
        Reflect::construct(constructor, args)?
    };
    if let Some(method) = component.after_construct() {
        let method: Function = Reflect::get(&instance, &method.into())?.dyn_into()?;
        method.call0(&instance)?;
    }
    Ok(())
}

fn options_object(component: BootstrapComponent) -> Option<JsValue> {
    let options = component.options();
    if options.is_empty() {
        return None;
    }
    let object = Object::new();
    for (key, value) in options {
        let value = match value {
            OptionValue::Bool(flag) => JsValue::from_bool(*flag),
            OptionValue::Str(text) => JsValue::from_str(text),
        };
        let _ = Reflect::set(&object, &JsValue::from_str(key), &value);
    }
    Some(object.into())
}

fn component_constructor(window: &Window, component: BootstrapComponent) -> Option<Function> {
    let bootstrap = Reflect::get(window, &"bootstrap".into()).ok()?;
    if bootstrap.is_undefined() {
        return None;
    }
    Reflect::get(&bootstrap, &component.name().into())
        .ok()?
        .dyn_into::<Function>()
        .ok()
}
