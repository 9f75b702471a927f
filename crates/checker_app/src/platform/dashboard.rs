//! Result page wiring: score colours, keyword panels and print preparation.

use std::cell::RefCell;
use std::rc::Rc;

use checker_core::dashboard::{parse_score, KeywordKind, KeywordPanels, ScoreBand};
use checker_logging::checker_debug;
use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList};

use super::bootstrap;
use super::events::listen;
use super::ui::constants::{COLLAPSIBLE, PRINT_TRIGGER, SCORE_CIRCLES};
use crate::markup::{COLLAPSE_SHOW_CLASS, PRINT_DELAY_MS};

pub(crate) fn wire(document: &Document) -> Result<(), JsValue> {
    colour_scores(document);
    wire_keyword_toggles(document)?;
    wire_print(document)
}

fn colour_scores(document: &Document) {
    for element in elements(document.query_selector_all(SCORE_CIRCLES).ok()) {
        let text = element.text_content().unwrap_or_default();
        let Some(score) = parse_score(&text) else {
            checker_debug!("Score element {} has no number: {:?}", element.id(), text);
            continue;
        };
        let class_list = element.class_list();
        for class in ScoreBand::from_score(score).css_classes() {
            let _ = class_list.add_1(class);
        }
    }
}

fn wire_keyword_toggles(document: &Document) -> Result<(), JsValue> {
    let mut bound = Vec::new();
    for kind in KeywordKind::ALL {
        let prefix = kind.id_prefix();
        let container = document
            .get_element_by_id(&format!("{prefix}-keywords-container"))
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());
        let button = document.get_element_by_id(&format!("{prefix}-keywords-toggle"));
        if let (Some(container), Some(button)) = (container, button) {
            bound.push((kind, container, button));
        }
    }
    if bound.is_empty() {
        return Ok(());
    }

    let visible = |kind: KeywordKind| {
        bound
            .iter()
            .find(|(k, _, _)| *k == kind)
            .is_some_and(|(_, container, _)| {
                container.style().get_property_value("display").ok().as_deref() != Some("none")
            })
    };
    let panels = Rc::new(RefCell::new(KeywordPanels::new(
        visible(KeywordKind::Matched),
        visible(KeywordKind::Missing),
    )));

    for (kind, container, button) in bound {
        let panels = panels.clone();
        let target = button.clone();
        listen(&button, "click", move |_| {
            let mut panels = panels.borrow_mut();
            let shown = panels.toggle(kind);
            let display = if shown { "block" } else { "none" };
            let _ = container.style().set_property("display", display);
            target.set_text_content(Some(panels.button_label(kind).as_str()));
        })?;
    }
    Ok(())
}

fn wire_print(document: &Document) -> Result<(), JsValue> {
    for trigger in elements(document.query_selector_all(PRINT_TRIGGER).ok()) {
        let document = document.clone();
        listen(&trigger, "click", move |event| {
            event.prevent_default();
            prepare_print(&document);
        })?;
    }
    Ok(())
}

/// Expands every collapsed section, then opens the print dialog once the
/// expansion animation had time to finish.
fn prepare_print(document: &Document) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let opened = bootstrap::show_collapses(&window, document);
    // Without Bootstrap the class alone is what shows a section.
    for section in elements(document.query_selector_all(COLLAPSIBLE).ok()) {
        if !opened.contains(&section) {
            let _ = section.class_list().add_1(COLLAPSE_SHOW_CLASS);
        }
    }
    Timeout::new(PRINT_DELAY_MS, move || {
        let _ = window.print();
    })
    .forget();
}

fn elements(list: Option<NodeList>) -> Vec<Element> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
