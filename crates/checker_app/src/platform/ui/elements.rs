//! Typed bindings for every element the upload workflow touches.
//!
//! Binding happens once at start-up. A page that lacks one of the required
//! elements gets a `BindError` and that feature is simply not wired.

use std::cell::Cell;

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement,
};

use super::constants::*;

#[derive(Debug, Error)]
pub(crate) enum BindError {
    #[error("element {0:?} not found")]
    Missing(&'static str),
    #[error("element {0:?} has an unexpected type")]
    WrongType(&'static str),
    #[error("could not create {0:?}")]
    Create(&'static str),
}

pub(crate) struct UploadElements {
    pub form: HtmlFormElement,
    pub file_input: HtmlInputElement,
    pub description: HtmlTextAreaElement,
    pub submit_button: HtmlButtonElement,
    pub placeholder: Element,
    pub preview: Element,
    pub file_name: Element,
    pub drop_zone: HtmlElement,
    pub status: Element,
    pub progress: Element,
}

impl UploadElements {
    pub fn bind(document: &Document) -> Result<Self, BindError> {
        let form: HtmlFormElement = cast(query(document, ANALYZE_FORM)?, ANALYZE_FORM)?;
        let submit_button = form
            .query_selector(SUBMIT_BUTTON)
            .ok()
            .flatten()
            .ok_or(BindError::Missing(SUBMIT_BUTTON))?;

        Ok(Self {
            submit_button: cast(submit_button, SUBMIT_BUTTON)?,
            file_input: cast(by_id(document, INPUT_RESUME)?, INPUT_RESUME)?,
            description: cast(
                by_id(document, TEXTAREA_JOB_DESCRIPTION)?,
                TEXTAREA_JOB_DESCRIPTION,
            )?,
            placeholder: by_id(document, UPLOAD_PLACEHOLDER)?,
            preview: by_id(document, UPLOAD_PREVIEW)?,
            file_name: by_id(document, LABEL_FILE_NAME)?,
            drop_zone: cast(by_id(document, DROP_ZONE)?, DROP_ZONE)?,
            status: by_id(document, LABEL_STATUS)?,
            progress: by_id(document, PROGRESS_ANALYSIS)?,
            form,
        })
    }
}

/// The navbar toggle: reused when the template ships one, created otherwise.
pub(crate) struct ThemeToggleElements {
    pub button: HtmlButtonElement,
    pub icon: Element,
    /// Set once a Bootstrap tooltip owns the button's tooltip text.
    pub tooltip_ready: Cell<bool>,
}

impl ThemeToggleElements {
    pub fn bind_or_create(document: &Document) -> Result<Self, BindError> {
        if let Ok(existing) = by_id(document, BUTTON_THEME_TOGGLE) {
            let button: HtmlButtonElement = cast(existing, BUTTON_THEME_TOGGLE)?;
            let icon = match button.query_selector("i").ok().flatten() {
                Some(icon) => icon,
                None => append_icon(document, &button)?,
            };
            return Ok(Self::new(button, icon));
        }

        let navbar = query(document, NAVBAR)?;
        let host = navbar
            .query_selector(NAVBAR_CONTAINER)
            .ok()
            .flatten()
            .unwrap_or(navbar);

        let button: HtmlButtonElement = cast(create(document, "button")?, BUTTON_THEME_TOGGLE)?;
        button.set_id(BUTTON_THEME_TOGGLE);
        button.set_type("button");
        button.set_class_name("btn btn-link nav-link ms-auto px-2");
        let _ = button.set_attribute("data-bs-toggle", "tooltip");
        let _ = button.set_attribute("data-bs-placement", "bottom");
        let icon = append_icon(document, &button)?;
        host.append_child(&button)
            .map_err(|_| BindError::Create(BUTTON_THEME_TOGGLE))?;

        Ok(Self::new(button, icon))
    }

    fn new(button: HtmlButtonElement, icon: Element) -> Self {
        Self {
            button,
            icon,
            tooltip_ready: Cell::new(false),
        }
    }
}

/// Container toasts are appended to; created at the end of `<body>` if absent.
pub(crate) fn toast_container(document: &Document) -> Result<Element, BindError> {
    if let Ok(existing) = by_id(document, TOAST_CONTAINER) {
        return Ok(existing);
    }
    let body = document.body().ok_or(BindError::Missing("body"))?;
    let container = create(document, "div")?;
    container.set_id(TOAST_CONTAINER);
    container.set_class_name("toast-container position-fixed top-0 end-0 p-3");
    body.append_child(&container)
        .map_err(|_| BindError::Create(TOAST_CONTAINER))?;
    Ok(container)
}

pub(crate) fn by_id(document: &Document, id: &'static str) -> Result<Element, BindError> {
    document.get_element_by_id(id).ok_or(BindError::Missing(id))
}

fn query(document: &Document, selector: &'static str) -> Result<Element, BindError> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or(BindError::Missing(selector))
}

fn cast<T: JsCast>(element: Element, name: &'static str) -> Result<T, BindError> {
    element.dyn_into::<T>().map_err(|_| BindError::WrongType(name))
}

pub(crate) fn create(document: &Document, tag: &'static str) -> Result<Element, BindError> {
    document
        .create_element(tag)
        .map_err(|_| BindError::Create(tag))
}

fn append_icon(document: &Document, button: &HtmlButtonElement) -> Result<Element, BindError> {
    let icon = create(document, "i")?;
    button
        .append_child(&icon)
        .map_err(|_| BindError::Create("i"))?;
    Ok(icon)
}
