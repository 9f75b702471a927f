use checker_core::{AppViewModel, FilePanelView, ThemeControlView};
use web_sys::Element;

use super::elements::{ThemeToggleElements, UploadElements};
use crate::markup::{
    status_classes, tooltip_attributes, DROP_HIGHLIGHT_CLASS, HIDDEN_CLASS, SUBMIT_BUSY_HTML,
};

pub(crate) fn render_upload(elements: &UploadElements, view: &AppViewModel) {
    match &view.file_panel {
        FilePanelView::Placeholder => {
            set_hidden(&elements.placeholder, false);
            set_hidden(&elements.preview, true);
            elements.file_name.set_text_content(None);
            let _ = elements.file_name.remove_attribute("title");
        }
        FilePanelView::Preview { name, size_label } => {
            elements.file_name.set_text_content(Some(name.as_str()));
            let _ = elements.file_name.set_attribute("title", size_label);
            set_hidden(&elements.placeholder, true);
            set_hidden(&elements.preview, false);
        }
    }

    let _ = elements
        .drop_zone
        .class_list()
        .toggle_with_force(DROP_HIGHLIGHT_CLASS, view.drop_zone_highlighted);

    // The busy label is only ever written once; there is no way back.
    elements.submit_button.set_disabled(!view.submit.enabled);
    if view.submit.busy {
        elements.submit_button.set_inner_html(SUBMIT_BUSY_HTML);
        let _ = elements.submit_button.set_attribute("aria-busy", "true");
    }
    set_hidden(&elements.progress, !view.progress_visible);

    match &view.status {
        Some(status) => {
            elements.status.set_text_content(Some(status.text.as_str()));
            elements
                .status
                .set_class_name(&status_classes(status.severity));
        }
        None => {
            elements.status.set_text_content(None);
            elements.status.set_class_name(&format!("form-text {HIDDEN_CLASS}"));
        }
    }
}

pub(crate) fn render_theme_control(elements: &ThemeToggleElements, control: ThemeControlView) {
    elements.icon.set_class_name(&format!("bi {}", control.icon));
    for (name, value) in tooltip_attributes(control.tooltip, elements.tooltip_ready.get()) {
        let _ = elements.button.set_attribute(name, value);
    }
}

fn set_hidden(element: &Element, hidden: bool) {
    let _ = element.class_list().toggle_with_force(HIDDEN_CLASS, hidden);
}
