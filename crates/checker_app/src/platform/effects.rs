use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use checker_core::{store_theme, Effect, Msg, Notification, PreferenceStore, Theme, ToastId};
use checker_logging::{checker_debug, checker_error, checker_warn};
use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DataTransfer, Document, Element, Event};

use super::app::Controller;
use super::events::listen_owned;
use super::ui::constants::THEME_ATTRIBUTE;
use super::ui::elements::{create, BindError};
use crate::markup::{
    toast_classes, toast_element_id, toast_icon_classes, toast_live_region, TOAST_FADE_MS,
    TOAST_SHOW_CLASS,
};
use crate::toast_registry::ToastRegistry;

/// A shown toast and the close listener that lives exactly as long as it.
struct ToastEntry {
    element: Element,
    close: Element,
    on_close: Closure<dyn FnMut(Event)>,
}

impl ToastEntry {
    fn remove(self) {
        let _ = self
            .close
            .remove_event_listener_with_callback("click", self.on_close.as_ref().unchecked_ref());
        self.element.remove();
    }
}

/// Executes the side effects requested by `update`.
///
/// Submit cancellation is not handled here: only the submit listener holds
/// the event that has to be cancelled.
pub(crate) struct EffectRunner {
    document: Document,
    toast_host: Option<Element>,
    store: RefCell<Box<dyn PreferenceStore>>,
    toasts: RefCell<ToastRegistry<ToastEntry>>,
}

impl EffectRunner {
    pub fn new(
        document: Document,
        toast_host: Option<Element>,
        store: Box<dyn PreferenceStore>,
    ) -> Self {
        Self {
            document,
            toast_host,
            store: RefCell::new(store),
            toasts: RefCell::new(ToastRegistry::new()),
        }
    }

    pub fn run(&self, effect: &Effect, controller: &Rc<Controller>) {
        match effect {
            Effect::ClearFileInput => {
                if let Some(input) = controller.file_input() {
                    input.set_value("");
                }
            }
            Effect::AttachDroppedFile => {
                if let Err(err) = attach_dropped_file(controller) {
                    checker_error!("Could not attach the dropped file: {:?}", err);
                }
            }
            Effect::ShowToast {
                id,
                notification,
                dismiss_after,
            } => {
                if let Err(err) =
                    self.show_toast(*id, notification, *dismiss_after, Rc::downgrade(controller))
                {
                    checker_error!("Failed to show toast {}: {}", id, err);
                }
            }
            Effect::HideToast { id } => self.hide_toast(*id),
            Effect::ApplyTheme(theme) => apply_theme(&self.document, *theme),
            Effect::PersistTheme(theme) => {
                let mut store = self.store.borrow_mut();
                if let Err(err) = store_theme(&mut **store, *theme) {
                    checker_warn!("Theme {} not persisted: {}", theme, err);
                }
            }
            Effect::CancelSubmit | Effect::ProceedSubmit => {}
        }
    }

    fn show_toast(
        &self,
        id: ToastId,
        notification: &Notification,
        dismiss_after: Duration,
        controller: Weak<Controller>,
    ) -> Result<(), BindError> {
        let Some(host) = &self.toast_host else {
            checker_debug!("No toast host; dropping {:?}", notification.title);
            return Ok(());
        };

        let toast = create(&self.document, "div")?;
        toast.set_id(&toast_element_id(id));
        toast.set_class_name(&toast_classes(notification.severity));
        let _ = toast.set_attribute("role", "alert");
        let _ = toast.set_attribute("aria-live", toast_live_region(notification.severity));
        let _ = toast.set_attribute("aria-atomic", "true");

        let row = create(&self.document, "div")?;
        row.set_class_name("d-flex");

        let body = create(&self.document, "div")?;
        body.set_class_name("toast-body");
        let icon = create(&self.document, "i")?;
        icon.set_class_name(&toast_icon_classes(notification.severity));
        let title = create(&self.document, "strong")?;
        title.set_class_name("me-1");
        title.set_text_content(Some(notification.title.as_str()));
        let message = create(&self.document, "span")?;
        message.set_text_content(Some(notification.message.as_str()));

        let close = create(&self.document, "button")?;
        close.set_class_name("btn-close btn-close-white me-2 m-auto");
        let _ = close.set_attribute("type", "button");
        let _ = close.set_attribute("aria-label", "Close");

        let appended = body
            .append_child(&icon)
            .and_then(|_| body.append_child(&title))
            .and_then(|_| body.append_child(&message))
            .and_then(|_| row.append_child(&body))
            .and_then(|_| row.append_child(&close))
            .and_then(|_| toast.append_child(&row))
            .and_then(|_| host.append_child(&toast));
        if appended.is_err() {
            return Err(BindError::Create("toast"));
        }

        // Closing by hand goes through the same message as the timer; the
        // later timer then finds nothing to dismiss.
        let on_close = controller.clone();
        let on_close = listen_owned(&close, "click", move |_| {
            if let Some(controller) = on_close.upgrade() {
                controller.dispatch(Msg::ToastElapsed(id));
            }
        })
        .map_err(|_| BindError::Create("toast close listener"))?;

        let entry = ToastEntry {
            element: toast,
            close,
            on_close,
        };
        if let Some(stale) = self.toasts.borrow_mut().insert(id, entry) {
            stale.remove();
        }

        let millis = u32::try_from(dismiss_after.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || {
            if let Some(controller) = controller.upgrade() {
                controller.dispatch(Msg::ToastElapsed(id));
            }
        })
        .forget();
        Ok(())
    }

    fn hide_toast(&self, id: ToastId) {
        let Some(entry) = self.toasts.borrow_mut().take(id) else {
            return;
        };
        let _ = entry.element.class_list().remove_1(TOAST_SHOW_CLASS);
        // The close listener may be the caller, so it is dropped from the
        // fade timer rather than here.
        Timeout::new(TOAST_FADE_MS, move || entry.remove()).forget();
    }
}

/// Replaces the input's files with the first dropped file alone.
fn attach_dropped_file(controller: &Controller) -> Result<(), JsValue> {
    let (Some(input), Some(file)) = (controller.file_input(), controller.take_pending_drop())
    else {
        return Ok(());
    };
    let transfer = DataTransfer::new()?;
    transfer.items().add_with_file(&file)?;
    input.set_files(transfer.files().as_ref());
    Ok(())
}

pub(crate) fn apply_theme(document: &Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
    }
}
