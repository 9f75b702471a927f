use std::cell::RefCell;
use std::rc::Rc;

use checker_core::{
    resolve_theme, update, AppState, AppViewModel, CheckerSettings, Effect, Msg,
};
use checker_logging::{checker_debug, checker_error, checker_info, checker_warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, DragEvent, Element, Event, File, HtmlInputElement, Window};

use super::effects::{apply_theme, EffectRunner};
use super::events::{file_infos, listen};
use super::persistence::open_preference_store;
use super::ui::constants::{PREFERS_DARK_QUERY, SCRIPT_SETTINGS};
use super::ui::elements::{toast_container, BindError, ThemeToggleElements, UploadElements};
use super::{bootstrap, dashboard, ui};

pub(crate) fn run_app() {
    checker_logging::initialize_for_browser();

    // A module loaded from <head> runs before the body exists.
    let loading = web_sys::window()
        .and_then(|window| window.document())
        .filter(|document| document.ready_state() == "loading");
    match loading {
        Some(document) => {
            let waited = listen(&document, "DOMContentLoaded", |_| start_logged());
            if let Err(err) = waited {
                checker_error!("Could not wait for DOMContentLoaded: {:?}", err);
            }
        }
        None => start_logged(),
    }
}

fn start_logged() {
    if let Err(err) = start() {
        checker_error!("Resume checker failed to start: {:?}", err);
    }
}

fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let settings = load_settings(&document);
    let store = open_preference_store(&window);
    let theme = resolve_theme(store.as_ref(), os_prefers_dark(&window));
    apply_theme(&document, theme);
    checker_info!("Resume checker starting with theme {}", theme);

    let upload = bind_optional("upload workflow", UploadElements::bind(&document));
    let theme_toggle = bind_optional(
        "theme toggle",
        ThemeToggleElements::bind_or_create(&document),
    );
    let toast_host = bind_optional("notifications", toast_container(&document));

    let controller = Rc::new(Controller {
        state: RefCell::new(AppState::with_settings(settings, theme)),
        upload,
        theme_toggle,
        runner: EffectRunner::new(document.clone(), toast_host, store),
        pending_drop: RefCell::new(None),
    });
    controller.render(&controller.state.borrow().view());

    wire_upload(&controller)?;
    wire_theme_toggle(&controller)?;
    dashboard::wire(&document)?;

    // After the toggle exists so it gets a tooltip too.
    let tooltips = bootstrap::init_tooltips(&window, &document);
    if let Some(elements) = &controller.theme_toggle {
        let button: &Element = elements.button.as_ref();
        elements.tooltip_ready.set(tooltips.iter().any(|owned| owned == button));
    }
    bootstrap::init_popovers(&window, &document);
    Ok(())
}

/// Owns the workflow state and every bound element for the page lifetime.
pub(crate) struct Controller {
    state: RefCell<AppState>,
    upload: Option<UploadElements>,
    theme_toggle: Option<ThemeToggleElements>,
    runner: EffectRunner,
    /// First file of the drop being dispatched, held until `AttachDroppedFile` runs.
    pending_drop: RefCell<Option<File>>,
}

impl Controller {
    /// Runs one message through `update`, re-renders if needed and executes
    /// the resulting effects. Returns the effects so event listeners can act
    /// on the ones tied to their event.
    pub(crate) fn dispatch(self: &Rc<Self>, msg: Msg) -> Vec<Effect> {
        let (effects, maybe_view) = {
            let mut guard = self.state.borrow_mut();
            let state = std::mem::take(&mut *guard);
            let (mut state, effects) = update(state, msg);
            let maybe_view = state.consume_dirty().then(|| state.view());
            *guard = state;
            (effects, maybe_view)
        };

        if let Some(view) = maybe_view {
            self.render(&view);
        }
        for effect in &effects {
            self.runner.run(effect, self);
        }
        effects
    }

    pub(crate) fn file_input(&self) -> Option<&HtmlInputElement> {
        self.upload.as_ref().map(|elements| &elements.file_input)
    }

    pub(crate) fn take_pending_drop(&self) -> Option<File> {
        self.pending_drop.borrow_mut().take()
    }

    fn render(&self, view: &AppViewModel) {
        if let Some(elements) = &self.upload {
            ui::render::render_upload(elements, view);
        }
        if let Some(elements) = &self.theme_toggle {
            ui::render::render_theme_control(elements, view.theme_control);
        }
    }
}

fn wire_upload(controller: &Rc<Controller>) -> Result<(), JsValue> {
    let Some(elements) = &controller.upload else {
        return Ok(());
    };

    let weak = Rc::downgrade(controller);
    let input = elements.file_input.clone();
    listen(&elements.file_input, "change", move |_| {
        let Some(controller) = weak.upgrade() else {
            return;
        };
        let chosen = input
            .files()
            .and_then(|files| file_infos(&files).into_iter().next());
        controller.dispatch(match chosen {
            Some(file) => Msg::FileChosen(file),
            None => Msg::FileSelectionCleared,
        });
    })?;

    for event_name in ["dragenter", "dragover"] {
        let weak = Rc::downgrade(controller);
        listen(&elements.drop_zone, event_name, move |event| {
            suppress_default(&event);
            if let Some(controller) = weak.upgrade() {
                controller.dispatch(Msg::DragEntered);
            }
        })?;
    }

    let weak = Rc::downgrade(controller);
    listen(&elements.drop_zone, "dragleave", move |event| {
        suppress_default(&event);
        if let Some(controller) = weak.upgrade() {
            controller.dispatch(Msg::DragLeft);
        }
    })?;

    let weak = Rc::downgrade(controller);
    listen(&elements.drop_zone, "drop", move |event| {
        suppress_default(&event);
        let Some(controller) = weak.upgrade() else {
            return;
        };
        let files = event
            .dyn_ref::<DragEvent>()
            .and_then(DragEvent::data_transfer)
            .and_then(|transfer| transfer.files());
        let dropped = match files {
            Some(files) => {
                *controller.pending_drop.borrow_mut() = files.get(0);
                file_infos(&files)
            }
            None => Vec::new(),
        };
        controller.dispatch(Msg::FilesDropped(dropped));
        controller.pending_drop.borrow_mut().take();
    })?;

    // Clicking the zone opens the chooser, unless the click came from the input.
    let input = elements.file_input.clone();
    listen(&elements.drop_zone, "click", move |event| {
        let from_input = event
            .target()
            .is_some_and(|target| target.dyn_ref::<HtmlInputElement>().is_some());
        if !from_input {
            input.click();
        }
    })?;

    let weak = Rc::downgrade(controller);
    let description = elements.description.clone();
    listen(&elements.form, "submit", move |event| {
        let Some(controller) = weak.upgrade() else {
            return;
        };
        let effects = controller.dispatch(Msg::SubmitAttempted {
            description: description.value(),
        });
        if effects.contains(&Effect::CancelSubmit) {
            event.prevent_default();
        } else {
            checker_debug!("Submitting analyze form");
        }
    })?;

    Ok(())
}

fn wire_theme_toggle(controller: &Rc<Controller>) -> Result<(), JsValue> {
    let Some(elements) = &controller.theme_toggle else {
        return Ok(());
    };
    let weak = Rc::downgrade(controller);
    listen(&elements.button, "click", move |_| {
        if let Some(controller) = weak.upgrade() {
            controller.dispatch(Msg::ThemeToggled);
        }
    })
}

fn suppress_default(event: &Event) {
    event.prevent_default();
    event.stop_propagation();
}

fn load_settings(document: &Document) -> CheckerSettings {
    let Some(raw) = document
        .get_element_by_id(SCRIPT_SETTINGS)
        .and_then(|element| element.text_content())
    else {
        return CheckerSettings::default();
    };
    match CheckerSettings::from_json(&raw) {
        Ok(settings) => {
            checker_info!("Loaded page settings: {:?}", settings);
            settings
        }
        Err(err) => {
            checker_warn!("Using default settings: {}", err);
            CheckerSettings::default()
        }
    }
}

fn os_prefers_dark(window: &Window) -> Option<bool> {
    window
        .match_media(PREFERS_DARK_QUERY)
        .ok()
        .flatten()
        .map(|query| query.matches())
}

fn bind_optional<T>(feature: &str, result: Result<T, BindError>) -> Option<T> {
    match result {
        Ok(bound) => Some(bound),
        Err(err) => {
            checker_info!("{} not wired on this page: {}", feature, err);
            None
        }
    }
}
