use std::rc::Rc;

use chrono::Local;
use medtracker_core::config::CONFIG_ELEMENT_ID;
use medtracker_core::{
    convert_input_to_utc, localize_all, prefill_datetime_inputs, LocalizeReport, PageConfig,
    PageDocument, PageError, ThemeController,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlInputElement, MouseEvent};

use crate::dom::{dom_error, WebDocument, WebElement};
use crate::formatter::LocaleDateFormatter;
use crate::storage::BrowserStore;

pub type PageThemeController = ThemeController<WebElement, BrowserStore>;

/// What [`initialize_page`] set up.
pub struct EnhancedPage {
    pub theme: Rc<PageThemeController>,
    pub timestamps: LocalizeReport,
    pub datetime_inputs: usize,
}

/// Runs `f` once the DOM is parsed: right away if it already is, otherwise
/// on `DOMContentLoaded`.
pub fn on_document_ready<F>(document: &Document, f: F)
where
    F: FnOnce(&Document) + 'static,
{
    if document.ready_state() != "loading" {
        f(document);
        return;
    }

    let ready_document = document.clone();
    let mut pending = Some(f);
    let closure = Closure::wrap(Box::new(move |_e: Event| {
        if let Some(f) = pending.take() {
            f(&ready_document);
        }
    }) as Box<dyn FnMut(Event)>);

    if let Err(e) = document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())
    {
        log::error!("Failed to add DOMContentLoaded listener: {:?}", e);
    }

    // Lives as long as the page
    closure.forget();
}

/// Reads the optional JSON config block, falling back to defaults.
pub fn read_page_config(document: &Document) -> PageConfig {
    let json = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());
    PageConfig::from_json_or_default(json.as_deref())
}

/// Applies the stored theme, wires the toggle, localizes timestamps and
/// prepares datetime inputs. Fails only when the style element cannot be
/// found or created.
pub fn initialize_page(
    document: &Document,
    config: &PageConfig,
) -> Result<EnhancedPage, PageError> {
    let page = WebDocument::new(document.clone());

    let theme = Rc::new(ThemeController::install(
        &page,
        config,
        BrowserStore::local_or_memory(),
    )?);
    wire_theme_toggle(&theme)?;

    let timestamps = localize_all(&page, config, &LocaleDateFormatter);

    let datetime_inputs = prefill_datetime_inputs(&page, config, &Local);
    wire_datetime_inputs(&page, config);

    log::info!(
        "Page enhanced: {} theme, {} timestamps localized",
        theme.current(),
        timestamps.converted
    );

    Ok(EnhancedPage {
        theme,
        timestamps,
        datetime_inputs,
    })
}

fn wire_theme_toggle(theme: &Rc<PageThemeController>) -> Result<(), PageError> {
    let Some(toggle) = theme.toggle_element() else {
        return Ok(());
    };

    let controller = Rc::clone(theme);
    let closure = Closure::wrap(Box::new(move |_e: MouseEvent| {
        controller.toggle();
    }) as Box<dyn FnMut(MouseEvent)>);

    toggle
        .as_element()
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .map_err(dom_error)?;

    closure.forget();
    Ok(())
}

/// Converts each tagged input back to UTC when its form submits.
fn wire_datetime_inputs(page: &WebDocument, config: &PageConfig) {
    for input in page.elements_by_class(&config.datetime_input_class) {
        let Some(form) = input
            .as_element()
            .dyn_ref::<HtmlInputElement>()
            .and_then(|element| element.form())
        else {
            continue;
        };

        let target = input.clone();
        let closure = Closure::wrap(Box::new(move |_e: Event| {
            convert_input_to_utc(&target, &Local);
        }) as Box<dyn FnMut(Event)>);

        if let Err(e) =
            form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())
        {
            log::warn!("Failed to add submit listener: {:?}", e);
        }

        closure.forget();
    }
}
