use chrono::NaiveDate;
use foundation::{DateRange, format_date};
use storage::Theme;
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, EventTarget, HtmlButtonElement, HtmlInputElement};

pub const SHOW_ALL_BUTTON: &str = "show-all-btn";
pub const START_DATE_INPUT: &str = "start-date";
pub const END_DATE_INPUT: &str = "end-date";
pub const FILTER_BUTTON: &str = "filter-date-btn";
pub const PREV_BUTTON: &str = "prev-btn";
pub const NEXT_BUTTON: &str = "next-btn";
pub const THEME_TOGGLE: &str = "theme-toggle";

pub fn document() -> Result<Document, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Element `id` as `T`. Absent or mistyped elements are logged and skipped.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    let Some(el) = document.get_element_by_id(id) else {
        debug!(id, "element not present, skipping");
        return None;
    };
    match el.dyn_into::<T>() {
        Ok(el) => Some(el),
        Err(_) => {
            debug!(id, "element has an unexpected type, skipping");
            None
        }
    }
}

/// Attaches `handler` for the lifetime of the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), JsValue> {
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Click handler on element `id`; `false` when the element is missing.
pub fn on_click(
    document: &Document,
    id: &str,
    mut handler: impl FnMut() + 'static,
) -> Result<bool, JsValue> {
    let Some(target) = by_id::<EventTarget>(document, id) else {
        return Ok(false);
    };
    listen(&target, "click", move |_| handler())?;
    Ok(true)
}

pub fn apply_theme(document: &Document, theme: Theme) -> Result<(), JsValue> {
    match document.document_element() {
        Some(root) => root.set_attribute("data-theme", theme.as_str()),
        None => Ok(()),
    }
}

/// Local calendar date of the browser.
pub fn today() -> Option<NaiveDate> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
}

#[derive(Debug, Default)]
pub struct NavButtons {
    prev: Option<HtmlButtonElement>,
    next: Option<HtmlButtonElement>,
}

impl NavButtons {
    pub fn find(document: &Document) -> Self {
        Self {
            prev: by_id(document, PREV_BUTTON),
            next: by_id(document, NEXT_BUTTON),
        }
    }

    pub fn set_disabled(&self, prev_disabled: bool, next_disabled: bool) {
        if let Some(btn) = &self.prev {
            btn.set_disabled(prev_disabled);
        }
        if let Some(btn) = &self.next {
            btn.set_disabled(next_disabled);
        }
    }
}

pub struct DatePickers {
    start: HtmlInputElement,
    end: HtmlInputElement,
}

impl DatePickers {
    pub fn find(document: &Document) -> Option<Self> {
        Some(Self {
            start: by_id(document, START_DATE_INPUT)?,
            end: by_id(document, END_DATE_INPUT)?,
        })
    }

    /// Fills both pickers with `extent` and limits them to it.
    pub fn init(&self, extent: DateRange) {
        let min = format_date(extent.start());
        let max = format_date(extent.end());
        self.start.set_value(&min);
        self.end.set_value(&max);
        for input in [&self.start, &self.end] {
            input.set_min(&min);
            input.set_max(&max);
        }
    }

    pub fn values(&self) -> (String, String) {
        (self.start.value(), self.end.value())
    }
}
