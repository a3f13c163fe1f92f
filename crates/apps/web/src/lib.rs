use std::cell::{Cell, RefCell};

use events::EventStore;
use gloo_net::http::Request;
use navigation::{DateSelection, NavigationController, RangeOutcome, ViewCommand, ViewSink};
use storage::{Theme, ThemeStore, ViewStore};
use timeline::Layout;
use tracing::{debug, error, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{MouseEvent, WheelEvent};

mod config;
mod dom;
mod leaflet;
mod logging;
mod map_view;
mod store;
mod timeline_svg;
mod view;

pub use config::{AppConfig, TileSet, TileSource};

use dom::{DatePickers, NavButtons};
use map_view::MapView;
use store::BrowserStore;
use timeline_svg::TimelineView;
use view::WebView;

struct App {
    config: AppConfig,
    controller: NavigationController,
    views: ViewStore<BrowserStore>,
    themes: ThemeStore<BrowserStore>,
    theme: Theme,
}

// The controller and the DOM views live in separate cells: Leaflet may fire
// `moveend` synchronously while a command is being applied, and that handler
// needs the controller while the views are still borrowed.
thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
    static VIEWS: RefCell<Option<WebView>> = const { RefCell::new(None) };
    static PENDING: RefCell<Vec<ViewCommand>> = const { RefCell::new(Vec::new()) };
    static FLUSHING: Cell<bool> = const { Cell::new(false) };
}

fn with_app<R>(f: impl FnOnce(&mut App) -> R) -> Option<R> {
    APP.with(|cell| {
        let mut slot = cell.try_borrow_mut().ok()?;
        slot.as_mut().map(f)
    })
}

fn with_views<R>(f: impl FnOnce(&mut WebView) -> R) -> Option<R> {
    VIEWS.with(|cell| {
        let mut slot = cell.try_borrow_mut().ok()?;
        slot.as_mut().map(f)
    })
}

/// Runs one controller operation, then applies the commands it queued.
fn update<R>(op: impl FnOnce(&mut NavigationController) -> R) -> Option<R> {
    let (out, commands) = with_app(|app| {
        let out = op(&mut app.controller);
        (out, app.controller.drain_commands())
    })?;
    PENDING.with(|p| p.borrow_mut().extend(commands));
    flush();
    Some(out)
}

/// Applies queued commands in order. Commands queued while applying (from
/// synchronous map callbacks) run after the current batch.
fn flush() {
    if FLUSHING.with(|f| f.replace(true)) {
        return;
    }
    loop {
        let batch = PENDING.with(|p| std::mem::take(&mut *p.borrow_mut()));
        if batch.is_empty() {
            break;
        }
        for command in &batch {
            match command {
                ViewCommand::Persist => persist(),
                other => {
                    if with_views(|v| v.apply(other)).is_none() {
                        debug!(?other, "views unavailable, command dropped");
                    }
                }
            }
        }
    }
    FLUSHING.with(|f| f.set(false));
}

fn persist() {
    with_app(|app| {
        let snapshot = app.controller.snapshot();
        if let Err(err) = app.views.save(&snapshot) {
            warn!(%err, "could not persist view state");
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    Ok(())
}

/// Creates the map, applies the saved theme and starts loading events.
///
/// `config_json` is an optional JSON `AppConfig`; unparseable input falls
/// back to the defaults.
#[wasm_bindgen]
pub fn boot(config_json: Option<String>) -> Result<(), JsValue> {
    let (config, config_err) = match AppConfig::parse(config_json.as_deref()) {
        Ok(cfg) => (cfg, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    logging::init(&config.log_filter);
    if let Some(err) = config_err {
        warn!(%err, "unparseable config, using defaults");
    }
    if APP.with(|cell| cell.borrow().is_some()) {
        warn!("boot called twice, ignoring");
        return Ok(());
    }

    let document = dom::document()?;
    let themes = ThemeStore::new(BrowserStore::new(), config.theme_key.clone());
    let theme = themes.load().unwrap_or_default();
    dom::apply_theme(&document, theme)?;

    let map = leaflet::new_map(&config.map_element)?;
    let mut map_view = MapView::new(map, &config.navigation);
    map_view.set_tiles(config.tiles.for_theme(theme));

    let data_url = config.data_url.clone();
    let app = App {
        controller: NavigationController::new(EventStore::empty(), config.navigation.clone()),
        views: ViewStore::new(BrowserStore::new(), config.view_key.clone()),
        config,
        themes,
        theme,
    };
    APP.with(|cell| *cell.borrow_mut() = Some(app));
    VIEWS.with(|cell| *cell.borrow_mut() = Some(WebView::new(map_view, NavButtons::find(&document))));

    dom::on_click(&document, dom::THEME_TOGGLE, toggle_theme)?;

    info!(url = %data_url, "loading events");
    spawn_local(async move {
        if let Err(err) = load_and_wire(&data_url).await {
            error!(?err, url = %data_url, "failed to load events");
        }
    });
    Ok(())
}

async fn fetch_bytes(url: &str) -> Result<Vec<u8>, JsValue> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    if !resp.ok() {
        return Err(JsValue::from_str(&format!("HTTP {}", resp.status())));
    }
    resp.binary()
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

async fn load_and_wire(url: &str) -> Result<(), JsValue> {
    let bytes = fetch_bytes(url).await?;
    let dataset = events::load_dataset(&bytes).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let document = dom::document()?;

    let (nav_config, labels, timeline_id) = with_app(|app| {
        (
            app.config.navigation.clone(),
            app.config.popup.clone(),
            app.config.timeline_element.clone(),
        )
    })
    .ok_or_else(|| JsValue::from_str("app not booted"))?;

    let mut controller = NavigationController::new(dataset.store, nav_config).with_dataset(dataset.id);
    match dom::today() {
        Some(today) => controller = controller.with_today(today),
        None => warn!("could not read today's date, timeline ends at the last event"),
    }
    let extent = controller.timeline_extent();

    let timeline = match (document.get_element_by_id(&timeline_id), extent) {
        (Some(container), Some(extent)) => Some(TimelineView::new(
            &document,
            &container,
            controller.store(),
            extent,
            Layout::default(),
        )?),
        (None, _) => {
            debug!(id = %timeline_id, "no timeline container");
            None
        }
        (_, None) => None,
    };
    let timeline_el = timeline.as_ref().map(|t| t.element().clone());

    let (markers, map) = with_views(|v| {
        let markers = v.map.build_markers(controller.store(), &labels).to_vec();
        v.timeline = timeline;
        (markers, v.map.map().clone())
    })
    .ok_or_else(|| JsValue::from_str("views not booted"))?;

    for (index, marker) in markers.iter().enumerate() {
        let cb = Closure::<dyn FnMut()>::new(move || {
            update(|c| c.show_event_by_index(index));
        });
        marker.on_marker("click", cb.as_ref().unchecked_ref());
        cb.forget();

        // Close button and map clicks close popups behind the controller's back.
        let cb = Closure::<dyn FnMut()>::new(move || {
            update(|c| c.popup_closed(index));
        });
        marker.on_marker("popupclose", cb.as_ref().unchecked_ref());
        cb.forget();
    }

    let pickers = DatePickers::find(&document);
    if let (Some(pickers), Some(extent)) = (&pickers, extent) {
        pickers.init(extent);
    }

    let saved = with_app(|app| {
        let saved = app.views.restore();
        app.controller = controller;
        saved
    })
    .flatten();

    wire_controls(&document, pickers)?;
    wire_map(&map);
    if let Some(el) = timeline_el {
        wire_timeline(&el)?;
    }

    update(|c| c.start(saved));
    info!("ready");
    Ok(())
}

fn wire_controls(document: &web_sys::Document, pickers: Option<DatePickers>) -> Result<(), JsValue> {
    dom::on_click(document, dom::SHOW_ALL_BUTTON, show_all_markers)?;
    dom::on_click(document, dom::PREV_BUTTON, || {
        show_previous();
    })?;
    dom::on_click(document, dom::NEXT_BUTTON, || {
        show_next();
    })?;
    if let Some(pickers) = pickers {
        dom::on_click(document, dom::FILTER_BUTTON, move || {
            let (start, end) = pickers.values();
            if let Err(err) = filter_by_date_range(&start, &end) {
                debug!(?err, "range filter rejected");
            }
        })?;
    }
    Ok(())
}

fn wire_map(map: &leaflet::Map) {
    for event in ["moveend", "zoomend"] {
        let handle = map.clone();
        let cb = Closure::<dyn FnMut()>::new(move || {
            if let Some((center, zoom)) = handle.settled_view() {
                update(|c| c.on_viewport_settled(center, zoom));
            }
        });
        map.on(event, cb.as_ref().unchecked_ref());
        cb.forget();
    }
}

fn with_timeline<R>(f: impl FnOnce(&mut TimelineView) -> R) -> Option<R> {
    with_views(|v| v.timeline.as_mut().map(f)).flatten()
}

fn plot_x(event: &MouseEvent) -> Option<f64> {
    with_timeline(|t| t.plot_x(f64::from(event.offset_x())))
}

fn wire_timeline(el: &web_sys::Element) -> Result<(), JsValue> {
    dom::listen(el, "wheel", |event| {
        let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
            return;
        };
        event.prevent_default();
        let Some(px) = plot_x(wheel) else {
            return;
        };
        if let Some(Err(err)) = with_timeline(|t| t.wheel(px, wheel.delta_y())) {
            warn!(?err, "timeline zoom failed");
        }
    })?;
    dom::listen(el, "mousedown", |event| {
        if let Some(px) = event.dyn_ref::<MouseEvent>().and_then(plot_x) {
            with_timeline(|t| t.press(px));
        }
    })?;
    dom::listen(el, "mousemove", |event| {
        let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let Some(px) = plot_x(mouse) else {
            return;
        };
        let result = with_timeline(|t| {
            t.drag_to(px)?;
            t.hover(px, mouse.page_x(), mouse.page_y())
        });
        if let Some(Err(err)) = result {
            warn!(?err, "timeline pointer update failed");
        }
    })?;
    dom::listen(el, "mouseup", |_| {
        with_timeline(TimelineView::release);
    })?;
    dom::listen(el, "mouseleave", |_| {
        if let Some(Err(err)) = with_timeline(TimelineView::cancel) {
            warn!(?err, "timeline hover reset failed");
        }
    })?;
    dom::listen(el, "click", |event| {
        let Some(px) = event.dyn_ref::<MouseEvent>().and_then(plot_x) else {
            return;
        };
        if let Some(date) = with_timeline(|t| t.click(px)).flatten() {
            update(|c| c.filter_markers_by_date(date));
        }
    })?;
    Ok(())
}

fn toggle_theme() {
    let Some((theme, tiles)) = with_app(|app| {
        app.theme = app.theme.toggled();
        if let Err(err) = app.themes.save(app.theme) {
            warn!(%err, "could not save theme");
        }
        (app.theme, app.config.tiles.for_theme(app.theme).clone())
    }) else {
        return;
    };
    if let Ok(document) = dom::document() {
        if let Err(err) = dom::apply_theme(&document, theme) {
            warn!(?err, "could not apply theme");
        }
    }
    with_views(|v| v.map.set_tiles(&tiles));
    info!(theme = theme.as_str(), "theme switched");
}

/// Selects event `index` in date order; out of range does nothing.
#[wasm_bindgen]
pub fn show_event_by_index(index: usize) -> bool {
    update(|c| c.show_event_by_index(index)).unwrap_or(false)
}

#[wasm_bindgen]
pub fn show_next() -> bool {
    update(NavigationController::show_next).unwrap_or(false)
}

#[wasm_bindgen]
pub fn show_previous() -> bool {
    update(NavigationController::show_previous).unwrap_or(false)
}

#[wasm_bindgen]
pub fn show_all_markers() {
    update(NavigationController::show_all_markers);
}

/// Timeline selection by `YYYY-MM-DD`; returns whether an event is now selected.
#[wasm_bindgen]
pub fn filter_markers_by_date(date: &str) -> bool {
    let Some(date) = foundation::parse_date(date) else {
        debug!(date, "unparseable date");
        return false;
    };
    matches!(
        update(|c| c.filter_markers_by_date(date)),
        Some(DateSelection::Selected(_))
    )
}

/// Shows only the events between the two picker values, inclusive.
#[wasm_bindgen]
pub fn filter_by_date_range(start: &str, end: &str) -> Result<(), JsValue> {
    match update(|c| c.filter_by_range_input(start, end)) {
        Some(Ok(RangeOutcome::Filtered { shown })) => {
            info!(shown, start, end, "filtered by date range");
            Ok(())
        }
        Some(Ok(RangeOutcome::ShowingAll)) => Ok(()),
        Some(Err(err)) => {
            warn!(%err, "invalid date range");
            Err(JsValue::from_str(&err.to_string()))
        }
        None => Ok(()),
    }
}
