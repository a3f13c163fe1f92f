//! SVG timeline strip drawn with plain DOM calls.

use chrono::NaiveDate;
use events::EventStore;
use events::popup::tooltip_html;
use foundation::DateRange;
use timeline::{Layout, PointerGesture, TimeScale, ZoomTransform, nearest_point, year_ticks};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const MAX_TICKS: usize = 10;

pub struct TimelineView {
    document: Document,
    svg: Element,
    axis: Element,
    points: Vec<Element>,
    tooltips: Vec<String>,
    dates: Vec<NaiveDate>,
    layout: Layout,
    base: TimeScale,
    transform: ZoomTransform,
    active: Option<usize>,
    hovered: Option<usize>,
    tooltip: Option<Element>,
    gesture: PointerGesture,
}

fn svg_el(document: &Document, tag: &str) -> Result<Element, JsValue> {
    document.create_element_ns(Some(SVG_NS), tag)
}

impl TimelineView {
    /// Replaces the content of `container` with a fresh strip over `extent`.
    pub fn new(
        document: &Document,
        container: &Element,
        store: &EventStore,
        extent: DateRange,
        layout: Layout,
    ) -> Result<Self, JsValue> {
        container.set_inner_html("");

        let svg = svg_el(document, "svg")?;
        svg.set_attribute("width", &layout.width.to_string())?;
        svg.set_attribute("height", &layout.height.to_string())?;
        container.append_child(&svg)?;

        let plot = svg_el(document, "g")?;
        plot.set_attribute(
            "transform",
            &format!("translate({},{})", layout.margin_left, layout.margin_top),
        )?;
        svg.append_child(&plot)?;

        let zoom_area = svg_el(document, "rect")?;
        zoom_area.set_attribute("class", "zoom-area")?;
        zoom_area.set_attribute("width", &layout.inner_width().to_string())?;
        zoom_area.set_attribute("height", &layout.inner_height().to_string())?;
        zoom_area.set_attribute("fill", "none")?;
        zoom_area.set_attribute("pointer-events", "all")?;
        plot.append_child(&zoom_area)?;

        let axis = svg_el(document, "g")?;
        axis.set_attribute("class", "timeline-axis")?;
        axis.set_attribute("transform", &format!("translate(0,{})", layout.axis_y()))?;
        plot.append_child(&axis)?;

        let group = svg_el(document, "g")?;
        group.set_attribute("class", "points")?;
        plot.append_child(&group)?;

        let mut points = Vec::with_capacity(store.len());
        for _ in store.iter() {
            let circle = svg_el(document, "circle")?;
            circle.set_attribute("class", "timeline-point")?;
            circle.set_attribute("cy", &layout.axis_y().to_string())?;
            circle.set_attribute("r", &layout.point_radius.to_string())?;
            group.append_child(&circle)?;
            points.push(circle);
        }

        let mut view = Self {
            document: document.clone(),
            svg,
            axis,
            points,
            tooltips: store.iter().map(tooltip_html).collect(),
            dates: store.iter().map(|e| e.date).collect(),
            base: TimeScale::new(extent, layout.x_range()),
            layout,
            transform: ZoomTransform::identity(),
            active: None,
            hovered: None,
            tooltip: None,
            gesture: PointerGesture::new(),
        };
        view.redraw()?;
        Ok(view)
    }

    /// The `<svg>` root, target of the pointer listeners.
    pub fn element(&self) -> &Element {
        &self.svg
    }

    fn scale(&self) -> TimeScale {
        self.transform.rescale(&self.base)
    }

    fn screen_xs(&self) -> Vec<f64> {
        let scale = self.scale();
        self.dates.iter().map(|d| scale.project(*d)).collect()
    }

    /// Re-projects points and ticks through the current zoom.
    pub fn redraw(&mut self) -> Result<(), JsValue> {
        let scale = self.scale();
        let (r0, r1) = self.layout.x_range();
        for (circle, date) in self.points.iter().zip(&self.dates) {
            let x = scale.project(*date);
            circle.set_attribute("cx", &x.to_string())?;
            let visibility = if x < r0 || x > r1 { "hidden" } else { "visible" };
            circle.set_attribute("visibility", visibility)?;
        }

        self.axis.set_inner_html("");
        let domain = svg_el(&self.document, "path")?;
        domain.set_attribute("class", "domain")?;
        domain.set_attribute("d", &format!("M{r0},0H{r1}"))?;
        self.axis.append_child(&domain)?;
        for tick in year_ticks(&scale, MAX_TICKS) {
            let g = svg_el(&self.document, "g")?;
            g.set_attribute("class", "tick")?;
            g.set_attribute("transform", &format!("translate({},0)", tick.x))?;
            let line = svg_el(&self.document, "line")?;
            line.set_attribute("y2", "6")?;
            g.append_child(&line)?;
            let text = svg_el(&self.document, "text")?;
            text.set_attribute("y", "9")?;
            text.set_attribute("dy", "0.71em")?;
            text.set_text_content(Some(&tick.label));
            g.append_child(&text)?;
            self.axis.append_child(&g)?;
        }
        Ok(())
    }

    pub fn set_domain(&mut self, domain: DateRange) -> Result<(), JsValue> {
        self.base = TimeScale::new(domain, self.layout.x_range());
        self.redraw()
    }

    pub fn reset_zoom(&mut self) -> Result<(), JsValue> {
        self.transform = ZoomTransform::identity();
        self.redraw()
    }

    /// Marks `index` with the `active` class and clears it everywhere else.
    pub fn highlight(&mut self, index: Option<usize>) -> Result<(), JsValue> {
        if let Some(prev) = self.active.take() {
            if let Some(circle) = self.points.get(prev) {
                circle.class_list().remove_1("active")?;
            }
        }
        if let Some(circle) = index.and_then(|i| self.points.get(i)) {
            circle.class_list().add_1("active")?;
            self.active = index;
        }
        Ok(())
    }

    /// Plot-area x of an `offsetX` measured against the svg element.
    pub fn plot_x(&self, offset_x: f64) -> f64 {
        offset_x - self.layout.margin_left
    }

    pub fn wheel(&mut self, plot_x: f64, delta_y: f64) -> Result<(), JsValue> {
        let factor = 2f64.powf(-delta_y * 0.002);
        self.transform = self
            .transform
            .zoom_at(plot_x, factor, self.layout.x_range());
        self.redraw()
    }

    pub fn press(&mut self, plot_x: f64) {
        self.gesture.press(plot_x);
    }

    pub fn drag_to(&mut self, plot_x: f64) -> Result<(), JsValue> {
        let Some(dx) = self.gesture.drag_to(plot_x) else {
            return Ok(());
        };
        self.transform = self.transform.pan(dx, self.layout.x_range());
        self.redraw()
    }

    pub fn release(&mut self) {
        self.gesture.release();
    }

    /// Pointer left the strip: drops the drag and clears the hover.
    pub fn cancel(&mut self) -> Result<(), JsValue> {
        self.gesture.cancel();
        self.unhover()
    }

    /// Date of the point under `plot_x`, unless the press was a drag.
    pub fn click(&mut self, plot_x: f64) -> Option<NaiveDate> {
        if !self.gesture.take_click() {
            return None;
        }
        let hit = nearest_point(&self.screen_xs(), plot_x, self.layout.hover_radius)?;
        self.dates.get(hit).copied()
    }

    /// Grows the hovered point and shows its tooltip at page coordinates.
    pub fn hover(&mut self, plot_x: f64, page_x: i32, page_y: i32) -> Result<(), JsValue> {
        if self.gesture.is_panning() {
            return Ok(());
        }
        let hit = nearest_point(&self.screen_xs(), plot_x, self.layout.hover_radius);
        if hit != self.hovered {
            self.unhover()?;
            if let Some(i) = hit {
                if let Some(circle) = self.points.get(i) {
                    circle.set_attribute("r", &self.layout.hover_radius.to_string())?;
                }
                self.show_tooltip(i)?;
                self.hovered = Some(i);
            }
        }
        if let Some(tooltip) = &self.tooltip {
            tooltip.set_attribute(
                "style",
                &format!("left:{}px;top:{}px;display:block", page_x + 10, page_y - 10),
            )?;
        }
        Ok(())
    }

    pub fn unhover(&mut self) -> Result<(), JsValue> {
        if let Some(i) = self.hovered.take() {
            if let Some(circle) = self.points.get(i) {
                circle.set_attribute("r", &self.layout.point_radius.to_string())?;
            }
        }
        if let Some(tooltip) = self.tooltip.take() {
            tooltip.remove();
        }
        Ok(())
    }

    fn show_tooltip(&mut self, index: usize) -> Result<(), JsValue> {
        let Some(body) = self.document.body() else {
            return Ok(());
        };
        let tooltip = self.document.create_element("div")?;
        tooltip.set_attribute("class", "timeline-tooltip")?;
        tooltip.set_inner_html(self.tooltips.get(index).map_or("", String::as_str));
        body.append_child(&tooltip)?;
        self.tooltip = Some(tooltip);
        Ok(())
    }
}
