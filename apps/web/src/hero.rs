use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use portfolio_core::hero::{
    is_mobile, pointer_to_ndc, report_frame_rate, FpsSampler, ParticleField, ScreenPoint,
    LINE_COLOR, LINE_OPACITY, POINT_OPACITY,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, MouseEvent, Window};

use crate::dom;
use crate::error::WebError;
use crate::page::Page;

const BACKGROUND: &str = "#dbe9ee";
const MAX_PIXEL_RATIO: f64 = 2.0;

struct Scene {
    field: ParticleField,
    context: CanvasRenderingContext2d,
    canvas: HtmlCanvasElement,
    width: f64,
    height: f64,
    fps: FpsSampler,
}

impl Scene {
    /// Matches the canvas backing store to the window, capping the pixel ratio.
    fn resize(&mut self, window: &Window) -> Result<(), WebError> {
        let (width, height) = dom::viewport_size(window);
        let ratio = window.device_pixel_ratio().min(MAX_PIXEL_RATIO);

        self.canvas.set_width((width * ratio) as u32);
        self.canvas.set_height((height * ratio) as u32);
        dom::set_style(&self.canvas, "width", &format!("{width}px"));
        dom::set_style(&self.canvas, "height", &format!("{height}px"));
        self.context.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0)?;

        self.width = width;
        self.height = height;
        Ok(())
    }

    fn frame(&mut self, now_ms: f64) -> Result<(), WebError> {
        self.field.step();
        self.draw()?;

        if let Some(fps) = self.fps.tick(now_ms) {
            report_frame_rate(fps, self.field.particles().len());
        }
        Ok(())
    }

    fn draw(&self) -> Result<(), WebError> {
        let context = &self.context;
        let projected = self.field.project(self.width as f32, self.height as f32);

        context.set_global_composite_operation("source-over")?;
        context.set_global_alpha(1.0);
        context.set_fill_style_str(BACKGROUND);
        context.fill_rect(0.0, 0.0, self.width, self.height);

        context.set_global_alpha(LINE_OPACITY);
        context.set_stroke_style_str(LINE_COLOR);
        context.set_line_width(1.0);
        context.begin_path();
        for &(a, b) in self.field.connections() {
            if let (Some(from), Some(to)) = (projected[a], projected[b]) {
                context.move_to(f64::from(from.x), f64::from(from.y));
                context.line_to(f64::from(to.x), f64::from(to.y));
            }
        }
        context.stroke();

        context.set_global_alpha(1.0);
        context.set_global_composite_operation("lighter")?;
        for (particle, point) in self.field.particles().iter().zip(&projected) {
            let Some(ScreenPoint { x, y, size }) = *point else {
                continue;
            };
            context.set_fill_style_str(&particle.css_color(POINT_OPACITY));
            context.begin_path();
            context.arc(f64::from(x), f64::from(y), f64::from(size / 2.0).max(0.5), 0.0, TAU)?;
            context.fill();
        }
        Ok(())
    }
}

/// Starts the hero particle field. Small screens and pages without a hero
/// canvas skip it.
pub fn install(page: &Rc<Page>) -> Result<(), WebError> {
    let Ok(canvas) = page.element(&page.config.elements.hero_canvas) else {
        log::debug!("no hero canvas on this page");
        return Ok(());
    };

    let (width, _) = dom::viewport_size(&page.window);
    if is_mobile(width, page.config.mobile_breakpoint) {
        log::info!("hero animation disabled on mobile for performance");
        return Ok(());
    }

    let canvas = canvas.dyn_into::<HtmlCanvasElement>().map_err(wasm_bindgen::JsValue::from)?;
    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| WebError::Js("canvas 2d context unavailable".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(wasm_bindgen::JsValue::from)?;

    let field = ParticleField::generate(
        &mut rand::thread_rng(),
        page.config.particle_count,
        page.config.connection_distance,
    );
    let now = page.window.performance().map_or(0.0, |performance| performance.now());

    let scene = Rc::new(RefCell::new(Scene {
        field,
        context,
        canvas,
        width: 0.0,
        height: 0.0,
        fps: FpsSampler::new(now),
    }));
    scene.borrow_mut().resize(&page.window)?;
    log::info!(
        "hero animation running with {} particles",
        page.config.particle_count
    );

    install_pointer(&page.window, &scene)?;
    install_resize(&page.window, &scene)?;
    start_loop(page.window.clone(), scene)
}

fn install_pointer(window: &Window, scene: &Rc<RefCell<Scene>>) -> Result<(), WebError> {
    let scene = Rc::clone(scene);
    dom::listen(window, "mousemove", move |event: Event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let mut scene = scene.borrow_mut();
        let pointer = pointer_to_ndc(
            f64::from(event.client_x()),
            f64::from(event.client_y()),
            scene.width,
            scene.height,
        );
        scene.field.point_at(pointer);
    })
}

fn install_resize(window: &Window, scene: &Rc<RefCell<Scene>>) -> Result<(), WebError> {
    let scene = Rc::clone(scene);
    let resize_window = window.clone();
    dom::listen(window, "resize", move |_| {
        if let Err(error) = scene.borrow_mut().resize(&resize_window) {
            log::warn!("hero resize failed: {error}");
        }
    })
}

/// Self-rescheduling animation frame loop. A failed frame stops the loop.
fn start_loop(window: Window, scene: Rc<RefCell<Scene>>) -> Result<(), WebError> {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = Rc::clone(&tick);
    let loop_window = window.clone();

    *tick.borrow_mut() = Some(Closure::new(move |now: f64| {
        if let Err(error) = scene.borrow_mut().frame(now) {
            log::error!("hero animation stopped: {error}");
            return;
        }

        let scheduled = next
            .borrow()
            .as_ref()
            .map(|callback| loop_window.request_animation_frame(callback.as_ref().unchecked_ref()));
        if let Some(Err(error)) = scheduled {
            log::error!("hero animation stopped: {error:?}");
        }
    }));

    let first = tick
        .borrow()
        .as_ref()
        .map(|callback| window.request_animation_frame(callback.as_ref().unchecked_ref()));
    if let Some(result) = first {
        result?;
    }
    Ok(())
}
