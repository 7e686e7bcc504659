use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, TouchEvent};
use yew::prelude::*;

use super::canvas_controls::CanvasControls;
use crate::model::{GridSpec, Zoom};
use crate::state::{PointerState, TouchPan};
use crate::util::clog;

const SURFACE_BG: &str = "#ffffff";
const GRID_LINE: &str = "#e5e5e5";

#[derive(Properties, PartialEq, Clone)]
pub struct PixelCanvasProps {
    /// Backing resolution of the square surface, in pixels.
    #[prop_or(500)]
    pub canvas_size: u32,
    /// Edge length of one paintable cell, in backing pixels.
    #[prop_or(10)]
    pub pixel_size: u32,
    #[prop_or(AttrValue::Static("#000000"))]
    pub default_color: AttrValue,
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|obj| obj.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// White background plus the cell grid. Lines sit on half-pixel offsets so
/// 1-unit strokes stay crisp.
fn render_grid(canvas: &HtmlCanvasElement, grid: &GridSpec) {
    let Some(ctx) = context_2d(canvas) else { return };
    let size = grid.canvas_size as f64;
    ctx.set_fill_style_str(SURFACE_BG);
    ctx.fill_rect(0.0, 0.0, size, size);
    ctx.set_stroke_style_str(GRID_LINE);
    ctx.set_line_width(1.0);
    for i in grid.line_offsets() {
        let p = i as f64 + 0.5;
        ctx.begin_path();
        ctx.move_to(p, 0.0);
        ctx.line_to(p, size);
        ctx.stroke();
    }
    for i in grid.line_offsets() {
        let p = i as f64 + 0.5;
        ctx.begin_path();
        ctx.move_to(0.0, p);
        ctx.line_to(size, p);
        ctx.stroke();
    }
}

/// Fill the cell under a viewport position with the current color.
fn paint_cell(
    canvas: &HtmlCanvasElement,
    grid: &GridSpec,
    color: &str,
    client_x: f64,
    client_y: f64,
) {
    let Some(ctx) = context_2d(canvas) else { return };
    let rect = canvas.get_bounding_client_rect();
    let (sx, sy) = grid.surface_point(
        client_x - rect.left(),
        client_y - rect.top(),
        rect.width(),
        rect.height(),
    );
    let (gx, gy) = grid.cell_origin(sx, sy);
    ctx.set_fill_style_str(color);
    ctx.fill_rect(gx, gy, grid.pixel_size as f64, grid.pixel_size as f64);
}

#[function_component(PixelCanvas)]
pub fn pixel_canvas(props: &PixelCanvasProps) -> Html {
    let grid = GridSpec::new(props.canvas_size, props.pixel_size);
    let color = use_state(|| props.default_color.to_string());
    let zoom = use_state(Zoom::default);
    let canvas_ref = use_node_ref();
    let scroll_ref = use_node_ref();
    let pointer = use_mut_ref(PointerState::default);
    let pan = use_mut_ref(TouchPan::default);
    let last_brush = use_mut_ref(|| (props.default_color.to_string(), Zoom::default()));

    // Repaint the backdrop whenever the grid configuration changes.
    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(grid, move |grid| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                render_grid(&canvas, grid);
            }
            || ()
        });
    }

    // Log brush changes
    {
        let last_brush = last_brush.clone();
        use_effect_with(((*color).clone(), *zoom), move |deps| {
            let (c, z) = deps.clone();
            let mut prev = last_brush.borrow_mut();
            if prev.0 != c {
                clog(&format!("color: {} -> {}", prev.0, c));
            }
            if prev.1 != z {
                clog(&format!("zoom: {:.1} -> {:.1}", prev.1.factor(), z.factor()));
            }
            *prev = (c, z);
            || ()
        });
    }

    // Touch pan over the scroll container. Registered manually so the move
    // handler can suppress the browser's own scroll/zoom handling; yew's
    // delegated listeners are passive for touch events.
    {
        let scroll_ref = scroll_ref.clone();
        let pan = pan.clone();
        use_effect_with((), move |_| {
            let container: HtmlElement = scroll_ref
                .cast::<HtmlElement>()
                .expect("scroll_ref not attached to a container element");

            let touchstart_cb = {
                let container = container.clone();
                let pan = pan.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    let touches = e.touches();
                    // Only a single finger arms the pan; anything else is ignored.
                    if touches.length() != 1 {
                        return;
                    }
                    if let Some(t) = touches.item(0) {
                        pan.borrow_mut().begin(
                            t.client_x() as f64,
                            t.client_y() as f64,
                            container.scroll_left() as f64,
                            container.scroll_top() as f64,
                        );
                    }
                }) as Box<dyn FnMut(_)>)
            };
            container
                .add_event_listener_with_callback(
                    "touchstart",
                    touchstart_cb.as_ref().unchecked_ref(),
                )
                .ok();

            let touchmove_cb = {
                let container = container.clone();
                let pan = pan.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    let touches = e.touches();
                    if touches.length() != 1 {
                        return;
                    }
                    if let Some(t) = touches.item(0) {
                        let target = pan
                            .borrow()
                            .scroll_target(t.client_x() as f64, t.client_y() as f64);
                        if let Some((left, top)) = target {
                            container.set_scroll_left(left as i32);
                            container.set_scroll_top(top as i32);
                            e.prevent_default();
                        }
                    }
                }) as Box<dyn FnMut(_)>)
            };
            container
                .add_event_listener_with_callback(
                    "touchmove",
                    touchmove_cb.as_ref().unchecked_ref(),
                )
                .ok();

            let touchend_cb = {
                let pan = pan.clone();
                Closure::wrap(Box::new(move |_e: TouchEvent| {
                    pan.borrow_mut().end();
                }) as Box<dyn FnMut(_)>)
            };
            container
                .add_event_listener_with_callback("touchend", touchend_cb.as_ref().unchecked_ref())
                .ok();
            container
                .add_event_listener_with_callback(
                    "touchcancel",
                    touchend_cb.as_ref().unchecked_ref(),
                )
                .ok();

            move || {
                let _ = container.remove_event_listener_with_callback(
                    "touchstart",
                    touchstart_cb.as_ref().unchecked_ref(),
                );
                let _ = container.remove_event_listener_with_callback(
                    "touchmove",
                    touchmove_cb.as_ref().unchecked_ref(),
                );
                let _ = container.remove_event_listener_with_callback(
                    "touchend",
                    touchend_cb.as_ref().unchecked_ref(),
                );
                let _ = container.remove_event_listener_with_callback(
                    "touchcancel",
                    touchend_cb.as_ref().unchecked_ref(),
                );
                // Keep closures in scope until here so they aren't dropped early.
                let _keep_alive = (&touchstart_cb, &touchmove_cb, &touchend_cb);
            }
        });
    }

    let onmousedown = {
        let canvas_ref = canvas_ref.clone();
        let pointer = pointer.clone();
        let color = color.clone();
        Callback::from(move |e: MouseEvent| {
            pointer.borrow_mut().press();
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                paint_cell(
                    &canvas,
                    &grid,
                    color.as_str(),
                    e.client_x() as f64,
                    e.client_y() as f64,
                );
            }
        })
    };
    let onmousemove = {
        let canvas_ref = canvas_ref.clone();
        let pointer = pointer.clone();
        let color = color.clone();
        Callback::from(move |e: MouseEvent| {
            if !pointer.borrow().is_drawing() {
                return;
            }
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                paint_cell(
                    &canvas,
                    &grid,
                    color.as_str(),
                    e.client_x() as f64,
                    e.client_y() as f64,
                );
            }
        })
    };
    let stop_drawing = {
        let pointer = pointer.clone();
        Callback::from(move |_: MouseEvent| {
            pointer.borrow_mut().release();
        })
    };

    let pick_color = {
        let color = color.clone();
        Callback::from(move |c: String| color.set(c))
    };
    let zoom_in = {
        let zoom = zoom.clone();
        Callback::from(move |_| zoom.set((*zoom).step_in()))
    };
    let zoom_out = {
        let zoom = zoom.clone();
        Callback::from(move |_| zoom.set((*zoom).step_out()))
    };

    let shown = zoom.shown_size(grid.canvas_size);
    let canvas_style = format!(
        "width:{shown}px; height:{shown}px; image-rendering:{}; cursor:crosshair;",
        zoom.image_rendering()
    );

    html! {
        <div style="display:flex; flex-direction:column; align-items:center; gap:16px;">
            <CanvasControls
                color={AttrValue::from((*color).clone())}
                zoom={*zoom}
                on_pick_color={pick_color}
                on_zoom_in={zoom_in}
                on_zoom_out={zoom_out}
            />
            <div ref={scroll_ref} style="border:1px solid #d1d5db; overflow:auto; max-width:100%; max-height:80vh;">
                <canvas
                    ref={canvas_ref}
                    width={grid.canvas_size.to_string()}
                    height={grid.canvas_size.to_string()}
                    style={canvas_style}
                    onmousedown={onmousedown}
                    onmousemove={onmousemove}
                    onmouseup={stop_drawing.clone()}
                    onmouseleave={stop_drawing}
                />
            </div>
        </div>
    }
}
