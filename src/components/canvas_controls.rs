use crate::model::Zoom;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CanvasControlsProps {
    pub color: AttrValue,
    pub zoom: Zoom,
    pub on_pick_color: Callback<String>,
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
}

#[function_component(CanvasControls)]
pub fn canvas_controls(props: &CanvasControlsProps) -> Html {
    let pick_cb = {
        let cb = props.on_pick_color.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let zi = {
        let cb = props.on_zoom_in.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let zo = {
        let cb = props.on_zoom_out.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="display:flex; align-items:center; gap:12px;">
        <input
            type="color"
            value={props.color.clone()}
            oninput={pick_cb}
            style="height:32px; width:64px; cursor:pointer;"
        />
        <button
            onclick={zi}
            disabled={props.zoom.at_max()}
            style="padding:4px 12px; background:#1e293b; color:#fff; border-radius:4px;"
        >{"+"}</button>
        <button
            onclick={zo}
            disabled={props.zoom.at_min()}
            style="padding:4px 12px; background:#1e293b; color:#fff; border-radius:4px;"
        >{"-"}</button>
        <span style="font-size:12px; opacity:0.7;">{ format!("{:.1}x", props.zoom.factor()) }</span>
    </div>}
}
