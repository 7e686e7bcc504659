use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Document;
use yew::prelude::*;

use super::pixel_canvas::PixelCanvas;
use crate::frame;
use crate::util::clog;

fn upsert_meta(document: &Document, attr: &str, key: &str, content: &str) {
    let Some(head) = document.head() else { return };
    let selector = format!("meta[{attr}=\"{key}\"]");
    let el = match document.query_selector(&selector).ok().flatten() {
        Some(el) => el,
        None => {
            let Ok(el) = document.create_element("meta") else {
                return;
            };
            if el.set_attribute(attr, key).is_err() {
                return;
            }
            if head.append_child(&el).is_err() {
                return;
            }
            el
        }
    };
    let _ = el.set_attribute("content", content);
}

/// Publish the embed blob and OpenGraph tags into the page head. Updating an
/// existing tag in place keeps republication idempotent.
fn publish_frame_metadata(document: &Document) {
    document.set_title(frame::APP_NAME);
    upsert_meta(document, "property", "og:title", frame::APP_NAME);
    upsert_meta(document, "property", "og:description", frame::APP_DESCRIPTION);
    let json = frame::embed_json();
    if !json.is_empty() {
        upsert_meta(document, "name", "fc:frame", &json);
    }
}

#[function_component(App)]
pub fn app() -> Html {
    {
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let document = window.document().expect("should have a document on window");
            publish_frame_metadata(&document);
            clog("pixelframe mounted");

            // Hosts re-read embed metadata on a fixed cadence; republish on
            // the same interval so a long-lived tab never serves stale tags.
            let refresh = {
                let document = document.clone();
                Closure::wrap(Box::new(move || {
                    publish_frame_metadata(&document);
                }) as Box<dyn FnMut()>)
            };
            let refresh_id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    refresh.as_ref().unchecked_ref(),
                    (frame::EMBED_REVALIDATE_SECS * 1000) as i32,
                )
                .unwrap();
            move || {
                window.clear_interval_with_handle(refresh_id);
                drop(refresh);
            }
        });
    }

    html! {
        <div style="min-height:100vh; display:flex; flex-direction:column; align-items:center; gap:24px; padding:24px;">
            <h1 style="margin:0; font-size:24px;">{ frame::APP_NAME }</h1>
            <PixelCanvas />
        </div>
    }
}
