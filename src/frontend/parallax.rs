use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, MouseEvent};
use yew::prelude::*;

use crate::parallax::{Blob, ParallaxLayer, Point, Viewport};

const FALLBACK_VIEWPORT: Viewport = Viewport {
    width: 1280.0,
    height: 720.0,
};

fn css_pixels(value: Result<JsValue, JsValue>) -> Option<f64> {
    value.ok()?.as_f64().filter(|px| px.is_finite() && *px > 0.0)
}

/// Layout viewport in CSS pixels, `None` outside a window or before layout.
pub(super) fn current_viewport() -> Option<Viewport> {
    let win = window()?;
    Some(Viewport {
        width: css_pixels(win.inner_width())?,
        height: css_pixels(win.inner_height())?,
    })
}

#[hook]
fn use_parallax() -> ParallaxLayer {
    let layer = use_state(ParallaxLayer::default);

    {
        let layer = layer.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                EventListener::new(&win, "mousemove", move |event| {
                    let Some(event) = event.dyn_ref::<MouseEvent>() else {
                        return;
                    };
                    let mut next = ParallaxLayer::default();
                    next.track(Point::new(
                        f64::from(event.client_x()),
                        f64::from(event.client_y()),
                    ));
                    layer.set(next);
                })
            });
            move || drop(listener)
        });
    }

    (*layer).clone()
}

#[derive(Properties, PartialEq)]
pub struct BlobLayerProps {
    pub blobs: Vec<Blob>,
}

#[function_component(BlobLayer)]
pub fn blob_layer(props: &BlobLayerProps) -> Html {
    let layer = use_parallax();
    let viewport = current_viewport().unwrap_or(FALLBACK_VIEWPORT);

    html! {
        <div class="blob-layer" aria-hidden="true">
            { for props.blobs.iter().map(|blob| html! {
                <div
                    class={classes!(blob.class.clone())}
                    style={layer.transform(viewport, blob.factor)}
                />
            }) }
        </div>
    }
}
