//! Interactive hero model
//!
//! The model is a stack of logo layers rendered with CSS 3D transforms. An
//! [`IdleReturn`] controller owns the orbit pose: pointer drags rotate it,
//! and after a quiet period it eases back to where it started and resumes
//! auto-rotation.

use std::f64::consts::FRAC_PI_2;
use std::time::Duration;

use leptos::prelude::*;

use crate::core::idle_return::{IdleReturn, IdleReturnConfig, OrbitPose};

/// Period of the controller loop, ~60 steps per second
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// How the orbit pose maps onto the rendered surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerSurface {
    pub perspective_px: f64,
    /// Vertical float of the model
    pub bob_amplitude_px: f64,
    /// Bob angular speed in radians per second
    pub bob_speed: f64,
    /// Number of stacked layers giving the model depth
    pub layers: u8,
    pub layer_spacing_px: f64,
}

impl Default for ViewerSurface {
    fn default() -> Self {
        Self {
            perspective_px: 1200.0,
            bob_amplitude_px: 8.0,
            bob_speed: 0.7,
            layers: 6,
            layer_spacing_px: 3.0,
        }
    }
}

impl ViewerSurface {
    /// CSS transform of the model for a camera at `pose`.
    ///
    /// A camera at the equator (`polar == PI/2`) sees the model straight on.
    /// Moving the camera around the model turns the model the other way.
    pub fn model_transform(&self, pose: OrbitPose, elapsed_secs: f64) -> String {
        let bob = (elapsed_secs * self.bob_speed).sin() * self.bob_amplitude_px;
        let tilt = FRAC_PI_2 - pose.polar;
        format!(
            "translateY({:.2}px) rotateX({:.4}rad) rotateY({:.4}rad)",
            bob, tilt, -pose.azimuthal
        )
    }

    /// Depth offset of layer `index`, centered on the model plane
    pub fn layer_offset(&self, index: u8) -> f64 {
        let center = f64::from(self.layers.saturating_sub(1)) / 2.0;
        (f64::from(index) - center) * self.layer_spacing_px
    }
}

/// Current time since page load
fn now() -> Duration {
    #[cfg(not(feature = "ssr"))]
    {
        Duration::from_secs_f64(js_sys::Date::now().max(0.0) / 1000.0)
    }
    #[cfg(feature = "ssr")]
    {
        Duration::ZERO
    }
}

/// Rest pose the hero starts from: slightly above the equator, facing front
pub fn initial_pose() -> OrbitPose {
    OrbitPose::new(FRAC_PI_2 - 0.15, 0.0)
}

#[component]
pub fn ModelViewer(
    #[prop(default = "/images/inkfinity-man-logo.svg")] src: &'static str,
    #[prop(into)] alt: Signal<&'static str>,
    #[prop(optional)] surface: Option<ViewerSurface>,
    #[prop(optional)] config: Option<IdleReturnConfig>,
) -> impl IntoView {
    let surface = surface.unwrap_or_default();
    let controller = StoredValue::new_local(IdleReturn::new(
        config.unwrap_or_default(),
        initial_pose(),
    ));
    let pose = RwSignal::new(initial_pose());
    let elapsed = RwSignal::new(0.0_f64);
    let last_pointer = StoredValue::new(None::<(f64, f64)>);
    let container = NodeRef::<leptos::html::Div>::new();

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        let started = now();
        let frame = move || {
            let now = now();
            let next = controller
                .try_update_value(|c| {
                    // First rendered frame defines where the camera returns to
                    c.capture_rest_pose();
                    c.step(now);
                    c.current_pose()
                });
            if let Some(next) = next {
                pose.set(next);
                elapsed.set(now.saturating_sub(started).as_secs_f64());
            }
        };

        match set_interval_with_handle(frame, FRAME_INTERVAL) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(err) => leptos::logging::error!("Failed to start model viewer loop: {:?}", err),
        }
    });

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        last_pointer.set_value(Some((f64::from(ev.client_x()), f64::from(ev.client_y()))));
        controller.update_value(|c| c.interaction_start());
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        let position = (f64::from(ev.client_x()), f64::from(ev.client_y()));
        let Some(previous) = last_pointer.get_value() else {
            return;
        };
        last_pointer.set_value(Some(position));

        let height = container
            .get_untracked()
            .map(|el| f64::from(el.client_height()))
            .unwrap_or_default();
        controller.update_value(|c| c.drag(position.0 - previous.0, position.1 - previous.1, height));
    };

    let on_pointer_release = move |_: leptos::ev::PointerEvent| {
        last_pointer.set_value(None);
        let now = now();
        controller.update_value(|c| c.interaction_end(now));
    };

    let on_wheel = move |_: leptos::ev::WheelEvent| {
        let now = now();
        controller.update_value(|c| c.wheel(now));
    };

    let stage_style = format!("perspective: {}px", surface.perspective_px);

    view! {
        <div
            class="model-viewer"
            node_ref=container
            style=stage_style
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_release
            on:pointerleave=on_pointer_release
            on:pointercancel=on_pointer_release
            on:wheel=on_wheel
        >
            <div
                class="model-viewer-model"
                style=move || format!("transform: {}", surface.model_transform(pose.get(), elapsed.get()))
            >
                {(0..surface.layers)
                    .map(|index| {
                        let layer_style = format!("transform: translateZ({:.1}px)", surface.layer_offset(index));
                        view! {
                            <img
                                src=src
                                alt=move || if index == 0 { alt.get() } else { "" }
                                aria-hidden=(index != 0).then_some("true")
                                class="model-viewer-layer"
                                style=layer_style
                                draggable="false"
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
