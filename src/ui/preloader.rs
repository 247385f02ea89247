//! Full-screen preloader
//!
//! Drives a [`LoadGate`](crate::core::LoadGate) from browser timers and the window `load` event.
//! Stays on screen for at least the minimum display time, then fades out and
//! calls `on_complete` once.

#[cfg(not(feature = "ssr"))]
use std::time::Duration;

use leptos::prelude::*;

use crate::core::load_gate::{GatePhase, LoadGateConfig};
#[cfg(not(feature = "ssr"))]
use crate::core::load_gate::{LoadGate, Scheduler};

/// Schedules gate timers with `setTimeout`. Handles are kept so the timers
/// can be cleared when the preloader is unmounted.
#[cfg(not(feature = "ssr"))]
#[derive(Clone, Copy)]
struct TimeoutScheduler {
    handles: StoredValue<Vec<TimeoutHandle>>,
}

#[cfg(not(feature = "ssr"))]
impl TimeoutScheduler {
    fn clear_all(&self) {
        if let Some(handles) = self.handles.try_update_value(std::mem::take) {
            for handle in handles {
                handle.clear();
            }
        }
    }
}

#[cfg(not(feature = "ssr"))]
impl Scheduler for TimeoutScheduler {
    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        match set_timeout_with_handle(task, delay) {
            Ok(handle) => self.handles.update_value(|handles| handles.push(handle)),
            Err(err) => leptos::logging::error!("Failed to schedule preloader timer: {:?}", err),
        }
    }
}

/// Opacity class for each gate phase
fn overlay_class(phase: GatePhase) -> &'static str {
    match phase {
        GatePhase::Waiting => "preloader",
        GatePhase::FadingOut => "preloader preloader-fading",
        GatePhase::Done => "preloader preloader-hidden",
    }
}

#[component]
pub fn Preloader(
    /// Called once, after the fade-out finished
    #[prop(into)]
    on_complete: Callback<()>,
    #[prop(default = LoadGateConfig::default())] config: LoadGateConfig,
) -> impl IntoView {
    let phase = RwSignal::new(GatePhase::Waiting);
    let fade_style = format!("transition-duration: {}ms", config.fade_duration.as_millis());

    #[cfg(not(feature = "ssr"))]
    {
        let scheduler = TimeoutScheduler {
            handles: StoredValue::new(Vec::new()),
        };

        let already_loaded = document().ready_state() == "complete";
        let gate = LoadGate::start(config, scheduler, already_loaded, move || {
            on_complete.run(())
        });
        gate.on_phase_change(move |next| {
            let _ = phase.try_set(next);
        });

        let load_handle = window_event_listener(leptos::ev::load, move |_| {
            gate.signal_resources_ready();
        });

        on_cleanup(move || {
            drop(load_handle);
            scheduler.clear_all();
        });
    }

    #[cfg(feature = "ssr")]
    let _ = on_complete;

    view! {
        <Show when=move || phase.get().is_visible()>
            <div
                class=move || overlay_class(phase.get())
                style=fade_style.clone()
                role="status"
                aria-live="polite"
                aria-busy=move || (phase.get() == GatePhase::Waiting).to_string()
            >
                <img
                    src="/images/inkfinity-logo.svg"
                    alt="Inkfinity"
                    class="preloader-logo"
                    draggable="false"
                />
                <div class="preloader-bar" aria-hidden="true">
                    <div class="preloader-bar-fill"></div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_class_per_phase() {
        assert_eq!(overlay_class(GatePhase::Waiting), "preloader");
        assert!(overlay_class(GatePhase::FadingOut).contains("preloader-fading"));
        assert!(overlay_class(GatePhase::Done).contains("preloader-hidden"));
    }
}
