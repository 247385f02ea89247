//! Core logic: preloader gate, orbit camera controller, links and the waitlist backend

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod db;
pub mod idle_return;
pub mod links;
pub mod load_gate;
#[cfg(feature = "ssr")]
pub mod waitlist;

pub use idle_return::{IdleReturn, IdleReturnConfig, OrbitPose, StepOutcome};
pub use links::{LinkKey, get_url, is_external_url, safe_url};
pub use load_gate::{GatePhase, LoadGate, LoadGateConfig, Scheduler};
