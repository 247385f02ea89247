//! Orbit camera auto-return
//!
//! The viewer can be dragged freely. Once the user has left it alone for the
//! idle threshold, each step moves the camera a fixed fraction of the way back
//! to the rest pose. Close enough to rest, the controller settles and hands
//! the camera back to auto-rotation.
//!
//! Time is passed in explicitly as a [`Duration`] since an arbitrary origin,
//! which keeps the controller free of any clock.

use std::f64::consts::{PI, TAU};
use std::time::Duration;

/// Camera orientation on the orbit sphere, in radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPose {
    /// Angle from the vertical axis
    pub polar: f64,
    /// Angle around the vertical axis
    pub azimuthal: f64,
}

impl OrbitPose {
    pub const fn new(polar: f64, azimuthal: f64) -> Self {
        Self { polar, azimuthal }
    }

    pub fn is_finite(&self) -> bool {
        self.polar.is_finite() && self.azimuthal.is_finite()
    }

    /// Per-axis absolute distance to `other`
    pub fn distance_to(&self, other: &OrbitPose) -> (f64, f64) {
        (
            (self.polar - other.polar).abs(),
            (self.azimuthal - other.azimuthal).abs(),
        )
    }
}

impl Default for OrbitPose {
    fn default() -> Self {
        Self::new(PI / 3.0, PI / 4.0)
    }
}

/// Tuning for [`IdleReturn`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdleReturnConfig {
    /// Quiet time after an interaction before the camera heads home
    pub idle_threshold: Duration,
    /// Fraction of the remaining distance covered per step
    pub return_factor: f64,
    /// An axis closer than this is left alone
    pub move_epsilon: f64,
    /// Both axes closer than this settle the controller
    pub settle_epsilon: f64,
    /// A wheel gesture counts as an interaction for this long
    pub wheel_release: Duration,
    /// Auto-rotation speed, 1.0 is one orbit per 60 seconds at 60 steps/s
    pub auto_rotate_speed: f64,
    /// Drag sensitivity
    pub rotate_speed: f64,
    pub min_polar: f64,
    pub max_polar: f64,
}

impl Default for IdleReturnConfig {
    fn default() -> Self {
        Self {
            idle_threshold: Duration::from_millis(3000),
            return_factor: 0.05,
            move_epsilon: 0.01,
            settle_epsilon: 0.1,
            wheel_release: Duration::from_millis(250),
            auto_rotate_speed: 1.5,
            rotate_speed: 1.0,
            min_polar: PI / 8.0,
            max_polar: PI / 1.8,
        }
    }
}

/// What a single [`IdleReturn::step`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Input is active, the user owns the camera
    Held,
    /// Input ended less than the idle threshold ago
    Cooling,
    /// Camera moved toward the rest pose
    Returning,
    /// Camera reached the rest pose on this step
    Settled,
    /// Nothing to return from; auto-rotation advanced the camera
    Orbiting,
    /// Nothing to return from and auto-rotation is off
    Idle,
}

/// Idle-timeout driven return-to-rest controller
#[derive(Debug, Clone)]
pub struct IdleReturn {
    config: IdleReturnConfig,
    rest_pose: OrbitPose,
    rest_captured: bool,
    current: OrbitPose,
    interacting: bool,
    last_interaction_end: Option<Duration>,
    wheel_release_at: Option<Duration>,
    auto_rotate: bool,
}

impl IdleReturn {
    /// Controller starting at `initial`, auto-rotating, with no input yet.
    pub fn new(config: IdleReturnConfig, initial: OrbitPose) -> Self {
        let initial = if initial.is_finite() {
            initial
        } else {
            OrbitPose::default()
        };

        Self {
            config,
            rest_pose: initial,
            rest_captured: false,
            current: initial,
            interacting: false,
            last_interaction_end: None,
            wheel_release_at: None,
            auto_rotate: true,
        }
    }

    /// Snapshot the current pose as the rest pose.
    ///
    /// Called by the rendering layer once the view has stabilized. Only the
    /// first call has an effect.
    pub fn capture_rest_pose(&mut self) -> bool {
        if self.rest_captured {
            return false;
        }
        self.rest_pose = self.current;
        self.rest_captured = true;
        tracing::debug!(
            polar = self.rest_pose.polar,
            azimuthal = self.rest_pose.azimuthal,
            "rest pose captured"
        );
        true
    }

    pub fn interaction_start(&mut self) {
        self.interacting = true;
        self.auto_rotate = false;
        self.last_interaction_end = None;
        self.wheel_release_at = None;
    }

    /// Ends the current interaction. Without an active one this is ignored,
    /// e.g. a pointer leaving the viewer without having pressed.
    pub fn interaction_end(&mut self, now: Duration) {
        if !self.interacting {
            return;
        }
        self.interacting = false;
        self.wheel_release_at = None;
        self.last_interaction_end = Some(now);
    }

    /// A wheel gesture: an interaction that releases itself shortly after.
    /// While a pointer is held the pointer owns the release.
    pub fn wheel(&mut self, now: Duration) {
        let pointer_held = self.interacting && self.wheel_release_at.is_none();
        self.interaction_start();
        if !pointer_held {
            self.wheel_release_at = Some(now + self.config.wheel_release);
        }
    }

    /// Rotate by a pointer drag of `dx`, `dy` pixels over a viewer of
    /// `viewport_height` pixels. Ignored while no interaction is active.
    pub fn drag(&mut self, dx: f64, dy: f64, viewport_height: f64) {
        if !self.interacting || viewport_height <= 0.0 {
            return;
        }
        let azimuthal_delta = TAU * dx / viewport_height * self.config.rotate_speed;
        let polar_delta = TAU * dy / viewport_height * self.config.rotate_speed;
        if !azimuthal_delta.is_finite() || !polar_delta.is_finite() {
            return;
        }
        self.current.azimuthal = wrap_angle(self.current.azimuthal - azimuthal_delta);
        self.current.polar = self.clamp_polar(self.current.polar - polar_delta);
    }

    /// Place the camera directly. Non-finite poses are rejected.
    pub fn set_current_pose(&mut self, pose: OrbitPose) -> bool {
        if !pose.is_finite() {
            tracing::warn!(?pose, "ignoring non-finite orbit pose");
            return false;
        }
        self.current = pose;
        true
    }

    /// Advance the controller by one frame.
    pub fn step(&mut self, now: Duration) -> StepOutcome {
        if let Some(release_at) = self.wheel_release_at {
            if now >= release_at {
                self.interaction_end(release_at);
            }
        }

        if self.interacting {
            return StepOutcome::Held;
        }

        let Some(ended_at) = self.last_interaction_end else {
            return if self.auto_rotate {
                let step = TAU / 3600.0 * self.config.auto_rotate_speed;
                self.current.azimuthal = wrap_angle(self.current.azimuthal + step);
                StepOutcome::Orbiting
            } else {
                StepOutcome::Idle
            };
        };

        if now.saturating_sub(ended_at) <= self.config.idle_threshold {
            return StepOutcome::Cooling;
        }

        let rest = self.rest_pose;
        let (polar_distance, azimuthal_distance) = self.current.distance_to(&rest);

        if polar_distance > self.config.move_epsilon {
            self.current.polar = lerp(self.current.polar, rest.polar, self.config.return_factor);
        }
        if azimuthal_distance > self.config.move_epsilon {
            self.current.azimuthal = lerp(
                self.current.azimuthal,
                rest.azimuthal,
                self.config.return_factor,
            );
        }

        let (polar_distance, azimuthal_distance) = self.current.distance_to(&rest);
        if polar_distance < self.config.settle_epsilon
            && azimuthal_distance < self.config.settle_epsilon
        {
            self.auto_rotate = true;
            self.last_interaction_end = None;
            tracing::trace!("orbit camera settled at rest pose");
            return StepOutcome::Settled;
        }

        StepOutcome::Returning
    }

    fn clamp_polar(&self, polar: f64) -> f64 {
        polar.clamp(self.config.min_polar, self.config.max_polar)
    }

    pub fn current_pose(&self) -> OrbitPose {
        self.current
    }

    pub fn rest_pose(&self) -> OrbitPose {
        self.rest_pose
    }

    pub fn auto_rotate_enabled(&self) -> bool {
        self.auto_rotate
    }

    pub fn is_interacting(&self) -> bool {
        self.interacting
    }

    pub fn last_interaction_end(&self) -> Option<Duration> {
        self.last_interaction_end
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Wrap an angle into `(-PI, PI]`
fn wrap_angle(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped == -PI { PI } else { wrapped }
}
