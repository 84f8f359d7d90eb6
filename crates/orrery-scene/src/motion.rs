//! Per-frame motion - body spin, marker orbits, simulation clock

use bevy::prelude::*;

use crate::scene::{OrbitingMarker, SpinningBody};

/// Accumulated simulation time with a stop handle.
///
/// Motion systems are gated on [`SimulationClock::is_running`]; stopping the
/// clock freezes every body and marker in place without tearing the scene
/// down, which keeps shutdown and tests clean.
#[derive(Debug, Clone, Resource)]
pub struct SimulationClock {
    elapsed: f32,
    running: bool,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            running: true,
        }
    }
}

impl SimulationClock {
    /// Seconds of simulation time accumulated so far.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance the clock; a stopped clock ignores the delta.
    pub fn advance(&mut self, dt: f32) {
        if self.running {
            self.elapsed += dt;
        }
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn resume(&mut self) {
        self.running = true;
    }

    /// Stop the animation loop for good; identical to pause today but kept
    /// separate so callers express intent.
    pub fn stop(&mut self) {
        self.running = false;
    }
}

/// Run condition gating the motion pass.
pub fn simulation_running(clock: Res<SimulationClock>) -> bool {
    clock.is_running()
}

/// Plugin for the shared per-frame motion pass
pub struct MotionPlugin;

impl Plugin for MotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationClock>().add_systems(
            Update,
            (advance_clock, spin_bodies, update_markers)
                .chain()
                .run_if(simulation_running),
        );
    }
}

fn advance_clock(time: Res<Time>, mut clock: ResMut<SimulationClock>) {
    clock.advance(time.delta_secs());
}

/// Increment each body's rotation by its fixed step.
///
/// The step is per frame callback, not per elapsed second; slower displays
/// spin slower. Deliberate, not a missing delta-time factor.
pub fn spin_bodies(mut query: Query<(&SpinningBody, &mut Transform)>) {
    for (body, mut transform) in query.iter_mut() {
        transform.rotate_y(body.step);
    }
}

/// Recompute every marker position from its stored path and the clock.
///
/// One shared pass over the marker collection; markers have no independent
/// schedules or termination.
pub fn update_markers(
    clock: Res<SimulationClock>,
    mut query: Query<(&OrbitingMarker, &mut Transform)>,
) {
    let t = clock.elapsed();
    for (marker, mut transform) in query.iter_mut() {
        transform.translation = marker.path.position_at(t);
    }
}
