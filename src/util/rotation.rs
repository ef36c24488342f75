//! Spin math for the decorative cube.
//!
//! The cube shares one X/Y angle that only ever decrements; each spin kind
//! pins its own Z angle. Output is a CSS transform string applied with a
//! fixed transition.

#[cfg(test)]
#[path = "rotation_test.rs"]
mod rotation_test;

/// CSS transition applied alongside every spin transform.
pub const SPIN_TRANSITION: &str = "transform 0.5s ease";

/// One-shot hover window; repeat hovers inside it are ignored.
pub const HOVER_DEBOUNCE_MS: u64 = 1000;

const START_DEGREES: f64 = 45.0;
const SPIN_STEP_DEGREES: f64 = -90.0;
const CHAT_SPIN_STEP_DEGREES: f64 = -10.0;
const SPIN_Z_DEGREES: f64 = -180.0;
const CHAT_SPIN_Z_DEGREES: f64 = -90.0;

/// Rotation counter for the cube.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationSpin {
    degrees: f64,
}

impl Default for RotationSpin {
    fn default() -> Self {
        Self {
            degrees: START_DEGREES,
        }
    }
}

impl RotationSpin {
    /// The full quarter-turn used for clicks, hovers, and page load.
    pub fn spin(&mut self) -> String {
        self.degrees += SPIN_STEP_DEGREES;
        transform(self.degrees, SPIN_Z_DEGREES)
    }

    /// The smaller nudge applied on chat activity.
    pub fn chat_spin(&mut self) -> String {
        self.degrees += CHAT_SPIN_STEP_DEGREES;
        transform(self.degrees, CHAT_SPIN_Z_DEGREES)
    }
}

fn transform(xy: f64, z: f64) -> String {
    format!("rotateX({xy}deg) rotateY({xy}deg) rotateZ({z}deg)")
}
