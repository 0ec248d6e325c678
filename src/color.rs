use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("color channel {channel} is {value}, outside 0.0..=1.0")]
pub struct ColorRangeError {
    pub channel: char,
    pub value: f32,
}

/// Reports the first channel outside the unit range. Nothing is clamped.
pub fn validate_rgba(rgba: &[f32; 4]) -> Result<(), ColorRangeError> {
    for (channel, &value) in ['r', 'g', 'b', 'a'].into_iter().zip(rgba) {
        if !(0.0..=1.0).contains(&value) {
            return Err(ColorRangeError { channel, value });
        }
    }
    Ok(())
}

/// A color channel that ping-pongs between 0.0 and 1.0, one step per frame.
#[derive(Debug, Clone, Copy)]
pub struct ColorCycle {
    value: f32,
    increment: f32,
}

impl ColorCycle {
    pub fn new(start: f32, step: f32) -> Self {
        Self {
            value: start.clamp(0.0, 1.0),
            increment: step.abs(),
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Returns the value for this frame and moves to the next one.
    pub fn advance(&mut self) -> f32 {
        let current = self.value;
        let next = self.value + self.increment;
        if next > 1.0 {
            self.value = 1.0;
            self.increment = -self.increment.abs();
        } else if next < 0.0 {
            self.value = 0.0;
            self.increment = self.increment.abs();
        } else {
            self.value = next;
        }
        current
    }
}

impl Default for ColorCycle {
    fn default() -> Self {
        Self::new(0.0, 0.05)
    }
}
