//! Validated tuning parameters for the diffusion pass.

use miasma_core::TuningError;

/// The two numeric knobs of the diffusion pass.
///
/// - `decay` controls spatial attenuation: a neighbor's contribution is
///   scaled by `exp(-decay * distance)`. Zero means no attenuation.
/// - `momentum` controls temporal smoothing: each cell moves from its
///   previous value toward the newly computed extreme by this fraction.
///   Zero freezes the diffused field (injection still applies); one
///   adopts the extreme outright each tick.
///
/// Both are validated at construction and at every setter, so the tick
/// loop never has to clamp or re-check them. Both may be changed between
/// ticks and are read at the start of each tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tuning {
    decay: f32,
    momentum: f32,
}

impl Tuning {
    /// Create a tuning pair, validating both values.
    ///
    /// # Errors
    ///
    /// - [`TuningError::InvalidDecay`] if `decay` is negative, NaN, or
    ///   infinite.
    /// - [`TuningError::InvalidMomentum`] if `momentum` lies outside
    ///   `[0, 1]` (NaN included).
    pub fn new(decay: f32, momentum: f32) -> Result<Self, TuningError> {
        validate_decay(decay)?;
        validate_momentum(momentum)?;
        Ok(Self { decay, momentum })
    }

    /// Spatial attenuation rate.
    pub fn decay(&self) -> f32 {
        self.decay
    }

    /// Adoption rate toward the computed extreme.
    pub fn momentum(&self) -> f32 {
        self.momentum
    }

    /// Replace the decay value, validating it.
    pub fn set_decay(&mut self, decay: f32) -> Result<(), TuningError> {
        validate_decay(decay)?;
        self.decay = decay;
        Ok(())
    }

    /// Replace the momentum value, validating it.
    pub fn set_momentum(&mut self, momentum: f32) -> Result<(), TuningError> {
        validate_momentum(momentum)?;
        self.momentum = momentum;
        Ok(())
    }
}

impl Default for Tuning {
    /// Decay 0.3, momentum 0.8 — a gentle field that trails its sources.
    fn default() -> Self {
        Self {
            decay: 0.3,
            momentum: 0.8,
        }
    }
}

fn validate_decay(decay: f32) -> Result<(), TuningError> {
    if !decay.is_finite() || decay < 0.0 {
        return Err(TuningError::InvalidDecay { value: decay });
    }
    Ok(())
}

fn validate_momentum(momentum: f32) -> Result<(), TuningError> {
    if !(0.0..=1.0).contains(&momentum) {
        return Err(TuningError::InvalidMomentum { value: momentum });
    }
    Ok(())
}
