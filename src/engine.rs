//! The firefly control loop.
//!
//! Provides [`FireflyEngine`] which owns all mutable state of the device —
//! ambient filter, flash budget, random source, calibrated threshold — and
//! orchestrates one control cycle at a time: sense, filter, decide, play or
//! rest. There are no globals; the engine struct is the single owner.

use heapless::Vec;

use crate::ambient::AmbientFilter;
use crate::budget::FlashBudget;
use crate::pattern::{Channel, FlashPattern};
use crate::player::{GlowOutput, PlaybackReport, SequencePlayer};
use crate::random::Lfsr16;
use crate::time::{PowerMode, TickInterval, TickTimer};

/// Readings averaged into the ambient baseline at startup.
pub const CALIBRATION_SAMPLES: usize = 4;

/// Trait for abstracting the ambient light sensor.
///
/// # Liveness
///
/// `read_light_level` is assumed to complete in bounded time; the engine
/// busy-waits on it with no timeout, so a stuck sensor halts the device
/// indefinitely. That single point of failure is accepted — the core adds
/// no fault handling on top of the hardware.
pub trait LightSensor {
    /// Returns one raw brightness reading, in sensor-specific units.
    fn read_light_level(&mut self) -> u16;
}

/// What one control cycle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleOutcome {
    /// Darkness was trusted and a token was available: a flash played.
    Flashed(PlaybackReport),
    /// Darkness was trusted but the budget is empty: nothing played.
    Exhausted,
    /// Ambient light is present: the budget recharged by one token.
    Resting,
}

/// Errors that can occur during engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineError {
    /// The engine has no ambient baseline yet; call
    /// [`FireflyEngine::calibrate`] first.
    NotCalibrated,
}

impl core::fmt::Display for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EngineError::NotCalibrated => {
                write!(f, "ambient threshold not calibrated")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}

/// Drives the whole firefly from sensor to glow channels.
///
/// # Type Parameters
/// * `S` - Light sensor implementation type
/// * `O` - Glow output implementation type
/// * `T` - Tick timer implementation type
pub struct FireflyEngine<S: LightSensor, O: GlowOutput, T: TickTimer> {
    sensor: S,
    timer: T,
    player: SequencePlayer<O>,
    filter: AmbientFilter,
    budget: FlashBudget,
    rng: Lfsr16,
    threshold: Option<u16>,
}

impl<S: LightSensor, O: GlowOutput, T: TickTimer> FireflyEngine<S, O, T> {
    /// Creates an uncalibrated engine with both channels dark, a full
    /// flash budget, and zero darkness confidence.
    pub fn new(sensor: S, output: O, timer: T) -> Self {
        Self {
            sensor,
            timer,
            player: SequencePlayer::new(output),
            filter: AmbientFilter::new(),
            budget: FlashBudget::new(),
            rng: Lfsr16::new(),
            threshold: None,
        }
    }

    /// Captures the ambient baseline: the mean of four consecutive
    /// readings becomes the light threshold.
    ///
    /// Meant to run once at power-up, while the ambient level still
    /// represents "normal" light for the deployment spot. Calling it again
    /// replaces the threshold, but [`run`](Self::run) never does.
    pub fn calibrate(&mut self) -> u16 {
        let mut samples: Vec<u16, CALIBRATION_SAMPLES> = Vec::new();
        while !samples.is_full() {
            let _ = samples.push(self.sensor.read_light_level());
        }

        let sum: u32 = samples.iter().map(|&sample| u32::from(sample)).sum();
        let threshold = (sum / CALIBRATION_SAMPLES as u32) as u16;
        self.threshold = Some(threshold);
        threshold
    }

    /// Blinks channel 1 twice at the indicator pace to signal that setup
    /// completed, then returns to the coarse idle interval.
    pub fn signal_ready(&mut self) {
        self.timer.set_interval(TickInterval::Indicator);
        self.player.output_mut().enable(Channel::Ch1);

        self.player.output_mut().set_level(Channel::Ch1, 255);
        self.timer.wait_ticks(1, PowerMode::Idle);
        self.player.output_mut().set_level(Channel::Ch1, 0);
        self.timer.wait_ticks(1, PowerMode::Idle);
        self.player.output_mut().set_level(Channel::Ch1, 255);
        self.timer.wait_ticks(1, PowerMode::Idle);
        self.player.output_mut().set_level(Channel::Ch1, 0);

        self.player.output_mut().disable(Channel::Ch1);
        self.timer.set_interval(TickInterval::IdlePoll);
    }

    /// Runs one control cycle.
    ///
    /// Reads the light level, updates the darkness filter, and then either
    /// plays a flash (consuming one token), reports budget exhaustion, or
    /// recharges the budget. Non-flash cycles end with one coarse tick of
    /// power-down sleep; flash cycles end with the player's own cooldown.
    ///
    /// Within a cycle everything runs in strict program order — there is
    /// exactly one execution context, and a flash always completes before
    /// the next reading is taken.
    ///
    /// # Errors
    /// [`EngineError::NotCalibrated`] if no threshold has been captured.
    pub fn run_cycle(&mut self) -> Result<CycleOutcome, EngineError> {
        let threshold = self.threshold.ok_or(EngineError::NotCalibrated)?;

        let reading = self.sensor.read_light_level();
        self.filter.observe(reading, threshold);

        if self.filter.is_dark() {
            if self.budget.can_flash() {
                // Fold the live reading into the draw for a little real
                // entropy on top of the deterministic sequence.
                let pattern = FlashPattern::decode(self.rng.draw(), reading);
                self.budget.consume();
                let report = self.player.play(pattern, &mut self.timer);
                Ok(CycleOutcome::Flashed(report))
            } else {
                // Still dark: the budget only recharges in light.
                self.timer.wait_ticks(1, PowerMode::PowerDown);
                Ok(CycleOutcome::Exhausted)
            }
        } else {
            self.budget.recharge();
            self.timer.wait_ticks(1, PowerMode::PowerDown);
            Ok(CycleOutcome::Resting)
        }
    }

    /// Runs the firefly forever.
    ///
    /// Calibrates and signals ready if that has not happened yet, then
    /// cycles until power loss. There is no shutdown path.
    pub fn run(&mut self) -> ! {
        if self.threshold.is_none() {
            self.calibrate();
            self.signal_ready();
        }

        loop {
            // Calibrated above, so the cycle cannot fail.
            let _ = self.run_cycle();
        }
    }

    /// Returns the calibrated threshold, if any.
    pub fn threshold(&self) -> Option<u16> {
        self.threshold
    }

    /// Returns the current darkness confidence level.
    pub fn darkness(&self) -> i8 {
        self.filter.darkness()
    }

    /// Returns the remaining flash tokens.
    pub fn tokens(&self) -> i16 {
        self.budget.tokens()
    }

    /// Returns a reference to the sequence player.
    pub fn player(&self) -> &SequencePlayer<O> {
        &self.player
    }

    /// Returns a reference to the output hardware.
    pub fn output(&self) -> &O {
        self.player.output()
    }

    /// Returns a reference to the tick timer.
    pub fn timer(&self) -> &T {
        &self.timer
    }
}
