//! Glow sequence playback with state management and tick pacing.
//!
//! Provides [`SequencePlayer`] which plays one decoded [`FlashPattern`]
//! through the shared glow envelope on up to two channels, handling output
//! gating, tick-interval switching, and the post-flash cooldown. Also
//! defines the [`GlowOutput`] trait for hardware abstraction.

use crate::envelope::{GLOW_ENVELOPE, PLAYBACK_STEPS};
use crate::pattern::{Channel, FlashPattern};
use crate::time::{PowerMode, TickInterval, TickTimer};

/// Trait for abstracting the glow channel hardware.
///
/// Implement this for your LED output (PWM compare registers, a DAC, a
/// smart-LED driver). Levels are 8-bit duty cycles; `enable`/`disable`
/// gate the output stage so disabled channels cost no power. Handle any
/// hardware errors internally - these methods cannot fail.
pub trait GlowOutput {
    /// Sets the duty cycle of one channel. Idempotent and immediate.
    fn set_level(&mut self, channel: Channel, level: u8);

    /// Connects the channel's output stage (e.g. the PWM compare output).
    fn enable(&mut self, channel: Channel);

    /// Disconnects the channel's output stage and reverts its pin to the
    /// power-saving configuration.
    fn disable(&mut self, channel: Channel);
}

/// The current state of a sequence player.
///
/// Playback is fully blocking, so outside a [`SequencePlayer::play`] call
/// the state is always `Idle`. The machine cycles forever; there is no
/// terminal state and no cancellation once a flash begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlayerState {
    /// Waiting for the next flash decision.
    Idle,
    /// Traversing the glow envelope on fine ticks.
    Flashing,
    /// Post-flash pause proportional to how many channels glowed.
    Cooldown,
}

/// What a completed flash event actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlaybackReport {
    /// Envelope steps traversed (always [`PLAYBACK_STEPS`]).
    pub steps: u8,
    /// Channels that glowed during the event.
    pub channels_active: u8,
    /// Coarse ticks spent in power-down afterwards.
    pub cooldown_ticks: u8,
}

/// Plays decoded flash patterns on two glow channels.
///
/// The player owns its output hardware and borrows the tick timer per
/// call, since the timer is shared with the idle-polling control loop.
pub struct SequencePlayer<O: GlowOutput> {
    output: O,
    state: PlayerState,
}

impl<O: GlowOutput> SequencePlayer<O> {
    /// Creates an idle player with both channels dark and gated off.
    pub fn new(mut output: O) -> Self {
        for channel in Channel::ALL {
            output.set_level(channel, 0);
            output.disable(channel);
        }

        Self {
            output,
            state: PlayerState::Idle,
        }
    }

    /// Plays one flash event to completion.
    ///
    /// Blocks for the full 20-step envelope traversal plus cooldown; once
    /// started, a flash always runs to completion. Each enabled channel
    /// follows the shared envelope through its own offset and intensity
    /// cursor; a silent pattern still paces through every step wait. On
    /// exit both channels are forced to 0 and gated off regardless of
    /// which ones ran, and the tick interval is back at
    /// [`TickInterval::IdlePoll`].
    pub fn play<T: TickTimer>(&mut self, pattern: FlashPattern, timer: &mut T) -> PlaybackReport {
        self.state = PlayerState::Flashing;

        for channel in Channel::ALL {
            if pattern.channel(channel).enabled {
                self.output.enable(channel);
            }
        }

        timer.set_interval(TickInterval::Animation);
        for step in 0..PLAYBACK_STEPS {
            for channel in Channel::ALL {
                let plan = pattern.channel(channel);
                if plan.enabled {
                    let level = GLOW_ENVELOPE[step + plan.offset as usize] >> plan.intensity_shift;
                    self.output.set_level(channel, level);
                }
            }
            timer.wait_ticks(1, PowerMode::Idle);
        }
        // Restore the coarse interval before the long cooldown sleeps.
        timer.set_interval(TickInterval::IdlePoll);

        for channel in Channel::ALL {
            self.output.set_level(channel, 0);
            self.output.disable(channel);
        }

        self.state = PlayerState::Cooldown;
        let cooldown_ticks = pattern.enabled_count();
        if cooldown_ticks > 0 {
            timer.wait_ticks(cooldown_ticks, PowerMode::PowerDown);
        }
        self.state = PlayerState::Idle;

        PlaybackReport {
            steps: PLAYBACK_STEPS as u8,
            channels_active: pattern.enabled_count(),
            cooldown_ticks,
        }
    }

    /// Returns the current player state.
    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Returns a reference to the output hardware.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Returns a mutable reference to the output hardware.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}
