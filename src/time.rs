//! Tick-based waiting abstraction for platform-agnostic timing.
//!
//! The firefly has exactly one time source: a periodic timer interrupt that
//! increments a tick counter and immediately re-arms itself. All waiting is
//! "sleep in a low-power state until N ticks have fired" — there are no
//! instants or durations to compare, only counted wake-ups.

/// Sleep depth to hold while waiting for ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerMode {
    /// Light sleep; peripherals such as the PWM timer keep running.
    Idle,
    /// Deepest available sleep between events.
    PowerDown,
}

/// Tick period selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickInterval {
    /// Fine-grained interval (~32 ms) pacing the glow animation steps.
    Animation,
    /// Short interval (~125 ms) pacing the startup indicator blinks.
    Indicator,
    /// Coarse interval (~8 s) between ambient-light polls.
    IdlePoll,
}

/// Trait for abstracting the tick timer and low-power waits.
///
/// Implement this over your platform's periodic interrupt source (a
/// watchdog timer in interrupt mode works well). The interrupt handler
/// should do nothing but count the tick and return; all logic stays in the
/// main flow.
pub trait TickTimer {
    /// Blocks until `count` tick interrupts have fired, holding the
    /// requested power mode between wake-ups.
    ///
    /// The tick count is reset on entry, so the wait always spans `count`
    /// full intervals from the call, never leftovers from a previous wait.
    fn wait_ticks(&mut self, count: u8, mode: PowerMode);

    /// Switches the tick period.
    ///
    /// Implementations must make the change atomic with respect to the
    /// tick interrupt (disable the interrupt, reconfigure, re-enable);
    /// a tick firing mid-reconfiguration can corrupt the timer state.
    fn set_interval(&mut self, interval: TickInterval);
}
