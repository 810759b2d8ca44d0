//! Shared test infrastructure for firefly-sequencer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use firefly_sequencer::{Channel, GlowOutput, LightSensor, PowerMode, TickInterval, TickTimer};

// ============================================================================
// Mock Light Sensor
// ============================================================================

/// Mock sensor that plays back a scripted reading sequence.
///
/// The script is a list of `(reading, repeat_count)` segments; once it is
/// exhausted the last reading repeats forever, so long control-loop tests
/// never run dry.
pub struct MockSensor {
    segments: heapless::Vec<(u16, u32), 64>,
    segment: usize,
    used_in_segment: u32,
    reads_taken: usize,
}

impl MockSensor {
    /// One reading per script entry.
    pub fn new(readings: &[u16]) -> Self {
        let mut segments = heapless::Vec::new();
        for &reading in readings {
            segments.push((reading, 1)).expect("reading script too long");
        }
        Self::from_segments(segments)
    }

    /// Script of `(reading, repeat_count)` segments.
    pub fn stepped(script: &[(u16, u32)]) -> Self {
        let mut segments = heapless::Vec::new();
        for &segment in script {
            segments.push(segment).expect("reading script too long");
        }
        Self::from_segments(segments)
    }

    fn from_segments(segments: heapless::Vec<(u16, u32), 64>) -> Self {
        assert!(!segments.is_empty(), "sensor script must not be empty");
        Self {
            segments,
            segment: 0,
            used_in_segment: 0,
            reads_taken: 0,
        }
    }

    /// Number of reads the engine has taken so far.
    pub fn reads_taken(&self) -> usize {
        self.reads_taken
    }
}

impl LightSensor for MockSensor {
    fn read_light_level(&mut self) -> u16 {
        let last = self.segments.len() - 1;
        let (reading, count) = self.segments[self.segment];
        self.used_in_segment += 1;
        if self.used_in_segment >= count && self.segment < last {
            self.segment += 1;
            self.used_in_segment = 0;
        }
        self.reads_taken += 1;
        reading
    }
}

// ============================================================================
// Mock Glow Output
// ============================================================================

/// One recorded hardware call on the mock output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputEvent {
    Set(Channel, u8),
    Enable(Channel),
    Disable(Channel),
}

/// Mock output that records hardware calls for testing.
///
/// The event history is bounded; once full, further events are counted but
/// not stored. Long-running tests should assert on the counters instead.
pub struct MockOutput {
    events: heapless::Vec<OutputEvent, 256>,
    set_calls: usize,
    levels: [u8; 2],
}

impl MockOutput {
    pub fn new() -> Self {
        Self {
            events: heapless::Vec::new(),
            set_calls: 0,
            levels: [0; 2],
        }
    }

    pub fn events(&self) -> &[OutputEvent] {
        &self.events
    }

    /// Total number of `set_level` calls, including any beyond the
    /// recorded history.
    pub fn set_calls(&self) -> usize {
        self.set_calls
    }

    /// Current duty cycle of a channel.
    pub fn level(&self, channel: Channel) -> u8 {
        self.levels[channel.index()]
    }

    /// All levels written to one channel, in order.
    pub fn levels_for(&self, channel: Channel) -> heapless::Vec<u8, 64> {
        self.events
            .iter()
            .filter_map(|event| match event {
                OutputEvent::Set(ch, level) if *ch == channel => Some(*level),
                _ => None,
            })
            .collect()
    }

    pub fn enable_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, OutputEvent::Enable(_)))
            .count()
    }
}

impl GlowOutput for MockOutput {
    fn set_level(&mut self, channel: Channel, level: u8) {
        self.set_calls += 1;
        self.levels[channel.index()] = level;
        let _ = self.events.push(OutputEvent::Set(channel, level));
    }

    fn enable(&mut self, channel: Channel) {
        let _ = self.events.push(OutputEvent::Enable(channel));
    }

    fn disable(&mut self, channel: Channel) {
        let _ = self.events.push(OutputEvent::Disable(channel));
    }
}

// ============================================================================
// Mock Tick Timer
// ============================================================================

/// Mock timer that records waits and interval changes without sleeping.
pub struct MockTimer {
    waits: heapless::Vec<(u8, PowerMode), 256>,
    intervals: heapless::Vec<TickInterval, 64>,
    ticks_waited: u32,
    current_interval: TickInterval,
}

impl MockTimer {
    pub fn new() -> Self {
        Self {
            waits: heapless::Vec::new(),
            intervals: heapless::Vec::new(),
            ticks_waited: 0,
            current_interval: TickInterval::IdlePoll,
        }
    }

    pub fn waits(&self) -> &[(u8, PowerMode)] {
        &self.waits
    }

    pub fn intervals(&self) -> &[TickInterval] {
        &self.intervals
    }

    /// Total ticks slept across all waits, including any beyond the
    /// recorded history.
    pub fn ticks_waited(&self) -> u32 {
        self.ticks_waited
    }

    pub fn current_interval(&self) -> TickInterval {
        self.current_interval
    }

    pub fn waits_in_mode(&self, mode: PowerMode) -> usize {
        self.waits
            .iter()
            .filter(|(_, wait_mode)| *wait_mode == mode)
            .count()
    }
}

impl TickTimer for MockTimer {
    fn wait_ticks(&mut self, count: u8, mode: PowerMode) {
        self.ticks_waited += u32::from(count);
        let _ = self.waits.push((count, mode));
    }

    fn set_interval(&mut self, interval: TickInterval) {
        self.current_interval = interval;
        let _ = self.intervals.push(interval);
    }
}
