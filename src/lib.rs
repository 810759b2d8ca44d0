#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`FireflyEngine`**: Drives the whole control loop — sense, filter, decide, glow
//! - **`AmbientFilter`**: Bounded darkness-confidence counter over brightness readings
//! - **`FlashBudget`**: Depletable token economy bounding total flash activity
//! - **`Lfsr16`**: Deterministic 16-bit pseudo-random source for pattern draws
//! - **`FlashPattern`**: Decoded per-channel enable/offset/intensity choices for one flash
//! - **`SequencePlayer`**: Plays the shared glow envelope on up to two channels
//! - **`LightSensor`**: Trait to implement for your brightness sensor
//! - **`GlowOutput`**: Trait to implement for your LED/PWM hardware
//! - **`TickTimer`**: Trait to implement for your timer interrupt and sleep modes
//!
//! The library uses raw `u16` sensor units throughout — readings are never
//! normalized, and the darkness threshold is calibrated in the same units at
//! startup. Brightness outputs are 8-bit duty cycles (0-255).

pub mod ambient;
pub mod budget;
pub mod engine;
pub mod envelope;
pub mod pattern;
pub mod player;
pub mod random;
pub mod time;

pub use ambient::{AmbientFilter, CONFIDENCE_LIMIT, DARKNESS_CEILING, DARKNESS_FLOOR};
pub use budget::{FlashBudget, TOKENS_MAX};
pub use engine::{CALIBRATION_SAMPLES, CycleOutcome, EngineError, FireflyEngine, LightSensor};
pub use envelope::{ENVELOPE_LEN, GLOW_ENVELOPE, OFFSET_SLOTS, PLAYBACK_STEPS};
pub use pattern::{Channel, ChannelPlan, FlashPattern};
pub use player::{GlowOutput, PlaybackReport, PlayerState, SequencePlayer};
pub use random::{LFSR_SEED, LFSR_TAPS, Lfsr16};
pub use time::{PowerMode, TickInterval, TickTimer};
