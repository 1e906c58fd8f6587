// lib/src/triage/thresholds.rs

//! Decision bounds for the triage tiers. Every comparison against these values
//! is strict: a reading equal to a bound does not trip it.

/// mmHg. Critical below this.
pub const CRITICAL_SYSTOLIC_LOW: i32 = 90;
/// mmHg. Critical above this.
pub const CRITICAL_SYSTOLIC_HIGH: i32 = 180;
pub const CRITICAL_PULSE_LOW: i32 = 50;
pub const CRITICAL_PULSE_HIGH: i32 = 120;
pub const CRITICAL_TEMPERATURE_LOW: f64 = 35.0;
pub const CRITICAL_TEMPERATURE_HIGH: f64 = 39.0;

pub const URGENT_SYSTOLIC_LOW: i32 = 100;
pub const URGENT_SYSTOLIC_HIGH: i32 = 160;
pub const URGENT_PULSE_LOW: i32 = 60;
pub const URGENT_PULSE_HIGH: i32 = 100;
pub const URGENT_TEMPERATURE_LOW: f64 = 36.0;
pub const URGENT_TEMPERATURE_HIGH: f64 = 38.0;
