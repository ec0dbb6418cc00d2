//! Wall-clock helpers for the taskbar clock.

#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Local time of day sampled for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockSnapshot {
    /// Hour, 0-23.
    pub hour: u32,
    /// Minute, 0-59.
    pub minute: u32,
    /// Second, 0-59.
    pub second: u32,
}

impl ClockSnapshot {
    /// Samples the host clock (browser local time on `wasm32`, UTC elsewhere).
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
                second: date.get_seconds(),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::from_unix_ms(unix_time_ms_now())
        }
    }

    /// Time of day (UTC) for a unix millisecond timestamp.
    pub fn from_unix_ms(ms: u64) -> Self {
        let seconds_of_day = (ms / 1000) % 86_400;
        Self {
            hour: (seconds_of_day / 3600) as u32,
            minute: ((seconds_of_day % 3600) / 60) as u32,
            second: (seconds_of_day % 60) as u32,
        }
    }

    /// Two-digit 12-hour rendering, e.g. `03:07 PM`.
    pub fn format_12h(self) -> String {
        let mut hour = self.hour % 12;
        if hour == 0 {
            hour = 12;
        }
        let suffix = if self.hour >= 12 { "PM" } else { "AM" };
        format!("{:02}:{:02} {}", hour, self.minute, suffix)
    }
}
