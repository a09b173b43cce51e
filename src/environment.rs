use chrono::{DateTime, Utc};

/// Touch capability signals as exposed by the host.
///
/// `None` means the host does not expose that signal at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TouchSignals {
    /// A touch-start handler slot exists on the global object.
    pub has_touch_start: bool,
    pub max_touch_points: Option<u32>,
    /// Legacy vendor-prefixed max touch points.
    pub ms_max_touch_points: Option<u32>,
}

/// True if any touch signal is present.
pub fn probe_touch(signals: &TouchSignals) -> bool {
    signals.has_touch_start
        || signals.max_touch_points.unwrap_or(0) > 0
        || signals.ms_max_touch_points.unwrap_or(0) > 0
}

/// Signals the host environment provides to the detector.
pub trait Environment {
    fn user_agent(&self) -> String;

    /// Viewport `(width, height)` in CSS pixels.
    fn viewport(&self) -> (u32, u32);

    fn device_pixel_ratio(&self) -> Option<f64> {
        None
    }

    fn touch_signals(&self) -> TouchSignals {
        TouchSignals::default()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Environment with host-supplied values and a settable clock.
#[derive(Debug, Clone)]
pub struct StaticEnvironment {
    pub user_agent: String,
    pub width: u32,
    pub height: u32,
    pub device_pixel_ratio: Option<f64>,
    pub touch: TouchSignals,
    /// Fixed wall clock; `None` reads the system clock.
    pub clock: Option<DateTime<Utc>>,
}

impl StaticEnvironment {
    pub fn new(user_agent: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            user_agent: user_agent.into(),
            width,
            height,
            device_pixel_ratio: None,
            touch: TouchSignals::default(),
            clock: None,
        }
    }

    pub fn with_pixel_ratio(mut self, ratio: f64) -> Self {
        self.device_pixel_ratio = Some(ratio);
        self
    }

    pub fn with_touch(mut self, touch: TouchSignals) -> Self {
        self.touch = touch;
        self
    }

    pub fn with_clock(mut self, now: DateTime<Utc>) -> Self {
        self.clock = Some(now);
        self
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Move the fixed clock forward. No-op when reading the system clock.
    pub fn advance(&mut self, by: chrono::Duration) {
        if let Some(now) = self.clock.as_mut() {
            *now += by;
        }
    }
}

impl Environment for StaticEnvironment {
    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }

    fn viewport(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn device_pixel_ratio(&self) -> Option<f64> {
        self.device_pixel_ratio
    }

    fn touch_signals(&self) -> TouchSignals {
        self.touch
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.unwrap_or_else(Utc::now)
    }
}
