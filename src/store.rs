use std::time::Instant;

use crate::config::DetectionConfig;
use crate::debounce::Debouncer;
use crate::device_detector::DeviceClassifier;
use crate::environment::Environment;
use crate::error::{Error, Result};
use crate::session::{MemorySessionStorage, SessionStorage};
use crate::types::{DeviceInfo, ViewportBand};

/// Owner of the published device-info snapshot.
///
/// The store is the only writer. Readers go through [`SnapshotStore::get`] or
/// the query helpers, which compute a snapshot on first use, so no caller
/// ever sees an empty store.
pub struct SnapshotStore<E, S = MemorySessionStorage> {
    classifier: DeviceClassifier,
    environment: E,
    storage: S,
    session_key: String,
    snapshot: Option<DeviceInfo>,
    resize: Debouncer,
    computations: u64,
}

impl<E: Environment, S: SessionStorage> SnapshotStore<E, S> {
    pub fn new(environment: E, storage: S) -> Result<Self> {
        Self::with_config(&DetectionConfig::default(), environment, storage)
    }

    pub fn with_config(config: &DetectionConfig, environment: E, storage: S) -> Result<Self> {
        Ok(Self {
            classifier: DeviceClassifier::from_config(config)?,
            environment,
            storage,
            session_key: config.session_key.clone(),
            snapshot: None,
            resize: Debouncer::new(config.resize_quiet_period()),
            computations: 0,
        })
    }

    /// Capture the environment, publish a fresh snapshot and mirror it to
    /// session storage. A failed mirror write does not affect the publish.
    pub fn compute(&mut self) -> &DeviceInfo {
        let info = self.capture();
        self.mirror(&info);
        self.computations += 1;
        tracing::debug!(
            device_type = info.device_type.as_str(),
            browser = info.browser.as_str(),
            width = info.width,
            height = info.height,
            "published device snapshot"
        );
        self.snapshot.insert(info)
    }

    pub fn get(&mut self) -> &DeviceInfo {
        match self.snapshot {
            Some(ref info) => info,
            None => self.compute(),
        }
    }

    /// The current snapshot without triggering a computation.
    pub fn snapshot(&self) -> Option<&DeviceInfo> {
        self.snapshot.as_ref()
    }

    pub fn is(&mut self, label: &str) -> bool {
        self.get().is(label)
    }

    pub fn viewport_string(&mut self) -> &'static str {
        self.viewport_band().as_str()
    }

    pub fn viewport_band(&mut self) -> ViewportBand {
        self.get().viewport_band()
    }

    pub fn log_info(&mut self) {
        let info = self.get();
        let _group = tracing::info_span!("device_information").entered();
        for (label, value) in info.summary() {
            tracing::info!("{}: {}", label, value);
        }
    }

    /// Page-ready hook: computes the initial snapshot.
    pub fn on_ready(&mut self) -> &DeviceInfo {
        self.compute()
    }

    /// Resize hook: (re)arms the debounce timer, dropping any pending one.
    pub fn on_resize(&mut self, now: Instant) {
        self.resize.trigger(now);
    }

    /// Recompute if the resize quiet period has elapsed. Returns the new
    /// snapshot when one was published.
    pub fn poll(&mut self, now: Instant) -> Option<&DeviceInfo> {
        if self.resize.poll(now) {
            Some(self.compute())
        } else {
            None
        }
    }

    /// When the pending resize recomputation is due, if one is armed.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.resize.deadline()
    }

    /// Number of snapshots published so far.
    pub fn computations(&self) -> u64 {
        self.computations
    }

    pub fn classifier(&self) -> &DeviceClassifier {
        &self.classifier
    }

    pub fn environment(&self) -> &E {
        &self.environment
    }

    pub fn environment_mut(&mut self) -> &mut E {
        &mut self.environment
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn capture(&self) -> DeviceInfo {
        let env = &self.environment;
        let ua = env.user_agent().to_lowercase();
        let (width, height) = env.viewport();

        let device = self.classifier.classify_device(&ua);
        let screen = self
            .classifier
            .classify_screen(width, height, env.device_pixel_ratio());
        let has_touch = self.classifier.probe_touch(&env.touch_signals());
        let browser = self.classifier.classify_browser(&ua);

        DeviceInfo::assemble(device, screen, has_touch, browser, env.now())
    }

    fn mirror(&mut self, info: &DeviceInfo) {
        let written = serde_json::to_string(info)
            .map_err(Error::from)
            .and_then(|json| self.storage.set_item(&self.session_key, &json));
        if let Err(err) = written {
            tracing::debug!(key = %self.session_key, error = %err, "session mirror write skipped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{StaticEnvironment, TouchSignals};
    use crate::session::DisabledSessionStorage;
    use crate::types::{Browser, DeviceCategory, DeviceType};
    use chrono::{TimeZone, Utc};
    use std::time::Duration;

    const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 Version/17.0 Mobile/15E148 Safari/604.1";

    fn iphone_env() -> StaticEnvironment {
        StaticEnvironment::new(IPHONE_UA, 375, 667)
            .with_pixel_ratio(2.0)
            .with_touch(TouchSignals {
                has_touch_start: true,
                max_touch_points: Some(5),
                ms_max_touch_points: None,
            })
            .with_clock(Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap())
    }

    fn store(env: StaticEnvironment) -> SnapshotStore<StaticEnvironment> {
        SnapshotStore::new(env, MemorySessionStorage::new()).unwrap()
    }

    #[test]
    fn iphone_scenario() {
        let mut s = store(iphone_env());
        let info = s.get().clone();
        assert_eq!(info.device_type, DeviceType::Iphone);
        assert_eq!(info.device_category, DeviceCategory::Mobile);
        assert!(info.is_mobile);
        assert!(info.is_small_mobile);
        assert!(!info.is_tablet && !info.is_desktop);
        assert!(info.has_touch);
        assert_eq!(info.browser, Browser::Safari);
        assert_eq!(info.device_pixel_ratio, 2.0);
        assert_eq!(info.user_agent, IPHONE_UA.to_lowercase());
    }

    #[test]
    fn lazy_get_computes_once() {
        let mut s = store(iphone_env());
        assert!(s.snapshot().is_none());
        let first = s.get().clone();
        s.environment_mut().advance(chrono::Duration::seconds(5));
        let second = s.get().clone();
        assert_eq!(first, second);
        assert_eq!(s.computations(), 1);
    }

    #[test]
    fn queries_initialize_the_store() {
        let mut s = store(iphone_env());
        assert!(s.is("iphone"));
        assert!(s.is("mobile"));
        assert!(!s.is("desktop"));
        assert_eq!(s.viewport_string(), "small-mobile");
        s.log_info();
        assert_eq!(s.computations(), 1);
    }

    #[test]
    fn compute_replaces_snapshot_and_mirror() {
        let mut s = store(iphone_env());
        s.on_ready();
        s.environment_mut().resize(1280, 800);
        s.environment_mut().advance(chrono::Duration::seconds(1));
        let info = s.compute().clone();
        assert!(info.is_desktop);
        assert_eq!(s.viewport_string(), "desktop");

        let mirrored: DeviceInfo =
            serde_json::from_str(s.storage().get_item("deviceInfo").unwrap()).unwrap();
        assert_eq!(mirrored, info);
    }

    #[test]
    fn failed_mirror_still_publishes() {
        let mut s = SnapshotStore::new(iphone_env(), DisabledSessionStorage).unwrap();
        assert_eq!(s.compute().device_type, DeviceType::Iphone);
        assert!(s.snapshot().is_some());

        let mut s = SnapshotStore::new(iphone_env(), MemorySessionStorage::with_quota(16)).unwrap();
        s.compute();
        assert!(s.snapshot().is_some());
        assert!(s.storage().is_empty());
    }

    #[test]
    fn resize_burst_recomputes_once() {
        let mut s = store(iphone_env());
        s.on_ready();
        let t0 = Instant::now();
        for step in 0..5u64 {
            s.environment_mut().resize(400 + step as u32 * 200, 700);
            s.on_resize(t0 + Duration::from_millis(step * 50));
        }
        assert_eq!(s.next_deadline(), Some(t0 + Duration::from_millis(450)));
        assert!(s.poll(t0 + Duration::from_millis(449)).is_none());

        s.environment_mut().advance(chrono::Duration::milliseconds(450));
        let info = s.poll(t0 + Duration::from_millis(450)).cloned().unwrap();
        assert_eq!(info.width, 1200);
        assert!(info.is_desktop);
        assert_eq!(
            info.timestamp,
            Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap() + chrono::Duration::milliseconds(450)
        );

        assert!(s.poll(t0 + Duration::from_secs(5)).is_none());
        assert_eq!(s.computations(), 2);
    }

    #[test]
    fn custom_session_key() {
        let config = DetectionConfig {
            session_key: "device".into(),
            ..DetectionConfig::default()
        };
        let mut s =
            SnapshotStore::with_config(&config, iphone_env(), MemorySessionStorage::new()).unwrap();
        s.compute();
        assert!(s.storage().get_item("device").is_some());
        assert!(s.storage().get_item("deviceInfo").is_none());
    }
}
