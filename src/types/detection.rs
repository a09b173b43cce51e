use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Browser, DeviceCategory, DeviceType, ScreenInfo, ViewportBand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceClass {
    pub device_type: DeviceType,
    pub category: DeviceCategory,
}

impl DeviceClass {
    pub(crate) fn of(device_type: DeviceType) -> Self {
        Self {
            device_type,
            category: device_type.category(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserInfo {
    pub browser: Browser,
    /// The User-Agent the browser was classified from, lowercased.
    pub user_agent: String,
}

/// A published device-info snapshot.
///
/// Snapshots are only built by `SnapshotStore::compute` and are replaced as a
/// whole on every recomputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    pub device_type: DeviceType,
    pub device_category: DeviceCategory,
    pub width: u32,
    pub height: u32,
    pub is_mobile: bool,
    pub is_small_mobile: bool,
    pub is_tablet: bool,
    pub is_desktop: bool,
    pub device_pixel_ratio: f64,
    pub has_touch: bool,
    pub browser: Browser,
    pub user_agent: String,
    #[serde(with = "iso8601_millis")]
    pub timestamp: DateTime<Utc>,
}

impl DeviceInfo {
    pub(crate) fn assemble(
        device: DeviceClass,
        screen: ScreenInfo,
        has_touch: bool,
        browser: BrowserInfo,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            device_type: device.device_type,
            device_category: device.category,
            width: screen.width,
            height: screen.height,
            is_mobile: screen.is_mobile,
            is_small_mobile: screen.is_small_mobile,
            is_tablet: screen.is_tablet,
            is_desktop: screen.is_desktop,
            device_pixel_ratio: screen.device_pixel_ratio,
            has_touch,
            browser: browser.browser,
            user_agent: browser.user_agent,
            timestamp,
        }
    }

    pub fn screen(&self) -> ScreenInfo {
        ScreenInfo {
            width: self.width,
            height: self.height,
            is_mobile: self.is_mobile,
            is_small_mobile: self.is_small_mobile,
            is_tablet: self.is_tablet,
            is_desktop: self.is_desktop,
            device_pixel_ratio: self.device_pixel_ratio,
        }
    }

    pub fn viewport_band(&self) -> ViewportBand {
        self.screen().band()
    }

    /// True if `label` names either the device type or the device category.
    pub fn is(&self, label: &str) -> bool {
        label == self.device_type.as_str() || label == self.device_category.as_str()
    }

    /// Labelled, human-readable fields in display order.
    pub fn summary(&self) -> IndexMap<&'static str, String> {
        let mut rows = IndexMap::new();
        rows.insert("Device Type", self.device_type.as_str().to_string());
        rows.insert("Device Category", self.device_category.as_str().to_string());
        rows.insert("Screen Size", format!("{}x{}px", self.width, self.height));
        rows.insert(
            "Screen Type",
            format!(
                "isMobile={} isSmallMobile={} isTablet={} isDesktop={}",
                self.is_mobile, self.is_small_mobile, self.is_tablet, self.is_desktop
            ),
        );
        rows.insert("Touch Supported", self.has_touch.to_string());
        rows.insert("Browser", self.browser.as_str().to_string());
        rows.insert("Device Pixel Ratio", self.device_pixel_ratio.to_string());
        rows
    }
}

/// `2026-10-19T08:30:00.123Z`, the shape `Date.prototype.toISOString` emits.
mod iso8601_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
