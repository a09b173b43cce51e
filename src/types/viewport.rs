use serde::{Deserialize, Serialize};

/// Width-derived screen flags plus the raw viewport measurements.
///
/// `is_small_mobile` implies `is_mobile`; the remaining bands are disjoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenInfo {
    pub width: u32,
    pub height: u32,
    pub is_mobile: bool,
    pub is_small_mobile: bool,
    pub is_tablet: bool,
    pub is_desktop: bool,
    pub device_pixel_ratio: f64,
}

impl ScreenInfo {
    /// First band that holds, checked from narrowest to widest.
    pub fn band(&self) -> ViewportBand {
        if self.is_small_mobile {
            ViewportBand::SmallMobile
        } else if self.is_mobile {
            ViewportBand::Mobile
        } else if self.is_tablet {
            ViewportBand::Tablet
        } else if self.is_desktop {
            ViewportBand::Desktop
        } else {
            ViewportBand::Unknown
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewportBand {
    SmallMobile,
    Mobile,
    Tablet,
    Desktop,
    Unknown,
}

impl ViewportBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SmallMobile => "small-mobile",
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
            Self::Unknown => "unknown",
        }
    }
}
