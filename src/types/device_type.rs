use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceType {
    Iphone,
    Ipad,
    AndroidTablet,
    AndroidPhone,
    Windows,
    Mac,
    Unknown,
}

impl DeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Iphone => "iphone",
            Self::Ipad => "ipad",
            Self::AndroidTablet => "android-tablet",
            Self::AndroidPhone => "android-phone",
            Self::Windows => "windows",
            Self::Mac => "mac",
            Self::Unknown => "unknown",
        }
    }

    /// The category every device type implies.
    pub fn category(&self) -> DeviceCategory {
        match self {
            Self::Iphone | Self::AndroidPhone => DeviceCategory::Mobile,
            Self::Ipad | Self::AndroidTablet => DeviceCategory::Tablet,
            Self::Windows | Self::Mac | Self::Unknown => DeviceCategory::Desktop,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceCategory {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }
}
