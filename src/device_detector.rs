use rayon::prelude::*;

use super::config::{DetectionConfig, ScreenThresholds};
use super::environment::{probe_touch, TouchSignals};
use super::error::Result;
use super::rules::{KeywordSet, RuleSet};
use super::screen::classify_screen;
use super::types::*;

/// What a device rule resolves to once its pattern matches.
#[derive(Debug, Clone, Copy)]
enum DeviceRule {
    Fixed(DeviceType),
    /// Android phone or tablet, decided by the tablet keyword set.
    Android,
}

pub struct DeviceClassifier {
    device_rules: RuleSet<DeviceRule>,
    browser_rules: RuleSet<Browser>,
    tablet_keywords: KeywordSet,
    thresholds: ScreenThresholds,
}

impl DeviceClassifier {
    pub fn new() -> Result<Self> {
        Self::from_config(&DetectionConfig::default())
    }

    pub fn from_config(config: &DetectionConfig) -> Result<Self> {
        config.validate()?;

        // Order is significant. `android(?!.*mobile)` sits in the iPad rule,
        // so an Android UA without "mobile" is labelled ipad before the
        // Android rule is reached.
        let device_rules = RuleSet::build([
            ("iphone", DeviceRule::Fixed(DeviceType::Iphone)),
            ("ipad|android(?!.*mobile)", DeviceRule::Fixed(DeviceType::Ipad)),
            ("android", DeviceRule::Android),
            ("win", DeviceRule::Fixed(DeviceType::Windows)),
            ("mac", DeviceRule::Fixed(DeviceType::Mac)),
        ])?;

        // Chrome UAs carry "safari" and Edge UAs carry "chrome", so the
        // earlier entries shadow the later ones.
        let browser_rules = RuleSet::build([
            ("firefox", Browser::Firefox),
            ("chrome", Browser::Chrome),
            ("safari", Browser::Safari),
            ("edge|edg", Browser::Edge),
            ("opera", Browser::Opera),
        ])?;

        let tablet_keywords = KeywordSet::build(&config.tablet_keywords)?;

        Ok(Self {
            device_rules,
            browser_rules,
            tablet_keywords,
            thresholds: config.thresholds,
        })
    }

    /// Classify a User-Agent into a device type and category. Never fails;
    /// unmatched input is `unknown`/`desktop`.
    pub fn classify_device(&self, ua: &str) -> DeviceClass {
        let device_type = match self.device_rules.match_first(ua) {
            Some(DeviceRule::Fixed(device_type)) => *device_type,
            Some(DeviceRule::Android) => {
                if self.tablet_keywords.contains_any(ua) {
                    DeviceType::AndroidTablet
                } else {
                    DeviceType::AndroidPhone
                }
            }
            None => DeviceType::Unknown,
        };
        DeviceClass::of(device_type)
    }

    pub fn classify_browser(&self, ua: &str) -> BrowserInfo {
        let browser = self
            .browser_rules
            .match_first(ua)
            .copied()
            .unwrap_or(Browser::Unknown);
        BrowserInfo {
            browser,
            user_agent: ua.to_lowercase(),
        }
    }

    pub fn classify_screen(&self, width: u32, height: u32, pixel_ratio: Option<f64>) -> ScreenInfo {
        classify_screen(width, height, pixel_ratio, &self.thresholds)
    }

    pub fn probe_touch(&self, signals: &TouchSignals) -> bool {
        probe_touch(signals)
    }

    /// Classify many User-Agents in parallel; output order follows input.
    pub fn classify_batch<S>(&self, user_agents: &[S]) -> Vec<(DeviceClass, Browser)>
    where
        S: AsRef<str> + Sync,
    {
        user_agents
            .par_iter()
            .map(|ua| {
                let ua = ua.as_ref();
                (self.classify_device(ua), self.classify_browser(ua).browser)
            })
            .collect()
    }
}
