use crate::config::ScreenThresholds;
use crate::types::ScreenInfo;

/// Map viewport measurements to the width bands.
///
/// A missing, non-finite or non-positive pixel ratio is reported as 1.
pub fn classify_screen(
    width: u32,
    height: u32,
    pixel_ratio: Option<f64>,
    thresholds: &ScreenThresholds,
) -> ScreenInfo {
    let device_pixel_ratio = pixel_ratio
        .filter(|r| r.is_finite() && *r > 0.0)
        .unwrap_or(1.0);

    ScreenInfo {
        width,
        height,
        is_mobile: width <= thresholds.mobile_max,
        is_small_mobile: width <= thresholds.small_mobile_max,
        is_tablet: width > thresholds.mobile_max && width <= thresholds.tablet_max,
        is_desktop: width > thresholds.tablet_max,
        device_pixel_ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ViewportBand;

    fn band(width: u32) -> ViewportBand {
        classify_screen(width, 800, None, &ScreenThresholds::default()).band()
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(band(0), ViewportBand::SmallMobile);
        assert_eq!(band(480), ViewportBand::SmallMobile);
        assert_eq!(band(481), ViewportBand::Mobile);
        assert_eq!(band(768), ViewportBand::Mobile);
        assert_eq!(band(769), ViewportBand::Tablet);
        assert_eq!(band(1024), ViewportBand::Tablet);
        assert_eq!(band(1025), ViewportBand::Desktop);
    }

    #[test]
    fn small_mobile_implies_mobile() {
        let t = ScreenThresholds::default();
        for w in 0..=480 {
            let s = classify_screen(w, 0, None, &t);
            assert!(s.is_small_mobile && s.is_mobile, "width {}", w);
        }
    }

    #[test]
    fn tablet_and_desktop_are_exclusive_above_mobile() {
        let t = ScreenThresholds::default();
        for w in (769..4000).step_by(7) {
            let s = classify_screen(w, 0, None, &t);
            assert!(!s.is_mobile && !s.is_small_mobile);
            assert!(s.is_tablet ^ s.is_desktop, "width {}", w);
        }
    }

    #[test]
    fn pixel_ratio_falls_back_to_one() {
        let t = ScreenThresholds::default();
        assert_eq!(classify_screen(100, 100, None, &t).device_pixel_ratio, 1.0);
        assert_eq!(classify_screen(100, 100, Some(0.0), &t).device_pixel_ratio, 1.0);
        assert_eq!(classify_screen(100, 100, Some(f64::NAN), &t).device_pixel_ratio, 1.0);
        assert_eq!(classify_screen(100, 100, Some(3.0), &t).device_pixel_ratio, 3.0);
    }

    #[test]
    fn custom_thresholds_move_bands() {
        let t = ScreenThresholds {
            small_mobile_max: 320,
            mobile_max: 600,
            tablet_max: 1280,
        };
        assert_eq!(classify_screen(400, 0, None, &t).band(), ViewportBand::Mobile);
        assert_eq!(classify_screen(1200, 0, None, &t).band(), ViewportBand::Tablet);
    }
}
