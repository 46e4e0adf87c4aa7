//! Scroll-driven transforms for the stacked service cards.
//!
//! The desktop features section is a tall scroll region with a sticky
//! viewport. Its scroll progress `p` in `[0, 1]` drives every card: each card
//! owns an equal slot of `[ENTRY_START, ABSOLUTE_END]`, slides up into place
//! during the slot before its own, then recedes (shrinks and darkens) while
//! its own slot runs and the next card covers it.

/// Progress at which the first card starts its slot.
pub const ENTRY_START: f64 = 0.08;
/// Progress after which nothing moves anymore.
pub const ABSOLUTE_END: f64 = 0.85;

const ENTRY_OFFSET_VH: f64 = 120.0;
const SCALE_STEP: f64 = 0.05;
const BRIGHTNESS_BASE: f64 = 80.0;
const BRIGHTNESS_STEP: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardSlot {
    pub start: f64,
    pub end: f64,
    pub absolute_end: f64,
    pub size: f64,
}

impl CardSlot {
    /// Progress at which the card begins sliding in.
    pub fn entry_start(&self) -> f64 {
        self.start - self.size
    }
}

pub fn card_slot(index: usize, total: usize) -> CardSlot {
    let size = (ABSOLUTE_END - ENTRY_START) / total.max(1) as f64;
    CardSlot {
        start: ENTRY_START + index as f64 * size,
        end: ENTRY_START + (index + 1) as f64 * size,
        absolute_end: ABSOLUTE_END,
        size,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardStyle {
    /// Vertical offset in viewport-height units.
    pub y_vh: f64,
    pub scale: f64,
    pub opacity: f64,
    /// Brightness filter in percent.
    pub brightness: f64,
}

impl CardStyle {
    pub const RESTING: CardStyle = CardStyle {
        y_vh: 0.0,
        scale: 1.0,
        opacity: 1.0,
        brightness: 100.0,
    };

    pub fn to_css(&self, index: usize) -> String {
        format!(
            "top: {top}vh; z-index: {index}; opacity: {opacity:.4}; \
             transform: translate(-50%, {y:.3}vh) scale({scale:.4}); \
             filter: brightness({brightness:.2}%);",
            top = top_offset_vh(index),
            opacity = self.opacity,
            y = self.y_vh,
            scale = self.scale,
            brightness = self.brightness,
        )
    }
}

/// Linear map of `value` from `domain` onto `range`, clamped at both ends.
pub fn interpolate(value: f64, domain: (f64, f64), range: (f64, f64)) -> f64 {
    let (d0, d1) = domain;
    let (r0, r1) = range;
    if d1 <= d0 {
        return if value < d0 { r0 } else { r1 };
    }
    if r0 == r1 {
        return r0;
    }
    let t = ((value - d0) / (d1 - d0)).clamp(0.0, 1.0);
    r0 * (1.0 - t) + r1 * t
}

/// The last two cards never recede so the stack does not collapse at the end.
pub fn stays_static(index: usize, total: usize) -> bool {
    index + 2 >= total
}

pub fn compute_card_style(progress: f64, index: usize, total: usize) -> CardStyle {
    if total == 0 || index >= total {
        return CardStyle::RESTING;
    }

    let slot = card_slot(index, total);
    let behind = (total - index) as f64;
    let entry = (slot.entry_start(), slot.start);
    let recede = (slot.start, slot.end);

    let (scale_to, brightness_to) = if stays_static(index, total) {
        (1.0, 100.0)
    } else {
        (
            1.0 - behind * SCALE_STEP,
            BRIGHTNESS_BASE - behind * BRIGHTNESS_STEP,
        )
    };

    CardStyle {
        y_vh: interpolate(progress, entry, (ENTRY_OFFSET_VH, 0.0)),
        opacity: interpolate(progress, entry, (0.0, 1.0)),
        scale: interpolate(progress, recede, (1.0, scale_to)),
        brightness: interpolate(progress, recede, (100.0, brightness_to)),
    }
}

/// Vertical offset of a pinned card, so a sliver of each receding card stays visible.
pub fn top_offset_vh(index: usize) -> f64 {
    18.0 + index as f64 * 2.5
}

/// Stacking order of a sticky panel in the narrow layout: later panels cover earlier ones.
pub fn panel_layer(index: usize) -> usize {
    index + 1
}

/// Section header fades and lifts during the first stretch of the scroll.
pub fn header_style(progress: f64) -> String {
    let opacity = interpolate(progress, (0.0, ENTRY_START), (1.0, 0.0));
    let y = interpolate(progress, (0.0, ENTRY_START), (0.0, -40.0));
    format!("opacity: {opacity:.4}; transform: translateY({y:.2}px);")
}

/// Progress of a scroll container from "its top hits the viewport top"
/// to "its bottom hits the viewport bottom".
pub fn scroll_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let travel = height - viewport_height;
    if travel <= 0.0 {
        return if top <= 0.0 { 1.0 } else { 0.0 };
    }
    (-top / travel).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::*;

    use super::*;

    const TOTAL: usize = 5;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 2)]
    #[case(4, 5)]
    fn test_panel_layer(#[case] index: usize, #[case] expected: usize) {
        assert_eq!(panel_layer(index), expected);
    }

    #[test]
    fn test_later_panels_cover_earlier_ones() {
        for i in 1..TOTAL {
            assert!(panel_layer(i) > panel_layer(i - 1));
        }
        assert!(panel_layer(0) > 0);
    }

    #[test]
    fn test_slots_partition_usable_range() {
        let first = card_slot(0, TOTAL);
        let last = card_slot(TOTAL - 1, TOTAL);
        assert!(approx(first.start, ENTRY_START));
        assert!(approx(last.end, ABSOLUTE_END));
        for i in 1..TOTAL {
            assert!(approx(card_slot(i, TOTAL).start, card_slot(i - 1, TOTAL).end));
        }
        assert!(approx(first.size, 0.77 / 5.0));
    }

    #[test]
    fn test_first_card_fully_receded() {
        let style = compute_card_style(1.0, 0, TOTAL);
        assert!(approx(style.scale, 0.75));
        assert!(approx(style.brightness, 55.0));
        assert!(approx(style.opacity, 1.0));
        assert!(approx(style.y_vh, 0.0));
    }

    #[test]
    fn test_card_halfway_through_entry() {
        let slot = card_slot(2, TOTAL);
        let style = compute_card_style(slot.start - slot.size / 2.0, 2, TOTAL);
        assert!(approx(style.y_vh, 60.0));
        assert!(approx(style.opacity, 0.5));
        assert_eq!(style.scale, 1.0);
    }

    #[rstest]
    #[case(0, false)]
    #[case(2, false)]
    #[case(3, true)]
    #[case(4, true)]
    fn test_static_cards(#[case] index: usize, #[case] expected: bool) {
        assert_eq!(stays_static(index, TOTAL), expected);
    }

    #[test]
    fn test_out_of_range_card_rests() {
        assert_eq!(compute_card_style(0.5, 9, TOTAL), CardStyle::RESTING);
        assert_eq!(compute_card_style(0.5, 0, 0), CardStyle::RESTING);
    }

    #[rstest]
    #[case(100.0, 3000.0, 1000.0, 0.0)]
    #[case(0.0, 3000.0, 1000.0, 0.0)]
    #[case(-1000.0, 3000.0, 1000.0, 0.5)]
    #[case(-2000.0, 3000.0, 1000.0, 1.0)]
    #[case(-5000.0, 3000.0, 1000.0, 1.0)]
    fn test_scroll_progress(
        #[case] top: f64,
        #[case] height: f64,
        #[case] viewport: f64,
        #[case] expected: f64,
    ) {
        assert!(approx(scroll_progress(top, height, viewport), expected));
    }

    #[test]
    fn test_header_fades_out() {
        assert_eq!(header_style(0.0), "opacity: 1.0000; transform: translateY(0.00px);");
        assert_eq!(header_style(0.5), "opacity: 0.0000; transform: translateY(-40.00px);");
    }

    proptest! {
        #[test]
        fn last_two_cards_never_recede(progress in -1.0f64..2.0, total in 2usize..10) {
            for index in total - 2..total {
                let style = compute_card_style(progress, index, total);
                prop_assert_eq!(style.scale, 1.0);
                prop_assert_eq!(style.brightness, 100.0);
            }
        }

        #[test]
        fn values_clamp_before_entry(index in 0usize..TOTAL, below in 0.0f64..1.0) {
            let slot = card_slot(index, TOTAL);
            let style = compute_card_style(slot.entry_start() - below, index, TOTAL);
            prop_assert_eq!(style.opacity, 0.0);
            prop_assert_eq!(style.y_vh, 120.0);
            prop_assert_eq!(style.scale, 1.0);
            prop_assert_eq!(style.brightness, 100.0);
        }

        #[test]
        fn values_clamp_after_end(index in 0usize..TOTAL, above in 0.0f64..1.0) {
            let at_end = compute_card_style(ABSOLUTE_END, index, TOTAL);
            let beyond = compute_card_style(ABSOLUTE_END + above, index, TOTAL);
            prop_assert_eq!(at_end, beyond);
        }

        #[test]
        fn style_stays_within_bounds(progress in 0.0f64..=1.0, index in 0usize..TOTAL) {
            let style = compute_card_style(progress, index, TOTAL);
            prop_assert!((0.0..=1.0).contains(&style.opacity));
            prop_assert!((0.0..=120.0).contains(&style.y_vh));
            prop_assert!(style.scale <= 1.0 && style.scale >= 0.75 - 1e-9);
        }
    }
}
