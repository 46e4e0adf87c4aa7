use std::rc::Rc;

use yew::prelude::*;

use crate::config::CAROUSEL_DRAG_THRESHOLD_PX;

/// Which edge the incoming slide enters from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideDirection {
    Backward,
    Still,
    Forward,
}

impl SlideDirection {
    pub fn sign(self) -> i8 {
        match self {
            SlideDirection::Backward => -1,
            SlideDirection::Still => 0,
            SlideDirection::Forward => 1,
        }
    }

    /// CSS class selecting the slide-in keyframes.
    pub fn enter_class(self) -> &'static str {
        match self {
            SlideDirection::Backward => "slide-from-left",
            SlideDirection::Still => "slide-still",
            SlideDirection::Forward => "slide-from-right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    Advance,
    Retreat,
    JumpTo(usize),
}

/// Cyclic index over a fixed number of slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    direction: SlideDirection,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            direction: SlideDirection::Still,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn direction(&self) -> SlideDirection {
        self.direction
    }

    pub fn advance(&mut self) {
        self.direction = SlideDirection::Forward;
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
    }

    pub fn retreat(&mut self) {
        self.direction = SlideDirection::Backward;
        if self.len == 0 {
            return;
        }
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Jumping to the current slide still counts as backward.
    pub fn jump_to(&mut self, target: usize) {
        if target >= self.len {
            return;
        }
        self.direction = if target > self.index {
            SlideDirection::Forward
        } else {
            SlideDirection::Backward
        };
        self.index = target;
    }

    pub fn apply(&mut self, action: CarouselAction) {
        match action {
            CarouselAction::Advance => self.advance(),
            CarouselAction::Retreat => self.retreat(),
            CarouselAction::JumpTo(target) => self.jump_to(target),
        }
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);
        Rc::new(next)
    }
}

/// Maps the horizontal offset of a finished drag to a navigation step.
/// Dragging left shows the next slide, dragging right the previous one.
pub fn drag_release(offset_x: f64) -> Option<CarouselAction> {
    if offset_x < -CAROUSEL_DRAG_THRESHOLD_PX {
        Some(CarouselAction::Advance)
    } else if offset_x > CAROUSEL_DRAG_THRESHOLD_PX {
        Some(CarouselAction::Retreat)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case(3, 0, 1)]
    #[case(3, 2, 0)]
    #[case(1, 0, 0)]
    fn test_advance_wraps(#[case] len: usize, #[case] start: usize, #[case] expected: usize) {
        let mut carousel = Carousel::new(len);
        carousel.jump_to(start);
        carousel.advance();
        assert_eq!(carousel.index(), expected);
        assert_eq!(carousel.direction(), SlideDirection::Forward);
    }

    #[test]
    fn test_retreat_from_first_goes_to_last() {
        let mut carousel = Carousel::new(4);
        carousel.retreat();
        assert_eq!(carousel.index(), 3);
        assert_eq!(carousel.direction().sign(), -1);
    }

    #[test]
    fn test_empty_carousel_never_panics() {
        let mut carousel = Carousel::new(0);
        carousel.advance();
        carousel.retreat();
        carousel.jump_to(2);
        assert_eq!(carousel.index(), 0);
    }

    #[rstest]
    #[case(0, 2, SlideDirection::Forward)]
    #[case(2, 0, SlideDirection::Backward)]
    #[case(1, 1, SlideDirection::Backward)]
    fn test_jump_direction(
        #[case] from: usize,
        #[case] to: usize,
        #[case] expected: SlideDirection,
    ) {
        let mut carousel = Carousel::new(3);
        carousel.index = from;
        carousel.jump_to(to);
        assert_eq!(carousel.index(), to);
        assert_eq!(carousel.direction(), expected);
    }

    #[test]
    fn test_jump_out_of_range_is_ignored() {
        let mut carousel = Carousel::new(3);
        carousel.jump_to(7);
        assert_eq!(carousel, Carousel::new(3));
    }

    #[rstest]
    #[case(-51.0, Some(CarouselAction::Advance))]
    #[case(51.0, Some(CarouselAction::Retreat))]
    #[case(-50.0, None)]
    #[case(50.0, None)]
    #[case(0.0, None)]
    fn test_drag_release(#[case] offset: f64, #[case] expected: Option<CarouselAction>) {
        assert_eq!(drag_release(offset), expected);
    }

    #[test]
    fn test_reducer_matches_direct_calls() {
        let state = Rc::new(Carousel::new(3));
        let state = state.reduce(CarouselAction::Advance);
        let state = state.reduce(CarouselAction::Advance);
        let state = state.reduce(CarouselAction::Retreat);
        assert_eq!(state.index(), 1);
        assert_eq!(state.direction(), SlideDirection::Backward);
    }

    proptest! {
        /// N advances bring the carousel back to where it started
        #[test]
        fn advancing_len_times_is_identity(len in 1usize..20, start in 0usize..20) {
            let mut carousel = Carousel::new(len);
            carousel.jump_to(start % len);
            let origin = carousel.index();
            for _ in 0..len {
                carousel.advance();
            }
            prop_assert_eq!(carousel.index(), origin);
        }

        #[test]
        fn retreat_undoes_advance(len in 1usize..20, start in 0usize..20) {
            let mut carousel = Carousel::new(len);
            carousel.jump_to(start % len);
            let origin = carousel.index();
            carousel.advance();
            carousel.retreat();
            prop_assert_eq!(carousel.index(), origin);
        }

        #[test]
        fn small_drags_never_move(offset in -50.0f64..=50.0) {
            let mut carousel = Carousel::new(5);
            if let Some(action) = drag_release(offset) {
                carousel.apply(action);
            }
            prop_assert_eq!(carousel.index(), 0);
        }

        #[test]
        fn index_stays_in_range(len in 1usize..10, steps in prop::collection::vec(0u8..3, 0..50)) {
            let mut carousel = Carousel::new(len);
            for step in steps {
                match step {
                    0 => carousel.advance(),
                    1 => carousel.retreat(),
                    _ => carousel.jump_to(len - 1),
                }
                prop_assert!(carousel.index() < len);
            }
        }
    }
}
