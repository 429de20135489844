//! Per-card image carousel.

/// Index after `current` in a ring of `len` items.
pub(crate) fn wrap_next(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

/// Index before `current` in a ring of `len` items.
pub(crate) fn wrap_previous(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + len - 1) % len }
}

/// Navigation and load state for one card's image strip.
///
/// A carousel over zero images is a placeholder: every navigation call is a
/// no-op and [`Carousel::has_controls`] is false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    loaded: Vec<bool>,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Carousel {
            current: 0,
            loaded: vec![false; len],
        }
    }

    /// A carousel positioned at `index`, wrapped into range.
    pub fn at(len: usize, index: usize) -> Self {
        let mut carousel = Self::new(len);
        if len > 0 {
            carousel.current = index % len;
        }
        carousel
    }

    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn next(&mut self) {
        self.current = wrap_next(self.current, self.len());
    }

    pub fn previous(&mut self) {
        self.current = wrap_previous(self.current, self.len());
    }

    /// Index `next` would move to, without moving.
    pub fn next_index(&self) -> usize {
        wrap_next(self.current, self.len())
    }

    /// Index `previous` would move to, without moving.
    pub fn previous_index(&self) -> usize {
        wrap_previous(self.current, self.len())
    }

    /// Jump straight to `index` (indicator dots). Out-of-range is ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len() {
            self.current = index;
        }
    }

    /// Arrows and indicator dots are only shown with more than one image.
    pub fn has_controls(&self) -> bool {
        self.len() > 1
    }

    pub fn is_placeholder(&self) -> bool {
        self.is_empty()
    }

    /// Horizontal translation of the image strip, in percent of one slide.
    pub fn offset_percent(&self) -> usize {
        self.current * 100
    }

    /// Record that image `index` finished loading.
    ///
    /// Returns true only the first time an image is marked.
    pub fn mark_loaded(&mut self, index: usize) -> bool {
        match self.loaded.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_loaded(&self, index: usize) -> bool {
        self.loaded.get(index).copied().unwrap_or(false)
    }

    /// `(index, active)` for each indicator dot.
    pub fn indicators(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        (0..self.len()).map(move |i| (i, i == self.current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut carousel = Carousel::new(4);
        carousel.previous();
        assert_eq!(carousel.current(), 3);
    }

    #[test]
    fn next_from_last_wraps_to_first() {
        let mut carousel = Carousel::at(3, 2);
        carousel.next();
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn empty_carousel_is_placeholder_without_controls() {
        let mut carousel = Carousel::new(0);

        assert!(carousel.is_placeholder());
        assert!(!carousel.has_controls());

        carousel.next();
        carousel.previous();
        carousel.go_to(3);
        assert_eq!(carousel.current(), 0);
        assert_eq!(carousel.indicators().count(), 0);
    }

    #[test]
    fn single_image_has_no_controls() {
        let mut carousel = Carousel::new(1);
        assert!(!carousel.has_controls());

        carousel.next();
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut carousel = Carousel::new(3);

        carousel.go_to(2);
        assert_eq!(carousel.current(), 2);

        carousel.go_to(7);
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn at_wraps_index_into_range() {
        assert_eq!(Carousel::at(3, 7).current(), 1);
        assert_eq!(Carousel::at(0, 7).current(), 0);
    }

    #[test]
    fn offset_follows_current_slide() {
        let mut carousel = Carousel::new(3);
        carousel.next();
        carousel.next();
        assert_eq!(carousel.offset_percent(), 200);
    }

    #[test]
    fn load_flag_flips_once() {
        let mut carousel = Carousel::new(2);

        assert!(!carousel.is_loaded(1));
        assert!(carousel.mark_loaded(1));
        assert!(!carousel.mark_loaded(1));
        assert!(carousel.is_loaded(1));
        assert!(!carousel.is_loaded(0));
        assert!(!carousel.mark_loaded(5));
    }

    #[test]
    fn loading_does_not_block_navigation() {
        let mut carousel = Carousel::new(3);
        carousel.next();
        assert!(!carousel.is_loaded(1));
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn indicators_mark_current_slide() {
        let carousel = Carousel::at(3, 1);
        let dots: Vec<_> = carousel.indicators().collect();
        assert_eq!(dots, vec![(0, false), (1, true), (2, false)]);
    }

    proptest! {
        #[test]
        fn next_len_times_returns_to_start(len in 1usize..20, start in 0usize..20) {
            let mut carousel = Carousel::at(len, start);
            let initial = carousel.current();

            for _ in 0..len {
                carousel.next();
            }

            prop_assert_eq!(carousel.current(), initial);
        }

        #[test]
        fn previous_undoes_next(len in 1usize..20, start in 0usize..20) {
            let mut carousel = Carousel::at(len, start);
            let initial = carousel.current();

            carousel.next();
            carousel.previous();

            prop_assert_eq!(carousel.current(), initial);
            prop_assert!(carousel.current() < len);
        }
    }
}
