//! Slide state for the hero carousel.
//!
//! The index is the only stored state. Everything visual (the track offset,
//! the active dot) is derived from it on demand.

use virtuart_core::prelude::*;
use virtuart_core::Slide;

/// Hero carousel with a wraparound slide index
#[derive(Debug, Clone)]
pub struct Carousel {
    slides: Vec<Slide>,
    index: usize,
}

impl Carousel {
    /// Create a carousel positioned on the first slide.
    ///
    /// Returns [`Error::EmptyCarousel`] when `slides` is empty: every index
    /// operation is taken modulo the slide count.
    pub fn new(slides: Vec<Slide>) -> Result<Self> {
        if slides.is_empty() {
            return Err(Error::EmptyCarousel);
        }
        Ok(Self { slides, index: 0 })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn current(&self) -> &Slide {
        &self.slides[self.index]
    }

    /// Advance one slide, wrapping to the first after the last
    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len();
    }

    /// Go back one slide, wrapping to the last before the first
    pub fn previous(&mut self) {
        let len = self.len();
        self.index = (self.index + len - 1) % len;
    }

    /// Jump to slide `n`, normalized into range.
    ///
    /// `rem_euclid` gives `((n mod count) + count) mod count`, so `-1` lands
    /// on the last slide and `count` lands on the first.
    pub fn go_to(&mut self, n: i64) {
        let len = self.len() as i64;
        self.index = n.rem_euclid(len) as usize;
    }

    /// Track offset in percent of the slide width (`index * 100`)
    pub fn offset_percent(&self) -> usize {
        self.index * 100
    }

    /// Whether dot `i` is the active one
    pub fn is_active(&self, i: usize) -> bool {
        i == self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slides(n: usize) -> Vec<Slide> {
        (0..n)
            .map(|i| Slide {
                id: i.to_string(),
                image: format!("/assets/{i}.jpg"),
                title: format!("Slide {i}"),
                subtitle: String::new(),
            })
            .collect()
    }

    fn carousel(n: usize) -> Carousel {
        Carousel::new(slides(n)).unwrap()
    }

    #[test]
    fn test_empty_carousel_rejected() {
        assert!(matches!(Carousel::new(vec![]), Err(Error::EmptyCarousel)));
    }

    #[test]
    fn test_starts_at_first_slide() {
        let c = carousel(3);
        assert_eq!(c.index(), 0);
        assert_eq!(c.current().title, "Slide 0");
    }

    #[test]
    fn test_next_three_times_round_trips() {
        let mut c = carousel(3);
        c.next();
        c.next();
        c.next();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_next_matches_modular_arithmetic() {
        for start in 0..4 {
            for k in 0..10 {
                let mut c = carousel(4);
                c.go_to(start as i64);
                for _ in 0..k {
                    c.next();
                }
                assert_eq!(c.index(), (start + k) % 4, "start={start} k={k}");
            }
        }
    }

    #[test]
    fn test_previous_matches_modular_arithmetic() {
        for start in 0..3i64 {
            for k in 0..8i64 {
                let mut c = carousel(3);
                c.go_to(start);
                for _ in 0..k {
                    c.previous();
                }
                let expected = ((start - k) % 3 + 3) % 3;
                assert_eq!(c.index() as i64, expected, "start={start} k={k}");
            }
        }
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut c = carousel(3);
        c.previous();
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_go_to_negative() {
        let mut c = carousel(3);
        c.go_to(-1);
        assert_eq!(c.index(), 2);
        c.go_to(-4);
        assert_eq!(c.index(), 2);
        c.go_to(-3);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_go_to_out_of_range_equivalent_to_modulo() {
        for n in -20i64..20 {
            let mut a = carousel(3);
            let mut b = carousel(3);
            a.go_to(n);
            b.go_to(n % 3);
            assert_eq!(a.index(), b.index(), "n={n}");
        }
    }

    #[test]
    fn test_single_slide_stays_put() {
        let mut c = carousel(1);
        c.next();
        assert_eq!(c.index(), 0);
        c.previous();
        assert_eq!(c.index(), 0);
        c.go_to(-7);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_offset_is_derived_from_index() {
        let mut c = carousel(3);
        assert_eq!(c.offset_percent(), 0);
        c.next();
        assert_eq!(c.offset_percent(), 100);
        c.go_to(2);
        assert_eq!(c.offset_percent(), 200);
        c.next();
        assert_eq!(c.offset_percent(), 0);
    }

    #[test]
    fn test_active_dot_follows_index() {
        let mut c = carousel(3);
        c.go_to(1);
        assert!(!c.is_active(0));
        assert!(c.is_active(1));
        assert!(!c.is_active(2));
    }
}
