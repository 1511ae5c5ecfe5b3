//! Pointer hit regions recorded during render.
//!
//! The view pushes regions back to front while it draws, so later regions sit
//! on top. A click resolves to the top-most region under the pointer; an open
//! modal therefore shadows everything drawn before it.

use crate::focus::Focus;

/// Screen rectangle in terminal cells. Mirrors ratatui's `Rect` without
/// pulling the rendering crate into the app layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && u32::from(column) < u32::from(self.x) + u32::from(self.width)
            && u32::from(row) < u32::from(self.y) + u32::from(self.height)
    }
}

/// What a pointer press landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// An element that can also be reached with the keyboard
    Element(Focus),
    /// The scrollable area of the category strip (wheel target)
    CardStrip,
    /// Dimmed area around the card modal
    ModalBackdrop,
    /// Body of the card modal. Swallows presses so they never reach the backdrop.
    ModalContent,
}

/// Regions from the last rendered frame
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Region, HitTarget)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous frame
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, region: Region, target: HitTarget) {
        if region.width > 0 && region.height > 0 {
            self.regions.push((region, target));
        }
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Top-most target under the pointer
    pub fn hit(&self, column: u16, row: u16) -> Option<HitTarget> {
        self.regions
            .iter()
            .rev()
            .find(|(region, _)| region.contains(column, row))
            .map(|(_, target)| *target)
    }

    /// Whether the pointer is over `target` and nothing drawn later covers it
    /// with a non-element region (elements inside the target still count).
    pub fn is_over(&self, column: u16, row: u16, target: HitTarget) -> bool {
        for (region, t) in self.regions.iter().rev() {
            if !region.contains(column, row) {
                continue;
            }
            if *t == target {
                return true;
            }
            if !matches!(t, HitTarget::Element(_)) {
                return false;
            }
        }
        false
    }

    /// Region of the first element registered for `focus`
    pub fn region_of(&self, focus: Focus) -> Option<Region> {
        self.regions
            .iter()
            .find(|(_, t)| *t == HitTarget::Element(focus))
            .map(|(r, _)| *r)
    }
}
