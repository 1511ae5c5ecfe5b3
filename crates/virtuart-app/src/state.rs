//! Application state (Model in TEA pattern)

use virtuart_core::prelude::*;
use virtuart_core::{CategoryCard, Feature};

use crate::card_strip::CardStrip;
use crate::carousel::Carousel;
use crate::config::{GalleryContent, Settings};
use crate::focus::FocusRing;
use crate::hit_map::HitMap;
use crate::selection::SelectionState;

/// Lifecycle phase of the gallery screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    pub settings: Settings,

    /// Hero carousel (owns the slides)
    pub carousel: Carousel,

    /// Category cards, in strip order
    pub cards: Vec<CategoryCard>,

    /// Feature grid entries
    pub features: Vec<Feature>,

    /// Scroll state of the category strip
    pub card_strip: CardStrip,

    /// Card detail modal
    pub selection: SelectionState,

    /// Keyboard focus
    pub focus: FocusRing,

    /// Pointer regions of the last rendered frame (set during render)
    pub hit_map: HitMap,

    /// Transient status line text (e.g. last followed link)
    pub status: Option<String>,
}

impl AppState {
    /// Build the initial state. Fails when `content` has no slides.
    pub fn new(content: GalleryContent, settings: Settings) -> Result<Self> {
        let GalleryContent {
            slides,
            cards,
            features,
        } = content;

        let carousel = Carousel::new(slides)?;
        let card_strip = CardStrip::new(cards.len())
            .with_scroll_fraction(settings.ui.effective_scroll_fraction())
            .with_smooth_scroll(settings.ui.smooth_scroll);
        let focus = FocusRing::new(carousel.len(), cards.len(), features.len());

        Ok(Self {
            phase: AppPhase::Running,
            settings,
            carousel,
            cards,
            features,
            card_strip,
            selection: SelectionState::default(),
            focus,
            hit_map: HitMap::new(),
            status: None,
        })
    }

    /// State with the built-in placeholder content and default settings
    #[cfg(any(test, feature = "test-helpers"))]
    pub fn with_defaults() -> Self {
        Self::new(GalleryContent::default(), Settings::default())
            .expect("placeholder content has slides")
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn card_index(&self, id: &str) -> Option<usize> {
        self.cards.iter().position(|c| c.id == id)
    }

    /// Open the card modal for the card at `index`. Out-of-range indices are ignored.
    pub fn select_card(&mut self, index: usize) -> bool {
        match self.cards.get(index) {
            Some(card) => {
                self.selection.select(card.clone());
                true
            }
            None => false,
        }
    }
}
