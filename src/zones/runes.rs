//! Rune split derived from the legend.
//!
//! Runes are not stored as cards. The legend's first color selects rune A,
//! the second rune B, each through the fixed color-to-rune table. The deck
//! only stores how many of each rune it runs and which printing each uses.

use serde::{Deserialize, Serialize};

use crate::cards::{CardCatalog, CardIdentifier, Color};

/// Which of the two runes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuneSlot {
    A,
    B,
}

impl RuneSlot {
    fn index(self) -> usize {
        match self {
            RuneSlot::A => 0,
            RuneSlot::B => 1,
        }
    }

    /// The other slot.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            RuneSlot::A => RuneSlot::B,
            RuneSlot::B => RuneSlot::A,
        }
    }
}

/// Rune counts, printings and the colors they resolve through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuneSplit {
    colors: [Option<Color>; 2],
    counts: [u32; 2],
    variants: [usize; 2],
}

impl RuneSplit {
    /// Even split with no legend attached.
    #[must_use]
    pub fn new(total: u32) -> Self {
        Self {
            colors: [None, None],
            counts: [total / 2, total - total / 2],
            variants: [0, 0],
        }
    }

    /// Color feeding a slot, if the legend has one there.
    #[must_use]
    pub fn color(&self, slot: RuneSlot) -> Option<Color> {
        self.colors[slot.index()]
    }

    #[must_use]
    pub fn count(&self, slot: RuneSlot) -> u32 {
        self.counts[slot.index()]
    }

    /// 0-based printing of a slot's rune.
    #[must_use]
    pub fn variant(&self, slot: RuneSlot) -> usize {
        self.variants[slot.index()]
    }

    /// Sum of both counts.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts[0] + self.counts[1]
    }

    /// The rune card a slot resolves to, with its printing.
    #[must_use]
    pub fn rune_card(&self, slot: RuneSlot) -> Option<CardIdentifier> {
        self.color(slot)
            .map(|c| CardIdentifier::new(c.rune_base_id(), self.variant(slot)))
    }

    /// Slot whose color is `color`.
    #[must_use]
    pub fn slot_for(&self, color: Color) -> Option<RuneSlot> {
        [RuneSlot::A, RuneSlot::B]
            .into_iter()
            .find(|&s| self.color(s) == Some(color))
    }

    /// Move one rune from the other slot into `slot`.
    ///
    /// Returns whether anything moved. A slot without a color never
    /// gives or takes runes.
    pub fn click(&mut self, slot: RuneSlot) -> bool {
        let from = slot.other();
        if self.color(slot).is_none() || self.color(from).is_none() {
            return false;
        }
        if self.counts[from.index()] == 0 {
            return false;
        }
        self.counts[from.index()] -= 1;
        self.counts[slot.index()] += 1;
        true
    }

    /// Attach to a legend's colors.
    ///
    /// A legend with fewer than two colors puts every rune in slot A.
    /// Gaining a second color starts from an even split; keeping two
    /// colors keeps the current split. Printings are clamped to the new
    /// runes' printing lists.
    pub fn attune(&mut self, legend_colors: &[Color], total: u32, catalog: &dyn CardCatalog) {
        let had_second = self.colors[1].is_some();
        self.colors = [legend_colors.first().copied(), legend_colors.get(1).copied()];

        if self.colors[1].is_none() {
            self.counts = [total, 0];
        } else if !had_second || self.total() != total {
            self.counts = [total / 2, total - total / 2];
        }

        for slot in [RuneSlot::A, RuneSlot::B] {
            let current = self.variant(slot);
            self.set_variant(slot, current, catalog);
        }
    }

    /// Drop the legend's colors. Counts and printings are kept.
    pub fn detach(&mut self) {
        self.colors = [None, None];
    }

    /// Choose a slot's printing, clamped to the rune's printing list.
    ///
    /// Returns the stored index.
    pub fn set_variant(&mut self, slot: RuneSlot, variant_index: usize, catalog: &dyn CardCatalog) -> usize {
        let clamped = self
            .color(slot)
            .and_then(|c| catalog.get_card_by_base_id(c.rune_base_id()))
            .map_or(0, |meta| meta.clamp_variant(variant_index));
        self.variants[slot.index()] = clamped;
        clamped
    }

    /// Set counts from a loaded deck, repairing splits that don't sum to
    /// `total` while colors are attached.
    pub fn load_counts(&mut self, a: u32, b: u32, total: u32) {
        self.counts = [a, b];
        if self.colors[0].is_some() && self.colors[1].is_none() {
            self.counts = [total, 0];
        } else if self.total() != total {
            self.counts = [total / 2, total - total / 2];
        }
    }
}
