//! Drop-target hit testing.
//!
//! The presentation layer registers the on-screen rectangle of every slot
//! it draws plus the background grid. A pointer position resolves to the
//! most specific target containing it.

use serde::{Deserialize, Serialize};

use crate::core::Zone;

/// Pointer position in layout coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle. Left and top edges are inclusive, right and
/// bottom exclusive, so adjacent slots never both claim a point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.x + self.width && point.y >= self.y && point.y < self.y + self.height
    }
}

/// Where a drop landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DropTarget {
    MainDeckSlot(usize),
    SideDeckSlot(usize),
    ChampionSlot,
    LegendSlot,
    BattlefieldSlot(usize),
    /// Grid background: append to the main deck.
    GridArea,
    /// Outside every registered region.
    None,
}

impl DropTarget {
    /// Zone the target belongs to. The grid area feeds the main deck.
    #[must_use]
    pub fn zone(self) -> Option<Zone> {
        match self {
            DropTarget::MainDeckSlot(_) | DropTarget::GridArea => Some(Zone::MainDeck),
            DropTarget::SideDeckSlot(_) => Some(Zone::SideDeck),
            DropTarget::ChampionSlot => Some(Zone::Champion),
            DropTarget::LegendSlot => Some(Zone::Legend),
            DropTarget::BattlefieldSlot(_) => Some(Zone::Battlefields),
            DropTarget::None => None,
        }
    }

    /// Insertion index within the zone. The grid area appends.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            DropTarget::MainDeckSlot(i) | DropTarget::SideDeckSlot(i) | DropTarget::BattlefieldSlot(i) => i,
            DropTarget::GridArea => usize::MAX,
            DropTarget::ChampionSlot | DropTarget::LegendSlot | DropTarget::None => 0,
        }
    }
}

/// Registered slot rectangles.
#[derive(Clone, Debug, Default)]
pub struct ZoneLayout {
    slots: Vec<(Rect, DropTarget)>,
    grid: Option<Rect>,
}

impl ZoneLayout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a slot. Later registrations win where slots overlap.
    pub fn add_slot(&mut self, rect: Rect, target: DropTarget) {
        self.slots.push((rect, target));
    }

    /// Builder form of `add_slot`.
    #[must_use]
    pub fn with_slot(mut self, rect: Rect, target: DropTarget) -> Self {
        self.add_slot(rect, target);
        self
    }

    /// Set the grid background.
    #[must_use]
    pub fn with_grid(mut self, rect: Rect) -> Self {
        self.grid = Some(rect);
        self
    }

    /// Resolve a pointer position.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> DropTarget {
        if let Some(&(_, target)) = self.slots.iter().rev().find(|(rect, _)| rect.contains(point)) {
            return target;
        }
        match self.grid {
            Some(grid) if grid.contains(point) => DropTarget::GridArea,
            _ => DropTarget::None,
        }
    }
}
