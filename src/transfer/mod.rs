//! Moving cards between zones with pointer and touch input.
//!
//! ## Key Types
//!
//! - `DragEngine`: Pointer-down / move / up state machine with optimistic removal
//! - `DragSource`: Where the in-flight card came from
//! - `ZoneLayout`: Hit-testing of slot rectangles into a `DropTarget`
//! - `GestureRouter`: Click and tap shortcuts onto the deck operations
//! - `TapTracker`: Single/double/triple tap detection per source

pub mod drag;
pub mod gestures;
pub mod layout;
pub mod taps;

pub use drag::{DragEngine, DragSource, DragState, DropOutcome};
pub use gestures::{
    add_copy, add_from_search, move_between_decks, rune_variant_choices, variant_choices, Gesture, GestureOutcome,
    GestureRouter, VariantChoice,
};
pub use layout::{DropTarget, Point, Rect, ZoneLayout};
pub use taps::{TapGesture, TapTracker};
