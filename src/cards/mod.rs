//! Card system: identifiers, metadata, and catalog.
//!
//! ## Key Types
//!
//! - `CardIdentifier`: Base id plus printing (`OGN-249-2`)
//! - `CardMetadata`: Static card data (type, colors, tags, printings)
//! - `CardCatalog`: Lookup seam the engine consumes
//! - `CardRegistry`: In-memory catalog, loadable from JSON

pub mod definition;
pub mod identifier;
pub mod registry;

pub use definition::{CardMetadata, CardSuper, CardType, Color, Colors};
pub use identifier::CardIdentifier;
pub use registry::{CardCatalog, CardRegistry};
