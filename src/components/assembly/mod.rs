mod layout;
mod part;
mod slot;

pub use layout::{standard_parts, standard_slots};
pub use part::{Part, PartId, PartKind};
pub use slot::{Slot, SlotFeedback, SlotHighlight};
