//! To-hit results and the modifier stack that builds them.
mod modifiers;
mod result;

pub use modifiers::{Modifier, ModifierBundle, ModifierStack, ModifierStage};
pub use result::{ToHitResult, ToHitValue};
