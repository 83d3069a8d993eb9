//! Selection copier infrastructure module

mod enigo;
mod noop;

pub use enigo::EnigoCopier;
pub use noop::NoOpCopier;

use crate::application::ports::SelectionCopier;

/// Copier for a manual capture: simulate the copy shortcut only when the
/// selection should be pulled onto the clipboard first.
pub fn create_copier(copy_selection: bool) -> Box<dyn SelectionCopier> {
    if copy_selection {
        Box::new(EnigoCopier::new())
    } else {
        Box::new(NoOpCopier::new())
    }
}
