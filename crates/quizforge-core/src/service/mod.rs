//! Service layer: the persistence adapter and the editor session
//! workflow.

pub mod editor;
pub mod quiz;

#[cfg(test)]
pub(crate) mod testing;
