//! Feature-Handler: führen Engine-Commands auf dem Zustand aus.

pub(crate) mod scroll;
pub(crate) mod selection;
pub(crate) mod session;
