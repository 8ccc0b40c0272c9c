mod builder;
mod event;

pub use builder::{ImportedPanel, PanelBuilder};
pub use event::ImportEvent;
