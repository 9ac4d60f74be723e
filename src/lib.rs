//! pageforge - a drag-and-drop visual page editor.
//!
//! Component templates from a palette are dragged onto drop zones of a
//! canvas, selected, restyled through a properties panel and deleted again.
//! Everything operates on the in-memory [`dom::Document`]; the
//! [`project::ProjectManager`] talks to the REST API that stores projects.

pub mod color;
pub mod constants;
pub mod dom;
pub mod editor;
pub mod logging;
pub mod notifications;
pub mod project;
pub mod settings;

pub use editor::{EditorOptions, ShortcutHandler, VisualEditor};
