//! Domain layer: element trees, builders and rendering
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod code;
pub mod error;
pub mod html;
pub mod outline;
pub mod render;

pub use arena::{ElementArena, ElementData, ElementNode, NodeId};
pub use code::{ClassDecl, CodeBuilder, Field};
pub use error::{DomainError, DomainResult};
pub use html::HtmlBuilder;
pub use outline::TreeNodeConvert;
pub use render::{IndentUnit, Render};
