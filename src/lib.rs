//! rsbuilder: incremental element-tree builders with indentation-aware rendering.
//!
//! Two styles share one [`domain::Render`] contract:
//! - [`domain::HtmlBuilder`] renders `<tag>` / `</tag>` pairs, 2 spaces per level.
//! - [`domain::CodeBuilder`] renders a class declaration, 4 spaces per level.
//!
//! ```
//! use rsbuilder::domain::{CodeBuilder, Render};
//!
//! let code = CodeBuilder::new("Person")
//!     .with_field("name", "\"\"")
//!     .with_field("age", "0");
//! assert_eq!(
//!     code.to_text(),
//!     "class Person:\n    def __init__(self):\n        self.name = \"\"\n        self.age = 0"
//! );
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
