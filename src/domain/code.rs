//! Declaration-style builder: a class header with constructor field assignments.

use std::fmt;

use tracing::trace;

use crate::domain::render::{IndentUnit, Render};

const CLASS_KEYWORD: &str = "class";
const CONSTRUCTOR_HEADER: &str = "def __init__(self):";
const EMPTY_BODY: &str = "pass";

/// One constructor assignment: `self.<name> = <value>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    /// Initial value, emitted verbatim
    pub value: String,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "self.{} = {}", self.name, self.value)
    }
}

/// A class declaration with its fields in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassDecl {
    pub name: String,
    pub fields: Vec<Field>,
}

impl ClassDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn header(&self) -> String {
        format!("{} {}:", CLASS_KEYWORD, self.name)
    }

    /// Header at `depth`; then either `pass` one level deeper, or the constructor header
    /// one level deeper with each field two levels deeper.
    pub fn render_with(&self, depth: usize, unit: IndentUnit) -> Vec<String> {
        let mut lines = vec![unit.line(depth, self.header())];
        if self.fields.is_empty() {
            lines.push(unit.line(depth + 1, EMPTY_BODY));
            return lines;
        }
        lines.push(unit.line(depth + 1, CONSTRUCTOR_HEADER));
        lines.extend(self.fields.iter().map(|field| unit.line(depth + 2, field)));
        lines
    }
}

impl Render for ClassDecl {
    fn render(&self, depth: usize) -> Vec<String> {
        self.render_with(depth, IndentUnit::DECLARATION)
    }
}

impl fmt::Display for ClassDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// Builds a [`ClassDecl`] one field at a time.
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    root: ClassDecl,
    indent: IndentUnit,
}

impl CodeBuilder {
    pub fn new(root_name: impl Into<String>) -> Self {
        Self::with_indent(root_name, IndentUnit::DECLARATION)
    }

    pub fn with_indent(root_name: impl Into<String>, indent: IndentUnit) -> Self {
        Self {
            root: ClassDecl::new(root_name),
            indent,
        }
    }

    pub fn root_name(&self) -> &str {
        &self.root.name
    }

    pub fn indent(&self) -> IndentUnit {
        self.indent
    }

    /// Append a field; chainable.
    pub fn add_field(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let field = Field::new(name, value);
        trace!("append to class {:?}: {}", self.root.name, field);
        self.root.fields.push(field);
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_field(name, value);
        self
    }

    pub fn len(&self) -> usize {
        self.root.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.fields.is_empty()
    }

    pub(crate) fn decl(&self) -> &ClassDecl {
        &self.root
    }
}

impl Render for CodeBuilder {
    fn render(&self, depth: usize) -> Vec<String> {
        self.root.render_with(depth, self.indent)
    }
}

impl fmt::Display for CodeBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
