//! Tests for DocumentService

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use rsbuilder::application::services::DocumentService;
use rsbuilder::application::ApplicationError;
use rsbuilder::domain::{CodeBuilder, HtmlBuilder, Render};
use rsbuilder::infrastructure::traits::{FileSystem, RealFileSystem};
use rsbuilder::util::testing::init_test_setup;

/// Filesystem whose writes always fail with the given kind.
struct FailingFileSystem(io::ErrorKind);

impl FileSystem for FailingFileSystem {
    fn write(&self, _path: &Path, _content: &str) -> io::Result<()> {
        Err(io::Error::new(self.0, "disk says no"))
    }

    fn create_dir_all(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn given_html_builder_when_saving_then_file_holds_text_plus_newline() {
    // Arrange
    init_test_setup();
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("list.html");
    let builder = HtmlBuilder::new("ul").with_child("li", "hello");

    let service = DocumentService::new(Arc::new(RealFileSystem));

    // Act
    let written = service.save(&builder, &dest).unwrap();

    // Assert
    assert_eq!(written, dest);
    let content = std::fs::read_to_string(&dest).unwrap();
    assert_eq!(content, format!("{}\n", builder.to_text()));
}

#[test]
fn given_missing_parent_dirs_when_saving_then_creates_them() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("generated/models/person.py");
    let builder = CodeBuilder::new("Person").with_field("age", "0");
    let service = DocumentService::new(Arc::new(RealFileSystem));

    // Act
    service.save(&builder, &dest).unwrap();

    // Assert
    assert!(dest.exists());
    assert!(std::fs::read_to_string(&dest)
        .unwrap()
        .starts_with("class Person:\n"));
}

#[test]
fn given_existing_file_when_saving_then_overwrites() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("out.html");
    std::fs::write(&dest, "stale content that is much longer than the new one").unwrap();
    let service = DocumentService::new(Arc::new(RealFileSystem));

    // Act
    service.save(&HtmlBuilder::new("p"), &dest).unwrap();

    // Assert
    assert_eq!(std::fs::read_to_string(&dest).unwrap(), "<p>\n</p>\n");
}

#[test]
fn given_output_dir_when_saving_relative_path_then_written_under_it() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let service =
        DocumentService::new(Arc::new(RealFileSystem)).with_output_dir(Some(temp.path().into()));

    // Act
    let written = service
        .save(&CodeBuilder::new("Foo"), Path::new("foo.py"))
        .unwrap();

    // Assert
    assert_eq!(written, temp.path().join("foo.py"));
    assert_eq!(
        std::fs::read_to_string(&written).unwrap(),
        "class Foo:\n    pass\n"
    );
}

#[test]
fn given_failing_filesystem_when_saving_then_io_error_surfaces_unchanged() {
    // Arrange
    let service = DocumentService::new(Arc::new(FailingFileSystem(
        io::ErrorKind::PermissionDenied,
    )));

    // Act
    let result = service.save(&HtmlBuilder::new("p"), &PathBuf::from("/locked/out.html"));

    // Assert
    let err = result.unwrap_err();
    assert!(matches!(err, ApplicationError::OperationFailed { .. }));
    assert!(err.to_string().contains("/locked/out.html"));
    let source = err.io_source().expect("io source kept");
    assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
    assert_eq!(source.to_string(), "disk says no");
}

#[test]
fn given_any_document_when_rendering_through_service_then_matches_to_text() {
    // Arrange
    let service = DocumentService::new(Arc::new(RealFileSystem));
    let builder = HtmlBuilder::new("ul").with_child("li", "x");

    // Act / Assert
    assert_eq!(service.render(&builder), builder.to_text());
}
