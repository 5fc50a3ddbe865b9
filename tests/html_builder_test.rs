//! Tests for HtmlBuilder (tag-style rendering)

use rstest::rstest;

use rsbuilder::domain::{DomainError, ElementData, HtmlBuilder, IndentUnit, Render};

/// Check every line's indentation against the depth implied by open/close tags.
fn assert_indentation(text: &str, unit: usize) {
    let mut depth = 0usize;
    for line in text.lines() {
        let content = line.trim_start();
        let leading = line.len() - content.len();
        if content.starts_with("</") {
            depth -= 1;
            assert_eq!(leading, depth * unit, "closing line {line:?}");
        } else if content.starts_with('<') {
            assert_eq!(leading, depth * unit, "opening line {line:?}");
            depth += 1;
        } else {
            assert_eq!(leading, depth * unit, "text line {line:?}");
        }
    }
    assert_eq!(depth, 0, "unbalanced tags in {text:?}");
}

#[test]
fn given_ul_with_two_items_when_rendering_then_matches_expected_markup() {
    // Arrange
    let mut builder = HtmlBuilder::new("ul");
    builder.add_child("li", "hello");
    builder.add_child("li", "world");

    // Act
    let text = builder.to_text();

    // Assert
    let expected = "\
<ul>
  <li>
    hello
  </li>
  <li>
    world
  </li>
</ul>";
    assert_eq!(text, expected);
}

#[test]
fn given_fluent_chain_when_rendering_then_same_as_separate_calls() {
    // Arrange
    let mut separate = HtmlBuilder::new("ul");
    separate.add_child("li", "chain");
    separate.add_child("li", "creation");

    let mut chained = HtmlBuilder::new("ul");
    chained.add_child("li", "chain").add_child("li", "creation");

    let owned = ElementData::create("ul")
        .with_child("li", "chain")
        .with_child("li", "creation");

    // Assert
    assert_eq!(separate.to_text(), chained.to_text());
    assert_eq!(separate.to_text(), owned.to_text());
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(10)]
fn given_n_distinct_children_when_rendering_then_order_is_preserved(#[case] n: usize) {
    // Arrange
    let mut builder = HtmlBuilder::new("ol");
    for i in 0..n {
        builder.add_child(format!("item{i}"), format!("text{i}"));
    }

    // Act
    let text = builder.to_text();

    // Assert
    let positions: Vec<usize> = (0..n)
        .map(|i| text.find(&format!("<item{i}>")).expect("child rendered"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(builder.len(), n);
}

#[test]
fn given_empty_builder_when_rendering_then_open_close_pair() {
    // Arrange
    let builder = HtmlBuilder::new("root");

    // Act
    let lines = builder.render(0);

    // Assert
    assert_eq!(lines, vec!["<root>", "</root>"]);
}

#[test]
fn given_duplicates_when_rendering_then_all_kept() {
    // Arrange
    let builder = HtmlBuilder::new("ul")
        .with_child("li", "same")
        .with_child("li", "same");

    // Act
    let text = builder.to_text();

    // Assert
    assert_eq!(text.matches("<li>").count(), 2);
    assert_eq!(text.matches("same").count(), 2);
}

#[test]
fn given_builder_when_rendering_twice_then_output_identical() {
    // Arrange
    let builder = HtmlBuilder::new("p").with_child("b", "x");

    // Act / Assert
    assert_eq!(builder.to_text(), builder.to_text());
}

#[test]
fn given_render_between_appends_when_appending_again_then_tree_still_grows() {
    // Arrange
    let mut builder = HtmlBuilder::new("ul");
    builder.add_child("li", "a");
    let before = builder.to_text();

    // Act
    builder.add_child("li", "b");

    // Assert
    assert_ne!(before, builder.to_text());
    assert!(builder.to_text().contains("    b"));
}

#[test]
fn given_nested_children_when_rendering_then_indentation_follows_depth() {
    // Arrange
    let mut builder = HtmlBuilder::new("html");
    let body = builder.push_child("body", "");
    let list = builder.add_child_to(body, "ul", "").unwrap();
    builder.add_child_to(list, "li", "deep").unwrap();
    builder.add_child("footer", "end");

    // Act
    let text = builder.to_text();

    // Assert
    assert_indentation(&text, 2);
    assert_eq!(builder.depth(), 4);
    assert!(text.contains("\n        deep\n"));
}

#[rstest]
#[case(1)]
#[case(4)]
fn given_custom_indent_unit_when_rendering_then_every_line_uses_it(#[case] unit: usize) {
    // Arrange
    let mut builder = HtmlBuilder::with_indent("div", IndentUnit::new(unit));
    let section = builder.push_child("section", "title");
    builder.add_child_to(section, "p", "body").unwrap();

    // Act / Assert
    assert_indentation(&builder.to_text(), unit);
}

#[test]
fn given_render_at_depth_when_rendering_then_root_shifted() {
    // Arrange
    let builder = HtmlBuilder::new("li").with_child("a", "link");

    // Act
    let lines = builder.render(2);

    // Assert
    assert_eq!(lines.first().map(String::as_str), Some("    <li>"));
    assert_eq!(lines.last().map(String::as_str), Some("    </li>"));
}

#[test]
fn given_handle_from_other_builder_when_nesting_then_errors() {
    // Arrange
    let mut ours = HtmlBuilder::new("ul");
    let theirs = HtmlBuilder::new("ol");

    // Act
    let result = ours.add_child_to(theirs.root(), "li", "x");

    // Assert
    assert_eq!(result, Err(DomainError::UnknownNode(theirs.root())));
    assert!(ours.is_empty());
}

#[test]
fn given_tree_when_iterating_then_preorder_with_depths() {
    // Arrange
    let mut builder = HtmlBuilder::new("a");
    let b = builder.push_child("b", "");
    builder.add_child_to(b, "c", "").unwrap();
    builder.add_child("d", "");

    // Act
    let visited: Vec<(usize, String)> = builder
        .iter()
        .map(|(depth, node)| (depth, node.data.name.clone()))
        .collect();

    // Assert
    assert_eq!(
        visited,
        vec![
            (0, "a".to_string()),
            (1, "b".to_string()),
            (2, "c".to_string()),
            (1, "d".to_string()),
        ]
    );
}
