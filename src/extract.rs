//! The extraction walk: document tree in, ordered webhook table out.
//!
//! A single pass over the top-level blocks. Depth-2 headings drive a mutable
//! "current section" name; every table encountered after the start marker is
//! inspected and, when it qualifies, contributes one entry keyed by the
//! section it appeared under. Extraction is all-or-nothing: a malformed
//! qualifying table aborts the whole walk.

use comrak::nodes::{AstNode, NodeValue};

use crate::document::{code_spans, first_link, full_text};
use crate::error::Error;

/// The depth-2 heading that opens the part of the document worth walking.
const START_MARKER: &str = "About events that trigger workflows";

/// Required first header cell of a qualifying table.
const PAYLOAD_HEADER: &str = "Webhook event payload";

/// Sections whose tables never describe webhook activity types, even when a
/// table is present under them.
const SKIPPED_SECTIONS: &[&str] = &["schedule", "workflow_call"];

/// One extracted entry: the event name and its activity types, both in
/// document order relative to their siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookEvent {
    pub name: String,
    pub types: Vec<String>,
}

/// Walk the document and collect every webhook event with its activity types.
///
/// Fails when the start-marker heading is absent, when no qualifying table
/// follows it, or when a qualifying table's name cell carries no link.
pub fn extract<'a>(root: &'a AstNode<'a>) -> Result<Vec<WebhookEvent>, Error> {
    let mut hooks: Vec<WebhookEvent> = Vec::new();
    let mut saw_marker = false;
    let mut current_section = String::new();

    for node in root.children() {
        let heading_level = match &node.data.borrow().value {
            NodeValue::Heading(heading) => Some(heading.level),
            _ => None,
        };

        if !saw_marker {
            if heading_level == Some(2) && full_text(node) == START_MARKER {
                saw_marker = true;
                log::debug!("found start marker heading {START_MARKER:?}");
            }
            continue;
        }

        if heading_level == Some(2) {
            current_section = full_text(node);
            log::debug!("entering section {current_section:?}");
            continue;
        }

        if !matches!(node.data.borrow().value, NodeValue::Table(_)) {
            continue;
        }

        if SKIPPED_SECTIONS.contains(&current_section.as_str()) {
            log::debug!("skipping table under excluded section {current_section:?}");
            continue;
        }

        if let Some(types) = examine_table(node)? {
            hooks.push(WebhookEvent {
                name: current_section.clone(),
                types,
            });
        }
    }

    if !saw_marker {
        return Err(Error::MarkerMissing);
    }
    if hooks.is_empty() {
        return Err(Error::NoWebhookTable);
    }
    Ok(hooks)
}

/// Inspect one table. `Ok(None)` means the table does not qualify and the
/// walk moves on; `Ok(Some(types))` means the first body row was read
/// successfully. Only a qualifying table whose name cell lacks a link is a
/// hard error.
fn examine_table<'a>(table: &'a AstNode<'a>) -> Result<Option<Vec<String>>, Error> {
    log::debug!("table: {:?}", full_text(table));

    let mut saw_header = false;
    for row in table.children() {
        let is_header = match row.data.borrow().value {
            NodeValue::TableRow(header) => header,
            _ => continue,
        };

        if is_header {
            saw_header = true;
            let cell = match row.first_child() {
                Some(cell) => cell,
                None => return Ok(None),
            };
            if full_text(cell) != PAYLOAD_HEADER {
                log::debug!("  not a {PAYLOAD_HEADER:?} table, skipping");
                return Ok(None);
            }
            log::debug!("  found {PAYLOAD_HEADER:?} table header");
            continue;
        }

        // A GFM table cannot be written without a header row, so this guard
        // never fires on well-formed input.
        if !saw_header {
            return Ok(None);
        }

        // Only the first body row carries the primary type list; later rows
        // for the same event are intentionally ignored.
        let name_cell = match row.first_child() {
            Some(cell) => cell,
            None => return Ok(None),
        };
        let name = match first_link(name_cell) {
            Some(link) => full_text(link),
            None => return Err(Error::EventNameMissing(full_text(name_cell))),
        };
        let types = name_cell.next_sibling().map(code_spans).unwrap_or_default();
        log::debug!("  found webhook table: {name:?} {types:?}");
        return Ok(Some(types));
    }

    log::debug!("  table row was not found (saw_header={saw_header})");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document;
    use comrak::Arena;

    fn first_table<'a>(root: &'a AstNode<'a>) -> &'a AstNode<'a> {
        root.descendants()
            .find(|n| matches!(n.data.borrow().value, NodeValue::Table(_)))
            .expect("fixture contains a table")
    }

    #[test]
    fn examine_rejects_unrelated_header() {
        let arena = Arena::new();
        let root = document::parse(&arena, "| Something else | T |\n|---|---|\n| [x](/x) | `a` |\n");
        assert_eq!(examine_table(first_table(root)), Ok(None));
    }

    #[test]
    fn examine_reads_first_body_row_only() {
        let md = "\
| Webhook event payload | Activity types |
|---|---|
| [push](/push) | `created`, `deleted` |
| [push](/push) | `ignored` |
";
        let arena = Arena::new();
        let root = document::parse(&arena, md);
        let types = examine_table(first_table(root)).unwrap().unwrap();
        assert_eq!(types, vec!["created", "deleted"]);
    }

    #[test]
    fn examine_treats_header_only_table_as_absent() {
        let arena = Arena::new();
        let root = document::parse(&arena, "| Webhook event payload | T |\n|---|---|\n");
        assert_eq!(examine_table(first_table(root)), Ok(None));
    }

    #[test]
    fn examine_errors_when_name_cell_has_no_link() {
        let arena = Arena::new();
        let root = document::parse(
            &arena,
            "| Webhook event payload | T |\n|---|---|\n| foo | `a` |\n",
        );
        let err = examine_table(first_table(root)).unwrap_err();
        assert_eq!(err, Error::EventNameMissing("foo".to_string()));
    }

    #[test]
    fn examine_accepts_row_without_code_spans() {
        let arena = Arena::new();
        let root = document::parse(
            &arena,
            "| Webhook event payload | T |\n|---|---|\n| [push](/push) | Not applicable |\n",
        );
        let types = examine_table(first_table(root)).unwrap().unwrap();
        assert!(types.is_empty());
    }
}
