//! Emission of the generated Rust source.
//!
//! Rendering is split from formatting: `emit_source` produces deterministic
//! text from the extracted table, and `format_source` pipes that text through
//! rustfmt. Keeping the two apart means a formatting failure is reported as a
//! formatting failure, never as a bad extraction.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::Error;
use crate::extract::WebhookEvent;

/// Render the generated source: a machine-generated-file header naming the
/// tool and the source document, then one constant holding the whole table.
///
/// Entries keep document order. String contents are escaped as Rust literals
/// via `{:?}`. An event without activity types gets an empty slice.
pub fn emit_source(hooks: &[WebhookEvent], url: &str) -> String {
    let mut out = String::new();
    out.push_str("// Code generated by hookgen. DO NOT EDIT.\n");
    out.push_str(&format!("// Derived from {url}\n\n"));
    out.push_str("/// Webhook events that can trigger a workflow, with their activity types.\n");
    out.push_str("pub const WEBHOOK_EVENT_TYPES: &[(&str, &[&str])] = &[\n");
    for hook in hooks {
        out.push_str(&format!("    ({:?}, &[", hook.name));
        for (i, ty) in hook.types.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&format!("{ty:?}"));
        }
        out.push_str("]),\n");
    }
    out.push_str("];\n");
    out
}

/// Run the generated text through rustfmt and return the formatted source.
pub fn format_source(source: &str) -> Result<String, Error> {
    let rustfmt = which::which("rustfmt")
        .map_err(|err| Error::Format(format!("rustfmt not found: {err}")))?;

    let mut child = Command::new(rustfmt)
        .args(["--edition", "2021"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|err| Error::Format(format!("could not run rustfmt: {err}")))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(source.as_bytes())
            .map_err(|err| Error::Format(format!("could not pipe source to rustfmt: {err}")))?;
    }

    let output = child
        .wait_with_output()
        .map_err(|err| Error::Format(format!("could not run rustfmt: {err}")))?;
    if !output.status.success() {
        return Err(Error::Format(format!(
            "could not format generated source: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hook(name: &str, types: &[&str]) -> WebhookEvent {
        WebhookEvent {
            name: name.to_string(),
            types: types.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn emits_entries_in_given_order() {
        let hooks = vec![
            hook("push", &["created", "deleted"]),
            hook("workflow_dispatch", &[]),
        ];
        let src = emit_source(&hooks, "https://example.com/events.md");
        assert_eq!(
            src,
            "// Code generated by hookgen. DO NOT EDIT.\n\
             // Derived from https://example.com/events.md\n\
             \n\
             /// Webhook events that can trigger a workflow, with their activity types.\n\
             pub const WEBHOOK_EVENT_TYPES: &[(&str, &[&str])] = &[\n\
             \x20   (\"push\", &[\"created\", \"deleted\"]),\n\
             \x20   (\"workflow_dispatch\", &[]),\n\
             ];\n"
        );
    }

    #[test]
    fn escapes_string_contents() {
        let hooks = vec![hook("we\"ird", &["a\\b"])];
        let src = emit_source(&hooks, "u");
        assert!(src.contains("(\"we\\\"ird\", &[\"a\\\\b\"]),"));
    }

    #[test]
    fn emission_is_deterministic() {
        let hooks = vec![hook("push", &["created"])];
        assert_eq!(emit_source(&hooks, "u"), emit_source(&hooks, "u"));
    }

    #[test]
    fn formatted_output_is_valid_rust() {
        if which::which("rustfmt").is_err() {
            return;
        }
        let hooks = vec![hook("push", &["created"])];
        let formatted = format_source(&emit_source(&hooks, "u")).unwrap();
        assert!(formatted.contains("WEBHOOK_EVENT_TYPES"));
    }

    #[test]
    fn broken_source_is_a_formatting_error() {
        if which::which("rustfmt").is_err() {
            return;
        }
        let err = format_source("pub const = ;;; not rust").unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }
}
