//! Boundary messages between the extraction engine and its embedding UI.

use serde::{Deserialize, Serialize};

use crate::aggregate::{extract_document, Phase};
use crate::document::DesignDocument;
use crate::token::TokenDocument;

/// A request from the UI side of the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum UiRequest {
    /// Start a full extraction run.
    Extract,
}

/// A message from the engine to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum HostMessage {
    /// A phase has started.
    Progress {
        /// Human-readable phase label.
        message: String,
    },
    /// The run finished; carries the full output record.
    Extracted {
        /// The extraction result.
        data: TokenDocument,
    },
    /// The run failed.
    Error {
        /// What went wrong.
        message: String,
    },
}

/// Run an extraction and stream its lifecycle to `emit`.
///
/// Emits one progress message per phase, then exactly one terminal
/// message: `extracted` with the record on success, `error` on failure.
pub fn run_extraction(document: &DesignDocument, mut emit: impl FnMut(HostMessage)) {
    let result = extract_document(document, |phase: Phase| {
        emit(HostMessage::Progress {
            message: phase.label().to_string(),
        });
    });

    match result {
        Ok(data) => emit(HostMessage::Extracted { data }),
        Err(error) => {
            tracing::error!(%error, "extraction failed");
            emit(HostMessage::Error {
                message: error.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request: UiRequest = serde_json::from_str(r#"{"type":"extract"}"#).expect("parse");
        assert_eq!(request, UiRequest::Extract);
    }

    #[test]
    fn test_message_tags_are_lowercase() {
        let progress = HostMessage::Progress {
            message: "Extracting colors...".to_string(),
        };
        let value = serde_json::to_value(&progress).expect("serialize");
        assert_eq!(value["type"], "progress");
        assert_eq!(value["message"], "Extracting colors...");
    }

    #[test]
    fn test_run_emits_progress_then_one_terminal() {
        let document = DesignDocument::new("doc");
        let mut messages = Vec::new();
        run_extraction(&document, |message| messages.push(message));

        // Seven phases then the result.
        assert_eq!(messages.len(), 8);
        for message in &messages[..7] {
            assert!(matches!(message, HostMessage::Progress { .. }));
        }
        match messages.last().expect("terminal message") {
            HostMessage::Extracted { data } => assert_eq!(data.file_name, "doc"),
            other => panic!("unexpected terminal message: {other:?}"),
        }
    }
}
