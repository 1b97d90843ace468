//! UpdateSegmentHandler - Command handler for editing a segment.
//!
//! Segment editing has no write path yet. The command is accepted so the
//! endpoint keeps its shape, and it always answers with `NotImplemented`.

use tracing::info;

use crate::domain::foundation::SegmentId;
use crate::ports::SegmentError;

/// Command to update a segment.
#[derive(Debug, Clone)]
pub struct UpdateSegmentCommand {
    pub segment_id: SegmentId,
    pub name: Option<String>,
}

/// Handler for segment updates.
#[derive(Debug, Default)]
pub struct UpdateSegmentHandler;

impl UpdateSegmentHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(&self, command: UpdateSegmentCommand) -> Result<(), SegmentError> {
        info!(
            segment_id = %command.segment_id,
            has_name = command.name.is_some(),
            "Segment update requested"
        );
        Err(SegmentError::NotImplemented("Segment update"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_update_reports_not_implemented() {
        let handler = UpdateSegmentHandler::new();

        let result = handler
            .handle(UpdateSegmentCommand {
                segment_id: SegmentId::new(),
                name: Some("Renamed".to_string()),
            })
            .await;

        assert!(matches!(result, Err(SegmentError::NotImplemented(_))));
    }
}
