//! Conversions into LSP response types.
//!
//! LSP hosts have no "after" decoration, so the annotation becomes an inlay
//! hint at the end of the line and the hover markdown is reused both as the
//! hint tooltip and as a regular hover.

use crate::buffer::TextBuffer;
use crate::command::ReplaceRequest;
use crate::composer::RenderedDecoration;
use crate::error::Result;
use tower_lsp_server::ls_types::{
    Command, Hover, HoverContents, InlayHint, InlayHintKind, InlayHintLabel, InlayHintTooltip,
    MarkupContent, MarkupKind, Range, TextEdit,
};

impl RenderedDecoration {
    fn markdown(&self) -> MarkupContent {
        MarkupContent {
            kind: MarkupKind::Markdown,
            value: self.hover.to_markdown(),
        }
    }

    /// Annotation as an inlay hint at end of line.
    ///
    /// Returns `None` when there is no annotation text to show.
    pub fn to_inlay_hint(&self) -> Option<InlayHint> {
        let label = self.annotation_text.clone()?;

        Some(InlayHint {
            position: self.range.end,
            label: InlayHintLabel::String(label),
            kind: Some(InlayHintKind::TYPE),
            text_edits: None,
            tooltip: Some(InlayHintTooltip::MarkupContent(self.markdown())),
            padding_left: Some(true),
            padding_right: None,
            data: None,
        })
    }

    pub fn to_hover(&self) -> Hover {
        Hover {
            contents: HoverContents::Markup(self.markdown()),
            range: Some(self.range),
        }
    }
}

impl ReplaceRequest {
    /// Edit replacing `[start, end)` with the new value.
    pub fn to_text_edit(&self, buffer: &dyn TextBuffer) -> TextEdit {
        TextEdit {
            range: Range::new(buffer.position_at(self.start), buffer.position_at(self.end)),
            new_text: self.new_value.clone(),
        }
    }

    /// Command carrying this request as its single argument.
    pub fn to_command(&self, command: &str, title: impl Into<String>) -> Result<Command> {
        Ok(Command {
            title: title.into(),
            command: command.to_string(),
            arguments: Some(vec![serde_json::to_value(self)?]),
        })
    }
}
