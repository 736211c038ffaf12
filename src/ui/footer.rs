use crate::notify::{Notification, NotificationLevel};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Key hints on the left; the active notification, or the version, on
    /// the right.
    pub fn widget(&self, area: Rect, notification: Option<&Notification>) -> Paragraph<'static> {
        let hints = " ↑↓: Field │ Enter/Ctrl+S: Update │ Ctrl+U: Clear │ Ctrl+R: Reload │ Esc: Back │ Ctrl+Q: Quit";
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let (right, right_style) = match notification {
            Some(n) => {
                let color = match n.level {
                    NotificationLevel::Success => STATUS_OK,
                    NotificationLevel::Error => STATUS_ERROR,
                };
                (format!("{} ", n.message), Style::default().fg(color))
            }
            None => (format!("v{} ", VERSION), text_style),
        };

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let right_width = right.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(right_width);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding.max(1)), text_style),
            Span::styled(right, right_style),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
