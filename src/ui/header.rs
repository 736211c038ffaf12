use crate::navigation::Route;
use crate::ui::theme::{ACCENT_BLUE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Breadcrumb bar: `‹ Back  USER MANAGEMENT / Update user  /users/update/<id>`.
pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, route: Option<&Route>) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let mut spans = vec![
            Span::styled(" ‹ Back (Esc)", separator_style),
            Span::styled("  ", text_style),
            Span::styled(
                "USER MANAGEMENT",
                text_style.add_modifier(Modifier::BOLD),
            ),
            Span::styled(" / ", separator_style),
            Span::styled("Update user information", Style::default().fg(ACCENT_BLUE)),
        ];
        if let Some(route) = route {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(route.to_string(), separator_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
