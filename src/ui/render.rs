use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::form::{fields_from_record, FieldKey, FormField, FormState};
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    ACCENT_BLUE, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, LABEL_TEXT, STATUS_ERROR,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const LABEL_WIDTH: usize = 14;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.route()), header);
    frame.render_widget(Clear, body);

    match app.form() {
        FormState::Withheld | FormState::Loading { placeholder: None } => {
            render_message(frame, body, "Loading user...", Style::default().fg(LABEL_TEXT));
        }
        FormState::Loading {
            placeholder: Some(record),
        } => {
            // Previous result stays on screen while the new one loads
            let fields = fields_from_record(record);
            let lines = field_lines(&fields, None, None, true);
            frame.render_widget(
                Paragraph::new(lines).block(form_block("Update information (loading...)")),
                body,
            );
        }
        FormState::LoadFailed { message } => {
            let text = format!("Could not load user: {}\n\nCtrl+R: Retry  Esc: Back", message);
            render_message(frame, body, &text, Style::default().fg(STATUS_ERROR));
        }
        FormState::Editing {
            fields,
            focused,
            submitting,
            missing,
            ..
        } => {
            let title = if *submitting {
                "Update information (saving...)"
            } else {
                "Update information"
            };
            let lines = field_lines(fields, Some(*focused), *missing, false);
            frame.render_widget(Paragraph::new(lines).block(form_block(title)), body);

            if let Some(field) = fields.get(*focused) {
                if !field.read_only() {
                    if let Some(position) = cursor_position(body, *focused, field) {
                        frame.set_cursor_position(position);
                    }
                }
            }
        }
    }

    frame.render_widget(Footer::new().widget(footer, app.notification()), footer);
}

fn form_block(title: &str) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            title.to_string(),
            Style::default().fg(ACCENT_BLUE).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn render_message(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let widget = Paragraph::new(text.to_string())
        .style(style)
        .wrap(Wrap { trim: false })
        .block(form_block("Update information"));
    frame.render_widget(widget, area);
}

/// One line per input: padded label, then the value.
pub fn field_lines(
    fields: &[FormField],
    focused: Option<usize>,
    missing: Option<FieldKey>,
    dimmed: bool,
) -> Vec<Line<'static>> {
    fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let mut label_style = Style::default().fg(LABEL_TEXT);
            let mut value_style = Style::default().fg(HEADER_TEXT);
            if field.read_only() || dimmed {
                value_style = value_style.add_modifier(Modifier::DIM);
            }
            if missing == Some(field.key) {
                label_style = label_style.fg(STATUS_ERROR);
            }

            let label = format!("{:<width$}", field.label(), width = LABEL_WIDTH);
            let mut spans = vec![
                Span::styled(" ", Style::default()),
                Span::styled(label, label_style),
                Span::styled(": ", label_style),
                Span::styled(field.value.clone(), value_style),
            ];
            if field.read_only() {
                spans.push(Span::styled("  (read-only)", Style::default().fg(LABEL_TEXT)));
            } else if field.value.is_empty() && missing == Some(field.key) {
                spans.push(Span::styled(
                    "Please fill out this field",
                    Style::default().fg(STATUS_ERROR).add_modifier(Modifier::ITALIC),
                ));
            }

            let line = Line::from(spans);
            if focused == Some(index) {
                line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
            } else {
                line
            }
        })
        .collect()
}

/// Terminal cell right after the focused value, inside the form borders.
fn cursor_position(body: Rect, index: usize, field: &FormField) -> Option<(u16, u16)> {
    let inner_x = body.x.saturating_add(1);
    let inner_y = body.y.saturating_add(1);
    let inner_height = body.height.saturating_sub(2) as usize;
    let inner_width = body.width.saturating_sub(2) as usize;
    if index >= inner_height || inner_width == 0 {
        return None;
    }
    let offset = (1 + LABEL_WIDTH + 2 + field.value.chars().count()).min(inner_width - 1);
    Some((inner_x + offset as u16, inner_y + index as u16))
}
