use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::catalog::{CertificationRecord, CHECK_GLYPH, CLOSE_GLYPH, LINK_GLYPH};
use crate::utils;
use crate::view::grid::badge_span;
use crate::view::layout::ModalLayout;

/// Expanded detail for the selected record, drawn over the grid. Clears
/// the area behind the box so tiles never bleed through the overlay.
pub fn render(f: &mut Frame, record: &CertificationRecord, layout: &ModalLayout) {
    let area = layout.content;
    if area.width < 6 || area.height < 3 {
        return;
    }

    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let body = Rect {
        x: inner.x + 1,
        y: inner.y,
        width: inner.width.saturating_sub(2),
        height: inner.height,
    };
    let width = usize::from(body.width);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(vec![
        Span::styled(
            format!("{} ", record.icon.symbol()),
            Style::default().fg(Color::Green),
        ),
        Span::styled(
            record.title.clone(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(Span::styled(
        format!("{} | {}", record.issuer, record.date),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::default());
    for chunk in utils::wrap_text(&record.description, width) {
        lines.push(Line::from(Span::styled(
            chunk,
            Style::default().fg(Color::Gray),
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Key Highlights",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    for detail in record.details.iter() {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", CHECK_GLYPH), Style::default().fg(Color::Green)),
            Span::styled(detail.clone(), Style::default().fg(Color::Gray)),
        ]));
    }
    f.render_widget(Paragraph::new(lines), body);

    // Status badge on the header row, mirroring the grid tile.
    let badge_row = Rect {
        x: body.x,
        y: body.y,
        width: body.width,
        height: 1,
    };
    f.render_widget(
        Paragraph::new(Line::from(badge_span(record))).alignment(Alignment::Right),
        badge_row,
    );

    // Close control over the top border; the only in-box close region.
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {} ", CLOSE_GLYPH),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        layout.close,
    );

    // Verification link, opened in the host browser.
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", LINK_GLYPH), Style::default().fg(Color::Green)),
            Span::styled(
                "Verify Certification",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ])),
        layout.link,
    );
}
