use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use crate::catalog::{BadgeStyle, CertificationRecord};
use crate::utils;

pub(crate) fn badge_color(badge: BadgeStyle) -> Color {
    match badge {
        BadgeStyle::Green => Color::Green,
        BadgeStyle::Yellow => Color::Yellow,
        BadgeStyle::Blue => Color::Blue,
    }
}

pub(crate) fn badge_span(record: &CertificationRecord) -> Span<'static> {
    Span::styled(
        format!(" {} ", record.status),
        Style::default()
            .fg(Color::Black)
            .bg(badge_color(record.badge))
            .add_modifier(Modifier::BOLD),
    )
}

pub fn render_header(f: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "Professional Certifications",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Showcasing Expertise in Cybersecurity and Ethical Hacking",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// One card: icon, title, issuer, a description clamped to three lines,
/// and the status badge bottom-right. The selected card gets a doubled
/// green ring; the keyboard cursor a yellow one.
pub fn render_tile(
    f: &mut Frame,
    area: Rect,
    record: &CertificationRecord,
    selected: bool,
    focused: bool,
    progress: f32,
) {
    if area.width < 4 || area.height < 3 || progress <= 0.0 {
        return;
    }

    let (border_style, border_type) = if selected {
        (
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            BorderType::Double,
        )
    } else if focused {
        (Style::default().fg(Color::Yellow), BorderType::Rounded)
    } else {
        (Style::default().fg(Color::DarkGray), BorderType::Rounded)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let base = if progress < 1.0 {
        Style::default().add_modifier(Modifier::DIM)
    } else {
        Style::default()
    };

    let width = usize::from(inner.width);
    let mut lines: Vec<Line> = Vec::new();
    let title = utils::clamp_text(&record.title, width.saturating_sub(2), 1);
    lines.push(Line::from(vec![
        Span::styled(
            format!("{} ", record.icon.symbol()),
            Style::default().fg(Color::Green),
        ),
        Span::styled(
            title.into_iter().next().unwrap_or_default(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(Span::styled(
        record.issuer.clone(),
        Style::default().fg(Color::DarkGray),
    )));
    for chunk in utils::clamp_text(&record.description, width, 3) {
        lines.push(Line::from(Span::styled(
            chunk,
            Style::default().fg(Color::Gray),
        )));
    }
    f.render_widget(Paragraph::new(lines).style(base), inner);

    let badge_row = Rect {
        x: inner.x,
        y: inner.y + inner.height - 1,
        width: inner.width,
        height: 1,
    };
    f.render_widget(
        Paragraph::new(Line::from(badge_span(record)))
            .style(base)
            .alignment(Alignment::Right),
        badge_row,
    );
}

pub fn render_footer(f: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let hints = Line::from(Span::styled(
        "q quit \u{00b7} arrows move \u{00b7} enter open \u{00b7} esc close \u{00b7} v verify",
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(Paragraph::new(hints).alignment(Alignment::Center), area);
}
