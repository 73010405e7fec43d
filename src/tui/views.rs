//! Rendering for the TUI
//!
//! Draws the entry form, the status bar, and the overlay dialogs
//! (aggregate summaries, clear confirmation) plus notification toasts.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::display::{format_amount, format_summary};

use super::app::{App, Field, Mode, SummaryView};
use super::layout::{centered_rect_fixed, AppLayout};

/// Render the whole frame
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, app, layout.header);
    render_form(frame, app, layout.form);
    render_status_bar(frame, layout.status_bar);

    match app.mode {
        Mode::Form => {}
        Mode::Summary(view) => render_summary(frame, app, view),
        Mode::ConfirmClear => render_confirm_clear(frame),
    }

    if let Some(notification) = &app.notification {
        frame.render_widget(notification, frame.area());
    }
}

/// Title line and record count
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let count = app.tracker.records().len();
    let header = Line::from(vec![
        Span::styled(
            "spendlog",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  —  "),
        Span::styled(
            match count {
                0 => "no expenses recorded".to_string(),
                1 => "1 expense recorded".to_string(),
                n => format!("{} expenses recorded", n),
            },
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// The three-field entry form with category suggestions
fn render_form(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" New Expense ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 5 {
        return;
    }

    app.amount.focused = app.focus == Field::Amount;
    app.category.focused = app.focus == Field::Category;
    app.date.focused = app.focus == Field::Date;

    let row = |offset: u16| Rect::new(inner.x + 1, inner.y + offset, inner.width.saturating_sub(2), 1);

    frame.render_widget(&app.amount, row(0));
    frame.render_widget(&app.category, row(1));
    frame.render_widget(&app.date, row(2));

    // Category suggestions, in presentation order (original combobox values)
    let suggestions = app
        .tracker
        .categories()
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Known: ", Style::default().fg(Color::DarkGray)),
            Span::styled(suggestions, Style::default().fg(Color::Yellow)),
        ]))
        .wrap(Wrap { trim: true }),
        Rect::new(
            inner.x + 1,
            inner.y + 4,
            inner.width.saturating_sub(2),
            inner.height.saturating_sub(4),
        ),
    );
}

/// Key hints at the bottom
fn render_status_bar(frame: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(" add  "),
        Span::styled("^T", Style::default().fg(Color::Cyan)),
        Span::raw(" total  "),
        Span::styled("^B", Style::default().fg(Color::Cyan)),
        Span::raw(" by category  "),
        Span::styled("^X", Style::default().fg(Color::Cyan)),
        Span::raw(" clear all  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(" save & exit"),
    ]);
    frame.render_widget(Paragraph::new(hints), area);
}

/// Aggregate overlay: total spend or the per-category breakdown
fn render_summary(frame: &mut Frame, app: &App, view: SummaryView) {
    let (title, lines) = match view {
        SummaryView::Total => (
            " Total Expenses ",
            vec![format!("Total: {}", format_amount(app.tracker.total_spend()))],
        ),
        SummaryView::ByCategory => (
            " Category-wise Summary ",
            format_summary(&app.tracker.spend_by_category())
                .unwrap_or_else(|| vec!["No expenses yet.".to_string()]),
        ),
    };

    let width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(title.len()) as u16
        + 6;
    let height = lines.len() as u16 + 4;
    let area = centered_rect_fixed(width, height, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut text: Vec<Line> = vec![Line::from("")];
    text.extend(lines.iter().map(|l| Line::from(l.as_str())));
    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        "press any key to close",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(text).block(block), area);
}

/// Yes/no confirmation before wiping all data
fn render_confirm_clear(frame: &mut Frame) {
    let area = centered_rect_fixed(52, 7, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Are you sure you want to clear all expenses?",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Green)),
            Span::raw(" Yes  "),
            Span::styled("[N]", Style::default().fg(Color::Red)),
            Span::raw(" No  "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Cancel"),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
