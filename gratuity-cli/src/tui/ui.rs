//! UI rendering for the TUI.
//!
//! A single calculator screen: two text fields and a toggle on the left,
//! the derived result cards and calculation breakdown on the right.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
};
use tui_input::Input;

use crate::tui::app::{App, Focus, MessageType, Screen};
use crate::tui::components::{InlineStat, StatCard};
use crate::tui::theme::{icons, theme};

/// Main UI rendering function - entry point for all screen rendering.
pub fn ui(frame: &mut Frame, app: &App) {
    let t = theme();

    // Clear the entire frame first to prevent visual artifacts from popups
    frame.render_widget(Clear, frame.area());
    frame.render_widget(Block::default().style(t.bg()), frame.area());

    // Root Layout: Header | Main Content | Status Bar
    let root_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main Content
            Constraint::Length(1), // Status Bar
        ])
        .split(frame.area());

    render_header(frame, root_layout[0], app);
    render_content(frame, root_layout[1], app);
    render_status_bar(frame, root_layout[2], app);

    // Overlays - rendered last so they appear on top
    if app.screen == Screen::Help {
        render_help(frame, frame.area());
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// HEADER
// ═══════════════════════════════════════════════════════════════════════════

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let t = theme();

    let header_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(t.slate_light))
        .style(t.bg());

    let inner = header_block.inner(area);
    frame.render_widget(header_block, area);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(inner);

    // Left: Brand
    let brand = Line::from(vec![
        Span::raw(" "),
        Span::styled(icons::RECEIPT, Style::default().fg(t.amber)),
        Span::raw(" "),
        Span::styled("GRATUITY", t.title()),
        Span::styled(
            "CLI",
            Style::default()
                .fg(t.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(brand).alignment(Alignment::Left), layout[0]);

    // Right: Locale Ticker
    let locale = app.config.locale;
    let locale_line = Line::from(vec![
        Span::styled("Locale: ", Style::default().fg(t.text_muted)),
        Span::styled(locale.as_str(), Style::default().fg(t.text_primary)),
        Span::raw("  "),
        Span::styled(icons::SEPARATOR, Style::default().fg(t.slate_light)),
        Span::raw("  "),
        Span::styled("Currency: ", Style::default().fg(t.text_muted)),
        Span::styled(locale.currency_code(), Style::default().fg(t.amber)),
        Span::raw(" "),
    ]);
    frame.render_widget(
        Paragraph::new(locale_line).alignment(Alignment::Right),
        layout[1],
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// MAIN CONTENT
// ═══════════════════════════════════════════════════════════════════════════

fn render_content(frame: &mut Frame, area: Rect, app: &App) {
    // Layout: Input Form | Result Dashboard
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(36), // Input form width
            Constraint::Min(0),     // Results
        ])
        .split(area);

    render_inputs(frame, chunks[0], app);
    render_results(frame, chunks[1], app);
}

// ═══════════════════════════════════════════════════════════════════════════
// INPUT FORM
// ═══════════════════════════════════════════════════════════════════════════

fn render_inputs(frame: &mut Frame, area: Rect, app: &App) {
    let t = theme();

    let form_block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(t.slate_light))
        .style(t.bg())
        .padding(Padding::new(1, 1, 1, 1));

    let inner = form_block.inner(area);
    frame.render_widget(form_block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Bill field
            Constraint::Length(3), // Percent field
            Constraint::Length(3), // Round-up toggle
            Constraint::Min(0),
        ])
        .split(inner);

    render_text_field(
        frame,
        layout[0],
        "Bill Amount",
        &app.bill_input,
        app.focus == Focus::Bill,
    );
    render_text_field(
        frame,
        layout[1],
        "Tip Percent",
        &app.percent_input,
        app.focus == Focus::Percent,
    );
    render_round_up_toggle(frame, layout[2], app);
}

/// Renders one bordered text field, with the cursor when focused.
fn render_text_field(frame: &mut Frame, area: Rect, label: &str, input: &Input, focused: bool) {
    let t = theme();

    let border_style = if focused {
        t.border_active()
    } else {
        t.border_inactive()
    };

    // Keep the cursor visible when the value outgrows the field
    let width = area.width.saturating_sub(3);
    let scroll = input.visual_scroll(width as usize);

    let field = Paragraph::new(input.value())
        .style(t.text())
        .scroll((0, scroll as u16))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style)
                .title(Span::styled(label, t.subtitle())),
        );
    frame.render_widget(field, area);

    if focused {
        let cursor_x = (input.visual_cursor().max(scroll) - scroll) as u16;
        frame.set_cursor_position((area.x + cursor_x + 1, area.y + 1));
    }
}

fn render_round_up_toggle(frame: &mut Frame, area: Rect, app: &App) {
    let t = theme();
    let focused = app.focus == Focus::RoundUp;

    let border_style = if focused {
        t.border_active()
    } else {
        t.border_inactive()
    };

    let (mark, mark_style) = if app.round_up {
        (icons::TOGGLE_ON, t.success_style())
    } else {
        (icons::TOGGLE_OFF, t.subtitle())
    };

    let toggle = Paragraph::new(Line::from(vec![
        Span::styled(mark, mark_style),
        Span::raw(" "),
        Span::styled("Round up tip", t.text()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Span::styled("Rounding", t.subtitle())),
    );
    frame.render_widget(toggle, area);
}

// ═══════════════════════════════════════════════════════════════════════════
// RESULTS
// ═══════════════════════════════════════════════════════════════════════════

fn render_results(frame: &mut Frame, area: Rect, app: &App) {
    let t = theme();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Stats row
            Constraint::Min(0),    // Breakdown panel
        ])
        .split(area);

    // Stats Cards Layout
    let stats_layout = Layout::default()
        .direction(Direction::Horizontal)
        .horizontal_margin(1)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(layout[0]);

    if let Some(display) = app.display() {
        StatCard::new("Bill", &display.formatted_bill).render(frame, stats_layout[0]);
        StatCard::new("Tip Amount", &display.formatted_tip)
            .value_color(t.teal)
            .subtitle(&display.status)
            .highlighted(true)
            .render(frame, stats_layout[1]);
        StatCard::new("Total", &display.formatted_total)
            .value_color(t.amber)
            .render(frame, stats_layout[2]);
    }

    render_breakdown(frame, layout[1], app);
}

fn render_breakdown(frame: &mut Frame, area: Rect, app: &App) {
    let t = theme();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(t.border_inactive())
        .style(t.bg())
        .title(Span::styled(" Breakdown ", t.subtitle()))
        .padding(Padding::new(1, 1, 0, 0));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(breakdown) = &app.breakdown else {
        return;
    };

    let mut lines: Vec<Line> = Vec::new();
    for step in &breakdown.calculation_trace {
        if step.operation == "info" {
            lines.push(Line::from(Span::styled(
                format!("{} {}", icons::BULLET, step.description),
                t.subtitle(),
            )));
            continue;
        }

        let amount_str = match step.amount {
            Some(amt) if step.operation == "rate" => format!("{:.3}", amt),
            Some(amt) => format!("{:.2}", amt),
            None => String::new(),
        };

        let value_color = match step.operation.as_str() {
            "ceil" => t.warning,
            "result" => t.teal,
            _ => t.text_primary,
        };

        lines.push(
            InlineStat::new(
                format!("{:<16}", step.description),
                format!("{:>12}", amount_str),
            )
            .value_color(value_color)
            .to_line(),
        );
    }

    let paragraph = Paragraph::new(lines).style(t.text());
    frame.render_widget(paragraph, inner);
}

// ═══════════════════════════════════════════════════════════════════════════
// STATUS BAR
// ═══════════════════════════════════════════════════════════════════════════

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let t = theme();

    let content = if let Some((message, kind)) = &app.message {
        let style = match kind {
            MessageType::Info => t.accent_style(),
            MessageType::Error => t.error_style(),
        };
        Line::from(Span::styled(format!(" {}", message), style))
    } else {
        Line::from(vec![
            Span::styled(" Tab", t.warning_style()),
            Span::styled(" Next Field ", t.subtitle()),
            Span::styled(icons::SEPARATOR, Style::default().fg(t.slate_light)),
            Span::styled(" Space", t.warning_style()),
            Span::styled(" Toggle ", t.subtitle()),
            Span::styled(icons::SEPARATOR, Style::default().fg(t.slate_light)),
            Span::styled(" F2", t.warning_style()),
            Span::styled(" Locale ", t.subtitle()),
            Span::styled(icons::SEPARATOR, Style::default().fg(t.slate_light)),
            Span::styled(" F1", t.warning_style()),
            Span::styled(" Help ", t.subtitle()),
            Span::styled(icons::SEPARATOR, Style::default().fg(t.slate_light)),
            Span::styled(" Esc", t.warning_style()),
            Span::styled(" Quit", t.subtitle()),
        ])
    };

    frame.render_widget(Paragraph::new(content).style(t.bg()), area);
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP OVERLAY
// ═══════════════════════════════════════════════════════════════════════════

fn render_help(frame: &mut Frame, area: Rect) {
    let t = theme();
    let popup = centered_rect(50, 60, area);

    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(t.border_active())
        .style(t.bg())
        .title(Span::styled(" Help ", t.title()))
        .padding(Padding::new(2, 2, 1, 1));

    let lines = vec![
        Line::from(Span::styled("Keyboard", t.title())),
        Line::default(),
        help_line("Tab / Down", "next field"),
        help_line("Shift+Tab / Up", "previous field"),
        help_line("Enter", "advance / toggle rounding"),
        help_line("Space", "toggle rounding (on toggle)"),
        help_line("F2", "cycle locale"),
        help_line("F1 or ?", "this help"),
        help_line("Esc / Ctrl+C", "quit"),
        Line::default(),
        Line::from(Span::styled(
            "The tip recomputes on every keystroke.",
            t.subtitle(),
        )),
        Line::from(Span::styled(
            "Non-numeric input counts as zero.",
            t.subtitle(),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn help_line<'a>(key: &'a str, action: &'a str) -> Line<'a> {
    let t = theme();
    Line::from(vec![
        Span::styled(format!("{:<16}", key), t.warning_style()),
        Span::styled(action, t.text()),
    ])
}

/// Returns a centered rect using percentages of the available area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
