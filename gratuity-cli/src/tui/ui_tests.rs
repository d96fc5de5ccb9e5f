use ratatui::{Terminal, backend::TestBackend};
use tui_input::Input;

use crate::tui::app::{App, Screen};
use crate::tui::ui::ui;
use gratuity::prelude::*;

fn buffer_contains(buffer: &ratatui::buffer::Buffer, needle: &str) -> bool {
    let area = buffer.area;
    for y in 0..area.height {
        let mut row = String::new();
        for x in 0..area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                row.push_str(cell.symbol());
            }
        }
        if row.contains(needle) {
            return true;
        }
    }
    false
}

#[test]
fn test_ui_render_header() {
    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    let app = App::new(TipConfig::default());

    terminal
        .draw(|f| {
            ui(f, &app);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    assert!(
        buffer_contains(buffer, "GRATUITY"),
        "Header should contain the brand"
    );
    assert!(buffer_contains(buffer, "USD"), "Header should show currency");
}

#[test]
fn test_ui_render_result_cards() {
    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut app = App::new(TipConfig::default());
    app.bill_input = Input::default().with_value("50.00".to_string());
    app.percent_input = Input::default().with_value("15".to_string());
    app.recompute();

    terminal
        .draw(|f| {
            ui(f, &app);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    assert!(buffer_contains(buffer, "$7.50"), "Tip card should show the tip");
    assert!(
        buffer_contains(buffer, "$57.50"),
        "Total card should show bill plus tip"
    );
}

#[test]
fn test_ui_render_round_up_result() {
    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut app = App::new(TipConfig::default());
    app.bill_input = Input::default().with_value("50.00".to_string());
    app.percent_input = Input::default().with_value("15".to_string());
    app.round_up = true;
    app.recompute();

    terminal
        .draw(|f| {
            ui(f, &app);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    assert!(buffer_contains(buffer, "$8.00"));
    assert!(buffer_contains(buffer, "ROUNDED UP"));
}

#[test]
fn test_ui_render_empty_inputs() {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    let app = App::new(TipConfig::default());

    terminal
        .draw(|f| {
            ui(f, &app);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    assert!(buffer_contains(buffer, "$0.00"), "Empty inputs render a zero tip");
}

#[test]
fn test_ui_render_help() {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut app = App::new(TipConfig::default());
    app.screen = Screen::Help;

    terminal
        .draw(|f| {
            ui(f, &app);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    assert!(buffer_contains(buffer, "Help"));
}
