use crate::app::{App, RegisterFocus, Screen};
use crate::components::{centered_rect, render_text_field};
use crate::theme::*;
use mojipad_editor::catalog::Category;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Display width of one grid cell: a 2-column glyph plus padding.
const CELL_WIDTH: usize = 4;

pub fn render(app: &mut App, frame: &mut Frame) {
    match app.screen {
        Screen::Splash => render_splash(frame),
        Screen::Login => render_login(app, frame),
        Screen::Register => render_register(app, frame),
        Screen::Compose => render_compose(app, frame),
    }
}

fn render_splash(frame: &mut Frame) {
    let area = centered_rect(60, 40, frame.area());
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("🐼  mojipad  🐼", bold_highlight())).alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled("an emoji pad for your terminal", normal_text()))
            .alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled("press any key", label_text())).alignment(Alignment::Center),
    ];
    let block = Block::default().borders(Borders::ALL).border_style(focused_border());
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_login(app: &App, frame: &mut Frame) {
    let area = centered_rect(50, 40, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title("Sign in")
        .borders(Borders::ALL)
        .border_style(focused_border())
        .style(popup_bg());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    render_text_field(frame, chunks[0], "Nickname", &app.nickname, true);

    let hint = Line::from(vec![
        Span::styled("Enter", highlight_text()),
        Span::styled(" continue  ", label_text()),
        Span::styled("Tab", highlight_text()),
        Span::styled(" register  ", label_text()),
        Span::styled("Esc", highlight_text()),
        Span::styled(" quit", label_text()),
    ]);
    frame.render_widget(Paragraph::new(hint), chunks[1]);

    render_status_line(app, frame);
}

fn render_register(app: &App, frame: &mut Frame) {
    let area = centered_rect(50, 50, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title("Register")
        .borders(Borders::ALL)
        .border_style(focused_border())
        .style(popup_bg());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    render_text_field(
        frame,
        chunks[0],
        "Nickname",
        &app.nickname,
        app.register_focus == RegisterFocus::Nickname,
    );
    render_text_field(
        frame,
        chunks[1],
        "Display name",
        &app.display_name,
        app.register_focus == RegisterFocus::DisplayName,
    );

    let hint = Line::from(vec![
        Span::styled("Tab", highlight_text()),
        Span::styled(" switch field  ", label_text()),
        Span::styled("Enter", highlight_text()),
        Span::styled(" continue  ", label_text()),
        Span::styled("Esc", highlight_text()),
        Span::styled(" back", label_text()),
    ]);
    frame.render_widget(Paragraph::new(hint), chunks[2]);

    render_status_line(app, frame);
}

fn render_compose(app: &mut App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_text_field(
        frame,
        chunks[0],
        &format!("Message ({})", app.nickname.as_str()),
        &app.compose,
        true,
    );

    if app.picker_open {
        render_picker(app, frame, chunks[1]);
    } else {
        let hint = Paragraph::new(Span::styled(
            "picker closed, press 'i' to open it",
            label_text(),
        ))
        .block(Block::default().borders(Borders::ALL).border_style(unfocused_border()));
        frame.render_widget(hint, chunks[1]);
    }

    render_footer(app, frame, chunks[2]);
}

fn render_picker(app: &mut App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title("Emoji")
        .borders(Borders::ALL)
        .border_style(focused_border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    render_tabs(app, frame, chunks[0]);

    if app.picker.is_searching() {
        let query = Line::from(vec![
            Span::styled("Search: ", label_text()),
            Span::styled(app.picker.search_query().to_string(), normal_text()),
            Span::styled("▏", highlight_text()),
        ]);
        frame.render_widget(Paragraph::new(query), chunks[1]);
    } else {
        let name = Line::from(Span::styled(app.picker.category().name(), label_text()));
        frame.render_widget(Paragraph::new(name), chunks[1]);
    }

    render_grid(app, frame, chunks[2]);
}

fn render_tabs(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for (idx, category) in Category::all().iter().enumerate() {
        let style = if idx == app.picker.category_index() && !app.picker.is_searching() {
            active_tab()
        } else {
            label_text()
        };
        spans.push(Span::styled(category.icon().to_string(), style));
        spans.push(Span::raw("  "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_grid(app: &mut App, frame: &mut Frame, area: Rect) {
    // reserve one line for each scroll indicator
    let grid_rows = area.height.saturating_sub(2) as usize;

    let entries = app.picker.entries(&app.recents);
    app.picker.sync_viewport(entries.len(), grid_rows);

    if entries.is_empty() {
        let empty = match app.picker.is_searching() {
            true => "no matches",
            false => "nothing here yet",
        };
        frame.render_widget(
            Paragraph::new(Span::styled(empty, label_text())),
            area,
        );
        return;
    }

    let columns = app.picker.columns();
    let selected = app.picker.selected_cell();
    let viewport = app.picker.viewport();

    let mut lines = Vec::new();

    let above = viewport.rows_above();
    lines.push(if above > 0 {
        Line::from(Span::styled(format!("▲ {} more", above), label_text()))
    } else {
        Line::from("")
    });

    for row in viewport.visible_rows(grid_rows) {
        let mut spans = Vec::new();
        for col in 0..columns {
            let idx = row * columns + col;
            let Some(emoji) = entries.get(idx) else {
                break;
            };
            let pad = CELL_WIDTH.saturating_sub(emoji.glyph.width());
            let cell = format!("{}{}", emoji.glyph, " ".repeat(pad));
            let style = if selected == Some(idx) {
                selected_cell()
            } else {
                normal_text()
            };
            spans.push(Span::styled(cell, style));
        }
        lines.push(Line::from(spans));
    }

    let below = viewport.rows_below(grid_rows);
    if below > 0 {
        lines.push(Line::from(Span::styled(
            format!("▼ {} more", below),
            label_text(),
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let hints = if app.picker_open {
        vec![
            Span::styled("↑↓←→", highlight_text()),
            Span::styled(" navigate  ", label_text()),
            Span::styled("Enter", highlight_text()),
            Span::styled(" insert  ", label_text()),
            Span::styled("Tab", highlight_text()),
            Span::styled(" category  ", label_text()),
            Span::styled("/", highlight_text()),
            Span::styled(" search  ", label_text()),
            Span::styled("Esc", highlight_text()),
            Span::styled(" close", label_text()),
        ]
    } else {
        vec![
            Span::styled("i", highlight_text()),
            Span::styled(" picker  ", label_text()),
            Span::styled("y", highlight_text()),
            Span::styled(" copy  ", label_text()),
            Span::styled("C-u", highlight_text()),
            Span::styled(" clear  ", label_text()),
            Span::styled("q", highlight_text()),
            Span::styled(" quit", label_text()),
        ]
    };

    let mut spans = hints;
    if let Some(status) = &app.status {
        spans.push(Span::styled(format!("   {}", status), status_text()));
    }

    let block = Block::default().borders(Borders::ALL).border_style(unfocused_border());
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_status_line(app: &App, frame: &mut Frame) {
    if let Some(status) = &app.status {
        let area = frame.area();
        if area.height == 0 {
            return;
        }
        let line = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(status.clone(), error_text())),
            line,
        );
    }
}
