//! Frame rendering.
//!
//! # Responsibility
//! - Draw the whole page from `App` state every frame; no widget keeps
//!   state of its own beyond the list scroll offset.
//!
//! # Invariants
//! - The page is exactly one of `loading`, `error(message)` or the loaded
//!   browser; the confirmation prompt only ever overlays the browser.

use crate::app::{App, EditField, Focus};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;
use starbook_core::{Celebrity, LoadPhase, PanelPhase};

const TITLE: &str = "Celebrity Management System";
const SEARCH_PLACEHOLDER: &str = "Search user";
const CONFIRM_TEXT: &str = "Are you sure you want to delete?";

pub fn draw(frame: &mut Frame, app: &App) {
    match app.store.phase() {
        LoadPhase::Loading => draw_notice(frame, "Loading...", Style::default().fg(Color::Yellow)),
        LoadPhase::Failed(message) => draw_notice(
            frame,
            &format!("Error: {message}"),
            Style::default().fg(Color::Red),
        ),
        LoadPhase::Ready => draw_browser(frame, app),
    }
}

fn draw_notice(frame: &mut Frame, text: &str, style: Style) {
    let area = centered_rect(60, 3, frame.size());
    let notice = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(notice, area);
}

fn draw_browser(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.size());

    draw_title(frame, chunks[0]);
    draw_search(frame, app, chunks[1]);
    draw_panels(frame, app, chunks[2]);
    draw_hints(frame, app, chunks[3]);

    if app.coordinator.pending_delete().is_some() {
        draw_confirm_prompt(frame);
    }
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(TITLE)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn draw_search(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Search;
    let content = if app.search.is_empty() && !focused {
        Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(app.search.clone())
    };
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let search = Paragraph::new(Line::from(content)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Search"),
    );
    frame.render_widget(search, area);
}

fn draw_panels(frame: &mut Frame, app: &App, area: Rect) {
    let visible = app.visible();
    let items: Vec<ListItem> = visible
        .iter()
        .map(|record| panel_item(app, record))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if !visible.is_empty() {
        state.select(Some(app.cursor.min(visible.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn panel_item(app: &App, record: &Celebrity) -> ListItem<'static> {
    let phase = app.coordinator.panel_phase(record.id);
    let marker = if phase == PanelPhase::Collapsed {
        '+'
    } else {
        '-'
    };
    let mut lines = vec![Line::from(Span::styled(
        format!("{marker} {}", record.full_name()),
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    match phase {
        PanelPhase::Collapsed => {}
        PanelPhase::View => view_lines(app, record, &mut lines),
        PanelPhase::Edit => edit_lines(app, record, &mut lines),
    }

    ListItem::new(lines)
}

fn view_lines(app: &App, record: &Celebrity, lines: &mut Vec<Line<'static>>) {
    lines.push(detail_line("Age", format!("{} Years", record.age)));
    lines.push(detail_line("Gender", record.gender.label().to_string()));
    lines.push(detail_line("Country", record.country.clone()));
    lines.push(Line::from("    Description"));
    for text in record.description.split('\n') {
        lines.push(Line::from(format!("      {text}")));
    }

    let mut actions = vec![Span::raw("    ")];
    if app.coordinator.can_edit(record) {
        actions.push(Span::raw("[e] Edit"));
    } else {
        actions.push(Span::styled(
            "[e] Edit (Cannot edit minors)",
            Style::default().fg(Color::DarkGray),
        ));
    }
    actions.push(Span::raw("   "));
    actions.push(Span::styled("[d] Delete", Style::default().fg(Color::Red)));
    lines.push(Line::from(actions));
}

fn edit_lines(app: &App, record: &Celebrity, lines: &mut Vec<Line<'static>>) {
    let Some(draft) = app.coordinator.draft() else {
        return;
    };

    lines.push(detail_line("Age", format!("{} Years", record.age)));
    lines.push(field_line(
        app.edit_field == EditField::Gender,
        "Gender",
        format!("< {} >", draft.gender.label()),
    ));
    lines.push(field_line(
        app.edit_field == EditField::Country,
        "Country",
        draft.country.clone(),
    ));
    lines.push(field_line(
        app.edit_field == EditField::Description,
        "Description",
        String::new(),
    ));
    for text in draft.description.split('\n') {
        lines.push(Line::from(format!("      {text}")));
    }

    let save_style = if app.coordinator.save_allowed(&app.store) {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    lines.push(Line::from(vec![
        Span::raw("    "),
        Span::styled("[Ctrl-S] Save", save_style),
        Span::raw("   [Esc] Cancel"),
    ]));
}

fn detail_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("    {label:<12}"),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(value),
    ])
}

fn field_line(focused: bool, label: &str, value: String) -> Line<'static> {
    let marker = if focused { ">" } else { " " };
    let label_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(vec![
        Span::raw(format!("  {marker} ")),
        Span::styled(format!("{label:<12}"), label_style),
        Span::raw(value),
    ])
}

fn draw_hints(frame: &mut Frame, app: &App, area: Rect) {
    let hints = if app.coordinator.pending_delete().is_some() {
        "[Enter] Delete   [Esc] Cancel"
    } else if app.coordinator.is_editing() {
        "[Tab] Next field   [Ctrl-S] Save   [Esc] Cancel"
    } else if app.focus == Focus::Search {
        "[Enter] Done   [Esc] Back to list"
    } else {
        "[Up/Down] Move   [Enter] Open/Close   [e] Edit   [d] Delete   [/] Search   [q] Quit"
    };
    let bar = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(bar, area);
}

fn draw_confirm_prompt(frame: &mut Frame) {
    let area = centered_rect(50, 5, frame.size());
    frame.render_widget(Clear, area);
    let prompt = Paragraph::new(vec![
        Line::from(CONFIRM_TEXT),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Delete   [Esc] Cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Delete"));
    frame.render_widget(prompt, area);
}

// Centered overlay rectangle: `percent_x` of the width, fixed height.
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
