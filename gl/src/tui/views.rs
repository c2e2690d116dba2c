//! TUI views and rendering
//!
//! All rendering logic is contained here. Views draw the screen from
//! ScreenState and never touch the goal store or the draft; the only thing
//! written back is the hit map used to route mouse clicks.

use goalstore::GoalId;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Row, Table, Wrap};
use tracing::trace;

use super::state::{ActionStyle, Dialog, Focus, HitMap, InteractionMode, ScreenState};

mod colors {
    use ratatui::style::Color;

    pub const ACCENT: Color = Color::Rgb(94, 10, 204); // Purple
    pub const HEADER: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const KEYBIND: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const SELECTED_BG: Color = Color::Rgb(40, 40, 40);
    pub const PRESSED_FG: Color = Color::Rgb(160, 160, 160);
    pub const DESTRUCTIVE: Color = Color::Rgb(220, 20, 60); // Crimson
    pub const DIM: Color = Color::DarkGray;
}

/// Removal affordance drawn at the end of each row
const DELETE_ICON: &str = "✕";

/// One projected list row, keyed by goal id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalRow<'a> {
    pub key: &'a GoalId,
    pub text: &'a str,
    pub selected: bool,
    pub pressed: bool,
}

/// Project the goal store into rows, in store order
pub fn goal_rows(state: &ScreenState) -> Vec<GoalRow<'_>> {
    state
        .goals
        .iter()
        .map(|goal| GoalRow {
            key: &goal.id,
            text: &goal.text,
            selected: state.selected.as_ref() == Some(&goal.id),
            pressed: state.is_pressed(&goal.id),
        })
        .collect()
}

/// Main render function
pub fn render(state: &mut ScreenState, frame: &mut Frame) {
    trace!(?state.mode, "render: called");
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Input row
            Constraint::Min(0),    // Goal list
            Constraint::Length(3), // Footer
        ])
        .split(area);

    let mut hit_map = HitMap::default();

    render_header(state, frame, chunks[0]);
    render_input_row(state, frame, chunks[1], &mut hit_map);
    render_goal_list(state, frame, chunks[2], &mut hit_map);
    render_footer(state, frame, chunks[3]);

    match &state.mode {
        InteractionMode::ConfirmingDeletion(dialog) | InteractionMode::Alert(dialog) => {
            hit_map.dialog_buttons = render_dialog(dialog, frame, area);
        }
        InteractionMode::Help => render_help_overlay(frame, area),
        InteractionMode::Idle => {}
    }

    state.hit_map = hit_map;
}

fn render_header(state: &ScreenState, frame: &mut Frame, area: Rect) {
    trace!("render_header: called");
    let header = Paragraph::new(Line::from(Span::styled(
        state.title.as_str(),
        Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(header, area);
}

fn render_input_row(state: &ScreenState, frame: &mut Frame, area: Rect, hit_map: &mut HitMap) {
    trace!("render_input_row: called");
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(9)])
        .split(area);

    let focused = state.focus == Focus::Input && state.mode == InteractionMode::Idle;
    let border_style = if focused {
        Style::default().fg(colors::ACCENT)
    } else {
        Style::default().fg(colors::DIM)
    };

    let content = if state.input.is_empty() {
        Line::from(Span::styled(state.placeholder.as_str(), Style::default().fg(colors::DIM)))
    } else {
        Line::from(state.input.text())
    };

    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    let inner = block.inner(chunks[0]);

    // Keep the cursor in view for long drafts; columns are display cells
    let column = u16::try_from(state.input.cursor_column()).unwrap_or(u16::MAX);
    let scroll = column.saturating_sub(inner.width.saturating_sub(1));
    let input = Paragraph::new(content).block(block).scroll((0, scroll));
    frame.render_widget(input, chunks[0]);

    if focused {
        frame.set_cursor_position((inner.x + (column - scroll), inner.y));
    }

    let button = Paragraph::new(Line::from(Span::styled(
        "ADD",
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::ACCENT))
            .style(Style::default().bg(colors::ACCENT)),
    );
    frame.render_widget(button, chunks[1]);

    hit_map.input = chunks[0];
    hit_map.add_button = chunks[1];
}

/// First visible row so that `selected` stays on screen
fn list_offset(previous: usize, selected: Option<usize>, len: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    let mut offset = previous;
    if let Some(sel) = selected {
        if sel < offset {
            offset = sel;
        } else if sel >= offset + height {
            offset = sel + 1 - height;
        }
    }
    offset.min(len.saturating_sub(height))
}

fn render_goal_list(state: &ScreenState, frame: &mut Frame, area: Rect, hit_map: &mut HitMap) {
    trace!("render_goal_list: called");
    let rows = goal_rows(state);
    let list_focused = state.focus == Focus::List;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Goals ({}) ", rows.len()))
        .border_style(Style::default().fg(if list_focused { colors::ACCENT } else { colors::HEADER }));
    let body = block.inner(area);

    let offset = list_offset(
        state.hit_map.list_offset,
        state.selected_index(),
        rows.len(),
        body.height as usize,
    );

    let table_rows: Vec<Row> = rows
        .iter()
        .skip(offset)
        .take(body.height as usize)
        .map(|row| {
            let mut style = Style::default();
            if row.selected {
                style = style.bg(colors::SELECTED_BG).add_modifier(Modifier::BOLD);
            }
            if row.pressed {
                style = style.fg(colors::PRESSED_FG).add_modifier(Modifier::DIM);
            }
            Row::new(vec![
                Span::raw(format!(" {}", row.text)),
                Span::styled(DELETE_ICON, Style::default().fg(colors::DESTRUCTIVE)),
            ])
            .style(style)
        })
        .collect();

    let widths = [Constraint::Min(0), Constraint::Length(2)];
    let table = Table::new(table_rows, widths).block(block);
    frame.render_widget(table, area);

    if rows.is_empty() {
        render_empty_message(frame, area, "No goals yet. Type one above and press Enter.");
    }

    hit_map.list_body = body;
    hit_map.list_offset = offset;
}

fn render_footer(state: &ScreenState, frame: &mut Frame, area: Rect) {
    trace!(?state.mode, "render_footer: called");
    let content = if let Some(ref msg) = state.status_message {
        Line::from(Span::styled(format!(" {}", msg), Style::default().fg(colors::DIM)))
    } else {
        let keybinds: Vec<(&str, &str)> = match (&state.mode, state.focus) {
            (InteractionMode::ConfirmingDeletion(_), _) => {
                vec![("[←→]", "Choose"), ("[Enter]", "Confirm"), ("[Esc]", "Cancel")]
            }
            (InteractionMode::Alert(_), _) => vec![("[Enter]", "OK")],
            (InteractionMode::Help, _) => vec![("[Esc]", "Close")],
            (InteractionMode::Idle, Focus::Input) => vec![
                ("[Enter]", "Add"),
                ("[Tab]", "List"),
                ("[F1]", "Help"),
                ("[^C]", "Quit"),
            ],
            (InteractionMode::Idle, Focus::List) => vec![
                ("[j/k]", "Move"),
                ("[d]", "Delete"),
                ("[Tab]", "Input"),
                ("[F1]", "Help"),
                ("[^C]", "Quit"),
            ],
        };

        let mut spans = vec![Span::raw(" ")];
        for (key, action) in keybinds {
            spans.push(Span::styled(
                key,
                Style::default().fg(colors::KEYBIND).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(format!(" {} ", action)));
        }
        Line::from(spans)
    };

    let footer = Paragraph::new(content).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

/// Render a modal dialog, returning the rect of each action button
fn render_dialog(dialog: &Dialog, frame: &mut Frame, area: Rect) -> Vec<Rect> {
    trace!(title = %dialog.title, "render_dialog: called");
    let popup_area = centered_box(50, 9, area);
    frame.render_widget(Clear, popup_area);

    let title_style = if dialog.pending_removal().is_some() {
        Style::default().fg(colors::DESTRUCTIVE).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(format!(" {} ", dialog.title), title_style))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Min(1),    // Message
            Constraint::Length(1), // Buttons
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hint
        ])
        .split(inner);

    let message = Paragraph::new(dialog.message.as_str())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(message, chunks[1]);

    let buttons = button_rects(dialog, chunks[2]);
    for (i, (action, rect)) in dialog.actions.iter().zip(&buttons).enumerate() {
        let color = match action.style {
            ActionStyle::Destructive => colors::DESTRUCTIVE,
            ActionStyle::Cancel => Color::Gray,
            ActionStyle::Default => colors::KEYBIND,
        };
        let style = if i == dialog.selected {
            Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        };
        frame.render_widget(Paragraph::new(Span::styled(format!(" {} ", action.label), style)), *rect);
    }

    let hint = if dialog.actions.len() > 1 {
        "Tab/←→: switch  Enter: choose  Esc: cancel"
    } else {
        "Enter: dismiss"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(colors::DIM))).alignment(Alignment::Center),
        chunks[4],
    );

    buttons
}

/// Lay dialog buttons out centered on one line, four columns apart
fn button_rects(dialog: &Dialog, line: Rect) -> Vec<Rect> {
    const GAP: u16 = 4;
    let widths: Vec<u16> = dialog
        .actions
        .iter()
        .map(|a| a.label.chars().count() as u16 + 2)
        .collect();
    let total = widths.iter().sum::<u16>() + GAP * widths.len().saturating_sub(1) as u16;

    let mut x = line.x + line.width.saturating_sub(total) / 2;
    let right = line.x + line.width;
    widths
        .into_iter()
        .map(|w| {
            let rect = Rect::new(x.min(right), line.y, w.min(right.saturating_sub(x)), line.height.min(1));
            x = x.saturating_add(w + GAP);
            rect
        })
        .collect()
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    trace!("render_help_overlay: called");
    let popup_area = centered_box(56, 20, area);
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                .fg(colors::HEADER),
        )),
        Line::from(""),
        Line::from(Span::styled("Input", Style::default().add_modifier(Modifier::BOLD))),
        key_line("Enter", "Add the typed goal"),
        key_line("Tab", "Switch between input and list"),
        key_line("↑/↓", "Move selection"),
        Line::from(""),
        Line::from(Span::styled("List", Style::default().add_modifier(Modifier::BOLD))),
        key_line("j/k", "Move selection"),
        key_line("g/G", "First / last goal"),
        key_line("d/x/Del", "Delete selected goal"),
        key_line("Esc/i", "Back to input"),
        Line::from(""),
        Line::from(Span::styled("Mouse", Style::default().add_modifier(Modifier::BOLD))),
        key_line("click row", "Delete goal"),
        key_line("click ADD", "Add the typed goal"),
        Line::from(""),
        key_line("Ctrl+C", "Quit"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help (F1 to close) ")
                .style(Style::default().bg(Color::Black)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(help, popup_area);
}

fn key_line<'a>(key: &'a str, desc: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{:<12}", key), Style::default().fg(colors::KEYBIND)),
        Span::raw(desc),
    ])
}

fn render_empty_message(frame: &mut Frame, area: Rect, message: &str) {
    trace!(%message, "render_empty_message: called");
    let inner = area.inner(Margin {
        horizontal: 2,
        vertical: 2,
    });

    let empty = Paragraph::new(message)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(empty, inner);
}

/// Centered rect of at most `width` x `height`, clipped to `area`
fn centered_box(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
