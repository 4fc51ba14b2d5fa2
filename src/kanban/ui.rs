// src/kanban/ui.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState};
use ratatui::Frame;

use super::board::{Board, Kanban};
use super::client::RemoteTasks;
use super::item::TaskItem;
use super::theme::Theme;

/// Render both columns side by side, the active one with a highlighted
/// border and a visible selection cursor.
pub fn draw<R: RemoteTasks>(frame: &mut Frame, kanban: &Kanban<R>, theme: &Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(frame.area());

    for (i, board) in kanban.boards().iter().enumerate() {
        draw_board(frame, columns[i], board, i == kanban.active(), theme);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, is_active: bool, theme: &Theme) {
    let border_style = if is_active {
        Style::default().fg(theme.active_border)
    } else {
        Style::default().fg(theme.inactive_border)
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", board.title()),
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    let items: Vec<ListItem> = board
        .tasks()
        .iter()
        .map(|task| {
            let item = TaskItem::new(task);
            ListItem::new(vec![
                Line::from(item.title().to_string()),
                Line::from(Span::styled(
                    item.subtitle().to_string(),
                    Style::default().fg(theme.subtitle),
                )),
            ])
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .fg(theme.selected_fg)
            .bg(theme.selected_bg)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = ListState::default();
    if is_active && !board.tasks().is_empty() {
        state.select(Some(board.selected()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}
