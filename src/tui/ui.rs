//! Stateless UI rendering for the game and its move list.
//!
//! Layout is computed by [`screen_layout`] so that mouse clicks can be
//! mapped back onto the same cells and list rows that were drawn.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as ScreenPosition, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_core::{Board, Player, Position, Square, rules::winning_line};

use super::app::{App, Focus};
use crate::Settings;
use crate::view::{cell_symbol, move_entries, status_line};

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Screen regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Board panel, including its border.
    pub board: Rect,
    /// One rectangle per cell, in board order.
    pub cells: [Rect; 9],
    /// Move list panel, including its border.
    pub moves: Rect,
    /// Status line.
    pub status: Rect,
    /// Key help.
    pub help: Rect,
}

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// A board cell.
    Cell(Position),
    /// A move list entry.
    Move(usize),
}

/// Splits the terminal area into the screen regions.
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Min(12),    // Board + moves
            Constraint::Length(3),  // Status
            Constraint::Length(1),  // Help
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(GRID_WIDTH + 2), Constraint::Length(24)])
        .split(chunks[1]);

    let board_inner = Block::default().borders(Borders::ALL).inner(body[0]);
    let grid = center_rect(board_inner, GRID_WIDTH, GRID_HEIGHT);
    let cells = Position::ALL.map(|pos| {
        let col = pos.col() as u16;
        let row = pos.row() as u16;
        Rect::new(
            grid.x + col * (CELL_WIDTH + 1),
            grid.y + row * (CELL_HEIGHT + 1),
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(grid)
    });

    ScreenLayout {
        title: chunks[0],
        board: body[0],
        cells,
        moves: body[1],
        status: chunks[2],
        help: chunks[3],
    }
}

/// Maps a click at (`column`, `row`) to a cell or move list entry, as the
/// screen for `app` was last drawn into `area`.
pub fn hit_test(area: Rect, column: u16, row: u16, app: &App) -> Option<ClickTarget> {
    let layout = screen_layout(area);
    let point = ScreenPosition::new(column, row);

    if let Some(pos) = Position::ALL
        .into_iter()
        .find(|pos| layout.cells[pos.to_index()].contains(point))
    {
        return Some(ClickTarget::Cell(pos));
    }

    let list = Block::default().borders(Borders::ALL).inner(layout.moves);
    if list.contains(point) {
        let index = move_list_offset(app, list.height) + usize::from(row - list.y);
        return (index < app.history().len()).then_some(ClickTarget::Move(index));
    }

    None
}

/// Index of the first move list entry shown in a list `rows` tall.
///
/// The selection, when the list has focus, is kept on the last visible row
/// once it no longer fits.
fn move_list_offset(app: &App, rows: u16) -> usize {
    if *app.focus() != Focus::Moves {
        return 0;
    }
    (app.selected_move() + 1).saturating_sub(usize::from(rows).max(1))
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App, settings: &Settings) {
    let layout = screen_layout(frame.area());

    let title = Paragraph::new(settings.title().as_str())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    draw_board(frame, &layout, app, *settings.show_cell_numbers());
    draw_moves(frame, layout.moves, app);

    let status = Paragraph::new(status_line(app.history()))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    let help = Paragraph::new(
        "Click/1-9: place | Tab: moves | Enter: select | [ ]: step | r: restart | q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);
}

fn draw_board(frame: &mut Frame, layout: &ScreenLayout, app: &App, show_numbers: bool) {
    let focused = *app.focus() == Focus::Board;
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Board")
        .border_style(focus_style(focused));
    frame.render_widget(block, layout.board);

    let board = app.history().current_board();
    let highlight = winning_line(board);
    let cursor = focused.then_some(*app.cursor());

    for pos in Position::ALL {
        let area = layout.cells[pos.to_index()];
        let winning = highlight.is_some_and(|line| line.contains(&pos));
        draw_cell(frame, area, board, pos, cursor == Some(pos), winning, show_numbers);

        if pos.col() < 2 {
            let sep = Rect::new(area.right(), area.y, 1, area.height);
            draw_separator_vertical(frame, sep.intersection(layout.board));
        }
        if pos.row() < 2 {
            let width = if pos.col() < 2 { area.width + 1 } else { area.width };
            let sep = Rect::new(area.x, area.bottom(), width, 1);
            draw_separator(frame, sep.intersection(layout.board));
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    pos: Position,
    is_cursor: bool,
    winning: bool,
    show_numbers: bool,
) {
    let square = board.get(pos);
    let symbol = format!(" {} ", cell_symbol(square, pos, show_numbers));

    let mut style = match square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Square::Occupied(Player::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };
    if winning {
        style = style.bg(Color::Green);
    }
    if is_cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Middle line of the three-line cell.
    let text = vec![Line::from(""), Line::from(Span::styled(symbol, style))];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App) {
    let focused = *app.focus() == Focus::Moves;
    let items: Vec<ListItem> = move_entries(app.history())
        .into_iter()
        .map(|entry| {
            let style = if entry.is_current {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(entry.label, style)))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Moves")
        .border_style(focus_style(focused));
    let rows = block.inner(area).height;

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    // Scroll is fixed here so hit_test sees the same rows.
    let mut state = ListState::default()
        .with_offset(move_list_offset(app, rows))
        .with_selected(focused.then_some(*app.selected_move()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
