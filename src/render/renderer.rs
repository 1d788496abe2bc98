use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::orientation::{Corner, Sprite, body_sprites};
use crate::game::{Direction, GameState, Grid, LifecycleState, Position};
use crate::metrics::GameMetrics;

const COLOR_BG: Color = Color::Rgb(175, 215, 70);
const COLOR_GRASS: Color = Color::Rgb(167, 209, 61);
const COLOR_SCORE_TEXT: Color = Color::Rgb(56, 74, 12);
const COLOR_SNAKE: Color = Color::Rgb(70, 116, 233);
const COLOR_FRUIT: Color = Color::Rgb(200, 40, 40);
const COLOR_GAME_OVER: Color = Color::Rgb(255, 100, 100);
const COLOR_BEST: Color = Color::Rgb(255, 220, 80);
const COLOR_START_HINT: Color = Color::Rgb(200, 230, 150);
const COLOR_RESTART_HINT: Color = Color::Rgb(180, 220, 180);

pub const TITLE: &str = "Nokia Snake";

/// Q and Esc quit instead of starting or restarting
const QUIT_HINT: &str = "(Q or Esc quits)";

/// Where the board sits on screen
#[derive(Debug, Clone, Copy)]
pub struct BoardView {
    /// Inside of the board's border
    pub inner: Rect,
    pub grid: Grid,
    /// Terminal columns per cell; every cell is one row tall
    pub cell_size: u16,
}

impl BoardView {
    /// Screen coordinate of a cell; `None` when it is off the board or clipped
    pub fn cell_at(&self, pos: Position) -> Option<(u16, u16)> {
        // A crashed head may sit just outside the board
        if !self.grid.contains(pos) {
            return None;
        }
        let (dx, dy) = Grid::cell_origin(pos, self.cell_size, 1);
        let x = self.inner.x.saturating_add(dx);
        let y = self.inner.y.saturating_add(dy);
        (x.saturating_add(self.cell_size) <= self.inner.right() && y < self.inner.bottom())
            .then_some((x, y))
    }

    /// Background color of the cell at `pos`
    fn shade(pos: Position) -> Color {
        if (pos.x + pos.y) % 2 == 0 {
            COLOR_GRASS
        } else {
            COLOR_BG
        }
    }

    fn paint(&self, buf: &mut Buffer, pos: Position, lead: char, fill: char, style: Style) {
        if let Some((x, y)) = self.cell_at(pos) {
            let text: String = std::iter::once(lead)
                .chain(std::iter::repeat_n(fill, self.cell_size as usize - 1))
                .collect();
            buf.set_string(x, y, text, style.bg(Self::shade(pos)));
        }
    }
}

pub struct Renderer {
    cell_size: u16,
}

impl Renderer {
    pub fn new(cell_size: u16) -> Self {
        Self {
            cell_size: cell_size.max(1),
        }
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.draw_score(state.score(), state.high_score, metrics);
        frame.render_widget(stats, chunks[0]);

        let cells = u16::try_from(state.grid.cell_number()).unwrap_or(u16::MAX);
        let board_area = centered(
            chunks[1],
            cells.saturating_mul(self.cell_size).saturating_add(2),
            cells.saturating_add(2),
        );
        let board = self.board_block();
        let view = BoardView {
            inner: board.inner(board_area),
            grid: state.grid,
            cell_size: self.cell_size,
        };
        frame.render_widget(board, board_area);

        let buf = frame.buffer_mut();
        self.draw_grid(buf, &view);
        self.draw_fruit(buf, &view, state.fruit.position);
        self.draw_snake(buf, &view, &state.snake.body);

        if state.lifecycle != LifecycleState::Playing {
            self.draw_overlay(frame, board_area, state.lifecycle, state.score(), state.high_score);
        }

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    /// Checkerboard grass
    pub fn draw_grid(&self, buf: &mut Buffer, view: &BoardView) {
        for pos in view.grid.cells() {
            view.paint(buf, pos, ' ', ' ', Style::default());
        }
    }

    pub fn draw_fruit(&self, buf: &mut Buffer, view: &BoardView, position: Position) {
        let style = Style::default().fg(COLOR_FRUIT).add_modifier(Modifier::BOLD);
        view.paint(buf, position, '●', ' ', style);
    }

    pub fn draw_snake(&self, buf: &mut Buffer, view: &BoardView, body: &[Position]) {
        for (pos, sprite) in body.iter().zip(body_sprites(body)) {
            let (lead, fill) = glyph(sprite);
            let mut style = Style::default().fg(COLOR_SNAKE);
            if matches!(sprite, Sprite::Head(_)) {
                style = style.add_modifier(Modifier::BOLD);
            }
            view.paint(buf, *pos, lead, fill, style);
        }
    }

    pub fn draw_score(&self, score: u32, high_score: u32, metrics: &GameMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(COLOR_SCORE_TEXT).bg(COLOR_BG);
        let value = label.add_modifier(Modifier::BOLD);
        let text = vec![Line::from(vec![
            Span::styled(" ● ", Style::default().fg(COLOR_FRUIT).bg(COLOR_BG)),
            Span::styled(score.to_string(), value),
            Span::styled("   Best: ", label),
            Span::styled(high_score.to_string(), value),
            Span::styled("   Games: ", label),
            Span::styled(metrics.games_played.to_string(), value),
            Span::styled("   Time: ", label),
            Span::styled(format!("{} ", metrics.format_time()), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    /// Message box over the board for the start and game over screens
    pub fn draw_overlay(
        &self,
        frame: &mut Frame,
        area: Rect,
        lifecycle: LifecycleState,
        score: u32,
        high_score: u32,
    ) {
        let lines = overlay_lines(lifecycle, score, high_score);
        if lines.is_empty() {
            return;
        }

        let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16 + 6;
        let popup = centered(area, width, (lines.len() as u16).saturating_add(2));

        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .style(Style::default().bg(Color::Black)),
            ),
            popup,
        );
    }

    fn board_block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(COLOR_SCORE_TEXT))
            .title(format!(" {TITLE} "))
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" or "),
            Span::styled("Esc", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

/// Text of the overlay; empty while playing
pub fn overlay_lines(lifecycle: LifecycleState, score: u32, high_score: u32) -> Vec<Line<'static>> {
    let bold = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);
    match lifecycle {
        LifecycleState::Waiting => vec![
            Line::styled(TITLE, bold(Color::White)),
            Line::styled("Press any key", Style::default().fg(COLOR_START_HINT)),
            Line::styled("to start", Style::default().fg(COLOR_START_HINT)),
            Line::styled(QUIT_HINT, Style::default().fg(Color::Gray)),
        ],
        LifecycleState::GameOver => vec![
            Line::styled("Game Over", bold(COLOR_GAME_OVER)),
            Line::styled(format!("Score: {score}"), Style::default().fg(Color::White)),
            Line::styled(format!("Best:  {high_score}"), Style::default().fg(COLOR_BEST)),
            Line::styled(
                "Press any key to restart",
                Style::default().fg(COLOR_RESTART_HINT),
            ),
            Line::styled(QUIT_HINT, Style::default().fg(Color::Gray)),
        ],
        LifecycleState::Playing => Vec::new(),
    }
}

/// First character and filler for a sprite
fn glyph(sprite: Sprite) -> (char, char) {
    match sprite {
        Sprite::Head(Direction::Right) => ('▶', ' '),
        Sprite::Head(Direction::Left) => ('◀', '━'),
        Sprite::Head(Direction::Up) => ('▲', ' '),
        Sprite::Head(Direction::Down) => ('▼', ' '),
        Sprite::Tail(Direction::Left) => ('╺', '━'),
        Sprite::Tail(Direction::Right) => ('╸', ' '),
        Sprite::Tail(Direction::Up) => ('╻', ' '),
        Sprite::Tail(Direction::Down) => ('╹', ' '),
        Sprite::Horizontal => ('━', '━'),
        Sprite::Vertical => ('┃', ' '),
        Sprite::Corner(Corner::TopLeft) => ('┛', ' '),
        Sprite::Corner(Corner::TopRight) => ('┗', '━'),
        Sprite::Corner(Corner::BottomLeft) => ('┓', ' '),
        Sprite::Corner(Corner::BottomRight) => ('┏', '━'),
    }
}

/// A `width × height` rectangle in the middle of `area`, clipped to it
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Fruit, Snake};
    use ratatui::{Terminal, backend::TestBackend};

    fn view() -> BoardView {
        BoardView {
            inner: Rect::new(1, 1, 38, 19),
            grid: Grid::new(19),
            cell_size: 2,
        }
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_cell_at() {
        let view = view();
        assert_eq!(view.cell_at(Position::new(0, 0)), Some((1, 1)));
        assert_eq!(view.cell_at(Position::new(5, 10)), Some((11, 11)));
        assert_eq!(view.cell_at(Position::new(18, 18)), Some((37, 19)));
        assert_eq!(view.cell_at(Position::new(19, 3)), None);
        assert_eq!(view.cell_at(Position::new(-1, 3)), None);
    }

    #[test]
    fn test_cell_at_clips_to_small_area() {
        let view = BoardView {
            inner: Rect::new(0, 0, 10, 4),
            ..view()
        };
        assert_eq!(view.cell_at(Position::new(4, 3)), Some((8, 3)));
        assert_eq!(view.cell_at(Position::new(5, 3)), None);
        assert_eq!(view.cell_at(Position::new(0, 4)), None);
    }

    #[test]
    fn test_board_has_snake_and_fruit() {
        let renderer = Renderer::new(2);
        let view = view();
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 21));
        renderer.draw_grid(&mut buf, &view);
        renderer.draw_fruit(&mut buf, &view, Position::new(6, 10));
        renderer.draw_snake(&mut buf, &view, &Snake::new().body);

        assert!(row_text(&buf, 11).contains("╺━━━▶ ● "));
        assert!(row_text(&buf, 1).trim().is_empty());
        assert_eq!(buf[(1, 1)].bg, COLOR_GRASS);
        assert_eq!(buf[(3, 1)].bg, COLOR_BG);
    }

    #[test]
    fn test_snake_outside_board_is_clipped() {
        let renderer = Renderer::new(2);
        let view = view();
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 21));
        let body = vec![Position::new(19, 3), Position::new(18, 3), Position::new(17, 3)];
        renderer.draw_snake(&mut buf, &view, &body);

        assert!(row_text(&buf, 4).ends_with("╺━━━ "));
    }

    #[test]
    fn test_overlay_text() {
        assert!(overlay_lines(LifecycleState::Playing, 0, 0).is_empty());

        let waiting: Vec<String> = overlay_lines(LifecycleState::Waiting, 0, 0)
            .iter()
            .map(|l| l.to_string())
            .collect();
        assert_eq!(
            waiting,
            ["Nokia Snake", "Press any key", "to start", "(Q or Esc quits)"]
        );

        let over: Vec<String> = overlay_lines(LifecycleState::GameOver, 3, 7)
            .iter()
            .map(|l| l.to_string())
            .collect();
        assert_eq!(over[0], "Game Over");
        assert_eq!(over[1], "Score: 3");
        assert_eq!(over[2], "Best:  7");
        assert_eq!(over[3], "Press any key to restart");
        assert_eq!(over[4], "(Q or Esc quits)");
    }

    #[test]
    fn test_full_frame_renders() {
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        let mut state = GameState::new(
            Snake::new(),
            Fruit {
                position: Position::new(1, 1),
            },
            Grid::new(19),
        );
        let renderer = Renderer::new(2);
        let metrics = GameMetrics::new();

        terminal
            .draw(|frame| renderer.render(frame, &state, &metrics))
            .unwrap();
        let screen = screen_text(&terminal);
        assert!(screen.contains("Press any key"));
        assert!(screen.contains("Esc to quit"));
        assert!(screen.contains("Best: 0"));

        state.lifecycle = LifecycleState::Playing;
        terminal
            .draw(|frame| renderer.render(frame, &state, &metrics))
            .unwrap();
        let screen = screen_text(&terminal);
        assert!(!screen.contains("Press any key"));
        assert!(screen.contains("╺━━━▶"));
    }

    #[test]
    fn test_oversized_board_is_clipped() {
        // 400 cells of 200 columns is far wider than a u16 coordinate
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        let state = GameState::new(
            Snake::new(),
            Fruit {
                position: Position::new(399, 399),
            },
            Grid::new(400),
        );
        let renderer = Renderer::new(200);

        terminal
            .draw(|frame| renderer.render(frame, &state, &GameMetrics::new()))
            .unwrap();
        assert!(screen_text(&terminal).contains("Press any key"));
    }
}
