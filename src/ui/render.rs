use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::braille::BrailleCanvas;
use super::font;
use super::overlay::{render_overlay, OverlayMessage};
use crate::config::DisplayConfig;
use crate::game::geometry::{to_display, RESOLUTION_X, RESOLUTION_Y};
use crate::game::{GameObject, MatchState};

// Font pixel sizes, in playfield pixels
const SCORE_SCALE: f32 = 3.0;
const MESSAGE_SCALE: f32 = 2.0;
const TITLE_SCALE: f32 = 6.0;

/// Maps the fixed logical playfield onto the Braille canvas, whatever the terminal size
struct Viewport {
    scale_x: f32,
    scale_y: f32,
}

impl Viewport {
    fn new(canvas: &BrailleCanvas) -> Self {
        Self {
            scale_x: canvas.pixel_width() as f32 / RESOLUTION_X as f32,
            scale_y: canvas.pixel_height() as f32 / RESOLUTION_Y as f32,
        }
    }

    /// Canvas pixel span covering [start, start + len) in playfield pixels, at least one dot wide
    fn span(start: f32, len: f32, scale: f32) -> (usize, usize) {
        let from = (start * scale).round().max(0.0) as usize;
        let to = ((start + len) * scale).round().max(0.0) as usize;
        (from, to.saturating_sub(from).max(1))
    }

    /// Fill a rectangle given in playfield pixels
    fn fill(&self, canvas: &mut BrailleCanvas, x: f32, y: f32, w: f32, h: f32) {
        let (px, pw) = Self::span(x, w, self.scale_x);
        let (py, ph) = Self::span(y, h, self.scale_y);
        canvas.fill_rect(px, py, pw, ph);
    }

    fn fill_object(&self, canvas: &mut BrailleCanvas, object: &GameObject) {
        self.fill(
            canvas,
            to_display(object.x),
            to_display(object.y),
            to_display(object.width()),
            to_display(object.height()),
        );
    }

    /// Blit bitmap-font text horizontally centred on `center_x`
    fn text(&self, canvas: &mut BrailleCanvas, text: &str, center_x: f32, y: f32, scale: f32) {
        let left = center_x - font::text_width(text) as f32 * scale / 2.0;
        for (col, row) in font::text_pixels(text) {
            self.fill(
                canvas,
                left + col as f32 * scale,
                y + row as f32 * scale,
                scale,
                scale,
            );
        }
    }
}

fn rgb(color: [u8; 3]) -> Color {
    Color::Rgb(color[0], color[1], color[2])
}

/// Draw the match: field, paddles, ball, scores and the serve message
pub fn render(frame: &mut Frame, state: &MatchState, display: &DisplayConfig) {
    let area = frame.area();
    draw_background(frame, area);

    let mut canvas = BrailleCanvas::new(area.width as usize, area.height as usize);
    let view = Viewport::new(&canvas);

    draw_field(&mut canvas, &view, display);

    canvas.set_pen(rgb(display.paddle_color));
    view.fill_object(&mut canvas, &state.player);
    view.fill_object(&mut canvas, &state.opponent);

    canvas.set_pen(rgb(display.ball_color));
    view.fill_object(&mut canvas, &state.ball);

    canvas.set_pen(rgb(display.text_color));
    let quarter = RESOLUTION_X as f32 / 4.0;
    view.text(&mut canvas, &state.score_player.to_string(), quarter, 6.0, SCORE_SCALE);
    view.text(&mut canvas, &state.score_opponent.to_string(), 3.0 * quarter, 6.0, SCORE_SCALE);

    if state.wait_time > 0 && !state.message.is_empty() {
        let y = RESOLUTION_Y as f32 / 2.0 - 32.0;
        view.text(&mut canvas, &state.message, RESOLUTION_X as f32 / 2.0, y, MESSAGE_SCALE);
    }

    render_braille_canvas(frame, &canvas, area);
}

/// Draw the pre-match screen: the frozen field, a bitmap title and the controls box
pub fn render_instructions(
    frame: &mut Frame,
    state: &MatchState,
    display: &DisplayConfig,
    instructions: &OverlayMessage,
) {
    let area = frame.area();
    draw_background(frame, area);

    let mut canvas = BrailleCanvas::new(area.width as usize, area.height as usize);
    let view = Viewport::new(&canvas);

    draw_field(&mut canvas, &view, display);

    canvas.set_pen(rgb(display.paddle_color));
    view.fill_object(&mut canvas, &state.player);
    view.fill_object(&mut canvas, &state.opponent);

    canvas.set_pen(rgb(display.text_color));
    view.text(&mut canvas, "PONG", RESOLUTION_X as f32 / 2.0, 12.0, TITLE_SCALE);

    render_braille_canvas(frame, &canvas, area);
    render_overlay(
        frame,
        instructions,
        area,
        rgb(display.text_color),
        rgb(display.center_line_color),
    );
}

fn draw_background(frame: &mut Frame, area: Rect) {
    // True black RGB, not terminal default
    let bg = Block::default().style(Style::default().bg(Color::Rgb(0, 0, 0)));
    frame.render_widget(bg, area);
}

/// Top and bottom borders plus a dashed centre line
fn draw_field(canvas: &mut BrailleCanvas, view: &Viewport, display: &DisplayConfig) {
    canvas.set_pen(rgb(display.center_line_color));

    canvas.draw_horizontal_line(0);
    canvas.draw_horizontal_line(canvas.pixel_height().saturating_sub(1));

    let center_x = RESOLUTION_X as f32 / 2.0 - 0.5;
    for y in (0..RESOLUTION_Y).step_by(8) {
        view.fill(canvas, center_x, y as f32, 1.0, 4.0);
    }
}

fn render_braille_canvas(frame: &mut Frame, canvas: &BrailleCanvas, area: Rect) {
    for y in 0..canvas.height() {
        // Consecutive cells of the same colour share one span
        let mut spans: Vec<Span> = Vec::new();
        let mut run = String::new();
        let mut run_color = canvas.color_at(0, y);

        for x in 0..canvas.width() {
            let color = canvas.color_at(x, y);
            if color != run_color && !run.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut run),
                    Style::default().fg(run_color),
                ));
            }
            run_color = color;
            run.push(canvas.to_char(x, y));
        }
        if !run.is_empty() {
            spans.push(Span::styled(run, Style::default().fg(run_color)));
        }

        let row_area = Rect {
            x: area.x,
            y: area.y + y as u16,
            width: area.width,
            height: 1,
        };

        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_span_is_at_least_one_dot() {
        assert_eq!(Viewport::span(10.0, 0.1, 1.0), (10, 1));
        assert_eq!(Viewport::span(-4.0, 8.0, 1.0), (0, 4));
        assert_eq!(Viewport::span(2.0, 4.0, 0.5), (1, 2));
    }

    #[test]
    fn test_viewport_covers_whole_canvas() {
        let canvas = BrailleCanvas::new(128, 48);
        let view = Viewport::new(&canvas);
        assert_eq!(view.scale_x, 1.0);
        assert_eq!(view.scale_y, 1.0);
    }

    #[test]
    fn test_render_match_draws_objects() {
        let mut terminal = Terminal::new(TestBackend::new(128, 48)).unwrap();
        let state = MatchState::default();
        let display = DisplayConfig::default();

        terminal.draw(|f| render(f, &state, &display)).unwrap();

        // Player paddle at x=16..24 covers whole cells in column 8
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer.content()[buffer.index_of(8, 20)].symbol(), "⣿");
        assert_eq!(buffer.content()[buffer.index_of(116, 20)].symbol(), "⣿");
    }

    #[test]
    fn test_render_instructions_shows_overlay() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let state = MatchState::default();
        let display = DisplayConfig::default();
        let instructions =
            OverlayMessage::new(vec!["Space to begin".to_string()]).with_title("Fixpong".to_string());

        terminal
            .draw(|f| render_instructions(f, &state, &display, &instructions))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Space to begin"));
        assert!(text.contains("Fixpong"));
    }

    #[test]
    fn test_overlay_border_uses_display_colors() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let state = MatchState::default();
        let display = DisplayConfig {
            center_line_color: [10, 200, 30],
            ..DisplayConfig::default()
        };
        let instructions = OverlayMessage::new(vec!["Space to begin".to_string()]);

        terminal
            .draw(|f| render_instructions(f, &state, &display, &instructions))
            .unwrap();

        // 20x5 box centred in 80x24: top-left corner at (30, 9)
        let buffer = terminal.backend().buffer();
        let corner = &buffer.content()[buffer.index_of(30, 9)];
        assert_eq!(corner.symbol(), "┌");
        assert_eq!(corner.fg, Color::Rgb(10, 200, 30));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(3, 2)).unwrap();
        let state = MatchState::default();
        let display = DisplayConfig::default();
        let instructions = OverlayMessage::new(vec!["x".to_string()]);

        terminal.draw(|f| render(f, &state, &display)).unwrap();
        terminal
            .draw(|f| render_instructions(f, &state, &display, &instructions))
            .unwrap();
    }
}
