//! # User Interface Elements
//!
//! HUD, notification banner, inventory panel, puzzle overlays and the full-screen
//! menu, pause and end screens.

use crate::config::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::game::{
    Countdown, DefeatReason, GameStatistics, Inventory, Notification, Puzzle, PuzzleKind, Symbol,
    Tone, World,
};
use macroquad::prelude::*;

const PANEL: Color = Color::new(40.0 / 255.0, 40.0 / 255.0, 60.0 / 255.0, 1.0);
const DIM: Color = Color::new(150.0 / 255.0, 150.0 / 255.0, 150.0 / 255.0, 1.0);
const OVERLAY: Color = Color::new(0.0, 0.0, 0.0, 0.7);

/// Colour of a notification tone.
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Info => WHITE,
        Tone::Success => GREEN,
        Tone::Warning => YELLOW,
        Tone::Danger => RED,
        Tone::Hint => MAGENTA,
    }
}

/// Fill colour of a pattern switch.
pub fn symbol_color(symbol: Symbol) -> Color {
    match symbol {
        Symbol::Blue => BLUE,
        Symbol::Red => RED,
        Symbol::Green => GREEN,
        Symbol::Yellow => YELLOW,
    }
}

/// UI drawing helpers sharing one optional font.
pub struct UI {
    font: Option<Font>,
}

impl UI {
    pub fn new(font: Option<Font>) -> Self {
        Self { font }
    }

    /// Draws one line of text with its baseline at `y`.
    pub fn text(&self, text: &str, x: f32, y: f32, size: u16, color: Color) {
        draw_text_ex(
            text,
            x,
            y,
            TextParams {
                font: self.font.as_ref(),
                font_size: size,
                color,
                ..Default::default()
            },
        );
    }

    /// Draws text split on newlines, returns the y after the last line.
    pub fn lines(&self, text: &str, x: f32, y: f32, size: u16, color: Color) -> f32 {
        let step = size as f32 * 1.3;
        let mut line_y = y;
        for line in text.lines() {
            self.text(line, x, line_y, size, color);
            line_y += step;
        }
        line_y
    }

    /// Draws a line horizontally centred in the window.
    pub fn centered(&self, text: &str, y: f32, size: u16, color: Color) {
        let dimensions = measure_text(text, self.font.as_ref(), size, 1.0);
        self.text(text, (WINDOW_WIDTH - dimensions.width) / 2.0, y, size, color);
    }

    fn panel(&self, x: f32, y: f32, width: f32, height: f32) {
        draw_rectangle(x, y, width, height, PANEL);
        draw_rectangle_lines(x, y, width, height, 3.0, WHITE);
    }

    fn dim_screen(&self) {
        draw_rectangle(0.0, 0.0, WINDOW_WIDTH, WINDOW_HEIGHT, OVERLAY);
    }

    pub fn render_menu(&self) {
        self.centered("MUSEUM ESCAPE", 140.0, 56, YELLOW);
        self.centered("Press ENTER to Start", 230.0, 28, WHITE);

        let controls = [
            "Controls:",
            "WASD / Arrows = Move",
            "E = Use doors / pick up items",
            "P = Activate puzzles",
            "I = Inventory",
            "ESC = Pause",
        ];
        let mut y = 310.0;
        for line in controls {
            self.centered(line, y, 22, DIM);
            y += 30.0;
        }
    }

    pub fn render_paused(&self) {
        self.dim_screen();
        self.centered("PAUSED", 260.0, 48, WHITE);
        self.centered("Press ESC to resume", 320.0, 24, DIM);
    }

    /// Victory or defeat summary. `reason` is `None` for a victory.
    pub fn render_end_screen(
        &self,
        reason: Option<DefeatReason>,
        statistics: &GameStatistics,
        time_left: &str,
    ) {
        self.dim_screen();
        match reason {
            None => {
                self.centered("YOU ESCAPED!", 150.0, 56, GREEN);
                self.centered(&format!("Time left: {}", time_left), 200.0, 26, WHITE);
            }
            Some(DefeatReason::TimeExpired) => {
                self.centered("GAME OVER", 150.0, 56, RED);
                self.centered("The museum opened with you still inside.", 200.0, 24, WHITE);
            }
            Some(DefeatReason::Caught) => {
                self.centered("GAME OVER", 150.0, 56, RED);
                self.centered("A guard caught you.", 200.0, 24, WHITE);
            }
        }

        let rows = [
            format!("Puzzles solved: {}", statistics.puzzles_solved),
            format!("Wrong answers: {}", statistics.wrong_answers),
            format!("Items collected: {}", statistics.items_collected),
            format!("Rooms visited: {}", statistics.rooms_visited),
            format!("Doors unlocked: {}", statistics.doors_unlocked),
            format!("Times spotted: {}", statistics.detections),
        ];
        let mut y = 260.0;
        for row in &rows {
            self.centered(row, y, 22, DIM);
            y += 28.0;
        }

        self.centered("ENTER = play again | ESC = quit", 480.0, 24, WHITE);
    }

    /// Countdown, room name and puzzle progress along the top edge.
    pub fn render_hud(&self, room_name: &str, timer: &Countdown, progress: (usize, usize)) {
        draw_rectangle(0.0, 0.0, WINDOW_WIDTH, 36.0, Color::new(0.0, 0.0, 0.0, 0.6));
        self.text(room_name, 10.0, 25.0, 22, WHITE);
        self.text(
            &format!("Puzzles {}/{}", progress.0, progress.1),
            330.0,
            25.0,
            22,
            SKYBLUE,
        );
        let color = if timer.remaining() < 60.0 { RED } else { WHITE };
        self.text(&format!("Time: {}", timer.display()), 640.0, 25.0, 22, color);
    }

    pub fn render_notification(&self, notification: &Notification) {
        let y = 70.0;
        let dimensions = measure_text(&notification.text, self.font.as_ref(), 24, 1.0);
        let x = (WINDOW_WIDTH - dimensions.width) / 2.0;
        draw_rectangle(
            x - 10.0,
            y - 24.0,
            dimensions.width + 20.0,
            34.0,
            Color::new(0.0, 0.0, 0.0, 0.75),
        );
        self.text(&notification.text, x, y, 24, tone_color(notification.tone));
    }

    pub fn render_inventory(&self, inventory: &Inventory, world: &World) {
        self.panel(200.0, 50.0, 400.0, 500.0);
        self.text(
            &format!("INVENTORY ({}/{})", inventory.len(), inventory.capacity()),
            220.0,
            90.0,
            28,
            WHITE,
        );

        if inventory.is_empty() {
            self.text("No items collected yet...", 250.0, 250.0, 20, DIM);
            return;
        }

        let mut y = 130.0;
        for (i, slot) in inventory.slots().iter().enumerate() {
            self.text(&format!("{}. {}", i + 1, slot.name), 230.0, y, 22, YELLOW);
            if let Some(item) = world.item(slot.id) {
                let detail = match item.code() {
                    Some(code) => format!("   {} ({})", item.description, code),
                    None => format!("   {}", item.description),
                };
                self.text(&detail, 230.0, y + 22.0, 16, LIGHTGRAY);
            }
            y += 50.0;
        }
    }

    /// Overlay for the puzzle that has focus.
    pub fn render_puzzle(&self, puzzle: &Puzzle) {
        self.dim_screen();
        self.panel(100.0, 75.0, 600.0, 450.0);
        self.text(puzzle.title(), 250.0, 120.0, 32, YELLOW);

        let footer = match puzzle.kind() {
            PuzzleKind::Riddle(riddle) => {
                self.lines(&riddle.question, 130.0, 180.0, 20, WHITE);
                self.text("Your Answer:", 130.0, 340.0, 20, SKYBLUE);
                self.input_box(&format!("{}_", riddle.input()));
                "Press ENTER to submit | ESC to exit"
            }
            PuzzleKind::Pattern(pattern) => {
                let order = pattern
                    .target()
                    .iter()
                    .map(|symbol| symbol.name())
                    .collect::<Vec<_>>()
                    .join(" -> ");
                self.lines(
                    &format!("Press the switches in this order:\n{}", order),
                    150.0,
                    170.0,
                    20,
                    WHITE,
                );
                let entered = pattern
                    .candidate()
                    .iter()
                    .map(|symbol| symbol.name())
                    .collect::<Vec<_>>()
                    .join(" ");
                self.text(&format!("Sequence: {}", entered), 150.0, 260.0, 20, SKYBLUE);
                self.render_switches();
                "Click or press 1-4 | R to reset | ESC to exit"
            }
            PuzzleKind::CodeLock(lock) => {
                self.text(&puzzle.description, 130.0, 180.0, 22, WHITE);
                self.text(&puzzle.hint, 130.0, 215.0, 18, DIM);
                let blanks = lock.code_length().saturating_sub(lock.entered().len());
                let shown = format!("{}{}", lock.entered(), "_".repeat(blanks));
                self.input_box(&shown);
                "Type the digits | ENTER to submit | ESC to exit"
            }
        };

        if let Some(feedback) = puzzle.feedback() {
            let color = if feedback.positive { GREEN } else { RED };
            self.text(&feedback.message, 130.0, 450.0, 22, color);
        }
        let footer = if puzzle.is_solved() {
            "Solved! Press ESC to close"
        } else {
            footer
        };
        self.text(footer, 150.0, 505.0, 18, DIM);
    }

    fn input_box(&self, content: &str) {
        draw_rectangle(130.0, 350.0, 540.0, 45.0, Color::new(0.08, 0.08, 0.12, 1.0));
        draw_rectangle_lines(130.0, 350.0, 540.0, 45.0, 2.0, WHITE);
        self.text(content, 140.0, 380.0, 24, WHITE);
    }

    fn render_switches(&self) {
        for symbol in Symbol::ALL {
            let bounds = symbol.switch_bounds();
            draw_rectangle(bounds.x, bounds.y, bounds.width, bounds.height, symbol_color(symbol));
            draw_rectangle_lines(bounds.x, bounds.y, bounds.width, bounds.height, 3.0, WHITE);
            self.text(
                &symbol.switch_number().to_string(),
                bounds.x + 32.0,
                bounds.bottom() + 25.0,
                20,
                WHITE,
            );
        }
    }
}
