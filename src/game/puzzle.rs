//! # Puzzles
//!
//! The three puzzle variants share one record shape ([`Puzzle`]): description, hint,
//! time bonus and penalty, a monotonic solved flag and the last feedback message.
//! Variant-specific attempt state lives in [`PuzzleKind`] and is dispatched by `match`.

use crate::config::MAX_ANSWER_LENGTH;
use crate::game::{Bounds, Item, Position};
use serde::{Deserialize, Serialize};

/// Switch colours of the pattern puzzle, in on-screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    Blue,
    Red,
    Green,
    Yellow,
}

impl Symbol {
    /// All symbols, left to right.
    pub const ALL: [Symbol; 4] = [Symbol::Blue, Symbol::Red, Symbol::Green, Symbol::Yellow];

    /// Symbol for a 1-based switch number.
    pub fn from_switch(number: u32) -> Option<Symbol> {
        let index = (number as usize).checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// 1-based switch number.
    pub fn switch_number(self) -> u32 {
        match self {
            Symbol::Blue => 1,
            Symbol::Red => 2,
            Symbol::Green => 3,
            Symbol::Yellow => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Symbol::Blue => "Blue",
            Symbol::Red => "Red",
            Symbol::Green => "Green",
            Symbol::Yellow => "Yellow",
        }
    }

    /// Screen rectangle of this symbol's switch in the puzzle overlay.
    pub fn switch_bounds(self) -> Bounds {
        let index = (self.switch_number() - 1) as f32;
        Bounds::new(200.0 + index * 120.0, 350.0, 80.0, 80.0)
    }

    /// The switch under a screen point, if any.
    pub fn at_point(point: Position) -> Option<Symbol> {
        Self::ALL
            .iter()
            .copied()
            .find(|symbol| symbol.switch_bounds().contains(point))
    }
}

/// Input delivered to the active puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleInput {
    /// A typed character
    Char(char),
    /// Delete the last character or digit
    Backspace,
    /// Submit the current answer
    Submit,
    /// Clear the pattern candidate
    Reset,
    /// A pattern switch was pressed
    Select(Symbol),
}

/// Result of feeding input to a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleOutcome {
    /// Nothing was evaluated
    Pending,
    /// The attempt was correct
    Solved,
    /// The attempt was evaluated and rejected
    Wrong,
}

/// Message shown under the puzzle after an attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub message: String,
    pub positive: bool,
}

/// Item spawned into the puzzle's room when it is solved.
#[derive(Debug, Clone, PartialEq)]
pub struct Reward {
    pub item: Item,
    pub notice: String,
}

/// Riddle attempt state.
#[derive(Debug, Clone, PartialEq)]
pub struct RiddleState {
    pub question: String,
    answer: String,
    input: String,
}

/// Pattern attempt state.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternState {
    target: Vec<Symbol>,
    candidate: Vec<Symbol>,
}

/// Code lock attempt state.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeLockState {
    code: String,
    entered: String,
}

/// Variant payload of a puzzle.
#[derive(Debug, Clone, PartialEq)]
pub enum PuzzleKind {
    Riddle(RiddleState),
    Pattern(PatternState),
    CodeLock(CodeLockState),
}

enum Edit {
    Ignored,
    Changed,
    Submit,
}

impl RiddleState {
    pub fn input(&self) -> &str {
        &self.input
    }

    fn edit(&mut self, input: PuzzleInput) -> Edit {
        match input {
            PuzzleInput::Char(c)
                if (' '..='~').contains(&c) && self.input.len() < MAX_ANSWER_LENGTH =>
            {
                self.input.push(c);
                Edit::Changed
            }
            PuzzleInput::Backspace if self.input.pop().is_some() => Edit::Changed,
            PuzzleInput::Submit if !self.input.is_empty() => Edit::Submit,
            _ => Edit::Ignored,
        }
    }

    fn is_correct(&self) -> bool {
        normalize_answer(&self.input) == self.answer
    }
}

impl PatternState {
    pub fn target(&self) -> &[Symbol] {
        &self.target
    }

    pub fn candidate(&self) -> &[Symbol] {
        &self.candidate
    }

    fn edit(&mut self, input: PuzzleInput) -> Edit {
        let symbol = match input {
            PuzzleInput::Select(symbol) => symbol,
            PuzzleInput::Char(c) => match c.to_digit(10).and_then(Symbol::from_switch) {
                Some(symbol) => symbol,
                None => return Edit::Ignored,
            },
            PuzzleInput::Reset if !self.candidate.is_empty() => {
                self.candidate.clear();
                return Edit::Changed;
            }
            _ => return Edit::Ignored,
        };
        self.candidate.push(symbol);
        if self.candidate.len() >= self.target.len() {
            Edit::Submit
        } else {
            Edit::Changed
        }
    }
}

impl CodeLockState {
    /// Number of digits entered so far.
    pub fn entered(&self) -> &str {
        &self.entered
    }

    pub fn code_length(&self) -> usize {
        self.code.len()
    }

    fn edit(&mut self, input: PuzzleInput) -> Edit {
        match input {
            PuzzleInput::Char(c) if c.is_ascii_digit() && self.entered.len() < self.code.len() => {
                self.entered.push(c);
                Edit::Changed
            }
            PuzzleInput::Backspace if self.entered.pop().is_some() => Edit::Changed,
            PuzzleInput::Submit if !self.entered.is_empty() => Edit::Submit,
            _ => Edit::Ignored,
        }
    }
}

/// A puzzle situated in a room.
#[derive(Debug, Clone, PartialEq)]
pub struct Puzzle {
    pub description: String,
    pub hint: String,
    /// Seconds added to the countdown when solved
    pub time_bonus: u32,
    /// Nominal cost of a rejected attempt; the countdown is not charged for it
    pub time_penalty: u32,
    /// Notice shown when the puzzle is opened
    pub activation_notice: Option<String>,
    /// Item that appears in the room once solved
    pub reward: Option<Reward>,
    solved: bool,
    feedback: Option<Feedback>,
    kind: PuzzleKind,
}

impl Puzzle {
    fn with_kind(description: &str, hint: &str, bonus: u32, penalty: u32, kind: PuzzleKind) -> Self {
        Self {
            description: description.to_string(),
            hint: hint.to_string(),
            time_bonus: bonus,
            time_penalty: penalty,
            activation_notice: None,
            reward: None,
            solved: false,
            feedback: None,
            kind,
        }
    }

    /// Creates a riddle. The answer is matched case-insensitively after trimming.
    ///
    /// # Examples
    ///
    /// ```
    /// use museum_escape::Puzzle;
    ///
    /// let mut riddle = Puzzle::riddle("What am I?", "echo");
    /// assert!(riddle.solve("  Echo "));
    /// assert!(riddle.is_solved());
    /// ```
    pub fn riddle(question: impl Into<String>, answer: &str) -> Self {
        let question = question.into();
        Self::with_kind(
            &question.clone(),
            "Think carefully...",
            30,
            10,
            PuzzleKind::Riddle(RiddleState {
                question,
                answer: normalize_answer(answer),
                input: String::new(),
            }),
        )
    }

    /// Creates a pattern puzzle with a fixed target sequence.
    pub fn pattern(target: Vec<Symbol>) -> Self {
        Self::with_kind(
            "Match the pattern",
            "Watch carefully...",
            40,
            15,
            PuzzleKind::Pattern(PatternState {
                target,
                candidate: Vec::new(),
            }),
        )
    }

    /// Creates a code lock opened by the digit string `code`.
    pub fn code_lock(code: impl Into<String>) -> Self {
        Self::with_kind(
            "Enter the code",
            "Look for clues...",
            35,
            10,
            PuzzleKind::CodeLock(CodeLockState {
                code: code.into(),
                entered: String::new(),
            }),
        )
    }

    pub fn with_activation_notice(mut self, notice: impl Into<String>) -> Self {
        self.activation_notice = Some(notice.into());
        self
    }

    pub fn with_reward(mut self, reward: Reward) -> Self {
        self.reward = Some(reward);
        self
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn kind(&self) -> &PuzzleKind {
        &self.kind
    }

    /// Heading for the puzzle overlay.
    pub fn title(&self) -> &'static str {
        match self.kind {
            PuzzleKind::Riddle(_) => "RIDDLE PUZZLE",
            PuzzleKind::Pattern(_) => "PATTERN PUZZLE",
            PuzzleKind::CodeLock(_) => "LOCK PUZZLE",
        }
    }

    /// Evaluates a complete answer.
    ///
    /// Riddles and code locks compare `answer`; the pattern puzzle ignores it and
    /// checks the sequence built so far. Returns whether the puzzle is solved.
    pub fn solve(&mut self, answer: &str) -> bool {
        if self.solved {
            return true;
        }
        match &mut self.kind {
            PuzzleKind::Riddle(riddle) => riddle.input = answer.to_string(),
            PuzzleKind::CodeLock(lock) => lock.entered = answer.to_string(),
            PuzzleKind::Pattern(_) => {}
        }
        self.evaluate() == PuzzleOutcome::Solved
    }

    /// Feeds one input to the puzzle. Input is ignored once solved.
    pub fn handle_input(&mut self, input: PuzzleInput) -> PuzzleOutcome {
        if self.solved {
            return PuzzleOutcome::Pending;
        }
        let edit = match &mut self.kind {
            PuzzleKind::Riddle(riddle) => riddle.edit(input),
            PuzzleKind::Pattern(pattern) => pattern.edit(input),
            PuzzleKind::CodeLock(lock) => lock.edit(input),
        };
        match edit {
            Edit::Ignored => PuzzleOutcome::Pending,
            Edit::Changed => {
                self.feedback = None;
                PuzzleOutcome::Pending
            }
            Edit::Submit => self.evaluate(),
        }
    }

    fn evaluate(&mut self) -> PuzzleOutcome {
        let correct = match &self.kind {
            PuzzleKind::Riddle(riddle) => riddle.is_correct(),
            PuzzleKind::Pattern(pattern) => pattern.candidate == pattern.target,
            PuzzleKind::CodeLock(lock) => lock.entered == lock.code,
        };

        if correct {
            self.solved = true;
            self.feedback = Some(Feedback {
                message: format!("Correct! +{} seconds!", self.time_bonus),
                positive: true,
            });
            return PuzzleOutcome::Solved;
        }

        let message = match &mut self.kind {
            PuzzleKind::Riddle(riddle) => {
                riddle.input.clear();
                "Wrong! Try again.".to_string()
            }
            PuzzleKind::Pattern(pattern) => {
                pattern.candidate.clear();
                "Wrong pattern! Start over.".to_string()
            }
            PuzzleKind::CodeLock(lock) => {
                lock.entered.clear();
                "Access denied! Try again.".to_string()
            }
        };
        self.feedback = Some(Feedback {
            message,
            positive: false,
        });
        PuzzleOutcome::Wrong
    }
}

fn normalize_answer(answer: &str) -> String {
    answer.trim().to_lowercase()
}
