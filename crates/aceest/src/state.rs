use aceest_core::WorkoutStore;

use crate::modals::ModalState;

pub const WINDOW_TITLE: &str = "ACEestFitness and Gym";

/// Everything the form reads and writes between key presses
#[derive(Debug, Default)]
pub struct AppState {
    pub store: WorkoutStore,
    pub form: FormState,
    pub modal: ModalState,
    pub exit: bool,
}

impl AppState {
    pub fn new(store: WorkoutStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    pub fn has_modal(&self) -> bool {
        !matches!(self.modal, ModalState::None)
    }
}

// ========== Focus ==========

/// Which widget receives key input. Order matches the on-screen layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Workout,
    Duration,
    AddButton,
    ViewButton,
}

impl Focus {
    const ORDER: [Focus; 4] = [
        Focus::Workout,
        Focus::Duration,
        Focus::AddButton,
        Focus::ViewButton,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn is_field(self) -> bool {
        matches!(self, Focus::Workout | Focus::Duration)
    }
}

// ========== InputField ==========

/// Single-line text input with a char-indexed cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    pub label: String,
    pub value: String,
    pub cursor_pos: usize,
}

impl InputField {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            ..Self::default()
        }
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor_pos);
        self.value.insert(at, c);
        self.cursor_pos += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let at = self.byte_offset(self.cursor_pos);
            self.value.remove(at);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor_pos < self.char_len() {
            let at = self.byte_offset(self.cursor_pos);
            self.value.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.char_len() {
            self.cursor_pos += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.char_len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor_pos = 0;
    }
}

// ========== FormState ==========

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub workout: InputField,
    pub duration: InputField,
    pub focus: Focus,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            workout: InputField::new("Workout:"),
            duration: InputField::new("Duration (minutes):"),
            focus: Focus::default(),
        }
    }
}

impl FormState {
    /// The input under focus, if focus is on a field rather than a button
    pub fn focused_field_mut(&mut self) -> Option<&mut InputField> {
        match self.focus {
            Focus::Workout => Some(&mut self.workout),
            Focus::Duration => Some(&mut self.duration),
            Focus::AddButton | Focus::ViewButton => None,
        }
    }

    /// Empty both inputs and return focus to the first one
    pub fn reset(&mut self) {
        self.workout.clear();
        self.duration.clear();
        self.focus = Focus::Workout;
    }
}
