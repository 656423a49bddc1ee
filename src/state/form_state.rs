//! Draft bet form and signature input.

/// A field of the new bet form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Topic,
    Terms,
    Participants,
}

impl FormField {
    /// All fields in display order.
    pub const ALL: [FormField; 3] = [Self::Topic, Self::Terms, Self::Participants];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Topic => "Topic",
            Self::Terms => "Terms",
            Self::Participants => "Participants (comma-separated)",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Topic => Self::Terms,
            Self::Terms => Self::Participants,
            Self::Participants => Self::Topic,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Topic => Self::Participants,
            Self::Terms => Self::Topic,
            Self::Participants => Self::Terms,
        }
    }
}

/// An unsaved bet as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftBet {
    pub topic: String,
    pub terms: String,
    /// Raw comma-separated participant names.
    pub participants: String,
}

impl DraftBet {
    /// Split the participants string on commas and trim each name.
    ///
    /// Empty segments are kept.
    pub fn participant_names(&self) -> Vec<String> {
        self.participants
            .split(',')
            .map(|p| p.trim().to_string())
            .collect()
    }

    /// Whether every field has content.
    pub fn is_complete(&self) -> bool {
        !self.topic.is_empty() && !self.terms.is_empty() && !self.participants.is_empty()
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Topic => &self.topic,
            FormField::Terms => &self.terms,
            FormField::Participants => &self.participants,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Topic => &mut self.topic,
            FormField::Terms => &mut self.terms,
            FormField::Participants => &mut self.participants,
        }
    }
}

/// Form state for creating a bet.
#[derive(Debug, Default)]
pub struct FormState {
    /// The draft being edited.
    pub draft: DraftBet,
    /// Field receiving keystrokes.
    pub focus: FormField,
}

impl FormState {
    /// Type a character into the focused field.
    pub fn push_char(&mut self, c: char) {
        self.draft.field_mut(self.focus).push(c);
    }

    /// Delete the last character of the focused field.
    pub fn pop_char(&mut self) {
        self.draft.field_mut(self.focus).pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Clear all fields and return focus to the first one.
    pub fn reset(&mut self) {
        self.draft = DraftBet::default();
        self.focus = FormField::Topic;
    }
}

/// Text typed into the signature prompt.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SignatureInput {
    pub text: String,
}

impl SignatureInput {
    /// Whether there is nothing to sign with.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn push_char(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn pop_char(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}
