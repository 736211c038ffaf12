use crate::record::UserRecord;
use crate::ui::form::field::{FieldKey, FormField};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormState {
    /// Nothing to show yet; the form is not rendered.
    #[default]
    Withheld,
    /// Fetch in flight. A placeholder record is shown dimmed, not editable.
    Loading { placeholder: Option<UserRecord> },
    /// Fetch failed; the form is not rendered.
    LoadFailed { message: String },
    Editing {
        /// Record as fetched. Source of the identifier and `create_at`.
        loaded: UserRecord,
        fields: Vec<FormField>,
        focused: usize,
        dirty: bool,
        /// An update request is in flight.
        submitting: bool,
        /// Set when a submit was rejected because this input was empty.
        missing: Option<FieldKey>,
    },
}

impl UiState for FormState {}

impl FormState {
    /// True when the editable form is rendered.
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Editing { submitting: true, .. })
    }

    pub fn is_dirty(&self) -> bool {
        matches!(self, Self::Editing { dirty: true, .. })
    }

    pub fn fields(&self) -> &[FormField] {
        match self {
            Self::Editing { fields, .. } => fields,
            _ => &[],
        }
    }

    pub fn value(&self, key: FieldKey) -> Option<&str> {
        self.fields()
            .iter()
            .find(|field| field.key == key)
            .map(|field| field.value.as_str())
    }

    pub fn missing(&self) -> Option<FieldKey> {
        match self {
            Self::Editing { missing, .. } => *missing,
            _ => None,
        }
    }

    /// The edited record: identifier and `create_at` as loaded, every input
    /// copied over, `update_at` still the loaded value.
    pub fn to_record(&self) -> Option<UserRecord> {
        let Self::Editing { loaded, fields, .. } = self else {
            return None;
        };
        let mut record = loaded.clone();
        for field in fields {
            field.key.set(&mut record, field.value.clone());
        }
        Some(record)
    }
}
