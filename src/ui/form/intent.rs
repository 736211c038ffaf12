use crate::record::UserRecord;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// A fetch started. `placeholder` is the previous result, if any.
    StartLoading { placeholder: Option<UserRecord> },
    /// Fetch succeeded; inputs are pre-filled from the record.
    Loaded { record: UserRecord },
    /// Fetch failed after its retry.
    LoadFailed { message: String },
    MoveUp,
    MoveDown,
    /// Typed character appended to the focused input.
    Input(char),
    Backspace,
    ClearField,
    /// Operator asked to save. Rejected while any input is empty.
    Submit,
    SubmitSucceeded,
    /// Update failed; inputs keep their current values.
    SubmitFailed,
}

impl Intent for FormIntent {}
