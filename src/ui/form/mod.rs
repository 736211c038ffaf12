//! Update-user form: one text input per record field (MVI).

mod field;
mod intent;
mod reducer;
mod state;

pub use field::{fields_from_record, first_missing, FieldKey, FormField};
pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::FormState;
