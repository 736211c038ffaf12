use crate::ui::form::field::{fields_from_record, first_missing};
use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::FormState;
use crate::ui::mvi::Reducer;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::StartLoading { placeholder } => FormState::Loading { placeholder },
            FormIntent::Loaded { record } => FormState::Editing {
                fields: fields_from_record(&record),
                loaded: record,
                focused: 1,
                dirty: false,
                submitting: false,
                missing: None,
            },
            FormIntent::LoadFailed { message } => FormState::LoadFailed { message },
            FormIntent::MoveUp => match state {
                FormState::Editing {
                    loaded,
                    fields,
                    focused,
                    dirty,
                    submitting,
                    missing,
                } => {
                    let focused = if focused == 0 {
                        fields.len().saturating_sub(1)
                    } else {
                        focused - 1
                    };
                    FormState::Editing {
                        loaded,
                        fields,
                        focused,
                        dirty,
                        submitting,
                        missing,
                    }
                }
                other => other,
            },
            FormIntent::MoveDown => match state {
                FormState::Editing {
                    loaded,
                    fields,
                    focused,
                    dirty,
                    submitting,
                    missing,
                } => {
                    let focused = if focused + 1 >= fields.len() {
                        0
                    } else {
                        focused + 1
                    };
                    FormState::Editing {
                        loaded,
                        fields,
                        focused,
                        dirty,
                        submitting,
                        missing,
                    }
                }
                other => other,
            },
            FormIntent::Input(ch) => edit_focused(state, |value| value.push(ch)),
            FormIntent::Backspace => edit_focused(state, |value| {
                value.pop();
            }),
            FormIntent::ClearField => edit_focused(state, String::clear),
            FormIntent::Submit => match state {
                FormState::Editing {
                    loaded,
                    fields,
                    focused,
                    dirty,
                    submitting: false,
                    ..
                } => match first_missing(&fields) {
                    Some(index) => {
                        // Required input left empty: stay, point at it
                        let missing = Some(fields[index].key);
                        FormState::Editing {
                            loaded,
                            fields,
                            focused: index,
                            dirty,
                            submitting: false,
                            missing,
                        }
                    }
                    None => FormState::Editing {
                        loaded,
                        fields,
                        focused,
                        dirty,
                        submitting: true,
                        missing: None,
                    },
                },
                other => other,
            },
            FormIntent::SubmitSucceeded => match state {
                FormState::Editing {
                    loaded,
                    fields,
                    focused,
                    submitting: true,
                    ..
                } => FormState::Editing {
                    loaded,
                    fields,
                    focused,
                    dirty: false,
                    submitting: false,
                    missing: None,
                },
                other => other,
            },
            FormIntent::SubmitFailed => match state {
                FormState::Editing {
                    loaded,
                    fields,
                    focused,
                    dirty,
                    missing,
                    ..
                } => FormState::Editing {
                    loaded,
                    fields,
                    focused,
                    dirty,
                    submitting: false,
                    missing,
                },
                other => other,
            },
        }
    }
}

/// Apply `edit` to the focused input unless it is read-only.
fn edit_focused(state: FormState, edit: impl FnOnce(&mut String)) -> FormState {
    match state {
        FormState::Editing {
            loaded,
            mut fields,
            focused,
            dirty,
            submitting,
            missing,
        } => {
            let mut changed = false;
            if let Some(field) = fields.get_mut(focused) {
                if !field.read_only() {
                    let before = field.value.clone();
                    edit(&mut field.value);
                    changed = field.value != before;
                }
            }
            let missing = match missing {
                Some(key) if changed && fields.get(focused).is_some_and(|f| f.key == key) => {
                    None
                }
                other => other,
            };
            FormState::Editing {
                loaded,
                fields,
                focused,
                dirty: dirty || changed,
                submitting,
                missing,
            }
        }
        other => other,
    }
}
