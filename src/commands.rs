//! Non-interactive show/update of one user.

use thiserror::Error;

use crate::api::{ApiError, UserApi};
use crate::detail::DetailFetcher;
use crate::record::UserRecord;
use crate::submit::{SubmitOutcome, UpdateSubmitter};
use crate::ui::form::{fields_from_record, first_missing, FieldKey};

#[derive(Debug, Error)]
pub enum EditError {
    #[error("Failed to load user: {0}")]
    Fetch(#[from] ApiError),

    #[error("Field '{}' is read-only", .0.name())]
    ReadOnly(FieldKey),

    #[error("Please fill out this field: {}", .0.name())]
    Missing(FieldKey),
}

/// Apply `field=value` edits to a loaded record, then check that every
/// form input is filled.
pub fn apply_edits(mut record: UserRecord, edits: &[(FieldKey, String)]) -> Result<UserRecord, EditError> {
    for (key, value) in edits {
        if key.read_only() {
            return Err(EditError::ReadOnly(*key));
        }
        key.set(&mut record, value.clone());
    }

    let fields = fields_from_record(&record);
    if let Some(index) = first_missing(&fields) {
        return Err(EditError::Missing(fields[index].key));
    }
    Ok(record)
}

/// Load `id`, apply `edits` and submit once. Nothing is sent when an input
/// would be left empty.
pub async fn update_user<A: UserApi>(
    fetcher: &DetailFetcher<A>,
    id: &str,
    edits: &[(FieldKey, String)],
) -> Result<SubmitOutcome, EditError> {
    let fetched = fetcher.fetch(id).await?;
    let edited = apply_edits(fetched.record, edits)?;
    Ok(UpdateSubmitter::new(fetcher.clone()).submit(id, edited).await)
}
