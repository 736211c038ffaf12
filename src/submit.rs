//! Sending an edited record back to the service.

use chrono::{DateTime, Local, TimeZone};
use std::fmt;

use crate::api::{ApiError, UserApi};
use crate::detail::DetailFetcher;
use crate::navigation::Route;
use crate::notify::Notification;
use crate::record::UserRecord;

pub const UPDATE_SUCCESS_MESSAGE: &str = "User updated successfully";

/// Date string in the form browsers print `Date` values,
/// e.g. `Mon Oct 19 2026 14:03:00 GMT+0700`.
///
/// Browsers also append the zone name (`GMT+0700 (Indochina Time)`). It is
/// left out here: chrono has no portable source for it and the offset
/// already pins the instant.
pub fn browser_timestamp<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    now.format("%a %b %d %Y %H:%M:%S GMT%z").to_string()
}

/// The body of an update: the edited record with `update_at` stamped `now`,
/// whatever was loaded or typed before.
pub fn prepare_update<Tz>(mut edited: UserRecord, now: &DateTime<Tz>) -> UserRecord
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    edited.update_at = browser_timestamp(now);
    edited
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Saved {
        record: UserRecord,
        notification: Notification,
        redirect: Route,
    },
    Failed {
        error: ApiError,
        notification: Notification,
    },
}

impl SubmitOutcome {
    pub fn notification(&self) -> &Notification {
        match self {
            SubmitOutcome::Saved { notification, .. } | SubmitOutcome::Failed { notification, .. } => {
                notification
            }
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, SubmitOutcome::Saved { .. })
    }
}

/// Issues the update call. One attempt, no retry.
pub struct UpdateSubmitter<A> {
    fetcher: DetailFetcher<A>,
}

impl<A> Clone for UpdateSubmitter<A> {
    fn clone(&self) -> Self {
        Self {
            fetcher: self.fetcher.clone(),
        }
    }
}

impl<A: UserApi> UpdateSubmitter<A> {
    /// Shares the fetcher's cache so a saved record is refetched next time.
    pub fn new(fetcher: DetailFetcher<A>) -> Self {
        Self { fetcher }
    }

    pub async fn submit(&self, id: &str, edited: UserRecord) -> SubmitOutcome {
        self.submit_at(id, edited, &Local::now()).await
    }

    pub async fn submit_at<Tz>(&self, id: &str, edited: UserRecord, now: &DateTime<Tz>) -> SubmitOutcome
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let body = prepare_update(edited, now);
        match self.fetcher.api().update(id, &body).await {
            Ok(()) => {
                tracing::info!(id, update_at = %body.update_at, "user updated");
                self.fetcher.invalidate(id);
                SubmitOutcome::Saved {
                    record: body,
                    notification: Notification::success(UPDATE_SUCCESS_MESSAGE),
                    redirect: Route::UserList,
                }
            }
            Err(error) => {
                tracing::warn!(id, error = %error, "user update failed");
                SubmitOutcome::Failed {
                    notification: Notification::error(error.user_message()),
                    error,
                }
            }
        }
    }
}
