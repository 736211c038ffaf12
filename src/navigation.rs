//! Route history for the admin screens.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The user listing view.
    UserList,
    /// Detail-and-update screen of one user.
    UpdateUser { id: String },
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::UserList => write!(f, "/users"),
            Route::UpdateUser { id } => write!(f, "/users/update/{}", id),
        }
    }
}

/// History stack. The last entry is the current route.
#[derive(Debug, Default)]
pub struct Navigator {
    history: Vec<Route>,
}

impl Navigator {
    pub fn new(start: Route) -> Self {
        Self {
            history: vec![start],
        }
    }

    pub fn current(&self) -> Option<&Route> {
        self.history.last()
    }

    pub fn push(&mut self, route: Route) {
        self.history.push(route);
    }

    /// Return to the previous route. `None` when there is nothing behind the
    /// current one, in which case the history is left unchanged.
    pub fn back(&mut self) -> Option<&Route> {
        if self.history.len() < 2 {
            return None;
        }
        self.history.pop();
        self.history.last()
    }

    /// Land on the listing view whatever the history holds.
    pub fn redirect_to_list(&mut self) -> Route {
        self.push(Route::UserList);
        Route::UserList
    }
}
