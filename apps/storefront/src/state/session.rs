//! # Session Manager
//!
//! Holds the current user identity and authentication flag, restores the
//! session snapshot on startup, and authenticates against the fixed
//! mock credential table.
//!
//! Login failure is a normal negative result (`false`), never an error.
//! A snapshot that cannot be read or parsed degrades to "not
//! authenticated" - restoration never throws.

use std::sync::{Arc, Mutex};

use tracing::{debug, info, warn};

use namma_core::{Role, User};
use namma_store::{load_snapshot, save_snapshot, BlobStore, SESSION_KEY};

use crate::latency::Latency;

/// One row of the mock credential table.
struct Credential {
    id: &'static str,
    username: &'static str,
    password: &'static str,
    role: Role,
}

/// Fixed accounts: one username, two passwords, two roles.
const MOCK_CREDENTIALS: &[Credential] = &[
    Credential {
        id: "1",
        username: "nammarecipe",
        password: "user",
        role: Role::User,
    },
    Credential {
        id: "2",
        username: "nammarecipe",
        password: "admin",
        role: Role::Admin,
    },
];

#[derive(Debug, Default)]
struct SessionState {
    user: Option<User>,
    is_loading: bool,
}

/// The session state container.
pub struct SessionManager {
    store: Arc<dyn BlobStore>,
    latency: Latency,
    state: Mutex<SessionState>,
}

impl SessionManager {
    /// Creates a manager with no active session.
    pub fn new(store: Arc<dyn BlobStore>, latency: Latency) -> Self {
        SessionManager {
            store,
            latency,
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Attempts a login against the credential table.
    ///
    /// ## Behavior
    /// - Match: stores the password-stripped user in memory and in the
    ///   session blob, marks authenticated, returns `true`.
    /// - No match: returns `false`; prior session state is untouched.
    ///
    /// A failure to persist the snapshot is logged, not surfaced - the
    /// in-memory login still succeeds.
    pub async fn login(&self, username: &str, password: &str) -> bool {
        self.latency.wait_mutate().await;

        let Some(cred) = MOCK_CREDENTIALS
            .iter()
            .find(|c| c.username == username && c.password == password)
        else {
            debug!(username, "login rejected");
            return false;
        };

        let user = User {
            id: cred.id.to_string(),
            username: cred.username.to_string(),
            role: cred.role,
        };

        if let Err(e) = save_snapshot(self.store.as_ref(), SESSION_KEY, &user) {
            warn!(error = %e, "failed to persist session");
        }

        info!(user_id = %user.id, role = ?user.role, "login succeeded");
        let mut state = self.state.lock().expect("session mutex poisoned");
        state.user = Some(user);
        true
    }

    /// Clears the in-memory session and removes the persisted snapshot.
    pub fn logout(&self) {
        if let Err(e) = self.store.remove(SESSION_KEY) {
            warn!(error = %e, "failed to remove persisted session");
        }
        let mut state = self.state.lock().expect("session mutex poisoned");
        if let Some(user) = state.user.take() {
            info!(user_id = %user.id, "logged out");
        }
    }

    /// Restores a persisted session at startup.
    ///
    /// Sets the loading flag for the duration; a missing or unparseable
    /// snapshot leaves the manager unauthenticated. The loading flag is
    /// always cleared, read failure included.
    pub fn restore_session(&self) {
        {
            let mut state = self.state.lock().expect("session mutex poisoned");
            state.is_loading = true;
        }

        let restored = match load_snapshot::<User>(self.store.as_ref(), SESSION_KEY) {
            Ok(user) => user,
            Err(e) => {
                warn!(error = %e, "session restore failed; continuing unauthenticated");
                None
            }
        };

        let mut state = self.state.lock().expect("session mutex poisoned");
        if let Some(user) = restored {
            info!(user_id = %user.id, "session restored");
            state.user = Some(user);
        }
        state.is_loading = false;
    }

    /// The current user, if authenticated.
    pub fn current_user(&self) -> Option<User> {
        self.state
            .lock()
            .expect("session mutex poisoned")
            .user
            .clone()
    }

    /// Whether a user is currently authenticated.
    pub fn is_authenticated(&self) -> bool {
        self.state
            .lock()
            .expect("session mutex poisoned")
            .user
            .is_some()
    }

    /// Whether session restoration is in flight.
    pub fn is_loading(&self) -> bool {
        self.state.lock().expect("session mutex poisoned").is_loading
    }
}
