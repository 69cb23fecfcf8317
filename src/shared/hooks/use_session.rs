use crate::domain::models::User;
use crate::shared::constants::USER_KEY;
use crate::shared::logging::log_storage_error;
use crate::shared::static_data::demo_user;
use crate::shared::storage;
use dioxus::prelude::*;

/// Logged-in user, mirrored to local storage.
#[derive(Clone, Copy, PartialEq)]
pub struct Session {
    pub user: Signal<Option<User>>,
}

impl Session {
    pub fn login(&self, user: User) {
        if let Err(e) = storage::save_user(&user) {
            log_storage_error(USER_KEY, &e.to_string());
        }
        let mut current = self.user;
        current.set(Some(user));
    }

    pub fn logout(&self) {
        storage::clear_user();
        let mut current = self.user;
        current.set(None);
    }
}

/// Restore the stored user, signing in the demo user on first visit.
pub fn use_session_provider() -> Session {
    let user = use_signal(|| {
        storage::load_user().or_else(|| {
            let user = demo_user();
            if let Err(e) = storage::save_user(&user) {
                log_storage_error(USER_KEY, &e.to_string());
            }
            Some(user)
        })
    });
    use_context_provider(|| Session { user })
}

pub fn use_session() -> Session {
    use_context::<Session>()
}
