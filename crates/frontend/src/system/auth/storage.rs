use contracts::system::auth::UserInfo;
use web_sys::window;

const SESSION_USER_KEY: &str = "session_user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist the signed-in user so a page reload keeps the session
pub fn save_session(user: &UserInfo) {
    if let (Some(storage), Ok(json)) = (get_local_storage(), serde_json::to_string(user)) {
        let _ = storage.set_item(SESSION_USER_KEY, &json);
    }
}

/// Restore the signed-in user from localStorage, if any
pub fn load_session() -> Option<UserInfo> {
    let json = get_local_storage()?.get_item(SESSION_USER_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_USER_KEY);
    }
}
