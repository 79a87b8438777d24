use contracts::system::auth::UserIdentity;
use web_sys::window;

pub const TOKEN_KEY: &str = "authToken";
pub const USER_KEY: &str = "authUser";

/// Постоянное key/value хранилище сессии
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`; без доступного хранилища операции ничего не делают
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

impl SessionStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Сохранить токен и пользователя
pub fn save_session(store: &impl SessionStore, token: &str, user: &UserIdentity) {
    store.set(TOKEN_KEY, token);
    match serde_json::to_string(user) {
        Ok(json) => store.set(USER_KEY, &json),
        Err(e) => log::warn!("Failed to serialize user identity: {}", e),
    }
}

pub fn load_token(store: &impl SessionStore) -> Option<String> {
    store.get(TOKEN_KEY).filter(|t| !t.is_empty())
}

pub fn load_user(store: &impl SessionStore) -> Option<UserIdentity> {
    let json = store.get(USER_KEY)?;
    serde_json::from_str(&json).ok()
}

/// Очистить все данные аутентификации
pub fn clear_session(store: &impl SessionStore) {
    store.remove(TOKEN_KEY);
    store.remove(USER_KEY);
}

#[cfg(test)]
pub(crate) mod memory {
    use super::SessionStore;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    pub struct MemoryStore {
        pub items: RefCell<HashMap<String, String>>,
    }

    impl SessionStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.items
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.items.borrow_mut().remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;

    #[test]
    fn test_save_load_clear() {
        let store = MemoryStore::default();
        let user = UserIdentity {
            username: "admin".to_string(),
            name: Some("Admin".to_string()),
        };
        save_session(&store, "tok-1", &user);
        assert_eq!(load_token(&store).as_deref(), Some("tok-1"));
        assert_eq!(load_user(&store), Some(user));

        clear_session(&store);
        assert_eq!(load_token(&store), None);
        assert_eq!(load_user(&store), None);
    }

    #[test]
    fn test_corrupt_user_is_ignored() {
        let store = MemoryStore::default();
        store.set(USER_KEY, "{not json");
        assert_eq!(load_user(&store), None);
    }
}
