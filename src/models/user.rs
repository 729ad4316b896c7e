use serde::Serialize;
use std::collections::BTreeMap;

pub type UserId = u32;

/// User record as exposed by `/api/v1/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub user_id: UserId,
    pub name: String,
    #[serde(skip)]
    pub avatar: String,
}

/// Users keyed by id, built from the users XML file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDirectory {
    users: BTreeMap<UserId, User>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, user: User) {
        self.users.insert(user.user_id, user);
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn avatar(&self, id: UserId) -> Option<&str> {
        self.users.get(&id).map(|u| u.avatar.as_str())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Users in dropdown order: by name, then by id.
    pub fn listing(&self) -> Vec<&User> {
        let mut out: Vec<&User> = self.users.values().collect();
        out.sort_by(|a, b| a.name.cmp(&b.name).then(a.user_id.cmp(&b.user_id)));
        out
    }
}
