use super::Role;

///
/// Identity of the user the notifications are presented to.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: Option<String>,
    pub role: Role,
}

impl Session {
    pub fn new(user_id: Option<String>, role: Role) -> Self {
        Self { user_id, role }
    }

    ///
    /// Session used when nobody is logged in
    /// or when stored user information can't be read.
    ///
    pub fn anonymous() -> Self {
        Self {
            user_id: None,
            role: Role::Other(String::new()),
        }
    }
}
