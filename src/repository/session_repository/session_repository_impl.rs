use super::SessionRepository;
use crate::{
    auth::{Role, Session},
    repository::{Error, KeyValueStore},
};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

pub const USER_ID_KEY: &str = "userId";
pub const USER_OBJECT_KEY: &str = "userObj";

#[derive(Deserialize)]
struct UserObjectEntity {
    #[serde(default, alias = "_id")]
    id: Option<String>,
    #[serde(default)]
    role: Option<String>,
}

pub struct SessionRepositoryImpl {
    store: Arc<dyn KeyValueStore>,
}

impl SessionRepositoryImpl {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    ///
    /// User id is written either as a bare string or as a JSON string,
    /// depending on the screen that stored it.
    ///
    fn parse_user_id(value: &str) -> Option<String> {
        let user_id = serde_json::from_str::<String>(value)
            .unwrap_or_else(|_| value.trim().to_string());

        match user_id.is_empty() {
            true => None,
            false => Some(user_id),
        }
    }
}

#[async_trait]
impl SessionRepository for SessionRepositoryImpl {
    async fn find_session(&self) -> Result<Session, Error> {
        let user_id = self
            .store
            .get(USER_ID_KEY)
            .await?
            .and_then(|value| Self::parse_user_id(&value));

        let user_object = match self.store.get(USER_OBJECT_KEY).await? {
            Some(json) => serde_json::from_str::<Option<UserObjectEntity>>(&json)?,
            None => None,
        };

        let (object_id, role) = match user_object {
            Some(UserObjectEntity { id, role }) => (id, role.unwrap_or_default()),
            None => (None, String::new()),
        };

        let session = Session::new(user_id.or(object_id), Role::parse(&role));
        tracing::trace!(?session, "found session");

        Ok(session)
    }
}
