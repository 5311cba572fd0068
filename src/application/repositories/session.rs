//! SessionRepository - scheduled sessions with date-indexed listing.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, warn};

use super::ClientRepository;
use crate::domain::foundation::{DomainError, SessionId, TenantId};
use crate::domain::session::{sort_by_time, NewSession, Session, SessionUpdate};
use crate::ports::{Clock, SessionStore, TenantRepository};

/// Session repository over any `SessionStore` backend.
///
/// Creation looks the client up through `ClientRepository` and copies its
/// current name onto the session. The lookup and the insert are two separate
/// steps; a client deleted in between still yields a session.
pub struct SessionRepository {
    store: Arc<dyn SessionStore>,
    clients: Arc<ClientRepository>,
    clock: Arc<dyn Clock>,
}

impl SessionRepository {
    pub fn new(
        store: Arc<dyn SessionStore>,
        clients: Arc<ClientRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            clients,
            clock,
        }
    }

    /// Sessions on `date`, ordered by time with ties in insertion order.
    pub async fn list_by_date(
        &self,
        tenant: &TenantId,
        date: NaiveDate,
    ) -> Result<Vec<Session>, DomainError> {
        let mut sessions = self.store.list_on_date(tenant, date).await?;
        sort_by_time(&mut sessions);
        debug!(tenant = %tenant, %date, count = sessions.len(), "sessions by date");
        Ok(sessions)
    }

    /// Sessions on the current UTC date.
    pub async fn list_today(&self, tenant: &TenantId) -> Result<Vec<Session>, DomainError> {
        self.list_by_date(tenant, self.clock.today()).await
    }
}

#[async_trait]
impl TenantRepository for SessionRepository {
    type Entity = Session;
    type Id = SessionId;
    type Create = NewSession;
    type Update = SessionUpdate;

    async fn create(&self, tenant: &TenantId, payload: &NewSession) -> Result<SessionId, DomainError> {
        let client = match self.clients.get(&payload.client_id, tenant).await? {
            Some(client) => client,
            None => {
                warn!(tenant = %tenant, client_id = %payload.client_id, "session for unknown client");
                return Err(DomainError::validation(
                    "client_id",
                    format!("Client {} not found", payload.client_id),
                ));
            }
        };

        let id = SessionId::generate();
        let session = Session::schedule(
            id.clone(),
            tenant.clone(),
            payload,
            client.name,
            self.clock.now(),
        );
        self.store.insert(&session).await?;

        debug!(tenant = %tenant, session_id = %id, client_id = %payload.client_id, "session created");
        Ok(id)
    }

    async fn get(&self, id: &SessionId, tenant: &TenantId) -> Result<Option<Session>, DomainError> {
        self.store.find(tenant, id).await
    }

    async fn list(&self, tenant: &TenantId) -> Result<Vec<Session>, DomainError> {
        self.store.list(tenant).await
    }

    async fn update(
        &self,
        id: &SessionId,
        tenant: &TenantId,
        partial: &SessionUpdate,
    ) -> Result<bool, DomainError> {
        let updated = self
            .store
            .update(tenant, id, partial, self.clock.now())
            .await?;
        debug!(tenant = %tenant, session_id = %id, updated, "session update");
        Ok(updated)
    }

    async fn delete(&self, id: &SessionId, tenant: &TenantId) -> Result<bool, DomainError> {
        let deleted = self.store.delete(tenant, id).await?;
        debug!(tenant = %tenant, session_id = %id, deleted, "session delete");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use crate::adapters::memory::{InMemoryClientStore, InMemorySessionStore};
    use crate::domain::client::{sample_new_client, ClientUpdate};
    use crate::domain::foundation::{ClientId, ErrorCode, SessionStatus};

    struct Fixture {
        clients: Arc<ClientRepository>,
        sessions: SessionRepository,
        tenant: TenantId,
    }

    fn fixture() -> Fixture {
        let clock = Arc::new(FixedClock::at("2024-06-10T09:00:00Z").unwrap());
        let clients = Arc::new(ClientRepository::new(
            Arc::new(InMemoryClientStore::new()),
            clock.clone(),
        ));
        let sessions =
            SessionRepository::new(Arc::new(InMemorySessionStore::new()), clients.clone(), clock);
        Fixture {
            clients,
            sessions,
            tenant: TenantId::new("admin").unwrap(),
        }
    }

    fn new_session(client_id: &ClientId, date: &str, time: &str) -> NewSession {
        NewSession {
            client_id: client_id.clone(),
            date: date.parse().unwrap(),
            time: time.parse().unwrap(),
            notes: None,
        }
    }

    #[tokio::test]
    async fn create_fails_for_unknown_client_and_persists_nothing() {
        let f = fixture();
        let ghost = ClientId::new("ghost").unwrap();

        let err = f
            .sessions
            .create(&f.tenant, &new_session(&ghost, "2024-06-10", "09:00"))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(f.sessions.list(&f.tenant).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_fails_for_client_of_another_tenant() {
        let f = fixture();
        let other = TenantId::new("other").unwrap();
        let client_id = f.clients.create(&other, &sample_new_client("Ana")).await.unwrap();

        let result = f
            .sessions
            .create(&f.tenant, &new_session(&client_id, "2024-06-10", "09:00"))
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn client_name_is_captured_at_creation_and_never_synced() {
        let f = fixture();
        let client_id = f.clients.create(&f.tenant, &sample_new_client("Ana")).await.unwrap();
        let id = f
            .sessions
            .create(&f.tenant, &new_session(&client_id, "2024-06-10", "09:00"))
            .await
            .unwrap();

        let rename = ClientUpdate {
            name: Some("Ana Maria".to_string()),
            ..Default::default()
        };
        f.clients.update(&client_id, &f.tenant, &rename).await.unwrap();
        f.clients.delete(&client_id, &f.tenant).await.unwrap();

        let session = f.sessions.get(&id, &f.tenant).await.unwrap().unwrap();
        assert_eq!(session.client_name, "Ana");
        assert_eq!(session.status, SessionStatus::Scheduled);
    }

    #[tokio::test]
    async fn list_by_date_sorts_by_time_with_stable_ties() {
        let f = fixture();
        let client_id = f.clients.create(&f.tenant, &sample_new_client("Ana")).await.unwrap();
        let mut ids = Vec::new();
        for time in ["10:00", "08:30", "10:00"] {
            ids.push(
                f.sessions
                    .create(&f.tenant, &new_session(&client_id, "2024-06-10", time))
                    .await
                    .unwrap(),
            );
        }
        f.sessions
            .create(&f.tenant, &new_session(&client_id, "2024-06-11", "07:00"))
            .await
            .unwrap();

        let listed = f
            .sessions
            .list_by_date(&f.tenant, "2024-06-10".parse().unwrap())
            .await
            .unwrap();

        let listed_ids: Vec<SessionId> = listed.into_iter().map(|s| s.id).collect();
        assert_eq!(listed_ids, vec![ids[1].clone(), ids[0].clone(), ids[2].clone()]);
    }

    #[tokio::test]
    async fn list_today_uses_the_clock_date() {
        let f = fixture();
        let client_id = f.clients.create(&f.tenant, &sample_new_client("Ana")).await.unwrap();
        f.sessions
            .create(&f.tenant, &new_session(&client_id, "2024-06-10", "18:00"))
            .await
            .unwrap();
        f.sessions
            .create(&f.tenant, &new_session(&client_id, "2024-06-09", "18:00"))
            .await
            .unwrap();

        let today = f.sessions.list_today(&f.tenant).await.unwrap();

        assert_eq!(today.len(), 1);
        assert_eq!(today[0].date.to_string(), "2024-06-10");
    }

    #[tokio::test]
    async fn update_changes_status_only() {
        let f = fixture();
        let client_id = f.clients.create(&f.tenant, &sample_new_client("Ana")).await.unwrap();
        let id = f
            .sessions
            .create(&f.tenant, &new_session(&client_id, "2024-06-10", "09:00"))
            .await
            .unwrap();

        let update = SessionUpdate {
            status: Some(SessionStatus::Cancelled),
            ..Default::default()
        };
        assert!(f.sessions.update(&id, &f.tenant, &update).await.unwrap());

        let session = f.sessions.get(&id, &f.tenant).await.unwrap().unwrap();
        assert_eq!(session.status, SessionStatus::Cancelled);
        assert_eq!(session.time.to_string(), "09:00");
    }

    #[tokio::test]
    async fn missing_session_is_not_found_not_error() {
        let f = fixture();
        let id = SessionId::new("missing").unwrap();

        assert!(f.sessions.get(&id, &f.tenant).await.unwrap().is_none());
        assert!(!f.sessions.update(&id, &f.tenant, &SessionUpdate::default()).await.unwrap());
        assert!(!f.sessions.delete(&id, &f.tenant).await.unwrap());
    }
}
