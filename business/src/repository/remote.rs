use flume::{Receiver, Sender};
use log::{debug, error, info};
use serde::Serialize;
use ustr::Ustr;

use super::{InMemoryRepository, Repository, RepositoryError};
use crate::management::crud::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOp {
    Create,
    Update,
    Delete,
}

/// Outcome of one write-through request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    Synced { op: SyncOp, id: Ustr },
    Failed { op: SyncOp, id: Ustr, error: String },
}

/// Optimistic write-through repository.
///
/// Reads and writes hit a local cache immediately so the UI never waits on
/// the network. Each write is then mirrored to the backend:
///
/// - create: `POST {collection}` with the record as JSON
/// - update: `PUT {collection}/{id}` with the record as JSON
/// - delete: `DELETE {collection}/{id}`
///
/// Results arrive on a channel; call [`Repository::poll_sync`] once per
/// frame to drain them.
#[derive(Debug)]
pub struct RemoteRepository<T> {
    cache: InMemoryRepository<T>,
    collection_url: String,
    sender: Sender<SyncEvent>,
    receiver: Receiver<SyncEvent>,
    in_flight: usize,
}

impl<T: Record + Serialize> RemoteRepository<T> {
    pub fn new(collection_url: impl Into<String>, seed: Vec<T>) -> Self {
        let (sender, receiver) = flume::unbounded();
        Self {
            cache: InMemoryRepository::new(seed),
            collection_url: collection_url.into().trim_end_matches('/').to_owned(),
            sender,
            receiver,
            in_flight: 0,
        }
    }

    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    /// A handle on the sync channel, mostly for tests that await it.
    pub fn events(&self) -> Receiver<SyncEvent> {
        self.receiver.clone()
    }

    /// Requests sent but not yet drained by [`Repository::poll_sync`].
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    fn record_url(&self, id: Ustr) -> String {
        format!("{}/{id}", self.collection_url)
    }

    fn send(&mut self, op: SyncOp, id: Ustr, request: ehttp::Request) {
        debug!("RemoteRepository: {} {}", request.method, request.url);
        self.in_flight += 1;
        let sender = self.sender.clone();

        ehttp::fetch(request, move |result| {
            let event = match result {
                Ok(response) if response.ok => {
                    info!("RemoteRepository: {op:?} {id} synced");
                    SyncEvent::Synced { op, id }
                }
                Ok(response) => {
                    let error = format!("Server error (status {})", response.status);
                    error!("RemoteRepository: {op:?} {id} failed: {error}");
                    SyncEvent::Failed { op, id, error }
                }
                Err(err) => {
                    let error = format!("Network error: {err}");
                    error!("RemoteRepository: {op:?} {id} failed: {error}");
                    SyncEvent::Failed { op, id, error }
                }
            };
            if sender.send(event).is_err() {
                debug!("RemoteRepository dropped before {op:?} {id} completed");
            }
        });
    }
}

fn json_request(method: &str, url: String, record: &impl Serialize) -> Result<ehttp::Request, RepositoryError> {
    let body = serde_json::to_vec(record).map_err(|e| RepositoryError::Remote(e.to_string()))?;
    let mut request = ehttp::Request::post(url, body);
    request.method = method.to_owned();
    request.headers.insert("Content-Type", "application/json");
    Ok(request)
}

impl<T: Record + Serialize> Repository<T> for RemoteRepository<T> {
    fn list(&self) -> &[T] {
        self.cache.list()
    }

    fn create(&mut self, record: T) -> Result<(), RepositoryError> {
        let id = record.id();
        let request = json_request("POST", self.collection_url.clone(), &record)?;
        self.cache.create(record)?;
        self.send(SyncOp::Create, id, request);
        Ok(())
    }

    fn update(&mut self, record: T) -> Result<(), RepositoryError> {
        let id = record.id();
        let request = json_request("PUT", self.record_url(id), &record)?;
        self.cache.update(record)?;
        self.send(SyncOp::Update, id, request);
        Ok(())
    }

    fn remove(&mut self, id: Ustr) -> Result<T, RepositoryError> {
        let removed = self.cache.remove(id)?;
        let mut request = ehttp::Request::get(self.record_url(id));
        request.method = "DELETE".to_owned();
        self.send(SyncOp::Delete, id, request);
        Ok(removed)
    }

    fn poll_sync(&mut self) -> Vec<SyncEvent> {
        let events: Vec<SyncEvent> = self.receiver.try_iter().collect();
        self.in_flight = self.in_flight.saturating_sub(events.len());
        events
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::time::Duration;

    use serde::Serialize;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::management::crud::ConfirmPrompt;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Door {
        id: Ustr,
        label: String,
    }

    impl Record for Door {
        type Draft = ();

        fn id(&self) -> Ustr {
            self.id
        }

        fn display_name(&self) -> &str {
            &self.label
        }

        fn delete_prompt(&self) -> ConfirmPrompt {
            ConfirmPrompt::delete("Delete door?", "")
        }
    }

    fn door(id: &str, label: &str) -> Door {
        Door {
            id: Ustr::from(id),
            label: label.to_owned(),
        }
    }

    async fn next_event(events: &Receiver<SyncEvent>) -> SyncEvent {
        tokio::time::timeout(Duration::from_secs(5), events.recv_async())
            .await
            .expect("sync event should arrive")
            .expect("channel open")
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_create_is_optimistic_and_posts_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/doors"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(json!({ "id": "dr-1", "label": "Front" })))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let mut repo = RemoteRepository::new(format!("{}/api/doors/", server.uri()), vec![]);
        let events = repo.events();
        repo.create(door("dr-1", "Front")).unwrap();

        assert_eq!(repo.list(), &[door("dr-1", "Front")]);
        assert_eq!(repo.in_flight(), 1);
        assert_eq!(
            next_event(&events).await,
            SyncEvent::Synced {
                op: SyncOp::Create,
                id: Ustr::from("dr-1")
            }
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_update_puts_to_record_url() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/doors/dr-1"))
            .and(body_json(json!({ "id": "dr-1", "label": "Rear" })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let mut repo =
            RemoteRepository::new(format!("{}/api/doors", server.uri()), vec![door("dr-1", "Front")]);
        let events = repo.events();
        repo.update(door("dr-1", "Rear")).unwrap();

        assert_eq!(repo.list()[0].label, "Rear");
        assert!(matches!(next_event(&events).await, SyncEvent::Synced { op: SyncOp::Update, .. }));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_delete_failure_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/doors/dr-1"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let mut repo =
            RemoteRepository::new(format!("{}/api/doors", server.uri()), vec![door("dr-1", "Front")]);
        let events = repo.events();
        let removed = repo.remove(Ustr::from("dr-1")).unwrap();

        assert_eq!(removed.label, "Front");
        assert!(repo.list().is_empty());
        match next_event(&events).await {
            SyncEvent::Failed { op, id, error } => {
                assert_eq!(op, SyncOp::Delete);
                assert_eq!(id, Ustr::from("dr-1"));
                assert!(error.contains("500"), "unexpected error: {error}");
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_local_errors_skip_the_network() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut repo = RemoteRepository::new(format!("{}/api/doors", server.uri()), vec![]);
        assert_eq!(
            repo.update(door("dr-9", "Ghost")),
            Err(RepositoryError::NotFound(Ustr::from("dr-9")))
        );
        assert_eq!(repo.in_flight(), 0);
    }

    #[test]
    fn test_poll_sync_drains_events() {
        let mut repo: RemoteRepository<Door> = RemoteRepository::new("http://unused/api/doors", vec![]);
        repo.in_flight = 2;
        repo.sender
            .send(SyncEvent::Synced {
                op: SyncOp::Create,
                id: Ustr::from("dr-1"),
            })
            .unwrap();

        assert_eq!(repo.poll_sync().len(), 1);
        assert_eq!(repo.in_flight(), 1);
        assert!(repo.poll_sync().is_empty());
    }
}
