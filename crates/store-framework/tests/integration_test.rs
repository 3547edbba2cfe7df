use store_framework::mock::{MockBackend, MockCall};
use store_framework::{ApiError, FrameworkError, StoreActor, StoreEntity};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Ticket {
    id: Option<u32>,
    title: String,
    closed: bool,
}

#[derive(Debug)]
struct TicketDraft {
    title: String,
}

#[derive(Debug, thiserror::Error)]
#[error("Ticket title is empty")]
struct EmptyTitle;

impl StoreEntity for Ticket {
    type Id = u32;
    type Draft = TicketDraft;
    type Error = EmptyTitle;

    fn id(&self) -> Option<&u32> {
        self.id.as_ref()
    }

    fn can_advance(&self) -> bool {
        !self.closed
    }

    fn validate_draft(draft: &TicketDraft) -> Result<(), EmptyTitle> {
        if draft.title.is_empty() {
            Err(EmptyTitle)
        } else {
            Ok(())
        }
    }
}

fn ticket(id: u32, title: &str) -> Ticket {
    Ticket {
        id: Some(id),
        title: title.to_string(),
        closed: false,
    }
}

fn closed(id: u32, title: &str) -> Ticket {
    Ticket {
        closed: true,
        ..ticket(id, title)
    }
}

// --- Tests ---

#[tokio::test]
async fn test_store_full_lifecycle() {
    let mut backend = MockBackend::<Ticket>::new();
    backend
        .expect_list()
        .return_ok(vec![ticket(1, "Leak"), ticket(2, "Noise")]);
    backend.expect_create().return_ok(ticket(3, "Smoke"));
    backend.expect_advance(2).return_ok(closed(2, "Noise"));
    backend.expect_delete(1).return_ok();

    let (actor, client) = StoreActor::new(10);
    let handle = tokio::spawn(actor.run(backend.clone()));

    // 1. Refresh mirrors the backend exactly
    let listed = client.refresh().await.unwrap();
    assert_eq!(listed, vec![ticket(1, "Leak"), ticket(2, "Noise")]);

    // 2. Create prepends
    let created = client
        .create(TicketDraft {
            title: "Smoke".into(),
        })
        .await
        .unwrap();
    assert_eq!(created.id, Some(3));
    let ids: Vec<_> = client
        .snapshot()
        .await
        .unwrap()
        .iter()
        .filter_map(|t| t.id)
        .collect();
    assert_eq!(ids, vec![3, 1, 2]);

    // 3. Advance replaces exactly one entry
    client.advance(2).await.unwrap();
    let items = client.snapshot().await.unwrap();
    assert_eq!(
        items,
        vec![ticket(3, "Smoke"), ticket(1, "Leak"), closed(2, "Noise")]
    );

    // 4. Delete removes the entry
    client.delete(1).await.unwrap();
    assert!(client.get(1).await.unwrap().is_none());
    assert_eq!(client.snapshot().await.unwrap().len(), 2);

    backend.verify();
    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_failed_refresh_keeps_current_list() {
    let mut backend = MockBackend::<Ticket>::new();
    backend.expect_list().return_ok(vec![ticket(1, "Leak")]);
    backend
        .expect_list()
        .return_err(ApiError::Network("connection refused".into()));

    let (actor, client) = StoreActor::new(10);
    tokio::spawn(actor.run(backend.clone()));

    client.refresh().await.unwrap();
    let result = client.refresh().await;
    assert!(matches!(
        result,
        Err(FrameworkError::Api(ApiError::Network(_)))
    ));
    assert_eq!(client.snapshot().await.unwrap(), vec![ticket(1, "Leak")]);
    backend.verify();
}

#[tokio::test]
async fn test_invalid_draft_never_reaches_backend() {
    let backend = MockBackend::<Ticket>::new();
    let (actor, client) = StoreActor::new(10);
    tokio::spawn(actor.run(backend.clone()));

    let result = client
        .create(TicketDraft {
            title: String::new(),
        })
        .await;
    assert!(matches!(result, Err(FrameworkError::EntityError(_))));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_created_entity_without_id_is_malformed() {
    let mut backend = MockBackend::<Ticket>::new();
    backend.expect_create().return_ok(Ticket {
        id: None,
        title: "Ghost".into(),
        closed: false,
    });

    let (actor, client) = StoreActor::new(10);
    tokio::spawn(actor.run(backend.clone()));

    let result = client
        .create(TicketDraft {
            title: "Ghost".into(),
        })
        .await;
    assert!(matches!(
        result,
        Err(FrameworkError::Api(ApiError::Malformed(_)))
    ));
    assert!(client.snapshot().await.unwrap().is_empty());
    backend.verify();
}

#[tokio::test]
async fn test_advance_unknown_id_skips_backend() {
    let backend = MockBackend::<Ticket>::new();
    let (actor, client) = StoreActor::new(10);
    tokio::spawn(actor.run(backend.clone()));

    let result = client.advance(42).await;
    assert!(matches!(result, Err(FrameworkError::NotFound(id)) if id == "42"));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_advance_terminal_entity_skips_backend() {
    let mut backend = MockBackend::<Ticket>::new();
    backend.expect_list().return_ok(vec![closed(5, "Rattle")]);

    let (actor, client) = StoreActor::new(10);
    tokio::spawn(actor.run(backend.clone()));

    client.refresh().await.unwrap();
    let result = client.advance(5).await;
    assert!(matches!(result, Err(FrameworkError::CannotAdvance(id)) if id == "5"));
    assert_eq!(client.snapshot().await.unwrap(), vec![closed(5, "Rattle")]);
    assert_eq!(backend.calls(), vec![MockCall::List]);
    backend.verify();
}

#[tokio::test]
async fn test_failed_delete_keeps_entry() {
    let mut backend = MockBackend::<Ticket>::new();
    backend.expect_list().return_ok(vec![ticket(1, "Leak")]);
    backend.expect_delete(1).return_err(ApiError::Status {
        status: 500,
        body: "boom".into(),
    });
    backend.expect_delete(9).return_ok();

    let (actor, client) = StoreActor::new(10);
    tokio::spawn(actor.run(backend.clone()));

    client.refresh().await.unwrap();
    let result = client.delete(1).await;
    assert!(matches!(
        result,
        Err(FrameworkError::Api(ApiError::Status { status: 500, .. }))
    ));
    assert_eq!(client.snapshot().await.unwrap().len(), 1);

    // Deleting an id that is not mirrored still asks the backend and is a local no-op
    client.delete(9).await.unwrap();
    assert_eq!(client.snapshot().await.unwrap().len(), 1);

    assert_eq!(
        backend.calls(),
        vec![MockCall::List, MockCall::Delete(1), MockCall::Delete(9)]
    );
    backend.verify();
}

#[tokio::test]
async fn test_closed_store_reports_error() {
    let (actor, client) = StoreActor::<Ticket>::new(10);
    drop(actor);

    let result = client.snapshot().await;
    assert!(matches!(result, Err(FrameworkError::StoreClosed)));
}
