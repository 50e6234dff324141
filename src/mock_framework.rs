//! # Mock Framework
//!
//! Utilities for testing store callers in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_insert`] or [`expect_update`] to assert behavior
//! and answer on the store's behalf, including with failures.

use tokio::sync::{mpsc, oneshot};

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};

type Responder<R> = oneshot::Sender<Result<R, FrameworkError>>;

/// Creates a mock client and a receiver for asserting requests.
///
/// No `ResourceActor` runs behind the client: the test reads each request off
/// `receiver` and decides the answer. An empty receiver proves a caller never
/// touched the store.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Insert request
pub async fn expect_insert<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Fields, Responder<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Insert { fields, respond_to }) => Some((fields, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, Responder<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, T::Patch, Responder<usize>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update { id, patch, respond_to }) => Some((id, patch, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, Responder<usize>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ProductClient;
    use crate::domain::{Product, ProductFields};
    use crate::product_store::ProductError;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let client = ProductClient::new(client);

        let insert_task = tokio::spawn(async move {
            client.insert_product(ProductFields::new("Test", 1, 2, "")).await
        });

        let (fields, responder) = expect_insert(&mut receiver).await.expect("Expected Insert request");
        assert_eq!(fields.name, "Test");
        responder.send(Ok(1)).unwrap();

        let result = insert_task.await.unwrap();
        assert_eq!(result, Ok(1));
    }

    #[tokio::test]
    async fn test_storage_failure_maps_to_persistence_error() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let client = ProductClient::new(client);

        let get_task = tokio::spawn(async move { client.get_product(3).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, 3);
        responder
            .send(Err(FrameworkError::Storage("database is locked".into())))
            .unwrap();

        let result = get_task.await.unwrap();
        assert_eq!(
            result,
            Err(ProductError::Persistence("database is locked".into()))
        );
    }

    #[tokio::test]
    async fn test_dropped_responder_maps_to_communication_error() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let client = ProductClient::new(client);

        let delete_task = tokio::spawn(async move { client.delete_product(3).await });

        let (_, responder) = expect_delete(&mut receiver).await.expect("Expected Delete request");
        drop(responder);

        let result = delete_task.await.unwrap();
        assert!(matches!(result, Err(ProductError::ActorCommunication(_))));
    }
}
