use std::fmt::{Debug, Display};
use std::hash::Hash;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, instrument};

use crate::storage::StorageError;

// =============================================================================
// 1. THE ABSTRACTION (Entity + Table backend)
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Copy + Eq + Hash + Send + Sync + Display + Debug;
    type Fields: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;

    /// Table name, used for span fields.
    const TABLE: &'static str;

    fn id(&self) -> Self::Id;

    /// Construct the full Entity from the assigned ID and the insert payload
    fn from_create(id: Self::Id, fields: Self::Fields) -> Self;

    /// Apply a partial update in place
    fn on_update(&mut self, patch: Self::Patch);
}

/// Synchronous storage behind a ResourceActor. The actor is the only caller,
/// so implementations never see two operations at once.
pub trait Table<T: Entity>: Send + 'static {
    fn insert(&mut self, fields: T::Fields) -> Result<T::Id, StorageError>;
    fn get(&self, id: T::Id) -> Result<Option<T>, StorageError>;
    fn list(&self) -> Result<Vec<T>, StorageError>;
    /// Returns the number of rows changed: 0 when `id` matched nothing.
    fn update(&mut self, id: T::Id, patch: T::Patch) -> Result<usize, StorageError>;
    /// Returns the number of rows removed: 0 when `id` matched nothing.
    fn delete(&mut self, id: T::Id) -> Result<usize, StorageError>;
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped the response")]
    ActorDropped,
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<StorageError> for FrameworkError {
    fn from(e: StorageError) -> Self {
        FrameworkError::Storage(e.to_string())
    }
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Insert {
        fields: T::Fields,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<usize>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<usize>,
    },
    Shutdown,
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    table: Box<dyn Table<T>>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(buffer_size: usize, table: impl Table<T>) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            table: Box::new(table),
        };
        (actor, ResourceClient::new(sender))
    }

    #[instrument(name = "store_actor", skip(self), fields(table = T::TABLE))]
    pub async fn run(mut self) {
        info!("Store actor starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Insert { fields, respond_to } => {
                    let _ = respond_to.send(self.handle_insert(fields));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(self.handle_get(id));
                }
                ResourceRequest::List { respond_to } => {
                    let _ = respond_to.send(self.handle_list());
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let _ = respond_to.send(self.handle_update(id, patch));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.handle_delete(id));
                }
                ResourceRequest::Shutdown => {
                    info!("Store actor shutting down");
                    break;
                }
            }
        }

        info!("Store actor stopped");
    }

    #[instrument(skip(self, fields))]
    fn handle_insert(&mut self, fields: T::Fields) -> Result<T::Id, FrameworkError> {
        debug!(?fields, "Processing insert request");
        match self.table.insert(fields) {
            Ok(id) => {
                info!(id = %id, "Row inserted");
                Ok(id)
            }
            Err(e) => {
                error!(error = %e, "Insert failed");
                Err(e.into())
            }
        }
    }

    #[instrument(skip(self))]
    fn handle_get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        debug!("Processing get request");
        let row = self.table.get(id).map_err(|e| {
            error!(error = %e, "Read failed");
            FrameworkError::from(e)
        })?;
        if row.is_none() {
            debug!("Row not found");
        }
        Ok(row)
    }

    #[instrument(skip(self))]
    fn handle_list(&self) -> Result<Vec<T>, FrameworkError> {
        debug!("Processing list request");
        let rows = self.table.list().map_err(|e| {
            error!(error = %e, "List failed");
            FrameworkError::from(e)
        })?;
        info!(row_count = rows.len(), "Listed rows");
        Ok(rows)
    }

    #[instrument(skip(self, patch))]
    fn handle_update(&mut self, id: T::Id, patch: T::Patch) -> Result<usize, FrameworkError> {
        debug!(?patch, "Processing update request");
        match self.table.update(id, patch) {
            Ok(rows_affected) => {
                info!(rows_affected, "Update applied");
                Ok(rows_affected)
            }
            Err(e) => {
                error!(error = %e, "Update failed");
                Err(e.into())
            }
        }
    }

    #[instrument(skip(self))]
    fn handle_delete(&mut self, id: T::Id) -> Result<usize, FrameworkError> {
        debug!("Processing delete request");
        match self.table.delete(id) {
            Ok(rows_affected) => {
                info!(rows_affected, "Delete applied");
                Ok(rows_affected)
            }
            Err(e) => {
                error!(error = %e, "Delete failed");
                Err(e.into())
            }
        }
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn insert(&self, fields: T::Fields) -> Result<T::Id, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Insert { fields, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { respond_to }).await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<usize, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update { id, patch, respond_to }).await
    }

    pub async fn delete(&self, id: T::Id) -> Result<usize, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }

    pub async fn shutdown(&self) -> Result<(), FrameworkError> {
        self.sender
            .send(ResourceRequest::Shutdown)
            .await
            .map_err(|_| FrameworkError::ActorClosed)
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
