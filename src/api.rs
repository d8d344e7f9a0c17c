use crate::{
    data::student::{StudentDraft, StudentId, StudentRecord},
    error::RosterResult,
};
use async_trait::async_trait;
use std::fmt::{Debug, Display, Formatter};

pub mod http;
#[cfg(test)]
pub mod testing;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ApiOperation {
    List,
    Create,
    Update,
    Delete,
}

impl Display for ApiOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::List => "list",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        })
    }
}

/// The backend that owns student records. Every call may fail; nothing is cached at this layer.
#[async_trait]
pub trait StudentApi: Debug + Send + Sync {
    /// All records, in the order the backend returns them.
    async fn list(&self) -> RosterResult<Vec<StudentRecord>>;
    async fn create(&self, draft: &StudentDraft) -> RosterResult<()>;
    async fn update(&self, id: &StudentId, draft: &StudentDraft) -> RosterResult<()>;
    async fn delete(&self, id: &StudentId) -> RosterResult<()>;
}
