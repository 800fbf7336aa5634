//! AppMessage enum for results coming back from spawned fetch tasks.

use crate::error::FetchResult;
use crate::fetch::MountId;
use crate::models::{Starship, StarshipPage};

/// Messages received from async operations.
///
/// Every message names the mount that requested it; the app drops messages
/// for pages that are no longer mounted.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Detail fetch finished
    StarshipFetched {
        mount_id: MountId,
        result: FetchResult<Starship>,
    },
    /// List fetch finished
    StarshipsFetched {
        mount_id: MountId,
        result: FetchResult<StarshipPage>,
    },
}

impl AppMessage {
    pub fn mount_id(&self) -> MountId {
        match self {
            AppMessage::StarshipFetched { mount_id, .. }
            | AppMessage::StarshipsFetched { mount_id, .. } => *mount_id,
        }
    }
}
