//! Per-client busy flag: at most one outstanding model request of each kind per client.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Header clients use to identify their submissions.
pub const CLIENT_ID_HEADER: &str = "x-client-id";

/// The model-backed operation a busy flag belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Prediction,
    Report,
}

type BusySet = Arc<Mutex<HashSet<(String, RequestKind)>>>;

#[derive(Clone, Default)]
pub struct InFlightRequests {
    clients: BusySet,
}

impl InFlightRequests {
    /// Marks `client_id` busy for `kind`. Returns `None` when that client
    /// already has a request of the same kind outstanding.
    ///
    /// The flag clears when the returned guard is dropped, whether the request
    /// succeeded, failed or was cancelled.
    pub fn try_acquire(&self, client_id: &str, kind: RequestKind) -> Option<InFlightGuard> {
        let key = (client_id.to_string(), kind);
        let mut clients = self.clients.lock().unwrap_or_else(|e| e.into_inner());
        if !clients.insert(key.clone()) {
            return None;
        }
        Some(InFlightGuard {
            clients: Arc::clone(&self.clients),
            key,
        })
    }

    #[cfg(test)]
    pub fn is_busy(&self, client_id: &str, kind: RequestKind) -> bool {
        self.clients
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(&(client_id.to_string(), kind))
    }
}

pub struct InFlightGuard {
    clients: BusySet,
    key: (String, RequestKind),
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        let mut clients = self.clients.lock().unwrap_or_else(|e| e.into_inner());
        clients.remove(&self.key);
    }
}
