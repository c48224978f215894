//! Leptos Task Scope
//!
//! Ties local futures to the component that spawned them.
//! When the owning component is cleaned up, every task still running is aborted.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::future::{AbortHandle, AbortRegistration, Abortable};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Handle to a set of abortable local tasks
#[derive(Clone, Default)]
pub struct TaskScope {
    inner: Arc<Mutex<ScopeInner>>,
}

#[derive(Default)]
struct ScopeInner {
    next_id: u64,
    handles: HashMap<u64, AbortHandle>,
    closed: bool,
}

impl TaskScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a future on the local executor, owned by this scope.
    ///
    /// Does nothing once the scope has been closed.
    pub fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + 'static,
    {
        match self.scoped(fut) {
            Some(task) => spawn_local(task),
            None => log::debug!("[SCOPE] spawn after close ignored"),
        }
    }

    /// Wrap a future so that closing the scope aborts it.
    /// The wrapper forgets itself once it finishes or is aborted.
    fn scoped<F>(&self, fut: F) -> Option<impl Future<Output = ()> + 'static>
    where
        F: Future<Output = ()> + 'static,
    {
        let (id, registration) = self.register()?;
        let scope = self.clone();
        Some(async move {
            if Abortable::new(fut, registration).await.is_err() {
                log::debug!("[SCOPE] task {} aborted", id);
            }
            scope.finish(id);
        })
    }

    /// Abort every outstanding task and refuse new ones
    pub fn close(&self) {
        let mut inner = self.lock();
        inner.closed = true;
        for (_, handle) in inner.handles.drain() {
            handle.abort();
        }
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Number of tasks spawned and not yet finished or aborted
    pub fn outstanding(&self) -> usize {
        self.lock().handles.len()
    }

    fn register(&self) -> Option<(u64, AbortRegistration)> {
        let mut inner = self.lock();
        if inner.closed {
            return None;
        }
        let (handle, registration) = AbortHandle::new_pair();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.handles.insert(id, handle);
        Some((id, registration))
    }

    fn finish(&self, id: u64) {
        self.lock().handles.remove(&id);
    }

    fn lock(&self) -> MutexGuard<'_, ScopeInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Create a task scope that closes when the current reactive owner is cleaned up.
///
/// Call this from a component body.
pub fn use_task_scope() -> TaskScope {
    let scope = TaskScope::new();
    let on_teardown = scope.clone();
    on_cleanup(move || on_teardown.close());
    scope
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use futures::channel::mpsc;
    use futures::executor::{block_on, LocalPool};
    use futures::future::{pending, Aborted};
    use futures::task::LocalSpawnExt;
    use futures::StreamExt;

    #[test]
    fn test_close_aborts_registered_tasks() {
        let scope = TaskScope::new();
        let (_, registration) = scope.register().unwrap();
        assert_eq!(scope.outstanding(), 1);

        scope.close();

        let result = block_on(Abortable::new(pending::<()>(), registration));
        assert_eq!(result, Err(Aborted));
        assert_eq!(scope.outstanding(), 0);
    }

    #[test]
    fn test_closed_scope_refuses_new_tasks() {
        let scope = TaskScope::new();
        scope.close();
        assert!(scope.is_closed());
        assert!(scope.register().is_none());
    }

    #[test]
    fn test_finished_task_is_forgotten() {
        let scope = TaskScope::new();
        let (first, _) = scope.register().unwrap();
        let (second, _) = scope.register().unwrap();
        assert_ne!(first, second);

        scope.finish(first);
        assert_eq!(scope.outstanding(), 1);
    }

    #[test]
    fn test_owner_cleanup_closes_scope() {
        let owner = Owner::new();
        let scope = owner.with(use_task_scope);
        assert!(!scope.is_closed());

        owner.cleanup();
        assert!(scope.is_closed());
    }

    #[test]
    fn test_close_stops_running_task() {
        let mut pool = LocalPool::new();
        let scope = TaskScope::new();
        let hits = Rc::new(Cell::new(0));
        let (tx, mut rx) = mpsc::unbounded::<()>();

        let counted = hits.clone();
        let task = scope
            .scoped(async move {
                while rx.next().await.is_some() {
                    counted.set(counted.get() + 1);
                }
            })
            .unwrap();
        pool.spawner().spawn_local(task).unwrap();

        tx.unbounded_send(()).unwrap();
        tx.unbounded_send(()).unwrap();
        pool.run_until_stalled();
        assert_eq!(hits.get(), 2);
        assert_eq!(scope.outstanding(), 1);

        scope.close();
        tx.unbounded_send(()).unwrap();
        pool.run_until_stalled();
        assert_eq!(hits.get(), 2);
        assert_eq!(scope.outstanding(), 0);
        assert!(scope.scoped(async {}).is_none());
    }

    #[test]
    fn test_finished_task_leaves_scope() {
        let mut pool = LocalPool::new();
        let scope = TaskScope::new();
        pool.spawner().spawn_local(scope.scoped(async {}).unwrap()).unwrap();
        assert_eq!(scope.outstanding(), 1);

        pool.run_until_stalled();
        assert_eq!(scope.outstanding(), 0);
        assert!(!scope.is_closed());
    }

    #[test]
    fn test_clones_share_state() {
        let scope = TaskScope::new();
        let other = scope.clone();
        let _ = scope.register().unwrap();
        other.close();
        assert!(scope.is_closed());
        assert_eq!(scope.outstanding(), 0);
    }
}
