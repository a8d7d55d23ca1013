use std::{cell::Cell, future::Future, rc::Rc, time::Duration};

/// Cancellation flag shared by every task a component spawns.
///
/// Results that resolve after the scope is cancelled are dropped instead of
/// being written into signals that may already be disposed.
#[derive(Clone, Default)]
pub struct TaskScope {
    cancelled: Rc<Cell<bool>>,
}

impl TaskScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scope that is cancelled when the current reactive owner is cleaned up.
    pub fn for_component() -> Self {
        let scope = Self::new();
        let on_drop = scope.clone();
        leptos::on_cleanup(move || on_drop.cancel());
        scope
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Awaits `fut`, yielding `None` when the scope was cancelled in the meantime.
    pub async fn guard<T>(&self, fut: impl Future<Output = T>) -> Option<T> {
        let output = fut.await;
        if self.is_cancelled() {
            log::debug!("discarding result of a cancelled task");
            None
        } else {
            Some(output)
        }
    }

    pub fn spawn<T: 'static>(
        &self,
        fut: impl Future<Output = T> + 'static,
        apply: impl FnOnce(T) + 'static,
    ) {
        let scope = self.clone();
        leptos::spawn_local(async move {
            if let Some(output) = scope.guard(fut).await {
                apply(output);
            }
        });
    }
}

/// Runs `tick` repeatedly, sleeping between runs, until `scope` is cancelled.
pub async fn run_polling<T, TF, S, SF>(scope: TaskScope, mut tick: T, mut sleep: S)
where
    T: FnMut() -> TF,
    TF: Future<Output = ()>,
    S: FnMut() -> SF,
    SF: Future<Output = ()>,
{
    while !scope.is_cancelled() {
        tick().await;
        if scope.is_cancelled() {
            break;
        }
        sleep().await;
    }
    log::debug!("polling stopped");
}

pub fn spawn_polling<T, TF>(scope: TaskScope, interval: Duration, tick: T)
where
    T: FnMut() -> TF + 'static,
    TF: Future<Output = ()> + 'static,
{
    leptos::spawn_local(run_polling(scope, tick, move || sleep(interval)));
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(_duration: Duration) {
    futures::future::pending::<()>().await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn cancel_is_shared_between_clones() {
        let scope = TaskScope::new();
        let clone = scope.clone();
        assert!(!clone.is_cancelled());
        scope.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn guard_drops_output_after_cancel() {
        let scope = TaskScope::new();
        assert_eq!(futures::executor::block_on(scope.guard(async { 7 })), Some(7));
        scope.cancel();
        assert_eq!(futures::executor::block_on(scope.guard(async { 7 })), None);
    }

    #[test]
    fn polling_stops_once_scope_is_cancelled() {
        let scope = TaskScope::new();
        let ticks = Rc::new(RefCell::new(0u32));
        let sleeps = Rc::new(RefCell::new(0u32));

        let tick_count = ticks.clone();
        let sleep_count = sleeps.clone();
        let stopper = scope.clone();
        futures::executor::block_on(run_polling(
            scope,
            move || {
                *tick_count.borrow_mut() += 1;
                async {}
            },
            move || {
                *sleep_count.borrow_mut() += 1;
                if *sleep_count.borrow() == 3 {
                    stopper.cancel();
                }
                async {}
            },
        ));

        assert_eq!(*ticks.borrow(), 3);
        assert_eq!(*sleeps.borrow(), 3);
    }
}
