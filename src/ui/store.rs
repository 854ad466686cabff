//! Runtime that drives a [`Reducer`].
//!
//! One consumer task owns the state and applies actions strictly in the
//! order they were queued, each reduction running to completion before the
//! next starts. Effects run on their own tasks and feed actions back into
//! the same queue, so their results are ordinary actions.

use futures::StreamExt;
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::task::{JoinHandle, JoinSet};

use crate::lifetime::LifetimeHandle;
use crate::ui::mvi::{Effect, Reducer};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    #[error("store has been torn down")]
    Closed,
}

/// Cloneable entry point used by the view to dispatch actions and read state.
pub struct StoreHandle<R: Reducer> {
    sender: mpsc::UnboundedSender<R::Action>,
    state: watch::Receiver<R::State>,
}

impl<R: Reducer> Clone for StoreHandle<R> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            state: self.state.clone(),
        }
    }
}

impl<R: Reducer> StoreHandle<R> {
    /// Queue an action behind everything already queued.
    pub fn send(&self, action: R::Action) -> Result<(), StoreError> {
        self.sender.send(action).map_err(|_| StoreError::Closed)
    }

    /// Snapshot of the latest published state.
    pub fn state(&self) -> R::State {
        self.state.borrow().clone()
    }

    /// Receiver notified every time the state changes.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.state.clone()
    }

    /// Wait until the published state satisfies `predicate`.
    pub async fn wait_for<F>(&self, predicate: F) -> Result<R::State, StoreError>
    where
        F: FnMut(&R::State) -> bool,
    {
        let mut receiver = self.state.clone();
        let state = receiver
            .wait_for(predicate)
            .await
            .map_err(|_| StoreError::Closed)?;
        Ok(state.clone())
    }
}

pub struct Store<R: Reducer> {
    reducer: R,
    state: R::State,
    sender: mpsc::UnboundedSender<R::Action>,
    receiver: mpsc::UnboundedReceiver<R::Action>,
    published: watch::Sender<R::State>,
    effects: JoinSet<()>,
    lifetime: LifetimeHandle,
}

impl<R: Reducer> Store<R> {
    /// Start the store on the current tokio runtime.
    ///
    /// The returned join handle resolves to the final state once `lifetime`
    /// ends. Running effects are cancelled at that point. The store keeps a
    /// sender for its own effects, so dropping every [`StoreHandle`] does not
    /// stop it; only the lifetime does.
    pub fn spawn(
        reducer: R,
        initial_state: R::State,
        lifetime: LifetimeHandle,
    ) -> (StoreHandle<R>, JoinHandle<R::State>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let (published, state) = watch::channel(initial_state.clone());

        let store = Self {
            reducer,
            state: initial_state,
            sender: sender.clone(),
            receiver,
            published,
            effects: JoinSet::new(),
            lifetime,
        };

        let handle = StoreHandle { sender, state };
        (handle, tokio::spawn(store.run()))
    }

    async fn run(mut self) -> R::State {
        let lifetime = self.lifetime.clone();
        loop {
            tokio::select! {
                biased;
                _ = lifetime.ended() => break,
                Some(action) = self.receiver.recv() => self.apply(action),
                Some(joined) = self.effects.join_next(), if !self.effects.is_empty() => {
                    if let Err(err) = joined {
                        if err.is_panic() {
                            tracing::error!(error = %err, "effect task panicked");
                        }
                    }
                }
            }
        }

        tracing::debug!(running_effects = self.effects.len(), "store shutting down");
        self.effects.shutdown().await;
        self.state
    }

    fn apply(&mut self, action: R::Action) {
        tracing::trace!(?action, "reducing action");
        let previous = std::mem::take(&mut self.state);
        let (next, effect) = self.reducer.reduce(previous, action);
        self.state = next;

        let state = &self.state;
        self.published.send_if_modified(|published| {
            if published == state {
                false
            } else {
                *published = state.clone();
                true
            }
        });

        self.execute(effect);
    }

    fn execute(&mut self, effect: Effect<R::Action>) {
        match effect {
            Effect::None => {}
            Effect::Send(action) => {
                // The store holds a sender, so the queue outlives this call.
                let _ = self.sender.send(action);
            }
            Effect::Future(future) => {
                let sender = self.sender.clone();
                let lifetime = self.lifetime.clone();
                self.effects.spawn(async move {
                    tokio::select! {
                        _ = lifetime.ended() => {}
                        action = future => {
                            if let Some(action) = action {
                                let _ = sender.send(action);
                            }
                        }
                    }
                });
            }
            Effect::Stream(mut stream) => {
                let sender = self.sender.clone();
                let lifetime = self.lifetime.clone();
                tracing::debug!("starting long-running effect");
                self.effects.spawn(async move {
                    loop {
                        tokio::select! {
                            _ = lifetime.ended() => break,
                            next = stream.next() => match next {
                                Some(action) => {
                                    if sender.send(action).is_err() {
                                        break;
                                    }
                                }
                                None => break,
                            },
                        }
                    }
                    tracing::debug!("long-running effect finished");
                });
            }
            Effect::Merge(effects) => {
                for effect in effects {
                    self.execute(effect);
                }
            }
        }
    }
}
