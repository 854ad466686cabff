//! Effect descriptions returned by reducers.

use std::fmt;
use std::future::Future;

use futures::future::BoxFuture;
use futures::stream::{BoxStream, Stream, StreamExt};
use futures::FutureExt;

/// Side effect requested by a reducer.
///
/// Effects are plain values; the store decides when and where they run.
/// Every action an effect produces re-enters the reducer through the
/// store's ordered queue, so effects never touch state directly.
pub enum Effect<A> {
    /// Nothing to do.
    None,

    /// Enqueue an action behind anything already queued.
    Send(A),

    /// Single asynchronous operation, optionally producing one action.
    Future(BoxFuture<'static, Option<A>>),

    /// Long-running operation producing a sequence of actions.
    /// Runs until exhausted or until the owning screen is torn down.
    Stream(BoxStream<'static, A>),

    /// Several effects running concurrently.
    Merge(Vec<Effect<A>>),
}

impl<A: Send + 'static> Effect<A> {
    /// Run a future whose output is fed back as an action.
    pub fn task<F>(future: F) -> Self
    where
        F: Future<Output = A> + Send + 'static,
    {
        Effect::Future(future.map(Some).boxed())
    }

    /// Run a future for its side effect only.
    pub fn fire_and_forget<F>(future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Effect::Future(future.map(|()| None).boxed())
    }

    /// Forward every item of a stream as an action.
    pub fn run<S>(stream: S) -> Self
    where
        S: Stream<Item = A> + Send + 'static,
    {
        Effect::Stream(stream.boxed())
    }

    /// Combine two effects, dropping `None`s.
    pub fn merge(self, other: Effect<A>) -> Self {
        match (self, other) {
            (Effect::None, other) => other,
            (this, Effect::None) => this,
            (Effect::Merge(mut effects), Effect::Merge(more)) => {
                effects.extend(more);
                Effect::Merge(effects)
            }
            (Effect::Merge(mut effects), other) => {
                effects.push(other);
                Effect::Merge(effects)
            }
            (this, other) => Effect::Merge(vec![this, other]),
        }
    }

    /// Lift the actions of a child effect into a parent action type.
    pub fn map<B, F>(self, f: F) -> Effect<B>
    where
        B: Send + 'static,
        F: Fn(A) -> B + Clone + Send + Sync + 'static,
    {
        match self {
            Effect::None => Effect::None,
            Effect::Send(action) => Effect::Send(f(action)),
            Effect::Future(future) => Effect::Future(future.map(move |a| a.map(f)).boxed()),
            Effect::Stream(stream) => Effect::Stream(stream.map(f).boxed()),
            Effect::Merge(effects) => Effect::Merge(
                effects
                    .into_iter()
                    .map(|effect| effect.map(f.clone()))
                    .collect(),
            ),
        }
    }

    pub fn is_none(&self) -> bool {
        match self {
            Effect::None => true,
            Effect::Merge(effects) => effects.iter().all(Effect::is_none),
            _ => false,
        }
    }
}

impl<A> Default for Effect<A> {
    fn default() -> Self {
        Effect::None
    }
}

impl<A: fmt::Debug> fmt::Debug for Effect<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::None => f.write_str("None"),
            Effect::Send(action) => f.debug_tuple("Send").field(action).finish(),
            Effect::Future(_) => f.write_str("Future(..)"),
            Effect::Stream(_) => f.write_str("Stream(..)"),
            Effect::Merge(effects) => f.debug_tuple("Merge").field(effects).finish(),
        }
    }
}
