// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The event/command loop shared by every view.

use std::fmt::Debug;

use tradie_core::SchedulerApi;

/// A view whose state changes only through events.
#[allow(async_fn_in_trait)]
pub trait View {
    type Event: Debug;
    type Command: Debug;

    /// Apply one event. Returns the backend call it calls for, if any.
    fn apply(&mut self, event: Self::Event) -> Option<Self::Command>;

    /// Perform one backend call and report its outcome as an event.
    async fn execute<A: SchedulerApi>(api: &A, command: Self::Command) -> Self::Event;

    /// Run `event` to completion against state owned by the caller.
    async fn dispatch<A: SchedulerApi>(&mut self, api: &A, event: Self::Event)
    where
        Self: Sized,
    {
        run::<A, Self>(api, |e| self.apply(e), event).await;
    }
}

/// Run one user action to completion.
///
/// `apply` is called once per step and must not hold its borrow across the
/// await, so UI signals can be written between backend calls. Commands run one
/// at a time: a view never has two requests in flight for the same action.
pub async fn run<A, V>(
    api: &A,
    mut apply: impl FnMut(V::Event) -> Option<V::Command>,
    event: V::Event,
) where
    A: SchedulerApi,
    V: View,
{
    let mut next = apply(event);
    while let Some(command) = next {
        tracing::debug!(?command, "executing command");
        let outcome = V::execute(api, command).await;
        next = apply(outcome);
    }
}
