//! Game notifications and their observers.
//!
//! Observers belong to one game instance and live as long as it does. The
//! engine queues events while a transition runs and hands them to its
//! scheduler only once the transition is complete, so an observer always
//! sees a settled game.

use std::collections::VecDeque;
use std::fmt;
use std::mem;
use std::sync::Arc;

use parking_lot::{Mutex, ReentrantMutex};

use crate::board::{Pacing, PlayerId};
use crate::timer::Scheduler;

/// Something the presentation layer may want to react to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// A player's turn has begun. `turn` counts handoffs from 1.
    TurnStarted { player: PlayerId, turn: u32 },
    /// Contention narrowed; `winners` are the players still in it.
    GameWin { winners: Vec<PlayerId> },
    /// The player to move has no legal action.
    Stalemate { player: PlayerId },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    TurnStarted,
    GameWin,
    Stalemate,
}

impl GameEvent {
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            GameEvent::TurnStarted { .. } => EventKind::TurnStarted,
            GameEvent::GameWin { .. } => EventKind::GameWin,
            GameEvent::Stalemate { .. } => EventKind::Stalemate,
        }
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::TurnStarted { player, turn } => write!(f, "turn {turn} player {player}"),
            GameEvent::GameWin { winners } => {
                write!(f, "game_win")?;
                for player in winners {
                    write!(f, " {player}")?;
                }
                Ok(())
            }
            GameEvent::Stalemate { player } => write!(f, "stalemate {player}"),
        }
    }
}

pub trait Observer: Send {
    fn notify(&mut self, event: &GameEvent);
}

impl<F: FnMut(&GameEvent) + Send> Observer for F {
    fn notify(&mut self, event: &GameEvent) {
        self(event);
    }
}

struct Subscription {
    filter: Option<EventKind>,
    observer: Box<dyn Observer>,
}

#[derive(Default)]
struct Registry {
    subscriptions: Vec<Subscription>,
    /// Subscriptions lent out to the dispatch in progress.
    lent: usize,
    dispatching: bool,
    /// Events dispatched from inside a notification, delivered after it.
    deferred: VecDeque<GameEvent>,
}

/// Observer registry shared between a game and its scheduled deliveries.
///
/// Observers run without the registry locked. Subscribing from inside a
/// notification takes effect from the next event; dispatching from inside
/// one is queued until the current event has reached every observer.
#[derive(Clone, Default)]
pub struct Observers {
    registry: Arc<Mutex<Registry>>,
    /// Serializes deliveries from different threads.
    delivery: Arc<ReentrantMutex<()>>,
}

impl Observers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Receive every event.
    pub fn subscribe(&self, observer: impl Observer + 'static) {
        self.register(None, Box::new(observer));
    }

    /// Receive only events of `kind`.
    pub fn on(&self, kind: EventKind, observer: impl Observer + 'static) {
        self.register(Some(kind), Box::new(observer));
    }

    fn register(&self, filter: Option<EventKind>, observer: Box<dyn Observer>) {
        self.registry
            .lock()
            .subscriptions
            .push(Subscription { filter, observer });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        let registry = self.registry.lock();
        registry.subscriptions.len() + registry.lent
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dispatch(&self, event: &GameEvent) {
        let _turn = self.delivery.lock();
        {
            let mut registry = self.registry.lock();
            if registry.dispatching {
                registry.deferred.push_back(event.clone());
                return;
            }
        }

        let mut next = Some(event.clone());
        while let Some(event) = next {
            let mut lent = Lent::take(&self.registry);
            let kind = event.kind();
            for sub in &mut lent.subscriptions {
                if sub.filter.map_or(true, |f| f == kind) {
                    sub.observer.notify(&event);
                }
            }
            drop(lent);
            next = self.registry.lock().deferred.pop_front();
        }
    }
}

/// Subscriptions taken out of the registry for one delivery.
///
/// Dropping puts them back ahead of anything subscribed meanwhile, even if
/// an observer panicked.
struct Lent<'a> {
    registry: &'a Mutex<Registry>,
    subscriptions: Vec<Subscription>,
}

impl<'a> Lent<'a> {
    fn take(registry: &'a Mutex<Registry>) -> Self {
        let mut guard = registry.lock();
        let subscriptions = mem::take(&mut guard.subscriptions);
        guard.lent = subscriptions.len();
        guard.dispatching = true;
        Lent {
            registry,
            subscriptions,
        }
    }
}

impl Drop for Lent<'_> {
    fn drop(&mut self) {
        let mut guard = self.registry.lock();
        let added = mem::replace(&mut guard.subscriptions, mem::take(&mut self.subscriptions));
        guard.subscriptions.extend(added);
        guard.lent = 0;
        guard.dispatching = false;
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers").field("len", &self.len()).finish()
    }
}

/// Events raised by the current transition, waiting to be scheduled.
pub(crate) struct EventQueue {
    observers: Observers,
    scheduler: Box<dyn Scheduler>,
    pacing: Pacing,
    pending: Vec<GameEvent>,
}

impl EventQueue {
    pub(crate) fn new(scheduler: Box<dyn Scheduler>, pacing: Pacing) -> Self {
        EventQueue {
            observers: Observers::new(),
            scheduler,
            pacing,
            pending: Vec::new(),
        }
    }

    pub(crate) fn observers(&self) -> &Observers {
        &self.observers
    }

    pub(crate) fn push(&mut self, event: GameEvent) {
        self.pending.push(event);
    }

    pub(crate) fn discard(&mut self) {
        self.pending.clear();
    }

    /// Hand every queued event to the scheduler, oldest first.
    pub(crate) fn flush(&mut self) {
        for event in self.pending.drain(..) {
            let delay = match event.kind() {
                EventKind::TurnStarted => self.pacing.turn_delay,
                EventKind::GameWin | EventKind::Stalemate => self.pacing.event_delay,
            };
            let observers = self.observers.clone();
            self.scheduler
                .after(delay, Box::new(move || observers.dispatch(&event)));
        }
    }
}

impl fmt::Debug for EventQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventQueue")
            .field("observers", &self.observers)
            .field("pacing", &self.pacing)
            .field("pending", &self.pending)
            .finish()
    }
}
