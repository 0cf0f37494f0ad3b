// ============================================================================
// USE COUNTDOWN - 1s software timer with localStorage persistence
// ============================================================================

use crate::session::{countdown, CountdownKind, SessionContext};
use chrono::Utc;
use gloo_timers::callback::Interval;
use yew::prelude::*;

#[derive(Clone)]
pub struct UseCountdownHandle {
    pub remaining: UseStateHandle<u32>,
    /// Restart at the given number of seconds (0 clears the stored entry).
    pub restart: Callback<u32>,
}

impl UseCountdownHandle {
    pub fn finished(&self) -> bool {
        *self.remaining == 0
    }

    /// mm:ss display string.
    pub fn display(&self) -> String {
        format_mmss(*self.remaining)
    }
}

pub fn format_mmss(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Per-user persistent countdown. Restores from storage on mount, ticks once
/// a second while above zero, persists every tick, and drops the stored
/// entry (and the interval) at zero or on unmount.
#[hook]
pub fn use_countdown(
    session: SessionContext,
    kind: CountdownKind,
    user_id: String,
) -> UseCountdownHandle {
    // authoritative value lives in the RefCell: the interval closure outlives
    // renders, so it must not read through a state handle snapshot
    let counter = {
        let session = session.clone();
        let user_id = user_id.clone();
        use_mut_ref(move || {
            countdown::restore(
                session.store().as_ref(),
                kind,
                &user_id,
                Utc::now().timestamp(),
            )
        })
    };
    let remaining = use_state(|| *counter.borrow());
    let interval = use_mut_ref(|| None::<Interval>);

    {
        let counter = counter.clone();
        let remaining = remaining.clone();
        let session = session.clone();
        let interval = interval.clone();
        use_effect_with(
            (user_id.clone(), *remaining > 0),
            move |(user_id, active)| {
                // drop any previous ticker before (maybe) starting a new one
                *interval.borrow_mut() = None;

                if *active {
                    let user_id = user_id.clone();
                    // when the counter hits zero the deps flip and the effect
                    // re-runs, dropping the ticker there, never from inside it
                    let ticker = Interval::new(1_000, move || {
                        let next = counter.borrow().saturating_sub(1);
                        *counter.borrow_mut() = next;
                        countdown::persist_tick(
                            session.store().as_ref(),
                            kind,
                            &user_id,
                            next,
                            Utc::now().timestamp(),
                        );
                        remaining.set(next);
                    });
                    *interval.borrow_mut() = Some(ticker);
                }

                let interval = interval.clone();
                move || {
                    *interval.borrow_mut() = None;
                }
            },
        );
    }

    let restart = {
        let remaining = remaining.clone();
        Callback::from(move |secs: u32| {
            *counter.borrow_mut() = secs;
            countdown::reset(session.store().as_ref(), kind, &user_id);
            if secs > 0 {
                countdown::persist_tick(
                    session.store().as_ref(),
                    kind,
                    &user_id,
                    secs,
                    Utc::now().timestamp(),
                );
            }
            remaining.set(secs);
        })
    };

    UseCountdownHandle { remaining, restart }
}

#[cfg(test)]
mod tests {
    use super::format_mmss;

    #[test]
    fn mmss_formatting() {
        assert_eq!(format_mmss(0), "00:00");
        assert_eq!(format_mmss(9), "00:09");
        assert_eq!(format_mmss(75), "01:15");
        assert_eq!(format_mmss(600), "10:00");
    }
}
