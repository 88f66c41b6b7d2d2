//! Trailing-edge debounce for the live-search input.
//!
//! DESIGN
//! ======
//! Each `call` replaces whatever was pending, so only the latest invocation
//! inside a quiescence window ever runs. The browser build arms a
//! `gloo_timers` `Timeout`; replacing it drops (and so clears) the previous
//! timer. A generation counter guards against a timer that already fired
//! its JS callback before being replaced.
//!
//! Native builds have no event loop, so the pending closure is held until
//! [`Debouncer::fire_pending`] runs it.

#[cfg(all(test, not(feature = "csr")))]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub struct Debouncer {
    delay_ms: u32,
    generation: Cell<u64>,
    /// Generation of the call still waiting to run, if any.
    armed: Rc<Cell<Option<u64>>>,
    #[cfg(feature = "csr")]
    timer: RefCell<Option<gloo_timers::callback::Timeout>>,
    #[cfg(not(feature = "csr"))]
    pending: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            generation: Cell::new(0),
            armed: Rc::new(Cell::new(None)),
            #[cfg(feature = "csr")]
            timer: RefCell::new(None),
            #[cfg(not(feature = "csr"))]
            pending: RefCell::new(None),
        }
    }

    #[must_use]
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.armed.get().is_some()
    }

    /// Schedule `f`, discarding any call still waiting.
    pub fn call<F>(&self, f: F)
    where
        F: FnOnce() + 'static,
    {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        self.armed.set(Some(generation));

        let armed = self.armed.clone();
        let run = move || {
            if armed.get() == Some(generation) {
                armed.set(None);
                f();
            }
        };

        #[cfg(feature = "csr")]
        {
            let timeout = gloo_timers::callback::Timeout::new(self.delay_ms, run);
            // Dropping the old handle clears its timer.
            self.timer.replace(Some(timeout));
        }
        #[cfg(not(feature = "csr"))]
        {
            self.pending.replace(Some(Box::new(run)));
        }
    }

    /// Drop the waiting call, if any.
    pub fn cancel(&self) {
        self.armed.set(None);
        #[cfg(feature = "csr")]
        {
            self.timer.replace(None);
        }
        #[cfg(not(feature = "csr"))]
        {
            self.pending.replace(None);
        }
    }

    /// Run the waiting call now. Returns whether one ran.
    #[cfg(not(feature = "csr"))]
    pub fn fire_pending(&self) -> bool {
        let pending = self.pending.borrow_mut().take();
        match pending {
            Some(run) => {
                run();
                true
            }
            None => false,
        }
    }
}
