//! Event capture for assertions.

use gestura_input::{GestureEvents, SwipeDirection};
use gestura_scene::ColliderId;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Records every event a tracker emits, in order, for later assertions.
#[derive(Default)]
pub struct EventRecorder {
    began: Cell<u32>,
    ended: Cell<u32>,
    hits: RefCell<Vec<ColliderId>>,
    swipes: RefCell<Vec<SwipeDirection>>,
}

impl EventRecorder {
    /// Creates a recorder subscribed to all four signals of `events`.
    pub fn subscribe(events: &GestureEvents) -> Rc<EventRecorder> {
        let recorder = Rc::new(EventRecorder::default());

        let r = Rc::clone(&recorder);
        events
            .touch_began
            .connect(move |_| r.began.set(r.began.get() + 1));
        let r = Rc::clone(&recorder);
        events
            .touch_ended
            .connect(move |_| r.ended.set(r.ended.get() + 1));
        let r = Rc::clone(&recorder);
        events
            .touch_hit_collider
            .connect(move |id| r.hits.borrow_mut().push(*id));
        let r = Rc::clone(&recorder);
        events
            .swipe_detected
            .connect(move |direction| r.swipes.borrow_mut().push(*direction));

        recorder
    }

    pub fn began_count(&self) -> u32 {
        self.began.get()
    }

    pub fn ended_count(&self) -> u32 {
        self.ended.get()
    }

    pub fn hits(&self) -> Vec<ColliderId> {
        self.hits.borrow().clone()
    }

    pub fn swipes(&self) -> Vec<SwipeDirection> {
        self.swipes.borrow().clone()
    }

    pub fn last_swipe(&self) -> Option<SwipeDirection> {
        self.swipes.borrow().last().copied()
    }
}
