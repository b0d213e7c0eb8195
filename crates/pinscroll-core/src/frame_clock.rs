use crate::runtime::RuntimeHandle;
use crate::FrameCallbackId;
use std::cell::Cell;
use std::rc::Rc;

/// Request-next-frame primitive.
#[derive(Clone)]
pub struct FrameClock {
    runtime: RuntimeHandle,
}

impl FrameClock {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self { runtime }
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.clone()
    }

    /// Runs `callback` once on the next frame with the frame time in nanoseconds.
    ///
    /// Dropping the returned registration before the frame fires cancels it.
    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        let fired = Rc::new(Cell::new(false));
        let fired_flag = Rc::clone(&fired);
        let mut callback_opt = Some(callback);
        match self.runtime.register_frame_callback(move |time| {
            fired_flag.set(true);
            if let Some(callback) = callback_opt.take() {
                callback(time);
            }
        }) {
            Some(id) => FrameCallbackRegistration::new(self.runtime.clone(), id, fired),
            None => FrameCallbackRegistration::inactive(self.runtime.clone()),
        }
    }

    pub fn with_frame_millis(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        self.with_frame_nanos(move |nanos| {
            let millis = nanos / 1_000_000;
            callback(millis);
        })
    }
}

/// Handle to one scheduled frame callback.
pub struct FrameCallbackRegistration {
    runtime: RuntimeHandle,
    id: Option<FrameCallbackId>,
    fired: Rc<Cell<bool>>,
}

impl FrameCallbackRegistration {
    fn new(runtime: RuntimeHandle, id: FrameCallbackId, fired: Rc<Cell<bool>>) -> Self {
        Self {
            runtime,
            id: Some(id),
            fired,
        }
    }

    fn inactive(runtime: RuntimeHandle) -> Self {
        Self {
            runtime,
            id: None,
            fired: Rc::new(Cell::new(true)),
        }
    }

    /// True while the callback is queued and has not run yet.
    pub fn is_active(&self) -> bool {
        self.id.is_some() && !self.fired.get() && self.runtime.is_alive()
    }

    pub fn id(&self) -> Option<FrameCallbackId> {
        self.id
    }

    pub fn cancel(mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_frame_callback(id);
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            if !self.fired.get() {
                self.runtime.cancel_frame_callback(id);
            }
        }
    }
}
