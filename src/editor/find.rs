//! One-shot find trigger
//!
//! "Present the find bar" is a transient intent crossing the ownership
//! boundary between the host view layer and the widget. Modeled as a
//! queue of depth one instead of a persisted boolean: the producer arms
//! it, the reconciler drains it within a single pass, and re-arming later
//! works again. Draining at a well-defined point avoids re-entrant
//! mutation while a view update is in progress.

/// Depth-one command queue for the find intent
#[derive(Debug, Default)]
pub struct FindTrigger {
    armed: bool,
}

impl FindTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the trigger. Arming twice before a drain still yields one shot.
    pub fn request(&mut self) {
        self.armed = true;
    }

    /// Drain the trigger, returning whether it was armed
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.armed)
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot() {
        let mut trigger = FindTrigger::new();
        assert!(!trigger.take());
        trigger.request();
        assert!(trigger.take());
        assert!(!trigger.take());
    }

    #[test]
    fn test_rearm() {
        let mut trigger = FindTrigger::new();
        trigger.request();
        trigger.request();
        assert!(trigger.take());
        assert!(!trigger.take());
        trigger.request();
        assert!(trigger.take());
    }
}
