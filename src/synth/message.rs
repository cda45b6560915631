use std::collections::VecDeque;

#[cfg(feature = "rtrb")]
use rtrb::{Consumer, Producer, RingBuffer};

use crate::param::Param;

/// Room for a burst of knob moves between two audio blocks.
pub const EVENT_QUEUE_CAPACITY: usize = 256;

/// Control message routed from a host to one oscillator.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ParamEvent {
    Scalar { param: Param, value: f64 },
    Reset,
}

impl ParamEvent {
    pub fn scalar(param: Param, value: f64) -> Self {
        ParamEvent::Scalar { param, value }
    }

    /// Integer messages are treated as the equivalent float.
    pub fn from_int(param: Param, value: i64) -> Self {
        ParamEvent::Scalar {
            param,
            value: value as f64,
        }
    }
}

pub trait EventReceiver {
    fn pop(&mut self) -> Option<ParamEvent>;
}

impl EventReceiver for VecDeque<ParamEvent> {
    fn pop(&mut self) -> Option<ParamEvent> {
        self.pop_front()
    }
}

#[cfg(feature = "rtrb")]
impl EventReceiver for Consumer<ParamEvent> {
    fn pop(&mut self) -> Option<ParamEvent> {
        Consumer::pop(self).ok()
    }
}

/// Lock-free queue pair: producer for the control thread, consumer for audio.
#[cfg(feature = "rtrb")]
pub fn event_queue() -> (Producer<ParamEvent>, Consumer<ParamEvent>) {
    RingBuffer::new(EVENT_QUEUE_CAPACITY)
}

/// Push an event, dropping it if the audio thread has fallen behind.
#[cfg(feature = "rtrb")]
pub fn try_send(producer: &mut Producer<ParamEvent>, event: ParamEvent) -> bool {
    match producer.push(event) {
        Ok(()) => true,
        Err(_) => {
            log::debug!("event queue full, dropping {event:?}");
            false
        }
    }
}
