//! Hand-off of direction key presses from the input thread to the game loop.

use std::sync::mpsc::{channel, Receiver, Sender};

use crate::coords::Direction;

/// Producer half, owned by the input thread.
#[derive(Clone)]
pub struct KeySender {
    tx: Sender<Direction>,
}

/// Consumer half, drained by the game loop once per tick.
pub struct KeyReceiver {
    rx: Receiver<Direction>,
}

pub fn key_channel() -> (KeySender, KeyReceiver) {
    let (tx, rx) = channel();
    (KeySender { tx }, KeyReceiver { rx })
}

impl KeySender {
    /// Queues a direction. Returns false once the receiving side is gone.
    pub fn push(&self, direction: Direction) -> bool {
        self.tx.send(direction).is_ok()
    }
}

impl KeyReceiver {
    /// Empties the queue, returning only the most recent direction.
    pub fn drain_latest(&self) -> Option<Direction> {
        self.rx.try_iter().last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Direction::*;
    use std::thread;

    #[test]
    fn empty_queue_yields_none() {
        let (_tx, rx) = key_channel();
        assert_eq!(rx.drain_latest(), None);
    }

    #[test]
    fn drain_keeps_only_the_last() {
        let (tx, rx) = key_channel();
        tx.push(Down);
        tx.push(Left);
        tx.push(Up);

        assert_eq!(rx.drain_latest(), Some(Up));
        assert_eq!(rx.drain_latest(), None);
    }

    #[test]
    fn push_after_receiver_dropped() {
        let (tx, rx) = key_channel();
        assert!(tx.push(Left));
        drop(rx);
        assert!(!tx.push(Right));
    }

    #[test]
    fn pushes_from_another_thread_arrive_in_order() {
        let (tx, rx) = key_channel();

        thread::spawn(move || {
            for _ in 0..100 {
                tx.push(Up);
            }
            tx.push(Right);
        })
        .join()
        .unwrap();

        assert_eq!(rx.drain_latest(), Some(Right));
    }
}
