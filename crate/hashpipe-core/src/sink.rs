//! A sink that discards everything written to it.

use bytes::Bytes;
use futures::Sink;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Accepts and drops byte chunks; the end of a pipeline whose real
/// output is a side effect, such as a digest.
///
/// A write is never refused and never fails. Acknowledgment is
/// deferred, though: after accepting a chunk, the next readiness poll
/// yields once to the scheduler before reporting ready again, so a
/// tight in-memory producer cannot monopolize the task.
pub struct DevNull {
    deferred_ack: bool,
}

impl DevNull {
    pub fn new() -> Self {
        Self {
            deferred_ack: false,
        }
    }

    fn poll_ack(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), io::Error>> {
        if self.deferred_ack {
            self.deferred_ack = false;
            cx.waker().wake_by_ref();
            return Poll::Pending;
        }

        Poll::Ready(Ok(()))
    }
}

impl Default for DevNull {
    fn default() -> Self {
        Self::new()
    }
}

/// The error type is dictated by the streams this sink drains; no
/// error is ever produced.
impl Sink<Bytes> for DevNull {
    type Error = io::Error;

    fn poll_ready(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.get_mut().poll_ack(cx)
    }

    fn start_send(self: Pin<&mut Self>, _chunk: Bytes) -> Result<(), Self::Error> {
        self.get_mut().deferred_ack = true;

        Ok(())
    }

    fn poll_flush(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.get_mut().poll_ack(cx)
    }

    fn poll_close(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.get_mut().poll_ack(cx)
    }
}
