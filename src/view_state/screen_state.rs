//! Generic per-screen store with request ordering.

use super::inputs::PendingInput;
use super::scroll::ResultScroll;
use crate::error::ApiError;

/// Stamp handed out when a request is submitted.
///
/// Generations increase strictly per screen, so comparing tickets tells
/// which submission is newer regardless of completion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket {
    generation: u64,
}

impl RequestTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Lifecycle of a screen's requests.
#[derive(Debug, Clone, Default)]
pub enum RequestStatus {
    /// Nothing submitted yet, or the result was cleared.
    #[default]
    Idle,
    /// At least one submitted request has not been applied yet.
    Pending,
    /// The newest request completed successfully.
    Resolved,
    /// The newest request failed; any earlier result stays visible.
    Failed(ApiError),
}

impl RequestStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestStatus::Pending)
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            RequestStatus::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// What [`ScreenState::apply`] did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Accepted,
    /// A newer submission was already applied; the outcome was dropped.
    Stale,
}

/// Draft input plus latest accepted response for one screen.
#[derive(Debug, Clone)]
pub struct ScreenState<P: PendingInput, R> {
    pending: P,
    result: Option<R>,
    status: RequestStatus,
    scroll: ResultScroll,
    /// Generation of the most recently issued ticket.
    issued: u64,
    /// Generation of the most recently applied ticket.
    applied: u64,
}

impl<P: PendingInput, R> Default for ScreenState<P, R> {
    fn default() -> Self {
        Self {
            pending: P::default(),
            result: None,
            status: RequestStatus::Idle,
            scroll: ResultScroll::new(),
            issued: 0,
            applied: 0,
        }
    }
}

impl<P: PendingInput, R> ScreenState<P, R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> &P {
        &self.pending
    }

    pub fn result(&self) -> Option<&R> {
        self.result.as_ref()
    }

    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    pub fn scroll(&self) -> &ResultScroll {
        &self.scroll
    }

    pub fn scroll_mut(&mut self) -> &mut ResultScroll {
        &mut self.scroll
    }

    /// Number of submitted requests whose outcome has not been seen yet.
    ///
    /// Stale completions never lower this: once a newer request is applied,
    /// all older ones count as settled.
    pub fn outstanding(&self) -> u64 {
        self.issued - self.applied
    }

    /// Overwrite one draft field.
    pub fn set_pending(&mut self, field: P::Field, value: impl Into<String>) {
        *self.pending.field_mut(field) = value.into();
    }

    pub fn push_char(&mut self, field: P::Field, c: char) {
        self.pending.field_mut(field).push(c);
    }

    pub fn pop_char(&mut self, field: P::Field) {
        self.pending.field_mut(field).pop();
    }

    /// Overwrite the result unconditionally.
    pub fn set_result(&mut self, value: R) {
        self.result = Some(value);
        self.scroll.to_top();
        if self.outstanding() == 0 {
            self.status = RequestStatus::Resolved;
        }
    }

    /// Drop the result. Requests still in flight may repopulate it.
    pub fn clear_result(&mut self) {
        self.result = None;
        self.scroll.to_top();
        if self.outstanding() == 0 {
            self.status = RequestStatus::Idle;
        }
    }

    /// Record a new submission and move to `Pending`.
    pub fn begin_request(&mut self) -> RequestTicket {
        self.issued += 1;
        self.status = RequestStatus::Pending;
        RequestTicket {
            generation: self.issued,
        }
    }

    /// Apply a completed request if nothing newer has been applied.
    ///
    /// Success replaces the result wholesale and scrolls back to the top.
    /// Failure keeps the previous result and its scroll position. While
    /// newer submissions are still outstanding the status
    /// stays `Pending`.
    pub fn apply(&mut self, ticket: RequestTicket, outcome: Result<R, ApiError>) -> Applied {
        if ticket.generation <= self.applied {
            return Applied::Stale;
        }
        self.applied = ticket.generation;

        let failure = match outcome {
            Ok(value) => {
                self.result = Some(value);
                self.scroll.to_top();
                None
            }
            Err(err) => Some(err),
        };

        self.status = if self.outstanding() > 0 {
            RequestStatus::Pending
        } else {
            match failure {
                Some(err) => RequestStatus::Failed(err),
                None => RequestStatus::Resolved,
            }
        };
        Applied::Accepted
    }
}
