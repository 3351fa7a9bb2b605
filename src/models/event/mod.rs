// Event module
// Read-only calendar event input for the layout engine

use chrono::{DateTime, Duration, Local, TimeZone};
use thiserror::Error;

/// Validation failures when constructing an [`Event`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("event title cannot be empty")]
    EmptyTitle,
    #[error("event end time must be after start time")]
    EndNotAfterStart,
    #[error("event {0} is required")]
    MissingField(&'static str),
}

/// Calendar event as supplied by the caller.
///
/// Events are read-only inputs for the duration of one layout pass; the
/// engine never mutates or retains them across passes. Timestamps are
/// generic over the time zone and default to [`Local`].
#[derive(Debug, Clone)]
pub struct Event<Tz: TimeZone = Local> {
    pub title: String,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
    pub all_day: bool,
}

impl<Tz: TimeZone> Event<Tz> {
    /// Create a new timed event with required fields.
    ///
    /// # Arguments
    /// * `title` - Event title (required, non-empty)
    /// * `start` - Event start time
    /// * `end` - Event end time
    ///
    /// # Examples
    /// ```
    /// use calendar_layout::models::event::Event;
    /// use chrono::{Duration, Local};
    ///
    /// let start = Local::now();
    /// let end = start + Duration::hours(1);
    /// let event = Event::new("Team Meeting", start, end).unwrap();
    /// ```
    pub fn new(
        title: impl Into<String>,
        start: DateTime<Tz>,
        end: DateTime<Tz>,
    ) -> Result<Self, EventError> {
        let event = Self {
            title: title.into(),
            start,
            end,
            all_day: false,
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields.
    pub fn builder() -> EventBuilder<Tz> {
        EventBuilder::new()
    }

    /// Validate the event.
    ///
    /// The layout pass itself does not require validated events; malformed
    /// intervals are silently filtered by the window intersection test.
    pub fn validate(&self) -> Result<(), EventError> {
        if self.title.trim().is_empty() {
            return Err(EventError::EmptyTitle);
        }

        if self.end <= self.start {
            return Err(EventError::EndNotAfterStart);
        }

        Ok(())
    }

    /// Get the duration of the event.
    pub fn duration(&self) -> Duration {
        self.end.clone() - self.start.clone()
    }
}

impl<Tz: TimeZone> PartialEq for Event<Tz> {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.start == other.start
            && self.end == other.end
            && self.all_day == other.all_day
    }
}

/// Builder for creating events with optional fields.
pub struct EventBuilder<Tz: TimeZone = Local> {
    title: Option<String>,
    start: Option<DateTime<Tz>>,
    end: Option<DateTime<Tz>>,
    all_day: bool,
}

impl<Tz: TimeZone> EventBuilder<Tz> {
    /// Create a new event builder.
    pub fn new() -> Self {
        Self {
            title: None,
            start: None,
            end: None,
            all_day: false,
        }
    }

    /// Set the event title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the start time.
    pub fn start(mut self, start: DateTime<Tz>) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the end time.
    pub fn end(mut self, end: DateTime<Tz>) -> Self {
        self.end = Some(end);
        self
    }

    /// Set as all-day event.
    pub fn all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }

    /// Build the event.
    pub fn build(self) -> Result<Event<Tz>, EventError> {
        let title = self.title.ok_or(EventError::MissingField("title"))?;
        let start = self.start.ok_or(EventError::MissingField("start time"))?;
        let end = self.end.ok_or(EventError::MissingField("end time"))?;

        let event = Event {
            title,
            start,
            end,
            all_day: self.all_day,
        };

        event.validate()?;
        Ok(event)
    }
}

impl<Tz: TimeZone> Default for EventBuilder<Tz> {
    fn default() -> Self {
        Self::new()
    }
}
