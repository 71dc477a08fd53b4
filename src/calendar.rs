//! The calendar a date picker or range calendar drives.
//!
//! A `Calendar` owns the anchor month and the selection. Every input replaces
//! one or both wholesale; the grid and other outputs are recomputed from them
//! on demand. Listeners hear about selection changes after the new state is in
//! place, once per change.

use std::fmt;

use chrono::{NaiveDate, Weekday};

use crate::{
    AnchorMonth, Bounds, CalendarConfig, Clock, DAYS_PER_WEEK, DateRange, Direction, MonthGrid,
    Period, Preset, RangeError, Selection, SelectionMode, SystemClock, active_preset,
    input::parse_input_date, weekday_initials,
};

/// Handle returned by [`Calendar::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&Selection)>;

/// Selection and navigation state for one calendar widget.
pub struct Calendar<C = SystemClock> {
    clock:         C,
    mode:          SelectionMode,
    bounds:        Bounds,
    week_start:    Weekday,
    anchor:        AnchorMonth,
    selection:     Selection,
    /// Last selection listeners were told about
    notified:      Selection,
    listeners:     Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl Calendar<SystemClock> {
    /// Creates a calendar reading "today" from the local clock
    ///
    /// # Errors
    /// See [`Calendar::with_clock`].
    pub fn new(config: CalendarConfig) -> Result<Self, RangeError> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Calendar<C> {
    /// Creates a calendar showing the current month.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidBounds` or `RangeError::InvalidRange` for an
    /// inconsistent config, and `RangeError::ParseError` if today lies outside
    /// the supported years.
    pub fn with_clock(config: CalendarConfig, clock: C) -> Result<Self, RangeError> {
        let bounds = config.bounds()?;
        let selection = config.selection()?;
        let anchor = AnchorMonth::containing(clock.today())?;

        Ok(Self {
            clock,
            mode: config.mode(),
            bounds,
            week_start: config.week_start,
            anchor,
            selection,
            notified: selection,
            listeners: Vec::new(),
            next_listener: 0,
        })
    }

    pub const fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub const fn week_start(&self) -> Weekday {
        self.week_start
    }

    pub const fn anchor(&self) -> AnchorMonth {
        self.anchor
    }

    pub const fn selection(&self) -> Selection {
        self.selection
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Weeks to render for the anchor month
    pub fn grid(&self) -> MonthGrid {
        MonthGrid::build(
            self.anchor,
            &self.selection,
            &self.bounds,
            self.today(),
            self.week_start,
        )
    }

    /// Column headers matching [`Calendar::grid`]
    pub fn weekday_initials(&self) -> [char; DAYS_PER_WEEK] {
        weekday_initials(self.week_start)
    }

    /// Length of the current selection
    pub fn period(&self) -> Option<Period> {
        self.selection.period()
    }

    /// The preset the current selection equals today, for highlighting
    pub fn active_preset(&self) -> Option<Preset> {
        active_preset(&self.selection, self.today(), self.week_start)
    }

    /// Whether a pick on `date` would be ignored
    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        self.bounds.is_disabled(date)
    }

    /// Registers `listener` to be called with every changed selection
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&Selection) + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Picks a day from the grid.
    ///
    /// Days outside the bounds are ignored. Returns whether the pick was accepted.
    pub fn pick(&mut self, date: NaiveDate) -> bool {
        if self.bounds.is_disabled(date) {
            log::debug!("ignoring pick on disabled day {date}");
            return false;
        }

        self.replace_selection(self.selection.picked(date, self.mode));
        true
    }

    /// Picks a day typed as text. Malformed text is ignored.
    pub fn pick_text(&mut self, text: &str) -> bool {
        match parse_input_date(text) {
            Ok(date) => self.pick(date),
            Err(err) => {
                log::debug!("ignoring date input {text:?}: {err}");
                false
            },
        }
    }

    /// Shows the following month. Returns `false` past the last supported year.
    pub fn next_month(&mut self) -> bool {
        let next = self.anchor.next();
        self.replace_anchor(next)
    }

    /// Shows the preceding month. Returns `false` before the first supported year.
    pub fn previous_month(&mut self) -> bool {
        let previous = self.anchor.previous();
        self.replace_anchor(previous)
    }

    /// Shows the month containing `date`, falling back to the selection start
    /// and then to today.
    pub fn set_anchor_month(&mut self, date: Option<NaiveDate>) -> bool {
        let target = date
            .or_else(|| self.selection.start())
            .unwrap_or_else(|| self.today());

        match AnchorMonth::containing(target) {
            Ok(month) => self.replace_anchor(Some(month)),
            Err(err) => {
                log::debug!("cannot show month of {target}: {err}");
                false
            },
        }
    }

    /// Shows the month of a date typed as text. Malformed text is ignored.
    pub fn set_anchor_text(&mut self, text: &str) -> bool {
        match parse_input_date(text) {
            Ok(date) => self.set_anchor_month(Some(date)),
            Err(err) => {
                log::debug!("ignoring month input {text:?}: {err}");
                false
            },
        }
    }

    /// Selects a preset range as of today.
    ///
    /// Outside range mode only the single-day presets apply.
    pub fn select_preset(&mut self, preset: Preset) -> bool {
        if !self.mode.is_range() && !preset.is_single_day() {
            log::debug!("preset {preset} needs range mode");
            return false;
        }

        let Some(range) = preset.resolve(self.today(), self.week_start) else {
            log::debug!("preset {preset} does not resolve today");
            return false;
        };

        self.replace_selection(Selection::Range(range).with_mode(self.mode));
        true
    }

    /// Selects a range given in either order. Outside range mode only the
    /// earlier date is kept.
    pub fn select_range(&mut self, a: NaiveDate, b: NaiveDate) -> bool {
        let range = DateRange::from_unordered(a, b);
        self.replace_selection(Selection::Range(range).with_mode(self.mode));
        true
    }

    /// Selects exactly one day, as quick-select date buttons do
    pub fn select_date(&mut self, date: NaiveDate) -> bool {
        self.replace_selection(Selection::Single(date).with_mode(self.mode));
        true
    }

    /// Moves the start of the selection, keeping its end
    pub fn set_start(&mut self, date: NaiveDate) -> bool {
        let next = match self.mode {
            SelectionMode::Single => Selection::Single(date),
            SelectionMode::Range => self.selection.with_start(date),
        };
        self.replace_selection(next);
        true
    }

    /// Moves the end of the selection, keeping its start. Range mode only.
    pub fn set_end(&mut self, date: NaiveDate) -> bool {
        if !self.mode.is_range() {
            log::debug!("ignoring end date {date} outside range mode");
            return false;
        }
        self.replace_selection(self.selection.with_end(date));
        true
    }

    /// Moves the whole selection forward by its own length
    pub fn next_period(&mut self) -> bool {
        self.shift_period(Direction::Forward)
    }

    /// Moves the whole selection backward by its own length
    pub fn previous_period(&mut self) -> bool {
        self.shift_period(Direction::Backward)
    }

    /// Switches between single-date and range selection.
    /// Leaving range mode keeps only the start date. Returns whether the mode changed.
    pub fn set_range_mode(&mut self, range_mode: bool) -> bool {
        let mode = SelectionMode::from_range_flag(range_mode);
        if mode == self.mode {
            return false;
        }

        log::debug!("switching to {mode:?} mode");
        self.mode = mode;
        self.replace_selection(self.selection.with_mode(mode));
        true
    }

    fn shift_period(&mut self, direction: Direction) -> bool {
        let Some(range) = self.selection.as_range() else {
            log::debug!("no selection to move {direction:?}");
            return false;
        };

        let period = range.period();
        match period.shift(&range, direction) {
            Some(shifted) => {
                self.replace_selection(Selection::Range(shifted).with_mode(self.mode));
                true
            },
            None => {
                log::debug!("cannot move {range} by {period} {direction:?}");
                false
            },
        }
    }

    fn replace_anchor(&mut self, month: Option<AnchorMonth>) -> bool {
        let Some(month) = month else {
            log::debug!("no month to show beyond {}", self.anchor);
            return false;
        };

        log::debug!("showing {month}");
        self.anchor = month;
        true
    }

    fn replace_selection(&mut self, selection: Selection) {
        log::debug!("selection {} -> {}", self.selection, selection);
        self.selection = selection;

        if selection.same_days(&self.notified) {
            return;
        }

        self.notified = selection;
        log::trace!("notifying {} listener(s) of {selection}", self.listeners.len());
        for (_, listener) in &mut self.listeners {
            listener(&selection);
        }
    }
}

impl<C: fmt::Debug> fmt::Debug for Calendar<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calendar")
            .field("clock", &self.clock)
            .field("mode", &self.mode)
            .field("bounds", &self.bounds)
            .field("week_start", &self.week_start)
            .field("anchor", &self.anchor)
            .field("selection", &self.selection)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
