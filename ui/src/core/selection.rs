//! Selection state shared by every metric chart row.
//!
//! One selected photo index drives all rows at once (the series builder
//! guarantees the rows are length-aligned). The coordinator owns that index,
//! absorbs double-tap artifacts with a small debounce window, and computes
//! the clamped scroll offset that centers the selection in each row's
//! viewport. Scheduled work (the force-sync clear) is guarded by a dataset
//! epoch so a timer armed against an old photo list can never touch the
//! state of a newer one.

use super::catalog::MetricKey;
use super::timing::{self, InstantStamp};

/// Tunable timing constants. The defaults are what the input layer was tuned
/// against; nothing else in the coordinator depends on their exact values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionConfig {
    /// Repeated `select` calls closer together than this are ignored.
    pub debounce_ms: f64,
    /// How long the force-sync flag stays up before the scheduled clear.
    pub force_sync_clear_ms: u64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 50.0,
            force_sync_clear_ms: 500,
        }
    }
}

/// Geometry of one horizontally scrolling chart row. Rows may differ at the
/// edges (end padding), so each carries its own widths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub item_width: f64,
    pub viewport_width: f64,
    pub content_width: f64,
}

/// Handed out when the force-sync flag is armed. The holder sleeps for
/// `clear_after_ms` and then calls [`SelectionCoordinator::clear_force_sync`];
/// the embedded epoch makes a late-firing timer harmless after a reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForceSyncTicket {
    epoch: u64,
    pub clear_after_ms: u64,
}

/// Transition log entry. Kept so debounce and force-sync timing can be
/// asserted on directly instead of through a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    DatasetLoaded { len: usize },
    AutoSelected { index: usize },
    Selected { index: usize },
    RejectedOutOfRange { index: usize },
    DebouncedDuplicate { index: usize },
    ForceSyncSet,
    ForceSyncCleared,
}

/// Coordinator for the shared selected index and per-row scroll targets.
///
/// States: uninitialized (no photos) ⇄ has-data (some index selected). Once
/// an index is selected it is never silently dropped while data exists; only
/// loading an empty dataset returns to uninitialized. No method panics —
/// invalid input is a logged no-op.
#[derive(Debug, Clone, Default)]
pub struct SelectionCoordinator {
    config: SelectionConfig,
    epoch: u64,
    len: usize,
    selected: Option<usize>,
    auto_selected: bool,
    force_sync: bool,
    last_applied_at: Option<InstantStamp>,
    events: Vec<SelectionEvent>,
}

impl SelectionCoordinator {
    pub fn new(config: SelectionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Swap in a new dataset of `len` aligned points. Bumps the epoch so any
    /// timer armed against the previous dataset expires, and resets the
    /// debounce clock. `len == 0` returns to the uninitialized state.
    pub fn load_dataset(&mut self, len: usize) {
        self.epoch += 1;
        self.len = len;
        self.selected = None;
        self.auto_selected = false;
        self.force_sync = false;
        self.last_applied_at = None;
        self.push(SelectionEvent::DatasetLoaded { len });
    }

    pub fn has_data(&self) -> bool {
        self.len > 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn force_sync(&self) -> bool {
        self.force_sync
    }

    /// Select the most recent photo after a dataset load. Idempotent: once a
    /// selection exists this is a no-op, so re-renders can call it freely.
    pub fn auto_select_most_recent(&mut self) -> Option<ForceSyncTicket> {
        if self.len == 0 || self.auto_selected || self.selected.is_some() {
            return None;
        }
        let index = self.len - 1;
        self.selected = Some(index);
        self.auto_selected = true;
        self.push(SelectionEvent::AutoSelected { index });
        Some(self.arm_force_sync())
    }

    /// Explicit "jump to latest": re-selects the last index and re-arms the
    /// force-sync flag even when the selection is already there.
    pub fn jump_to_latest(&mut self) -> Option<ForceSyncTicket> {
        if self.len == 0 {
            tracing::warn!("jump_to_latest with no dataset loaded");
            return None;
        }
        let index = self.len - 1;
        self.selected = Some(index);
        self.push(SelectionEvent::Selected { index });
        Some(self.arm_force_sync())
    }

    /// User-driven selection stamped with the current clock.
    pub fn select(&mut self, index: usize) -> bool {
        self.select_at(index, timing::now())
    }

    /// Selection with an explicit timestamp. Out-of-range indices are
    /// rejected (a caller bug, not a UI event); calls landing inside the
    /// debounce window of the previously applied one are ignored.
    pub fn select_at(&mut self, index: usize, stamp: InstantStamp) -> bool {
        if index >= self.len {
            tracing::warn!(index, len = self.len, "selection index out of range");
            self.push(SelectionEvent::RejectedOutOfRange { index });
            return false;
        }

        if let Some(last) = self.last_applied_at {
            if stamp - last < self.config.debounce_ms {
                tracing::debug!(index, "selection debounced");
                self.push(SelectionEvent::DebouncedDuplicate { index });
                return false;
            }
        }

        self.selected = Some(index);
        self.last_applied_at = Some(stamp);
        self.push(SelectionEvent::Selected { index });
        true
    }

    /// Drop the force-sync flag, unless the ticket predates the current
    /// dataset — a stale timer firing after a reload must not mutate state.
    pub fn clear_force_sync(&mut self, ticket: ForceSyncTicket) {
        if ticket.epoch != self.epoch {
            tracing::debug!(
                ticket_epoch = ticket.epoch,
                current_epoch = self.epoch,
                "ignoring stale force-sync clear"
            );
            return;
        }
        if self.force_sync {
            self.force_sync = false;
            self.push(SelectionEvent::ForceSyncCleared);
        }
    }

    /// Offset that centers `index` in the row's viewport, clamped to the
    /// scrollable range. Written per-row: content widths may differ at the
    /// edges even though all rows are length-aligned.
    pub fn scroll_target(&self, layout: &ChartLayout, index: usize) -> f64 {
        let centered =
            (index as f64 + 0.5) * layout.item_width - layout.viewport_width / 2.0;
        let max_offset = (layout.content_width - layout.viewport_width).max(0.0);
        centered.clamp(0.0, max_offset)
    }

    /// Scroll offsets for every row, recomputed from the current selection.
    /// Empty when nothing is selected.
    pub fn scroll_targets(&self, layouts: &[(MetricKey, ChartLayout)]) -> Vec<(MetricKey, f64)> {
        match self.selected {
            Some(index) => layouts
                .iter()
                .map(|(key, layout)| (*key, self.scroll_target(layout, index)))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn events(&self) -> &[SelectionEvent] {
        &self.events
    }

    fn arm_force_sync(&mut self) -> ForceSyncTicket {
        self.force_sync = true;
        self.push(SelectionEvent::ForceSyncSet);
        ForceSyncTicket {
            epoch: self.epoch,
            clear_after_ms: self.config.force_sync_clear_ms,
        }
    }

    fn push(&mut self, event: SelectionEvent) {
        self.events.push(event);
    }
}
