//! Picklist - searchable multi-select list picker
//!
//! A small interactive picker over an in-memory roster of named items:
//! type into a search field to filter the roster by case-insensitive name
//! substring, toggle items in and out of a selection set, and clear the
//! search to bring the full roster back.
//!
//! The filtering/selection state machine is pure and deterministic: time
//! is injected into every transition, so the debounced search commit can
//! be unit tested without a terminal or a timer thread. The `tui` module
//! layers a ratatui renderer on top of it.
//!
//! # Features
//!
//! - **Debounced search**: keystrokes update the input immediately, the
//!   filter recomputes only after a quiet period (300 ms by default)
//! - **Multi-selection**: toggled per item, independent of filtering
//! - **Instant clear**: resets the search synchronously, full roster back
//! - **JSON rosters**: load item lists from disk, emit selections as JSON
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//! use picklist::{Item, Picker, PickerEvent};
//!
//! let roster = vec![
//!     Item::new(1, "Rohan"),
//!     Item::new(2, "Raj"),
//!     Item::new(3, "Gautam"),
//! ];
//! let mut picker = Picker::new(roster);
//!
//! let t0 = Instant::now();
//! picker.handle(PickerEvent::TextChanged("ra".to_string()), t0);
//! // The filter holds until the debounce window elapses.
//! assert_eq!(picker.visible_items().len(), 3);
//!
//! picker.handle(PickerEvent::Tick, t0 + picker.config().debounce_delay);
//! assert_eq!(picker.visible_items().len(), 2);
//!
//! picker.handle(PickerEvent::ItemTapped(1), t0);
//! assert!(picker.is_selected(1));
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub mod debounce;
pub mod error;
pub mod filter;
pub mod logging;
pub mod picker;
pub mod search;
pub mod selection;
pub mod tui;

// Re-export main types
pub use debounce::Debounce;
pub use error::{PickerError, Result};
pub use filter::{filter, filter_indices, matches_term};
pub use picker::{Picker, PickerEvent};
pub use search::SearchController;
pub use selection::SelectionStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A single pickable entry. Ids are caller-supplied, unique and stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
}

impl Item {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Load a roster from a JSON file containing an array of `{id, name}`
/// objects. No semantic validation happens here; id uniqueness is the
/// caller's contract.
pub fn load_roster(path: impl AsRef<Path>) -> Result<Vec<Item>> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)
        .map_err(|e| PickerError::RosterRead(path.display().to_string(), e))?;
    let items: Vec<Item> = serde_json::from_str(&data)
        .map_err(|e| PickerError::RosterParse(path.display().to_string(), e))?;
    Ok(items)
}

/// Built-in roster used when no file is supplied.
pub fn demo_roster() -> Vec<Item> {
    vec![
        Item::new(1, "Rohan"),
        Item::new(2, "Raj"),
        Item::new(3, "Gautam"),
    ]
}

/// Picker configuration
#[derive(Debug, Clone)]
pub struct PickerConfig {
    /// Quiet period before a typed search term is committed to the filter
    pub debounce_delay: Duration,
    /// Event-loop cadence for the TUI front end
    pub tick_rate: Duration,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            debounce_delay: Duration::from_millis(300),
            tick_rate: Duration::from_millis(50),
        }
    }
}
