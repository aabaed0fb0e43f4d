//! Priority toggles and the filter state they drive.
//!
//! Every priority found in the joined data gets one toggle. [`update_filter`]
//! turns the toggle state into a per-category table mask and per-group marker
//! visibility, and is run once on start-up and after every toggle change.

pub mod ui;

use crate::data::{Category, Priority};
use crate::map::MarkerGroup;
use std::collections::BTreeMap;

/// On/off state of every priority toggle.
#[derive(Debug, Clone)]
pub struct PriorityFilter {
    /// Toggle order, as the priorities were first seen in the data.
    order: Vec<Priority>,
    toggles: BTreeMap<Priority, bool>,
}

impl PriorityFilter {
    /// One toggle per priority, all starting in the same state.
    pub fn new(priorities: &[Priority], active: bool) -> Self {
        let mut order = Vec::with_capacity(priorities.len());
        let mut toggles = BTreeMap::new();
        for &priority in priorities {
            if toggles.insert(priority, active).is_none() {
                order.push(priority);
            }
        }
        Self { order, toggles }
    }

    /// Priorities in toggle order.
    pub fn priorities(&self) -> &[Priority] {
        &self.order
    }

    /// Whether a priority is shown. Priorities without a toggle are not.
    pub fn is_active(&self, priority: Priority) -> bool {
        self.toggles.get(&priority).copied().unwrap_or(false)
    }

    /// Set a toggle. Returns false if the priority has no toggle.
    pub fn set(&mut self, priority: Priority, active: bool) -> bool {
        match self.toggles.get_mut(&priority) {
            Some(state) => {
                *state = active;
                true
            },
            None => false,
        }
    }

    /// Flip a toggle, returning its new state.
    pub fn toggle(&mut self, priority: Priority) -> Option<bool> {
        let state = self.toggles.get_mut(&priority)?;
        *state = !*state;
        Some(*state)
    }

    /// Flip the toggle at position `index` in toggle order.
    pub fn toggle_nth(&mut self, index: usize) -> Option<(Priority, bool)> {
        let priority = *self.order.get(index)?;
        self.toggle(priority).map(|state| (priority, state))
    }

    /// Number of active toggles.
    pub fn active_count(&self) -> usize {
        self.toggles.values().filter(|&&on| on).count()
    }
}

/// Visibility derived from the toggle state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterView {
    /// One flag per category row, in category table order.
    pub table_mask: Vec<bool>,
    /// Priorities whose marker groups are shown.
    pub visible_groups: Vec<Priority>,
}

impl FilterView {
    /// Number of table rows passing the mask.
    pub fn visible_rows(&self) -> usize {
        self.table_mask.iter().filter(|&&shown| shown).count()
    }
}

/// Recompute table and marker visibility from the toggles.
///
/// Each category row is shown iff its priority's toggle is active, and each
/// marker group's visibility is set to its priority's toggle state.
pub fn update_filter(
    filter: &PriorityFilter,
    categories: &[Category],
    groups: &mut [MarkerGroup],
) -> FilterView {
    let table_mask = categories
        .iter()
        .map(|c| filter.is_active(c.priority))
        .collect();

    let mut visible_groups = Vec::new();
    for group in groups.iter_mut() {
        group.visible = filter.is_active(group.priority);
        if group.visible {
            visible_groups.push(group.priority);
        }
    }

    tracing::debug!(
        active = filter.active_count(),
        groups = visible_groups.len(),
        "Filter updated"
    );

    FilterView {
        table_mask,
        visible_groups,
    }
}
