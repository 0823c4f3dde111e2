//! Auto-sync switch state

use crate::validation::SyncInterval;

/// Label of the save action while auto-sync is off
pub const SAVE_LABEL: &str = "Save";
/// Label of the save action while auto-sync is on
pub const SAVE_AND_AUTO_SYNC_LABEL: &str = "Save and AutoSync";

/// The "auto sync" switch and the interval field it controls.
///
/// The field keeps its last value while the switch is off, but only the
/// enabled state ever contributes a non-zero interval to the saved config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoSyncSwitch {
    enabled: bool,
    field: SyncInterval,
}

impl AutoSyncSwitch {
    /// Initial state from a stored interval: on iff the interval is non-zero.
    pub const fn from_interval(interval: SyncInterval) -> Self {
        Self {
            enabled: interval.is_enabled(),
            field: interval,
        }
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flip the switch.
    pub fn toggle(&mut self) {
        self.set_enabled(!self.enabled);
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            tracing::debug!(enabled, "Auto sync switch toggled");
        }
        self.enabled = enabled;
    }

    /// Update the interval field.
    pub fn set_field(&mut self, minutes: SyncInterval) {
        self.field = minutes;
    }

    /// Current value of the interval field, shown or not.
    pub const fn field(&self) -> SyncInterval {
        self.field
    }

    /// Whether the interval field is visible.
    pub const fn field_visible(&self) -> bool {
        self.enabled
    }

    pub const fn save_label(&self) -> &'static str {
        if self.enabled {
            SAVE_AND_AUTO_SYNC_LABEL
        } else {
            SAVE_LABEL
        }
    }

    /// Interval written on save: the field value when on, zero when off.
    pub const fn stored_interval(&self) -> SyncInterval {
        if self.enabled {
            self.field
        } else {
            SyncInterval::DISABLED
        }
    }
}

impl Default for AutoSyncSwitch {
    fn default() -> Self {
        Self::from_interval(SyncInterval::DISABLED)
    }
}
