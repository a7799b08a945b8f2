//! Building configuration.
//!
//! # Sentinel values
//!
//! Every integer setting starts at [`UNSET`] (`-1`).  The driver loads what it
//! can (typically from a JSON file), asks [`BuildingConfig::missing_settings`]
//! which values are still unset, prompts for them, and stores each answer via
//! the checked setter.  Setters reject invalid values immediately; nothing is
//! ever clamped or retried.
//!
//! ```json
//! { "numberOfFloors": 10, "numberOfElevators": 3, "maxElevatorCapacity": 8 }
//! ```
//!
//! Keys absent from the file stay unset.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{LiftError, LiftResult};

/// Sentinel meaning "not configured yet".
pub const UNSET: i32 = -1;

/// Seed used when the file does not supply one.
const DEFAULT_SEED: u64 = 42;

/// The four integer settings an operator may be prompted for.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Setting {
    NumberOfFloors,
    NumberOfElevators,
    MaxElevatorCapacity,
    DefaultStartingFloor,
}

impl Setting {
    /// All settings, in the order they are validated and prompted.
    pub const ALL: [Setting; 4] = [
        Setting::NumberOfFloors,
        Setting::NumberOfElevators,
        Setting::MaxElevatorCapacity,
        Setting::DefaultStartingFloor,
    ];

    /// The JSON key of this setting.
    pub fn key(self) -> &'static str {
        match self {
            Setting::NumberOfFloors       => "numberOfFloors",
            Setting::NumberOfElevators    => "numberOfElevators",
            Setting::MaxElevatorCapacity  => "maxElevatorCapacity",
            Setting::DefaultStartingFloor => "defaultStartingFloor",
        }
    }

    /// Human-readable prompt text.
    pub fn prompt(self) -> &'static str {
        match self {
            Setting::NumberOfFloors       => "Number of floors",
            Setting::NumberOfElevators    => "Number of elevators",
            Setting::MaxElevatorCapacity  => "Maximum passengers per elevator",
            Setting::DefaultStartingFloor => "Default starting floor for elevators",
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ── BuildingConfig ────────────────────────────────────────────────────────────

/// Everything needed to construct a building.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildingConfig {
    number_of_floors:       i32,
    number_of_elevators:    i32,
    max_elevator_capacity:  i32,
    default_starting_floor: i32,
    /// Master RNG seed for rider destinations.
    pub seed:               u64,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            number_of_floors:       UNSET,
            number_of_elevators:    UNSET,
            max_elevator_capacity:  UNSET,
            default_starting_floor: UNSET,
            seed:                   DEFAULT_SEED,
        }
    }
}

impl BuildingConfig {
    /// A config with every setting unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// A fully populated config.  Each value goes through its checked setter.
    pub fn with_values(
        floors:        i32,
        elevators:     i32,
        capacity:      i32,
        starting_floor: i32,
    ) -> LiftResult<Self> {
        let mut config = Self::new();
        config.set_number_of_floors(floors)?;
        config.set_number_of_elevators(elevators)?;
        config.set_max_elevator_capacity(capacity)?;
        config.set_default_starting_floor(starting_floor)?;
        Ok(config)
    }

    // ── Checked setters ───────────────────────────────────────────────────

    pub fn set_number_of_floors(&mut self, n: i32) -> LiftResult<()> {
        check(Setting::NumberOfFloors, n)?;
        self.number_of_floors = n;
        Ok(())
    }

    pub fn set_number_of_elevators(&mut self, n: i32) -> LiftResult<()> {
        check(Setting::NumberOfElevators, n)?;
        self.number_of_elevators = n;
        Ok(())
    }

    pub fn set_max_elevator_capacity(&mut self, n: i32) -> LiftResult<()> {
        check(Setting::MaxElevatorCapacity, n)?;
        self.max_elevator_capacity = n;
        Ok(())
    }

    pub fn set_default_starting_floor(&mut self, n: i32) -> LiftResult<()> {
        check(Setting::DefaultStartingFloor, n)?;
        self.default_starting_floor = n;
        Ok(())
    }

    /// Store `value` into `setting` through the matching checked setter.
    pub fn set(&mut self, setting: Setting, value: i32) -> LiftResult<()> {
        match setting {
            Setting::NumberOfFloors       => self.set_number_of_floors(value),
            Setting::NumberOfElevators    => self.set_number_of_elevators(value),
            Setting::MaxElevatorCapacity  => self.set_max_elevator_capacity(value),
            Setting::DefaultStartingFloor => self.set_default_starting_floor(value),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The raw stored value, including the `UNSET` sentinel.
    pub fn raw(&self, setting: Setting) -> i32 {
        match setting {
            Setting::NumberOfFloors       => self.number_of_floors,
            Setting::NumberOfElevators    => self.number_of_elevators,
            Setting::MaxElevatorCapacity  => self.max_elevator_capacity,
            Setting::DefaultStartingFloor => self.default_starting_floor,
        }
    }

    /// The value of `setting` if it is set and valid.
    pub fn get(&self, setting: Setting) -> Option<i32> {
        let v = self.raw(setting);
        (v != UNSET && check(setting, v).is_ok()).then_some(v)
    }

    /// Settings still holding the `UNSET` sentinel, in prompt order.
    pub fn missing_settings(&self) -> Vec<Setting> {
        Setting::ALL
            .into_iter()
            .filter(|&s| self.raw(s) == UNSET)
            .collect()
    }

    /// `true` once every setting holds a valid value.
    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check every setting; the first unset or invalid one is returned as an
    /// error.  Values loaded through serde bypass the setters, so callers
    /// building from a file must validate before use.
    pub fn validate(&self) -> LiftResult<()> {
        for setting in Setting::ALL {
            let v = self.raw(setting);
            if v == UNSET {
                return Err(LiftError::Unset(setting));
            }
            check(setting, v)?;
        }
        Ok(())
    }

    /// Validated number of floors.
    pub fn number_of_floors(&self) -> LiftResult<i32> {
        self.require(Setting::NumberOfFloors)
    }

    pub fn number_of_elevators(&self) -> LiftResult<i32> {
        self.require(Setting::NumberOfElevators)
    }

    pub fn max_elevator_capacity(&self) -> LiftResult<i32> {
        self.require(Setting::MaxElevatorCapacity)
    }

    /// The default starting floor, or `None` if unset.
    pub fn default_starting_floor(&self) -> Option<i32> {
        self.get(Setting::DefaultStartingFloor)
    }

    fn require(&self, setting: Setting) -> LiftResult<i32> {
        let v = self.raw(setting);
        if v == UNSET {
            return Err(LiftError::Unset(setting));
        }
        check(setting, v)?;
        Ok(v)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn check(setting: Setting, v: i32) -> LiftResult<()> {
    match setting {
        Setting::NumberOfFloors if v <= 0       => Err(LiftError::InvalidFloorCount(v)),
        Setting::NumberOfElevators if v < 1     => Err(LiftError::InvalidElevatorCount(v)),
        Setting::MaxElevatorCapacity if v <= 0  => Err(LiftError::InvalidCapacity(v)),
        Setting::DefaultStartingFloor if v < 0  => Err(LiftError::InvalidStartingFloor(v)),
        _ => Ok(()),
    }
}
