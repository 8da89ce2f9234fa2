//! Appliance load estimator backing the impact calculator page.
//!
//! The entry collection owned by [`Estimator`] is the single source of
//! truth; the rendered list is a projection of it and totals are always
//! re-derived from the stored entries, never from display text.

use thiserror::Error;

/// Assumed loadshedding exposure per day, in hours
pub const OUTAGE_HOURS_PER_DAY: f64 = 4.0;

/// Backup battery system voltage, in volts
pub const SYSTEM_VOLTAGE: f64 = 12.0;

/// Validation errors for calculator input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EstimatorError {
    #[error("Please select an appliance and enter hours used")]
    MissingInput,
    #[error("Please enter valid wattage for custom appliance")]
    InvalidWattage,
}

/// Fixed appliance catalog plus the custom sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplianceKind {
    Fridge,
    Tv,
    Computer,
    Lights,
    Custom,
}

impl ApplianceKind {
    /// Parse a select value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "fridge" => Some(Self::Fridge),
            "tv" => Some(Self::Tv),
            "computer" => Some(Self::Computer),
            "lights" => Some(Self::Lights),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    /// Catalog wattage; `None` for custom entries
    pub fn watts(&self) -> Option<u32> {
        match self {
            Self::Fridge => Some(200),
            Self::Tv => Some(150),
            Self::Computer => Some(300),
            Self::Lights => Some(100),
            Self::Custom => None,
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fridge => "Fridge",
            Self::Tv => "TV",
            Self::Computer => "Computer",
            Self::Lights => "Lights",
            Self::Custom => "Custom Appliance",
        }
    }
}

/// One appliance the user declared
#[derive(Debug, Clone, PartialEq)]
pub struct ApplianceEntry {
    /// Stable handle for removal; unique within one estimator
    pub id: u64,
    pub name: &'static str,
    pub watts: u32,
    pub hours_per_day: f64,
}

/// Derived consumption figures, kept at full precision
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EstimateTotals {
    pub total_daily_wh: f64,
    pub outage_wh: f64,
    pub battery_ah: f64,
}

impl EstimateTotals {
    /// Daily consumption for display, kWh with two decimals
    pub fn daily_kwh_display(&self) -> String {
        format!("{:.2}", self.total_daily_wh / 1000.0)
    }

    /// Outage-window consumption for display, kWh with two decimals
    pub fn outage_kwh_display(&self) -> String {
        format!("{:.2}", self.outage_wh / 1000.0)
    }

    /// Required battery capacity for display, Ah with one decimal
    pub fn battery_ah_display(&self) -> String {
        format!("{:.1}", self.battery_ah)
    }
}

/// The appliance collection and its id counter
#[derive(Debug, Clone, Default)]
pub struct Estimator {
    entries: Vec<ApplianceEntry>,
    next_id: u64,
}

impl Estimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[ApplianceEntry] {
        &self.entries
    }

    /// Validate raw form input and append an entry.
    ///
    /// Validation order: a missing selection or empty/unparseable hours
    /// field rejects first; a custom entry then needs a positive integer
    /// wattage. On error the collection is left untouched.
    pub fn add_entry(
        &mut self,
        catalog_key: &str,
        custom_watts: &str,
        hours: &str,
    ) -> Result<&ApplianceEntry, EstimatorError> {
        if catalog_key.is_empty() || hours.trim().is_empty() {
            return Err(EstimatorError::MissingInput);
        }

        let hours_per_day: f64 = hours
            .trim()
            .parse()
            .map_err(|_| EstimatorError::MissingInput)?;
        if !hours_per_day.is_finite() || hours_per_day < 0.0 {
            return Err(EstimatorError::MissingInput);
        }

        let kind = ApplianceKind::from_key(catalog_key).ok_or(EstimatorError::MissingInput)?;

        let watts = match kind.watts() {
            Some(watts) => watts,
            None => {
                let watts: u32 = custom_watts.trim().parse().unwrap_or(0);
                if watts == 0 {
                    return Err(EstimatorError::InvalidWattage);
                }
                watts
            }
        };

        let entry = ApplianceEntry {
            id: self.next_id,
            name: kind.label(),
            watts,
            hours_per_day,
        };
        self.next_id += 1;
        let index = self.entries.len();
        self.entries.push(entry);

        Ok(&self.entries[index])
    }

    /// Remove the entry with the given handle. A second removal of the
    /// same handle is a no-op.
    pub fn remove(&mut self, id: u64) {
        self.entries.retain(|entry| entry.id != id);
    }

    /// Recompute totals from scratch over the stored entries
    pub fn totals(&self) -> EstimateTotals {
        let total_daily_wh: f64 = self
            .entries
            .iter()
            .map(|entry| f64::from(entry.watts) * entry.hours_per_day)
            .sum();

        let outage_wh = total_daily_wh * (OUTAGE_HOURS_PER_DAY / 24.0);
        let battery_ah = outage_wh / SYSTEM_VOLTAGE;

        EstimateTotals {
            total_daily_wh,
            outage_wh,
            battery_ah,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_sum_watt_hours_exactly() {
        let mut estimator = Estimator::new();
        estimator.add_entry("fridge", "", "5").unwrap();
        estimator.add_entry("tv", "", "2.5").unwrap();
        estimator.add_entry("custom", "450", "1").unwrap();

        let totals = estimator.totals();
        assert_eq!(totals.total_daily_wh, 200.0 * 5.0 + 150.0 * 2.5 + 450.0);
    }

    #[test]
    fn test_remove_matches_never_added() {
        let mut with_removal = Estimator::new();
        with_removal.add_entry("fridge", "", "5").unwrap();
        let removed_id = with_removal.add_entry("lights", "", "6").unwrap().id;
        with_removal.add_entry("computer", "", "3").unwrap();
        with_removal.remove(removed_id);

        let mut without = Estimator::new();
        without.add_entry("fridge", "", "5").unwrap();
        without.add_entry("computer", "", "3").unwrap();

        assert_eq!(with_removal.totals(), without.totals());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut estimator = Estimator::new();
        let id = estimator.add_entry("tv", "", "4").unwrap().id;
        estimator.remove(id);
        estimator.remove(id);

        assert!(estimator.entries().is_empty());
    }

    #[test]
    fn test_zero_custom_wattage_rejected() {
        let mut estimator = Estimator::new();
        let before = estimator.entries().len();

        let result = estimator.add_entry("custom", "0", "2");

        assert_eq!(result.unwrap_err(), EstimatorError::InvalidWattage);
        assert_eq!(estimator.entries().len(), before);
    }

    #[test]
    fn test_unparseable_custom_wattage_rejected() {
        let mut estimator = Estimator::new();

        let result = estimator.add_entry("custom", "lots", "2");

        assert_eq!(result.unwrap_err(), EstimatorError::InvalidWattage);
        assert!(estimator.entries().is_empty());
    }

    #[test]
    fn test_missing_selection_or_hours_rejected() {
        let mut estimator = Estimator::new();

        assert_eq!(
            estimator.add_entry("", "", "2").unwrap_err(),
            EstimatorError::MissingInput
        );
        assert_eq!(
            estimator.add_entry("fridge", "", "").unwrap_err(),
            EstimatorError::MissingInput
        );
        assert_eq!(
            estimator.add_entry("fridge", "", "soon").unwrap_err(),
            EstimatorError::MissingInput
        );
        assert!(estimator.entries().is_empty());
    }

    #[test]
    fn test_catalog_lookup_ignores_custom_watts() {
        let mut estimator = Estimator::new();
        let id = {
            let entry = estimator.add_entry("fridge", "9999", "3").unwrap();
            assert_eq!(entry.watts, 200);
            assert_eq!(entry.name, "Fridge");
            entry.id
        };

        estimator.remove(id);
        assert_eq!(estimator.totals(), EstimateTotals::default());
    }

    #[test]
    fn test_duplicates_permitted_in_insertion_order() {
        let mut estimator = Estimator::new();
        estimator.add_entry("lights", "", "2").unwrap();
        estimator.add_entry("lights", "", "2").unwrap();

        assert_eq!(estimator.entries().len(), 2);
        assert_ne!(estimator.entries()[0].id, estimator.entries()[1].id);
        assert_eq!(estimator.totals().total_daily_wh, 400.0);
    }

    #[test]
    fn test_worked_example_fridge_and_computer() {
        let mut estimator = Estimator::new();
        estimator.add_entry("fridge", "", "5").unwrap();
        estimator.add_entry("computer", "", "3").unwrap();

        let totals = estimator.totals();
        assert_eq!(totals.total_daily_wh, 1900.0);
        assert!((totals.outage_wh - 1900.0 * 4.0 / 24.0).abs() < 1e-9);
        assert!((totals.battery_ah - 26.388_888_888).abs() < 1e-6);

        assert_eq!(totals.daily_kwh_display(), "1.90");
        assert_eq!(totals.outage_kwh_display(), "0.32");
        assert_eq!(totals.battery_ah_display(), "26.4");
    }

    #[test]
    fn test_empty_collection_yields_zero_totals() {
        let estimator = Estimator::new();
        let totals = estimator.totals();

        assert_eq!(totals.total_daily_wh, 0.0);
        assert_eq!(totals.outage_wh, 0.0);
        assert_eq!(totals.battery_ah, 0.0);
    }
}
