use super::error::AppError;
use serde::{Deserialize, Serialize};

pub type SkipId = u64;

/// A skip as returned by the inventory API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skip {
    pub id: SkipId,
    pub size: u32,
    pub hire_period_days: u32,
    pub price_before_vat: f64,
    /// Percentage, e.g. `20.0` for 20% VAT.
    pub vat: f64,
    pub allowed_on_road: bool,
    pub allows_heavy_waste: bool,
    pub forbidden: bool,
    #[serde(default)]
    pub transport_cost: Option<f64>,
    #[serde(default)]
    pub per_tonne_cost: Option<f64>,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
}

impl Skip {
    /// Price including VAT, rounded to the nearest penny.
    pub fn total_price(&self) -> f64 {
        let with_vat = self.price_before_vat * (1.0 + self.vat / 100.0);
        (with_vat * 100.0).round() / 100.0
    }

    /// Checks the invariants the UI relies on for sorting and pricing.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.size == 0 {
            return Err(AppError::DataError(format!("Skip {} has zero size", self.id)));
        }
        if self.vat.is_nan() || self.vat < 0.0 {
            return Err(AppError::DataError(format!(
                "Skip {} has invalid VAT rate {}",
                self.id, self.vat
            )));
        }
        if self.price_before_vat.is_nan() || self.price_before_vat < 0.0 {
            return Err(AppError::DataError(format!(
                "Skip {} has invalid price {}",
                self.id, self.price_before_vat
            )));
        }
        Ok(())
    }

    /// Surcharges worth showing; zero-valued costs are treated as absent.
    pub fn surcharges(&self) -> (Option<f64>, Option<f64>) {
        let positive = |cost: Option<f64>| cost.filter(|c| *c > 0.0);
        (positive(self.transport_cost), positive(self.per_tonne_cost))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skip(price_before_vat: f64, vat: f64) -> Skip {
        Skip {
            id: 1,
            size: 6,
            hire_period_days: 14,
            price_before_vat,
            vat,
            allowed_on_road: true,
            allows_heavy_waste: false,
            forbidden: false,
            transport_cost: None,
            per_tonne_cost: None,
            postcode: None,
            area: None,
        }
    }

    #[test]
    fn test_total_price_rounds_to_pence() {
        assert_eq!(skip(311.0, 20.0).total_price(), 373.2);
        assert_eq!(skip(100.0, 17.5).total_price(), 117.5);
        assert_eq!(skip(0.0, 20.0).total_price(), 0.0);
    }

    #[test]
    fn test_validate_rejects_nan_vat() {
        assert!(skip(100.0, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_zero_surcharges_hidden() {
        let mut s = skip(100.0, 20.0);
        s.transport_cost = Some(0.0);
        s.per_tonne_cost = Some(25.0);
        assert_eq!(s.surcharges(), (None, Some(25.0)));
    }
}
