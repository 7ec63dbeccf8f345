//! Request builder: turns a submitted form into a validated `PredictionInput`.
//!
//! Form values arrive as loose JSON. Numbers and numeric strings are accepted
//! (forms post text inputs); anything else is rejected per field. Every
//! offending field is reported, not only the first.

use serde::Deserialize;
use serde_json::Value;

use crate::errors::FieldError;
use crate::prediction::models::PredictionInput;

pub const ENERGY_CONSUMPTION: &str = "energyConsumption";
pub const TRAVEL_DISTANCE: &str = "travelDistance";
pub const WASTE_GENERATION: &str = "wasteGeneration";
pub const COMPANY_SIZE: &str = "companySize";
pub const RECYCLING_RATE: &str = "currentRecyclingRate";
pub const RENEWABLE_MIX: &str = "currentRenewableEnergyMix";

/// Raw prediction form as posted by a client.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionForm {
    pub energy_consumption: Option<Value>,
    pub travel_distance: Option<Value>,
    pub waste_generation: Option<Value>,
    pub company_size: Option<Value>,
    pub current_recycling_rate: Option<Value>,
    pub current_renewable_energy_mix: Option<Value>,
}

/// Builds a `PredictionInput` from the form, or returns every field error.
pub fn build_input(form: &PredictionForm) -> Result<PredictionInput, Vec<FieldError>> {
    let mut errors = Vec::new();

    let energy = required_number(ENERGY_CONSUMPTION, form.energy_consumption.as_ref(), &mut errors);
    let travel = required_number(TRAVEL_DISTANCE, form.travel_distance.as_ref(), &mut errors);
    let waste = required_number(WASTE_GENERATION, form.waste_generation.as_ref(), &mut errors);
    let size = required_number(COMPANY_SIZE, form.company_size.as_ref(), &mut errors);
    let recycling = optional_number(RECYCLING_RATE, form.current_recycling_rate.as_ref(), &mut errors);
    let renewable = optional_number(
        RENEWABLE_MIX,
        form.current_renewable_energy_mix.as_ref(),
        &mut errors,
    );

    let company_size = size.and_then(|s| {
        if s.fract() != 0.0 {
            errors.push(FieldError::new(COMPANY_SIZE, "Company size must be a whole number"));
            None
        } else if s < 1.0 {
            errors.push(FieldError::new(COMPANY_SIZE, "Company size must be at least 1"));
            None
        } else if s > u32::MAX as f64 {
            errors.push(FieldError::new(COMPANY_SIZE, "Company size is too large"));
            None
        } else {
            Some(s as u32)
        }
    });

    // Range checks on the typed values are shared with `validate_input`.
    match (energy, travel, waste, company_size) {
        (Some(energy), Some(travel), Some(waste), Some(size)) if errors.is_empty() => {
            let input = PredictionInput {
                energy_consumption: energy,
                travel_distance: travel,
                waste_generation: waste,
                company_size: size,
                current_recycling_rate: recycling,
                current_renewable_energy_mix: renewable,
            };
            validate_input(&input)?;
            Ok(input)
        }
        _ => {
            // Surface range errors for the fields that did parse as well.
            let partial = PredictionInput {
                energy_consumption: energy.unwrap_or(0.0),
                travel_distance: travel.unwrap_or(0.0),
                waste_generation: waste.unwrap_or(0.0),
                company_size: company_size.unwrap_or(1),
                current_recycling_rate: recycling,
                current_renewable_energy_mix: renewable,
            };
            if let Err(range_errors) = validate_input(&partial) {
                errors.extend(range_errors);
            }
            Err(errors)
        }
    }
}

/// Range checks for an already-typed input.
///
/// Run before every model call so that callers holding a `PredictionInput`
/// directly cannot bypass the form rules.
pub fn validate_input(input: &PredictionInput) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    non_negative(ENERGY_CONSUMPTION, "Energy consumption", input.energy_consumption, &mut errors);
    non_negative(TRAVEL_DISTANCE, "Travel distance", input.travel_distance, &mut errors);
    non_negative(WASTE_GENERATION, "Waste generation", input.waste_generation, &mut errors);

    if input.company_size < 1 {
        errors.push(FieldError::new(COMPANY_SIZE, "Company size must be at least 1"));
    }

    percentage(RECYCLING_RATE, "Recycling rate", input.current_recycling_rate, &mut errors);
    percentage(RENEWABLE_MIX, "Renewable energy mix", input.current_renewable_energy_mix, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn non_negative(field: &str, label: &str, value: f64, errors: &mut Vec<FieldError>) {
    if !value.is_finite() {
        errors.push(FieldError::new(field, format!("{label} must be a number")));
    } else if value < 0.0 {
        errors.push(FieldError::new(field, format!("{label} must not be negative")));
    }
}

fn percentage(field: &str, label: &str, value: Option<f64>, errors: &mut Vec<FieldError>) {
    if let Some(v) = value {
        if !v.is_finite() || !(0.0..=100.0).contains(&v) {
            errors.push(FieldError::new(
                field,
                format!("{label} must be a percentage between 0 and 100"),
            ));
        }
    }
}

fn required_number(field: &str, value: Option<&Value>, errors: &mut Vec<FieldError>) -> Option<f64> {
    match value {
        None | Some(Value::Null) => {
            errors.push(FieldError::new(field, "This field is required"));
            None
        }
        Some(Value::String(s)) if s.trim().is_empty() => {
            errors.push(FieldError::new(field, "This field is required"));
            None
        }
        Some(v) => coerce(field, v, errors),
    }
}

fn optional_number(field: &str, value: Option<&Value>, errors: &mut Vec<FieldError>) -> Option<f64> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.trim().is_empty() => None,
        Some(v) => coerce(field, v, errors),
    }
}

fn coerce(field: &str, value: &Value, errors: &mut Vec<FieldError>) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(n) if n.is_finite() => Some(n),
        _ => {
            errors.push(FieldError::new(field, "Must be a number"));
            None
        }
    }
}
