//! Numeric range checks used by request models.

use crate::extract::FieldError;

pub fn range_i64(field: &'static str, value: i64, min: i64, max: i64) -> Result<(), FieldError> {
    if value < min || value > max {
        return Err(FieldError::new(
            field,
            format!("must be between {min} and {max}, got {value}"),
        ));
    }
    Ok(())
}

pub fn range_f64(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), FieldError> {
    if !value.is_finite() {
        return Err(FieldError::new(field, "must be a finite number"));
    }
    if value < min || value > max {
        return Err(FieldError::new(
            field,
            format!("must be between {min} and {max}, got {value}"),
        ));
    }
    Ok(())
}

pub fn optional_range_f64(
    field: &'static str,
    value: Option<f64>,
    min: f64,
    max: f64,
) -> Result<(), FieldError> {
    match value {
        Some(value) => range_f64(field, value, min, max),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(range_i64("age", 18, 18, 120).is_ok());
        assert!(range_i64("age", 120, 18, 120).is_ok());
        assert!(range_i64("age", 17, 18, 120).is_err());
        assert!(range_i64("age", 121, 18, 120).is_err());
    }

    #[test]
    fn test_non_finite_floats_are_rejected() {
        assert!(range_f64("bicarbonate", f64::NAN, 5.0, 35.0).is_err());
        assert!(range_f64("bicarbonate", f64::INFINITY, 5.0, 35.0).is_err());
    }

    #[test]
    fn test_optional_range_accepts_absent_values() {
        assert!(optional_range_f64("measured_pco2", None, 10.0, 80.0).is_ok());
        assert!(optional_range_f64("measured_pco2", Some(9.0), 10.0, 80.0).is_err());
    }
}
