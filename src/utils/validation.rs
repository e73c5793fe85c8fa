use crate::utils::error::{Result, TravelError};

/// Configuration-level sanity checks. Domain values are never validated here.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| TravelError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_known_value<T: PartialEq + std::fmt::Display>(
    field_name: &str,
    value: &T,
    known: &[T],
) -> Result<()> {
    if !known.contains(value) {
        return Err(TravelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "No matching entry exists".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_field() {
        let present = Some(3u32);
        let missing: Option<u32> = None;
        assert_eq!(*validate_required_field("report.detail_passenger", &present).unwrap(), 3);
        assert!(matches!(
            validate_required_field("report.detail_passenger", &missing),
            Err(TravelError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_known_value() {
        assert!(validate_known_value("report.detail_passenger", &2u32, &[1, 2, 3]).is_ok());
        assert!(validate_known_value("report.detail_passenger", &9u32, &[1, 2, 3]).is_err());
    }
}
