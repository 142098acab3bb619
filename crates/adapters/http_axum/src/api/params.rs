//! Query parameter validation shared by the billing handlers.

use fleetbill_domain::calculation::CalculationType;
use fleetbill_domain::error::ValidationError;
use fleetbill_domain::id::DeviceId;
use fleetbill_domain::period::YearMonth;

/// Treat absent and empty parameters alike.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse a mandatory `month` parameter.
pub(crate) fn month(value: Option<&str>) -> Result<YearMonth, ValidationError> {
    present(value).ok_or(ValidationError::Month)?.parse()
}

/// Parse the `month` + `deviceId` pair of the utilization endpoint.
pub(crate) fn month_and_device(
    month: Option<&str>,
    device_id: Option<&str>,
) -> Result<(YearMonth, DeviceId), ValidationError> {
    let (Some(month), Some(device_id)) = (present(month), present(device_id)) else {
        return Err(ValidationError::MonthAndDevice);
    };
    Ok((month.parse()?, device_id.parse()?))
}

/// Resolve the optional `calculationType` override.
pub(crate) fn calculation_type(
    value: Option<&str>,
    default: CalculationType,
) -> Result<CalculationType, ValidationError> {
    present(value).map_or(Ok(default), str::parse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_require_month() {
        assert_eq!(month(None), Err(ValidationError::Month));
        assert_eq!(month(Some("")), Err(ValidationError::Month));
        assert_eq!(month(Some("January")), Err(ValidationError::Month));
        assert_eq!(month(Some("2024-01")).unwrap().to_string(), "2024-01");
    }

    #[test]
    fn should_require_both_month_and_device() {
        assert_eq!(
            month_and_device(Some("2024-01"), None),
            Err(ValidationError::MonthAndDevice)
        );
        assert_eq!(
            month_and_device(None, Some("3")),
            Err(ValidationError::MonthAndDevice)
        );
        assert_eq!(
            month_and_device(Some("2024-01"), Some("three")),
            Err(ValidationError::DeviceId)
        );
        let (m, d) = month_and_device(Some("2024-01"), Some("3")).unwrap();
        assert_eq!((m.to_string(), d.as_i64()), ("2024-01".to_string(), 3));
    }

    #[test]
    fn should_fall_back_to_default_calculation_type() {
        assert_eq!(
            calculation_type(None, CalculationType::Individual),
            Ok(CalculationType::Individual)
        );
        assert_eq!(
            calculation_type(Some("group"), CalculationType::Individual),
            Ok(CalculationType::Group)
        );
        assert_eq!(
            calculation_type(Some("both"), CalculationType::Group),
            Err(ValidationError::CalculationType)
        );
    }
}
