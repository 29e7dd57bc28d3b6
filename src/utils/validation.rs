use crate::error::ScheduleError;

/// Number of digits in a group number.
pub const GROUP_NUMBER_LEN: usize = 4;

pub fn validate_group_number(input: &str) -> Result<(), ScheduleError> {
    let invalid = |reason| ScheduleError::InvalidGroup {
        input: input.to_string(),
        reason,
    };

    if input.is_empty() {
        return Err(invalid("cannot be empty"));
    }

    if !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid("must contain only digits"));
    }

    // all ASCII at this point, so byte length equals char count
    if input.len() != GROUP_NUMBER_LEN {
        return Err(invalid("must be exactly 4 digits"));
    }

    Ok(())
}
