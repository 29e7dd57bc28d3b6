use etu_schedule_bot::error::ScheduleError;
use etu_schedule_bot::schedule::Group;
use etu_schedule_bot::utils::validation::*;

#[cfg(test)]
mod validation_tests {
    use super::*;

    #[test]
    fn test_valid_group_numbers() {
        let valid_groups = vec!["3381", "0303", "1000", "9999", "0000"];

        for group in valid_groups {
            assert!(validate_group_number(group).is_ok(), "Should accept group: {}", group);
        }
    }

    #[test]
    fn test_invalid_group_numbers() {
        let invalid_groups = vec![
            "",      // Empty
            "338",   // Too short
            "33811", // Too long
            "33a1",  // Letter
            "33.1",  // Punctuation
            "3 81",  // Inner space
            "٣٣٨١",  // Non-ASCII digits
            "Матан", // Not a number at all
        ];

        for group in invalid_groups {
            assert!(validate_group_number(group).is_err(), "Should reject group: {}", group);
        }
    }

    #[test]
    fn test_validation_error_is_user_correctable() {
        let err = validate_group_number("12").unwrap_err();
        assert!(err.is_user_correctable());
        assert!(matches!(err, ScheduleError::InvalidGroup { .. }));
    }

    #[test]
    fn test_group_parse_trims_input() {
        let group = Group::parse("  3381\n").unwrap();
        assert_eq!(group.as_str(), "3381");
        assert_eq!(group.to_string(), "3381");
    }

    #[test]
    fn test_group_parse_rejects_invalid() {
        assert!(Group::parse("").is_err());
        assert!(Group::parse("33 81").is_err());
        assert!(Group::parse("/start").is_err());
    }
}
