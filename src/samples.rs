//! Built-in sample cases
//!
//! Two reference cases ship with the crate: a small one that can be checked by
//! hand, and one whose base-3 shares run past 40 digits.

/// n = 4, k = 3; the secret is 3
pub const SAMPLE_ONE: &str = r#"{
    "keys": { "n": 4, "k": 3 },
    "1": { "base": "10", "value": "4" },
    "2": { "base": "2", "value": "111" },
    "3": { "base": "10", "value": "12" },
    "6": { "base": "4", "value": "213" }
}"#;

/// n = 10, k = 7; the first seven shares give -6290016743746469796
pub const SAMPLE_TWO: &str = r#"{
    "keys": { "n": 10, "k": 7 },
    "1": { "base": "6", "value": "13444211440455345511" },
    "2": { "base": "15", "value": "aed7015a346d635" },
    "3": { "base": "15", "value": "6aeeb69631c227c" },
    "4": { "base": "16", "value": "e1b5e05623d881f" },
    "5": { "base": "8", "value": "316034514573652620673" },
    "6": { "base": "3", "value": "2122212201122002221120200210011020220200" },
    "7": { "base": "3", "value": "20120221122211000100210021102001201112121" },
    "8": { "base": "6", "value": "20220554335330240002224253" },
    "9": { "base": "12", "value": "45153788322a1255483" },
    "10": { "base": "7", "value": "1101613130313526312514143" }
}"#;

/// Names and JSON documents of the built-in cases, in order
#[must_use]
pub fn builtin_cases() -> [(&'static str, &'static str); 2] {
    [("sample-1", SAMPLE_ONE), ("sample-2", SAMPLE_TWO)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TestCase;

    #[test]
    fn test_builtin_cases_parse() {
        for (name, json) in builtin_cases() {
            assert!(TestCase::from_json(json).is_ok(), "{name} should parse");
        }
    }

    #[test]
    fn test_second_sample_shape() {
        let case = TestCase::from_json(SAMPLE_TWO).unwrap();
        assert_eq!(*case.params().share_count(), 10);
        assert_eq!(*case.params().threshold(), 7);
        assert_eq!(case.shares().count(), 10);
    }
}
