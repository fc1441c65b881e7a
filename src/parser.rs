//! Record parsing
//!
//! Splits comma-delimited lines into typed records. Each record shape has its
//! own parser implementing [`RecordParser`]; both share the field-count and
//! scalar validation helpers below.

use crate::duration::parse_duration;
use crate::error::RecordError;
use crate::types::{StepRecord, TrainingRecord};

/// Trait for line parsers
pub trait RecordParser {
    type Record;

    /// Number of comma-separated fields a line must have
    const FIELD_COUNT: usize;

    /// Parse one raw line into a typed record
    fn parse(&self, line: &str) -> Result<Self::Record, RecordError>;
}

/// Parser for `<steps>,<duration>` lines
#[derive(Debug, Clone, Copy, Default)]
pub struct DailyStepsParser;

impl RecordParser for DailyStepsParser {
    type Record = StepRecord;
    const FIELD_COUNT: usize = 2;

    fn parse(&self, line: &str) -> Result<StepRecord, RecordError> {
        let fields = split_fields(line, Self::FIELD_COUNT)?;
        let steps = parse_steps(fields[0])?;
        let duration = parse_duration(fields[1])?;
        Ok(StepRecord { steps, duration })
    }
}

/// Parser for `<steps>,<activity>,<duration>` lines
#[derive(Debug, Clone, Copy, Default)]
pub struct TrainingParser;

impl RecordParser for TrainingParser {
    type Record = TrainingRecord;
    const FIELD_COUNT: usize = 3;

    fn parse(&self, line: &str) -> Result<TrainingRecord, RecordError> {
        let fields = split_fields(line, Self::FIELD_COUNT)?;
        let steps = parse_steps(fields[0])?;
        let duration = parse_duration(fields[2])?;
        // The label is not checked here; dispatch decides what it means
        Ok(TrainingRecord {
            steps,
            activity: fields[1].to_string(),
            duration,
        })
    }
}

/// Split a line on every comma, requiring exactly `expected` fields.
/// Empty fields are kept.
pub fn split_fields(line: &str, expected: usize) -> Result<Vec<&str>, RecordError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != expected {
        return Err(RecordError::FieldCount {
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}

/// Parse a base-10 step count. Signs are accepted, whitespace is not.
pub fn parse_steps(field: &str) -> Result<i64, RecordError> {
    field
        .parse::<i64>()
        .map_err(|_| RecordError::InvalidStepCount(field.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use chrono::Duration;

    #[test]
    fn test_parse_daily_steps() {
        let record = DailyStepsParser.parse("1000,0h10m").unwrap();
        assert_eq!(record.steps, 1000);
        assert_eq!(record.duration, Duration::minutes(10));
    }

    #[test]
    fn test_parse_training() {
        let record = TrainingParser.parse("3456,Ходьба,3h00m").unwrap();
        assert_eq!(record.steps, 3456);
        assert_eq!(record.activity, "Ходьба");
        assert_eq!(record.duration, Duration::hours(3));
    }

    #[test]
    fn test_unknown_label_parses() {
        let record = TrainingParser.parse("1000, плавание ,10m").unwrap();
        assert_eq!(record.activity, " плавание ");
    }

    #[test]
    fn test_wrong_field_count() {
        let err = DailyStepsParser.parse("1000").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert!(matches!(
            err,
            RecordError::FieldCount {
                expected: 2,
                found: 1
            }
        ));

        let err = TrainingParser.parse("1000,10m").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);

        let err = DailyStepsParser.parse("1000,Бег,10m").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_invalid_step_count() {
        for line in ["abc,10m", "1.5,10m", " 100,10m", ",10m", "99999999999999999999,10m"] {
            let err = DailyStepsParser.parse(line).unwrap_err();
            assert!(
                matches!(err, RecordError::InvalidStepCount(_)),
                "unexpected {err:?} for {line:?}"
            );
        }
    }

    #[test]
    fn test_invalid_duration() {
        for line in ["1000,notaduration", "1000,", "1000,10", "1000,-10m"] {
            let err = DailyStepsParser.parse(line).unwrap_err();
            assert!(
                matches!(err, RecordError::InvalidDuration(_)),
                "unexpected {err:?} for {line:?}"
            );
        }
    }

    #[test]
    fn test_signed_step_counts_parse() {
        assert_eq!(DailyStepsParser.parse("-5,10m").unwrap().steps, -5);
        assert_eq!(DailyStepsParser.parse("+5,10m").unwrap().steps, 5);
        assert_eq!(DailyStepsParser.parse("0,10m").unwrap().steps, 0);
    }

    #[test]
    fn test_steps_checked_before_duration() {
        let err = DailyStepsParser.parse("abc,xyz").unwrap_err();
        assert!(matches!(err, RecordError::InvalidStepCount(_)));
    }
}
