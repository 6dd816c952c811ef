/// Formats a number of seconds as human readable text.
pub trait DurationFormatter {
  fn format_seconds(&self, seconds: f64) -> String;
}

impl<T: DurationFormatter + ?Sized> DurationFormatter for &T {
  fn format_seconds(&self, seconds: f64) -> String {
    (**self).format_seconds(seconds)
  }
}

/// English durations such as `"1 hour, 30 minutes"`.
///
/// Units run from years (365.25 days) down to seconds; only non-zero units
/// are listed. Leftover milliseconds show up as decimal seconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct HumanDuration;

const UNITS: [(u64, &str, &str); 6] = [
  (31_557_600_000, "year", "years"),
  (2_629_800_000, "month", "months"),
  (604_800_000, "week", "weeks"),
  (86_400_000, "day", "days"),
  (3_600_000, "hour", "hours"),
  (60_000, "minute", "minutes"),
];

impl DurationFormatter for HumanDuration {
  fn format_seconds(&self, seconds: f64) -> String {
    if !seconds.is_finite() {
      return "0 seconds".to_string();
    }

    // float to int casts saturate
    let mut millis = (seconds.abs() * 1000.0).round() as u64;
    let mut parts: Vec<String> = Vec::new();

    for (unit, singular, plural) in UNITS {
      let count = millis / unit;
      if count == 0 {
        continue;
      }
      millis %= unit;
      let noun = if count == 1 { singular } else { plural };
      parts.push(format!("{} {}", count, noun));
    }

    if millis > 0 || parts.is_empty() {
      let noun = if millis == 1000 { "second" } else { "seconds" };
      if millis % 1000 == 0 {
        parts.push(format!("{} {}", millis / 1000, noun));
      } else {
        parts.push(format!("{} {}", millis as f64 / 1000.0, noun));
      }
    }

    parts.join(", ")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn fmt(seconds: f64) -> String {
    HumanDuration.format_seconds(seconds)
  }

  #[test]
  fn test_minutes() {
    assert_eq!(fmt(300.0), "5 minutes");
    assert_eq!(fmt(60.0), "1 minute");
  }

  #[test]
  fn test_mixed_units() {
    assert_eq!(fmt(5400.0), "1 hour, 30 minutes");
    assert_eq!(fmt(90061.0), "1 day, 1 hour, 1 minute, 1 second");
    assert_eq!(fmt(1_209_600.0), "2 weeks");
  }

  #[test]
  fn test_calendar_units() {
    assert_eq!(fmt(31_557_600.0), "1 year");
    assert_eq!(fmt(2_629_800.0), "1 month");
  }

  #[test]
  fn test_fractional_seconds() {
    assert_eq!(fmt(1.5), "1.5 seconds");
    assert_eq!(fmt(61.25), "1 minute, 1.25 seconds");
  }

  #[test]
  fn test_zero_negative_and_non_finite() {
    assert_eq!(fmt(0.0), "0 seconds");
    assert_eq!(fmt(-120.0), "2 minutes");
    assert_eq!(fmt(f64::NAN), "0 seconds");
    assert_eq!(fmt(f64::INFINITY), "0 seconds");
  }
}
