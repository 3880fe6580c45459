/// Normalized service duration as entered in the catalog.
///
/// Catalog entries store their approximate duration as free text
/// ("2:30", "2 horas e 30 minutos", "90"), so booking snapshots it
/// through [`parse_service_duration`] at the moment the appointment
/// is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceDuration {
    pub hours: u32,
    pub minutes: u32,
}

impl ServiceDuration {
    pub fn total_minutes(&self) -> i64 {
        i64::from(self.hours) * 60 + i64::from(self.minutes)
    }
}

/// Parse a free-form duration string into hours and minutes.
///
/// This parser is deliberately permissive and never fails: malformed
/// input degrades to a best-effort result instead of an error, because
/// the catalog field is operator-entered free text. Callers must not
/// rely on it rejecting garbage. Do not turn this into a fallible
/// parser without revisiting every booking call site.
///
/// Rules:
/// - everything except ASCII digits and `:` is stripped, repeated
///   colons are collapsed and leading/trailing colons trimmed;
/// - an empty result defaults to 1 hour;
/// - a single segment is read as HOURS ("90" means 90 hours, not 90
///   minutes). This is almost certainly not what a bare number means
///   in this domain, but it is the behavior existing catalog data was
///   entered against, so it is kept for compatibility until the
///   product owner rules on it;
/// - with two or more segments the first two are hours and minutes,
///   the rest are ignored; a segment that fails to parse counts as 0.
pub fn parse_service_duration(raw: &str) -> ServiceDuration {
    let mut normalized = String::with_capacity(raw.len());
    let mut last_was_colon = false;
    for c in raw.chars() {
        if c.is_ascii_digit() {
            normalized.push(c);
            last_was_colon = false;
        } else if c == ':' && !last_was_colon {
            normalized.push(':');
            last_was_colon = true;
        }
    }
    let normalized = normalized.trim_matches(':');

    if normalized.is_empty() {
        return ServiceDuration { hours: 1, minutes: 0 };
    }

    let mut segments = normalized.split(':');
    let hours = segments
        .next()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(0);
    let minutes = segments
        .next()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(0);

    ServiceDuration { hours, minutes }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(raw: &str) -> (u32, u32) {
        let d = parse_service_duration(raw);
        (d.hours, d.minutes)
    }

    #[test]
    fn colon_separated_hours_and_minutes() {
        assert_eq!(parsed("2:30"), (2, 30));
        assert_eq!(parsed("0:45"), (0, 45));
    }

    #[test]
    fn single_segment_is_hours() {
        // Compatibility quirk: a bare number is hours, not minutes.
        assert_eq!(parsed("90"), (90, 0));
        assert_eq!(parsed("1"), (1, 0));
    }

    #[test]
    fn empty_or_garbage_defaults_to_one_hour() {
        assert_eq!(parsed(""), (1, 0));
        assert_eq!(parsed("abc"), (1, 0));
        assert_eq!(parsed(":::"), (1, 0));
        assert_eq!(parsed("   "), (1, 0));
    }

    #[test]
    fn descriptive_words_are_stripped() {
        // Digits survive the strip and concatenate per the literal rule.
        assert_eq!(parsed("2 horas e 30 minutos"), (230, 0));
        assert_eq!(parsed("dura 1:15 aprox."), (1, 15));
    }

    #[test]
    fn repeated_and_dangling_colons_are_normalized() {
        assert_eq!(parsed("2::30"), (2, 30));
        assert_eq!(parsed(":2:30:"), (2, 30));
        assert_eq!(parsed("45:"), (45, 0));
    }

    #[test]
    fn extra_segments_are_ignored() {
        assert_eq!(parsed("1:20:59"), (1, 20));
    }

    #[test]
    fn overflowing_segment_parses_to_zero() {
        assert_eq!(parsed("99999999999:30"), (0, 30));
    }

    #[test]
    fn total_minutes() {
        assert_eq!(parse_service_duration("2:30").total_minutes(), 150);
        assert_eq!(parse_service_duration("").total_minutes(), 60);
    }
}
