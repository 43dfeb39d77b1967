/// File name of the downloaded capture. No extension is added.
pub const RECORDER_OUTPUT_NAME: &str = "RecorderOutput";

pub const DEFAULT_RECORD_PROMPT: &str = "Number of milliseconds";

/// Answer to the timeslice prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntervalInput {
    Cancelled,
    Millis(u32),
}

/// Interprets the prompt answer the way `recorder.start(parseInt(answer))`
/// does. `parseInt` takes leading whitespace, an optional sign, an optional
/// `0x` prefix, then as many digits as are present, ignoring trailing
/// garbage. The timeslice is a WebIDL `unsigned long`, so NaN (no digits)
/// becomes 0 and other values wrap modulo 2^32.
pub fn parse_interval(input: Option<&str>) -> IntervalInput {
    let Some(raw) = input else {
        return IntervalInput::Cancelled;
    };

    let mut rest = raw.trim_start();
    let negative = match rest.as_bytes().first() {
        Some(b'-') => {
            rest = &rest[1..];
            true
        }
        Some(b'+') => {
            rest = &rest[1..];
            false
        }
        _ => false,
    };

    let (digits, radix) = match rest.get(..2) {
        Some("0x") | Some("0X") => (&rest[2..], 16),
        _ => (rest, 10),
    };

    let magnitude = digits
        .chars()
        .map_while(|c| c.to_digit(radix))
        .fold(0u32, |acc, d| acc.wrapping_mul(radix).wrapping_add(d));

    if negative {
        IntervalInput::Millis(magnitude.wrapping_neg())
    } else {
        IntervalInput::Millis(magnitude)
    }
}

/// Lets exactly one event through.
#[derive(Debug, Default)]
pub struct SingleShot {
    fired: bool,
}

impl SingleShot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true on the first call only.
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// Result of a "Record Stream" click
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    Started { timeslice_ms: u32 },
    Cancelled,
    /// The clicked stream is no longer the one on display
    Stale,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_interval_cancel() {
        assert_eq!(parse_interval(None), IntervalInput::Cancelled);
    }

    #[test]
    fn test_parse_interval_plain_and_padded() {
        assert_eq!(parse_interval(Some("1000")), IntervalInput::Millis(1000));
        assert_eq!(parse_interval(Some("  250")), IntervalInput::Millis(250));
        assert_eq!(parse_interval(Some("+40")), IntervalInput::Millis(40));
    }

    #[test]
    fn test_parse_interval_ignores_trailing_text() {
        assert_eq!(parse_interval(Some("500ms")), IntervalInput::Millis(500));
        assert_eq!(parse_interval(Some("12.9")), IntervalInput::Millis(12));
    }

    #[test]
    fn test_parse_interval_hex_prefix() {
        assert_eq!(parse_interval(Some("0x10")), IntervalInput::Millis(16));
        assert_eq!(parse_interval(Some("0xg")), IntervalInput::Millis(0));
    }

    #[test]
    fn test_parse_interval_no_digits_is_zero() {
        assert_eq!(parse_interval(Some("")), IntervalInput::Millis(0));
        assert_eq!(parse_interval(Some("abc")), IntervalInput::Millis(0));
        assert_eq!(parse_interval(Some("-")), IntervalInput::Millis(0));
    }

    #[test]
    fn test_parse_interval_wraps_like_unsigned_long() {
        assert_eq!(parse_interval(Some("-5")), IntervalInput::Millis(4_294_967_291));
        assert_eq!(parse_interval(Some("-0")), IntervalInput::Millis(0));
        assert_eq!(parse_interval(Some("4294967296")), IntervalInput::Millis(0));
        assert_eq!(parse_interval(Some("4294967297")), IntervalInput::Millis(1));
    }

    #[test]
    fn test_single_shot_fires_once() {
        let mut shot = SingleShot::new();
        assert!(!shot.has_fired());
        assert!(shot.fire());
        assert!(!shot.fire());
        assert!(shot.has_fired());
    }
}
