// Azure reports sampling intervals as ISO-8601 durations with a single
// value/unit pair ("PT1M", "PT6H", "P1D"). Anything outside that shape is
// returned verbatim so an unexpected grain still renders as something.
pub fn label_from_iso8601_duration(duration: &str) -> String {
    let body = duration
        .strip_prefix("PT")
        .or_else(|| duration.strip_prefix('P'))
        .unwrap_or(duration);

    let (value, unit) = match body.char_indices().last() {
        Some((index, unit)) => (&body[..index], unit),
        None => return duration.to_string(),
    };

    let count: u64 = match value.parse() {
        Ok(count) => count,
        Err(_) => return duration.to_string(),
    };

    let word = match unit {
        'S' => "second",
        'M' => "minute",
        'H' => "hour",
        'D' => "day",
        _ => return duration.to_string(),
    };

    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}
