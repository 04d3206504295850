use super::*;

const CHARACTERS_PER_WORD: f64 = 5.0;

/// Compares `typed` against `reference` one `char` at a time.
///
/// Positions past the shorter text count as incorrect, so
/// `correct_count + incorrect_count` always equals the longer length.
pub(crate) fn score(
  reference: &str,
  typed: &str,
  elapsed_seconds: f64,
) -> Result<TypingStats, Error> {
  if elapsed_seconds.is_nan() || elapsed_seconds < 0.0 {
    return Err(Error::invalid_argument(format!(
      "elapsed seconds must be non-negative, got {elapsed_seconds}"
    )));
  }

  let reference_length = reference.chars().count();
  let typed_length = typed.chars().count();

  let correct_count = reference
    .chars()
    .zip(typed.chars())
    .filter(|(expected, actual)| expected == actual)
    .count();

  let incorrect_count =
    reference_length.min(typed_length) - correct_count + reference_length.abs_diff(typed_length);

  let accuracy_percent = if reference_length == 0 {
    0.0
  } else {
    correct_count as f64 / reference_length as f64 * 100.0
  };

  let words_per_minute = if elapsed_seconds > 0.0 {
    (typed_length as f64 / CHARACTERS_PER_WORD) / (elapsed_seconds / 60.0)
  } else {
    0.0
  };

  let stats = TypingStats {
    accuracy_percent,
    correct_count,
    elapsed_seconds,
    incorrect_count,
    reference_length,
    typed_length,
    word_count: word_count(reference),
    words_per_minute,
  };

  tracing::trace!(?stats, "scored round");

  Ok(stats)
}

/// Whitespace-delimited tokens; blank text has zero words.
pub(crate) fn word_count(text: &str) -> usize {
  text.split_whitespace().count()
}
