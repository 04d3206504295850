use super::*;

/// Result of scoring one round.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TypingStats {
  pub(crate) accuracy_percent: f64,
  pub(crate) correct_count: usize,
  pub(crate) elapsed_seconds: f64,
  pub(crate) incorrect_count: usize,
  pub(crate) reference_length: usize,
  pub(crate) typed_length: usize,
  pub(crate) word_count: usize,
  pub(crate) words_per_minute: f64,
}

impl Display for TypingStats {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{:.1} wpm, {:.1}% accuracy ({}/{} correct, {} wrong) in {:.2}s",
      self.words_per_minute,
      self.accuracy_percent,
      self.correct_count,
      self.reference_length,
      self.incorrect_count,
      self.elapsed_seconds
    )
  }
}

/// Running totals across the rounds of one session.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct SessionTotals {
  pub(crate) accuracy_sum: f64,
  pub(crate) rounds: usize,
  pub(crate) typed_characters: usize,
  pub(crate) words: usize,
  pub(crate) wpm_sum: f64,
}

impl SessionTotals {
  pub(crate) fn record(&mut self, stats: &TypingStats) {
    self.rounds += 1;
    self.words += stats.word_count;
    self.typed_characters += stats.typed_length;
    self.wpm_sum += stats.words_per_minute;
    self.accuracy_sum += stats.accuracy_percent;
  }

  pub(crate) fn average_accuracy(&self) -> f64 {
    if self.rounds == 0 {
      0.0
    } else {
      self.accuracy_sum / self.rounds as f64
    }
  }

  pub(crate) fn average_wpm(&self) -> f64 {
    if self.rounds == 0 {
      0.0
    } else {
      self.wpm_sum / self.rounds as f64
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, approx::assert_abs_diff_eq};

  fn stats(words_per_minute: f64, accuracy_percent: f64) -> TypingStats {
    TypingStats {
      accuracy_percent,
      correct_count: 4,
      elapsed_seconds: 2.0,
      incorrect_count: 1,
      reference_length: 5,
      typed_length: 5,
      word_count: 1,
      words_per_minute,
    }
  }

  #[test]
  fn display() {
    assert_eq!(
      stats(30.0, 80.0).to_string(),
      "30.0 wpm, 80.0% accuracy (4/5 correct, 1 wrong) in 2.00s"
    );
  }

  #[test]
  fn totals_empty() {
    let totals = SessionTotals::default();

    assert_eq!(totals.average_wpm(), 0.0);
    assert_eq!(totals.average_accuracy(), 0.0);
  }

  #[test]
  fn totals_average() {
    let mut totals = SessionTotals::default();

    totals.record(&stats(30.0, 80.0));
    totals.record(&stats(50.0, 90.0));

    assert_eq!(totals.rounds, 2);
    assert_eq!(totals.words, 2);
    assert_eq!(totals.typed_characters, 10);
    assert_abs_diff_eq!(totals.average_wpm(), 40.0, epsilon = 1e-9);
    assert_abs_diff_eq!(totals.average_accuracy(), 85.0, epsilon = 1e-9);
  }
}
