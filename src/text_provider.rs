use super::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum TextMode {
  Sentence,
  Words { count: usize },
}

/// Produces reference text for a round from an injected vocabulary,
/// sentence pool and random source.
#[derive(Debug)]
pub(crate) struct TextProvider<R> {
  rng: R,
  sentences: Vec<String>,
  vocabulary: Vec<String>,
}

impl<R: Rng> TextProvider<R> {
  pub(crate) fn new(
    vocabulary: Vec<String>,
    sentences: Vec<String>,
    rng: R,
  ) -> Result<Self, Error> {
    if vocabulary.is_empty() {
      return Err(Error::invalid_argument("vocabulary must not be empty"));
    }

    if sentences.is_empty() {
      return Err(Error::invalid_argument("sentence pool must not be empty"));
    }

    Ok(Self {
      rng,
      sentences,
      vocabulary,
    })
  }

  pub(crate) fn builtin(rng: R) -> Result<Self, Error> {
    Self::new(
      WORDS.iter().map(|word| word.to_string()).collect(),
      SENTENCES.iter().map(|sentence| sentence.to_string()).collect(),
      rng,
    )
  }

  /// Draws `word_count` words uniformly with replacement and joins them
  /// with single spaces.
  pub(crate) fn generate(&mut self, word_count: usize) -> Result<String, Error> {
    if word_count == 0 {
      return Err(Error::invalid_argument("word count must be at least 1"));
    }

    let text = (0..word_count)
      .map(|_| {
        self
          .vocabulary
          .choose(&mut self.rng)
          .map(String::as_str)
          .ok_or_else(|| Error::invalid_argument("vocabulary must not be empty"))
      })
      .collect::<Result<Vec<&str>, Error>>()?
      .join(" ");

    tracing::debug!(word_count, characters = text.chars().count(), "generated word block");

    Ok(text)
  }

  pub(crate) fn next(&mut self, mode: TextMode) -> Result<String, Error> {
    match mode {
      TextMode::Sentence => Ok(self.pick_sentence()),
      TextMode::Words { count } => self.generate(count),
    }
  }

  pub(crate) fn pick_sentence(&mut self) -> String {
    let sentence = self.sentences.choose(&mut self.rng).cloned().unwrap_or_default();

    tracing::debug!(characters = sentence.chars().count(), "picked sentence");

    sentence
  }
}
