use super::*;

/// One timed line of user input.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Capture {
  pub(crate) elapsed_seconds: f64,
  pub(crate) end_of_input: bool,
  pub(crate) text: String,
}

/// Reads a single line and measures how long the read blocked.
///
/// End of input reads as an empty line with `end_of_input` set.
pub(crate) fn capture(input: &mut impl BufRead) -> Result<Capture> {
  let start = Instant::now();

  let mut line = String::new();

  let read = input.read_line(&mut line)?;

  let elapsed_seconds = start.elapsed().as_secs_f64();

  let text = line.strip_suffix('\n').unwrap_or(&line);
  let text = text.strip_suffix('\r').unwrap_or(text);

  Ok(Capture {
    elapsed_seconds,
    end_of_input: read == 0,
    text: text.to_owned(),
  })
}

#[derive(Debug)]
pub(crate) struct Session<R, I, P> {
  input: I,
  mode: TextMode,
  presenter: P,
  provider: TextProvider<R>,
  rounds: Option<usize>,
  totals: SessionTotals,
}

impl<R: Rng, I: BufRead, P: Presenter> Session<R, I, P> {
  pub(crate) fn new(
    provider: TextProvider<R>,
    input: I,
    presenter: P,
    mode: TextMode,
    rounds: Option<usize>,
  ) -> Self {
    Self {
      input,
      mode,
      presenter,
      provider,
      rounds,
      totals: SessionTotals::default(),
    }
  }

  fn play_round(&mut self, round: usize) -> Result<Capture> {
    let reference = self.provider.next(self.mode)?;

    tracing::info!(round, characters = reference.chars().count(), "round started");

    self.presenter.round(round, &reference)?;
    self.presenter.typing_prompt()?;

    let capture = capture(&mut self.input)?;

    let stats = scoring::score(&reference, &capture.text, capture.elapsed_seconds)?;

    tracing::info!(round, %stats, "round finished");

    self.totals.record(&stats);
    self.presenter.results(&stats)?;

    Ok(capture)
  }

  pub(crate) fn run(mut self) -> Result<SessionTotals> {
    self.presenter.greet()?;

    if !capture(&mut self.input)?.end_of_input {
      for round in 1.. {
        if self.rounds.is_some_and(|limit| round > limit) {
          break;
        }

        if self.play_round(round)?.end_of_input {
          break;
        }

        match self.rounds {
          Some(limit) if round >= limit => break,
          Some(_) => continue,
          None => {}
        }

        self.presenter.continue_prompt()?;

        let answer = capture(&mut self.input)?;

        if !answer.text.trim_start().starts_with(['y', 'Y']) {
          break;
        }
      }
    }

    tracing::debug!(rounds = self.totals.rounds, "session finished");

    self.presenter.summary(&self.totals)?;
    self.presenter.farewell()?;

    Ok(self.totals)
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    rand::{SeedableRng, rngs::StdRng},
    std::io::Cursor,
  };

  fn session(
    input: &str,
    mode: TextMode,
    rounds: Option<usize>,
  ) -> Session<StdRng, Cursor<Vec<u8>>, TerminalPresenter<Vec<u8>>> {
    Session::new(
      TextProvider::new(
        vec!["cat".into()],
        vec!["dog days.".into()],
        StdRng::seed_from_u64(0),
      )
      .unwrap(),
      Cursor::new(input.as_bytes().to_vec()),
      TerminalPresenter::new(Vec::new()),
      mode,
      rounds,
    )
  }

  #[test]
  fn capture_strips_newline() {
    let capture = capture(&mut Cursor::new("cat dog\n")).unwrap();

    assert_eq!(capture.text, "cat dog");
    assert!(!capture.end_of_input);
    assert!(capture.elapsed_seconds >= 0.0);
  }

  #[test]
  fn capture_strips_carriage_return() {
    assert_eq!(capture(&mut Cursor::new("cat\r\n")).unwrap().text, "cat");
  }

  #[test]
  fn capture_without_trailing_newline() {
    let capture = capture(&mut Cursor::new("cat")).unwrap();

    assert_eq!(capture.text, "cat");
    assert!(!capture.end_of_input);
  }

  #[test]
  fn capture_end_of_input() {
    let capture = capture(&mut Cursor::new("")).unwrap();

    assert_eq!(capture.text, "");
    assert!(capture.end_of_input);
  }

  #[test]
  fn single_round_then_quit() {
    let totals = session("\ncat cat\nn\n", TextMode::Words { count: 2 }, None)
      .run()
      .unwrap();

    assert_eq!(totals.rounds, 1);
    assert_eq!(totals.words, 2);
    assert_eq!(totals.typed_characters, 7);
    assert_eq!(totals.accuracy_sum, 100.0);
  }

  #[test]
  fn continue_on_yes() {
    let totals = session("\ncat\ny\ncot\nY\ncat\nno\n", TextMode::Words { count: 1 }, None)
      .run()
      .unwrap();

    assert_eq!(totals.rounds, 3);
    assert_eq!(totals.words, 3);
  }

  #[test]
  fn end_of_input_ends_session() {
    let totals = session("\ncat\ny\n", TextMode::Words { count: 1 }, None)
      .run()
      .unwrap();

    assert_eq!(totals.rounds, 2);
    assert_eq!(totals.typed_characters, 3);
  }

  #[test]
  fn end_of_input_before_start() {
    let totals = session("", TextMode::Words { count: 1 }, None)
      .run()
      .unwrap();

    assert_eq!(totals.rounds, 0);
  }

  #[test]
  fn round_limit_skips_prompt() {
    let totals = session("\ncat\ncat\ncat\n", TextMode::Words { count: 1 }, Some(2))
      .run()
      .unwrap();

    assert_eq!(totals.rounds, 2);
    assert_eq!(totals.typed_characters, 6);
  }

  #[test]
  fn zero_round_limit_plays_nothing() {
    let totals = session("\ncat\n", TextMode::Words { count: 1 }, Some(0))
      .run()
      .unwrap();

    assert_eq!(totals.rounds, 0);
    assert_eq!(totals.typed_characters, 0);
  }

  #[test]
  fn sentence_mode() {
    let totals = session("\ndog days.\nn\n", TextMode::Sentence, None)
      .run()
      .unwrap();

    assert_eq!(totals.rounds, 1);
    assert_eq!(totals.words, 2);
    assert_eq!(totals.accuracy_sum, 100.0);
  }

  #[test]
  fn zero_word_count_is_an_error() {
    assert!(
      session("\ncat\n", TextMode::Words { count: 0 }, None)
        .run()
        .is_err()
    );
  }
}
