use super::*;

#[derive(Debug, Parser)]
#[clap(about = "Timed typing practice with speed and accuracy scoring")]
pub(crate) struct Arguments {
  #[clap(
    long,
    short,
    value_parser = RangedU64ValueParser::<usize>::new().range(1..),
    help = "Stop after this many rounds without asking"
  )]
  rounds: Option<usize>,
  #[clap(long, help = "Seed the text generator for reproducible rounds")]
  seed: Option<u64>,
  #[clap(long, short, help = "Practice preset sentences instead of random words")]
  sentences: bool,
  #[clap(
    long,
    short,
    default_value = "40",
    value_parser = RangedU64ValueParser::<usize>::new().range(1..)
  )]
  word_count: usize,
}

impl Arguments {
  fn mode(&self) -> TextMode {
    if self.sentences {
      TextMode::Sentence
    } else {
      TextMode::Words {
        count: self.word_count,
      }
    }
  }

  fn rng(&self) -> StdRng {
    match self.seed {
      Some(seed) => StdRng::seed_from_u64(seed),
      None => StdRng::from_entropy(),
    }
  }

  pub(crate) fn run(self) -> Result {
    tracing::debug!(arguments = ?self, "starting session");

    let provider = TextProvider::builtin(self.rng())?;

    Session::new(
      provider,
      stdin().lock(),
      TerminalPresenter::new(stdout()),
      self.mode(),
      self.rounds,
    )
    .run()?;

    Ok(())
  }
}
