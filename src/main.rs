use {
  crate::{
    arguments::Arguments,
    error::Error,
    presenter::{Presenter, TerminalPresenter},
    session::Session,
    statistics::{SessionTotals, TypingStats},
    text_provider::{TextMode, TextProvider},
    words::{SENTENCES, WORDS},
  },
  clap::{Parser, builder::RangedU64ValueParser},
  crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
  },
  rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom},
  std::{
    fmt::{self, Display, Formatter},
    io::{self, BufRead, Write, stdin, stdout},
    mem, process,
    time::Instant,
  },
  tracing_subscriber::EnvFilter,
};

mod arguments;
mod error;
mod presenter;
mod scoring;
mod session;
mod statistics;
mod text_provider;
mod words;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn init_logging() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_env("TYPO_LOG").unwrap_or_else(|_| EnvFilter::new("off")))
    .with_writer(io::stderr)
    .init();
}

fn main() {
  init_logging();

  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
