use super::*;

const BOX_WIDTH: usize = 40;

macro_rules! command {
  ($out:expr, $($cmd:expr),+ $(,)?) => {
    { queue!($out, $($cmd),+) }
  };
}

/// Receives everything the session wants shown to the user.
pub(crate) trait Presenter {
  fn continue_prompt(&mut self) -> Result;

  fn farewell(&mut self) -> Result;

  fn greet(&mut self) -> Result;

  fn results(&mut self, stats: &TypingStats) -> Result;

  fn round(&mut self, round: usize, reference: &str) -> Result;

  fn summary(&mut self, totals: &SessionTotals) -> Result;

  fn typing_prompt(&mut self) -> Result;
}

#[derive(Debug)]
pub(crate) struct TerminalPresenter<W> {
  out: W,
}

impl<W: Write> TerminalPresenter<W> {
  pub(crate) fn new(out: W) -> Self {
    Self { out }
  }

  #[cfg(test)]
  pub(crate) fn into_inner(self) -> W {
    self.out
  }

  fn accuracy_color(accuracy: f64) -> Color {
    if accuracy >= 95.0 {
      Color::Green
    } else if accuracy >= 80.0 {
      Color::Yellow
    } else {
      Color::Red
    }
  }

  fn clear(&mut self) -> Result {
    command!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
  }

  fn draw_box(&mut self, title: &str, lines: &[String]) -> Result {
    let rule = "═".repeat(BOX_WIDTH);

    writeln!(self.out, "╔{rule}╗")?;
    writeln!(self.out, "║ {title:<width$}║", width = BOX_WIDTH - 1)?;
    writeln!(self.out, "╠{rule}╣")?;

    for line in lines {
      writeln!(self.out, "║ {line:<width$}║", width = BOX_WIDTH - 1)?;
    }

    writeln!(self.out, "╚{rule}╝")?;

    Ok(())
  }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
  fn continue_prompt(&mut self) -> Result {
    write!(self.out, "Next block? (y/n): ")?;
    self.out.flush()?;
    Ok(())
  }

  fn farewell(&mut self) -> Result {
    command!(self.out, SetForegroundColor(Color::Green))?;
    write!(self.out, "\nGreat practice session! Keep improving!")?;
    command!(self.out, ResetColor)?;
    writeln!(self.out)?;
    self.out.flush()?;
    Ok(())
  }

  fn greet(&mut self) -> Result {
    self.clear()?;
    write!(self.out, "TYPING TRAINER - Press Enter to start...")?;
    self.out.flush()?;
    Ok(())
  }

  fn results(&mut self, stats: &TypingStats) -> Result {
    writeln!(self.out)?;

    command!(
      self.out,
      SetForegroundColor(Self::accuracy_color(stats.accuracy_percent))
    )?;

    self.draw_box(
      "RESULTS",
      &[
        format!("Speed:    {:.1} WPM", stats.words_per_minute),
        format!("Accuracy: {:.1}%", stats.accuracy_percent),
        format!(
          "Correct:  {} / {}",
          stats.correct_count, stats.reference_length
        ),
        format!("Errors:   {}", stats.incorrect_count),
        format!("Time:     {:.1} sec", stats.elapsed_seconds),
      ],
    )?;

    command!(self.out, ResetColor)?;
    writeln!(self.out)?;
    self.out.flush()?;

    Ok(())
  }

  fn round(&mut self, round: usize, reference: &str) -> Result {
    self.clear()?;

    self.draw_box(&format!("TYPING TRAINER - BLOCK {round}"), &[])?;
    writeln!(self.out)?;
    self.draw_box("TEXT TO TYPE:", &wrap(reference, BOX_WIDTH - 2))?;
    writeln!(self.out)?;

    Ok(())
  }

  fn summary(&mut self, totals: &SessionTotals) -> Result {
    writeln!(self.out)?;

    self.draw_box(
      "SESSION",
      &[
        format!("Rounds:       {}", totals.rounds),
        format!("Words:        {}", totals.words),
        format!("Characters:   {}", totals.typed_characters),
        format!("Average WPM:  {:.1}", totals.average_wpm()),
        format!("Average acc.: {:.1}%", totals.average_accuracy()),
      ],
    )?;

    self.out.flush()?;

    Ok(())
  }

  fn typing_prompt(&mut self) -> Result {
    command!(self.out, SetForegroundColor(Color::Yellow))?;
    write!(self.out, "Start typing now: ")?;
    command!(self.out, ResetColor)?;
    self.out.flush()?;
    Ok(())
  }
}

/// Greedy word wrap; a word longer than `width` gets a line of its own.
fn wrap(text: &str, width: usize) -> Vec<String> {
  let mut lines = Vec::new();
  let mut line = String::new();

  for word in text.split_whitespace() {
    if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
      lines.push(mem::take(&mut line));
    }

    if !line.is_empty() {
      line.push(' ');
    }

    line.push_str(word);
  }

  if !line.is_empty() {
    lines.push(line);
  }

  lines
}
