use std::io::{self, Write};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, bail, Result};
use tracing::debug;

use scrabbleator_core::reveal::RevealEvent;
use scrabbleator_core::search::{Keystroke, SubmissionOutcome};
use scrabbleator_core::{AppConfig, HttpWordFinder, ResultSet, SearchSession, Stats, WordFinder};

pub async fn run(config: Arc<AppConfig>, letters: &str, instant: bool) -> Result<()> {
    let finder = HttpWordFinder::new(&config.service)?;
    let mut session = SearchSession::new(&config.reveal);

    if session.on_keystroke(letters) == Keystroke::Rejected {
        bail!("Letters must be A-Z only, got {letters:?}");
    }
    let ticket = match session.submit(Instant::now())? {
        SubmissionOutcome::Dispatched(ticket) => ticket,
        SubmissionOutcome::DebounceHold { .. } => bail!("Search was not dispatched"),
    };

    let result = finder.find_words(ticket.letters()).await;
    let outcome = session.complete(&ticket, result, Instant::now());

    let Some(set) = session.results().cloned() else {
        let message = session
            .dispatch_state()
            .error_message()
            .unwrap_or("search failed")
            .to_string();
        return Err(anyhow!(message));
    };

    let mut stdout = io::stdout();
    print_stats(&mut stdout, &set.stats)?;
    if set.is_empty() {
        writeln!(stdout, "No words found")?;
        return Ok(());
    }

    if instant {
        for item in &set.words {
            writeln!(stdout, "{} points  {}: {}", item.points, item.word, item.definition)?;
        }
        session.shutdown();
        return Ok(());
    }

    let mut typewriter = Typewriter::default();
    typewriter.write(&mut stdout, &set, &outcome.events)?;
    while let Some(deadline) = session.next_deadline() {
        tokio::time::sleep_until(deadline.into()).await;
        let outcome = session.tick(Instant::now());
        typewriter.write(&mut stdout, &set, &outcome.events)?;
    }
    debug!(words = set.len(), "Reveal printed");
    session.shutdown();
    Ok(())
}

fn print_stats(out: &mut impl Write, stats: &Stats) -> io::Result<()> {
    fn field<T: ToString>(value: Option<T>) -> String {
        value.map(|v| v.to_string()).unwrap_or_default()
    }

    writeln!(out, "Total Words: {}", field(stats.total_words))?;
    writeln!(out, "Max Points: {}", field(stats.max_points))?;
    writeln!(out, "Min Points: {}", field(stats.min_points))?;
    writeln!(out, "Average Length: {}", field(stats.average_length.map(|v| format!("{v:.2}"))))?;
    writeln!(out, "Average Points: {}", field(stats.average_points.map(|v| format!("{v:.2}"))))?;
    for (length, count) in &stats.length_distribution {
        writeln!(out, "{length} letter words: {count}")?;
    }
    writeln!(out)
}

/// Mirrors reveal events onto a plain stream
#[derive(Debug, Default)]
struct Typewriter {
    /// Bytes of the current definition already written
    typed: usize,
}

impl Typewriter {
    fn write(&mut self, out: &mut impl Write, set: &ResultSet, events: &[RevealEvent]) -> io::Result<()> {
        for event in events {
            match *event {
                RevealEvent::ItemStarted { index } => {
                    let item = &set.words[index];
                    write!(out, "{} points  {}: ", item.points, item.word)?;
                    self.typed = 0;
                }
                RevealEvent::Typed { index } => {
                    let rest = &set.words[index].definition[self.typed..];
                    if let Some(c) = rest.chars().next() {
                        write!(out, "{c}")?;
                        self.typed += c.len_utf8();
                    }
                }
                RevealEvent::Appended { .. } => writeln!(out)?,
                RevealEvent::TypingComplete { .. } | RevealEvent::Finished { .. } => {}
            }
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrabbleator_core::ResultItem;

    #[test]
    fn test_typewriter_prints_items_as_revealed() {
        let set = ResultSet {
            words: vec![ResultItem::new("CAT", "pé", 5), ResultItem::new("AT", "", 2)],
            ..Default::default()
        };
        let events = [
            RevealEvent::ItemStarted { index: 0 },
            RevealEvent::Typed { index: 0 },
            RevealEvent::Typed { index: 0 },
            RevealEvent::TypingComplete { index: 0 },
            RevealEvent::Appended { index: 0 },
            RevealEvent::ItemStarted { index: 1 },
            RevealEvent::TypingComplete { index: 1 },
            RevealEvent::Appended { index: 1 },
            RevealEvent::Finished { revealed: 2 },
        ];

        let mut out = Vec::new();
        Typewriter::default().write(&mut out, &set, &events).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "5 points  CAT: pé\n2 points  AT: \n");
    }

    #[test]
    fn test_stats_block() {
        let mut stats = Stats {
            total_words: Some(2),
            average_points: Some(3.5),
            ..Default::default()
        };
        stats.length_distribution.insert(3, 2);

        let mut out = Vec::new();
        print_stats(&mut out, &stats).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Total Words: 2\nMax Points: \n"));
        assert!(text.contains("Average Points: 3.50\n"));
        assert!(text.contains("3 letter words: 2\n"));
    }
}
