//! Per-draw diagnostics.
//!
//! Trials report every examined card to a `DrawObserver`. The trial logic
//! never prints on its own.

use std::io::Write;

use crate::error::Result;

use super::draws::Draw;

/// Receives each draw as it is examined.
pub trait DrawObserver {
    fn on_draw(&mut self, draw: &Draw) -> Result<()>;
}

impl<O: DrawObserver + ?Sized> DrawObserver for &mut O {
    fn on_draw(&mut self, draw: &Draw) -> Result<()> {
        (**self).on_draw(draw)
    }
}

/// Discards all draws.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl DrawObserver for Silent {
    fn on_draw(&mut self, _draw: &Draw) -> Result<()> {
        Ok(())
    }
}

/// Keeps every draw in memory.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub draws: Vec<Draw>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.draws.clear();
    }
}

impl DrawObserver for Recorder {
    fn on_draw(&mut self, draw: &Draw) -> Result<()> {
        self.draws.push(*draw);
        Ok(())
    }
}

/// Writes one line per draw: `card = {card}; excess_odds was = {balance}`.
#[derive(Debug)]
pub struct DrawPrinter<W: Write> {
    out: W,
}

impl<W: Write> DrawPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DrawObserver for DrawPrinter<W> {
    fn on_draw(&mut self, draw: &Draw) -> Result<()> {
        writeln!(
            self.out,
            "card = {}; excess_odds was = {}",
            draw.card, draw.excess_odds
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn draw(card: u8, excess_odds: i32) -> Draw {
        Draw {
            position: 0,
            card: Card::new(card),
            excess_odds,
        }
    }

    #[test]
    fn test_printer_format() {
        let mut printer = DrawPrinter::new(Vec::new());
        printer.on_draw(&draw(17, 0)).unwrap();
        printer.on_draw(&draw(4, -2)).unwrap();

        let text = String::from_utf8(printer.into_inner()).unwrap();
        assert_eq!(
            text,
            "card = 17; excess_odds was = 0\ncard = 4; excess_odds was = -2\n"
        );
    }

    #[test]
    fn test_recorder_collects() {
        let mut recorder = Recorder::new();
        recorder.on_draw(&draw(1, 0)).unwrap();
        recorder.on_draw(&draw(3, 1)).unwrap();

        assert_eq!(recorder.draws.len(), 2);
        assert_eq!(recorder.draws[1].card, Card::new(3));

        recorder.clear();
        assert!(recorder.draws.is_empty());
    }

    #[test]
    fn test_printer_propagates_write_failure() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut printer = DrawPrinter::new(Broken);
        let err = printer.on_draw(&draw(0, 0)).unwrap_err();
        assert!(matches!(err, crate::error::SimError::Io(_)));
    }
}
