use std::io::{self, Write};

use crate::domain::Earthquake;
use crate::format::{format_date, format_magnitude, format_time, split_location};

pub const NO_EARTHQUAKES: &str = "No earthquakes found.";
pub const NO_INTERNET: &str = "No internet connection.";

/// Consumer of a completed fetch. Receives the whole list each time.
pub trait Render {
    fn render(&mut self, quakes: &[Earthquake]) -> io::Result<()>;
}

/// Writes one line per event, for `--plain` output and piping.
pub struct PlainList<W: Write> {
    out: W,
    date: fn(i64) -> String,
    time: fn(i64) -> String,
}

impl<W: Write> PlainList<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            date: format_date,
            time: format_time,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Render for PlainList<W> {
    fn render(&mut self, quakes: &[Earthquake]) -> io::Result<()> {
        if quakes.is_empty() {
            writeln!(self.out, "{}", NO_EARTHQUAKES)?;
            return self.out.flush();
        }
        for quake in quakes {
            let location = split_location(&quake.location);
            writeln!(
                self.out,
                "{:>5}  {} {}  {} {}  {}",
                format_magnitude(quake.magnitude),
                location.offset,
                location.primary,
                (self.date)(quake.time_ms),
                (self.time)(quake.time_ms),
                quake.detail_url,
            )?;
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{format_date_in, format_time_in};
    use chrono::Utc;

    fn utc_list() -> PlainList<Vec<u8>> {
        PlainList {
            out: Vec::new(),
            date: |ms| format_date_in(ms, &Utc),
            time: |ms| format_time_in(ms, &Utc),
        }
    }

    #[test]
    fn writes_one_line_per_quake() {
        let mut list = utc_list();
        list.render(&[
            Earthquake::new(7.24, "5km N of Example City", 447_179_400_000, "https://example.test/a"),
            Earthquake::new(10.2, "Example Ridge", 0, ""),
        ])
        .expect("render");

        let text = String::from_utf8(list.into_inner()).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "  7.2  5km N of Example City  Mar 03, 1984 4:30 PM  https://example.test/a",
                " 10.2  Near the Example Ridge  Jan 01, 1970 12:00 AM  ",
            ]
        );
    }

    #[test]
    fn empty_list_prints_placeholder() {
        let mut list = utc_list();
        list.render(&[]).expect("render");
        let text = String::from_utf8(list.into_inner()).expect("utf8");
        assert_eq!(text, "No earthquakes found.\n");
    }
}
