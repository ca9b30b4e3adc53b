use chrono::{Datelike, Month, NaiveDateTime, Timelike};

use crate::errors::ResolveError;

/// Calendar field of an index pattern, selected by letter and run length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateToken {
    /// `YYYY`
    Year,
    /// `YY`
    YearTwoDigit,
    /// `GGGG`
    IsoWeekYear,
    /// `GG`
    IsoWeekYearTwoDigit,
    /// `M` / `MM`
    Month { padded: bool },
    /// `MMM`
    MonthShortName,
    /// `MMMM`
    MonthName,
    /// `D` / `DD`
    DayOfMonth { padded: bool },
    /// `DDD` / `DDDD`
    DayOfYear { padded: bool },
    /// `H` / `HH`
    Hour { padded: bool },
    /// `W` / `WW`
    IsoWeek { padded: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternToken {
    Literal(String),
    Date(DateToken),
}

impl DateToken {
    pub fn is_format_letter(c: char) -> bool {
        matches!(c, 'Y' | 'G' | 'M' | 'D' | 'H' | 'W')
    }

    pub fn from_run(letter: char, run: usize) -> Option<Self> {
        let token = match (letter, run) {
            ('Y', 4) => DateToken::Year,
            ('Y', 2) => DateToken::YearTwoDigit,
            ('G', 4) => DateToken::IsoWeekYear,
            ('G', 2) => DateToken::IsoWeekYearTwoDigit,
            ('M', 1) => DateToken::Month { padded: false },
            ('M', 2) => DateToken::Month { padded: true },
            ('M', 3) => DateToken::MonthShortName,
            ('M', 4) => DateToken::MonthName,
            ('D', 1) => DateToken::DayOfMonth { padded: false },
            ('D', 2) => DateToken::DayOfMonth { padded: true },
            ('D', 3) => DateToken::DayOfYear { padded: false },
            ('D', 4) => DateToken::DayOfYear { padded: true },
            ('H', 1) => DateToken::Hour { padded: false },
            ('H', 2) => DateToken::Hour { padded: true },
            ('W', 1) => DateToken::IsoWeek { padded: false },
            ('W', 2) => DateToken::IsoWeek { padded: true },
            _ => return None,
        };
        Some(token)
    }

    pub fn render(&self, at: &NaiveDateTime) -> String {
        match *self {
            DateToken::Year => format!("{:04}", at.year()),
            DateToken::YearTwoDigit => format!("{:02}", at.year().rem_euclid(100)),
            DateToken::IsoWeekYear => format!("{:04}", at.iso_week().year()),
            DateToken::IsoWeekYearTwoDigit => {
                format!("{:02}", at.iso_week().year().rem_euclid(100))
            }
            DateToken::Month { padded } => pad(at.month(), padded, 2),
            DateToken::MonthShortName => month_name(at.month()).chars().take(3).collect(),
            DateToken::MonthName => month_name(at.month()).to_string(),
            DateToken::DayOfMonth { padded } => pad(at.day(), padded, 2),
            DateToken::DayOfYear { padded } => pad(at.ordinal(), padded, 3),
            DateToken::Hour { padded } => pad(at.hour(), padded, 2),
            DateToken::IsoWeek { padded } => pad(at.iso_week().week(), padded, 2),
        }
    }
}

fn pad(value: u32, padded: bool, width: usize) -> String {
    if padded {
        format!("{:0width$}", value, width = width)
    } else {
        value.to_string()
    }
}

fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("")
}

/// Split an index pattern into literal runs and date tokens.
///
/// `[...]` spans are copied verbatim. Outside brackets, a maximal run of one
/// format letter is a single token; any other character is literal. An
/// unterminated `[` or a run length with no defined format is an error.
pub fn tokenize(pattern: &str) -> Result<Vec<PatternToken>, ResolveError> {
    let chars: Vec<(usize, char)> = pattern.char_indices().collect();
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut i = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];

        if c == '[' {
            let close = chars[i + 1..]
                .iter()
                .position(|&(_, ch)| ch == ']')
                .ok_or_else(|| ResolveError::pattern(pos, "unterminated '['"))?;
            literal.extend(chars[i + 1..i + 1 + close].iter().map(|&(_, ch)| ch));
            i += close + 2;
            continue;
        }

        if DateToken::is_format_letter(c) {
            let run = chars[i..].iter().take_while(|&&(_, ch)| ch == c).count();
            let token = DateToken::from_run(c, run).ok_or_else(|| {
                ResolveError::pattern(
                    pos,
                    format!("unsupported format token '{}'", c.to_string().repeat(run)),
                )
            })?;

            if !literal.is_empty() {
                tokens.push(PatternToken::Literal(std::mem::take(&mut literal)));
            }
            tokens.push(PatternToken::Date(token));
            i += run;
            continue;
        }

        literal.push(c);
        i += 1;
    }

    if !literal.is_empty() {
        tokens.push(PatternToken::Literal(literal));
    }

    Ok(tokens)
}
