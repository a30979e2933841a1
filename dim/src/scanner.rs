/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Incremental scanner that finds where a unit string ends inside a
//! larger text, one byte at a time.

use crate::formatter::{FormattedQuantity, MAX_SYMBOL};
use crate::parser::{is_symbol_char, split_value};

use super::error::DimError;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ScanState {
    /// Nothing read yet.
    Start,
    Symbol,
    /// After `*`, `/`, `_` or an opening parenthesis.
    Operator,
    /// After a `.` following a term. The dot joins two terms if a
    /// symbol follows and is not part of the unit string otherwise.
    Dot,
    /// After `^`.
    ExponentStart,
    ExponentSign,
    Exponent,
    /// The input cannot be a unit string.
    Error,
    /// A complete unit string was read.
    End,
}

#[derive(Clone, Debug)]
pub struct UnitStringScanner {
    state: ScanState,
    depth: u32,
    utf8_pending: u8,
    utf8_code: u32,
}

impl UnitStringScanner {
    pub fn new() -> Self {
        Self {
            state: ScanState::Start,
            depth: 0,
            utf8_pending: 0,
            utf8_code: 0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Feed one byte. Returns `false` when the byte is not part of the
    /// unit string; the state is then `End` or `Error`. A `.` is
    /// accepted tentatively: when the unit string ends in `Dot`, the
    /// last accepted byte does not belong to it.
    pub fn accept(&mut self, byte: u8) -> bool {
        if matches!(self.state, ScanState::End | ScanState::Error) {
            return false;
        }
        if self.utf8_pending > 0 {
            return self.continue_utf8(byte);
        }
        match byte {
            0x00..=0x7f => self.accept_ascii(byte as char),
            0xc0..=0xdf => self.begin_utf8(byte & 0x1f, 1),
            0xe0..=0xef => self.begin_utf8(byte & 0x0f, 2),
            0xf0..=0xf7 => self.begin_utf8(byte & 0x07, 3),
            _ => self.fail(),
        }
    }

    /// Signal the end of the input and return the final state.
    pub fn finish(&mut self) -> ScanState {
        self.wrap_up();
        self.state
    }

    fn fail(&mut self) -> bool {
        self.state = ScanState::Error;
        false
    }

    /// Decide between `End` and `Error` once the unit string is over.
    fn wrap_up(&mut self) {
        self.state = match self.state {
            ScanState::Start | ScanState::Symbol | ScanState::Exponent
                if self.depth == 0 && self.utf8_pending == 0 =>
            {
                ScanState::End
            }
            ScanState::Dot if self.depth == 0 => ScanState::End,
            ScanState::End => ScanState::End,
            _ => ScanState::Error,
        };
    }

    fn begin_utf8(&mut self, bits: u8, pending: u8) -> bool {
        match self.state {
            ScanState::Start
            | ScanState::Operator
            | ScanState::Dot
            | ScanState::Symbol
            | ScanState::Exponent => {
                self.utf8_code = bits as u32;
                self.utf8_pending = pending;
                true
            }
            _ => self.fail(),
        }
    }

    fn continue_utf8(&mut self, byte: u8) -> bool {
        if byte & 0xc0 != 0x80 {
            return self.fail();
        }
        self.utf8_code = (self.utf8_code << 6) | (byte & 0x3f) as u32;
        self.utf8_pending -= 1;
        if self.utf8_pending > 0 {
            return true;
        }
        match char::from_u32(self.utf8_code) {
            Some(c) => self.accept_glyph(c),
            None => self.fail(),
        }
    }

    /// A completed multi-byte character.
    fn accept_glyph(&mut self, c: char) -> bool {
        let superscript = matches!(
            c,
            '⁰' | '¹' | '²' | '³' | '⁴'..='⁹' | '⁺' | '⁻'
        );
        self.state = match self.state {
            ScanState::Start
            | ScanState::Operator
            | ScanState::Dot
            | ScanState::Symbol
                if is_symbol_char(c) =>
            {
                ScanState::Symbol
            }
            ScanState::Symbol | ScanState::Exponent if superscript => {
                ScanState::Exponent
            }
            _ => ScanState::Error,
        };
        self.state != ScanState::Error
    }

    fn accept_ascii(&mut self, c: char) -> bool {
        use ScanState::*;
        let next = match (self.state, c) {
            (Start | Operator | Dot | Symbol, c)
                if c.is_ascii_alphabetic() =>
            {
                Symbol
            }
            (Symbol, c) if c.is_ascii_digit() => Symbol,
            (Start | Operator | Dot, '(') => {
                self.depth += 1;
                Operator
            }
            (Symbol | Exponent, '*' | '/' | '_') => Operator,
            (Symbol | Exponent, '.') => Dot,
            (Symbol, '^') => ExponentStart,
            (ExponentStart, '(') => {
                self.depth += 1;
                ExponentStart
            }
            (ExponentStart, '+' | '-') => ExponentSign,
            (ExponentStart | ExponentSign | Exponent, c)
                if c.is_ascii_digit() =>
            {
                Exponent
            }
            (Symbol | Exponent, ')') if self.depth > 0 => {
                self.depth -= 1;
                self.state
            }
            /* Anything else after a complete term ends the unit string;
             * an empty unit string ends wherever it is. */
            (Start | Dot | Symbol | Exponent, _) => End,
            _ => Error,
        };
        match next {
            End => {
                self.wrap_up();
                false
            }
            Error => self.fail(),
            _ => {
                self.state = next;
                true
            }
        }
    }
}

impl Default for UnitStringScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a formatted quantity (`<number><sep><unit>`) from the start of
/// `input`. Returns the quantity and the input that follows it.
pub fn read_formatted(
    input: &str,
) -> Result<(FormattedQuantity, &str), DimError> {
    let (value, rest) = split_value(input)?;
    let offset = input.len() - rest.len();

    let mut scanner = UnitStringScanner::new();
    let mut end = 0;
    for byte in rest.bytes() {
        if !scanner.accept(byte) {
            break;
        }
        end += 1;
    }
    if end == rest.len() {
        scanner.finish();
    }
    /* A trailing dot ends the sentence, not the unit. */
    if scanner.state() == ScanState::End
        && rest.as_bytes()[..end].last() == Some(&b'.')
    {
        end -= 1;
    }

    if scanner.state() == ScanState::Error {
        let found = rest.get(end..).and_then(|s| s.chars().next());
        return Err(DimError::Lexical(
            offset + end,
            found.map(String::from).unwrap_or_default(),
        ));
    }

    let (symbol, rest) = match (rest.get(..end), rest.get(end..)) {
        (Some(symbol), Some(rest)) => (symbol, rest),
        _ => return Err(DimError::Lexical(offset + end, String::new())),
    };
    if symbol.len() > MAX_SYMBOL {
        return Err(DimError::InvalidSymbol(symbol.to_string()));
    }
    log::trace!("read {} {:?}, {:?} follows", value, symbol, rest);
    Ok((FormattedQuantity::new(value, symbol), rest))
}

#[cfg(test)]
mod tests {
    use super::{read_formatted, ScanState, UnitStringScanner};
    use crate::error::DimError;

    fn scan(input: &str) -> (usize, ScanState) {
        let mut scanner = UnitStringScanner::new();
        let mut n = 0;
        for byte in input.bytes() {
            if !scanner.accept(byte) {
                return (n, scanner.state());
            }
            n += 1;
        }
        (n, scanner.finish())
    }

    #[test]
    fn complete_unit_strings() {
        assert_eq!(scan("m"), (1, ScanState::End));
        assert_eq!(scan("kg*m/s^2"), (8, ScanState::End));
        assert_eq!(scan("(m^2*s^-1)"), (10, ScanState::End));
        assert_eq!(scan("m^((2))"), (7, ScanState::End));
        assert_eq!(scan("mile2"), (5, ScanState::End));
        assert_eq!(scan("μm"), (3, ScanState::End));
        assert_eq!(scan("m²"), (3, ScanState::End));
        assert_eq!(scan(""), (0, ScanState::End));
    }

    #[test]
    fn terminated_unit_strings() {
        assert_eq!(scan("m, next"), (1, ScanState::End));
        assert_eq!(scan("ft next"), (2, ScanState::End));
        assert_eq!(scan("m^2)"), (3, ScanState::End));
        assert_eq!(scan("m."), (2, ScanState::End));
        assert_eq!(scan("m. Next"), (2, ScanState::End));
        assert_eq!(scan("(m.)").1, ScanState::Error);
    }

    #[test]
    fn dot_joins_terms() {
        assert_eq!(scan("N.m"), (3, ScanState::End));
        assert_eq!(scan("m.s^(-2)"), (8, ScanState::End));
        assert_eq!(scan("kg.(m/s)"), (8, ScanState::End));
    }

    #[test]
    fn malformed_unit_strings() {
        assert_eq!(scan("m*").1, ScanState::Error);
        assert_eq!(scan("m^").1, ScanState::Error);
        assert_eq!(scan("m^-").1, ScanState::Error);
        assert_eq!(scan("(m").1, ScanState::Error);
        assert_eq!(scan("m**s").1, ScanState::Error);
        assert_eq!(scan("m^x").1, ScanState::Error);
    }

    #[test]
    fn truncated_utf8() {
        let mut scanner = UnitStringScanner::new();
        assert!(scanner.accept(0xce));
        assert_eq!(scanner.finish(), ScanState::Error);

        let mut scanner = UnitStringScanner::new();
        assert!(scanner.accept(0xce));
        assert!(!scanner.accept(b'm'));
        assert_eq!(scanner.state(), ScanState::Error);

        scanner.reset();
        assert_eq!(scanner.state(), ScanState::Start);
    }

    #[test]
    fn formatted_quantities() {
        let (q, rest) = read_formatted("  5 in, 3 ft").unwrap();
        assert_eq!((q.value, q.symbol.as_str(), rest), (5.0, "in", ", 3 ft"));

        let (q, rest) = read_formatted("1.2_m^2*s^-1)").unwrap();
        assert_eq!((q.value, q.symbol.as_str(), rest), (1.2, "m^2*s^-1", ")"));

        let (q, rest) = read_formatted("5 N.m").unwrap();
        assert_eq!((q.value, q.symbol.as_str(), rest), (5.0, "N.m", ""));

        let (q, rest) = read_formatted("5 m. Next").unwrap();
        assert_eq!((q.value, q.symbol.as_str(), rest), (5.0, "m", ". Next"));

        let (q, rest) = read_formatted("3 ft.").unwrap();
        assert_eq!((q.value, q.symbol.as_str(), rest), (3.0, "ft", "."));

        let (q, rest) = read_formatted("42").unwrap();
        assert_eq!((q.value, q.symbol.as_str(), rest), (42.0, "", ""));
    }

    #[test]
    fn formatted_errors() {
        assert!(matches!(
            read_formatted("5 m*"),
            Err(DimError::Lexical(4, _))
        ));
        assert!(matches!(
            read_formatted(&format!("1 {}", "m".repeat(40))),
            Err(DimError::InvalidSymbol(_))
        ));
        assert!(matches!(read_formatted("in"), Err(DimError::Grammar(_))));
    }
}
