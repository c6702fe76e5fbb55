use std::convert::TryFrom;
use std::io::{Bytes, Read};

/// Reads whitespace separated integers a byte at a time, leaving anything
/// after a number in the stream.
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

pub struct Scanner<R> {
    bytes: Bytes<R>,
    peeked: Option<u8>,
}

impl<R: Read> Scanner<R> {
    pub fn new(input: R) -> Self {
        Scanner {
            bytes: input.bytes(),
            peeked: None,
        }
    }

    fn peek(&mut self) -> Option<u8> {
        if self.peeked.is_none() {
            // Read errors end the input.
            self.peeked = self.bytes.next().and_then(Result::ok);
        }
        self.peeked
    }

    fn next_byte(&mut self) -> Option<u8> {
        let byte = self.peek();
        self.peeked = None;
        byte
    }

    pub fn skip_char(&mut self) {
        self.next_byte();
    }

    pub fn read_int(&mut self) -> Option<i32> {
        while is_space(self.peek()?) {
            self.next_byte();
        }

        let negative = match self.peek()? {
            b'-' => {
                self.next_byte();
                true
            }
            b'+' => {
                self.next_byte();
                false
            }
            _ => false,
        };

        let mut value: i64 = 0;
        let mut digits = 0;
        while let Some(byte) = self.peek().filter(u8::is_ascii_digit) {
            self.next_byte();
            digits += 1;
            value = value * 10 + i64::from(byte - b'0');
            if value > i64::from(i32::MAX) + 1 {
                return None;
            }
        }

        if digits == 0 {
            return None;
        }

        let value = if negative { -value } else { value };
        i32::try_from(value).ok()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reads_ints_across_whitespace() {
        let mut scanner = Scanner::new(&b"  12\n\t-7 +3\x0b\x0c\r\n9"[..]);
        assert_eq!(scanner.read_int(), Some(12));
        assert_eq!(scanner.read_int(), Some(-7));
        assert_eq!(scanner.read_int(), Some(3));
        assert_eq!(scanner.read_int(), Some(9));
        assert_eq!(scanner.read_int(), None);

        assert_eq!(Scanner::new(&b"\x0b1"[..]).read_int(), Some(1));
    }

    #[test]
    fn leaves_trailing_garbage() {
        let mut scanner = Scanner::new(&b"5abc"[..]);
        assert_eq!(scanner.read_int(), Some(5));
        assert_eq!(scanner.read_int(), None);
    }

    #[test]
    fn rejects_non_numbers() {
        assert_eq!(Scanner::new(&b""[..]).read_int(), None);
        assert_eq!(Scanner::new(&b"   \n"[..]).read_int(), None);
        assert_eq!(Scanner::new(&b"abc"[..]).read_int(), None);
        assert_eq!(Scanner::new(&b"-"[..]).read_int(), None);
        assert_eq!(Scanner::new(&b"- 4"[..]).read_int(), None);
    }

    #[test]
    fn range() {
        assert_eq!(Scanner::new(&b"2147483647"[..]).read_int(), Some(i32::MAX));
        assert_eq!(Scanner::new(&b"-2147483648"[..]).read_int(), Some(i32::MIN));
        assert_eq!(Scanner::new(&b"2147483648"[..]).read_int(), None);
        assert_eq!(Scanner::new(&b"99999999999999999999999"[..]).read_int(), None);
    }

    #[test]
    fn skip_char_takes_one_byte() {
        let mut scanner = Scanner::new(&b"1\n\n2"[..]);
        assert_eq!(scanner.read_int(), Some(1));
        scanner.skip_char();
        assert_eq!(scanner.peek(), Some(b'\n'));
        assert_eq!(scanner.read_int(), Some(2));
        scanner.skip_char();
        assert_eq!(scanner.peek(), None);
    }
}
