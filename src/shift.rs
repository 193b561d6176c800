use std::io::{BufRead, Write};

use anyhow::Result;

use crate::console::Console;

/// Rotation applied to every ASCII letter.
pub const SHIFT: u8 = 4;

pub const PROMPT: &str = "Enter a string: ";

fn rotate(b: u8, by: u8) -> u8 {
    if b.is_ascii_lowercase() {
        ((b - b'a' + by) % 26) + b'a'
    } else if b.is_ascii_uppercase() {
        ((b - b'A' + by) % 26) + b'A'
    } else {
        b
    }
}

pub fn shift_byte(b: u8) -> u8 {
    rotate(b, SHIFT)
}

pub fn shift_char(c: char) -> char {
    if c.is_ascii() {
        shift_byte(c as u8) as char
    } else {
        c
    }
}

pub fn unshift_char(c: char) -> char {
    if c.is_ascii() {
        rotate(c as u8, 26 - SHIFT) as char
    } else {
        c
    }
}

pub fn encode(input: &str) -> String {
    input.chars().map(shift_char).collect()
}

pub fn decode(input: &str) -> String {
    input.chars().map(unshift_char).collect()
}

/// Bytes of a multi-byte UTF-8 sequence are all >= 0x80 and pass through
/// untouched, so valid UTF-8 in gives valid UTF-8 out.
pub fn encode_bytes(input: &[u8]) -> Vec<u8> {
    input.iter().copied().map(shift_byte).collect()
}

/// Prompt, read one line, print it shifted followed by a single newline.
///
/// A stream that ends without a newline is treated as if it had one.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    console.prompt(PROMPT)?;
    let line = console.read_line_bytes()?;
    log::debug!("shifting {} bytes by {SHIFT}", line.len());

    console.write_bytes(&encode_bytes(&line))?;
    console.write_bytes(b"\n")?;
    console.flush()
}

#[cfg(test)]
mod tests {
    use super::{PROMPT, decode, encode, encode_bytes, run, shift_char, unshift_char};
    use crate::console::Console;

    fn run_with(input: &[u8]) -> Vec<u8> {
        let mut console = Console::new(input, Vec::new());
        run(&mut console).unwrap();
        let out = console.into_output();
        assert!(out.starts_with(PROMPT.as_bytes()));
        out[PROMPT.len()..].to_vec()
    }

    #[test]
    fn letter_edges() {
        assert_eq!(shift_char('a'), 'e');
        assert_eq!(shift_char('z'), 'd');
        assert_eq!(shift_char('A'), 'E');
        assert_eq!(shift_char('Z'), 'D');
        assert_eq!(shift_char('w'), 'a');
    }

    #[test]
    fn non_letters_unchanged() {
        for b in 0u8..=127 {
            let c = b as char;
            if !c.is_ascii_alphabetic() {
                assert_eq!(shift_char(c), c, "byte {b} changed");
            }
        }
        for c in ['é', 'ß', '字', '😊'] {
            assert_eq!(shift_char(c), c);
        }
    }

    #[test]
    fn thirteen_shifts_cycle_back() {
        for c in ('a'..='z').chain('A'..='Z') {
            let mut x = c;
            for i in 1..13 {
                x = shift_char(x);
                assert_ne!(x, c, "{c} returned early after {i} shifts");
            }
            assert_eq!(shift_char(x), c);
        }
    }

    #[test]
    fn shifts_compose_additively() {
        assert_eq!(shift_char(shift_char('a')), 'i');
        assert_ne!(shift_char(shift_char('a')), 'a');
        assert_ne!(shift_char(shift_char('a')), shift_char('a'));
        assert_eq!(shift_char(shift_char('Y')), 'G');
    }

    #[test]
    fn bijection_on_letters() {
        let lower: String = ('a'..='z').collect();
        let shifted = encode(&lower);
        let mut sorted: Vec<char> = shifted.chars().collect();
        sorted.sort_unstable();
        assert_eq!(sorted.into_iter().collect::<String>(), lower);

        for c in ('a'..='z').chain('A'..='Z') {
            assert_eq!(unshift_char(shift_char(c)), c);
        }
    }

    #[test]
    fn encode_strings() {
        assert_eq!(encode("abcxyz"), "efgbcd");
        assert_eq!(encode("Hello, World!"), "Lipps, Asvph!");
        assert_eq!(encode(""), "");
        assert_eq!(decode("Lipps, Asvph!"), "Hello, World!");
    }

    #[test]
    fn multibyte_input_survives_byte_encoding() {
        let s = "naïve café 123";
        let out = String::from_utf8(encode_bytes(s.as_bytes())).unwrap();
        assert_eq!(out, encode(s));
        assert_eq!(out, "reïzi gejé 123");
    }

    #[test]
    fn run_transforms_one_line() {
        assert_eq!(run_with(b"abcxyz\n"), b"efgbcd\n");
        assert_eq!(run_with(b"Hello, World!\n"), b"Lipps, Asvph!\n");
    }

    #[test]
    fn run_reads_only_first_line() {
        assert_eq!(run_with(b"abc\nsecond line\n"), b"efg\n");
    }

    #[test]
    fn run_empty_line() {
        assert_eq!(run_with(b"\n"), b"\n");
    }

    #[test]
    fn run_end_of_stream_is_a_terminator() {
        assert_eq!(run_with(b"xyz"), b"bcd\n");
        assert_eq!(run_with(b""), b"\n");
    }

    #[test]
    fn run_strips_carriage_return() {
        assert_eq!(run_with(b"Az\r\n"), b"Ed\n");
    }
}
