//! Blocking reader that turns the input byte stream into key events.

use crate::error::{PipitError, Result};
use crate::input::KeyEvent;
use bstr::ByteSlice;
use std::io::{self, Read};

/// Reads exactly one [`KeyEvent`] per call.
///
/// Bytes are pulled one at a time and decoded as UTF-8, so a multi-byte
/// glyph always arrives as a single event. A byte that breaks a sequence is
/// kept and starts the next event instead of being lost.
#[derive(Debug, Default)]
pub struct InputReader {
    pending: Option<u8>,
}

impl InputReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block until one character is available on `source`.
    ///
    /// Returns `None` at end-of-stream. Malformed UTF-8 yields U+FFFD.
    ///
    /// # Errors
    /// `InputRead` for any read failure other than an interrupted call.
    pub fn read_event<R: Read + ?Sized>(&mut self, source: &mut R) -> Result<Option<KeyEvent>> {
        let lead = match self.pending.take() {
            Some(byte) => byte,
            None => match read_byte(source)? {
                Some(byte) => byte,
                None => return Ok(None),
            },
        };

        // An incomplete prefix is at most 3 bytes, so 4 always suffice
        let mut encoded = [lead, 0, 0, 0];
        let mut len = 1;
        let decoded = loop {
            let Some(chunk) = ByteSlice::utf8_chunks(&encoded[..len]).next() else {
                break None;
            };
            if let Some(ch) = chunk.valid().chars().next() {
                break Some(ch);
            }
            if !chunk.incomplete() {
                if chunk.invalid().len() < len {
                    self.pending = Some(encoded[len - 1]);
                }
                break None;
            }
            match read_byte(source)? {
                Some(byte) => {
                    encoded[len] = byte;
                    len += 1;
                }
                None => break None,
            }
        };

        let key = KeyEvent::from_char(decoded.unwrap_or(char::REPLACEMENT_CHARACTER));
        log::trace!("Read key {:?}", key);
        Ok(Some(key))
    }
}

fn read_byte<R: Read + ?Sized>(source: &mut R) -> Result<Option<u8>> {
    let mut byte = [0u8; 1];
    loop {
        match source.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte[0])),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(PipitError::input_read(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTerminal;
    use std::io::Cursor;

    fn read_all(bytes: &[u8]) -> Vec<KeyEvent> {
        let mut reader = InputReader::new();
        let mut source = Cursor::new(bytes.to_vec());
        let mut keys = Vec::new();
        while let Some(key) = reader.read_event(&mut source).unwrap() {
            keys.push(key);
        }
        keys
    }

    #[test]
    fn test_ascii_and_control() {
        assert_eq!(
            read_all(b"a\x04\r"),
            vec![
                KeyEvent::Char('a'),
                KeyEvent::ctrl('d'),
                KeyEvent::Control(b'\r')
            ]
        );
    }

    #[test]
    fn test_multi_byte_glyphs_are_single_events() {
        assert_eq!(
            read_all("é漢🦀".as_bytes()),
            vec![
                KeyEvent::Char('é'),
                KeyEvent::Char('漢'),
                KeyEvent::Char('🦀')
            ]
        );
    }

    #[test]
    fn test_end_of_stream() {
        let mut reader = InputReader::new();
        let mut source = Cursor::new(Vec::new());
        assert_eq!(reader.read_event(&mut source).unwrap(), None);
    }

    #[test]
    fn test_malformed_input_decodes_to_replacement() {
        assert_eq!(
            read_all(&[0xff, b'x']),
            vec![
                KeyEvent::Char(char::REPLACEMENT_CHARACTER),
                KeyEvent::Char('x')
            ]
        );
    }

    #[test]
    fn test_broken_sequence_keeps_next_byte() {
        // Lead byte of a 3-byte sequence followed by plain ASCII
        assert_eq!(
            read_all(&[0xe6, b'q']),
            vec![
                KeyEvent::Char(char::REPLACEMENT_CHARACTER),
                KeyEvent::Char('q')
            ]
        );
    }

    #[test]
    fn test_invalid_continuation_splits_into_replacements() {
        // ED A0 80 would encode a surrogate; each maximal invalid part is
        // replaced on its own and the following key survives
        assert_eq!(
            read_all(&[0xed, 0xa0, 0x80, b'k']),
            vec![
                KeyEvent::Char(char::REPLACEMENT_CHARACTER),
                KeyEvent::Char(char::REPLACEMENT_CHARACTER),
                KeyEvent::Char(char::REPLACEMENT_CHARACTER),
                KeyEvent::Char('k')
            ]
        );
    }

    #[test]
    fn test_overlong_lead_does_not_wait_for_more_bytes() {
        let mut reader = InputReader::new();
        let mut source = Cursor::new(vec![0xc0, b'a']);

        assert_eq!(
            reader.read_event(&mut source).unwrap(),
            Some(KeyEvent::Char(char::REPLACEMENT_CHARACTER))
        );
        assert_eq!(source.position(), 1);
        assert_eq!(reader.read_event(&mut source).unwrap(), Some(KeyEvent::Char('a')));
    }

    #[test]
    fn test_truncated_sequence_at_end_of_stream() {
        assert_eq!(
            read_all(&[0xf0, 0x9f]),
            vec![KeyEvent::Char(char::REPLACEMENT_CHARACTER)]
        );
    }

    #[test]
    fn test_reads_one_event_at_a_time() {
        let fake = FakeTerminal::new(24, 80).with_input("ab");
        let mut device = fake.clone();
        let mut reader = InputReader::new();

        assert_eq!(
            reader.read_event(&mut device).unwrap(),
            Some(KeyEvent::Char('a'))
        );
        assert_eq!(fake.pending_input(), 1);
    }

    #[test]
    fn test_read_error() {
        let mut device = FakeTerminal::new(24, 80).fail_reads(io::ErrorKind::Other);
        let err = InputReader::new().read_event(&mut device).unwrap_err();
        assert!(matches!(err, PipitError::InputRead { .. }));
    }

    #[test]
    fn test_interrupted_read_is_retried() {
        struct Interrupting {
            interrupted: bool,
        }

        impl Read for Interrupting {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                if !self.interrupted {
                    self.interrupted = true;
                    return Err(io::Error::new(io::ErrorKind::Interrupted, "EINTR"));
                }
                buf[0] = b'z';
                Ok(1)
            }
        }

        let mut source = Interrupting { interrupted: false };
        assert_eq!(
            InputReader::new().read_event(&mut source).unwrap(),
            Some(KeyEvent::Char('z'))
        );
    }
}
