//! Key events and the decoder that produces them from a raw byte stream.

/// Logical key name, as a terminal widget reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Tab,
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self { key, ctrl: false, meta: false }
    }

    pub fn char(c: char) -> Self {
        Self::new(Key::Char(c))
    }

    pub fn ctrl(c: char) -> Self {
        Self { key: Key::Char(c), ctrl: true, meta: false }
    }

    /// Ctrl+C or Meta+C, either case.
    pub fn is_interrupt(&self) -> bool {
        (self.ctrl || self.meta) && matches!(self.key, Key::Char(c) if c.eq_ignore_ascii_case(&'c'))
    }

    /// Ctrl+D.
    pub fn is_end_of_input(&self) -> bool {
        self.ctrl && matches!(self.key, Key::Char(c) if c.eq_ignore_ascii_case(&'d'))
    }
}

const ESC: u8 = 0x1b;

/// Turns raw terminal input into `KeyEvent`s.
///
/// Incomplete escape sequences and partial UTF-8 characters at the end of a
/// chunk are held back until the next `feed`.
#[derive(Debug, Default)]
pub struct KeyDecoder {
    pending: Vec<u8>,
}

impl KeyDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop anything held back from earlier chunks.
    pub fn reset(&mut self) {
        self.pending.clear();
    }

    pub fn feed(&mut self, bytes: &[u8]) -> Vec<KeyEvent> {
        self.pending.extend_from_slice(bytes);
        let mut events = Vec::new();
        let mut i = 0;

        while i < self.pending.len() {
            let rest = &self.pending[i..];
            match decode_one(rest) {
                Decoded::Event(event, used) => {
                    events.push(event);
                    i += used;
                }
                Decoded::Skip(used) => i += used,
                Decoded::Incomplete => break,
            }
        }

        self.pending.drain(..i);
        events
    }
}

enum Decoded {
    Event(KeyEvent, usize),
    Skip(usize),
    Incomplete,
}

fn decode_one(bytes: &[u8]) -> Decoded {
    let b = bytes[0];
    match b {
        b'\r' => {
            // A CRLF pair is one Enter.
            let used = if bytes.get(1) == Some(&b'\n') { 2 } else { 1 };
            Decoded::Event(KeyEvent::new(Key::Enter), used)
        }
        b'\n' => Decoded::Event(KeyEvent::new(Key::Enter), 1),
        0x7f | 0x08 => Decoded::Event(KeyEvent::new(Key::Backspace), 1),
        b'\t' => Decoded::Event(KeyEvent::new(Key::Tab), 1),
        ESC => decode_escape(bytes),
        0x01..=0x1a => {
            let letter = (b'a' + b - 1) as char;
            Decoded::Event(KeyEvent::ctrl(letter), 1)
        }
        0x00..=0x1f => Decoded::Skip(1),
        _ => decode_utf8(bytes),
    }
}

fn decode_escape(bytes: &[u8]) -> Decoded {
    match bytes.get(1) {
        None => Decoded::Incomplete,
        Some(b'[') | Some(b'O') => {
            let Some(&code) = bytes.get(2) else {
                return Decoded::Incomplete;
            };
            let key = match code {
                b'A' => Key::ArrowUp,
                b'B' => Key::ArrowDown,
                b'C' => Key::ArrowRight,
                b'D' => Key::ArrowLeft,
                // Longer CSI sequences (function keys, paste markers) are
                // swallowed up to their final byte.
                _ => return skip_csi(bytes),
            };
            Decoded::Event(KeyEvent::new(key), 3)
        }
        // Alt/Meta sends ESC followed by the key.
        Some(&next) if (0x20..0x7f).contains(&next) => Decoded::Event(
            KeyEvent { key: Key::Char(next as char), ctrl: false, meta: true },
            2,
        ),
        Some(_) => Decoded::Event(KeyEvent::new(Key::Escape), 1),
    }
}

fn skip_csi(bytes: &[u8]) -> Decoded {
    match bytes[2..].iter().position(|b| (0x40..=0x7e).contains(b)) {
        Some(pos) => Decoded::Skip(pos + 3),
        None => Decoded::Incomplete,
    }
}

fn decode_utf8(bytes: &[u8]) -> Decoded {
    let width = match bytes[0] {
        0x00..=0x7f => 1,
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf7 => 4,
        _ => return Decoded::Skip(1),
    };
    if bytes.len() < width {
        return Decoded::Incomplete;
    }
    match std::str::from_utf8(&bytes[..width]).ok().and_then(|s| s.chars().next()) {
        Some(c) => Decoded::Event(KeyEvent::char(c), width),
        None => Decoded::Skip(1),
    }
}
