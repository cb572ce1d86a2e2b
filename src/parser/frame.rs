//! Frame Decoder
//!
//! Walks a raw byte stream and extracts length-prefixed frames:
//!
//! ```text
//! [opcode: 1 byte][length: 1 byte][payload: length bytes]
//! ```
//!
//! The decoder knows nothing about what an opcode means. It never
//! resynchronizes: once a frame is truncated there is no way to find the
//! next frame boundary, so decoding stops there.

use crate::error::FrameError;

/// Size of the opcode + length header
pub const HEADER_LEN: usize = 2;

/// Largest payload a one-byte length prefix can declare
pub const MAX_PAYLOAD_LEN: usize = u8::MAX as usize;

/// One decoded frame, borrowing its payload from the stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    /// Operation identifier
    pub opcode: u8,
    /// Operation-specific data
    pub payload: &'a [u8],
    /// Offset of the opcode byte in the stream
    pub offset: usize,
}

impl Frame<'_> {
    /// Bytes this frame occupies on the wire
    pub fn wire_len(&self) -> usize {
        HEADER_LEN + self.payload.len()
    }
}

/// Decode the frame starting at `pos`.
///
/// Returns the frame and the number of bytes consumed (`2 + length`).
///
/// # Errors
///
/// Returns [`FrameError::Truncated`] when the header or the declared payload
/// runs past the end of the stream.
pub fn decode_frame(stream: &[u8], pos: usize) -> Result<(Frame<'_>, usize), FrameError> {
    let available = stream.len().saturating_sub(pos);
    if available < HEADER_LEN {
        return Err(FrameError::Truncated {
            offset: pos,
            needed: HEADER_LEN,
            available,
        });
    }

    let opcode = stream[pos];
    let length = stream[pos + 1] as usize;
    let consumed = HEADER_LEN + length;
    if available < consumed {
        return Err(FrameError::Truncated {
            offset: pos,
            needed: consumed,
            available,
        });
    }

    let start = pos + HEADER_LEN;
    let frame = Frame {
        opcode,
        payload: &stream[start..start + length],
        offset: pos,
    };
    Ok((frame, consumed))
}

/// Iterator over the frames of a stream.
///
/// Yields `Err` at most once, for a truncated trailing frame, and then
/// stops.
#[derive(Debug, Clone)]
pub struct FrameDecoder<'a> {
    stream: &'a [u8],
    pos: usize,
    failed: bool,
}

impl<'a> FrameDecoder<'a> {
    pub fn new(stream: &'a [u8]) -> Self {
        Self {
            stream,
            pos: 0,
            failed: false,
        }
    }

    /// Current position in the stream
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Whether every byte has been consumed
    pub fn is_finished(&self) -> bool {
        self.pos >= self.stream.len()
    }
}

impl<'a> Iterator for FrameDecoder<'a> {
    type Item = Result<Frame<'a>, FrameError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.is_finished() {
            return None;
        }
        match decode_frame(self.stream, self.pos) {
            Ok((frame, consumed)) => {
                self.pos += consumed;
                Some(Ok(frame))
            },
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_single_frame() {
        let stream = [0x02, 3, 5, 5, b'A'];
        let (frame, consumed) = decode_frame(&stream, 0).unwrap();
        assert_eq!(frame.opcode, 0x02);
        assert_eq!(frame.payload, &[5, 5, b'A']);
        assert_eq!(frame.offset, 0);
        assert_eq!(consumed, 5);
        assert_eq!(frame.wire_len(), consumed);
    }

    #[test]
    fn test_decode_at_offset() {
        let stream = [0x07, 0, 0xFF, 1, 9];
        let (frame, consumed) = decode_frame(&stream, 2).unwrap();
        assert_eq!(frame.opcode, 0xFF);
        assert_eq!(frame.payload, &[9]);
        assert_eq!(frame.offset, 2);
        assert_eq!(consumed, 3);
    }

    #[test]
    fn test_decode_empty_payload() {
        let (frame, consumed) = decode_frame(&[0xFF, 0], 0).unwrap();
        assert!(frame.payload.is_empty());
        assert_eq!(consumed, 2);
    }

    #[test]
    fn test_truncated_header() {
        assert_eq!(
            decode_frame(&[0x01], 0),
            Err(FrameError::Truncated {
                offset: 0,
                needed: 2,
                available: 1
            })
        );
        assert_eq!(
            decode_frame(&[], 0),
            Err(FrameError::Truncated {
                offset: 0,
                needed: 2,
                available: 0
            })
        );
    }

    #[test]
    fn test_truncated_payload() {
        let stream = [0x01, 3, 40, 15];
        assert_eq!(
            decode_frame(&stream, 0),
            Err(FrameError::Truncated {
                offset: 0,
                needed: 5,
                available: 4
            })
        );
    }

    #[test]
    fn test_iterator_walks_stream() {
        let stream = [0x07, 0, 0x05, 2, 1, 2, 0xFF, 0];
        let opcodes: Vec<u8> = FrameDecoder::new(&stream)
            .map(|f| f.unwrap().opcode)
            .collect();
        assert_eq!(opcodes, vec![0x07, 0x05, 0xFF]);
    }

    #[test]
    fn test_iterator_stops_after_truncation() {
        let stream = [0x07, 0, 0x02, 3, 1];
        let mut decoder = FrameDecoder::new(&stream);
        assert!(decoder.next().unwrap().is_ok());
        assert_eq!(decoder.position(), 2);
        assert!(decoder.next().unwrap().is_err());
        assert!(decoder.next().is_none());
        assert!(!decoder.is_finished());
    }
}
