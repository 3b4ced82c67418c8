//! MSB-first bit buffer.
//!
//! The derivation pipeline works in units that do not line up with bytes:
//! 3-bit dice codes, 11-bit word indices, 4- or 8-bit checksums. [`BitBuf`]
//! gives the rest of the crate one packed representation for all of them:
//! append while filling, read-only afterwards.
//!
//! Bit order is most-significant-bit first within each byte, matching the
//! BIP39 wire layout.

/// Packed bit buffer, MSB-first within each byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitBuf {
    bytes: Vec<u8>,
    len: usize,
}

impl BitBuf {
    /// Empty buffer.
    pub fn new() -> Self {
        Self {
            bytes: Vec::new(),
            len: 0,
        }
    }

    /// Empty buffer with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// Buffer holding every bit of `bytes`, in order.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            len: bytes.len() * 8,
        }
    }

    /// Number of bits in the buffer.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the buffer holds no bits.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append a single bit.
    pub fn push(&mut self, bit: bool) {
        if self.len % 8 == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 1 << (7 - (self.len % 8));
        }
        self.len += 1;
    }

    /// Append the low `width` bits of `value`, most significant first.
    ///
    /// # Panics
    /// Panics if `width > 16`.
    pub fn push_bits(&mut self, value: u16, width: usize) {
        assert!(width <= 16, "push_bits width {width} exceeds 16");
        for i in (0..width).rev() {
            self.push((value >> i) & 1 == 1);
        }
    }

    /// Bit at `index`.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn get(&self, index: usize) -> bool {
        assert!(index < self.len, "bit index {index} out of range {}", self.len);
        (self.bytes[index / 8] >> (7 - (index % 8))) & 1 == 1
    }

    /// Read `width` consecutive bits starting at `offset` as an unsigned
    /// integer, most significant bit first.
    ///
    /// # Panics
    /// Panics if `width > 16` or the range runs past the end of the buffer.
    pub fn slice_u16(&self, offset: usize, width: usize) -> u16 {
        assert!(width <= 16, "slice_u16 width {width} exceeds 16");
        assert!(
            offset + width <= self.len,
            "bit range {offset}..{} out of range {}",
            offset + width,
            self.len
        );
        let mut value = 0u16;
        for i in 0..width {
            value = (value << 1) | u16::from(self.get(offset + i));
        }
        value
    }

    /// Append every bit of `other`, in order.
    pub fn extend_from(&mut self, other: &BitBuf) {
        for i in 0..other.len {
            self.push(other.get(i));
        }
    }

    /// Backing bytes. Trailing bits past `len` are zero.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Render as a '0'/'1' string, for diagnostic display only.
    pub fn to_bit_string(&self) -> String {
        (0..self.len)
            .map(|i| if self.get(i) { '1' } else { '0' })
            .collect()
    }
}

impl Default for BitBuf {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_packs_msb_first() {
        let mut b = BitBuf::new();
        b.push(true);
        b.push(false);
        b.push(true);
        assert_eq!(b.len(), 3);
        assert_eq!(b.as_bytes(), &[0b1010_0000]);
    }

    #[test]
    fn test_push_bits_value() {
        let mut b = BitBuf::new();
        b.push_bits(0b101_0011_0110, 11);
        assert_eq!(b.len(), 11);
        assert_eq!(b.slice_u16(0, 11), 0b101_0011_0110);
    }

    #[test]
    fn test_byte_round_trip() {
        let bytes = [0xDE, 0xAD, 0xBE, 0xEF];
        let b = BitBuf::from_bytes(&bytes);
        assert_eq!(b.len(), 32);
        assert_eq!(b.as_bytes(), &bytes);
    }

    #[test]
    fn test_get_reads_correct_positions() {
        let b = BitBuf::from_bytes(&[0b1000_0001]);
        assert!(b.get(0));
        assert!(!b.get(1));
        assert!(!b.get(6));
        assert!(b.get(7));
    }

    #[test]
    fn test_slice_spans_byte_boundary() {
        // 0000_0001 1000_0000 → bits 7..9 are "11"
        let b = BitBuf::from_bytes(&[0x01, 0x80]);
        assert_eq!(b.slice_u16(7, 2), 0b11);
        assert_eq!(b.slice_u16(4, 8), 0b0001_1000);
    }

    #[test]
    fn test_extend_from_preserves_order() {
        let mut a = BitBuf::new();
        a.push_bits(0b101, 3);
        let mut b = BitBuf::new();
        b.push_bits(0b01, 2);
        a.extend_from(&b);
        assert_eq!(a.len(), 5);
        assert_eq!(a.slice_u16(0, 5), 0b10101);
    }

    #[test]
    fn test_to_bit_string() {
        let mut b = BitBuf::new();
        b.push_bits(0b1101, 4);
        assert_eq!(b.to_bit_string(), "1101");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_out_of_range_panics() {
        let b = BitBuf::from_bytes(&[0xFF]);
        b.get(8);
    }
}
