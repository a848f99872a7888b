//! Integer to binary / hexadecimal conversion.
//!
//! Non-negative values use plain repeated division. Negative values are
//! encoded as fixed-width two's complement: `2^width + value`, converted with
//! the same routine and left-padded with `'0'` to the field width.
//!
//! The field width is not range-checked. A value below `-2^(width-1)` yields a
//! wrapped pattern, and a value at or below `-2^width` leaves nothing for the
//! digit loop to emit, so the field comes out as all zeros.

/// Digit alphabet shared by every radix up to 16.
pub const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Two's-complement field width for negative values in binary.
pub const BINARY_FIELD_BITS: u32 = 10;

/// Two's-complement field width for negative values in hexadecimal (10 digits).
pub const HEX_FIELD_BITS: u32 = 40;

/// Placeholder rendered in place of a conversion when the input was not an integer.
pub const VALUE_SENTINEL: &str = "#VALUE!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Binary,
    Hexadecimal,
}

impl Radix {
    pub const fn base(self) -> i128 {
        match self {
            Self::Binary => 2,
            Self::Hexadecimal => 16,
        }
    }

    pub const fn bits_per_digit(self) -> u32 {
        match self {
            Self::Binary => 1,
            Self::Hexadecimal => 4,
        }
    }

    fn digit(self, remainder: i128) -> char {
        debug_assert!((0..self.base()).contains(&remainder));
        HEX_DIGITS[remainder as usize] as char
    }
}

/// Digits of `value` in `radix`, most significant first, no prefix.
///
/// Zero is `"0"`. The loop only runs while the value is positive, so a
/// negative input produces an empty string.
pub fn to_radix_unsigned(value: i128, radix: Radix) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let base = radix.base();
    let mut digits = Vec::new();
    let mut number = value;
    while number > 0 {
        digits.push(radix.digit(number % base));
        number /= base;
    }

    digits.iter().rev().collect()
}

/// Two's-complement rendering of `value` in a field of `width_bits` bits.
pub fn to_twos_complement(value: i64, radix: Radix, width_bits: u32) -> String {
    let modulus: i128 = 1 << width_bits;
    let adjusted = modulus + i128::from(value);
    let width = (width_bits / radix.bits_per_digit()) as usize;
    format!("{:0>width$}", to_radix_unsigned(adjusted, radix))
}

/// Field widths and sentinel used by the number converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSettings {
    binary_bits: u32,
    hex_bits: u32,
    sentinel: String,
}

impl ConversionSettings {
    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }

    pub fn to_binary(&self, value: i64) -> String {
        self.convert(value, Radix::Binary, self.binary_bits)
    }

    pub fn to_hex(&self, value: i64) -> String {
        self.convert(value, Radix::Hexadecimal, self.hex_bits)
    }

    fn convert(&self, value: i64, radix: Radix, width_bits: u32) -> String {
        if value >= 0 {
            to_radix_unsigned(i128::from(value), radix)
        } else {
            to_twos_complement(value, radix, width_bits)
        }
    }
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self {
            binary_bits: BINARY_FIELD_BITS,
            hex_bits: HEX_FIELD_BITS,
            sentinel: VALUE_SENTINEL.to_string(),
        }
    }
}

/// Binary digits with the default 10-bit field for negatives.
pub fn to_binary(value: i64) -> String {
    ConversionSettings::default().to_binary(value)
}

/// Hexadecimal digits with the default 40-bit field for negatives.
pub fn to_hex(value: i64) -> String {
    ConversionSettings::default().to_hex(value)
}
