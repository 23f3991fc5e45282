//! Fixed-width decimal writers for the render hot path.
//!
//! Every placeholder of every log line goes through here, so these append
//! straight into the output buffer instead of going through `format!`.
//! Components are not range-checked: values of 100 or more in a two-digit
//! slot produce garbage digits, never a panic.

/// Appends `value` in decimal, left-padded with `'0'` to at least `width` digits.
///
/// A `width` of 0 or 1 means natural width.
pub fn itoa(buf: &mut Vec<u8>, mut value: u64, width: usize) {
    // u64::MAX has 20 digits
    let mut digits = [0u8; 20];
    let mut pos = digits.len();
    let mut width = width.min(digits.len());

    while value >= 10 || width > 1 {
        width = width.saturating_sub(1);
        let q = value / 10;
        pos -= 1;
        digits[pos] = b'0' + (value - q * 10) as u8;
        value = q;
    }
    pos -= 1;
    digits[pos] = b'0' + value as u8;

    buf.extend_from_slice(&digits[pos..]);
}

#[inline]
const fn tens(v: u32) -> u8 {
    b'0'.wrapping_add((v / 10) as u8)
}

#[inline]
const fn ones(v: u32) -> u8 {
    b'0'.wrapping_add((v % 10) as u8)
}

/// Appends `AA<sep>BB<sep>CC`: exactly 8 bytes.
pub fn two_two_two(buf: &mut Vec<u8>, a: u32, b: u32, c: u32, sep: u8) {
    buf.extend_from_slice(&[
        tens(a),
        ones(a),
        sep,
        tens(b),
        ones(b),
        sep,
        tens(c),
        ones(c),
    ]);
}

/// Appends `CCYY<sep>MM<sep>DD`: exactly 10 bytes.
pub fn ccyymmdd(buf: &mut Vec<u8>, cc: u32, yy: u32, mm: u32, dd: u32, sep: u8) {
    buf.extend_from_slice(&[
        tens(cc),
        ones(cc),
        tens(yy),
        ones(yy),
        sep,
        tens(mm),
        ones(mm),
        sep,
        tens(dd),
        ones(dd),
    ]);
}
