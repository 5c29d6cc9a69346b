//! Half-precision (16-bit) float decoding.

/// Widens the raw bits of an IEEE 754 half-precision float to `f64`.
///
/// Every half value, subnormals included, is exactly representable as an
/// `f64`, so the conversion is lossless.
///
/// ```
/// use employee_buffers::decode_f16;
///
/// assert_eq!(decode_f16(0x3C00), 1.0);
/// assert_eq!(decode_f16(0x64B0), 1200.0);
/// assert!(decode_f16(0x7E00).is_nan());
/// ```
pub fn decode_f16(bits: u16) -> f64 {
    let negative = bits & 0x8000 != 0;
    let exponent = i32::from((bits >> 10) & 0x1f);
    let mantissa = f64::from(bits & 0x03ff);

    let magnitude = match exponent {
        0 => mantissa * 2f64.powi(-24),
        0x1f if mantissa == 0.0 => f64::INFINITY,
        0x1f => return f64::NAN,
        _ => (1024.0 + mantissa) * 2f64.powi(exponent - 25),
    };
    if negative {
        -magnitude
    } else {
        magnitude
    }
}
