//! Payload decoding (element-type dispatch)

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use super::models::{Date, DecodedValue, ElementType, Time};
use super::error::{AbifError, Result};

/// Decode a raw payload slice according to its element-type code.
///
/// The slice is already sized to `num_elements * element_size` by the
/// directory walker, so the element count is implied by its length.
/// Integers are big-endian; floats are little-endian. The asymmetry is
/// part of the format and deliberate.
///
/// Numeric payloads with exactly one element decode to a bare scalar
/// variant instead of a one-element array.
///
/// Fails with `UnsupportedType` for any code outside the dispatch table
/// that is below the vendor range (>= 1024, which decodes as raw bytes).
pub fn decode(element_type: i16, data: &[u8]) -> Result<DecodedValue> {
    match ElementType::try_from(element_type)? {
        ElementType::UInt8 => Ok(match data {
            [single] => DecodedValue::UInt8(*single),
            _ => DecodedValue::UInt8Array(data.to_vec()),
        }),
        ElementType::Text => Ok(DecodedValue::Text(decode_text(data))),
        ElementType::UInt16 => {
            let values = numeric(data, 2, BigEndian::read_u16);
            Ok(match values.as_slice() {
                [single] => DecodedValue::UInt16(*single),
                _ => DecodedValue::UInt16Array(values),
            })
        }
        ElementType::Int16 => {
            let values = numeric(data, 2, BigEndian::read_i16);
            Ok(match values.as_slice() {
                [single] => DecodedValue::Int16(*single),
                _ => DecodedValue::Int16Array(values),
            })
        }
        ElementType::Int32 => {
            let values = numeric(data, 4, BigEndian::read_i32);
            Ok(match values.as_slice() {
                [single] => DecodedValue::Int32(*single),
                _ => DecodedValue::Int32Array(values),
            })
        }
        ElementType::Float32 => {
            let values = numeric(data, 4, LittleEndian::read_f32);
            Ok(match values.as_slice() {
                [single] => DecodedValue::Float32(*single),
                _ => DecodedValue::Float32Array(values),
            })
        }
        ElementType::Float64 => {
            let values = numeric(data, 8, LittleEndian::read_f64);
            Ok(match values.as_slice() {
                [single] => DecodedValue::Float64(*single),
                _ => DecodedValue::Float64Array(values),
            })
        }
        ElementType::Date => {
            let raw = fixed4(data, "date payload")?;
            Ok(DecodedValue::Date(Date {
                year: BigEndian::read_i16(&raw[0..2]),
                month: raw[2],
                day: raw[3],
            }))
        }
        ElementType::Time => {
            let raw = fixed4(data, "time payload")?;
            Ok(DecodedValue::Time(Time {
                hour: raw[0],
                minute: raw[1],
                second: raw[2],
                hsecond: raw[3],
            }))
        }
        // Length-prefixed string: drop the leading length byte
        ElementType::PString => Ok(DecodedValue::Text(decode_text(
            data.get(1..).unwrap_or_default(),
        ))),
        // Terminator-suffixed string: drop the final byte
        ElementType::CString => Ok(DecodedValue::Text(decode_text(
            &data[..data.len().saturating_sub(1)],
        ))),
        ElementType::User(_) => Ok(DecodedValue::Raw(data.to_vec())),
    }
}

/// Decode each `width`-byte chunk of the slice to one numeric value.
/// A trailing partial chunk is ignored.
fn numeric<T>(data: &[u8], width: usize, read_one: impl Fn(&[u8]) -> T) -> Vec<T> {
    data.chunks_exact(width).map(read_one).collect()
}

/// Date and time structs are packed into exactly 4 bytes.
fn fixed4(data: &[u8], context: &'static str) -> Result<[u8; 4]> {
    data.get(0..4)
        .and_then(|bytes| <[u8; 4]>::try_from(bytes).ok())
        .ok_or(AbifError::Truncated {
            context,
            needed: 4,
            available: data.len(),
        })
}

fn decode_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
