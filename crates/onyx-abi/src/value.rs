//! Tagged value representation.
//!
//! A value crossing the boundary is a fixed-size pair of a `u32` type kind
//! and a `u64` payload whose meaning the kind determines. [`RawValue`] is
//! the exact C-layout record the ABI sees; [`Value`] is the safe enum view
//! used by host-side code. Both are plain copies — no destructors, no
//! ownership of anything outside the 12 bytes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime type kind, as registered by the host VM.
///
/// The discriminants below are the kinds this boundary knows about. Every
/// other `u32` is reserved by the host VM and must pass through unharmed —
/// see [`Value::Opaque`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    /// Unsigned 64-bit integer; payload is the value itself.
    Uint,
    /// Signed 64-bit integer; payload is the two's-complement bit pattern.
    Int,
    /// IEEE 754 double; payload is the bit pattern.
    Float,
    /// Handle to a VM-managed string; payload is the handle.
    StrAddr,
    /// VM heap address; payload is the address.
    Address,
}

impl TypeKind {
    /// The `u32` discriminant this kind carries on the wire.
    pub const fn code(self) -> u32 {
        match self {
            Self::Uint => 1,
            Self::Int => 2,
            Self::Float => 3,
            Self::StrAddr => 4,
            Self::Address => 5,
        }
    }

    /// Look up a known kind by its wire discriminant.
    ///
    /// Returns `None` for reserved kinds; callers that must preserve those
    /// go through [`Value::Opaque`] instead.
    pub const fn from_raw(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::Uint),
            2 => Some(Self::Int),
            3 => Some(Self::Float),
            4 => Some(Self::StrAddr),
            5 => Some(Self::Address),
            _ => None,
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uint => write!(f, "uint"),
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::StrAddr => write!(f, "straddr"),
            Self::Address => write!(f, "address"),
        }
    }
}

/// Wire-level tagged value.
///
/// Field order and layout are fixed: this struct is what native symbols
/// receive a pointer to and return by value. It never owns external
/// resources, so copying it is always safe.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawValue {
    /// Type kind discriminant (see [`TypeKind`]).
    pub kind: u32,
    /// Payload bit pattern; interpretation depends on `kind`.
    pub payload: u64,
}

impl RawValue {
    /// Build a raw value from an arbitrary kind discriminant and payload.
    pub const fn new(kind: u32, payload: u64) -> Self {
        Self { kind, payload }
    }

    /// Build an unsigned-integer value (kind 1).
    pub const fn uint(payload: u64) -> Self {
        Self::new(TypeKind::Uint.code(), payload)
    }
}

/// Safe view of a tagged value.
///
/// One variant per known [`TypeKind`], plus [`Value::Opaque`] carrying the
/// raw bits of any reserved kind so the boundary never drops host VM data
/// it does not understand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Value {
    /// Unsigned 64-bit integer.
    Uint(u64),
    /// Signed 64-bit integer.
    Int(i64),
    /// IEEE 754 double.
    Float(f64),
    /// VM string handle.
    StrAddr(u64),
    /// VM heap address.
    Address(u64),
    /// A kind this boundary does not interpret, preserved bit-exactly.
    Opaque {
        /// The reserved kind discriminant.
        kind: u32,
        /// The untouched payload bits.
        bits: u64,
    },
}

impl Value {
    /// Decode a wire value. Total: unrecognized kinds become [`Value::Opaque`].
    pub fn from_raw(raw: RawValue) -> Self {
        match TypeKind::from_raw(raw.kind) {
            Some(TypeKind::Uint) => Self::Uint(raw.payload),
            Some(TypeKind::Int) => Self::Int(raw.payload as i64),
            Some(TypeKind::Float) => Self::Float(f64::from_bits(raw.payload)),
            Some(TypeKind::StrAddr) => Self::StrAddr(raw.payload),
            Some(TypeKind::Address) => Self::Address(raw.payload),
            None => Self::Opaque {
                kind: raw.kind,
                bits: raw.payload,
            },
        }
    }

    /// Encode back to the wire representation.
    ///
    /// Round-trips bit-identically with [`Value::from_raw`] for every input,
    /// reserved kinds included.
    pub fn to_raw(&self) -> RawValue {
        match *self {
            Self::Uint(v) => RawValue::new(TypeKind::Uint.code(), v),
            Self::Int(v) => RawValue::new(TypeKind::Int.code(), v as u64),
            Self::Float(v) => RawValue::new(TypeKind::Float.code(), v.to_bits()),
            Self::StrAddr(v) => RawValue::new(TypeKind::StrAddr.code(), v),
            Self::Address(v) => RawValue::new(TypeKind::Address.code(), v),
            Self::Opaque { kind, bits } => RawValue::new(kind, bits),
        }
    }

    /// The payload bit pattern, regardless of kind.
    pub fn as_u64_bits(&self) -> u64 {
        self.to_raw().payload
    }

    /// The known kind of this value, or `None` for [`Value::Opaque`].
    pub fn kind(&self) -> Option<TypeKind> {
        match self {
            Self::Uint(_) => Some(TypeKind::Uint),
            Self::Int(_) => Some(TypeKind::Int),
            Self::Float(_) => Some(TypeKind::Float),
            Self::StrAddr(_) => Some(TypeKind::StrAddr),
            Self::Address(_) => Some(TypeKind::Address),
            Self::Opaque { .. } => None,
        }
    }
}

impl From<RawValue> for Value {
    fn from(raw: RawValue) -> Self {
        Self::from_raw(raw)
    }
}

impl From<Value> for RawValue {
    fn from(value: Value) -> Self {
        value.to_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_codes_match_host_registry() {
        assert_eq!(TypeKind::Uint.code(), 1);
        assert_eq!(TypeKind::Int.code(), 2);
        assert_eq!(TypeKind::Float.code(), 3);
        assert_eq!(TypeKind::StrAddr.code(), 4);
        assert_eq!(TypeKind::Address.code(), 5);
    }

    #[test]
    fn test_from_raw_rejects_reserved_codes() {
        assert_eq!(TypeKind::from_raw(1), Some(TypeKind::Uint));
        assert_eq!(TypeKind::from_raw(0), None);
        assert_eq!(TypeKind::from_raw(6), None);
        assert_eq!(TypeKind::from_raw(u32::MAX), None);
    }

    #[test]
    fn test_raw_value_layout() {
        // 4-byte kind + padding + 8-byte payload, C layout.
        assert_eq!(std::mem::size_of::<RawValue>(), 16);
        assert_eq!(std::mem::align_of::<RawValue>(), 8);
    }

    #[test]
    fn test_value_roundtrip_known_kinds() {
        let cases = [
            RawValue::uint(42),
            RawValue::new(2, (-7i64) as u64),
            RawValue::new(3, 1.5f64.to_bits()),
            RawValue::new(4, 0xdead),
            RawValue::new(5, 0xbeef),
        ];
        for raw in cases {
            assert_eq!(Value::from_raw(raw).to_raw(), raw);
        }
    }

    #[test]
    fn test_value_roundtrip_reserved_kind() {
        let raw = RawValue::new(0x99, 0xfeed_face_cafe_f00d);
        let value = Value::from_raw(raw);
        assert_eq!(
            value,
            Value::Opaque {
                kind: 0x99,
                bits: 0xfeed_face_cafe_f00d
            }
        );
        assert_eq!(value.to_raw(), raw);
        assert_eq!(value.kind(), None);
    }

    #[test]
    fn test_float_decodes_by_bit_pattern() {
        let raw = RawValue::new(3, (-2.25f64).to_bits());
        assert_eq!(Value::from_raw(raw), Value::Float(-2.25));
    }

    #[test]
    fn test_as_u64_bits() {
        assert_eq!(Value::Uint(9).as_u64_bits(), 9);
        assert_eq!(Value::Int(-1).as_u64_bits(), u64::MAX);
        assert_eq!(Value::Float(0.0).as_u64_bits(), 0);
    }

    #[test]
    fn test_value_json_shape() {
        let json = serde_json::to_string(&Value::Uint(12)).unwrap();
        assert_eq!(json, "{\"uint\":12}");
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Value::Uint(12));
    }
}
