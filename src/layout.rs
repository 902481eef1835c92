// Byte-level layout of the probed records
use std::mem::{self, offset_of};
use std::ptr;

use serde::Serialize;

use crate::error::LayoutError;

/// Two single-byte fields, laid out contiguously.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pair {
    pub first: u8,
    pub second: u8,
}

/// A lead byte followed by an embedded `Pair`, with no padding in between.
#[repr(C, packed)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Packed {
    pub lead: u8,
    pub pair: Pair,
}

const _: () = assert!(mem::size_of::<Pair>() == 2 * mem::size_of::<u8>());
const _: () = assert!(mem::size_of::<Packed>() == mem::size_of::<u8>() + mem::size_of::<Pair>());
const _: () = assert!(mem::align_of::<Packed>() == 1);

impl Packed {
    pub const fn new() -> Self {
        Self {
            lead: 0,
            pair: Pair { first: 0, second: 0 },
        }
    }
}

/// One member of `Packed`, flattened down to its byte fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpan {
    pub name: &'static str,
    pub offset: usize,
    pub size: usize,
}

impl FieldSpan {
    pub fn end(&self) -> usize {
        self.offset + self.size
    }
}

/// Spans of `lead`, `pair.first` and `pair.second`, in declaration order.
pub fn field_spans() -> [FieldSpan; 3] {
    let pair = offset_of!(Packed, pair);
    [
        FieldSpan {
            name: "lead",
            offset: offset_of!(Packed, lead),
            size: mem::size_of::<u8>(),
        },
        FieldSpan {
            name: "pair.first",
            offset: pair + offset_of!(Pair, first),
            size: mem::size_of::<u8>(),
        },
        FieldSpan {
            name: "pair.second",
            offset: pair + offset_of!(Pair, second),
            size: mem::size_of::<u8>(),
        },
    ]
}

/// Checks that `Packed` has no gaps: spans start at 0, each one begins
/// where the previous ended, and the last one ends at the type's size.
pub fn verify() -> Result<(), LayoutError> {
    check_spans(&field_spans(), mem::size_of::<Packed>())
}

fn check_spans(spans: &[FieldSpan], total: usize) -> Result<(), LayoutError> {
    let mut cursor = 0;
    for span in spans {
        if span.offset != cursor {
            return Err(LayoutError::gap(span.name, cursor, span.offset));
        }
        cursor = span.end();
    }

    if cursor != total {
        return Err(LayoutError::SizeMismatch {
            actual: total,
            expected: cursor,
        });
    }
    Ok(())
}

/// Addresses taken from a live `Packed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Addresses {
    pub base: usize,
    pub pair: usize,
    pub second: usize,
}

impl Addresses {
    pub fn of(probe: &Packed) -> Self {
        // Raw address-of: no reference to a packed field is ever formed.
        Self {
            base: ptr::from_ref(probe) as usize,
            pair: ptr::addr_of!(probe.pair) as usize,
            second: ptr::addr_of!(probe.pair.second) as usize,
        }
    }

    pub fn check(&self) -> Result<(), LayoutError> {
        let pair = self.base + mem::size_of::<u8>();
        if self.pair != pair {
            return Err(LayoutError::gap("pair", pair, self.pair));
        }

        let second = self.pair + offset_of!(Pair, second);
        if self.second != second {
            return Err(LayoutError::gap("pair.second", second, self.second));
        }
        Ok(())
    }
}
