use std::fmt::Write;
use std::mem;

use serde::Serialize;

use crate::layout::{field_spans, Addresses, FieldSpan, Packed, Pair};

/// Three lowercase hex addresses, one per line, no `0x` prefix.
pub fn render(addrs: &Addresses) -> String {
    let mut out = String::new();
    for addr in [addrs.base, addrs.pair, addrs.second] {
        // Writing into a String never fails.
        let _ = writeln!(out, "{addr:x}");
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeLayout {
    pub name: &'static str,
    pub size: usize,
    pub align: usize,
}

impl TypeLayout {
    fn of<T>(name: &'static str) -> Self {
        Self {
            name,
            size: mem::size_of::<T>(),
            align: mem::align_of::<T>(),
        }
    }
}

/// Static layout of both records as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutReport {
    pub types: Vec<TypeLayout>,
    pub fields: Vec<FieldSpan>,
}

impl LayoutReport {
    pub fn collect() -> Self {
        Self {
            types: vec![TypeLayout::of::<Pair>("Pair"), TypeLayout::of::<Packed>("Packed")],
            fields: field_spans().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_three_hex_lines() {
        let addrs = Addresses { base: 0x7ffd10, pair: 0x7ffd11, second: 0x7ffd12 };
        assert_eq!(render(&addrs), "7ffd10\n7ffd11\n7ffd12\n");
    }

    #[test]
    fn test_render_is_lowercase_without_prefix() {
        let addrs = Addresses { base: 0xABCDEF, pair: 0xABCDF0, second: 0xABCDF1 };
        let out = render(&addrs);
        assert_eq!(out.lines().count(), 3);
        assert!(out.lines().all(|l| !l.starts_with("0x")));
        assert!(!out.chars().any(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_render_live_instance_parses_back() {
        let probe = Packed::new();
        let addrs = Addresses::of(&probe);
        let parsed: Vec<usize> = render(&addrs)
            .lines()
            .map(|l| usize::from_str_radix(l, 16).unwrap())
            .collect();
        assert_eq!(parsed, vec![addrs.base, addrs.pair, addrs.second]);
    }

    #[test]
    fn test_layout_report_json() {
        let value = serde_json::to_value(LayoutReport::collect()).unwrap();
        assert_eq!(
            value,
            json!({
                "types": [
                    { "name": "Pair", "size": 2, "align": 1 },
                    { "name": "Packed", "size": 3, "align": 1 }
                ],
                "fields": [
                    { "name": "lead", "offset": 0, "size": 1 },
                    { "name": "pair.first", "offset": 1, "size": 1 },
                    { "name": "pair.second", "offset": 2, "size": 1 }
                ]
            })
        );
    }
}
