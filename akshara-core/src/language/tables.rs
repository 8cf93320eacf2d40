//! Runtime lookup tables built from profile configuration

use crate::error::{CoreError, Result};

/// Parse a hexadecimal code point literal such as "0C15" or "U+0C15"
pub(crate) fn parse_code_point(literal: &str) -> Result<char> {
    let trimmed = literal.trim();
    let digits = trimmed
        .strip_prefix("U+")
        .or_else(|| trimmed.strip_prefix("u+"))
        .or_else(|| trimmed.strip_prefix("0x"))
        .unwrap_or(trimmed);

    u32::from_str_radix(digits, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| CoreError::InvalidCodePoint {
            literal: literal.to_string(),
        })
}

/// Sorted set of closed code point ranges
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RangeTable {
    ranges: Vec<(u32, u32)>,
}

impl RangeTable {
    /// Build from `[start, end]` literal pairs
    pub(crate) fn from_literals(pairs: &[[String; 2]]) -> Result<Self> {
        let mut ranges = Vec::with_capacity(pairs.len());
        for [start, end] in pairs {
            let start = parse_code_point(start)? as u32;
            let end = parse_code_point(end)? as u32;
            if start > end {
                return Err(CoreError::InvalidProfile {
                    code: String::new(),
                    reason: format!("range {start:04X}..{end:04X} is reversed"),
                });
            }
            ranges.push((start, end));
        }
        ranges.sort_unstable();
        Ok(Self { ranges })
    }

    /// Build from single code point literals
    pub(crate) fn from_points(points: &[String]) -> Result<Self> {
        let mut ranges = points
            .iter()
            .map(|p| parse_code_point(p).map(|c| (c as u32, c as u32)))
            .collect::<Result<Vec<_>>>()?;
        ranges.sort_unstable();
        Ok(Self { ranges })
    }

    #[inline]
    pub(crate) fn contains(&self, ch: char) -> bool {
        let cp = ch as u32;
        self.ranges
            .iter()
            .any(|&(start, end)| start <= cp && cp <= end)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// True when every range of `self` lies inside some range of `outer`
    pub(crate) fn is_within(&self, outer: &RangeTable) -> bool {
        self.ranges.iter().all(|&(start, end)| {
            outer
                .ranges
                .iter()
                .any(|&(o_start, o_end)| o_start <= start && end <= o_end)
        })
    }

    /// Every scalar covered by the table, in ascending order
    pub(crate) fn expand(&self) -> Vec<char> {
        self.ranges
            .iter()
            .flat_map(|&(start, end)| (start..=end).filter_map(char::from_u32))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: &str, b: &str) -> [String; 2] {
        [a.to_string(), b.to_string()]
    }

    #[test]
    fn test_parse_code_point_forms() {
        assert_eq!(parse_code_point("0C15").unwrap(), 'క');
        assert_eq!(parse_code_point("U+0C15").unwrap(), 'క');
        assert_eq!(parse_code_point("0x0c15").unwrap(), 'క');
        assert!(parse_code_point("D800").is_err());
        assert!(parse_code_point("xyz").is_err());
    }

    #[test]
    fn test_range_contains() {
        let table = RangeTable::from_literals(&[pair("0C15", "0C39")]).unwrap();
        assert!(table.contains('క'));
        assert!(table.contains('\u{0C39}'));
        assert!(!table.contains('అ'));
    }

    #[test]
    fn test_reversed_range_rejected() {
        assert!(RangeTable::from_literals(&[pair("0C39", "0C15")]).is_err());
    }

    #[test]
    fn test_is_within() {
        let outer = RangeTable::from_literals(&[pair("0C00", "0C7F")]).unwrap();
        let inner = RangeTable::from_literals(&[pair("0C15", "0C39")]).unwrap();
        let outside = RangeTable::from_literals(&[pair("0900", "0939")]).unwrap();
        assert!(inner.is_within(&outer));
        assert!(!outside.is_within(&outer));
    }

    #[test]
    fn test_expand_skips_gaps() {
        let table =
            RangeTable::from_literals(&[pair("0C05", "0C06"), pair("0C08", "0C08")]).unwrap();
        assert_eq!(table.expand(), vec!['అ', 'ఆ', 'ఈ']);
    }
}
