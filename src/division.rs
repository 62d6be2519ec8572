//! Administrative division entities and resolution results.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hierarchy shape of the reference dataset.
///
/// Vietnam used a three-tier hierarchy (province / district / ward) until the
/// 2025 reorganization collapsed it to two tiers (province / ward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Scheme {
    /// Province -> District -> Ward
    ThreeLevel,
    /// Province -> Ward
    TwoLevel,
}

/// Division level, used in lookups and integrity diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Level {
    Province,
    District,
    Ward,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Province => f.write_str("province"),
            Level::District => f.write_str("district"),
            Level::Ward => f.write_str("ward"),
        }
    }
}

/// First-level division (tỉnh / thành phố trực thuộc trung ương).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Province {
    /// Stable numeric code, unique among provinces.
    pub code: u32,
    /// Official name, diacritics and honorific included ("Tỉnh Cao Bằng").
    pub name: String,
}

impl Province {
    pub fn new(code: u32, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
        }
    }
}

/// Second-level division (huyện / quận / thị xã), three-level scheme only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct District {
    pub code: u32,
    pub name: String,
    /// Code of the owning province.
    pub province_code: u32,
}

impl District {
    pub fn new(code: u32, name: impl Into<String>, province_code: u32) -> Self {
        Self {
            code,
            name: name.into(),
            province_code,
        }
    }
}

/// Lowest-level division (phường / xã / thị trấn).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ward {
    pub code: u32,
    pub name: String,
    /// District code in the three-level scheme, province code in the
    /// two-level scheme.
    pub parent_code: u32,
}

impl Ward {
    pub fn new(code: u32, name: impl Into<String>, parent_code: u32) -> Self {
        Self {
            code,
            name: name.into(),
            parent_code,
        }
    }
}

/// Common accessor contract shared by the three division kinds.
///
/// The set of implementors is closed; generic code (the keyword filter) works
/// against this trait instead of duck-typing on fields.
pub trait Division {
    fn code(&self) -> u32;
    fn name(&self) -> &str;
    fn parent_code(&self) -> Option<u32>;
    fn level(&self) -> Level;
}

impl Division for Province {
    fn code(&self) -> u32 {
        self.code
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn parent_code(&self) -> Option<u32> {
        None
    }

    fn level(&self) -> Level {
        Level::Province
    }
}

impl Division for District {
    fn code(&self) -> u32 {
        self.code
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn parent_code(&self) -> Option<u32> {
        Some(self.province_code)
    }

    fn level(&self) -> Level {
        Level::District
    }
}

impl Division for Ward {
    fn code(&self) -> u32 {
        self.code
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn parent_code(&self) -> Option<u32> {
        Some(self.parent_code)
    }

    fn level(&self) -> Level {
        Level::Ward
    }
}

impl<T: Division + ?Sized> Division for &T {
    fn code(&self) -> u32 {
        (**self).code()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn parent_code(&self) -> Option<u32> {
        (**self).parent_code()
    }

    fn level(&self) -> Level {
        (**self).level()
    }
}

/// Outcome of resolving one free-text address.
///
/// Every field starts absent; the resolver only ever fills fields in, so a
/// level matched by an earlier pass is never retracted by a later one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResolvedAddress {
    /// Matched province name, as spelled in the dataset.
    pub province: Option<String>,
    pub province_code: Option<u32>,
    /// Matched district; always absent under [`Scheme::TwoLevel`].
    pub district: Option<String>,
    pub district_code: Option<u32>,
    pub ward: Option<String>,
    pub ward_code: Option<u32>,
    /// First fragment not accounted for by any matched division.
    pub street: Option<String>,
}

impl ResolvedAddress {
    /// Empty result, nothing matched.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_province(&self) -> bool {
        self.province_code.is_some()
    }

    pub fn has_district(&self) -> bool {
        self.district_code.is_some()
    }

    pub fn has_ward(&self) -> bool {
        self.ward_code.is_some()
    }

    /// Whether every level of the given scheme was matched.
    pub fn is_complete(&self, scheme: Scheme) -> bool {
        match scheme {
            Scheme::ThreeLevel => self.has_province() && self.has_district() && self.has_ward(),
            Scheme::TwoLevel => self.has_province() && self.has_ward(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_accessors() {
        let p = Province::new(4, "Tỉnh Cao Bằng");
        assert_eq!(p.code(), 4);
        assert_eq!(p.name(), "Tỉnh Cao Bằng");
        assert_eq!(p.parent_code(), None);
        assert_eq!(p.level(), Level::Province);

        let d = District::new(52, "Huyện Thạch An", 4);
        assert_eq!(d.parent_code(), Some(4));
        assert_eq!(d.level(), Level::District);

        let w = Ward::new(1687, "Xã Quang Trọng", 52);
        assert_eq!(w.parent_code(), Some(52));
        assert_eq!(w.level(), Level::Ward);
    }

    #[test]
    fn test_level_display() {
        assert_eq!(Level::Province.to_string(), "province");
        assert_eq!(Level::District.to_string(), "district");
        assert_eq!(Level::Ward.to_string(), "ward");
    }

    #[test]
    fn test_is_complete_per_scheme() {
        let mut r = ResolvedAddress::empty();
        r.province = Some("Tỉnh Cao Bằng".to_string());
        r.province_code = Some(4);
        r.ward = Some("Xã Quang Trọng".to_string());
        r.ward_code = Some(1687);

        assert!(r.is_complete(Scheme::TwoLevel));
        assert!(!r.is_complete(Scheme::ThreeLevel));

        r.district = Some("Huyện Thạch An".to_string());
        r.district_code = Some(52);
        assert!(r.is_complete(Scheme::ThreeLevel));
    }
}
