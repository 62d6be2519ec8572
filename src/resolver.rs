//! Free-text address resolution.

use std::sync::Arc;

use tracing::debug;

use crate::division::{District, Province, ResolvedAddress, Scheme, Ward};
use crate::index::DivisionIndex;
use crate::normalize::{
    normalize, strip_admin_prefix, DISTRICT_PREFIXES, PROVINCE_PREFIXES, WARD_PREFIXES,
};

/// Resolves comma-delimited Vietnamese addresses against a
/// [`DivisionIndex`].
///
/// Matching is first-match-wins with no scoring. The province is searched
/// from the last fragment backwards (addresses conventionally end with the
/// province); district and ward are searched forwards, restricted to the
/// already-matched parent's children, which keeps same-named divisions in
/// other provinces out of consideration. Ties between candidates fall to
/// dataset declaration order.
///
/// Resolution never fails: levels no fragment matches are simply left absent.
#[derive(Clone)]
pub struct AddressResolver {
    index: Arc<DivisionIndex>,
}

impl AddressResolver {
    pub fn new(index: Arc<DivisionIndex>) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &DivisionIndex {
        &self.index
    }

    /// Resolves one free-text address into division codes and a street
    /// leftover.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use vn_divisions::{AddressResolver, DivisionIndex, Province, Ward};
    ///
    /// let index = DivisionIndex::two_level(
    ///     vec![Province::new(4, "Tỉnh Cao Bằng")],
    ///     vec![Ward::new(1687, "Xã Quang Trọng", 4)],
    /// )?;
    /// let resolver = AddressResolver::new(Arc::new(index));
    ///
    /// let resolved = resolver.resolve("Xã Quang Trọng, Tỉnh Cao Bằng");
    /// assert_eq!(resolved.province_code, Some(4));
    /// assert_eq!(resolved.ward_code, Some(1687));
    /// # Ok::<(), vn_divisions::DatasetError>(())
    /// ```
    pub fn resolve(&self, address: &str) -> ResolvedAddress {
        debug!(address, "resolving address");
        let mut resolved = ResolvedAddress::empty();

        let fragments: Vec<&str> = address.split(',').map(str::trim).collect();
        let norm_fragments: Vec<String> =
            fragments.iter().map(|fragment| normalize(fragment)).collect();

        if let Some(province) = self.match_province(&norm_fragments) {
            resolved.province = Some(province.name.clone());
            resolved.province_code = Some(province.code);
        }

        match self.index.scheme() {
            Scheme::ThreeLevel => {
                if let Some(province_code) = resolved.province_code {
                    if let Some(district) = self.match_district(&norm_fragments, province_code) {
                        resolved.district = Some(district.name.clone());
                        resolved.district_code = Some(district.code);
                    }
                }
                if let Some(district_code) = resolved.district_code {
                    if let Some(ward) = self.match_ward(&norm_fragments, district_code) {
                        resolved.ward = Some(ward.name.clone());
                        resolved.ward_code = Some(ward.code);
                    }
                }
            }
            Scheme::TwoLevel => {
                if let Some(province_code) = resolved.province_code {
                    if let Some(ward) = self.match_ward(&norm_fragments, province_code) {
                        resolved.ward = Some(ward.name.clone());
                        resolved.ward_code = Some(ward.code);
                    }
                }
            }
        }

        resolved.street = extract_street(&fragments, &norm_fragments, &resolved);
        resolved
    }

    /// Resolves a batch of addresses.
    pub fn resolve_batch(&self, addresses: &[&str]) -> Vec<ResolvedAddress> {
        addresses.iter().map(|address| self.resolve(address)).collect()
    }

    /// Province search: an exact pass with honorifics stripped from both
    /// sides, then a bare-substring fallback for addresses that drop the
    /// honorific entirely ("Cao Bằng" for "Tỉnh Cao Bằng").
    ///
    /// Fragments are scanned in reverse; the rightmost match wins.
    fn match_province(&self, norm_fragments: &[String]) -> Option<&Province> {
        for fragment in norm_fragments.iter().rev() {
            let fragment = strip_admin_prefix(fragment, PROVINCE_PREFIXES);
            if fragment.is_empty() {
                continue;
            }
            for (province, norm_name) in self.index.provinces_with_norm() {
                let name = strip_admin_prefix(norm_name, PROVINCE_PREFIXES);
                if contains_either_way(fragment, name) {
                    return Some(province);
                }
            }
        }

        // Fallback: no stripping, one-directional containment, and a minimum
        // fragment length so trivial substrings ("an") cannot claim a
        // province.
        for fragment in norm_fragments.iter().rev() {
            let fragment = fragment.trim();
            if fragment.chars().count() < 3 {
                continue;
            }
            for (province, norm_name) in self.index.provinces_with_norm() {
                if norm_name.contains(fragment) {
                    return Some(province);
                }
            }
        }

        None
    }

    fn match_district(&self, norm_fragments: &[String], province_code: u32) -> Option<&District> {
        for fragment in norm_fragments {
            let fragment = strip_admin_prefix(fragment, DISTRICT_PREFIXES);
            if fragment.is_empty() {
                continue;
            }
            for (district, norm_name) in self.index.districts_of_with_norm(province_code) {
                let name = strip_admin_prefix(norm_name, DISTRICT_PREFIXES);
                if contains_either_way(fragment, name) {
                    return Some(district);
                }
            }
        }
        None
    }

    fn match_ward(&self, norm_fragments: &[String], parent_code: u32) -> Option<&Ward> {
        for fragment in norm_fragments {
            let fragment = strip_admin_prefix(fragment, WARD_PREFIXES);
            if fragment.is_empty() {
                continue;
            }
            for (ward, norm_name) in self.index.wards_of_with_norm(parent_code) {
                let name = strip_admin_prefix(norm_name, WARD_PREFIXES);
                if contains_either_way(fragment, name) {
                    return Some(ward);
                }
            }
        }
        None
    }
}

/// Symmetric containment: the fragment may carry extra text around the
/// canonical name, or be an abbreviated piece of it.
fn contains_either_way(fragment: &str, name: &str) -> bool {
    fragment.contains(name) || name.contains(fragment)
}

/// The first fragment not accounted for by any matched division becomes the
/// street. The test here is one-directional and against the original
/// (non-stripped) division names, so "Xã Quang Trọng" is consumed by the ward
/// of the same name while "456 haha" is not.
fn extract_street(
    fragments: &[&str],
    norm_fragments: &[String],
    resolved: &ResolvedAddress,
) -> Option<String> {
    let matched_names: Vec<String> = [
        resolved.province.as_deref(),
        resolved.district.as_deref(),
        resolved.ward.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(normalize)
    .collect();

    for (fragment, norm) in fragments.iter().zip(norm_fragments) {
        if fragment.is_empty() {
            continue;
        }
        let consumed = matched_names.iter().any(|name| name.contains(norm.as_str()));
        if !consumed {
            return Some((*fragment).to_string());
        }
    }
    None
}
