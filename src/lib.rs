//! # vn-divisions
//!
//! Vietnamese administrative-division index and free-text address resolver.
//!
//! Phân giải địa chỉ Việt Nam thành tỉnh / huyện / xã kèm mã đơn vị hành chính.
//!
//! ## Features
//!
//! - Resolve comma-delimited addresses into province, district and ward
//!   codes plus the leftover street fragment
//! - Both hierarchy schemes: three-level (province/district/ward) and the
//!   2025 two-level one (province/ward)
//! - Accent-insensitive matching ("ha noi" finds "Hà Nội") with
//!   administrative honorifics ("Tỉnh", "Huyện", "Xã", ...) handled
//! - Accent-insensitive keyword filtering over division lists
//! - Dataset validated at index construction; the index is immutable and
//!   freely shareable across threads
//!
//! ## Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use vn_divisions::{AddressResolver, DivisionIndex, District, Province, Ward};
//!
//! let index = DivisionIndex::three_level(
//!     vec![Province::new(4, "Tỉnh Cao Bằng")],
//!     vec![District::new(52, "Huyện Thạch An", 4)],
//!     vec![Ward::new(1687, "Xã Quang Trọng", 52)],
//! )?;
//! let resolver = AddressResolver::new(Arc::new(index));
//!
//! let resolved = resolver.resolve("456 haha, Xã Quang Trọng, Huyện Thạch An, Tỉnh Cao Bằng");
//! assert_eq!(resolved.province.as_deref(), Some("Tỉnh Cao Bằng"));
//! assert_eq!(resolved.district_code, Some(52));
//! assert_eq!(resolved.ward_code, Some(1687));
//! assert_eq!(resolved.street.as_deref(), Some("456 haha"));
//! # Ok::<(), vn_divisions::DatasetError>(())
//! ```
//!
//! Unmatched levels are not errors; they come back as `None`. The only
//! fallible operations are index construction and dataset parsing, which
//! reject corrupt datasets with [`DatasetError`].

mod dataset;
mod division;
mod error;
mod filter;
mod index;
pub mod normalize;
mod resolver;

pub use dataset::{parse_districts, parse_provinces, parse_wards};
pub use division::{District, Division, Level, Province, ResolvedAddress, Scheme, Ward};
pub use error::DatasetError;
pub use filter::{filter_by_keywords, filter_by_query};
pub use index::DivisionIndex;
pub use resolver::AddressResolver;

#[cfg(test)]
pub(crate) mod testdata {
    use std::sync::Arc;

    use once_cell::sync::Lazy;

    use crate::{District, DivisionIndex, Province, Ward};

    fn provinces() -> Vec<Province> {
        vec![
            Province::new(1, "Thành phố Hà Nội"),
            Province::new(4, "Tỉnh Cao Bằng"),
        ]
    }

    static THREE_LEVEL: Lazy<Arc<DivisionIndex>> = Lazy::new(|| {
        let districts = vec![
            District::new(2, "Quận Hoàn Kiếm", 1),
            District::new(45, "Huyện Bảo Lâm", 4),
            District::new(47, "Huyện Bảo Lạc", 4),
            District::new(52, "Huyện Thạch An", 4),
        ];
        let wards = vec![
            Ward::new(73, "Phường Hàng Trống", 2),
            Ward::new(1660, "Thị trấn Đông Khê", 52),
            Ward::new(1666, "Xã Lê Lai", 52),
            Ward::new(1687, "Xã Quang Trọng", 52),
        ];
        Arc::new(DivisionIndex::three_level(provinces(), districts, wards).unwrap())
    });

    static TWO_LEVEL: Lazy<Arc<DivisionIndex>> = Lazy::new(|| {
        let wards = vec![
            Ward::new(70, "Phường Hoàn Kiếm", 1),
            Ward::new(73, "Phường Hàng Trống", 1),
            Ward::new(1660, "Xã Đông Khê", 4),
            Ward::new(1687, "Xã Quang Trọng", 4),
        ];
        Arc::new(DivisionIndex::two_level(provinces(), wards).unwrap())
    });

    pub(crate) fn three_level() -> Arc<DivisionIndex> {
        Arc::clone(&THREE_LEVEL)
    }

    pub(crate) fn two_level() -> Arc<DivisionIndex> {
        Arc::clone(&TWO_LEVEL)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_csv_to_resolution_end_to_end() {
        let provinces = parse_provinces("code,name\n4,Tỉnh Cao Bằng\n").unwrap();
        let districts =
            parse_districts("code,name,province_code\n52,Huyện Thạch An,4\n").unwrap();
        let wards = parse_wards(
            "code,name,parent_code\n1660,Thị trấn Đông Khê,52\n1687,Xã Quang Trọng,52\n",
        )
        .unwrap();

        let index = DivisionIndex::three_level(provinces, districts, wards).unwrap();
        let resolver = AddressResolver::new(Arc::new(index));

        let r = resolver.resolve("Xã Quang Trọng, Huyện Thạch An, Tỉnh Cao Bằng");
        assert_eq!(r.province_code, Some(4));
        assert_eq!(r.district_code, Some(52));
        assert_eq!(r.ward_code, Some(1687));
    }

    #[test]
    fn test_index_is_shared_across_threads() {
        let resolver = AddressResolver::new(testdata::three_level());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let resolver = resolver.clone();
                std::thread::spawn(move || resolver.resolve("Huyện Thạch An, Tỉnh Cao Bằng"))
            })
            .collect();
        for handle in handles {
            let r = handle.join().unwrap();
            assert_eq!(r.district_code, Some(52));
        }
    }

    #[test]
    fn test_keyword_filter_over_index_slices() {
        let index = testdata::two_level();
        let keywords = vec!["quang".to_string(), "trong".to_string()];

        let hits: Vec<_> = filter_by_keywords(index.wards(), &keywords).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].code, 1687);
    }
}
