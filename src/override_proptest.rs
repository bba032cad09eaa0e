//! Property-based tests for override construction and resolution.
//!
//! These tests use proptest to generate archive override declarations and
//! verify that the invariants of the archive path hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::error::Error;
    use crate::overrides::{ArchiveOverride, ArchiveParams, ModuleOverride};
    use crate::repo_spec::{attr, AttrValue};
    use crate::resolution::{resolve, ResolutionReason};
    use proptest::prelude::*;

    fn url_strategy() -> impl Strategy<Value = String> {
        (
            prop_oneof!["https", "http", "file"],
            "[a-z]{1,10}",
            "[a-z0-9]{1,8}",
        )
            .prop_map(|(scheme, host, file)| match scheme.as_str() {
                "file" => format!("file:///{}/{}.tar.gz", host, file),
                _ => format!("{}://{}.example.com/{}.tar.gz", scheme, host, file),
            })
    }

    fn integrity_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            ("sha(1|256|384|512)", "[A-Za-z0-9+/]{1,64}", "={0,2}")
                .prop_map(|(alg, digest, pad)| format!("{}-{}{}", alg, digest, pad)),
        ]
    }

    prop_compose! {
        fn archive_params()(
            urls in prop::collection::vec(url_strategy(), 1..4),
            patches in prop::collection::vec("//patches:[a-z]{1,8}\\.patch", 0..5),
            patch_cmds in prop::collection::vec("[a-z]{1,6}( [a-z/.]{1,10}){0,3}", 0..4),
            integrity in integrity_strategy(),
            strip_prefix in "([a-z0-9.-]{1,12}/)?",
            patch_strip in 0i64..10,
        ) -> ArchiveParams {
            ArchiveParams { urls, patches, patch_cmds, integrity, strip_prefix, patch_strip }
        }
    }

    proptest! {
        /// Property: equal declarations produce equal specs
        #[test]
        fn repo_spec_is_deterministic(params in archive_params()) {
            let first = ArchiveOverride::new(params.clone()).unwrap();
            let second = ArchiveOverride::new(params).unwrap();
            prop_assert_eq!(&first, &second);

            let a = resolve("foo", Some(&ModuleOverride::from(first))).unwrap();
            let b = resolve("foo", Some(&ModuleOverride::from(second))).unwrap();
            prop_assert_eq!(a, b);
        }

        /// Property: patches and patch commands keep their declared order
        #[test]
        fn patch_order_is_preserved(params in archive_params()) {
            let expected_patches = params.patches.clone();
            let expected_cmds = params.patch_cmds.clone();
            let resolution = resolve(
                "foo",
                Some(&ArchiveOverride::new(params).unwrap().into()),
            ).unwrap();
            let spec = resolution.repo_spec().unwrap();
            prop_assert_eq!(spec.list(attr::PATCHES), expected_patches.as_slice());
            prop_assert_eq!(spec.list(attr::PATCH_CMDS), expected_cmds.as_slice());
        }

        /// Property: non-negative patch strip counts pass through unchanged
        #[test]
        fn patch_strip_passes_through(params in archive_params(), strip in 0i64..=i64::MAX) {
            let archive = ArchiveOverride::new(ArchiveParams { patch_strip: strip, ..params }).unwrap();
            let spec = resolve("foo", Some(&archive.into())).unwrap().repo_spec().cloned().unwrap();
            prop_assert_eq!(spec.attribute(attr::PATCH_STRIP), Some(&AttrValue::Int(strip)));
        }

        /// Property: negative patch strip counts are always rejected
        #[test]
        fn negative_patch_strip_is_rejected(params in archive_params(), strip in i64::MIN..0) {
            let err = ArchiveOverride::new(ArchiveParams { patch_strip: strip, ..params }).unwrap_err();
            let is_patch_strip = matches!(err, Error::Validation { ref field, .. } if field == "patch_strip");
            prop_assert!(is_patch_strip);
        }

        /// Property: an empty URL list is always rejected
        #[test]
        fn empty_urls_are_rejected(params in archive_params()) {
            let err = ArchiveOverride::new(ArchiveParams { urls: vec![], ..params }).unwrap_err();
            let is_urls = matches!(err, Error::Validation { ref field, .. } if field == "urls");
            prop_assert!(is_urls);
        }

        /// Property: the archive reason does not depend on any field
        #[test]
        fn archive_reason_is_constant(params in archive_params()) {
            let archive: ModuleOverride = ArchiveOverride::new(params).unwrap().into();
            prop_assert_eq!(archive.resolution_reason(), ResolutionReason::ArchiveOverride);
            prop_assert_eq!(
                resolve("foo", Some(&archive)).unwrap().reason(),
                ResolutionReason::ArchiveOverride
            );
        }
    }
}
