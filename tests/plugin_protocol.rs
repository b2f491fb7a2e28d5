mod common;

use common::{FakePipeline, FakeRegistry};
use h5blosc::include::blosc_filter::{FILTER_BLOSC, H5Z_FLAG_OPTIONAL};
use h5blosc::{
    configure_blosc_filter, register_blosc, Compressor, FilterError, FilterParams, Shuffle,
};

#[test]
fn register_reports_identity_metadata() {
    let registry = FakeRegistry::healthy();
    let identity = register_blosc(&registry).unwrap();
    assert!(!identity.version.is_empty());
    assert!(!identity.date.is_empty());
    assert_eq!(identity.version, "1.21.6");
}

#[test]
fn register_surfaces_the_raw_status_code() {
    for status in [0, -1, 2, -117] {
        let registry = FakeRegistry::failing_registration(status);
        assert_eq!(
            register_blosc(&registry),
            Err(FilterError::Register { status })
        );
    }
}

#[test]
fn configure_installs_the_expected_parameter_block() {
    let registry = FakeRegistry::healthy();
    let mut pipeline = FakePipeline::default();

    configure_blosc_filter(&registry, &mut pipeline, Compressor::Zstd, 5, Shuffle::Byte).unwrap();

    assert_eq!(pipeline.installed.len(), 1);
    let call = &pipeline.installed[0];
    assert_eq!(call.filter_id, FILTER_BLOSC);
    assert_eq!(call.flags, H5Z_FLAG_OPTIONAL);
    assert_eq!(call.cd_values, vec![0, 0, 0, 0, 5, 1, 5]);
}

#[test]
fn configure_always_passes_seven_parameters() {
    let registry = FakeRegistry::healthy();
    let compressors = [
        Compressor::BloscLz,
        Compressor::Lz4,
        Compressor::Lz4hc,
        Compressor::Snappy,
        Compressor::Zlib,
        Compressor::Zstd,
    ];
    let shuffles = [Shuffle::None, Shuffle::Byte, Shuffle::Bit];

    for compressor in compressors {
        for shuffle in shuffles {
            for clevel in [0, 1, 5, 9, 255] {
                let mut pipeline = FakePipeline::default();
                configure_blosc_filter(&registry, &mut pipeline, compressor, clevel, shuffle)
                    .unwrap();
                let call = &pipeline.installed[0];
                assert_eq!(call.cd_values.len(), 7);

                // The block must decode back to exactly what was configured.
                let params = FilterParams::from_cd_values(&call.cd_values).unwrap();
                assert_eq!(params.reserved(), [0; 4]);
                assert_eq!(params.clevel, clevel as u32);
                assert_eq!(params.shuffle, shuffle);
                assert_eq!(params.compressor, compressor);
            }
        }
    }
}

#[test]
fn negative_level_is_passed_through_unvalidated() {
    let registry = FakeRegistry::healthy();
    let mut pipeline = FakePipeline::default();

    configure_blosc_filter(&registry, &mut pipeline, Compressor::Lz4, -1, Shuffle::None).unwrap();

    assert_eq!(pipeline.installed[0].cd_values[4], u32::MAX);
}

#[test]
fn install_failure_carries_the_exact_status() {
    for status in [3, -1, 42] {
        let registry = FakeRegistry::failing_install(status);
        let mut pipeline = FakePipeline::default();
        let result =
            configure_blosc_filter(&registry, &mut pipeline, Compressor::Zlib, 4, Shuffle::Bit);
        assert_eq!(result, Err(FilterError::Install { status }));
        // The pipeline is left without the filter.
        assert!(pipeline.installed.is_empty());
    }
}

#[test]
fn repeated_registration_is_delegated_to_the_registry() {
    let registry = FakeRegistry::healthy();
    let first = register_blosc(&registry).unwrap();
    let second = register_blosc(&registry).unwrap();
    assert_eq!(first, second);
}
