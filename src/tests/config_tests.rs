//! Configuration tests

#[cfg(test)]
mod tests {
    use crate::tests::test_utils::EXAMPLE_EPOCH;
    use crate::{ErrorKind, LayoutConfig, LayoutConfigError, SnowflakeError, SnowflakeGenerator};

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.epoch(), EXAMPLE_EPOCH);
        assert_eq!(config.machine_id_bits(), 10);
        assert_eq!(config.sequence_bits(), 12);
    }

    #[test]
    fn test_custom_config() {
        let config = LayoutConfig::builder()
            .epoch(1640995200000)
            .machine_id_bits(5)
            .sequence_bits(16)
            .build();

        assert_eq!(config.epoch(), 1640995200000);
        assert_eq!(config.machine_id_bits(), 5);
        assert_eq!(config.sequence_bits(), 16);
    }

    #[test]
    fn test_derived_constants() {
        let g = SnowflakeGenerator::new(LayoutConfig::default()).unwrap();
        assert_eq!(g.max_sequence(), 0xFFF);
        assert_eq!(g.max_machine_id(), 0x3FF);
        assert_eq!(g.layout().machine_id_shift(), 12);
        assert_eq!(g.layout().timestamp_shift(), 22);
    }

    #[test]
    fn test_generator_exposes_layout() {
        let g = SnowflakeGenerator::new(LayoutConfig::new(EXAMPLE_EPOCH, 2, 2)).unwrap();
        assert_eq!(g.epoch(), EXAMPLE_EPOCH);
        assert_eq!(g.machine_id_bits(), 2);
        assert_eq!(g.sequence_bits(), 2);
        assert_eq!(g.config(), LayoutConfig::new(EXAMPLE_EPOCH, 2, 2));
    }

    #[test]
    fn test_zero_sequence_bits_rejected() {
        let err = SnowflakeGenerator::new(LayoutConfig::new(EXAMPLE_EPOCH, 2, 0)).unwrap_err();
        assert_eq!(
            err,
            SnowflakeError::Config(LayoutConfigError::ZeroSequenceBits)
        );
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_try_build() {
        assert!(LayoutConfig::builder().try_build().is_ok());
        assert_eq!(
            LayoutConfig::builder().sequence_bits(0).try_build(),
            Err(LayoutConfigError::ZeroSequenceBits)
        );
    }

    #[test]
    fn test_layout_width_limit() {
        assert!(SnowflakeGenerator::new(LayoutConfig::new(0, 32, 32)).is_ok());
        assert!(SnowflakeGenerator::new(LayoutConfig::new(0, 0, 64)).is_ok());

        let err = SnowflakeGenerator::new(LayoutConfig::new(0, 33, 32)).unwrap_err();
        assert_eq!(
            err,
            SnowflakeError::Config(LayoutConfigError::LayoutTooWide {
                machine_id_bits: 33,
                sequence_bits: 32,
                max: 64
            })
        );
    }

    #[test]
    fn test_independent_generators_coexist() {
        let a = SnowflakeGenerator::with_machine_id(LayoutConfig::new(0, 4, 4), 1).unwrap();
        let b = SnowflakeGenerator::with_machine_id(LayoutConfig::new(100, 8, 2), 200).unwrap();

        a.generate_at(1000i64).unwrap();
        assert_eq!(a.next_sequence(), 1);
        assert_eq!(b.next_sequence(), 0);
        assert_eq!(a.machine_id(), Ok(Some(1)));
        assert_eq!(b.machine_id(), Ok(Some(200)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serde() {
        let config: LayoutConfig =
            serde_json::from_str(r#"{"epoch":1577836800000,"machineIdBits":0,"sequenceBits":2}"#)
                .unwrap();
        assert_eq!(config, LayoutConfig::new(EXAMPLE_EPOCH, 0, 2));
        assert!(SnowflakeGenerator::new(config).is_ok());
    }
}
