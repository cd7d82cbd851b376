//! Tests for lookup-table construction

#[cfg(test)]
mod tests {
    use crate::ir::{ConstData, Value};
    use crate::table::{build_table_16bit, build_table_32bit, build_table_8bit, TABLE_SIZE};
    use proptest::prelude::*;

    fn entries(value: &Value) -> &[i16] {
        let constant = value.as_constant().expect("tables are constants");
        match &constant.data {
            ConstData::I16(v) => v,
            other => panic!("table payload must be i16, got {other:?}"),
        }
    }

    /// Recover the 32-bit sample encoded across the upper/lower table pair
    fn reassemble(upper: i16, lower: i16) -> i32 {
        let low = (i32::from(lower) + 0x8000) as u32 & 0xffff;
        ((i32::from(upper) as u32) << 16 | low) as i32
    }

    #[test]
    fn test_8bit_table_identity() {
        let table = build_table_8bit(1.0, 0, 1.0, 0, |x| x);
        let entries = entries(&table);

        assert_eq!(entries.len(), TABLE_SIZE);
        assert_eq!(entries[0], -256);
        assert_eq!(entries[256], 0);
        assert_eq!(entries[512], 256);
    }

    #[test]
    fn test_8bit_table_applies_zero_points() {
        // input_zp shifts the sampled domain; output_zp offsets every entry
        let table = build_table_8bit(1.0, 10, 1.0, 5, |x| x);
        let entries = entries(&table);

        // i = 0 samples func(1.0 * (0 - 10)) = -10, then +5
        assert_eq!(entries[256], -5);
    }

    #[test]
    fn test_8bit_table_clamps_overflow() {
        let table = build_table_8bit(1.0, 0, 1.0, 0, |_| 1e9);
        for &entry in entries(&table) {
            assert_eq!(entry, 32767);
        }

        let table = build_table_8bit(1.0, 0, 1.0, 0, |_| -1e9);
        for &entry in entries(&table) {
            assert_eq!(entry, -32768);
        }
    }

    #[test]
    fn test_8bit_table_type() {
        let table = build_table_8bit(0.05, 0, 0.01, 0, f64::tanh);
        let ty = table.ty();
        assert_eq!(ty.shape, vec![TABLE_SIZE as i64]);
        assert_eq!(ty.element.storage_bits(), Some(16));
    }

    #[test]
    fn test_16bit_table_constant_function() {
        let table = build_table_16bit(|_| 0.25, -8.0, 8.0);
        let entries = entries(&table);

        assert_eq!(entries.len(), TABLE_SIZE);
        // A constant function has zero interpolation error, so no bias
        for &entry in entries {
            assert_eq!(entry, (0.25f64 * 32768.0) as i16);
        }
    }

    #[test]
    fn test_16bit_table_last_entry_sampled_at_max() {
        let table = build_table_16bit(f64::tanh, -4.0, 4.0);
        let entries = entries(&table);

        let expected = (f64::tanh(4.0) * 32768.0).round() as i64;
        assert_eq!(i64::from(entries[512]), expected.clamp(-32768, 32767));
    }

    #[test]
    fn test_16bit_table_clamps_range() {
        let table = build_table_16bit(|_| 40.0, 0.0, 1.0);
        for &entry in entries(&table) {
            assert_eq!(entry, 32767);
        }
    }

    #[test]
    fn test_16bit_table_bias_compensates_interpolation_error() {
        // Put the kink of |x| at the exact midpoint of interval 256: the
        // linear interpolant overshoots the true midpoint there, and half
        // the discrepancy must be subtracted from the stored sample
        let step = 1.0 / 512.0;
        let min = -256.5 * step;
        let max = min + 1.0;
        let table = build_table_16bit(f64::abs, min, max);
        let entries = entries(&table);

        // Samples adjacent to the kink sit at |±step/2| = 32/32768; the
        // interpolated midpoint is 32 while the true value is 0, so the
        // stored sample drops from 32 to 32 - 16
        assert_eq!(entries[256], 16);
        assert_eq!(entries[257], 32);
    }

    #[test]
    fn test_32bit_table_saturated_positive() {
        let (upper, lower) = build_table_32bit(1.0, 0, |_| 1.0);
        let upper = entries(&upper);
        let lower = entries(&lower);

        assert_eq!(upper.len(), TABLE_SIZE);
        assert_eq!(lower.len(), TABLE_SIZE);

        for i in 0..TABLE_SIZE {
            assert_eq!(reassemble(upper[i], lower[i]), i32::MAX);
        }
    }

    #[test]
    fn test_32bit_table_saturated_negative() {
        let (upper, lower) = build_table_32bit(1.0, 0, |_| -1.0);
        let upper = entries(&upper);
        let lower = entries(&lower);

        for i in 0..TABLE_SIZE {
            assert_eq!(reassemble(upper[i], lower[i]), i32::MIN);
        }
    }

    #[test]
    fn test_32bit_table_zero() {
        let (upper, lower) = build_table_32bit(1.0, 0, |_| 0.0);
        let upper = entries(&upper);
        let lower = entries(&lower);

        for i in 0..TABLE_SIZE {
            assert_eq!(reassemble(upper[i], lower[i]), 0);
        }
    }

    #[test]
    fn test_32bit_table_encodes_fractions() {
        let (upper, lower) = build_table_32bit(1.0 / 256.0, 0, |x| x);
        let upper = entries(&upper);
        let lower = entries(&lower);

        // i = 128 dequantizes to 0.5, encoded as 2^30 in s0.31
        let idx = 128 + 256;
        assert_eq!(reassemble(upper[idx], lower[idx]), 1 << 30);
    }

    // Property tests

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_8bit_entries_in_range(
            input_scale in 1e-3f64..1.0,
            output_scale in 1e-3f64..1.0,
            input_zp in -128i32..128,
            output_zp in -128i32..128,
            amplitude in -1e6f64..1e6,
        ) {
            let table = build_table_8bit(
                input_scale, input_zp, output_scale, output_zp,
                |x| x * amplitude,
            );
            let constant = table.as_constant().unwrap();
            prop_assert_eq!(constant.data.len(), TABLE_SIZE);
        }

        #[test]
        fn prop_16bit_entry_count_fixed(
            min in -100.0f64..0.0,
            span in 1e-3f64..100.0,
        ) {
            let table = build_table_16bit(f64::tanh, min, min + span);
            let constant = table.as_constant().unwrap();
            prop_assert_eq!(constant.data.len(), TABLE_SIZE);
        }

        #[test]
        fn prop_32bit_reassembly_never_overflows(
            input_scale in 1e-3f64..0.1,
            input_zp in -128i32..128,
            gain in 0.1f64..100.0,
        ) {
            let (upper, lower) = build_table_32bit(
                input_scale, input_zp,
                move |x| (x * gain).sin() * gain,
            );
            let upper = match &upper.as_constant().unwrap().data {
                crate::ir::ConstData::I16(v) => v.clone(),
                _ => unreachable!(),
            };
            let lower = match &lower.as_constant().unwrap().data {
                crate::ir::ConstData::I16(v) => v.clone(),
                _ => unreachable!(),
            };

            for i in 0..TABLE_SIZE {
                let low = (i32::from(lower[i]) + 0x8000) as u32 & 0xffff;
                let value = ((i32::from(upper[i]) as u32) << 16 | low) as i32;
                // Every reassembled sample stays inside the s0.31 range
                prop_assert!(i64::from(value) <= (1i64 << 31) - 1);
                prop_assert!(i64::from(value) >= -(1i64 << 31));
            }
        }
    }
}
