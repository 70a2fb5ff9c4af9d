//! End-to-end integration tests
//!
//! These tests run the complete generation pipeline over predefined CSV
//! fixtures. Each test reads `input.csv` from a fixture directory, generates
//! boletos through a processing strategy and compares the output with
//! `expected.csv`.
//!
//! Fixtures in tests/fixtures/:
//! - `all_banks` - one record per supported bank
//! - `bank_variants` - portfolio prefixes, check digit exceptions, wide fields,
//!   due-date factor wrap
//! - `malformed_data` - unparseable rows and records every bank rejects,
//!   mixed with valid ones
//!
//! Each fixture is run with both the synchronous and the async strategy.

#[cfg(test)]
mod tests {
    use boleto_engine::cli::StrategyType;
    use boleto_engine::strategy::{create_strategy, AsyncProcessingStrategy, BatchConfig};
    use boleto_engine::strategy::ProcessingStrategy;
    use rstest::rstest;
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    fn fixture_paths(fixture_name: &str) -> (String, String) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.csv", fixture_dir);
        let expected_path = format!("{}/expected.csv", fixture_dir);

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );
        assert!(
            Path::new(&expected_path).exists(),
            "Expected file not found: {}",
            expected_path
        );
        (input_path, expected_path)
    }

    /// Process `fixture_name`/input.csv with `strategy` and compare with expected.csv
    fn run_test_fixture(fixture_name: &str, strategy: &dyn ProcessingStrategy, label: &str) {
        let (input_path, expected_path) = fixture_paths(fixture_name);

        let mut temp_output = NamedTempFile::new().expect("Failed to create temp file");
        strategy
            .process(Path::new(&input_path), &mut temp_output)
            .unwrap_or_else(|e| panic!("Failed to process records: {}", e));
        temp_output.flush().expect("Failed to flush temp file");

        let actual_output = fs::read_to_string(temp_output.path())
            .unwrap_or_else(|e| panic!("Failed to read temp output file: {}", e));
        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {} (strategy: {})\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, label, actual_output, expected_output
        );
    }

    #[rstest]
    #[case::all_banks("all_banks")]
    #[case::bank_variants("bank_variants")]
    #[case::malformed_data("malformed_data")]
    fn test_fixtures(
        #[case] fixture: &str,
        #[values(StrategyType::Sync, StrategyType::Async)] strategy_type: StrategyType,
    ) {
        let label = format!("{:?}", strategy_type);
        let strategy = create_strategy(strategy_type, None);
        run_test_fixture(fixture, strategy.as_ref(), &label);
    }

    /// Batches smaller than the fixture, split over several workers
    #[rstest]
    #[case::all_banks("all_banks")]
    #[case::bank_variants("bank_variants")]
    #[case::malformed_data("malformed_data")]
    fn test_fixtures_with_small_batches(
        #[case] fixture: &str,
        #[values(1, 3, 5)] batch_size: usize,
    ) {
        let strategy = AsyncProcessingStrategy::new(BatchConfig::new(batch_size, 2));
        run_test_fixture(fixture, &strategy, &format!("async, batch size {}", batch_size));
    }
}
