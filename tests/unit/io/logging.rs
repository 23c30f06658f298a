//! Tests for tracing subscriber setup

#[cfg(test)]
mod tests {
    use tomotile::TilingError;
    use tomotile::io::logging::init_logging;

    // Tests a second installation is reported instead of panicking
    // Verified by using init in place of try_init
    #[test]
    fn test_second_init_is_an_error() {
        let first = init_logging(false);
        let second = init_logging(true);

        assert!(first.is_ok());
        assert!(matches!(second, Err(TilingError::Configuration { .. })));
    }
}
