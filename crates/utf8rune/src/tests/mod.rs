
/// Number of generated cases per property, scaled up on CI.
fn quickcheck_tests() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 100_000 } else { 10_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}
