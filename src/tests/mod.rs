mod phase_tests;

use super::default_filter;

#[test]
fn verbosity_maps_to_filter_levels() {
    assert_eq!(default_filter(0), "moon_phase=warn,moon_phase_lib=warn");
    assert_eq!(default_filter(1), "moon_phase=info,moon_phase_lib=info");
    assert_eq!(default_filter(2), "moon_phase=debug,moon_phase_lib=debug");
    assert_eq!(default_filter(7), "moon_phase=trace,moon_phase_lib=trace");
}
