use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_ne!(EXIT_SUCCESS, EXIT_VALIDATION_ERROR);
    assert_ne!(EXIT_SUCCESS, EXIT_CONFIG_ERROR);
    assert_ne!(EXIT_VALIDATION_ERROR, EXIT_CONFIG_ERROR);
}

#[test]
fn public_types_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<table::Table>();
    assert_send_sync::<layout::LayoutResult>();
    assert_send_sync::<chart::BarChartPlan>();
    assert_send_sync::<style::StyleContext>();
    assert_send_sync::<PaperPlotError>();
}
