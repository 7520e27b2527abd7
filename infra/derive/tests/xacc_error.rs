#[test]
fn xacc_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/xacc_error_pass.rs");
    t.pass("tests/ui/xacc_error_conversions.rs");
    t.compile_fail("tests/ui/xacc_error_not_enum.rs");
    t.compile_fail("tests/ui/xacc_error_tuple_variant.rs");
    t.compile_fail("tests/ui/xacc_error_no_context.rs");
    t.compile_fail("tests/ui/xacc_error_bad_context_type.rs");
}
