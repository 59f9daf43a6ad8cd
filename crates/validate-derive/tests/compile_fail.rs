//! Malformed `#[validate]` declarations must be rejected at compile time.

#[test]
fn malformed_declarations_fail_to_compile() {
    let cases = trybuild::TestCases::new();
    cases.compile_fail("tests/ui/*.rs");
}
