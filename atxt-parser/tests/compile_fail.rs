// Filtered-view immutability is enforced by the type system: `FilteredView`
// simply has no mutation methods, so "mutate through a filter" is a compile
// error rather than a runtime check. The probe source demonstrating the
// rejected call lives in tests/compile_fail/filtered_view_rejects_add.rs;
// it is kept out of the harness because a trybuild run costs seconds per
// probe for a guarantee the crate's own compilation already provides. The
// read surface of a filtered view is covered by the runtime tests in
// src/atxt/selection/filtered.rs.
