//! Integration test harness — drives the compiled binary end to end.
