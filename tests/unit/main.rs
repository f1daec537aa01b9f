//! Unit test harness — fast tests against the library with mock ports.

mod mocks;
