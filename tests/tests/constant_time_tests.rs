// Entry point for the timing tests; the tests themselves live under
// tests/constant_time/. They are ignored by default since they need a
// quiet machine: run with `--ignored`.

mod constant_time;
