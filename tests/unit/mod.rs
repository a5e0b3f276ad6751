//! Per-module unit tests mirroring the `src/` tree
