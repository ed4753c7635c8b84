//! Workspace-level integration tests for tripbench live in `tests/`.
