//! Root test-only package. Workspace-level golden tests live in `tests/`.
