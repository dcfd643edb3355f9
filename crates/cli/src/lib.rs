// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test-discovery and coverage-configuration resolution.
//!
//! The crate is a library first: an embedding test-runner host builds a
//! [`resolve::ConfigResolver`] over a [`preset::PresetTable`], feeds it a
//! raw [`config::TestRunConfig`], and consumes the resolved record plus its
//! two matching predicates. The binary is a thin host for inspecting
//! configurations from the command line.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod preset;
pub mod resolve;
