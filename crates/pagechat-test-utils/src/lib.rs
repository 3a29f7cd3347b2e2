// SPDX-FileCopyrightText: 2026 Pagechat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared test fixtures for the Pagechat workspace.
//!
//! Provides [`MockModelProvider`], a scripted `ModelProvider` implementation
//! enabling fast, CI-runnable tests without external API calls.

pub mod mock_provider;

pub use mock_provider::{Invocation, MockModelProvider, ScriptedResponse};
