// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda
// ABOUTME: Re-exports helper modules for nutriveda-cli
// ABOUTME: Provides access to display formatting utilities

pub mod display;
