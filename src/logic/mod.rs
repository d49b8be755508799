// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! State transitions that are independent of rendering.

pub mod registry;
