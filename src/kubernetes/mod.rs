// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for credential resolution and resource rendering.

pub mod client;
pub mod render;
pub mod resources;

pub use client::ClusterConnector;
