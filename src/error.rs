// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KubeMcpError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to resolve cluster credentials: {0}")]
    CredentialsError(String),

    #[error("Failed to render resource: {0}")]
    RenderError(String),
}

impl From<serde_yaml::Error> for KubeMcpError {
    fn from(e: serde_yaml::Error) -> Self {
        KubeMcpError::RenderError(e.to_string())
    }
}

impl From<serde_json::Error> for KubeMcpError {
    fn from(e: serde_json::Error) -> Self {
        KubeMcpError::RenderError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, KubeMcpError>;
