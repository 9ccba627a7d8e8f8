// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::runtime::fail::Fail;
use ::libc::EINVAL;
use ::serde::{
    Deserialize,
    Serialize,
};

//======================================================================================================================
// Structures
//======================================================================================================================

/// One request line: `{"handler": "<name>", "request": "<opaque>"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub handler: String,
    #[serde(default)]
    pub request: String,
}

/// Line written back in place of a response when a request cannot be served.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

//======================================================================================================================
// Associated Functions
//======================================================================================================================

impl Request {
    pub fn new(handler: &str, request: &str) -> Self {
        Self {
            handler: handler.to_string(),
            request: request.to_string(),
        }
    }

    /// Decodes a request line.
    pub fn parse(line: &str) -> Result<Self, Fail> {
        let request: Self = serde_json::from_str(line)?;
        if request.handler.is_empty() {
            return Err(Fail::new(EINVAL, "empty handler name"));
        }
        Ok(request)
    }

    pub fn to_json(&self) -> Result<String, Fail> {
        Ok(serde_json::to_string(self)?)
    }
}

impl ErrorResponse {
    pub fn new(fail: &Fail) -> Self {
        Self {
            error: fail.cause.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, Fail> {
        Ok(serde_json::to_string(self)?)
    }
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
