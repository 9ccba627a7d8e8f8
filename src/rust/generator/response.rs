// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::runtime::{
    fail::Fail,
    hex,
};
use ::serde::{
    Deserialize,
    Serialize,
};

//======================================================================================================================
// Structures
//======================================================================================================================

/// A serialized frame as handed back to the requester.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResponseRecord {
    /// Number of bytes in the serialized frame.
    pub frame_len: usize,
    /// One two-digit uppercase hex string per serialized byte, in wire order.
    pub frame: Vec<String>,
}

//======================================================================================================================
// Associated Functions
//======================================================================================================================

impl ResponseRecord {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let frame: Vec<String> = hex::to_hex_list(bytes);
        Self {
            frame_len: frame.len(),
            frame,
        }
    }

    /// Decodes the hex list back into raw frame bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Fail> {
        hex::from_hex_list(&self.frame[..])
    }

    pub fn to_json(&self) -> Result<String, Fail> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, Fail> {
        Ok(serde_json::from_str(json)?)
    }
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
