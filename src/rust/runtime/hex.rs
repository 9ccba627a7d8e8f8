// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::runtime::fail::Fail;
use ::libc::EINVAL;

//======================================================================================================================
// Standalone Functions
//======================================================================================================================

/// Converts every byte in `bytes` into a two-character uppercase hexadecimal string, preserving order.
pub fn to_hex_list(bytes: &[u8]) -> Vec<String> {
    bytes.iter().map(|byte| format!("{:02X}", byte)).collect()
}

/// Reverses [to_hex_list]. Fails if any element is not exactly two hexadecimal digits.
pub fn from_hex_list<S: AsRef<str>>(list: &[S]) -> Result<Vec<u8>, Fail> {
    let mut bytes: Vec<u8> = Vec::with_capacity(list.len());
    for (i, item) in list.iter().enumerate() {
        let item: &str = item.as_ref();
        let digits: Option<(u32, u32)> = match item.as_bytes() {
            [hi, lo] => char::from(*hi).to_digit(16).zip(char::from(*lo).to_digit(16)),
            _ => None,
        };
        match digits {
            Some((hi, lo)) => bytes.push(((hi << 4) | lo) as u8),
            None => {
                let cause: String = format!("invalid hex byte at index {}: {:?}", i, item);
                return Err(Fail::new(EINVAL, &cause));
            },
        }
    }
    Ok(bytes)
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
