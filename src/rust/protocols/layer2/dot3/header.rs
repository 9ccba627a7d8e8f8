// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::runtime::network::types::MacAddress;

//======================================================================================================================
// Constants
//======================================================================================================================

pub const DOT3_HEADER_SIZE: usize = 14;
/// Largest payload an 802.3 length field may describe; larger values are read as an EtherType.
pub const MAX_PAYLOAD_SIZE: usize = 1500;

//======================================================================================================================
// Structures
//======================================================================================================================

/// IEEE 802.3 header. Unlike Ethernet II, bytes 12..14 carry a length rather than an EtherType.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dot3Header {
    // Bytes 0..6
    dst_addr: MacAddress,
    // Bytes 6..12
    src_addr: MacAddress,
    // Bytes 12..14
    length: u16,
}

//======================================================================================================================
// Associated Functions
//======================================================================================================================

impl Dot3Header {
    /// Creates a header for an 802.3 frame. The length field is taken as given and is not checked against anything.
    pub fn new(dst_addr: MacAddress, src_addr: MacAddress, length: u16) -> Self {
        Self {
            dst_addr,
            src_addr,
            length,
        }
    }

    pub fn compute_size(&self) -> usize {
        DOT3_HEADER_SIZE
    }

    /// Writes the header into `buf`.
    pub fn serialize(&self, buf: &mut [u8; DOT3_HEADER_SIZE]) {
        buf[0..6].copy_from_slice(&self.dst_addr.octets());
        buf[6..12].copy_from_slice(&self.src_addr.octets());
        buf[12..14].copy_from_slice(&self.length.to_be_bytes());
    }

    pub fn length(&self) -> u16 {
        self.length
    }
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
