// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::{
    protocols::layer2::dot3::header::{
        Dot3Header,
        DOT3_HEADER_SIZE,
    },
    runtime::{
        fail::Fail,
        network::types::MacAddress,
    },
};
use ::libc::EINVAL;

//======================================================================================================================
// Structures
//======================================================================================================================

/// An 802.3 frame: header followed by payload. No padding and no frame check sequence are added.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dot3Frame {
    header: Dot3Header,
    payload: Vec<u8>,
}

/// Builder for [Dot3Frame].
#[derive(Debug, Default)]
pub struct Dot3FrameBuilder {
    dst_addr: Option<MacAddress>,
    src_addr: Option<MacAddress>,
    length: Option<u16>,
    payload: Vec<u8>,
}

//======================================================================================================================
// Associated Functions
//======================================================================================================================

impl Dot3Frame {
    pub fn builder() -> Dot3FrameBuilder {
        Dot3FrameBuilder::default()
    }

    pub fn header(&self) -> &Dot3Header {
        &self.header
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Size of the serialized frame in bytes.
    pub fn compute_size(&self) -> usize {
        self.header.compute_size() + self.payload.len()
    }

    /// Serializes the frame into its wire representation.
    pub fn serialize(&self) -> Vec<u8> {
        let mut hdr_buf: [u8; DOT3_HEADER_SIZE] = [0; DOT3_HEADER_SIZE];
        self.header.serialize(&mut hdr_buf);

        let mut buf: Vec<u8> = Vec::with_capacity(self.compute_size());
        buf.extend_from_slice(&hdr_buf);
        buf.extend_from_slice(&self.payload);
        buf
    }
}

impl Dot3FrameBuilder {
    pub fn dst_addr(mut self, addr: MacAddress) -> Self {
        self.dst_addr = Some(addr);
        self
    }

    pub fn src_addr(mut self, addr: MacAddress) -> Self {
        self.src_addr = Some(addr);
        self
    }

    pub fn payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = payload;
        self
    }

    /// Forces the length field. When unset, the length field is the payload size.
    pub fn length(mut self, length: u16) -> Self {
        self.length = Some(length);
        self
    }

    pub fn build(self) -> Result<Dot3Frame, Fail> {
        let dst_addr: MacAddress = match self.dst_addr {
            Some(addr) => addr,
            None => return Err(Fail::new(EINVAL, "missing destination address")),
        };
        let src_addr: MacAddress = match self.src_addr {
            Some(addr) => addr,
            None => return Err(Fail::new(EINVAL, "missing source address")),
        };
        let length: u16 = match self.length {
            Some(length) => length,
            None => match u16::try_from(self.payload.len()) {
                Ok(length) => length,
                Err(_) => return Err(Fail::new(EINVAL, "payload does not fit the length field")),
            },
        };

        Ok(Dot3Frame {
            header: Dot3Header::new(dst_addr, src_addr, length),
            payload: self.payload,
        })
    }
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
