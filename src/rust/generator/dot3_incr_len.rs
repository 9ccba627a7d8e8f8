// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::{
    dispatch::Callback,
    generator::response::ResponseRecord,
    protocols::layer2::{
        Dot3Frame,
        MAX_PAYLOAD_SIZE,
    },
    runtime::{
        fail::Fail,
        network::types::MacAddress,
    },
};
use ::std::sync::{
    Mutex,
    MutexGuard,
};

//======================================================================================================================
// Constants
//======================================================================================================================

/// Name under which the generator registers itself by default.
pub const DOT3_INCR_LEN_NAME: &str = "dot3_incr_len";

/// Declared length of the very first frame. It sits below [MIN_LENGTH] and is never revisited after the first wrap.
pub const FIRST_LENGTH: u16 = 50;
/// Declared length that follows a wrap.
pub const MIN_LENGTH: u16 = 64;
/// Last declared length before wrapping back to [MIN_LENGTH].
pub const MAX_LENGTH: u16 = MAX_PAYLOAD_SIZE as u16;

pub const DST_ADDR: MacAddress = MacAddress::new([0xca, 0xbb, 0xbb, 0xbb, 0xbb, 0xbb]);
pub const SRC_ADDR: MacAddress = MacAddress::new([0x5a, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa]);

//======================================================================================================================
// Structures
//======================================================================================================================

/// Emits 802.3 frames whose declared length grows by one on every call, wrapping from [MAX_LENGTH] to [MIN_LENGTH].
pub struct Dot3IncrLen {
    name: String,
    /// Declared length of the next frame.
    current_length: Mutex<u16>,
}

//======================================================================================================================
// Associated Functions
//======================================================================================================================

impl Dot3IncrLen {
    pub fn new() -> Self {
        Self::with_name(DOT3_INCR_LEN_NAME)
    }

    /// Creates a generator that registers under `name`.
    pub fn with_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            current_length: Mutex::new(FIRST_LENGTH),
        }
    }

    /// Declared length the next call will use.
    pub fn current_length(&self) -> u16 {
        *self.lock()
    }

    /// Builds the next frame and advances the length counter. The request is accepted for uniformity with other
    /// callbacks and does not influence the output. The counter only moves once the frame is built.
    pub fn generate(&self, request: &str) -> Result<ResponseRecord, Fail> {
        let frame: Dot3Frame = {
            let mut current_length: MutexGuard<'_, u16> = self.lock();
            let length: u16 = *current_length;
            let frame: Dot3Frame = Self::build_frame(length)?;
            *current_length = Self::next_length(length);
            if *current_length < length {
                debug!("generate(): wrapping declared length from {:?} to {:?}", length, *current_length);
            }
            frame
        };
        trace!("generate(): length={:?} request={:?}", frame.header().length(), request);

        Ok(ResponseRecord::from_bytes(&frame.serialize()))
    }

    fn next_length(length: u16) -> u16 {
        if length >= MAX_LENGTH {
            MIN_LENGTH
        } else {
            length + 1
        }
    }

    /// Payload bytes count up from zero and wrap at 256. The length field is forced to `length` rather than derived
    /// from the payload.
    fn build_frame(length: u16) -> Result<Dot3Frame, Fail> {
        let payload: Vec<u8> = (0..usize::from(length)).map(|i| (i % 256) as u8).collect();
        Dot3Frame::builder()
            .dst_addr(DST_ADDR)
            .src_addr(SRC_ADDR)
            .payload(payload)
            .length(length)
            .build()
    }

    // The counter is a plain integer that is always left consistent, so a poisoned lock is safe to reclaim.
    fn lock(&self) -> MutexGuard<'_, u16> {
        self.current_length.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

//======================================================================================================================
// Trait Implementations
//======================================================================================================================

impl Default for Dot3IncrLen {
    fn default() -> Self {
        Self::new()
    }
}

impl Callback for Dot3IncrLen {
    fn name(&self) -> &str {
        &self.name
    }

    fn cb(&self, request: &str) -> Result<String, Fail> {
        self.generate(request)?.to_json()
    }
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
