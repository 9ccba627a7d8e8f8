// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Exports
//======================================================================================================================

pub mod dot3;
pub use self::dot3::{
    frame::{
        Dot3Frame,
        Dot3FrameBuilder,
    },
    header::{
        Dot3Header,
        DOT3_HEADER_SIZE,
        MAX_PAYLOAD_SIZE,
    },
};
